//! Compact summary view and the full serialized report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::{ConfidenceAssessment, Recommendation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSummary {
    pub confidence: f64,
    pub reliability: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSummary {
    pub evidence: String,
    pub prior: f64,
    pub posterior: f64,
    pub improvement: f64,
}

/// Human-oriented view of an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSummary {
    pub recommendation: Recommendation,
    pub final_confidence: f64,
    pub posterior_probability: f64,
    pub threshold_used: f64,
    pub margin: f64,
    pub volatility_adjustment: f64,
    /// Keyed by evidence name; a later source with the same name wins.
    pub evidence_sources: BTreeMap<String, EvidenceSummary>,
    pub bayesian_updates: Vec<UpdateSummary>,
}

/// Every assessment field plus the summary, as one JSON object.
#[derive(Debug, Serialize)]
pub struct AssessmentReport<'a> {
    #[serde(flatten)]
    pub assessment: &'a ConfidenceAssessment,
    pub summary: AssessmentSummary,
}

impl ConfidenceAssessment {
    pub fn summary(&self) -> AssessmentSummary {
        let evidence_sources = self
            .evidence_sources()
            .iter()
            .map(|e| {
                (
                    e.name.clone(),
                    EvidenceSummary {
                        confidence: e.confidence,
                        reliability: e.reliability,
                        weight: e.weight,
                    },
                )
            })
            .collect();

        let bayesian_updates = self
            .bayesian_updates()
            .iter()
            .map(|u| UpdateSummary {
                evidence: u.evidence.name.clone(),
                prior: u.prior,
                posterior: u.posterior,
                improvement: u.improvement(),
            })
            .collect();

        AssessmentSummary {
            recommendation: self.recommendation(),
            final_confidence: self.final_confidence(),
            posterior_probability: self.posterior_probability(),
            threshold_used: self.threshold_used(),
            margin: self.margin(),
            volatility_adjustment: self.volatility_adjustment(),
            evidence_sources,
            bayesian_updates,
        }
    }

    pub fn report(&self) -> AssessmentReport<'_> {
        AssessmentReport {
            assessment: self,
            summary: self.summary(),
        }
    }

    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self.report())
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.report())
    }
}
