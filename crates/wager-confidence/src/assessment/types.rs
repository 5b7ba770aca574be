//! The final assessment record.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bayes::BayesianUpdate;
use crate::evidence::EvidenceSource;

/// Metadata keys written by the orchestrator.
pub mod meta_keys {
    pub const INITIAL_PRIOR: &str = "initial_prior";
    pub const EVIDENCE_COUNT: &str = "evidence_count";
    pub const AVERAGE_RELIABILITY: &str = "average_reliability";
    pub const GAME_CONTEXT: &str = "game_context";
    pub const NO_EVIDENCE_SOURCES: &str = "no_evidence_sources";
    pub const WARNINGS: &str = "warnings";
}

/// Binary outcome of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Proceed,
    Flag,
}

impl Recommendation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Proceed => "PROCEED",
            Self::Flag => "FLAG",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one `assess()` call. Read-only once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceAssessment {
    final_confidence: f64,
    posterior_probability: f64,
    should_flag: bool,
    threshold_used: f64,
    volatility_adjustment: f64,
    evidence_sources: Vec<EvidenceSource>,
    bayesian_updates: Vec<BayesianUpdate>,
    metadata: BTreeMap<String, Value>,
}

impl ConfidenceAssessment {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        final_confidence: f64,
        posterior_probability: f64,
        should_flag: bool,
        threshold_used: f64,
        volatility_adjustment: f64,
        evidence_sources: Vec<EvidenceSource>,
        bayesian_updates: Vec<BayesianUpdate>,
        metadata: BTreeMap<String, Value>,
    ) -> Self {
        Self {
            final_confidence,
            posterior_probability,
            should_flag,
            threshold_used,
            volatility_adjustment,
            evidence_sources,
            bayesian_updates,
            metadata,
        }
    }

    /// Posterior plus volatility adjustment, clamped to [0, 1].
    pub fn final_confidence(&self) -> f64 {
        self.final_confidence
    }

    /// Posterior before the volatility adjustment.
    pub fn posterior_probability(&self) -> f64 {
        self.posterior_probability
    }

    pub fn should_flag(&self) -> bool {
        self.should_flag
    }

    pub fn threshold_used(&self) -> f64 {
        self.threshold_used
    }

    pub fn volatility_adjustment(&self) -> f64 {
        self.volatility_adjustment
    }

    /// Evidence in the order the normalizers produced it.
    pub fn evidence_sources(&self) -> &[EvidenceSource] {
        &self.evidence_sources
    }

    /// Update chain in application order.
    pub fn bayesian_updates(&self) -> &[BayesianUpdate] {
        &self.bayesian_updates
    }

    pub fn metadata(&self) -> &BTreeMap<String, Value> {
        &self.metadata
    }

    pub fn recommendation(&self) -> Recommendation {
        if self.should_flag {
            Recommendation::Flag
        } else {
            Recommendation::Proceed
        }
    }

    /// `final_confidence - threshold_used`; negative when flagged on confidence.
    pub fn margin(&self) -> f64 {
        self.final_confidence - self.threshold_used
    }

    pub fn has_evidence(&self) -> bool {
        !self.evidence_sources.is_empty()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.metadata
            .get(meta_keys::WARNINGS)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}
