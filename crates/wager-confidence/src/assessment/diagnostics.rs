//! Aggregate diagnostics over a batch of assessments.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::ConfidenceAssessment;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchDiagnostics {
    pub total: usize,
    pub flagged: usize,
    pub flag_rate: f64,
    pub avg_final_confidence: f64,
    pub avg_margin: f64,
    pub avg_evidence_count: f64,
    /// Assessments that ran with no evidence at all.
    pub no_evidence: usize,
    /// Total sanitization warnings across the batch.
    pub warnings: usize,
}

impl BatchDiagnostics {
    pub fn from_assessments(assessments: &[ConfidenceAssessment]) -> Self {
        let total = assessments.len();
        if total == 0 {
            return Self::default();
        }

        let flagged = assessments.iter().filter(|a| a.should_flag()).count();
        let no_evidence = assessments.iter().filter(|a| !a.has_evidence()).count();
        let warnings = assessments.iter().map(|a| a.warnings().len()).sum();
        let n = total as f64;

        Self {
            total,
            flagged,
            flag_rate: flagged as f64 / n,
            avg_final_confidence: assessments.iter().map(|a| a.final_confidence()).sum::<f64>() / n,
            avg_margin: assessments.iter().map(|a| a.margin()).sum::<f64>() / n,
            avg_evidence_count: assessments
                .iter()
                .map(|a| a.evidence_sources().len() as f64)
                .sum::<f64>()
                / n,
            no_evidence,
            warnings,
        }
    }
}

impl fmt::Display for BatchDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BatchDiagnostics {{ total={}, flagged={}, flag_rate={:.3}, avg_confidence={:.3}, avg_margin={:.3}, no_evidence={}, warnings={} }}",
            self.total,
            self.flagged,
            self.flag_rate,
            self.avg_final_confidence,
            self.avg_margin,
            self.no_evidence,
            self.warnings,
        )
    }
}
