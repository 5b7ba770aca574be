//! Bounded logistic likelihood transform.
//!
//! `likelihood(e) = sigmoid(steepness * (e.confidence * e.reliability - neutral))`
//!
//! The output never reaches exactly 0 or 1, which keeps every Bayes update
//! finite. Low reliability pulls the product toward 0, so untrusted
//! evidence reads as mildly negative rather than neutral.

use wager_core::config::LikelihoodConfig;

use crate::evidence::EvidenceSource;

/// Smallest distance the likelihood keeps from 0 and 1.
const LIKELIHOOD_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LikelihoodModel {
    steepness: f64,
    neutral_point: f64,
}

impl LikelihoodModel {
    pub fn new(steepness: f64, neutral_point: f64) -> Self {
        Self {
            steepness,
            neutral_point,
        }
    }

    pub fn from_config(config: &LikelihoodConfig) -> Self {
        Self::new(config.effective_steepness(), config.effective_neutral_point())
    }

    /// Likelihood of `evidence` given the favorable outcome, in (0, 1).
    pub fn likelihood(&self, evidence: &EvidenceSource) -> f64 {
        let signal = evidence.confidence.clamp(0.0, 1.0) * evidence.reliability.clamp(0.0, 1.0);
        let raw = sigmoid(self.steepness * (signal - self.neutral_point));
        raw.clamp(LIKELIHOOD_EPSILON, 1.0 - LIKELIHOOD_EPSILON)
    }
}

impl Default for LikelihoodModel {
    fn default() -> Self {
        Self::from_config(&LikelihoodConfig::default())
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::EvidenceKind;

    fn evidence(confidence: f64, reliability: f64) -> EvidenceSource {
        EvidenceSource::new(EvidenceKind::ModelConfidence, confidence, reliability)
    }

    #[test]
    fn test_neutral_signal_is_half() {
        let model = LikelihoodModel::default();
        assert!((model.likelihood(&evidence(0.5, 1.0)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_known_value() {
        // 0.92 * 0.748 = 0.68816 → sigmoid(5 * 0.18816)
        let model = LikelihoodModel::default();
        let expected = 1.0 / (1.0 + (-5.0_f64 * (0.92 * 0.748 - 0.5)).exp());
        assert!((model.likelihood(&evidence(0.92, 0.748)) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_strictly_inside_unit_interval() {
        let steep = LikelihoodModel::new(1e6, 0.5);
        let hi = steep.likelihood(&evidence(1.0, 1.0));
        let lo = steep.likelihood(&evidence(0.0, 0.0));
        assert!(hi < 1.0 && hi > 0.5);
        assert!(lo > 0.0 && lo < 0.5);
    }

    #[test]
    fn test_monotone_in_confidence() {
        let model = LikelihoodModel::default();
        let mut last = 0.0;
        for i in 0..=20 {
            let l = model.likelihood(&evidence(i as f64 / 20.0, 0.9));
            assert!(l >= last);
            last = l;
        }
    }

    #[test]
    fn test_low_reliability_reads_negative() {
        let model = LikelihoodModel::default();
        assert!(model.likelihood(&evidence(0.9, 0.3)) < 0.5);
    }
}
