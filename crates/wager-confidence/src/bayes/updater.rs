//! Sequential Bayesian updater.
//!
//! Evidence is applied most-trustworthy first (`reliability * weight`,
//! descending, stable). Each step is a Bayes update followed by a trust
//! interpolation toward the previous estimate:
//!
//! ```text
//! marginal  = L*p + (1-L)*(1-p)            (floored at 1e-10)
//! raw       = L*p / marginal
//! posterior = w*raw + (1-w)*p               (only when w != 1)
//! ```
//!
//! The interpolation is not a proper Bayesian combination rule and makes
//! the result depend on application order. Both are kept deliberately:
//! strong evidence anchors the estimate before weaker evidence nudges it,
//! and the calibration of downstream thresholds assumes this behavior.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::evidence::{EvidenceKind, EvidenceSource};

use super::likelihood::LikelihoodModel;

/// Floor on the marginal probability.
const MIN_MARGINAL: f64 = 1e-10;

/// Posterior reported when there is no evidence at all.
pub const NO_EVIDENCE_POSTERIOR: f64 = 0.5;

/// One step of the update chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BayesianUpdate {
    pub prior: f64,
    pub likelihood: f64,
    pub posterior: f64,
    pub evidence: EvidenceSource,
    pub timestamp: DateTime<Utc>,
}

impl BayesianUpdate {
    /// Posterior minus prior.
    pub fn improvement(&self) -> f64 {
        self.posterior - self.prior
    }
}

/// Result of running the updater.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateChain {
    pub initial_prior: f64,
    pub posterior: f64,
    pub updates: Vec<BayesianUpdate>,
}

impl UpdateChain {
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

/// Mean of the type priors of the evidence kinds present. Each kind counts
/// once no matter how many sources share it. 0.5 when there is no evidence.
pub fn initial_prior(evidence: &[EvidenceSource]) -> f64 {
    let kinds: BTreeSet<EvidenceKind> = evidence.iter().map(|e| e.kind).collect();
    if kinds.is_empty() {
        return NO_EVIDENCE_POSTERIOR;
    }
    kinds.iter().map(|k| k.prior()).sum::<f64>() / kinds.len() as f64
}

#[derive(Debug, Clone, Default)]
pub struct SequentialUpdater {
    likelihood: LikelihoodModel,
}

impl SequentialUpdater {
    pub fn new(likelihood: LikelihoodModel) -> Self {
        Self { likelihood }
    }

    pub fn likelihood_model(&self) -> &LikelihoodModel {
        &self.likelihood
    }

    /// Evidence in application order: descending `reliability * weight`,
    /// ties kept in input order.
    pub fn application_order(evidence: &[EvidenceSource]) -> Vec<&EvidenceSource> {
        let mut ordered: Vec<&EvidenceSource> = evidence.iter().collect();
        ordered.sort_by(|a, b| b.trust().total_cmp(&a.trust()));
        ordered
    }

    /// One Bayes step plus trust interpolation. Returns (likelihood, posterior).
    pub fn step(&self, prior: f64, evidence: &EvidenceSource) -> (f64, f64) {
        let likelihood = self.likelihood.likelihood(evidence);
        let marginal = (likelihood * prior + (1.0 - likelihood) * (1.0 - prior)).max(MIN_MARGINAL);
        let raw = likelihood * prior / marginal;

        let weight = evidence.interpolation_weight();
        let posterior = if weight != 1.0 {
            weight * raw + (1.0 - weight) * prior
        } else {
            raw
        };

        (likelihood, posterior.clamp(0.0, 1.0))
    }

    /// Run the full chain from the kind-averaged initial prior.
    pub fn run(&self, evidence: &[EvidenceSource], timestamp: DateTime<Utc>) -> UpdateChain {
        self.run_from(initial_prior(evidence), evidence, timestamp)
    }

    /// Run the full chain from an explicit prior.
    pub fn run_from(
        &self,
        initial_prior: f64,
        evidence: &[EvidenceSource],
        timestamp: DateTime<Utc>,
    ) -> UpdateChain {
        if evidence.is_empty() {
            return UpdateChain {
                initial_prior,
                posterior: NO_EVIDENCE_POSTERIOR,
                updates: Vec::new(),
            };
        }

        let mut prior = initial_prior.clamp(0.0, 1.0);
        let mut updates = Vec::with_capacity(evidence.len());

        for e in Self::application_order(evidence) {
            let (likelihood, posterior) = self.step(prior, e);
            tracing::trace!(
                evidence = %e.name,
                prior,
                likelihood,
                posterior,
                "bayesian update"
            );
            updates.push(BayesianUpdate {
                prior,
                likelihood,
                posterior,
                evidence: e.clone(),
                timestamp,
            });
            prior = posterior;
        }

        UpdateChain {
            initial_prior,
            posterior: prior,
            updates,
        }
    }
}
