//! Likelihood transform configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LIKELIHOOD_STEEPNESS, DEFAULT_NEUTRAL_POINT};

/// Configuration for the logistic likelihood model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LikelihoodConfig {
    /// Logistic steepness. Default: 5.0.
    pub steepness: Option<f64>,
    /// Center of the curve. Default: 0.5.
    pub neutral_point: Option<f64>,
}

impl LikelihoodConfig {
    pub fn effective_steepness(&self) -> f64 {
        self.steepness.unwrap_or(DEFAULT_LIKELIHOOD_STEEPNESS)
    }

    pub fn effective_neutral_point(&self) -> f64 {
        self.neutral_point.unwrap_or(DEFAULT_NEUTRAL_POINT)
    }
}
