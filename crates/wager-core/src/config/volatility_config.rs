//! Game-context volatility configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BACK_TO_BACK_ADJUSTMENT, DEFAULT_HIGH_VISIBILITY_ADJUSTMENT,
    DEFAULT_PLAYOFFS_ADJUSTMENT, DEFAULT_PRESEASON_ADJUSTMENT,
};

/// Additive posterior corrections per context flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VolatilityConfig {
    /// Default: -0.08.
    pub preseason: Option<f64>,
    /// Default: +0.05.
    pub playoffs: Option<f64>,
    /// Default: -0.03.
    pub back_to_back: Option<f64>,
    /// Default: +0.02.
    pub high_visibility: Option<f64>,
}

impl VolatilityConfig {
    pub fn effective_preseason(&self) -> f64 {
        self.preseason.unwrap_or(DEFAULT_PRESEASON_ADJUSTMENT)
    }

    pub fn effective_playoffs(&self) -> f64 {
        self.playoffs.unwrap_or(DEFAULT_PLAYOFFS_ADJUSTMENT)
    }

    pub fn effective_back_to_back(&self) -> f64 {
        self.back_to_back.unwrap_or(DEFAULT_BACK_TO_BACK_ADJUSTMENT)
    }

    pub fn effective_high_visibility(&self) -> f64 {
        self.high_visibility
            .unwrap_or(DEFAULT_HIGH_VISIBILITY_ADJUSTMENT)
    }
}
