//! Decision threshold configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASE_THRESHOLD, DEFAULT_HIGH_RELIABILITY_CUTOFF, DEFAULT_LOW_RELIABILITY_CUTOFF,
    DEFAULT_PLAYOFF_RELIEF, DEFAULT_PRESEASON_RAISE, DEFAULT_RELIABILITY_STEP,
    DEFAULT_THRESHOLD_CEILING, DEFAULT_THRESHOLD_FLOOR,
};

/// Configuration for the threshold calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Threshold before adjustments. Default: 0.6.
    pub base_threshold: Option<f64>,
    /// Average reliability above which the threshold drops. Default: 0.8.
    pub high_reliability_cutoff: Option<f64>,
    /// Average reliability below which the threshold rises. Default: 0.6.
    pub low_reliability_cutoff: Option<f64>,
    /// Shift applied at either reliability cutoff. Default: 0.05.
    pub reliability_step: Option<f64>,
    /// Preseason raise. Default: 0.05.
    pub preseason_raise: Option<f64>,
    /// Playoff relief. Default: 0.03.
    pub playoff_relief: Option<f64>,
    /// Lower clamp. Default: 0.3.
    pub floor: Option<f64>,
    /// Upper clamp. Default: 0.8.
    pub ceiling: Option<f64>,
}

impl ThresholdConfig {
    pub fn effective_base_threshold(&self) -> f64 {
        self.base_threshold.unwrap_or(DEFAULT_BASE_THRESHOLD)
    }

    pub fn effective_high_reliability_cutoff(&self) -> f64 {
        self.high_reliability_cutoff
            .unwrap_or(DEFAULT_HIGH_RELIABILITY_CUTOFF)
    }

    pub fn effective_low_reliability_cutoff(&self) -> f64 {
        self.low_reliability_cutoff
            .unwrap_or(DEFAULT_LOW_RELIABILITY_CUTOFF)
    }

    pub fn effective_reliability_step(&self) -> f64 {
        self.reliability_step.unwrap_or(DEFAULT_RELIABILITY_STEP)
    }

    pub fn effective_preseason_raise(&self) -> f64 {
        self.preseason_raise.unwrap_or(DEFAULT_PRESEASON_RAISE)
    }

    pub fn effective_playoff_relief(&self) -> f64 {
        self.playoff_relief.unwrap_or(DEFAULT_PLAYOFF_RELIEF)
    }

    pub fn effective_floor(&self) -> f64 {
        self.floor.unwrap_or(DEFAULT_THRESHOLD_FLOOR)
    }

    pub fn effective_ceiling(&self) -> f64 {
        self.ceiling.unwrap_or(DEFAULT_THRESHOLD_CEILING)
    }
}
