//! Dynamic decision threshold.

use wager_core::config::ThresholdConfig;

use crate::evidence::{GameContext, SeasonType};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdCalculator {
    base: f64,
    high_reliability_cutoff: f64,
    low_reliability_cutoff: f64,
    reliability_step: f64,
    preseason_raise: f64,
    playoff_relief: f64,
    floor: f64,
    ceiling: f64,
}

impl ThresholdCalculator {
    pub fn from_config(config: &ThresholdConfig) -> Self {
        Self {
            base: config.effective_base_threshold(),
            high_reliability_cutoff: config.effective_high_reliability_cutoff(),
            low_reliability_cutoff: config.effective_low_reliability_cutoff(),
            reliability_step: config.effective_reliability_step(),
            preseason_raise: config.effective_preseason_raise(),
            playoff_relief: config.effective_playoff_relief(),
            floor: config.effective_floor(),
            ceiling: config.effective_ceiling(),
        }
    }

    /// Trusted evidence lowers the bar, shaky evidence raises it, and the
    /// season phase shifts it further. Result is clamped to [floor, ceiling].
    pub fn threshold(&self, avg_reliability: f64, context: &GameContext) -> f64 {
        let mut threshold = self.base;

        if avg_reliability > self.high_reliability_cutoff {
            threshold -= self.reliability_step;
        }
        if avg_reliability < self.low_reliability_cutoff {
            threshold += self.reliability_step;
        }

        match context.season_type {
            SeasonType::Preseason => threshold += self.preseason_raise,
            SeasonType::Playoffs => threshold -= self.playoff_relief,
            SeasonType::Regular | SeasonType::Other(_) => {}
        }

        threshold.clamp(self.floor, self.ceiling)
    }
}

impl Default for ThresholdCalculator {
    fn default() -> Self {
        Self::from_config(&ThresholdConfig::default())
    }
}
