//! Additive posterior correction from categorical game context.

use wager_core::config::VolatilityConfig;

use crate::evidence::{GameContext, SeasonType};

/// Sums the applicable context terms. No clamping here; the orchestrator
/// clamps once the correction is added to the posterior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatilityAdjuster {
    preseason: f64,
    playoffs: f64,
    back_to_back: f64,
    high_visibility: f64,
}

impl VolatilityAdjuster {
    pub fn from_config(config: &VolatilityConfig) -> Self {
        Self {
            preseason: config.effective_preseason(),
            playoffs: config.effective_playoffs(),
            back_to_back: config.effective_back_to_back(),
            high_visibility: config.effective_high_visibility(),
        }
    }

    pub fn adjustment(&self, context: &GameContext) -> f64 {
        let mut total = match context.season_type {
            SeasonType::Preseason => self.preseason,
            SeasonType::Playoffs => self.playoffs,
            SeasonType::Regular | SeasonType::Other(_) => 0.0,
        };
        if context.back_to_back {
            total += self.back_to_back;
        }
        if context.high_visibility {
            total += self.high_visibility;
        }
        total
    }
}

impl Default for VolatilityAdjuster {
    fn default() -> Self {
        Self::from_config(&VolatilityConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_season_is_zero() {
        assert_eq!(VolatilityAdjuster::default().adjustment(&GameContext::default()), 0.0);
    }

    #[test]
    fn test_preseason_penalty_exact() {
        let adj = VolatilityAdjuster::default().adjustment(&GameContext::season("preseason"));
        assert_eq!(adj, -0.08);
    }

    #[test]
    fn test_playoff_boost_exact() {
        let adj = VolatilityAdjuster::default().adjustment(&GameContext::season("playoffs"));
        assert_eq!(adj, 0.05);
    }

    #[test]
    fn test_terms_sum() {
        let ctx = GameContext {
            season_type: SeasonType::Preseason,
            back_to_back: true,
            high_visibility: true,
        };
        let adj = VolatilityAdjuster::default().adjustment(&ctx);
        assert!((adj - (-0.08 - 0.03 + 0.02)).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_season_has_no_term() {
        let ctx = GameContext {
            season_type: SeasonType::Other("all_star".to_string()),
            back_to_back: true,
            high_visibility: false,
        };
        assert_eq!(VolatilityAdjuster::default().adjustment(&ctx), -0.03);
    }
}
