//! Context adjustments: additive volatility correction and the dynamic
//! decision threshold.

pub mod threshold;
pub mod volatility;

pub use threshold::ThresholdCalculator;
pub use volatility::VolatilityAdjuster;
