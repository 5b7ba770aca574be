//! Configuration system for wager.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod likelihood_config;
pub mod normalizer_config;
pub mod threshold_config;
pub mod volatility_config;
pub mod wager_config;

pub use likelihood_config::LikelihoodConfig;
pub use normalizer_config::NormalizerConfig;
pub use threshold_config::ThresholdConfig;
pub use volatility_config::VolatilityConfig;
pub use wager_config::{ConfigOverrides, WagerConfig};
