//! Top-level wager configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{LikelihoodConfig, NormalizerConfig, ThresholdConfig, VolatilityConfig};
use crate::constants::{MAX_VOLATILITY_TERM, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`WAGER_*`)
/// 3. Project config (`wager.toml` in the project root)
/// 4. User config (`~/.wager/config.toml`)
/// 5. Compiled defaults
///
/// The resolved value is handed to the engine once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WagerConfig {
    pub threshold: ThresholdConfig,
    pub likelihood: LikelihoodConfig,
    pub normalizer: NormalizerConfig,
    pub volatility: VolatilityConfig,
}

/// Caller-supplied overrides with the highest priority.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_threshold: Option<f64>,
    pub likelihood_steepness: Option<f64>,
    pub price_sensitivity: Option<f64>,
}

impl WagerConfig {
    /// Load configuration with layered resolution, reading the user config
    /// from `~/.wager/config.toml`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        Self::load_with_user_dir(root, user_config_dir().as_deref(), overrides)
    }

    /// Load configuration with an explicit user config directory.
    pub fn load_with_user_dir(
        root: &Path,
        user_dir: Option<&Path>,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(dir) = user_dir {
            let user_config_path = dir.join("config.toml");
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

        // Layer 1 (highest priority): explicit overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the effective configuration values.
    pub fn validate(config: &WagerConfig) -> Result<(), ConfigError> {
        let t = &config.threshold;
        check_unit("threshold.base_threshold", t.effective_base_threshold())?;
        check_unit(
            "threshold.high_reliability_cutoff",
            t.effective_high_reliability_cutoff(),
        )?;
        check_unit(
            "threshold.low_reliability_cutoff",
            t.effective_low_reliability_cutoff(),
        )?;
        check_unit("threshold.reliability_step", t.effective_reliability_step())?;
        check_unit("threshold.preseason_raise", t.effective_preseason_raise())?;
        check_unit("threshold.playoff_relief", t.effective_playoff_relief())?;
        check_unit("threshold.floor", t.effective_floor())?;
        check_unit("threshold.ceiling", t.effective_ceiling())?;
        if t.effective_floor() > t.effective_ceiling() {
            return Err(ConfigError::ValidationFailed {
                field: "threshold.floor".to_string(),
                message: "must not exceed threshold.ceiling".to_string(),
            });
        }

        let steepness = config.likelihood.effective_steepness();
        if !steepness.is_finite() || steepness <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "likelihood.steepness".to_string(),
                message: "must be a positive finite number".to_string(),
            });
        }
        check_unit(
            "likelihood.neutral_point",
            config.likelihood.effective_neutral_point(),
        )?;

        let n = &config.normalizer;
        check_unit(
            "normalizer.model_base_reliability",
            n.effective_model_base_reliability(),
        )?;
        check_unit(
            "normalizer.retrieval_base_reliability",
            n.effective_retrieval_base_reliability(),
        )?;
        check_unit(
            "normalizer.price_base_reliability",
            n.effective_price_base_reliability(),
        )?;
        check_unit(
            "normalizer.retrieval_relevance_cutoff",
            n.effective_retrieval_relevance_cutoff(),
        )?;
        let sensitivity = n.effective_price_sensitivity();
        if !sensitivity.is_finite() || sensitivity < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "normalizer.price_sensitivity".to_string(),
                message: "must be a non-negative finite number".to_string(),
            });
        }

        let v = &config.volatility;
        for (field, value) in [
            ("volatility.preseason", v.effective_preseason()),
            ("volatility.playoffs", v.effective_playoffs()),
            ("volatility.back_to_back", v.effective_back_to_back()),
            ("volatility.high_visibility", v.effective_high_visibility()),
        ] {
            if !value.is_finite() || value.abs() > MAX_VOLATILITY_TERM {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: format!("magnitude must be at most {MAX_VOLATILITY_TERM}"),
                });
            }
        }

        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut WagerConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: WagerConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut WagerConfig, other: &WagerConfig) {
        let (bt, ot) = (&mut base.threshold, &other.threshold);
        overlay(&mut bt.base_threshold, ot.base_threshold);
        overlay(&mut bt.high_reliability_cutoff, ot.high_reliability_cutoff);
        overlay(&mut bt.low_reliability_cutoff, ot.low_reliability_cutoff);
        overlay(&mut bt.reliability_step, ot.reliability_step);
        overlay(&mut bt.preseason_raise, ot.preseason_raise);
        overlay(&mut bt.playoff_relief, ot.playoff_relief);
        overlay(&mut bt.floor, ot.floor);
        overlay(&mut bt.ceiling, ot.ceiling);

        let (bl, ol) = (&mut base.likelihood, &other.likelihood);
        overlay(&mut bl.steepness, ol.steepness);
        overlay(&mut bl.neutral_point, ol.neutral_point);

        let (bn, on) = (&mut base.normalizer, &other.normalizer);
        overlay(&mut bn.model_base_reliability, on.model_base_reliability);
        overlay(&mut bn.retrieval_base_reliability, on.retrieval_base_reliability);
        overlay(&mut bn.price_base_reliability, on.price_base_reliability);
        overlay(&mut bn.price_sensitivity, on.price_sensitivity);
        overlay(&mut bn.retrieval_relevance_cutoff, on.retrieval_relevance_cutoff);

        let (bv, ov) = (&mut base.volatility, &other.volatility);
        overlay(&mut bv.preseason, ov.preseason);
        overlay(&mut bv.playoffs, ov.playoffs);
        overlay(&mut bv.back_to_back, ov.back_to_back);
        overlay(&mut bv.high_visibility, ov.high_visibility);
    }

    /// Apply environment variable overrides.
    /// Pattern: `WAGER_THRESHOLD_BASE`, `WAGER_LIKELIHOOD_STEEPNESS`, etc.
    /// A set but unparseable value is an `InvalidValue` error.
    pub fn apply_env_overrides<F>(config: &mut WagerConfig, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse = |key: &str| -> Result<Option<f64>, ConfigError> {
            match lookup(key) {
                None => Ok(None),
                Some(raw) => raw.trim().parse::<f64>().map(Some).map_err(|e| {
                    ConfigError::InvalidValue {
                        field: key.to_string(),
                        message: format!("{raw:?} is not a number: {e}"),
                    }
                }),
            }
        };

        overlay(&mut config.threshold.base_threshold, parse("WAGER_THRESHOLD_BASE")?);
        overlay(&mut config.likelihood.steepness, parse("WAGER_LIKELIHOOD_STEEPNESS")?);
        overlay(&mut config.normalizer.price_sensitivity, parse("WAGER_PRICE_SENSITIVITY")?);
        Ok(())
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut WagerConfig, o: &ConfigOverrides) {
        overlay(&mut config.threshold.base_threshold, o.base_threshold);
        overlay(&mut config.likelihood.steepness, o.likelihood_steepness);
        overlay(&mut config.normalizer.price_sensitivity, o.price_sensitivity);
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn overlay(base: &mut Option<f64>, other: Option<f64>) {
    if other.is_some() {
        *base = other;
    }
}

fn check_unit(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be between 0.0 and 1.0".to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.wager/`.
fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|h| PathBuf::from(h).join(".wager"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = WagerConfig::default();
        assert!(WagerConfig::validate(&config).is_ok());
        assert_eq!(config.threshold.effective_base_threshold(), 0.6);
        assert_eq!(config.likelihood.effective_steepness(), 5.0);
        assert_eq!(config.normalizer.effective_price_sensitivity(), 0.1);
        assert_eq!(config.volatility.effective_preseason(), -0.08);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = WagerConfig::from_toml(
            r#"
            [threshold]
            base_threshold = 0.55
            "#,
        )
        .unwrap();
        assert_eq!(config.threshold.effective_base_threshold(), 0.55);
        assert_eq!(config.threshold.effective_floor(), 0.3);
        assert_eq!(config.likelihood.effective_neutral_point(), 0.5);
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let err = WagerConfig::from_toml("[threshold]\nbase_threshold = 1.4\n").unwrap_err();
        match err {
            ConfigError::ValidationFailed { field, .. } => {
                assert_eq!(field, "threshold.base_threshold")
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_floor_above_ceiling_rejected() {
        let err =
            WagerConfig::from_toml("[threshold]\nfloor = 0.9\nceiling = 0.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }));
    }

    #[test]
    fn test_non_positive_steepness_rejected() {
        let err = WagerConfig::from_toml("[likelihood]\nsteepness = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("likelihood.steepness"));
    }

    #[test]
    fn test_oversized_volatility_term_rejected() {
        let err = WagerConfig::from_toml("[volatility]\nplayoffs = 0.4\n").unwrap_err();
        assert!(err.to_string().contains("volatility.playoffs"));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = WagerConfig::from_toml("[threshold\nbase = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_env_overrides_apply() {
        let mut config = WagerConfig::default();
        WagerConfig::apply_env_overrides(&mut config, |key| match key {
            "WAGER_THRESHOLD_BASE" => Some("0.65".to_string()),
            "WAGER_PRICE_SENSITIVITY" => Some(" 0.2 ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.threshold.base_threshold, Some(0.65));
        assert_eq!(config.normalizer.price_sensitivity, Some(0.2));
        assert_eq!(config.likelihood.steepness, None);
    }

    #[test]
    fn test_unparseable_env_value_is_invalid_value() {
        let mut config = WagerConfig::default();
        let err = WagerConfig::apply_env_overrides(&mut config, |key| match key {
            "WAGER_LIKELIHOOD_STEEPNESS" => Some("steep".to_string()),
            _ => None,
        })
        .unwrap_err();
        match err {
            ConfigError::InvalidValue { field, message } => {
                assert_eq!(field, "WAGER_LIKELIHOOD_STEEPNESS");
                assert!(message.contains("steep"));
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
        assert_eq!(config.likelihood.steepness, None);
    }

    #[test]
    fn test_overrides_beat_file_values() {
        let mut config = WagerConfig::from_toml("[threshold]\nbase_threshold = 0.5\n").unwrap();
        WagerConfig::apply_overrides(
            &mut config,
            &ConfigOverrides {
                base_threshold: Some(0.7),
                ..Default::default()
            },
        );
        assert_eq!(config.threshold.effective_base_threshold(), 0.7);
    }

    #[test]
    fn test_toml_roundtrip_preserves_values() {
        let config = WagerConfig::from_toml(
            "[normalizer]\nprice_sensitivity = 0.2\n[volatility]\nback_to_back = -0.05\n",
        )
        .unwrap();
        let text = config.to_toml().unwrap();
        let reparsed = WagerConfig::from_toml(&text).unwrap();
        assert_eq!(config, reparsed);
    }
}
