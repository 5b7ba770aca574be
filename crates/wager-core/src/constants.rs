//! Shared constants for the wager engine.

/// Engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Decision thresholds ----

/// Default decision threshold before reliability and context adjustments.
pub const DEFAULT_BASE_THRESHOLD: f64 = 0.6;

/// Average reliability above which the threshold is relaxed.
pub const DEFAULT_HIGH_RELIABILITY_CUTOFF: f64 = 0.8;

/// Average reliability below which the threshold is raised.
pub const DEFAULT_LOW_RELIABILITY_CUTOFF: f64 = 0.6;

/// Threshold shift applied for high or low average reliability.
pub const DEFAULT_RELIABILITY_STEP: f64 = 0.05;

/// Threshold raise for preseason games.
pub const DEFAULT_PRESEASON_RAISE: f64 = 0.05;

/// Threshold relief for playoff games.
pub const DEFAULT_PLAYOFF_RELIEF: f64 = 0.03;

/// Lowest threshold the calculator will return.
pub const DEFAULT_THRESHOLD_FLOOR: f64 = 0.3;

/// Highest threshold the calculator will return.
pub const DEFAULT_THRESHOLD_CEILING: f64 = 0.8;

// ---- Likelihood ----

/// Logistic steepness of the likelihood transform.
pub const DEFAULT_LIKELIHOOD_STEEPNESS: f64 = 5.0;

/// Center of the likelihood transform.
pub const DEFAULT_NEUTRAL_POINT: f64 = 0.5;

// ---- Normalizers ----

/// Base reliability of the text-confidence classifier.
pub const DEFAULT_MODEL_BASE_RELIABILITY: f64 = 0.85;

/// Base reliability of retrieval results.
pub const DEFAULT_RETRIEVAL_BASE_RELIABILITY: f64 = 0.75;

/// Base reliability of market price history.
pub const DEFAULT_PRICE_BASE_RELIABILITY: f64 = 0.90;

/// Multiplier from movement strength to confidence shift.
pub const DEFAULT_PRICE_SENSITIVITY: f64 = 0.1;

/// Relevance score a retrieval hit must exceed to count as strong.
pub const DEFAULT_RETRIEVAL_RELEVANCE_CUTOFF: f64 = 0.7;

// ---- Volatility ----

/// Posterior shift for preseason games.
pub const DEFAULT_PRESEASON_ADJUSTMENT: f64 = -0.08;

/// Posterior shift for playoff games.
pub const DEFAULT_PLAYOFFS_ADJUSTMENT: f64 = 0.05;

/// Posterior shift for the second night of a back-to-back.
pub const DEFAULT_BACK_TO_BACK_ADJUSTMENT: f64 = -0.03;

/// Posterior shift for nationally televised games.
pub const DEFAULT_HIGH_VISIBILITY_ADJUSTMENT: f64 = 0.02;

/// Largest magnitude any single volatility term may be configured to.
pub const MAX_VOLATILITY_TERM: f64 = 0.25;

// ---- Config files ----

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "wager.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "WAGER_LOG";

/// Log filter used when `WAGER_LOG` is unset or unparseable.
pub const DEFAULT_LOG_FILTER: &str = "wager_core=info,wager_confidence=info";
