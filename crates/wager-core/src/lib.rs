//! Core types for the wager evidence-fusion engine.
//!
//! Configuration, error enums, tracing setup, and shared constants.
//! Scoring logic lives in `wager-confidence`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::WagerConfig;
pub use errors::{AssessError, ConfigError, WagerErrorCode};
