//! Assessment boundary errors.
//!
//! Out-of-range numbers inside a well-formed payload are never errors; the
//! engine clamps them and records a warning. Only a payload of the wrong
//! shape is rejected, before any scoring starts.

use super::error_code::{self, WagerErrorCode};
use super::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AssessError {
    #[error("Invalid assessment payload: {message}")]
    InvalidPayload { message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<serde_json::Error> for AssessError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidPayload {
            message: e.to_string(),
        }
    }
}

impl WagerErrorCode for AssessError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPayload { .. } => error_code::INVALID_PAYLOAD,
            Self::Config(e) => e.error_code(),
        }
    }
}
