//! Error handling for wager.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod assess_error;
pub mod config_error;
pub mod error_code;

pub use assess_error::AssessError;
pub use config_error::ConfigError;
pub use error_code::WagerErrorCode;
