//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Distinguish missing mandatory fields from malformed input.
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see the alert binary).
//!
//! Invariants:
//! - Error messages never include the password or raw payload contents.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more of username, password or url is absent or blank.
    #[error("Missing required parameters (username, password, or url).")]
    MissingRequired { fields: Vec<&'static str> },

    /// The payload is not valid JSON or lacks the `configuration` object.
    #[error("Invalid configuration payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    #[error("Failed to read configuration payload: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// True when the error is a missing mandatory field rather than malformed input.
    pub fn is_missing_required(&self) -> bool {
        matches!(self, Self::MissingRequired { .. })
    }
}
