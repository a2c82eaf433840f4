//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for operational settings.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Credentials or search inputs (those come only from the payload).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values are deferred on the loader as ConfigError::InvalidValue.

use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(var: &str, expected: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(var)
        .map(|raw| {
            raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: var.to_string(),
                message: expected.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
///
/// Unset variables leave the loader untouched; malformed ones are deferred.
pub fn apply_env(loader: &mut ConfigLoader) {
    match parse_env::<bool>("SPLUNK_SKIP_VERIFY", "must be true or false") {
        Ok(Some(skip)) => loader.set_skip_verify(Some(skip)),
        Ok(None) => {}
        Err(e) => loader.defer(e),
    }
    match parse_env::<u64>("SPLUNK_TIMEOUT", "must be a number") {
        Ok(Some(secs)) => loader.set_timeout(Some(Duration::from_secs(secs))),
        Ok(None) => {}
        Err(e) => loader.defer(e),
    }
    match parse_env::<u64>("SPLUNK_MAX_WAIT_SECS", "must be a number") {
        Ok(Some(secs)) => loader.set_max_wait_secs(Some(secs)),
        Ok(None) => {}
        Err(e) => loader.defer(e),
    }
    match parse_env::<u64>("SPLUNK_POLL_INTERVAL_MS", "must be a number") {
        Ok(Some(ms)) => loader.set_poll_interval_ms(Some(ms)),
        Ok(None) => {}
        Err(e) => loader.defer(e),
    }
}
