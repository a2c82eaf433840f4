//! Wire types for the JSON payload delivered on stdin.
//!
//! Responsibilities:
//! - Deserialize `{ "configuration": { ... } }` into optional raw fields.
//! - Parse numeric settings sent as JSON numbers or strings, as alert
//!   payloads carry every form value as a string.
//!
//! Does NOT handle:
//! - Validation of mandatory fields (see `builder.rs`).
//!
//! Invariants:
//! - Unknown fields are ignored.
//! - Numeric settings stay raw JSON until the loader parses them, so a
//!   malformed number never hides a missing mandatory field.
//! - Blank numeric strings parse as `None`.

use serde::Deserialize;
use serde_json::Value;

use super::error::ConfigError;

/// Top-level payload envelope.
#[derive(Debug, Deserialize)]
pub struct AlertPayload {
    pub configuration: PayloadConfiguration,
}

/// Raw configuration values as delivered by the caller.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PayloadConfiguration {
    pub query: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub url: Option<String>,
    pub report_name: Option<String>,
    pub max_wait_secs: Option<Value>,
    pub poll_interval_ms: Option<Value>,
}

/// Parse a raw numeric payload setting.
pub(crate) fn parse_u64_setting(name: &str, raw: &Value) -> Result<Option<u64>, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        var: name.to_string(),
        message: "must be a non-negative integer".to_string(),
    };

    match raw {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_u64().map(Some).ok_or_else(invalid),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s.trim().parse().map(Some).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}
