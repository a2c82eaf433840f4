//! Serde helpers for Splunk's inconsistent JSON typing.
//!
//! Invariants / assumptions:
//! - Splunk may return boolean flags as `true`, `"1"`, `"true"` or `1` depending on endpoint/version.
//! - These helpers must not log or print payload values; errors are generic parse errors.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BoolOrStringOrNumber {
    Bool(bool),
    U64(u64),
    String(String),
}

/// Deserialize a Splunk flag given as a bool, a number or a string.
pub fn bool_from_bool_string_or_number<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match BoolOrStringOrNumber::deserialize(deserializer)? {
        BoolOrStringOrNumber::Bool(b) => Ok(b),
        BoolOrStringOrNumber::U64(n) => Ok(n != 0),
        BoolOrStringOrNumber::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "t" | "yes" => Ok(true),
            "0" | "false" | "f" | "no" | "" => Ok(false),
            _ => Err(D::Error::custom("expected a boolean flag")),
        },
    }
}
