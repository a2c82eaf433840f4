//! Common types shared across Splunk API models.
//!
//! This module contains generic wrappers and shared helpers used by multiple
//! resource modules. It does NOT contain resource-specific models.

use serde::Deserialize;

/// Generic Splunk REST API response wrapper.
#[derive(Debug, Deserialize, Clone)]
pub struct SplunkResponse<T> {
    #[serde(default = "Vec::new")]
    pub entry: Vec<Entry<T>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Entry<T> {
    pub name: String,
    pub content: T,
    #[serde(default)]
    pub acl: Option<Acl>,
}

/// Access-control block attached to catalog entries.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Acl {
    #[serde(default)]
    pub app: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
}

/// Extract a search id from a job creation or dispatch response.
///
/// Splunk can return either:
/// - `{ "sid": "<sid>" }` (common on newer versions / certain output modes)
/// - `{ "entry": [ { "content": { "sid": "<sid>" } } ] }` (older/alternate shape)
pub fn extract_sid(resp: &serde_json::Value) -> Option<&str> {
    resp.get("sid").and_then(|v| v.as_str()).or_else(|| {
        resp.get("entry")?
            .get(0)?
            .get("content")?
            .get("sid")?
            .as_str()
    })
}
