//! Search job models.
//!
//! # What this module handles:
//! - The job handle returned by submission and its lifecycle state
//! - The outcome of a single results request
//!
//! # What this module does NOT handle:
//! - Polling policy (see the alert binary's poller)
//! - HTTP transport (see [`crate::endpoints`])

use std::fmt;

use crate::error::{ClientError, Result};

/// Ordered, opaque result rows of a completed job.
pub type ResultSet = Vec<serde_json::Value>;

/// Lifecycle of an ad-hoc search job as observed by the poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobState {
    #[default]
    Running,
    Complete,
    Failed,
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Complete => write!(f, "complete"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// A search job created by the search-jobs endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchJob {
    pub sid: String,
    pub state: JobState,
}

impl SearchJob {
    /// A freshly created job.
    pub fn new(sid: impl Into<String>) -> Self {
        Self {
            sid: sid.into(),
            state: JobState::Running,
        }
    }
}

/// Outcome of one results request.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsPoll {
    /// HTTP 200: results are available.
    Ready(ResultSet),
    /// HTTP 204: the job has not produced results yet.
    Pending,
}

/// Parse a 200 results body.
///
/// Accepts `{ "results": [...] }` and a bare top-level array. An empty body
/// means a job that finished without rows.
pub fn parse_results(body: &str) -> Result<ResultSet> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse search results: {}", e))
    })?;

    match value {
        serde_json::Value::Array(rows) => Ok(rows),
        serde_json::Value::Object(mut map) => match map.remove("results") {
            Some(serde_json::Value::Array(rows)) => Ok(rows),
            Some(serde_json::Value::Null) | None => Ok(Vec::new()),
            Some(_) => Err(ClientError::InvalidResponse(
                "Field 'results' is not an array".to_string(),
            )),
        },
        _ => Err(ClientError::InvalidResponse(
            "Search results must be a JSON object or array".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_job_is_running() {
        let job = SearchJob::new("1700000000.1");
        assert_eq!(job.state, JobState::Running);
    }

    #[test]
    fn test_parse_results_object() {
        let body = r#"{"preview": false, "init_offset": 0, "results": [{"host": "a"}, {"host": "b"}]}"#;
        let rows = parse_results(body).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["host"], "a");
    }

    #[test]
    fn test_parse_results_bare_array() {
        let rows = parse_results(r#"[{"count": "3"}]"#).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_parse_results_empty_body() {
        assert!(parse_results("").unwrap().is_empty());
        assert!(parse_results(r#"{"messages": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_results_rejects_invalid_json() {
        assert!(matches!(
            parse_results("<html>"),
            Err(ClientError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_job_state_display() {
        assert_eq!(JobState::Complete.to_string(), "complete");
        assert_eq!(JobState::Failed.to_string(), "failed");
    }
}
