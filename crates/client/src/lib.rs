//! Splunk REST API client for the search alert.
//!
//! Two clients share one HTTP stack:
//! - [`SearchJobsClient`] talks to the configured search-jobs URL with basic auth.
//! - [`SplunkClient`] logs in once and uses the session key for the saved-search catalog.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub use auth::SessionManager;
pub use client::SplunkClient;
pub use client::builder::SplunkClientBuilder;
pub use client::search_jobs::SearchJobsClient;
pub use error::{ClientError, Result};
pub use models::{JobState, ResultSet, ResultsPoll, SavedSearch, SearchJob};

/// Redact a query string for logging.
///
/// Queries can embed tokens or PII, so only the length and a hash are logged.
pub fn redact_query(query: &str) -> String {
    let mut hasher = DefaultHasher::new();
    query.hash(&mut hasher);
    let hash = hasher.finish();
    format!("<{} chars, hash={:08x}>", query.len(), hash)
}
