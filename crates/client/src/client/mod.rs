//! Clients for the Splunk REST API.
//!
//! # Submodules
//! - [`builder`]: Client construction and HTTP stack configuration
//! - `session`: Session key helpers (private module)
//! - `saved_searches`: Saved search catalog and dispatch
//! - [`search_jobs`]: Basic-auth client for the configured search-jobs URL
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Session key storage (delegated to [`crate::auth::SessionManager`])

pub mod builder;
mod saved_searches;
pub mod search_jobs;
mod session;

use crate::auth::SessionManager;

/// Session-authenticated Splunk client.
///
/// Logs in once with username/password and sends the session key on every
/// subsequent catalog or dispatch call.
///
/// ```rust,ignore
/// use splunk_client::SplunkClient;
///
/// let mut client = SplunkClient::builder().from_config(&config).build()?;
/// client.login().await?;
/// let searches = client.list_saved_searches().await?;
/// ```
#[derive(Debug)]
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session_manager: SessionManager,
}

impl SplunkClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SplunkClientBuilder {
        builder::SplunkClientBuilder::new()
    }

    /// Get the base URL (`scheme://host:port`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
