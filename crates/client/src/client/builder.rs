//! Client builder for constructing [`SplunkClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification, redirects)
//!
//! # Invariants
//! - `base_url` and `credentials` are required before calling `build()`
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use crate::auth::SessionManager;
use crate::client::SplunkClient;
use crate::error::{ClientError, Result};
use splunk_config::{
    Config, Credentials,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_SKIP_VERIFY, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`SplunkClient`].
pub struct SplunkClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for SplunkClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            skip_verify: DEFAULT_SKIP_VERIFY,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SplunkClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Splunk management port, e.g. `https://localhost:8089`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set whether to skip TLS certificate verification.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pre-configure the builder from the alert configuration.
    ///
    /// The session client talks to `scheme://host:port` derived from the
    /// configured search-jobs URL.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.service.session_base_url());
        self.credentials = Some(config.credentials.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`SplunkClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::AuthFailed`] if `credentials` were not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<SplunkClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let credentials = self
            .credentials
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;

        let http = build_http_client(&base_url, self.skip_verify, self.timeout)?;

        Ok(SplunkClient {
            http,
            base_url,
            session_manager: SessionManager::new(credentials),
        })
    }
}

/// Build the reqwest client shared by the session and search-jobs clients.
pub(crate) fn build_http_client(
    url: &str,
    skip_verify: bool,
    timeout: Duration,
) -> Result<reqwest::Client> {
    let mut http_builder = reqwest::Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

    if skip_verify {
        if url.starts_with("https://") {
            http_builder = http_builder.danger_accept_invalid_certs(true);
        } else {
            tracing::warn!(
                "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
            );
        }
    }

    Ok(http_builder.build()?)
}
