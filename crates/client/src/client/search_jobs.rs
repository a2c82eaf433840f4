//! Basic-auth client for the configured search-jobs URL.
//!
//! # What this module handles:
//! - Holding the HTTP client, jobs URL and credentials for the ad-hoc path
//!
//! # What this module does NOT handle:
//! - Polling policy or logging of outcomes (see the alert binary)

use splunk_config::{Config, ConnectionConfig, Credentials};

use crate::client::builder::build_http_client;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ResultsPoll, SearchJob};

/// Transport client for ad-hoc search jobs.
///
/// Unlike [`crate::SplunkClient`] it never logs in; every request carries
/// basic-auth credentials.
#[derive(Debug, Clone)]
pub struct SearchJobsClient {
    http: reqwest::Client,
    jobs_url: String,
    credentials: Credentials,
}

impl SearchJobsClient {
    pub fn new(
        jobs_url: impl Into<String>,
        credentials: Credentials,
        connection: &ConnectionConfig,
    ) -> Result<Self> {
        let jobs_url = jobs_url.into().trim_end_matches('/').to_string();
        let http = build_http_client(&jobs_url, connection.skip_verify, connection.timeout)?;
        Ok(Self {
            http,
            jobs_url,
            credentials,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.service.jobs_url.clone(),
            config.credentials.clone(),
            &config.connection,
        )
    }

    pub fn jobs_url(&self) -> &str {
        &self.jobs_url
    }

    /// Submit `query` as a new search job.
    pub async fn create_job(&self, query: &str) -> Result<SearchJob> {
        endpoints::create_job(&self.http, &self.jobs_url, &self.credentials, query).await
    }

    /// Request the results of `sid` once.
    pub async fn fetch_results(&self, sid: &str) -> Result<ResultsPoll> {
        endpoints::fetch_results(&self.http, &self.jobs_url, &self.credentials, sid).await
    }
}
