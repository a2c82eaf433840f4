//! Search job operations against the configured search-jobs URL.
//!
//! # What this module handles:
//! - Creating an ad-hoc search job
//! - Fetching the results of a job once
//!
//! # What this module does NOT handle:
//! - Deciding when to re-poll (see the alert binary's poller)
//! - Saved search dispatch (see [`super::saved`])
//!
//! Both calls use basic auth, not the session key.

use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use splunk_config::Credentials;
use tracing::debug;

use crate::endpoints::{api_error, encode_path_segment};
use crate::error::{ClientError, Result};
use crate::models::{ResultsPoll, SearchJob, extract_sid, parse_results};
use crate::redact_query;

/// Create a new search job. Only HTTP 201 counts as success.
pub async fn create_job(
    client: &Client,
    jobs_url: &str,
    credentials: &Credentials,
    query: &str,
) -> Result<SearchJob> {
    // Security: Log only redacted query to avoid exposing sensitive data (tokens, PII, etc.)
    debug!("Creating search job: {}", redact_query(query));

    let response = client
        .post(jobs_url)
        .basic_auth(
            &credentials.username,
            Some(credentials.password.expose_secret()),
        )
        .form(&[("search", query), ("output_mode", "json")])
        .send()
        .await?;

    if response.status() != StatusCode::CREATED {
        return Err(api_error(response).await);
    }

    let resp: serde_json::Value = response.json().await?;
    let sid = extract_sid(&resp)
        .ok_or_else(|| ClientError::InvalidResponse("Missing sid in response".to_string()))?;

    Ok(SearchJob::new(sid))
}

/// Fetch results of a job once: 200 is ready, 204 is pending, anything else fails.
pub async fn fetch_results(
    client: &Client,
    jobs_url: &str,
    credentials: &Credentials,
    sid: &str,
) -> Result<ResultsPoll> {
    let url = format!("{}/{}/results", jobs_url, encode_path_segment(sid));
    debug!("Fetching results for job: {}", sid);

    let response = client
        .get(&url)
        .basic_auth(
            &credentials.username,
            Some(credentials.password.expose_secret()),
        )
        .query(&[("output_mode", "json")])
        .send()
        .await?;

    match response.status() {
        StatusCode::OK => {
            let body = response.text().await?;
            parse_results(&body).map(ResultsPoll::Ready)
        }
        StatusCode::NO_CONTENT => Ok(ResultsPoll::Pending),
        _ => Err(api_error(response).await),
    }
}
