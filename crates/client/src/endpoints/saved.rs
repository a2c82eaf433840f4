//! Saved search operations.
//!
//! # What this module handles:
//! - Listing the saved search catalog
//! - Dispatching a saved search in its owning namespace
//!
//! # What this module does NOT handle:
//! - Name matching (see the alert binary's resolver)
//! - Ad-hoc job execution (see [`super::jobs`])

use reqwest::Client;
use splunk_config::constants::DEFAULT_SAVED_SEARCH_OWNER;
use tracing::debug;

use crate::endpoints::{encode_path_segment, send_request};
use crate::error::{ClientError, Result};
use crate::models::{SavedSearch, SavedSearchListResponse, extract_sid};

/// List every saved search visible to the session (`count=0` disables paging).
pub async fn list_saved_searches(
    client: &Client,
    base_url: &str,
    authorization: &str,
) -> Result<Vec<SavedSearch>> {
    debug!("Listing saved searches");

    let url = format!("{}/services/saved/searches", base_url);

    let builder = client
        .get(&url)
        .header("Authorization", authorization)
        .query(&[("output_mode", "json"), ("count", "0")]);
    let response = send_request(builder).await?;

    let resp: SavedSearchListResponse = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse saved searches response: {}", e))
    })?;

    Ok(resp.into_saved_searches())
}

/// Path of the dispatch endpoint for a saved search.
///
/// Searches with an owning app are dispatched in that namespace
/// (`/servicesNS/<owner>/<app>/...`, owner defaulting to `nobody`); others
/// go through the global `/services/...` endpoint.
pub fn dispatch_path(search: &SavedSearch) -> String {
    let name = encode_path_segment(&search.name);
    let app = search.app.as_deref().filter(|a| !a.trim().is_empty());

    match app {
        Some(app) => {
            let owner = search
                .owner
                .as_deref()
                .filter(|o| !o.trim().is_empty())
                .unwrap_or(DEFAULT_SAVED_SEARCH_OWNER);
            format!(
                "/servicesNS/{}/{}/saved/searches/{}/dispatch",
                encode_path_segment(owner),
                encode_path_segment(app),
                name
            )
        }
        None => format!("/services/saved/searches/{}/dispatch", name),
    }
}

/// Dispatch a saved search and return the new job's SID.
pub async fn dispatch_saved_search(
    client: &Client,
    base_url: &str,
    authorization: &str,
    search: &SavedSearch,
) -> Result<String> {
    let url = format!("{}{}", base_url, dispatch_path(search));
    debug!("Dispatching saved search: {}", search.name);

    let builder = client
        .post(&url)
        .header("Authorization", authorization)
        .form(&[("output_mode", "json")]);
    let response = send_request(builder).await?;

    let resp: serde_json::Value = response.json().await?;
    extract_sid(&resp)
        .map(|s| s.to_string())
        .ok_or_else(|| ClientError::InvalidResponse("Missing sid in dispatch response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(name: &str, app: Option<&str>, owner: Option<&str>) -> SavedSearch {
        SavedSearch {
            name: name.to_string(),
            app: app.map(str::to_string),
            owner: owner.map(str::to_string),
            disabled: false,
        }
    }

    #[test]
    fn test_dispatch_path_in_app_namespace() {
        let search = saved("Daily Report", Some("search"), Some("admin"));
        assert_eq!(
            dispatch_path(&search),
            "/servicesNS/admin/search/saved/searches/Daily%20Report/dispatch"
        );
    }

    #[test]
    fn test_dispatch_path_defaults_owner_to_nobody() {
        let search = saved("Daily Report", Some("search"), None);
        assert_eq!(
            dispatch_path(&search),
            "/servicesNS/nobody/search/saved/searches/Daily%20Report/dispatch"
        );
    }

    #[test]
    fn test_dispatch_path_without_app() {
        let search = saved("Errors/Warnings", None, Some("admin"));
        assert_eq!(
            dispatch_path(&search),
            "/services/saved/searches/Errors%2FWarnings/dispatch"
        );
    }
}
