//! Shared fixtures for component tests against a wiremock server.

use std::time::Duration;

use splunk_client::{SearchJobsClient, SplunkClient};
use splunk_config::{Config, ConfigLoader};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const JOBS_PATH: &str = "/services/search/jobs";
pub const SESSION_KEY: &str = "192fd3e46a31246da7ea7f109e7f95fd";

pub fn results_path(sid: &str) -> String {
    format!("{}/{}/results", JOBS_PATH, sid)
}

/// Config pointing at `server`, with TLS settings that stay quiet on http.
pub fn config(server: &MockServer, query: Option<&str>, report: Option<&str>) -> Config {
    let mut loader = ConfigLoader::new()
        .with_username("admin".to_string())
        .with_password("changeme".to_string())
        .with_url(format!("{}{}", server.uri(), JOBS_PATH))
        .with_skip_verify(false)
        .with_timeout(Duration::from_secs(5))
        .with_max_wait_secs(10)
        .with_poll_interval_ms(0);
    if let Some(query) = query {
        loader = loader.with_query(query.to_string());
    }
    if let Some(report) = report {
        loader = loader.with_report_name(report.to_string());
    }
    loader.build().unwrap()
}

pub fn jobs_client(server: &MockServer) -> SearchJobsClient {
    SearchJobsClient::from_config(&config(server, None, None)).unwrap()
}

pub fn session_client(server: &MockServer) -> SplunkClient {
    SplunkClient::builder()
        .from_config(&config(server, None, None))
        .build()
        .unwrap()
}

pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"sessionKey": SESSION_KEY})),
        )
        .mount(server)
        .await;
}

/// Catalog with a padded name in an app namespace and an unscoped entry.
pub fn catalog_body() -> serde_json::Value {
    serde_json::json!({
        "entry": [
            {
                "name": "Errors in the last 24 hours",
                "content": {"search": "index=_internal log_level=ERROR", "disabled": false},
                "acl": {"app": "search", "owner": "nobody"}
            },
            {
                "name": " Daily Report ",
                "content": {"search": "index=main | stats count by host", "disabled": "0"},
                "acl": {"app": "reporting", "owner": "admin"}
            },
            {
                "name": "Unscoped",
                "content": {"search": "| makeresults", "disabled": true}
            }
        ]
    })
}
