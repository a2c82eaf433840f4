//! Search job endpoint tests.
//!
//! This module tests the ad-hoc job calls against the configured jobs URL:
//! - Job creation only succeeds on HTTP 201
//! - Results fetching distinguishes ready (200), pending (204) and failure
//!
//! # Invariants
//! - Every request carries basic-auth credentials
//! - Error bodies are preserved verbatim

mod common;

use common::*;
use splunk_client::{ClientError, JobState, ResultsPoll, SearchJobsClient};
use splunk_config::ConnectionConfig;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};

const JOBS_PATH: &str = "/services/search/jobs";

fn jobs_client(server: &MockServer) -> SearchJobsClient {
    SearchJobsClient::new(
        format!("{}{}", server.uri(), JOBS_PATH),
        test_credentials(),
        &ConnectionConfig::default(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_create_job_returns_sid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(JOBS_PATH))
        .and(header("Authorization", BASIC_AUTH_HEADER))
        .and(body_string_contains("search=search+index%3D_internal"))
        .and(body_string_contains("output_mode=json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(load_fixture("create_job.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let job = jobs_client(&mock_server)
        .create_job("search index=_internal | head 5")
        .await
        .unwrap();

    assert_eq!(job.sid, "1700000000.42");
    assert_eq!(job.state, JobState::Running);
}

#[tokio::test]
async fn test_create_job_sid_in_entry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(JOBS_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "entry": [{"name": "search", "content": {"sid": "nested-sid"}}]
        })))
        .mount(&mock_server)
        .await;

    let job = jobs_client(&mock_server).create_job("| makeresults").await.unwrap();
    assert_eq!(job.sid, "nested-sid");
}

#[tokio::test]
async fn test_create_job_non_201_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(JOBS_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string("Error in 'search' command"))
        .mount(&mock_server)
        .await;

    let err = jobs_client(&mock_server)
        .create_job("search |||")
        .await
        .unwrap_err();

    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Error in 'search' command");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_job_200_is_not_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(JOBS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("create_job.json")))
        .mount(&mock_server)
        .await;

    let err = jobs_client(&mock_server)
        .create_job("| makeresults")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::ApiError { status: 200, .. }));
}

#[tokio::test]
async fn test_create_job_missing_sid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(JOBS_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"messages": []})))
        .mount(&mock_server)
        .await;

    let err = jobs_client(&mock_server)
        .create_job("| makeresults")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_fetch_results_ready() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/1700000000.42/results"))
        .and(query_param("output_mode", "json"))
        .and(header("Authorization", BASIC_AUTH_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("results.json")))
        .mount(&mock_server)
        .await;

    let poll = jobs_client(&mock_server)
        .fetch_results("1700000000.42")
        .await
        .unwrap();

    match poll {
        ResultsPoll::Ready(rows) => {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0]["host"], "idx01.example.com");
        }
        ResultsPoll::Pending => panic!("expected results"),
    }
}

#[tokio::test]
async fn test_fetch_results_pending() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/1700000000.42/results"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let poll = jobs_client(&mock_server)
        .fetch_results("1700000000.42")
        .await
        .unwrap();

    assert_eq!(poll, ResultsPoll::Pending);
}

#[tokio::test]
async fn test_fetch_results_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/gone/results"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Unknown sid."))
        .mount(&mock_server)
        .await;

    let err = jobs_client(&mock_server)
        .fetch_results("gone")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::ApiError { status: 404, .. }));
    assert!(err.to_string().contains("Unknown sid."));
}

#[tokio::test]
async fn test_fetch_results_connection_refused() {
    let mock_server = MockServer::start().await;
    let client = jobs_client(&mock_server);
    drop(mock_server);

    let err = client.fetch_results("1700000000.42").await.unwrap_err();
    assert!(matches!(err, ClientError::HttpError(_)));
}
