//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from `tests/fixtures/` relative to the crate root
//! - All fixture files must be valid JSON

use std::path::Path;

use secrecy::SecretString;

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use splunk_client::endpoints;
#[allow(unused_imports)]
pub use splunk_config::Credentials;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Load a JSON fixture file from `tests/fixtures/`.
#[allow(dead_code)]
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Credentials used by every mock in this suite.
#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new("admin", SecretString::new("changeme".to_string().into()))
}

/// `Authorization` header wiremock sees for [`test_credentials`] basic auth.
#[allow(dead_code)]
pub const BASIC_AUTH_HEADER: &str = "Basic YWRtaW46Y2hhbmdlbWU=";
