//! Shared helpers for splunk-search-alert integration tests.
//!
//! Invariants:
//! - Commands never load a local `.env` and never inherit `SPLUNK_*` overrides.
//! - Payloads use http mock URLs with TLS verification disabled explicitly off.

use assert_cmd::Command;

/// Hermetic `splunk-search-alert` command.
pub fn alert_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("splunk-search-alert");

    cmd.env("DOTENV_DISABLED", "1")
        .env("SPLUNK_SKIP_VERIFY", "false")
        .env_remove("SPLUNK_TIMEOUT")
        .env_remove("SPLUNK_MAX_WAIT_SECS")
        .env_remove("SPLUNK_POLL_INTERVAL_MS")
        .env_remove("RUST_LOG");

    cmd
}

/// Payload JSON with the standard test credentials.
#[allow(dead_code)]
pub fn payload(url: &str, query: Option<&str>, report_name: Option<&str>) -> String {
    let mut configuration = serde_json::json!({
        "username": "admin",
        "password": "changeme",
        "url": url,
    });
    if let Some(query) = query {
        configuration["query"] = query.into();
    }
    if let Some(report_name) = report_name {
        configuration["report_name"] = report_name.into();
    }
    serde_json::json!({ "configuration": configuration }).to_string()
}
