//! Authentication endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};

/// Login to Splunk with username and password, returning the session key.
///
/// The key is read from `sessionKey` at the top level or, for older
/// servers, from `entry[0].content.sessionKey`.
pub async fn login(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<String> {
    debug!("Logging in to Splunk as {}", username);

    let url = format!("{}/services/auth/login", base_url);
    let builder = client
        .post(&url)
        .form(&[("username", username), ("password", password)])
        .query(&[("output_mode", "json")]);

    let response = match send_request(builder).await {
        Ok(response) => response,
        Err(ClientError::ApiError {
            status: status @ (401 | 403),
            message,
            ..
        }) => {
            return Err(ClientError::AuthFailed(format!(
                "login rejected ({}): {}",
                status, message
            )));
        }
        Err(e) => return Err(e),
    };

    let resp: serde_json::Value = response.json().await?;

    resp.get("sessionKey")
        .and_then(|v| v.as_str())
        .or_else(|| resp["entry"][0]["content"]["sessionKey"].as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| ClientError::InvalidResponse("Missing sessionKey in response".to_string()))
}
