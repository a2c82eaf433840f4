//! Request execution and HTTP error mapping.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Sends a request and maps any non-2xx status to [`ClientError::ApiError`].
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(api_error(response).await)
    }
}

/// Consume an unsuccessful response into an [`ClientError::ApiError`].
///
/// The raw body is kept verbatim so callers can report `<status>, <body>`.
pub async fn api_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get("X-Splunk-Request-Id")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    debug!(status, url = %url, "Splunk returned an unexpected status");

    ClientError::ApiError {
        status,
        url,
        message,
        request_id,
    }
}
