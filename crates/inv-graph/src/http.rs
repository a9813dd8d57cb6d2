//! Shared HTTP response helpers for Graph calls.
//!
//! Maps 404 to [`GraphError::NotFound`], 429 to [`GraphError::RateLimited`]
//! (with `Retry-After` parsing), and any other non-success status to
//! [`GraphError::Api`].

use crate::error::GraphError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GraphError> {
    let status = resp.status();
    if status == 429 {
        return Err(GraphError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if status == 404 {
        return Err(GraphError::NotFound(resp.url().path().to_string()));
    }
    if !status.is_success() {
        return Err(GraphError::Api {
            status: status.as_u16(),
            message: error_message(resp.text().await.unwrap_or_default()),
        });
    }
    Ok(resp)
}

/// Pull `error.message` out of a Graph error body, or return the body as-is.
fn error_message(body: String) -> String {
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or(body)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
