//! # inv-graph
//!
//! Microsoft Graph HTTP client for w32inv.
//!
//! - Bearer token from config or the client-credentials flow (`auth`)
//! - Paged listing of Win32 line-of-business apps with assignments (`apps`)
//! - Group display-name lookup, exposed as an `inv_core::GroupDirectory` (`groups`)
//!
//! Every call is a single attempt. Failures surface as [`GraphError`]; the
//! caller decides what is fatal.

pub mod apps;
pub mod auth;
pub mod groups;

mod error;
mod http;

pub use error::GraphError;

use std::time::Duration;

use inv_config::GraphConfig;

/// Authenticated Graph client.
pub struct GraphClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GraphClient {
    /// Build an HTTP client and acquire a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] if the HTTP client cannot be built or no token
    /// can be obtained.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("w32inv/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let token = auth::acquire_token(&http, config).await?;
        Ok(Self::with_token(http, &config.base_url, token))
    }

    /// Wrap an existing HTTP client and token.
    #[must_use]
    pub fn with_token(http: reqwest::Client, base_url: &str, token: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, GraphError> {
        let resp = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        http::check_response(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client =
            GraphClient::with_token(reqwest::Client::new(), "https://graph.microsoft.com/", "t".into());
        assert_eq!(client.base_url(), "https://graph.microsoft.com");
    }

    #[tokio::test]
    async fn connect_without_credentials_fails() {
        let result = GraphClient::connect(&GraphConfig::default()).await;
        assert!(matches!(result, Err(GraphError::Token(_))));
    }
}
