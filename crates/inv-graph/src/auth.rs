//! Bearer token acquisition.
//!
//! Either uses the configured access token as-is or performs one OAuth2
//! client-credentials request against the identity platform. Tokens are not
//! refreshed; an export run finishes well inside a token's lifetime.

use inv_config::GraphConfig;

use crate::error::GraphError;
use crate::http::check_response;

#[derive(serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Resolve a bearer token for `config`.
///
/// # Errors
///
/// Returns [`GraphError::Token`] if no credentials are configured or the
/// identity platform rejects the request, or [`GraphError::Http`] on
/// transport failure.
pub async fn acquire_token(
    http: &reqwest::Client,
    config: &GraphConfig,
) -> Result<String, GraphError> {
    if config.has_access_token() {
        tracing::debug!("using configured access token");
        return Ok(config.access_token.clone());
    }
    if !config.has_client_credentials() {
        return Err(GraphError::Token(
            "no access token and incomplete client credentials".to_string(),
        ));
    }

    let url = token_url(config);
    let resp = http
        .post(&url)
        .header(
            reqwest::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(client_credentials_body(config))
        .send()
        .await?;

    let resp = check_response(resp).await.map_err(|error| match error {
        GraphError::Api { status, message } => {
            GraphError::Token(format!("identity platform returned {status}: {message}"))
        }
        other => other,
    })?;

    let token: TokenResponse = resp.json().await?;
    tracing::debug!(expires_in = ?token.expires_in, "acquired client-credentials token");
    Ok(token.access_token)
}

fn token_url(config: &GraphConfig) -> String {
    format!(
        "{}/{}/oauth2/v2.0/token",
        config.login_url.trim_end_matches('/'),
        urlencoding::encode(&config.tenant_id)
    )
}

fn client_credentials_body(config: &GraphConfig) -> String {
    let scope = format!("{}/.default", config.base_url.trim_end_matches('/'));
    format!(
        "grant_type=client_credentials&client_id={}&client_secret={}&scope={}",
        urlencoding::encode(&config.client_id),
        urlencoding::encode(&config.client_secret),
        urlencoding::encode(&scope),
    )
}
