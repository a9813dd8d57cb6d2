//! Microsoft Graph connection configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    String::from("https://graph.microsoft.com")
}

fn default_login_url() -> String {
    String::from("https://login.microsoftonline.com")
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphConfig {
    /// Directory (tenant) id used for the client-credentials token request.
    #[serde(default)]
    pub tenant_id: String,

    /// App registration (client) id.
    #[serde(default)]
    pub client_id: String,

    /// App registration client secret.
    #[serde(default)]
    pub client_secret: String,

    /// Pre-acquired bearer token. Takes precedence over client credentials.
    #[serde(default)]
    pub access_token: String,

    /// Graph API root, without a version segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Identity platform root used to mint tokens.
    #[serde(default = "default_login_url")]
    pub login_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            tenant_id: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            access_token: String::new(),
            base_url: default_base_url(),
            login_url: default_login_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GraphConfig {
    /// True if a bearer token is given or can be minted.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.has_access_token() || self.has_client_credentials()
    }

    #[must_use]
    pub fn has_access_token(&self) -> bool {
        !self.access_token.is_empty()
    }

    #[must_use]
    pub fn has_client_credentials(&self) -> bool {
        !self.tenant_id.is_empty() && !self.client_id.is_empty() && !self.client_secret.is_empty()
    }

    /// Copy with secrets replaced by a marker, for display.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mask = |value: &str| {
            if value.is_empty() {
                String::new()
            } else {
                String::from("***")
            }
        };
        Self {
            client_secret: mask(&self.client_secret),
            access_token: mask(&self.access_token),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = GraphConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.base_url, "https://graph.microsoft.com");
        assert_eq!(config.login_url, "https://login.microsoftonline.com");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn access_token_alone_is_enough() {
        let config = GraphConfig {
            access_token: "eyJ0eXAi".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert!(!config.has_client_credentials());
    }

    #[test]
    fn client_credentials_need_all_three_fields() {
        let mut config = GraphConfig {
            tenant_id: "contoso.onmicrosoft.com".into(),
            client_id: "client".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());

        config.client_secret = "secret".into();
        assert!(config.is_configured());
    }

    #[test]
    fn redacted_masks_secrets_only() {
        let config = GraphConfig {
            tenant_id: "tenant".into(),
            client_id: "client".into(),
            client_secret: "secret".into(),
            ..Default::default()
        };
        let shown = config.redacted();
        assert_eq!(shown.client_secret, "***");
        assert_eq!(shown.access_token, "");
        assert_eq!(shown.tenant_id, "tenant");
    }
}
