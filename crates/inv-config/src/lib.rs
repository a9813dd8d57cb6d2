//! # inv-config
//!
//! Layered configuration loading for w32inv using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`W32INV_*` prefix, `__` as separator)
//! 2. Project-level `.w32inv/config.toml`
//! 3. User-level `~/.config/w32inv/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `W32INV_GRAPH__TENANT_ID` -> `graph.tenant_id`,
//! `W32INV_REPORT__OUTPUT_PATH` -> `report.output_path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use inv_config::InvConfig;
//!
//! let config = InvConfig::load_with_dotenv().expect("config");
//! if config.graph.is_configured() {
//!     println!("Graph: {}", config.graph.base_url);
//! }
//! ```

mod error;
mod graph;
mod report;

pub use error::ConfigError;
pub use graph::GraphConfig;
pub use report::ReportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "W32INV_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InvConfig {
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl InvConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`InvConfig::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`InvConfig::load`]. A missing `.env` is not an error.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration after reading the given `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DotEnv`] if the file exists but cannot be
    /// parsed, or the errors of [`InvConfig::load`].
    pub fn load_with_dotenv_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            dotenvy::from_path(path).map_err(|source| ConfigError::DotEnv {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer more providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".w32inv/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// The Graph section, if it can authenticate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if neither an access token nor a
    /// full set of client credentials is present.
    pub fn require_graph(&self) -> Result<&GraphConfig, ConfigError> {
        if self.graph.is_configured() {
            Ok(&self.graph)
        } else {
            Err(ConfigError::NotConfigured {
                section: "graph".to_string(),
                hint: "graph.access_token, or graph.tenant_id + graph.client_id + graph.client_secret"
                    .to_string(),
            })
        }
    }

    /// Copy safe to print.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            graph: self.graph.redacted(),
            report: self.report.clone(),
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("w32inv").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = InvConfig::default();
        assert!(!config.graph.is_configured());
        assert_eq!(config.report.output_path, "Win32AppsReport.csv");
    }

    #[test]
    fn require_graph_fails_when_unconfigured() {
        let config = InvConfig::default();
        assert!(matches!(
            config.require_graph(),
            Err(ConfigError::NotConfigured { section, .. }) if section == "graph"
        ));
    }

    #[test]
    fn require_graph_accepts_token() {
        let mut config = InvConfig::default();
        config.graph.access_token = "token".into();
        assert!(config.require_graph().is_ok());
    }
}
