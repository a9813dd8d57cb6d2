//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or environment value could not be merged or extracted.
    #[error("failed to load configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A dotenv file exists but cannot be parsed.
    #[error("failed to read dotenv file {path}: {source}")]
    DotEnv {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// A section needed by the current command lacks required fields.
    #[error("'{section}' is not configured; set {hint}")]
    NotConfigured { section: String, hint: String },

    /// A field is present but unusable.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
