//! Cross-cutting error types for w32inv.
//!
//! Transport and configuration errors live in their own crates
//! (`GraphError`, `ConfigError`); they converge in `inv-cli` through `anyhow`.

use thiserror::Error;

/// Errors raised while assembling report records.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required timestamp field is absent from the app payload.
    #[error("application '{app}' has no {field} timestamp")]
    MissingTimestamp { app: String, field: &'static str },

    /// A timestamp field is present but is not an RFC 3339 instant.
    #[error("application '{app}' has an unparseable {field} timestamp '{value}': {source}")]
    InvalidTimestamp {
        app: String,
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
