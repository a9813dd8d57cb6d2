//! Report output configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_output_path() -> String {
    String::from("Win32AppsReport.csv")
}

fn default_delimiter() -> String {
    String::from(",")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Destination of the CSV report.
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Field delimiter. Must be a single ASCII character.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            delimiter: default_delimiter(),
        }
    }
}

impl ReportConfig {
    /// The delimiter as a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] unless the delimiter is exactly one
    /// ASCII character.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(ConfigError::InvalidValue {
                field: "report.delimiter".to_string(),
                reason: format!(
                    "expected a single ASCII character, got '{}'",
                    self.delimiter
                ),
            }),
        }
    }
}
