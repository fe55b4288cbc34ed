//! Error types for trunkcfg.
//!
//! Uses thiserror for derive macros. Every variant carries enough context
//! (file position or field path) for the user to find the problem.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for trunkcfg operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// User provided invalid arguments or no config could be located.
    #[error("{0}")]
    Usage(String),

    /// The document is not well-formed YAML, or a value has the wrong shape.
    #[error("{}", format_parse_error(message, *line, *column))]
    Parse {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    /// A required field is missing or a value is malformed.
    #[error("invalid config at '{field}': {message}")]
    Validation { field: String, message: String },
}

fn format_parse_error(message: &str, line: Option<usize>, column: Option<usize>) -> String {
    match (line, column) {
        (Some(line), Some(column)) => {
            format!("failed to parse config at line {line}, column {column}: {message}")
        }
        (Some(line), None) => format!("failed to parse config at line {line}: {message}"),
        _ => format!("failed to parse config: {message}"),
    }
}

impl ConfigError {
    /// Build a validation error for the given field path.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Convert a serde_yaml error into a parse error, keeping its position.
    pub fn from_yaml(err: &serde_yaml::Error) -> Self {
        let location = err.location();
        ConfigError::Parse {
            message: strip_location_suffix(&err.to_string()),
            line: location.as_ref().map(|l| l.line()),
            column: location.as_ref().map(|l| l.column()),
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::Io { .. } => exit_codes::USER_ERROR,
            ConfigError::Usage(_) => exit_codes::USER_ERROR,
            ConfigError::Parse { .. } => exit_codes::PARSE_FAILURE,
            ConfigError::Validation { .. } => exit_codes::VALIDATION_FAILURE,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, ConfigError::Parse { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ConfigError::Validation { .. })
    }

    /// Field path of a validation error, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::Validation { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

// serde_yaml appends " at line X column Y" to its Display output; the
// position is reported separately.
fn strip_location_suffix(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

/// Result type alias for trunkcfg operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
