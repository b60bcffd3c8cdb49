//! Error types for odata-snippets

use thiserror::Error;

/// Result type alias for odata-snippets operations
pub type Result<T> = std::result::Result<T, SnippetError>;

/// Errors that can occur while loading templates or rendering snippets
#[derive(Error, Debug)]
pub enum SnippetError {
    #[error("Invalid template {template:?}: {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error(
        "Template {template:?} references argument {{{index}}} \
         but only {expected} argument(s) are supplied"
    )]
    TemplateMismatch {
        template: String,
        expected: usize,
        index: usize,
    },

    #[error("Header has no values: {0}")]
    MissingHeaderValue(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Failed to parse input: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for SnippetError {
    fn from(err: serde_json::Error) -> Self {
        SnippetError::ParseError(err.to_string())
    }
}

impl From<config::ConfigError> for SnippetError {
    fn from(err: config::ConfigError) -> Self {
        SnippetError::ConfigError(err.to_string())
    }
}
