//! Per-language expression tables

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::template::Template;
use crate::error::{Result, SnippetError};

/// Template with one argument: the joined clause list, search text, or paging value
pub type ValueTemplate = Template<1>;

/// Template with two arguments: header name and first header value
pub type HeaderTemplate = Template<2>;

/// Query section templates for one target language
///
/// Every template slot is required; delimiters default to the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageExpressions {
    pub header: HeaderTemplate,
    pub filter: ValueTemplate,
    pub search: ValueTemplate,
    pub expand: ValueTemplate,
    pub select: ValueTemplate,
    pub order_by: ValueTemplate,
    pub skip: ValueTemplate,
    pub skip_token: ValueTemplate,
    pub top: ValueTemplate,

    #[serde(default)]
    pub filter_delimiter: String,
    #[serde(default)]
    pub expand_delimiter: String,
    #[serde(default)]
    pub select_delimiter: String,
    #[serde(default)]
    pub order_by_delimiter: String,
}

impl LanguageExpressions {
    /// Parse a table from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SnippetError::ConfigError(e.to_string()))
    }

    /// Load a table from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading language expressions from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            SnippetError::ConfigError(format!(
                "Failed to parse expressions file {}: {}",
                path.display(),
                e
            ))
        })
    }
}
