//! Configuration settings for odata-snippets

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults;
use crate::error::{Result, SnippetError};
use crate::expressions::Language;

/// Main configuration struct for snippet generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetConfig {
    /// Built-in language preset (csharp, javascript, java)
    #[serde(default = "default_language")]
    pub language: String,

    /// Custom expressions table (TOML); takes precedence over `language`
    #[serde(default)]
    pub expressions_file: Option<PathBuf>,

    /// Print class names (`User`) instead of qualified type names
    #[serde(default = "default_class_names")]
    pub class_names: bool,

    /// Log level (trace, debug, info, warn, error)
    /// Can be overridden by RUST_LOG env var
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_language() -> String {
    defaults::LANGUAGE.to_string()
}
fn default_class_names() -> bool {
    defaults::CLASS_NAMES
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            expressions_file: None,
            class_names: default_class_names(),
            log_level: None,
        }
    }
}

impl SnippetConfig {
    /// Create a default config for the given language
    pub fn for_language(language: Language) -> Self {
        Self {
            language: language.name().to_string(),
            ..Default::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SnippetConfig = toml::from_str(&content).map_err(|e| {
            SnippetError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Load configuration using config-rs (file + environment variables)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        } else {
            builder = builder.add_source(File::with_name(defaults::CONFIG_FILE).required(false));
        }

        // Override with environment variables (ODATA_SNIPPETS_*)
        builder =
            builder.add_source(Environment::with_prefix(defaults::ENV_PREFIX).try_parsing(true));

        let config: SnippetConfig = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// The preset selected by `language`
    pub fn language(&self) -> Result<Language> {
        self.language.parse()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match &self.expressions_file {
            Some(path) => {
                if !path.exists() {
                    return Err(SnippetError::ValidationError(format!(
                        "Expressions file not found: {}",
                        path.display()
                    )));
                }
            }
            None => {
                if self.language.trim().is_empty() {
                    return Err(SnippetError::ValidationError(
                        "language is required when no expressions_file is set".into(),
                    ));
                }
                self.language()?;
            }
        }

        Ok(())
    }
}
