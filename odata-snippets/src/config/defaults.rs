//! Default configuration values - single source of truth

/// Default snippet language
pub const LANGUAGE: &str = "csharp";

/// Whether `resolve` prints class names instead of qualified type names
pub const CLASS_NAMES: bool = false;

/// Prefix for environment variable overrides (`ODATA_SNIPPETS_LANGUAGE`, ...)
pub const ENV_PREFIX: &str = "ODATA_SNIPPETS";

/// Config file looked up when none is given
pub const CONFIG_FILE: &str = "odata-snippets";
