//! odata-snippets: render the query section of OData code snippets
//!
//! Given a request already parsed by an OData URI parser and a table of
//! per-language templates, this crate produces the part of a generated code
//! snippet that carries headers and query options (`$filter`, `$search`,
//! `$expand`, `$select`, `$orderby`, `$skip`, `$skiptoken`, `$top`). It also
//! resolves the EDM type name behind a path segment, which snippet assemblers
//! use to pick the class to instantiate.
//!
//! # Usage
//!
//! ```rust
//! use odata_snippets::expressions::Language;
//! use odata_snippets::model::{ODataUri, RequestModel};
//!
//! let model = RequestModel {
//!     select_field_list: vec!["id".into(), "displayName".into()],
//!     odata_uri: ODataUri { top: Some(10), ..Default::default() },
//!     ..Default::default()
//! };
//! let expressions = Language::JavaScript.expressions()?;
//! let section = odata_snippets::generate_query_section(&model, &expressions)?;
//! assert_eq!(section, "\n\t.select('id,displayName')\n\t.top(10)");
//! # Ok::<(), odata_snippets::SnippetError>(())
//! ```
//!
//! Custom languages are described in TOML:
//!
//! ```toml
//! header = "\n    .header('{0}', '{1}')"
//! filter = "\n    .filter('{0}')"
//! search = "\n    .search('{0}')"
//! expand = "\n    .expand('{0}')"
//! select = "\n    .select('{0}')"
//! order_by = "\n    .order_by('{0}')"
//! skip = "\n    .skip(%d)"
//! skip_token = "\n    .skip_token('%s')"
//! top = "\n    .top(%d)"
//! select_delimiter = ","
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! odata-snippets --language csharp query request.json
//! odata-snippets resolve segment.json displayName --class-name
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod expressions;
pub mod model;

use tracing::{debug, info};

pub use codegen::{
    generate_query_section, join_with_delimiter, resolve_type_name, QuerySectionBuilder,
    TypeNameResolver,
};
pub use config::SnippetConfig;
pub use error::{Result, SnippetError};
pub use expressions::{Language, LanguageExpressions};

/// Load the expressions table selected by a configuration
///
/// A custom `expressions_file` wins over the `language` preset.
pub fn load_expressions(config: &SnippetConfig) -> Result<LanguageExpressions> {
    match &config.expressions_file {
        Some(path) => {
            info!("Using expressions file {:?}", path);
            LanguageExpressions::from_file(path)
        }
        None => {
            let language = config.language()?;
            debug!("Using built-in {} expressions", language);
            language.expressions()
        }
    }
}

/// Render the query section of a request with the configured language
pub fn render_query_section(
    config: &SnippetConfig,
    request: &model::RequestModel,
) -> Result<String> {
    let expressions = load_expressions(config)?;
    generate_query_section(request, &expressions)
}

/// Resolve a type name and apply the configured naming style
///
/// Returns `None` when the segment has no type for `identifier`.
pub fn render_type_name(
    config: &SnippetConfig,
    segment: &model::PathSegment,
    identifier: &str,
) -> Option<String> {
    let type_name = TypeNameResolver::find(segment, identifier)?;
    if config.class_names {
        Some(codegen::class_name(&type_name))
    } else {
        Some(type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EdmType, PathSegment, RequestModel, StructuredType};

    #[test]
    fn test_load_expressions_preset() {
        let config = SnippetConfig::for_language(Language::Java);
        let exprs = load_expressions(&config).unwrap();
        assert_eq!(exprs, Language::Java.expressions().unwrap());
    }

    #[test]
    fn test_load_expressions_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.toml");
        std::fs::write(
            &path,
            r#"
            header = "H({0},{1})"
            filter = "F({0})"
            search = "S({0})"
            expand = "E({0})"
            select = "SEL({0})"
            order_by = "O({0})"
            skip = "SK({0})"
            skip_token = "ST({0})"
            top = "T({0})"
            "#,
        )
        .unwrap();

        let config = SnippetConfig {
            language: "not-a-language".into(),
            expressions_file: Some(path),
            ..Default::default()
        };
        let model = RequestModel {
            select_field_list: vec!["a".into(), "b".into()],
            ..Default::default()
        };
        // no select delimiter in the file, so clauses run together
        assert_eq!(render_query_section(&config, &model).unwrap(), "SEL(ab)");
    }

    #[test]
    fn test_load_expressions_unknown_language() {
        let config = SnippetConfig {
            language: "cobol".into(),
            ..Default::default()
        };
        assert!(matches!(
            load_expressions(&config),
            Err(SnippetError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_render_type_name_class_names() {
        let segment = PathSegment::EntitySet {
            name: "users".into(),
            set_type: EdmType::collection(StructuredType::new("microsoft.graph", "user").into()),
        };
        let mut config = SnippetConfig::default();
        assert_eq!(
            render_type_name(&config, &segment, "users").as_deref(),
            Some("microsoft.graph.user")
        );

        config.class_names = true;
        assert_eq!(render_type_name(&config, &segment, "users").as_deref(), Some("User"));
        assert_eq!(render_type_name(&config, &segment, "missing"), None);
    }
}
