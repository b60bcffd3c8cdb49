//! Language-agnostic query section generation

use tracing::{debug, trace};

use super::join::join_with_delimiter;
use super::naming::is_host_header;
use crate::error::{Result, SnippetError};
use crate::expressions::{LanguageExpressions, ValueTemplate};
use crate::model::RequestModel;

/// Renders the header and query option fragments of a snippet for one language
pub struct QuerySectionBuilder<'a> {
    expressions: &'a LanguageExpressions,
}

impl<'a> QuerySectionBuilder<'a> {
    /// Create a builder for the given language expressions
    pub fn new(expressions: &'a LanguageExpressions) -> Self {
        Self { expressions }
    }

    /// Generate the query section for a request
    ///
    /// Fragments are emitted in a fixed order: headers, filter, search, expand,
    /// select, orderby, skip, skiptoken, top. Absent features emit nothing.
    pub fn generate(&self, model: &RequestModel) -> Result<String> {
        let exprs = self.expressions;
        let mut section = String::new();

        for (name, values) in model.request_headers.iter() {
            if is_host_header(name) {
                trace!("Skipping host header");
                continue;
            }
            let value = values
                .first()
                .ok_or_else(|| SnippetError::MissingHeaderValue(name.to_string()))?;
            section.push_str(&exprs.header.render([&name, value]));
        }

        push_list(
            &mut section,
            "filter",
            &model.filter_field_list,
            &exprs.filter_delimiter,
            &exprs.filter,
        );

        if let Some(search) = model.search() {
            trace!("Appending search fragment");
            section.push_str(&exprs.search.render([&search]));
        }

        push_list(
            &mut section,
            "expand",
            &model.expand_field_list,
            &exprs.expand_delimiter,
            &exprs.expand,
        );
        push_list(
            &mut section,
            "select",
            &model.select_field_list,
            &exprs.select_delimiter,
            &exprs.select,
        );
        push_list(
            &mut section,
            "orderby",
            &model.order_by_field_list,
            &exprs.order_by_delimiter,
            &exprs.order_by,
        );

        if let Some(skip) = model.odata_uri.skip {
            trace!("Appending skip fragment");
            section.push_str(&exprs.skip.render([&skip]));
        }
        if let Some(skip_token) = model.skip_token() {
            trace!("Appending skiptoken fragment");
            section.push_str(&exprs.skip_token.render([&skip_token]));
        }
        if let Some(top) = model.odata_uri.top {
            trace!("Appending top fragment");
            section.push_str(&exprs.top.render([&top]));
        }

        debug!("Generated query section ({} bytes)", section.len());
        Ok(section)
    }
}

/// Join a non-empty clause list and append it through its template
fn push_list(
    section: &mut String,
    feature: &str,
    fields: &[String],
    delimiter: &str,
    template: &ValueTemplate,
) {
    if fields.is_empty() {
        return;
    }
    trace!("Appending {} fragment ({} clauses)", feature, fields.len());
    let joined = join_with_delimiter(fields, delimiter);
    section.push_str(&template.render([&joined]));
}

/// Generate the query section of a snippet for a request in one language
pub fn generate_query_section(
    model: &RequestModel,
    expressions: &LanguageExpressions,
) -> Result<String> {
    QuerySectionBuilder::new(expressions).generate(model)
}
