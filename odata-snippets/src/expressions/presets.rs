//! Built-in expression tables for the supported snippet languages

use std::fmt;
use std::str::FromStr;

use super::table::LanguageExpressions;
use super::template::Template;
use crate::error::{Result, SnippetError};

/// Languages with a built-in expression table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    CSharp,
    JavaScript,
    Java,
}

/// Raw template text for one preset, parsed on demand
struct PresetSource {
    header: &'static str,
    filter: &'static str,
    search: &'static str,
    expand: &'static str,
    select: &'static str,
    order_by: &'static str,
    skip: &'static str,
    skip_token: &'static str,
    top: &'static str,
    filter_delimiter: &'static str,
    expand_delimiter: &'static str,
    select_delimiter: &'static str,
    order_by_delimiter: &'static str,
}

static CSHARP: PresetSource = PresetSource {
    header: "\n\t.Header(\"{0}\",\"{1}\")",
    filter: "\n\t.Filter(\"{0}\")",
    search: "\n\t.Search(\"{0}\")",
    expand: "\n\t.Expand(\"{0}\")",
    select: "\n\t.Select(\"{0}\")",
    order_by: "\n\t.OrderBy(\"{0}\")",
    skip: "\n\t.Skip({0})",
    skip_token: "\n\t.SkipToken(\"{0}\")",
    top: "\n\t.Top({0})",
    filter_delimiter: ",",
    expand_delimiter: ",",
    select_delimiter: ",",
    order_by_delimiter: " ",
};

static JAVASCRIPT: PresetSource = PresetSource {
    header: "\n\t.header('{0}','{1}')",
    filter: "\n\t.filter('{0}')",
    search: "\n\t.search('{0}')",
    expand: "\n\t.expand('{0}')",
    select: "\n\t.select('{0}')",
    order_by: "\n\t.orderby('{0}')",
    skip: "\n\t.skip({0})",
    skip_token: "\n\t.skipToken('{0}')",
    top: "\n\t.top({0})",
    filter_delimiter: ",",
    expand_delimiter: ",",
    select_delimiter: ",",
    order_by_delimiter: " ",
};

static JAVA: PresetSource = PresetSource {
    header: "\nrequestOptions.add(new HeaderOption(\"{0}\", \"{1}\"));",
    filter: "\n\t.filter(\"{0}\")",
    search: "\n\t.search(\"{0}\")",
    expand: "\n\t.expand(\"{0}\")",
    select: "\n\t.select(\"{0}\")",
    order_by: "\n\t.orderBy(\"{0}\")",
    skip: "\n\t.skip({0})",
    skip_token: "\n\t.skipToken(\"{0}\")",
    top: "\n\t.top({0})",
    filter_delimiter: ",",
    expand_delimiter: ",",
    select_delimiter: ",",
    order_by_delimiter: " ",
};

impl Language {
    /// All languages with a built-in table
    pub const ALL: [Language; 3] = [Language::CSharp, Language::JavaScript, Language::Java];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Language::CSharp => "csharp",
            Language::JavaScript => "javascript",
            Language::Java => "java",
        }
    }

    /// Build the validated expression table for this language
    pub fn expressions(&self) -> Result<LanguageExpressions> {
        let src = match self {
            Language::CSharp => &CSHARP,
            Language::JavaScript => &JAVASCRIPT,
            Language::Java => &JAVA,
        };
        Ok(LanguageExpressions {
            header: Template::parse(src.header)?,
            filter: Template::parse(src.filter)?,
            search: Template::parse(src.search)?,
            expand: Template::parse(src.expand)?,
            select: Template::parse(src.select)?,
            order_by: Template::parse(src.order_by)?,
            skip: Template::parse(src.skip)?,
            skip_token: Template::parse(src.skip_token)?,
            top: Template::parse(src.top)?,
            filter_delimiter: src.filter_delimiter.to_string(),
            expand_delimiter: src.expand_delimiter.to_string(),
            select_delimiter: src.select_delimiter.to_string(),
            order_by_delimiter: src.order_by_delimiter.to_string(),
        })
    }
}

impl FromStr for Language {
    type Err = SnippetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csharp" | "c#" | "cs" => Ok(Language::CSharp),
            "javascript" | "js" => Ok(Language::JavaScript),
            "java" => Ok(Language::Java),
            _ => Err(SnippetError::UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
