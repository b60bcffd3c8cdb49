//! Positional format templates with a fixed argument count
//!
//! Two placeholder styles are accepted and may be mixed:
//!
//! - `{0}`, `{1}`, ... refer to an argument by index and may repeat
//! - `%s` / `%d` take the next argument in order
//!
//! `{{`, `}}` and `%%` produce literal braces and percent signs. Every
//! placeholder is checked against the arity `N` when the template is parsed,
//! so rendering cannot fail.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SnippetError};

/// A parsed template taking exactly `N` arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<const N: usize> {
    source: String,
    parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Arg(usize),
}

impl<const N: usize> Template<N> {
    /// Parse a template, rejecting placeholders beyond the `N` supplied arguments
    pub fn parse(source: &str) -> Result<Self> {
        let parts = parse_parts(source)?;
        for part in &parts {
            if let Part::Arg(index) = part {
                if *index >= N {
                    return Err(SnippetError::TemplateMismatch {
                        template: source.to_string(),
                        expected: N,
                        index: *index,
                    });
                }
            }
        }
        Ok(Self {
            source: source.to_string(),
            parts,
        })
    }

    /// The template text as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Highest argument index used plus one, zero if none are used
    pub fn referenced_args(&self) -> usize {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Arg(i) => Some(i + 1),
                Part::Literal(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Substitute the arguments into the template
    pub fn render(&self, args: [&dyn fmt::Display; N]) -> String {
        let mut out = String::with_capacity(self.source.len());
        for part in &self.parts {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::Arg(index) => out.push_str(&args[*index].to_string()),
            }
        }
        out
    }
}

fn invalid(source: &str, reason: impl Into<String>) -> SnippetError {
    SnippetError::InvalidTemplate {
        template: source.to_string(),
        reason: reason.into(),
    }
}

fn flush(literal: &mut String, parts: &mut Vec<Part>) {
    if !literal.is_empty() {
        parts.push(Part::Literal(std::mem::take(literal)));
    }
}

fn parse_parts(source: &str) -> Result<Vec<Part>> {
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut next_sequential = 0;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '{' => {
                let mut digits = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(d) if d.is_ascii_digit() => digits.push(d),
                        Some(other) => {
                            return Err(invalid(
                                source,
                                format!("unexpected '{}' inside placeholder", other),
                            ))
                        }
                        None => return Err(invalid(source, "unclosed '{'")),
                    }
                }
                if digits.is_empty() {
                    return Err(invalid(source, "empty placeholder '{}'"));
                }
                let index = digits
                    .parse::<usize>()
                    .map_err(|e| invalid(source, format!("bad placeholder index: {}", e)))?;
                flush(&mut literal, &mut parts);
                parts.push(Part::Arg(index));
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '}' => return Err(invalid(source, "unmatched '}'")),
            '%' => match chars.peek() {
                Some('%') => {
                    chars.next();
                    literal.push('%');
                }
                Some('s') | Some('d') => {
                    chars.next();
                    flush(&mut literal, &mut parts);
                    parts.push(Part::Arg(next_sequential));
                    next_sequential += 1;
                }
                _ => literal.push('%'),
            },
            _ => literal.push(c),
        }
    }

    flush(&mut literal, &mut parts);
    Ok(parts)
}

impl<const N: usize> fmt::Display for Template<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl<const N: usize> Serialize for Template<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de, const N: usize> Deserialize<'de> for Template<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Template::parse(&source).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_placeholders() {
        let t = Template::<2>::parse("\n\t.Header(\"{0}\",\"{1}\")").unwrap();
        assert_eq!(
            t.render([&"Prefer", &"outlook.timezone"]),
            "\n\t.Header(\"Prefer\",\"outlook.timezone\")"
        );

        let t = Template::<2>::parse("{1}={0};{1}").unwrap();
        assert_eq!(t.render([&"a", &"b"]), "b=a;b");
    }

    #[test]
    fn test_printf_placeholders() {
        let t = Template::<1>::parse(".top(%d)").unwrap();
        assert_eq!(t.render([&10u64]), ".top(10)");

        let t = Template::<2>::parse("%s: %s").unwrap();
        assert_eq!(t.render([&"Accept", &"text/plain"]), "Accept: text/plain");
    }

    #[test]
    fn test_escapes() {
        let t = Template::<1>::parse("{{ {0} }} 100%% %x").unwrap();
        assert_eq!(t.render([&"v"]), "{ v } 100% %x");
        assert_eq!(t.as_str(), "{{ {0} }} 100%% %x");
    }

    #[test]
    fn test_out_of_range_placeholder() {
        let err = Template::<1>::parse(".filter({0}, {1})").unwrap_err();
        assert!(matches!(
            err,
            SnippetError::TemplateMismatch {
                expected: 1,
                index: 1,
                ..
            }
        ));

        let err = Template::<1>::parse("%s and %s").unwrap_err();
        assert!(matches!(err, SnippetError::TemplateMismatch { index: 1, .. }));
    }

    #[test]
    fn test_unused_arguments_allowed() {
        let t = Template::<2>::parse(".header({0})").unwrap();
        assert_eq!(t.referenced_args(), 1);
        assert_eq!(t.render([&"Accept", &"ignored"]), ".header(Accept)");

        let t = Template::<2>::parse("").unwrap();
        assert_eq!(t.referenced_args(), 0);
        assert_eq!(t.render([&"Accept", &"ignored"]), "");
    }

    #[test]
    fn test_syntax_errors() {
        for bad in ["{0", "{a}", "{}", "oops}", "{0:x}"] {
            let err = Template::<1>::parse(bad).unwrap_err();
            assert!(
                matches!(err, SnippetError::InvalidTemplate { .. }),
                "expected syntax error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let t: Template<1> = serde_json::from_str(r#"".select({0})""#).unwrap();
        assert_eq!(t.render([&"id"]), ".select(id)");

        let err = serde_json::from_str::<Template<1>>(r#"".select({3})""#).unwrap_err();
        assert!(err.to_string().contains("{3}"));
    }
}
