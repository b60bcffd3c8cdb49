//! Parsed request model consumed by the query section builder

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;

/// An already-parsed OData request, as produced by the URI parsing layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestModel {
    /// Request headers in the order they were received
    #[serde(default)]
    pub request_headers: RequestHeaders,

    /// Formatted `$filter` clauses
    #[serde(default)]
    pub filter_field_list: Vec<String>,

    /// Formatted `$expand` clauses
    #[serde(default)]
    pub expand_field_list: Vec<String>,

    /// Formatted `$select` clauses
    #[serde(default)]
    pub select_field_list: Vec<String>,

    /// Formatted `$orderby` clauses
    #[serde(default)]
    pub order_by_field_list: Vec<String>,

    /// The `$search` expression, if any
    #[serde(default)]
    pub search_expression: Option<String>,

    /// Paging options of the parsed URI
    #[serde(default)]
    pub odata_uri: ODataUri,
}

/// Paging options taken from the parsed OData URI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ODataUri {
    /// `$skip`
    #[serde(default)]
    pub skip: Option<u64>,

    /// `$skiptoken`
    #[serde(default)]
    pub skip_token: Option<String>,

    /// `$top`
    #[serde(default)]
    pub top: Option<u64>,
}

impl RequestModel {
    /// Parse a request model from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The search expression, treating an empty string as absent
    pub fn search(&self) -> Option<&str> {
        self.search_expression.as_deref().filter(|s| !s.is_empty())
    }

    /// The skip token, treating an empty string as absent
    pub fn skip_token(&self) -> Option<&str> {
        self.odata_uri.skip_token.as_deref().filter(|s| !s.is_empty())
    }
}

/// Insertion-ordered mapping from header name to its values
///
/// Serialized as a JSON object; document order is kept on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    entries: Vec<(String, Vec<String>)>,
}

impl RequestHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value, adding the header after existing ones if the name is new
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, values)) => values.push(value.into()),
            None => self.entries.push((name, vec![value.into()])),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for RequestHeaders
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = RequestHeaders::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

impl Serialize for RequestHeaders {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, values) in &self.entries {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RequestHeaders {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(HeadersVisitor)
    }
}

struct HeadersVisitor;

impl<'de> Visitor<'de> for HeadersVisitor {
    type Value = RequestHeaders;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of header names to lists of values")
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut access: A,
    ) -> std::result::Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, values)) = access.next_entry::<String, Vec<String>>()? {
            entries.push((name, values));
        }
        Ok(RequestHeaders { entries })
    }
}
