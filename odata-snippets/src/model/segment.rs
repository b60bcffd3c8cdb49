//! Path segments of a parsed OData URI

use serde::{Deserialize, Serialize};

use super::edm::EdmType;

/// One component of a parsed request path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathSegment {
    /// `/me/manager`, `/users/{id}/messages`
    NavigationProperty { property: NavigationProperty },
    /// `/users`
    EntitySet {
        name: String,
        /// Type of the set, normally `Collection(<entity type>)`
        #[serde(rename = "type")]
        set_type: EdmType,
    },
    /// A function or action invocation
    Operation {
        /// Candidate overloads resolved by the parser; only the first is used
        operations: Vec<EdmOperation>,
    },
    /// Key, property, `$count`, `$value` and other segments
    Other { identifier: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationProperty {
    pub name: String,

    /// Declared type, `Collection(T)` for collection-valued properties
    #[serde(rename = "type")]
    pub property_type: EdmType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdmOperation {
    /// Qualified operation name, e.g. `microsoft.graph.sendMail`
    pub name: String,

    /// Parameters in declaration order, including the binding parameter
    #[serde(default)]
    pub parameters: Vec<OperationParameter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationParameter {
    pub name: String,

    #[serde(rename = "type")]
    pub parameter_type: EdmType,
}

impl PathSegment {
    /// The identifier the URI parser assigns to this segment
    pub fn identifier(&self) -> &str {
        match self {
            PathSegment::NavigationProperty { property } => &property.name,
            PathSegment::EntitySet { name, .. } => name,
            PathSegment::Operation { operations } => operations
                .first()
                .map(|op| op.name.as_str())
                .unwrap_or_default(),
            PathSegment::Other { identifier } => identifier,
        }
    }
}

impl OperationParameter {
    pub fn new(name: impl Into<String>, parameter_type: EdmType) -> Self {
        Self {
            name: name.into(),
            parameter_type,
        }
    }
}
