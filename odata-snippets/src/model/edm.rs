//! Entity Data Model types referenced by path segments

use std::fmt;

use serde::{Deserialize, Serialize};

/// An EDM type definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EdmType {
    /// `Collection(T)`
    Collection { element_type: Box<EdmType> },
    /// Entity or complex type with declared properties
    Structured(StructuredType),
    /// Primitive, enum, or type definition, known only by its qualified name
    Scalar { full_name: String },
}

/// Entity or complex type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredType {
    /// Schema namespace, e.g. `microsoft.graph`
    #[serde(default)]
    pub namespace: String,

    /// Unqualified type name, e.g. `user`
    pub name: String,

    /// Properties declared directly on this type, in declaration order
    #[serde(default)]
    pub declared_properties: Vec<EdmProperty>,
}

/// A structural or navigation property of a structured type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdmProperty {
    pub name: String,

    #[serde(rename = "type")]
    pub property_type: EdmType,
}

impl EdmType {
    /// Shorthand for a scalar type
    pub fn scalar(full_name: impl Into<String>) -> Self {
        EdmType::Scalar {
            full_name: full_name.into(),
        }
    }

    /// Shorthand for `Collection(element)`
    pub fn collection(element: EdmType) -> Self {
        EdmType::Collection {
            element_type: Box::new(element),
        }
    }

    /// The element type if this is a collection
    pub fn element_type(&self) -> Option<&EdmType> {
        match self {
            EdmType::Collection { element_type } => Some(element_type.as_ref()),
            _ => None,
        }
    }

    /// The element type of a collection, or the type itself (one level only)
    pub fn unwrap_collection(&self) -> &EdmType {
        self.element_type().unwrap_or(self)
    }

    pub fn as_structured(&self) -> Option<&StructuredType> {
        match self {
            EdmType::Structured(structured) => Some(structured),
            _ => None,
        }
    }
}

impl StructuredType {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            declared_properties: Vec::new(),
        }
    }

    /// Add a declared property
    pub fn property(mut self, name: impl Into<String>, property_type: EdmType) -> Self {
        self.declared_properties.push(EdmProperty {
            name: name.into(),
            property_type,
        });
        self
    }

    /// Namespace-qualified name
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Find a declared property by exact (case-sensitive) name
    pub fn find_property(&self, name: &str) -> Option<&EdmProperty> {
        self.declared_properties.iter().find(|p| p.name == name)
    }
}

impl From<StructuredType> for EdmType {
    fn from(structured: StructuredType) -> Self {
        EdmType::Structured(structured)
    }
}

impl fmt::Display for EdmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdmType::Collection { element_type } => write!(f, "Collection({})", element_type),
            EdmType::Structured(structured) => f.write_str(&structured.full_name()),
            EdmType::Scalar { full_name } => f.write_str(full_name),
        }
    }
}
