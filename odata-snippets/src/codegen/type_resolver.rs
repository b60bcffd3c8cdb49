//! Path segment to EDM type name resolution

use tracing::trace;

use super::naming::{eq_ignore_case, is_binding_parameter};
use crate::model::{EdmType, PathSegment};

/// Resolve the type name reachable from a path segment for a property or parameter
pub struct TypeNameResolver;

impl TypeNameResolver {
    /// Find the qualified type name for `identifier`, or `None` if nothing matches
    pub fn find(segment: &PathSegment, identifier: &str) -> Option<String> {
        match segment {
            PathSegment::NavigationProperty { property } => {
                Self::from_edm_type(&property.property_type, &property.name, identifier)
            }
            PathSegment::EntitySet { name, set_type } => {
                Self::from_edm_type(set_type, name, identifier)
            }
            PathSegment::Operation { operations } => {
                let operation = operations.first()?;
                operation
                    .parameters
                    .iter()
                    .filter(|p| {
                        let skip = is_binding_parameter(&p.name);
                        if skip {
                            trace!("Skipping binding parameter {}", p.name);
                        }
                        !skip
                    })
                    .find_map(|p| Self::from_edm_type(&p.parameter_type, &p.name, identifier))
            }
            PathSegment::Other { identifier: other } => {
                trace!("No type information on segment {}", other);
                None
            }
        }
    }

    /// Like [`TypeNameResolver::find`], returning an empty string when nothing matches
    pub fn resolve(segment: &PathSegment, identifier: &str) -> String {
        Self::find(segment, identifier).unwrap_or_default()
    }

    /// Search a type definition owned by `owner` for `identifier`
    fn from_edm_type(definition: &EdmType, owner: &str, identifier: &str) -> Option<String> {
        // One level only: Collection(Collection(T)) resolves to Collection(T)
        let element = definition.unwrap_collection();

        if eq_ignore_case(owner, identifier) {
            trace!("{} is the owning segment, using {}", identifier, element);
            return non_empty(element.to_string());
        }

        let structured = element.as_structured()?;
        let property = structured.find_property(identifier)?;
        trace!("Found property {} on {}", identifier, structured.full_name());
        non_empty(property.property_type.unwrap_collection().to_string())
    }
}

fn non_empty(name: String) -> Option<String> {
    (!name.is_empty()).then_some(name)
}

/// Resolve the type name for `identifier` on `segment`; empty when not found
pub fn resolve_type_name(segment: &PathSegment, identifier: &str) -> String {
    TypeNameResolver::resolve(segment, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EdmOperation, NavigationProperty, OperationParameter, StructuredType};

    fn message_type() -> StructuredType {
        StructuredType::new("microsoft.graph", "message")
            .property("subject", EdmType::scalar("Edm.String"))
            .property(
                "toRecipients",
                EdmType::collection(StructuredType::new("microsoft.graph", "recipient").into()),
            )
            .property(
                "body",
                StructuredType::new("microsoft.graph", "itemBody").into(),
            )
    }

    fn messages_segment() -> PathSegment {
        PathSegment::NavigationProperty {
            property: NavigationProperty {
                name: "messages".into(),
                property_type: EdmType::collection(message_type().into()),
            },
        }
    }

    fn send_mail_segment(parameters: Vec<OperationParameter>) -> PathSegment {
        PathSegment::Operation {
            operations: vec![EdmOperation {
                name: "microsoft.graph.sendMail".into(),
                parameters,
            }],
        }
    }

    #[test]
    fn test_navigation_owner_matches() {
        assert_eq!(
            resolve_type_name(&messages_segment(), "Messages"),
            "microsoft.graph.message"
        );
    }

    #[test]
    fn test_navigation_property_lookup() {
        let segment = messages_segment();
        assert_eq!(resolve_type_name(&segment, "subject"), "Edm.String");
        assert_eq!(resolve_type_name(&segment, "body"), "microsoft.graph.itemBody");
        assert_eq!(
            resolve_type_name(&segment, "toRecipients"),
            "microsoft.graph.recipient"
        );
    }

    #[test]
    fn test_property_lookup_is_case_sensitive() {
        assert_eq!(resolve_type_name(&messages_segment(), "Subject"), "");
    }

    #[test]
    fn test_entity_set() {
        let segment = PathSegment::EntitySet {
            name: "users".into(),
            set_type: EdmType::collection(
                StructuredType::new("microsoft.graph", "user")
                    .property("displayName", EdmType::scalar("Edm.String"))
                    .into(),
            ),
        };
        assert_eq!(resolve_type_name(&segment, "users"), "microsoft.graph.user");
        assert_eq!(resolve_type_name(&segment, "displayName"), "Edm.String");
        assert_eq!(resolve_type_name(&segment, "missing"), "");
    }

    #[test]
    fn test_operation_skips_binding_parameters() {
        let segment = send_mail_segment(vec![
            OperationParameter::new(
                "bindingParameter",
                StructuredType::new("microsoft.graph", "user").into(),
            ),
            OperationParameter::new("BindParameter", EdmType::scalar("Edm.Guid")),
            OperationParameter::new("Message", message_type().into()),
            OperationParameter::new("SaveToSentItems", EdmType::scalar("Edm.Boolean")),
        ]);
        // the binding parameter would otherwise match by owner name
        assert_eq!(resolve_type_name(&segment, "bindingparameter"), "");
        assert_eq!(resolve_type_name(&segment, "bindparameter"), "");
        assert_eq!(resolve_type_name(&segment, "message"), "microsoft.graph.message");
        assert_eq!(resolve_type_name(&segment, "saveToSentItems"), "Edm.Boolean");
    }

    #[test]
    fn test_operation_first_match_wins() {
        let segment = send_mail_segment(vec![
            OperationParameter::new("draft", message_type().into()),
            OperationParameter::new("reply", message_type().into()),
        ]);
        // both parameters declare "subject"; the first one resolves it
        assert_eq!(resolve_type_name(&segment, "subject"), "Edm.String");
        assert_eq!(resolve_type_name(&segment, "reply"), "microsoft.graph.message");
    }

    #[test]
    fn test_operation_without_overloads() {
        let segment = PathSegment::Operation { operations: vec![] };
        assert_eq!(TypeNameResolver::find(&segment, "anything"), None);
    }

    #[test]
    fn test_operation_nothing_resolves() {
        let segment = send_mail_segment(vec![OperationParameter::new(
            "comment",
            EdmType::scalar("Edm.String"),
        )]);
        assert_eq!(resolve_type_name(&segment, "message"), "");
    }

    #[test]
    fn test_other_segment() {
        let segment = PathSegment::Other {
            identifier: "$count".into(),
        };
        assert_eq!(resolve_type_name(&segment, "$count"), "");
    }

    #[test]
    fn test_single_level_collection_unwrap() {
        let matrix = PathSegment::NavigationProperty {
            property: NavigationProperty {
                name: "rows".into(),
                property_type: EdmType::collection(EdmType::collection(message_type().into())),
            },
        };
        assert_eq!(
            resolve_type_name(&matrix, "rows"),
            "Collection(microsoft.graph.message)"
        );
        // the unwrapped type is still a collection, so no property search happens
        assert_eq!(resolve_type_name(&matrix, "subject"), "");
    }

    #[test]
    fn test_nested_collection_property_unwraps_once() {
        let segment = PathSegment::EntitySet {
            name: "grids".into(),
            set_type: EdmType::collection(
                StructuredType::new("contoso", "grid")
                    .property(
                        "cells",
                        EdmType::collection(EdmType::collection(EdmType::scalar("Edm.Double"))),
                    )
                    .into(),
            ),
        };
        assert_eq!(
            resolve_type_name(&segment, "cells"),
            "Collection(Edm.Double)"
        );
    }
}
