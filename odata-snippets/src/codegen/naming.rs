//! Naming utilities for snippet generation

use heck::ToPascalCase;

/// Header the snippet never emits; the SDK client sets it from the base URL
pub const HOST_HEADER: &str = "host";

/// Parameter names the URI parser gives to the bound instance of an operation
pub const BINDING_PARAMETER_NAMES: [&str; 2] = ["bindingparameter", "bindparameter"];

/// Case-insensitive identifier comparison
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Check if a header name is `Host` in any casing
pub fn is_host_header(name: &str) -> bool {
    eq_ignore_case(name, HOST_HEADER)
}

/// Check if an operation parameter is the implicit binding parameter
pub fn is_binding_parameter(name: &str) -> bool {
    BINDING_PARAMETER_NAMES
        .iter()
        .any(|binding| eq_ignore_case(name, binding))
}

/// Convert a qualified EDM type name to the class name used in snippets
/// e.g., "microsoft.graph.user" -> "User", "Collection(microsoft.graph.message)" -> "Message"
pub fn class_name(type_name: &str) -> String {
    let inner = type_name
        .strip_prefix("Collection(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(type_name);
    inner
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_pascal_case()
}
