//! Snippet generation module

mod join;
mod naming;
mod query_section;
mod type_resolver;

pub use join::*;
pub use naming::*;
pub use query_section::*;
pub use type_resolver::*;
