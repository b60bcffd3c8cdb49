//! Request and EDM model types consumed by the generators

mod edm;
mod request;
mod segment;

pub use edm::*;
pub use request::*;
pub use segment::*;
