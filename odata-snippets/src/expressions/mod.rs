//! Language expression tables and the template format they use

mod presets;
mod table;
mod template;

pub use presets::*;
pub use table::*;
pub use template::*;
