//! Link building from MVC action and forward configuration.

pub mod mapping;
pub mod tool;
pub mod value;

pub use mapping::{ActionMappings, MappingResolver, ServletMapping};
pub use tool::MappingLinkTool;
pub use value::Link;
