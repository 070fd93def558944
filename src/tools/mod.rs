//! Tool infrastructure: the tool contract, descriptors, path restrictions,
//! and the toolbox that builds per-request tool sets.

pub mod class;
pub mod info;
pub mod restriction;
pub mod tool;
pub mod toolbox;

pub use class::{ClassRegistry, ToolClass};
pub use info::ToolInfo;
pub use restriction::PathRestriction;
pub use tool::{Configurable, Properties, PropertySet, Setter, Setters, Tool};
pub use toolbox::{ToolSet, Toolbox};
