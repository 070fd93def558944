//! Core types shared by every component.
//!
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for observability, toolbox, and mappings

mod config;
mod errors;

pub use config::{Config, MappingConfig, ObservabilityConfig, ToolConfig, ToolboxConfig};
pub use errors::{BoxError, Error, Result};
