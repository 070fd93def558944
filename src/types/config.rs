//! Configuration structures.
//!
//! Configuration is loaded from JSON files. Every section is optional and
//! falls back to its defaults.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::Result;
use crate::tools::Properties;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Tools available to templates.
    #[serde(default)]
    pub toolbox: ToolboxConfig,

    /// Action and forward mappings of the MVC front controller.
    #[serde(default)]
    pub mappings: MappingConfig,
}

impl Config {
    /// Parse configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Tracing log level used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// Toolbox configuration: shared defaults plus one entry per tool.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToolboxConfig {
    /// Defaults inherited by every tool that does not set them itself.
    #[serde(default)]
    pub properties: Properties,

    #[serde(default)]
    pub tools: Vec<ToolConfig>,
}

/// A single tool entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Name the tool is exposed under in the template context.
    pub key: String,

    /// Registered class name (see `ClassRegistry`).
    pub class: String,

    /// Request path pattern: `*`, `/prefix*`, or an exact path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrict_to: Option<String>,

    #[serde(default)]
    pub properties: Properties,
}

/// Front-controller mapping configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MappingConfig {
    /// Servlet mapping of the front controller, e.g. `*.do` or `/do/*`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servlet_mapping: Option<String>,

    /// action name -> action path
    #[serde(default)]
    pub actions: HashMap<String, String>,

    /// global forward name -> forward path
    #[serde(default)]
    pub forwards: HashMap<String, String>,
}
