//! Toolbox: the set of tool descriptors active for one scope.
//!
//! Owns descriptors (not tool instances) and builds the per-request tool set
//! for a template path.

use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use super::class::ClassRegistry;
use super::info::ToolInfo;
use super::tool::{Properties, Tool};
use crate::types::{Result, ToolboxConfig};

/// Tools built for one request, keyed by tool key.
pub type ToolSet = BTreeMap<String, Box<dyn Tool>>;

// =============================================================================
// Toolbox
// =============================================================================

/// In-memory toolbox. Read-only once setup is complete.
#[derive(Debug, Default)]
pub struct Toolbox {
    tools: HashMap<String, ToolInfo>,
    properties: Properties,
}

impl Toolbox {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            properties: Properties::new(),
        }
    }

    /// Build a toolbox from configuration, resolving class names through
    /// `registry`.
    pub fn from_config(config: &ToolboxConfig, registry: &ClassRegistry) -> Result<Self> {
        let mut toolbox = Self::new();
        for (name, value) in &config.properties {
            toolbox.set_property(name.clone(), value.clone());
        }

        for entry in &config.tools {
            let mut info = ToolInfo::from_type(entry.key.as_str(), &entry.class, registry)?;
            if let Some(pattern) = &entry.restrict_to {
                info.restrict_to(pattern);
            }
            for (name, value) in &entry.properties {
                info.put_property(name.clone(), value.clone());
            }
            toolbox.register(info);
        }

        tracing::info!(tools = toolbox.len(), "Toolbox configured");
        Ok(toolbox)
    }

    /// Set a toolbox-wide default inherited by tools registered afterwards.
    pub fn set_property(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.properties.insert(name.into(), value)
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Register a descriptor, filling in toolbox defaults it does not set
    /// itself. Replaces any descriptor with the same key.
    pub fn register(&mut self, mut info: ToolInfo) -> Option<ToolInfo> {
        info.add_properties(Some(&self.properties));
        let previous = self.tools.insert(info.key().to_string(), info);
        if let Some(previous) = &previous {
            tracing::debug!("Replaced tool: {}", previous.key());
        }
        previous
    }

    /// Get a descriptor by key.
    pub fn get(&self, key: &str) -> Option<&ToolInfo> {
        self.tools.get(key)
    }

    pub fn has_tool(&self, key: &str) -> bool {
        self.tools.contains_key(key)
    }

    /// List all tool keys, sorted.
    pub fn list_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.tools.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Keys of the tools a template at `path` may use, sorted.
    pub fn available_keys(&self, path: Option<&str>) -> Vec<String> {
        let mut keys: Vec<String> = self
            .tools
            .values()
            .filter(|info| info.has_permission(path))
            .map(|info| info.key().to_string())
            .collect();
        keys.sort();
        keys
    }

    /// Build every tool permitted for `path`.
    ///
    /// Stops at the first tool that fails to build; the descriptors stay
    /// usable for later requests.
    pub fn create_tools(&self, path: Option<&str>, dynamic: Option<&Properties>) -> Result<ToolSet> {
        let mut tools = ToolSet::new();
        for key in self.available_keys(path) {
            let info = &self.tools[&key];
            let tool = info.create(dynamic).map_err(|e| {
                tracing::warn!("tool_creation_failed: key={}, error={}", key, e);
                e
            })?;
            tools.insert(key, tool);
        }
        Ok(tools)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
