//! Tool descriptors: how to build and configure one named tool.
//!
//! A [`ToolInfo`] is created once at toolbox setup and then shared by every
//! request. Each call to [`ToolInfo::create`] yields a fresh instance
//! configured from the descriptor's static properties merged with the
//! request's dynamic ones.

use serde_json::Value;

use super::class::{ClassRegistry, ToolClass};
use super::restriction::PathRestriction;
use super::tool::{Properties, Tool};
use crate::types::{Error, Result};

/// Registration metadata for one tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    key: String,
    class: ToolClass,
    has_setup: bool,
    restriction: PathRestriction,
    properties: Properties,
}

impl ToolInfo {
    /// Create a descriptor from a key and a class.
    ///
    /// Fails if the key is empty or the class cannot produce an instance.
    pub fn new(key: impl Into<String>, class: ToolClass) -> Result<Self> {
        let key = validate_key(key.into())?;
        let has_setup = trial_setup_flag(&class)?;
        tracing::debug!(
            key = %key,
            class = %class.name(),
            has_setup,
            "Registered tool"
        );
        Ok(Self {
            key,
            class,
            has_setup,
            restriction: PathRestriction::Any,
            properties: Properties::new(),
        })
    }

    /// Create a descriptor whose class is looked up by name.
    pub fn from_type(
        key: impl Into<String>,
        classname: &str,
        registry: &ClassRegistry,
    ) -> Result<Self> {
        Self::new(key, resolve(classname, registry)?)
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    pub fn set_key(&mut self, key: impl Into<String>) -> Result<()> {
        self.key = validate_key(key.into())?;
        Ok(())
    }

    /// Replace the class with the one registered under `classname`.
    pub fn set_type(&mut self, classname: &str, registry: &ClassRegistry) -> Result<()> {
        self.set_class(resolve(classname, registry)?)
    }

    /// Replace the class after a trial instantiation. On failure the
    /// descriptor keeps its previous class.
    pub fn set_class(&mut self, class: ToolClass) -> Result<()> {
        self.has_setup = trial_setup_flag(&class)?;
        self.class = class;
        Ok(())
    }

    /// Restrict the tool to request paths matching `pattern`.
    pub fn restrict_to(&mut self, pattern: &str) {
        self.restriction = PathRestriction::parse(pattern);
    }

    /// Merge inherited defaults. Properties already set here are kept.
    pub fn add_properties(&mut self, parent: Option<&Properties>) {
        let Some(parent) = parent else {
            return;
        };
        for (name, value) in parent {
            if !self.properties.contains_key(name) {
                self.properties.insert(name.clone(), value.clone());
            }
        }
    }

    /// Set a static property, returning the previous value.
    pub fn put_property(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.properties.insert(name.into(), value)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn classname(&self) -> &str {
        self.class.name()
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn restriction(&self) -> &PathRestriction {
        &self.restriction
    }

    pub fn has_setup(&self) -> bool {
        self.has_setup
    }

    /// Whether a template at `path` may use this tool.
    pub fn has_permission(&self, path: Option<&str>) -> bool {
        self.restriction.permits(path)
    }

    // =========================================================================
    // Factory
    // =========================================================================

    /// Build a new, configured instance of the tool.
    ///
    /// Static properties are merged with `dynamic` (dynamic wins on a shared
    /// name). The merged mapping goes to the tool's `setup` hook when it has
    /// one, and each name is then offered to the tool's writable properties.
    pub fn create(&self, dynamic: Option<&Properties>) -> Result<Box<dyn Tool>> {
        let mut tool = self.new_instance()?;
        let combined = combine(&[Some(&self.properties), dynamic]);

        if self.has_setup {
            self.setup(tool.as_mut(), &combined)?;
        }
        self.assign_properties(tool.as_mut(), &combined)?;

        tracing::debug!(
            key = %self.key,
            properties = combined.len(),
            "Created tool"
        );
        Ok(tool)
    }

    fn new_instance(&self) -> Result<Box<dyn Tool>> {
        self.class
            .instantiate()
            .map_err(|source| Error::Instantiation {
                class: self.class.name().to_string(),
                source,
            })
    }

    fn setup(&self, tool: &mut dyn Tool, properties: &Properties) -> Result<()> {
        // registration saw a setup hook on the trial instance
        let Some(configurable) = tool.as_configurable() else {
            return Err(Error::internal(format!(
                "tool '{}' no longer exposes its setup hook",
                self.class.name()
            )));
        };
        configurable
            .setup(properties)
            .map_err(|source| Error::Setup {
                class: self.class.name().to_string(),
                source,
            })
    }

    fn assign_properties(&self, tool: &mut dyn Tool, properties: &Properties) -> Result<()> {
        let Some(target) = tool.as_property_set() else {
            return Ok(());
        };

        let mut names: Vec<&String> = properties.keys().collect();
        names.sort();
        for name in names {
            if !target.is_writable(name) {
                continue;
            }
            target
                .set_property(name, properties[name].clone())
                .map_err(|source| Error::PropertyAssignment {
                    class: self.class.name().to_string(),
                    property: name.clone(),
                    source,
                })?;
        }
        Ok(())
    }
}

fn validate_key(key: String) -> Result<String> {
    if key.is_empty() {
        return Err(Error::invalid_configuration("Key cannot be empty"));
    }
    Ok(key)
}

fn resolve(classname: &str, registry: &ClassRegistry) -> Result<ToolClass> {
    registry
        .resolve(classname)
        .cloned()
        .ok_or_else(|| Error::invalid_configuration(format!("Could not load class: {}", classname)))
}

/// Trial instantiation; reports whether the instance has a setup hook.
fn trial_setup_flag(class: &ToolClass) -> Result<bool> {
    let mut trial = class.instantiate().map_err(|source| {
        Error::invalid_configuration_with(
            format!("Could not create an instance of {}", class.name()),
            source,
        )
    })?;
    Ok(trial.as_configurable().is_some())
}

/// Union of the given maps; later maps overwrite earlier ones.
fn combine(maps: &[Option<&Properties>]) -> Properties {
    let mut combined = Properties::new();
    for map in maps.iter().flatten() {
        combined.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    combined
}
