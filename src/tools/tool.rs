//! The tool contract and its optional configuration capabilities.
//!
//! A tool opts into bulk configuration by exposing [`Configurable`] and into
//! per-property assignment by exposing [`PropertySet`]. Either, both, or
//! neither may be present; [`ToolInfo::create`](super::ToolInfo::create)
//! applies whichever the instance offers.

use serde_json::Value;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use crate::types::BoxError;

/// Property name -> value mapping handed to tools.
pub type Properties = HashMap<String, Value>;

/// A helper object exposed to template evaluation for one request.
pub trait Tool: Any + Send + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Bulk configuration hook, if the tool has one.
    fn as_configurable(&mut self) -> Option<&mut dyn Configurable> {
        None
    }

    /// Individually settable properties, if the tool has any.
    fn as_property_set(&mut self) -> Option<&mut dyn PropertySet> {
        None
    }
}

impl dyn Tool {
    pub fn is<T: Tool>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Tool>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Tool>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// Receives the full combined property mapping once per creation.
pub trait Configurable {
    fn setup(&mut self, properties: &Properties) -> Result<(), BoxError>;
}

/// Generic property assignment by name.
pub trait PropertySet {
    fn is_writable(&self, name: &str) -> bool;

    fn set_property(&mut self, name: &str, value: Value) -> Result<(), BoxError>;
}

// =============================================================================
// Setter table
// =============================================================================

/// Setter for a single named property.
pub type Setter<T> = fn(&mut T, Value) -> Result<(), BoxError>;

/// Builder-style table of named setters a tool can delegate its
/// [`PropertySet`] implementation to.
pub struct Setters<T> {
    setters: HashMap<&'static str, Setter<T>>,
}

impl<T> Setters<T> {
    pub fn new() -> Self {
        Self {
            setters: HashMap::new(),
        }
    }

    /// Register a setter under `name`, replacing any earlier one.
    pub fn with(mut self, name: &'static str, setter: Setter<T>) -> Self {
        self.setters.insert(name, setter);
        self
    }

    pub fn is_writable(&self, name: &str) -> bool {
        self.setters.contains_key(name)
    }

    /// Apply the setter registered for `name`.
    pub fn apply(&self, target: &mut T, name: &str, value: Value) -> Result<(), BoxError> {
        match self.setters.get(name) {
            Some(setter) => setter(target, value),
            None => Err(format!("no writable property '{}'", name).into()),
        }
    }

    /// Sorted property names.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.setters.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl<T> Default for Setters<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Setters<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setters")
            .field("names", &self.names())
            .finish()
    }
}
