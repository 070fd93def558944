//! Tool classes: named factories for tool instances.
//!
//! A class stands in for "a type with a no-argument constructor". Classes are
//! registered by name in a [`ClassRegistry`] so textual configuration can
//! refer to them.

use std::any::type_name;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::tool::Tool;
use crate::types::BoxError;

type Factory = dyn Fn() -> Result<Box<dyn Tool>, BoxError> + Send + Sync;

/// A named, shareable tool factory.
#[derive(Clone)]
pub struct ToolClass {
    name: String,
    factory: Arc<Factory>,
}

impl ToolClass {
    /// Class for a default-constructible tool type, named after the type.
    pub fn of<T: Tool + Default>() -> Self {
        Self::new(type_name::<T>(), || Ok(Box::new(T::default()) as Box<dyn Tool>))
    }

    /// Class backed by an arbitrary, possibly failing, factory.
    pub fn new<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn Tool>, BoxError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Produce a new instance.
    pub fn instantiate(&self) -> Result<Box<dyn Tool>, BoxError> {
        (self.factory)()
    }
}

impl fmt::Debug for ToolClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolClass").field("name", &self.name).finish()
    }
}

// =============================================================================
// Class registry
// =============================================================================

/// Name -> class lookup used to resolve configured class names.
#[derive(Debug, Default, Clone)]
pub struct ClassRegistry {
    classes: HashMap<String, ToolClass>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Register a class under its own name.
    pub fn register(&mut self, class: ToolClass) {
        self.classes.insert(class.name().to_string(), class);
    }

    /// Register a class under an additional short name.
    pub fn register_as(&mut self, alias: &str, class: ToolClass) {
        self.classes.insert(alias.to_string(), class);
    }

    pub fn resolve(&self, name: &str) -> Option<&ToolClass> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.classes.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
