//! Host container collaborators.
//!
//! The narrow slice of the web container these tools rely on: an
//! application-scoped attribute store, the container context with its log
//! sink, and the per-request path information.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Application attribute key under which the [`ContainerContext`] is stored.
pub const CONTAINER_CONTEXT_KEY: &str = "template_tools.container_context";

/// Application attribute key under which the container may publish the
/// front controller's servlet mapping (a `String` such as `*.do`).
pub const SERVLET_MAPPING_KEY: &str = "template_tools.servlet_mapping";

/// Type-erased application attribute.
pub type Attribute = Arc<dyn Any + Send + Sync>;

/// Engine services visible to extensions.
pub trait RuntimeServices {
    fn application_attribute(&self, key: &str) -> Option<Attribute>;
}

/// The container's log sink.
pub trait ContainerLog: Send + Sync + fmt::Debug {
    fn write(&self, line: &str);
}

/// Container-wide state published to the engine.
#[derive(Debug, Clone)]
pub struct ContainerContext {
    name: String,
    log: Arc<dyn ContainerLog>,
}

impl ContainerContext {
    pub fn new(name: impl Into<String>, log: Arc<dyn ContainerLog>) -> Self {
        Self {
            name: name.into(),
            log,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn log(&self) -> &Arc<dyn ContainerLog> {
        &self.log
    }
}

// =============================================================================
// Application attributes
// =============================================================================

/// In-memory application attribute store.
#[derive(Default)]
pub struct ApplicationAttributes {
    attributes: HashMap<String, Attribute>,
}

impl ApplicationAttributes {
    pub fn new() -> Self {
        Self {
            attributes: HashMap::new(),
        }
    }

    pub fn set_attribute<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
        self.attributes.insert(key.into(), Arc::new(value));
    }

    pub fn remove_attribute(&mut self, key: &str) -> Option<Attribute> {
        self.attributes.remove(key)
    }

    /// Publish the container context under [`CONTAINER_CONTEXT_KEY`].
    pub fn with_container_context(mut self, context: ContainerContext) -> Self {
        self.set_attribute(CONTAINER_CONTEXT_KEY, context);
        self
    }
}

impl RuntimeServices for ApplicationAttributes {
    fn application_attribute(&self, key: &str) -> Option<Attribute> {
        self.attributes.get(key).cloned()
    }
}

impl fmt::Debug for ApplicationAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.attributes.keys().collect();
        keys.sort();
        f.debug_struct("ApplicationAttributes")
            .field("keys", &keys)
            .finish()
    }
}

// =============================================================================
// Request context
// =============================================================================

/// Path information for the request being rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Context path of the web application, e.g. `/shop`. Empty for root.
    pub context_path: String,
    /// Path of the requested template, if known.
    pub request_path: Option<String>,
}

impl RequestContext {
    pub fn new(context_path: impl Into<String>) -> Self {
        Self {
            context_path: context_path.into(),
            request_path: None,
        }
    }

    pub fn with_request_path(mut self, path: impl Into<String>) -> Self {
        self.request_path = Some(path.into());
        self
    }
}
