//! Link tool that builds URLs from MVC action and forward names.
//!
//! Instances are request scoped: build one per request (a toolbox does this
//! through [`MappingLinkTool::class`]) and never share it between requests.

use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::sync::{Arc, OnceLock};

use super::mapping::MappingResolver;
use super::value::Link;
use crate::container::{ApplicationAttributes, RequestContext};
use crate::logging::LogSystem;
use crate::tools::{PropertySet, Setters, Tool, ToolClass};
use crate::types::BoxError;

/// Link tool resolving action and forward names to server-relative URIs.
#[derive(Clone)]
pub struct MappingLinkTool {
    link: Link,
    request: RequestContext,
    application: Arc<ApplicationAttributes>,
    resolver: Arc<dyn MappingResolver>,
    log: Arc<dyn LogSystem>,
}

impl MappingLinkTool {
    pub fn new(
        application: Arc<ApplicationAttributes>,
        resolver: Arc<dyn MappingResolver>,
        log: Arc<dyn LogSystem>,
    ) -> Self {
        Self {
            link: Link::new(),
            request: RequestContext::default(),
            application,
            resolver,
            log,
        }
    }

    /// Class producing a fresh tool per request around shared collaborators.
    pub fn class(
        name: impl Into<String>,
        application: Arc<ApplicationAttributes>,
        resolver: Arc<dyn MappingResolver>,
        log: Arc<dyn LogSystem>,
    ) -> ToolClass {
        ToolClass::new(name, move || {
            let tool = MappingLinkTool::new(
                Arc::clone(&application),
                Arc::clone(&resolver),
                Arc::clone(&log),
            );
            Ok(Box::new(tool) as Box<dyn Tool>)
        })
    }

    pub fn with_request(mut self, request: RequestContext) -> Self {
        self.request = request;
        self
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    pub fn request(&self) -> &RequestContext {
        &self.request
    }

    /// Copy of this link pointing at `action`. Whether the action is defined
    /// is not checked. Query parameters are kept.
    pub fn set_action(&self, action: &str) -> Self {
        let url = self.resolver.action_url(&self.application, &self.request, action);
        self.copy_with(url)
    }

    /// Copy of this link pointing at the global forward `forward`, or `None`
    /// (with a warning) if there is no such forward. Query parameters are
    /// kept.
    pub fn set_forward(&self, forward: &str) -> Option<Self> {
        match self.resolver.forward_url(&self.request, &self.application, forward) {
            Some(url) => Some(self.copy_with(url)),
            None => {
                self.log.warn(&format!(
                    "In method set_forward({}): Parameter does not map to a valid forward.",
                    forward
                ));
                None
            }
        }
    }

    /// Copy with an extra query parameter.
    pub fn param(&self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            link: self.link.with_param(key, value),
            ..self.clone()
        }
    }

    pub fn anchor(&self, anchor: impl Into<String>) -> Self {
        Self {
            link: self.link.with_anchor(anchor),
            ..self.clone()
        }
    }

    fn copy_with(&self, uri: String) -> Self {
        Self {
            link: self.link.copy_with(uri),
            ..self.clone()
        }
    }
}

impl fmt::Display for MappingLinkTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.link, f)
    }
}

impl fmt::Debug for MappingLinkTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingLinkTool")
            .field("link", &self.link)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Per-request properties
// =============================================================================

fn setters() -> &'static Setters<MappingLinkTool> {
    static SETTERS: OnceLock<Setters<MappingLinkTool>> = OnceLock::new();
    SETTERS.get_or_init(|| {
        Setters::<MappingLinkTool>::new()
            .with("context_path", |tool, value| {
                tool.request.context_path = serde_json::from_value(value)?;
                Ok(())
            })
            .with("request_path", |tool, value| {
                tool.request.request_path = serde_json::from_value(value)?;
                Ok(())
            })
    })
}

impl Tool for MappingLinkTool {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_property_set(&mut self) -> Option<&mut dyn PropertySet> {
        Some(self)
    }
}

impl PropertySet for MappingLinkTool {
    fn is_writable(&self, name: &str) -> bool {
        setters().is_writable(name)
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<(), BoxError> {
        setters().apply(self, name, value)
    }
}
