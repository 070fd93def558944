//! Resolution of MVC action and forward names to server-relative URLs.

use std::collections::HashMap;

use crate::container::{ApplicationAttributes, RequestContext, RuntimeServices, SERVLET_MAPPING_KEY};
use crate::types::MappingConfig;

/// Resolves action and forward names against the MVC framework's
/// configuration.
#[cfg_attr(test, mockall::automock)]
pub trait MappingResolver: Send + Sync {
    /// URL for an action. Does not check that the action is defined.
    fn action_url(
        &self,
        application: &ApplicationAttributes,
        request: &RequestContext,
        action: &str,
    ) -> String;

    /// URL for a global forward, or `None` if no such forward exists.
    fn forward_url(
        &self,
        request: &RequestContext,
        application: &ApplicationAttributes,
        forward: &str,
    ) -> Option<String>;
}

// =============================================================================
// Front-controller mapping
// =============================================================================

/// How the front controller is mapped into the application's URL space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServletMapping {
    /// `*.do`: action path plus extension.
    Extension(String),
    /// `/do/*`: prefix plus action path.
    Path(String),
    /// `/`: the action path itself.
    Root,
    /// Any other mapping. No action path can be derived from it, so only the
    /// context path and query string are produced.
    Other(String),
}

impl ServletMapping {
    pub fn parse(mapping: &str) -> Self {
        if let Some(ext) = mapping.strip_prefix('*') {
            if ext.starts_with('.') {
                return ServletMapping::Extension(ext.to_string());
            }
        }
        if mapping == "/" {
            return ServletMapping::Root;
        }
        if let Some(prefix) = mapping.strip_suffix("/*") {
            return ServletMapping::Path(prefix.to_string());
        }
        ServletMapping::Other(mapping.to_string())
    }
}

/// Strip the query string and any extension, and make the path absolute.
fn action_mapping_name(action: &str) -> String {
    let path = action.split('?').next().unwrap_or(action);
    let slash = path.rfind('/');
    let path = match path.rfind('.') {
        Some(period) if slash.map_or(true, |s| period > s) => &path[..period],
        _ => path,
    };
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

// =============================================================================
// Configured mappings
// =============================================================================

/// Resolver backed by static action and forward tables.
#[derive(Debug, Clone, Default)]
pub struct ActionMappings {
    servlet_mapping: Option<ServletMapping>,
    actions: HashMap<String, String>,
    forwards: HashMap<String, String>,
}

impl ActionMappings {
    pub fn new(servlet_mapping: Option<&str>) -> Self {
        Self {
            servlet_mapping: servlet_mapping.map(ServletMapping::parse),
            actions: HashMap::new(),
            forwards: HashMap::new(),
        }
    }

    pub fn from_config(config: &MappingConfig) -> Self {
        Self {
            servlet_mapping: config.servlet_mapping.as_deref().map(ServletMapping::parse),
            actions: config.actions.clone(),
            forwards: config.forwards.clone(),
        }
    }

    /// Alias an action name to its path.
    pub fn add_action(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.actions.insert(name.into(), path.into());
    }

    pub fn add_forward(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.forwards.insert(name.into(), path.into());
    }

    pub fn servlet_mapping(&self) -> Option<&ServletMapping> {
        self.servlet_mapping.as_ref()
    }

    /// Mapping published by the container under [`SERVLET_MAPPING_KEY`],
    /// falling back to the configured one.
    pub fn effective_mapping(&self, application: &ApplicationAttributes) -> Option<ServletMapping> {
        application
            .application_attribute(SERVLET_MAPPING_KEY)
            .and_then(|attribute| attribute.downcast_ref::<String>().map(|m| ServletMapping::parse(m)))
            .or_else(|| self.servlet_mapping.clone())
    }
}

impl MappingResolver for ActionMappings {
    fn action_url(
        &self,
        application: &ApplicationAttributes,
        request: &RequestContext,
        action: &str,
    ) -> String {
        // unknown names are taken to be action paths
        let action = self.actions.get(action).map_or(action, String::as_str);
        let mut url = request.context_path.clone();

        // without a front-controller mapping the action is used verbatim
        let Some(mapping) = self.effective_mapping(application) else {
            if !action.starts_with('/') {
                url.push('/');
            }
            url.push_str(action);
            return url;
        };

        let name = action_mapping_name(action);
        match &mapping {
            ServletMapping::Extension(ext) => {
                url.push_str(&name);
                url.push_str(ext);
            }
            ServletMapping::Path(prefix) => {
                url.push_str(prefix);
                url.push_str(&name);
            }
            ServletMapping::Root => url.push_str(&name),
            ServletMapping::Other(other) => {
                tracing::warn!("unsupported_servlet_mapping: mapping={}, action={}", other, name);
            }
        }
        if let Some(question) = action.find('?') {
            url.push_str(&action[question..]);
        }
        url
    }

    fn forward_url(
        &self,
        request: &RequestContext,
        _application: &ApplicationAttributes,
        forward: &str,
    ) -> Option<String> {
        let path = self.forwards.get(forward)?;
        if path.starts_with('/') {
            Some(format!("{}{}", request.context_path, path))
        } else {
            Some(path.clone())
        }
    }
}
