//! Request-path access control for tools.
//!
//! A tool can be limited to one exact template path or to every path under a
//! prefix. Unrestricted tools are available everywhere.

use std::fmt;

/// Marker that turns a pattern into a prefix rule.
pub const WILDCARD: char = '*';

/// Compiled path restriction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PathRestriction {
    /// Every path, including an unknown one.
    #[default]
    Any,
    /// Exactly this path.
    Exact(String),
    /// Any path starting with this prefix.
    Prefix(String),
}

impl PathRestriction {
    /// Compile a pattern: `*` matches everything, a trailing `*` makes a
    /// prefix rule, anything else must match exactly.
    pub fn parse(pattern: &str) -> Self {
        if pattern.len() == WILDCARD.len_utf8() && pattern.starts_with(WILDCARD) {
            PathRestriction::Any
        } else if let Some(prefix) = pattern.strip_suffix(WILDCARD) {
            PathRestriction::Prefix(prefix.to_string())
        } else {
            PathRestriction::Exact(pattern.to_string())
        }
    }

    /// Check whether a request path satisfies this restriction.
    pub fn permits(&self, path: Option<&str>) -> bool {
        match self {
            PathRestriction::Any => true,
            PathRestriction::Exact(exact) => path == Some(exact.as_str()),
            PathRestriction::Prefix(prefix) => {
                path.map_or(false, |p| p.starts_with(prefix.as_str()))
            }
        }
    }
}

impl fmt::Display for PathRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathRestriction::Any => write!(f, "{}", WILDCARD),
            PathRestriction::Exact(path) => write!(f, "{}", path),
            PathRestriction::Prefix(prefix) => write!(f, "{}{}", prefix, WILDCARD),
        }
    }
}
