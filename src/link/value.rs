//! Immutable link values.
//!
//! Every modifier returns a new [`Link`]; the receiver is never changed, so a
//! link can be handed to templates and extended freely.

use std::fmt;

/// A server-relative URI reference with query parameters and an anchor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    uri: Option<String>,
    query: Vec<(String, String)>,
    anchor: Option<String>,
}

impl Link {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// Copy with a new URI; query parameters and anchor are kept.
    pub fn copy_with(&self, uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..self.clone()
        }
    }

    /// Copy with one more query parameter appended.
    pub fn with_param(&self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        let mut copy = self.clone();
        copy.query.push((key.into(), value.to_string()));
        copy
    }

    pub fn with_anchor(&self, anchor: impl Into<String>) -> Self {
        Self {
            anchor: Some(anchor.into()),
            ..self.clone()
        }
    }

    /// `k1=v1&k2=v2` in insertion order, keys and values percent-encoded.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(uri) = &self.uri {
            write!(f, "{}", uri)?;
        }
        if !self.query.is_empty() {
            let separator = match &self.uri {
                Some(uri) if uri.contains('?') => '&',
                _ => '?',
            };
            write!(f, "{}{}", separator, self.query_string())?;
        }
        if let Some(anchor) = &self.anchor {
            write!(f, "#{}", anchor)?;
        }
        Ok(())
    }
}
