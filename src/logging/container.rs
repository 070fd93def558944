//! Log adapter writing engine messages to the host container's log.

use std::sync::Arc;

use super::{LogLevel, LogSystem};
use crate::container::{ContainerContext, ContainerLog, RuntimeServices, CONTAINER_CONTEXT_KEY};
use crate::types::{Error, Result};

/// Prefix of every line written to the container log.
pub const LOG_PREFIX: &str = " Engine ";

/// Engine logger backed by the container log.
///
/// Only obtainable through [`ContainerLogger::init`], so every logger has a
/// sink.
#[derive(Debug, Clone)]
pub struct ContainerLogger {
    sink: Arc<dyn ContainerLog>,
}

impl ContainerLogger {
    /// Look up the container context among the application attributes.
    pub fn init(services: &dyn RuntimeServices) -> Result<Self> {
        let attribute = services
            .application_attribute(CONTAINER_CONTEXT_KEY)
            .ok_or_else(|| {
                Error::invalid_state("Could not retrieve container context from application attributes")
            })?;
        let context = attribute.downcast_ref::<ContainerContext>().ok_or_else(|| {
            Error::invalid_state(format!(
                "Application attribute '{}' is not a container context",
                CONTAINER_CONTEXT_KEY
            ))
        })?;

        tracing::debug!(container = %context.name(), "Container logger initialized");
        Ok(Self {
            sink: Arc::clone(context.log()),
        })
    }

    /// Format a message the way it appears in the container log.
    pub fn format_line(level: LogLevel, message: &str) -> String {
        match level.tag() {
            Some(tag) => format!("{}{}{}", LOG_PREFIX, tag, message),
            None => format!("{} : {}", LOG_PREFIX, message),
        }
    }
}

impl LogSystem for ContainerLogger {
    fn log_message(&self, level: LogLevel, message: &str) {
        self.sink.write(&Self::format_line(level, message));
    }
}
