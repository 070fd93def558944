//! Engine logging contract and its implementations.
//!
//! The template engine reports through [`LogSystem`]. [`ContainerLogger`]
//! forwards those messages to the host container's log; [`TracingLog`]
//! forwards them to `tracing`.

mod container;

pub use container::{ContainerLogger, LOG_PREFIX};

use std::fmt;

/// Engine log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    /// Any level id the engine does not define.
    Unknown(i32),
}

impl LogLevel {
    pub const DEBUG_ID: i32 = 0;
    pub const INFO_ID: i32 = 1;
    pub const WARN_ID: i32 = 2;
    pub const ERROR_ID: i32 = 3;

    /// Map an engine level id; unrecognized ids become `Unknown`.
    pub fn from_id(id: i32) -> Self {
        match id {
            Self::DEBUG_ID => LogLevel::Debug,
            Self::INFO_ID => LogLevel::Info,
            Self::WARN_ID => LogLevel::Warn,
            Self::ERROR_ID => LogLevel::Error,
            other => LogLevel::Unknown(other),
        }
    }

    /// Tag written in front of a message; `None` for unknown levels.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            LogLevel::Debug => Some(" [debug] "),
            LogLevel::Info => Some("  [info] "),
            LogLevel::Warn => Some("  [warn] "),
            LogLevel::Error => Some(" [error] "),
            LogLevel::Unknown(_) => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Unknown(id) => write!(f, "unknown({})", id),
        }
    }
}

/// The engine's logging contract.
pub trait LogSystem: Send + Sync + fmt::Debug {
    fn log_message(&self, level: LogLevel, message: &str);

    fn warn(&self, message: &str) {
        self.log_message(LogLevel::Warn, message);
    }
}

/// Forwards engine messages to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl LogSystem for TracingLog {
    fn log_message(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!("{}", message),
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Warn => tracing::warn!("{}", message),
            LogLevel::Error => tracing::error!("{}", message),
            LogLevel::Unknown(id) => {
                tracing::info!(level_id = id, "{}", message)
            }
        }
    }
}
