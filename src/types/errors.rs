//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Boxed error raised by tool code (factories, setup hooks, setters).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for template tools.
#[derive(Error, Debug)]
pub enum Error {
    /// Registration-time failure: missing key, unknown class, or a class
    /// whose factory cannot produce an instance.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// A required collaborator was absent when a component initialized.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A registered class failed to produce an instance for a request.
    #[error("unable to instantiate tool '{class}'")]
    Instantiation {
        class: String,
        #[source]
        source: BoxError,
    },

    /// The tool's bulk `setup` hook returned an error.
    #[error("exception when invoking setup on tool '{class}'")]
    Setup {
        class: String,
        #[source]
        source: BoxError,
    },

    /// A property reported as writable could not be assigned.
    #[error("failed to set property '{property}' on tool '{class}'")]
    PropertyAssignment {
        class: String,
        property: String,
        #[source]
        source: BoxError,
    },

    /// Broken internal invariant (programming error).
    #[error("internal error: {0}")]
    Internal(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience constructors
impl Error {
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: msg.into(),
            source: None,
        }
    }

    pub fn invalid_configuration_with(msg: impl Into<String>, source: BoxError) -> Self {
        Self::InvalidConfiguration {
            message: msg.into(),
            source: Some(source),
        }
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error was raised while registering a tool, as opposed to
    /// while building one for a request.
    pub fn is_registration_error(&self) -> bool {
        matches!(self, Error::InvalidConfiguration { .. })
    }
}
