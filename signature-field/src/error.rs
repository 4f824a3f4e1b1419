//! Error types for the signature field

use thiserror::Error;

/// Result type for signature field operations
pub type Result<T> = std::result::Result<T, FieldError>;

/// A persisted string that does not decode into a structured value.
///
/// Recovered locally by the controller and never shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed signature value {raw:?}: {reason}")]
pub struct ParseFailure {
    pub raw: String,
    pub reason: String,
}

/// Errors that can occur outside the event path
#[derive(Debug, Error)]
pub enum FieldError {
    /// Persisted value could not be decoded
    #[error(transparent)]
    Parse(#[from] ParseFailure),

    /// Validator pattern failed to compile
    #[error("invalid validation pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration could not be extracted
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Configuration was read but is not usable
    #[error("invalid field configuration: {message}")]
    InvalidConfig { message: String },

    /// Event script could not be interpreted
    #[error("invalid event script: {message}")]
    InvalidScript { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for FieldError {
    fn from(error: figment::Error) -> Self {
        FieldError::Config(Box::new(error))
    }
}

impl FieldError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: msg.into(),
        }
    }

    /// Create an invalid script error
    pub fn invalid_script(msg: impl Into<String>) -> Self {
        Self::InvalidScript {
            message: msg.into(),
        }
    }
}
