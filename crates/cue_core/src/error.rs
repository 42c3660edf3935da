//! Core error types

use thiserror::Error;

/// Errors raised while interpreting parameter input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Parameter name not bound to the control panel
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// Input line could not be parsed
    #[error("Malformed input '{input}': {reason}")]
    MalformedInput { input: String, reason: String },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
