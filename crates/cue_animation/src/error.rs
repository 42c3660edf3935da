//! Animation error types

use crate::tween::Channel;
use thiserror::Error;

/// Errors raised by the tween engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// The tween target could not supply a start value
    #[error("Tween target has no readable {0:?} channel")]
    MissingTarget(Channel),

    /// A tween was started without any destination channels
    #[error("Tween has no destination channels")]
    EmptyTween,

    /// Easing name not recognised
    #[error("Unknown easing: {0}")]
    UnknownEasing(String),
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
