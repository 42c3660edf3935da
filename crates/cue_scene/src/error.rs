//! Scene error types

use cue_animation::AnimationError;
use thiserror::Error;

/// Scene-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// A handle the caller relies on has not been built yet
    #[error("Scene node not available: {0}")]
    MissingNode(&'static str),

    /// A node name was registered twice
    #[error("Duplicate node name: {0}")]
    DuplicateName(String),

    /// The tween engine rejected a tween on a scene node
    #[error(transparent)]
    Animation(#[from] AnimationError),
}

/// Result type for scene operations
pub type Result<T> = std::result::Result<T, SceneError>;
