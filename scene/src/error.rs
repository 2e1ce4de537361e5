//! Errors raised while loading a scene.

use thiserror::Error;

/// Load-time validation failures. All of these are configuration defects
/// caught before any query runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("duplicate object name: {0}")]
    DuplicateObject(String),

    #[error("object {object} placed in unknown container {container}")]
    UnknownContainer { object: String, container: String },

    #[error("containment cycle involving {0}")]
    ContainmentCycle(String),

    #[error("object {0} has a negative width or height")]
    NegativeSize(String),

    #[error("object {0} has a negative z position")]
    NegativeZ(String),

    #[error("object {object} references unknown shape {shape}")]
    UnknownShape { object: String, shape: String },

    #[error("object {object} references unknown colour {colour}")]
    UnknownColour { object: String, colour: String },

    #[error("paper {object} must be rounded-rect, got {shape}")]
    PaperShapeRestricted { object: String, shape: String },

    #[error("paper {object} must be white, got {colour}")]
    PaperColourRestricted { object: String, colour: String },
}

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;
