//! Error types raised while assembling and rendering a car.

use thiserror::Error;

use crate::car::Part;

/// Result alias used by every fallible builder, director and render call.
pub type BuildResult<T> = Result<T, BuildError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A part setter ran before `initialize()` created a car.
    #[error("cannot fit {part}: no car under construction, call initialize() first")]
    Uninitialized { part: Part },

    /// Strict rendering found a field that was never assigned.
    #[error("field not set: {part}")]
    FieldNotSet { part: Part },

    /// JSON output could not be produced.
    #[error("failed to serialize car: {message}")]
    Serialize { message: String },
}

impl From<serde_json::Error> for BuildError {
    fn from(err: serde_json::Error) -> Self {
        BuildError::Serialize {
            message: err.to_string(),
        }
    }
}
