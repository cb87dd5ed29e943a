//! Error types for gesturematch.

use thiserror::Error;

/// Result alias for gesturematch operations.
pub type GestureResult<T> = std::result::Result<T, GestureError>;

/// Errors that can occur when registering or recognizing strokes.
///
/// Every variant is a recoverable value: registration skips the offending
/// template and recognition reports the condition to the caller.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GestureError {
    /// Fewer usable points than a stroke needs.
    #[error("path too short: got {got} usable points, need at least {needed}")]
    InsufficientPoints { got: usize, needed: usize },
    /// Recognition was requested before any template was registered.
    #[error("no templates loaded")]
    EmptyRegistry,
    /// No template produced a finite distance.
    #[error("no match found")]
    NoMatch,
    /// All points coincide, so the stroke has no extent to normalize.
    #[error("degenerate stroke: {reason}")]
    DegenerateStroke { reason: &'static str },
    /// The recognizer configuration is invalid.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
