//! Error types for transformation lifecycle operations.

use thiserror::Error;

/// Failure of a single registry or transformation operation.
///
/// None of these are fatal to the process; each one ends the request that
/// triggered it and leaves the registry untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformationError {
    #[error("Transformation not found: {0}")]
    NotFound(String),

    #[error("{0} is not a supported state.")]
    UnsupportedState(String),

    #[error("Transformation '{0}' already run.")]
    AlreadyRun(String),

    #[error("Transformation '{0}' has not run.")]
    NotReady(String),
}
