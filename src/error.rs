//! Defines [`GeodArrayError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeodArrayError {
    /// [ndarray::ShapeError]
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    /// An array input is broadcast-incompatible with the resolved output
    /// shape: its element count is neither 1 nor the output element count.
    #[error("input of shape {actual:?} is not broadcast-compatible with output shape {expected:?}")]
    ShapeMismatch {
        /// Shape selected for the call's outputs.
        expected: Vec<usize>,
        /// Shape of the offending input.
        actual: Vec<usize>,
    },
}

/// Crate-specific result type.
pub type GeodArrayResult<T> = std::result::Result<T, GeodArrayError>;
