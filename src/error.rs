use thiserror::Error;
use vek::Vec2;

/// Everything a transform call can report back to its caller.
///
/// Ordinary data (empty inputs, all-false masks, infinite base costs) is
/// never an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A negative extent (expected holds it clamped to zero), a raw buffer
    /// whose length does not fit the extent (reported as a single row of that
    /// length), or two paired grids of different extent.
    #[error("invalid extent: expected {expected:?}, got {actual:?}")]
    InvalidExtent {
        expected: Vec2<i32>,
        actual: Vec2<i32>,
    },

    /// Sites out of strictly increasing order, or with a non-finite cost.
    #[error("degenerate parabola intersection at site position {position}")]
    NumericDegenerate { position: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
