//! Exact squared Euclidean distance transforms of sampled functions.
//!
//! [`envelope`] holds the linear time 1-D transform built on the lower
//! envelope of parabolas, [`separable`] extends it to grids one axis at a
//! time and `reference` keeps a brute-force version to test against.

pub mod envelope;
pub mod error;
pub mod grid;
#[cfg(any(test, feature = "reference"))]
pub mod reference;
pub mod separable;

pub use envelope::{transform, transform_in_place, transform_indicator, LowerEnvelope};
pub use error::{Error, Result};
pub use grid::Grid;
pub use separable::{
    transform_2d, transform_2d_into, transform_indicator_2d, AxisOrder, SeparableTransform,
};
