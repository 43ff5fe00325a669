//! Squared distance transform on grids, one axis at a time.
//!
//! `min_(qx, qy) (px - qx)^2 + (py - qy)^2 + f[qx, qy]` splits into a 1-D
//! transform along every row followed by a 1-D transform along every column
//! of the row pass output. The column pass only starts once the row pass has
//! finished writing.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    envelope,
    error::{Error, Result},
    grid::Grid,
};

/// Which axis is transformed first. Both give the same field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisOrder {
    #[default]
    RowsFirst,
    ColumnsFirst,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SeparableTransform {
    order: AxisOrder,
    parallel: bool,
}

impl SeparableTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(mut self, order: AxisOrder) -> Self {
        self.order = order;
        self
    }

    /// Runs the lines of each pass on the rayon pool. Ignored unless the
    /// `parallel` feature is enabled.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn run(&self, grid: &Grid<f64>) -> Grid<f64> {
        let mut out = grid.clone();
        self.run_in_place(&mut out);
        out
    }

    pub fn run_indicator(&self, mask: &Grid<bool>) -> Grid<f64> {
        if !mask.raw().contains(&true) {
            log::debug!(
                "mask of size {:?} has no sites, returning zeros",
                mask.size()
            );
            return mask.map(|_, _| 0.0);
        }
        let mut out = mask.map(|_, &set| if set { 0.0 } else { f64::INFINITY });
        self.run_in_place(&mut out);
        out
    }

    pub fn run_into(&self, input: &Grid<f64>, output: &mut Grid<f64>) -> Result<()> {
        if input.size() != output.size() {
            return Err(Error::InvalidExtent {
                expected: input.size(),
                actual: output.size(),
            });
        }
        output.raw_mut().copy_from_slice(input.raw());
        self.run_in_place(output);
        Ok(())
    }

    fn run_in_place(&self, grid: &mut Grid<f64>) {
        if grid.is_empty() {
            return;
        }
        log::trace!(
            "separable transform of {:?}, {:?}, parallel: {}",
            grid.size(),
            self.order,
            self.parallel
        );
        match self.order {
            AxisOrder::RowsFirst => {
                self.transform_rows(grid);
                self.transform_columns(grid);
            }
            AxisOrder::ColumnsFirst => {
                self.transform_columns(grid);
                self.transform_rows(grid);
            }
        }
    }

    fn transform_columns(&self, grid: &mut Grid<f64>) {
        let mut transposed = grid.transpose();
        self.transform_rows(&mut transposed);
        *grid = transposed.transpose();
    }

    fn transform_rows(&self, grid: &mut Grid<f64>) {
        let width = grid.width();
        #[cfg(feature = "parallel")]
        {
            if self.parallel {
                grid.raw_mut()
                    .par_chunks_mut(width)
                    .for_each(envelope::transform_in_place);
                return;
            }
        }
        grid.raw_mut()
            .chunks_mut(width)
            .for_each(envelope::transform_in_place);
    }
}

pub fn transform_2d(grid: &Grid<f64>) -> Grid<f64> {
    SeparableTransform::new().run(grid)
}

/// Squared distance to the nearest `true` cell. A mask without any `true`
/// cell gives all zeros.
pub fn transform_indicator_2d(mask: &Grid<bool>) -> Grid<f64> {
    SeparableTransform::new().run_indicator(mask)
}

pub fn transform_2d_into(input: &Grid<f64>, output: &mut Grid<f64>) -> Result<()> {
    SeparableTransform::new().run_into(input, output)
}
