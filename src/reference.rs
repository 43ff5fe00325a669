//! Brute-force transforms, quadratic in the number of samples.
//!
//! These exist to check the envelope based transforms against and share no
//! code with them. Only built for tests or with the `reference` feature.

use crate::grid::Grid;

pub fn transform(f: &[f64]) -> Vec<f64> {
    (0..f.len())
        .map(|p| {
            f.iter()
                .enumerate()
                .map(|(q, fq)| (p as f64 - q as f64).powi(2) + fq)
                .fold(f64::INFINITY, f64::min)
        })
        .collect()
}

/// All zeros when no entry is `true`.
pub fn transform_indicator(indicator: &[bool]) -> Vec<f64> {
    let sites: Vec<usize> = (0..indicator.len()).filter(|&i| indicator[i]).collect();
    if sites.is_empty() {
        return vec![0.0; indicator.len()];
    }
    (0..indicator.len())
        .map(|p| {
            sites
                .iter()
                .map(|&q| (p as f64 - q as f64).powi(2))
                .fold(f64::INFINITY, f64::min)
        })
        .collect()
}

/// Minimum over every cell of the grid, without separating the axes.
pub fn transform_2d(grid: &Grid<f64>) -> Grid<f64> {
    grid.map(|p, _| {
        grid.iter()
            .map(|(q, fq)| ((p - q).map(|e| e as f64)).magnitude_squared() + fq)
            .fold(f64::INFINITY, f64::min)
    })
}

/// All zeros when no cell is `true`.
pub fn transform_indicator_2d(mask: &Grid<bool>) -> Grid<f64> {
    let sites: Vec<_> = mask.iter().filter(|(_, set)| **set).map(|(q, _)| q).collect();
    if sites.is_empty() {
        return mask.map(|_, _| 0.0);
    }
    mask.map(|p, _| {
        sites
            .iter()
            .map(|&q| ((p - q).map(|e| e as f64)).magnitude_squared())
            .fold(f64::INFINITY, f64::min)
    })
}
