//! Exact 1-D squared distance transform over sampled base costs.
//!
//! For `f[0..n)` the transform is `d[p] = min_q (p - q)^2 + f[q]`. Each site
//! `q` roots an upward parabola; the transform is the lower envelope of those
//! parabolas sampled at the integers, which is built in a single pass and then
//! evaluated in a second one.

use crate::error::{Error, Result};

/// Lower envelope of the parabolas `x -> (x - apex[j])^2 + cost[j]`.
///
/// Parabola `j` is the minimum on `[boundary[j], boundary[j + 1])`.
/// `boundary` always starts with `-inf`, ends with `+inf` and is strictly
/// increasing in between. A non-empty envelope holds exactly one boundary
/// more than it holds apexes; an empty one is `[-inf, +inf]`.
#[derive(Clone, Debug, PartialEq)]
pub struct LowerEnvelope {
    apex: Vec<usize>,
    cost: Vec<f64>,
    boundary: Vec<f64>,
}

impl LowerEnvelope {
    /// Builds the envelope from sites given in strictly increasing position
    /// order with finite costs. A repeated or decreasing position, or a
    /// non-finite cost, is reported as [`Error::NumericDegenerate`].
    pub fn from_sites(sites: impl IntoIterator<Item = (usize, f64)>) -> Result<Self> {
        let sites = sites.into_iter();
        let (lower, _) = sites.size_hint();
        let mut apex: Vec<usize> = Vec::with_capacity(lower);
        let mut cost: Vec<f64> = Vec::with_capacity(lower);
        let mut boundary = Vec::with_capacity(lower + 1);
        boundary.push(f64::NEG_INFINITY);

        for (q, fq) in sites {
            if !fq.is_finite() {
                return Err(Error::NumericDegenerate { position: q });
            }
            let s = loop {
                let Some((&v, &fv)) = apex.last().zip(cost.last()) else {
                    break f64::NEG_INFINITY;
                };
                if q <= v {
                    return Err(Error::NumericDegenerate { position: q });
                }
                let s = intersection(q, fq, v, fv);
                // One boundary per apex while building; boundary[0] stays `-inf`.
                if s <= boundary[apex.len() - 1] {
                    apex.pop();
                    cost.pop();
                    if !apex.is_empty() {
                        boundary.pop();
                    }
                } else {
                    break s;
                }
            };
            if !apex.is_empty() {
                boundary.push(s);
            }
            apex.push(q);
            cost.push(fq);
        }
        boundary.push(f64::INFINITY);

        Ok(Self {
            apex,
            cost,
            boundary,
        })
    }

    /// Non-finite entries of `f` are absent sites.
    pub fn build(f: &[f64]) -> Result<Self> {
        Self::from_sites(f.iter().copied().enumerate().filter(|(_, c)| c.is_finite()))
    }

    pub fn apex(&self) -> &[usize] {
        &self.apex
    }

    pub fn boundary(&self) -> &[f64] {
        &self.boundary
    }

    pub fn len(&self) -> usize {
        self.apex.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apex.is_empty()
    }

    pub fn evaluate_into(&self, out: &mut [f64]) {
        if self.is_empty() {
            out.fill(f64::INFINITY);
            return;
        }
        let mut k = 0;
        for (p, slot) in out.iter_mut().enumerate() {
            let x = p as f64;
            while self.boundary[k + 1] < x {
                k += 1;
            }
            let d = x - self.apex[k] as f64;
            *slot = d * d + self.cost[k];
        }
    }

    pub fn evaluate(&self, n: usize) -> Vec<f64> {
        let mut out = vec![0.0; n];
        self.evaluate_into(&mut out);
        out
    }
}

/// Abscissa where the parabola rooted at `q` meets the one rooted at `v`.
///
/// Stays finite for any finite costs: `|f / d2| <= f64::MAX / 2`.
fn intersection(q: usize, fq: f64, v: usize, fv: f64) -> f64 {
    let (qf, vf) = (q as f64, v as f64);
    let d2 = 2.0 * (qf - vf);
    fq / d2 - fv / d2 + (qf + vf) / 2.0
}

/// Squared distance transform of the base costs `f`.
///
/// `transform(&[])` is empty and a single sample is returned as is. Entries
/// equal to `+inf` mark positions without a site.
pub fn transform(f: &[f64]) -> Vec<f64> {
    let mut out = f.to_vec();
    transform_in_place(&mut out);
    out
}

pub fn transform_in_place(f: &mut [f64]) {
    match LowerEnvelope::build(f) {
        Ok(envelope) => envelope.evaluate_into(f),
        // Sites come from `enumerate`, so positions always increase.
        Err(err) => panic!("lower envelope invariant violated: {err}"),
    }
}

/// Without any `true` entry the result is all zeros rather than `+inf`.
pub fn transform_indicator(indicator: &[bool]) -> Vec<f64> {
    if !indicator.contains(&true) {
        log::debug!(
            "indicator of length {} has no sites, returning zeros",
            indicator.len()
        );
        return vec![0.0; indicator.len()];
    }
    let sites = indicator
        .iter()
        .enumerate()
        .filter(|(_, set)| **set)
        .map(|(pos, _)| (pos, 0.0));
    match LowerEnvelope::from_sites(sites) {
        Ok(envelope) => envelope.evaluate(indicator.len()),
        Err(err) => panic!("lower envelope invariant violated: {err}"),
    }
}
