//! Interpolation combinators.
//!
//! Each combinator takes a point sampler over integer indices and returns a
//! continuous function over real indices. Index `i` sits exactly at `x = i`.

use std::ops::{Add, Mul};

/// Values that can be blended linearly with `f32` weights.
pub trait Lerp: Copy + Add<Output = Self> + Mul<f32, Output = Self> {}

impl<T> Lerp for T where T: Copy + Add<Output = T> + Mul<f32, Output = T> {}

/// Lift `sample(i)` into a piecewise-linear function of a real index.
///
/// The right-hand neighbour is not sampled when the query lands exactly on
/// a node, so a sampler that returns a sentinel past the last node still
/// yields the exact node value at that node.
pub fn linear<T, F>(sample: F) -> impl Fn(f32) -> T
where
    T: Lerp,
    F: Fn(i64) -> T,
{
    move |x| {
        let floor = x.floor();
        let weight = x - floor;
        let i = floor as i64;

        let left = sample(i);
        if weight == 0.0 {
            left
        } else {
            left * (1.0 - weight) + sample(i.saturating_add(1)) * weight
        }
    }
}

/// Lift `sample(i, j)` into a bilinear function of two real indices.
///
/// Interpolates along `j` for each bracketing `i`, then along `i`.
pub fn bilinear<T, F>(sample: F) -> impl Fn(f32, f32) -> T
where
    T: Lerp,
    F: Fn(i64, i64) -> T,
{
    move |x, y| {
        let along_i = linear(|i| linear(|j| sample(i, j))(y));
        along_i(x)
    }
}
