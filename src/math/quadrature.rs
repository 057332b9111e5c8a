//! Composite midpoint quadrature.

use std::ops::{Add, Mul};

/// Integration nodes of the composite midpoint rule over `[x_min, x_max]`.
///
/// Yields `(step_index, x)` with `x = x_min + (step_index + 0.5) * dx` and
/// `dx = (x_max - x_min) / nodes`. Every consumer that caches values per node
/// must use this placement so cached values line up with later integrals.
pub fn midpoint_nodes(nodes: usize, x_min: f64, x_max: f64) -> impl Iterator<Item = (usize, f64)> {
    let dx = (x_max - x_min) / nodes as f64;
    (0..nodes).map(move |step| (step, x_min + (step as f64 + 0.5) * dx))
}

/// Integrate `integrand(x, step)` over `[x_min, x_max]` with `nodes` midpoint samples.
///
/// The step index is passed alongside `x` so callers can look up per-node
/// cached data.
pub fn integrate_with_step<T, F>(nodes: usize, x_min: f64, x_max: f64, mut integrand: F) -> T
where
    T: Default + Add<Output = T> + Mul<f64, Output = T>,
    F: FnMut(f64, usize) -> T,
{
    let dx = (x_max - x_min) / nodes as f64;
    midpoint_nodes(nodes, x_min, x_max)
        .fold(T::default(), |acc, (step, x)| acc + integrand(x, step) * dx)
}
