//! Shoreline boundary as a level set sampled on a regular grid.
//!
//! The grid is square, centered on the world origin, and stored row-major:
//! rows follow the world `y` axis, columns the world `x` axis. Non-negative
//! level-set values are water, negative values are land.
//!
//! Queries never fail. Outside the grid the level set reads a large positive
//! sentinel and the finite differences read zero, so `levelset` stays finite
//! and `levelset_gradient` is flat there. The sentinel is only an
//! approximation of the field beyond the samples, not a signed-distance
//! extension, and `contains` does not consult it: positions outside the
//! sampled cells are never contained, and inside the outermost half cell
//! containment follows the nearest edge samples.

use glam::Vec2;
use tracing::debug;

use crate::error::ConfigError;
use crate::math::bilinear;
use crate::params::EnvironmentParams;

/// Smallest level-set value (in sample units) reported outside the grid.
///
/// Grids whose samples exceed this in magnitude get a larger sentinel, so
/// out-of-grid `levelset` reads sit strictly above any sample. The value is an
/// approximation only and has no bearing on `contains`.
pub const OUTSIDE_SENTINEL: f32 = 100.0;

/// Bilinear level-set field over a square sample grid.
#[derive(Debug, Clone)]
pub struct Environment {
    samples: Vec<f32>,
    n: usize,
    dx: f32,
    world_size: f32,
    outside: f32,
}

impl Environment {
    /// Build a field from `N*N` row-major samples covering `[-world_size, world_size]²`.
    ///
    /// The samples are copied; the caller's slice is not referenced afterwards.
    ///
    /// # Errors
    /// Fails if the sample count is zero or not a perfect square, if any
    /// sample is not finite, or if `world_size` is not positive.
    pub fn new(world_size: f32, samples: &[f32]) -> Result<Self, ConfigError> {
        EnvironmentParams { world_size }.validate()?;

        if samples.is_empty() {
            return Err(ConfigError::EmptySamples);
        }
        let n = (samples.len() as f64).sqrt().round() as usize;
        if n * n != samples.len() {
            return Err(ConfigError::NonSquareSampleCount {
                count: samples.len(),
            });
        }
        if let Some(&value) = samples.iter().find(|v| !v.is_finite()) {
            return Err(ConfigError::NonFiniteParameter {
                name: "sample",
                value,
            });
        }

        let max_abs = samples.iter().fold(0.0_f32, |acc, v| acc.max(v.abs()));
        let outside = OUTSIDE_SENTINEL.max(max_abs + 1.0);
        let dx = 2.0 * world_size / n as f32;

        debug!(n, dx, world_size, outside, "environment grid created");

        Ok(Self {
            samples: samples.to_vec(),
            n,
            dx,
            world_size,
            outside,
        })
    }

    /// Build a field from terrain heights: level set = `water_level - height`.
    pub fn from_heights(world_size: f32, heights: &[f32], water_level: f32) -> Result<Self, ConfigError> {
        let levels: Vec<f32> = heights.iter().map(|h| water_level - h).collect();
        Self::new(world_size, &levels)
    }

    /// Samples per grid side.
    pub fn n(&self) -> usize {
        self.n
    }

    /// World-space cell size.
    pub fn dx(&self) -> f32 {
        self.dx
    }

    pub fn world_size(&self) -> f32 {
        self.world_size
    }

    /// True when `pos` lies on the sampled cells and the level set there is
    /// non-negative.
    ///
    /// The sampled cells span fractional indices `[-0.5, n - 0.5]` on both
    /// axes. Between the outermost sample centres and that border the index is
    /// clamped onto the edge samples, so the sentinel never leaks in.
    pub fn contains(&self, pos: Vec2) -> bool {
        let idx = self.to_index(pos, Vec2::splat(0.5));
        let upper = Vec2::splat(self.n as f32 - 0.5);
        // NaN fails both comparisons
        if !(idx.cmpge(Vec2::splat(-0.5)).all() && idx.cmple(upper).all()) {
            return false;
        }

        let idx = idx.clamp(Vec2::ZERO, Vec2::splat((self.n - 1) as f32));
        let grid = bilinear(|i, j| sample_or_outside(&self.samples, self.n, self.outside, i, j));
        grid(idx.y, idx.x) >= 0.0
    }

    /// Bilinearly interpolated level set at `pos`, in world units.
    pub fn levelset(&self, pos: Vec2) -> f32 {
        let idx = self.to_index(pos, Vec2::splat(0.5));
        let grid = bilinear(|i, j| sample_or_outside(&self.samples, self.n, self.outside, i, j));
        grid(idx.y, idx.x) * self.dx
    }

    /// Unit gradient of the level set at `pos`, pointing towards open water.
    ///
    /// Built from forward differences of the samples, each interpolated at
    /// its own staggered location. Returns `Vec2::ZERO` where the field is
    /// flat, including everywhere outside the grid.
    pub fn levelset_gradient(&self, pos: Vec2) -> Vec2 {
        // Forward differences live half a cell ahead along the differenced axis
        let col_idx = self.to_index(pos, Vec2::new(1.0, 0.5));
        let row_idx = self.to_index(pos, Vec2::new(0.5, 1.0));

        let d_col = bilinear(|i, j| column_difference(&self.samples, self.n, i, j));
        let d_row = bilinear(|i, j| row_difference(&self.samples, self.n, i, j));

        Vec2::new(d_col(col_idx.y, col_idx.x), d_row(row_idx.y, row_idx.x)).normalize_or_zero()
    }

    /// Map a world position to fractional grid indices `(column, row)`.
    ///
    /// `shift` is subtracted from the grid centre per axis: `0.5` aligns
    /// sample centres, `1.0` aligns forward differences.
    fn to_index(&self, pos: Vec2, shift: Vec2) -> Vec2 {
        let centre = (self.n / 2) as f32;
        pos / self.dx + (Vec2::splat(centre) - shift)
    }
}

fn in_grid(i: i64, n: usize) -> bool {
    i >= 0 && (i as usize) < n
}

/// Sample at row `i`, column `j`, or the sentinel outside the grid.
fn sample_or_outside(samples: &[f32], n: usize, outside: f32, i: i64, j: i64) -> f32 {
    if !in_grid(i, n) || !in_grid(j, n) {
        return outside;
    }
    samples[j as usize + i as usize * n]
}

/// `s[i+1][j] - s[i][j]`, zero where either sample is outside the grid.
fn row_difference(samples: &[f32], n: usize, i: i64, j: i64) -> f32 {
    if !in_grid(i, n.saturating_sub(1)) || !in_grid(j, n) {
        return 0.0;
    }
    let (i, j) = (i as usize, j as usize);
    samples[j + (i + 1) * n] - samples[j + i * n]
}

/// `s[i][j+1] - s[i][j]`, zero where either sample is outside the grid.
fn column_difference(samples: &[f32], n: usize, i: i64, j: i64) -> f32 {
    if !in_grid(i, n) || !in_grid(j, n.saturating_sub(1)) {
        return 0.0;
    }
    let (i, j) = (i as usize, j as usize);
    samples[(j + 1) + i * n] - samples[j + i * n]
}
