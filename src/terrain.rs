//! Terrain baking into shoreline level sets.
//!
//! Heights are sampled on the same centred grid an [`Environment`] uses, so
//! the baked level set at a sample centre equals `water_level - height`
//! there.

use glam::Vec2;
use noise::{NoiseFn, OpenSimplex};

use crate::environment::Environment;
use crate::error::ConfigError;
use crate::params::TerrainParams;

/// Procedural island: a paraboloid hill with a noisy coastline.
pub struct IslandTerrain {
    params: TerrainParams,
    simplex: OpenSimplex,
}

impl IslandTerrain {
    pub fn new(params: TerrainParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let simplex = OpenSimplex::new(params.seed);
        Ok(Self { params, simplex })
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Terrain height at a world position (meters).
    pub fn height(&self, pos: Vec2) -> f32 {
        let p = &self.params;
        let r = pos.length() / p.island_radius_m.max(f32::EPSILON);
        let hill = (p.relief_m * (1.0 - r * r)).max(-p.sea_depth_m);

        let roughness = self.simplex.get([
            (pos.x * p.noise_frequency) as f64,
            (pos.y * p.noise_frequency) as f64,
        ]) as f32;

        p.water_level + hill + roughness * p.noise_amplitude_m
    }

    /// Heights at every sample centre, row-major (rows along `y`).
    pub fn bake(&self) -> Vec<f32> {
        let n = self.params.samples_per_side;
        let dx = self.params.sample_spacing_m();

        let mut heights = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                heights.push(self.height(sample_centre(n, dx, i, j)));
            }
        }
        heights
    }

    /// Bake and wrap the result as a level-set field.
    pub fn bake_environment(&self) -> Result<Environment, ConfigError> {
        Environment::from_heights(self.params.world_size, &self.bake(), self.params.water_level)
    }
}

/// World position of sample `(i, j)` on an `n`-sided grid with spacing `dx`.
pub fn sample_centre(n: usize, dx: f32, i: usize, j: usize) -> Vec2 {
    let centre = (n / 2) as f32 - 0.5;
    Vec2::new(j as f32 - centre, i as f32 - centre) * dx
}
