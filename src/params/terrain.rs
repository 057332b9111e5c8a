//! Procedural terrain parameters for baking shoreline level sets.

use super::ensure_finite;
use crate::error::ConfigError;

/// Procedural island terrain baked into a level-set grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainParams {
    /// Samples per grid side (the baked grid has `samples_per_side²` samples)
    pub samples_per_side: usize,

    /// Half-extent of the baked region in world units (meters)
    pub world_size: f32,

    /// Still-water height (meters). Terrain below this is water.
    pub water_level: f32,

    /// Radius of the island's dry core (meters)
    pub island_radius_m: f32,

    /// Peak island height above the sea floor (meters)
    pub relief_m: f32,

    /// Depth of the open sea floor below the water level (meters)
    pub sea_depth_m: f32,

    /// Coastline roughness frequency (cycles per meter)
    pub noise_frequency: f32,

    /// Coastline roughness amplitude (meters of height)
    pub noise_amplitude_m: f32,

    /// Noise seed
    pub seed: u32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            samples_per_side: 128,
            world_size: 50.0,
            water_level: 0.0,
            island_radius_m: 15.0,
            relief_m: 8.0,
            sea_depth_m: 4.0,
            noise_frequency: 0.08,
            noise_amplitude_m: 1.5,
            seed: 42,
        }
    }
}

impl TerrainParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples_per_side == 0 {
            return Err(ConfigError::EmptySamples);
        }
        if !(self.world_size.is_finite() && self.world_size > 0.0) {
            return Err(ConfigError::NonPositiveWorldSize(self.world_size));
        }
        ensure_finite("water_level", self.water_level)?;
        ensure_finite("island_radius_m", self.island_radius_m)?;
        ensure_finite("relief_m", self.relief_m)?;
        ensure_finite("sea_depth_m", self.sea_depth_m)?;
        ensure_finite("noise_frequency", self.noise_frequency)?;
        ensure_finite("noise_amplitude_m", self.noise_amplitude_m)?;
        Ok(())
    }

    /// Spacing between baked samples (meters)
    pub fn sample_spacing_m(&self) -> f32 {
        2.0 * self.world_size / self.samples_per_side as f32
    }
}
