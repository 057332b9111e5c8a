//! Shoreline level-set grid parameters.

use crate::error::ConfigError;

/// Extent of the level-set grid.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentParams {
    /// Half-extent of the square grid in world units (meters).
    /// The grid covers `[-world_size, world_size]` on both axes.
    pub world_size: f32,
}

impl Default for EnvironmentParams {
    fn default() -> Self {
        Self { world_size: 50.0 }
    }
}

impl EnvironmentParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.world_size.is_finite() && self.world_size > 0.0) {
            return Err(ConfigError::NonPositiveWorldSize(self.world_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_world_size() {
        assert!(EnvironmentParams::default().validate().is_ok());
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let params = EnvironmentParams { world_size: bad };
            assert!(matches!(
                params.validate(),
                Err(ConfigError::NonPositiveWorldSize(_))
            ));
        }
    }
}
