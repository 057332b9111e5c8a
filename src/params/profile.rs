//! Spectral integration and profile precompute parameters.

use super::ensure_finite;
use crate::error::ConfigError;

/// Wavelength range and quadrature density of a profile buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileParams {
    /// log2 of the shortest integrated wavelength (log2 meters).
    /// Default: log2(0.03) ≈ -5.06, i.e. 3cm capillary-scale ripples
    pub zeta_min: f32,

    /// log2 of the longest integrated wavelength (log2 meters).
    /// Default: log2(10) ≈ 3.32, i.e. 10m swell
    pub zeta_max: f32,

    /// Number of midpoint quadrature nodes across `[zeta_min, zeta_max]`.
    /// Must resolve the shape of the spectral density; there is no refinement.
    pub integration_nodes: usize,
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self {
            zeta_min: 0.03_f32.log2(),
            zeta_max: 10.0_f32.log2(),
            integration_nodes: 100,
        }
    }
}

impl ProfileParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range_ok = self.zeta_min.is_finite()
            && self.zeta_max.is_finite()
            && self.zeta_min < self.zeta_max;
        if !range_ok {
            return Err(ConfigError::InvalidZetaRange {
                min: self.zeta_min,
                max: self.zeta_max,
            });
        }
        if self.integration_nodes == 0 {
            return Err(ConfigError::NonPositiveIntegrationNodes);
        }
        Ok(())
    }
}

/// Inputs of a single precompute pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecomputeParams {
    /// Simulation time the profile is evaluated at (seconds).
    pub time: f32,

    /// Number of samples in the periodic buffer.
    pub resolution: usize,

    /// Buffer period in multiples of the longest wavelength:
    /// `period = periodicity * 2^zeta_max`.
    pub periodicity: u32,
}

impl Default for PrecomputeParams {
    fn default() -> Self {
        Self {
            time: 0.0,
            resolution: 4096,
            periodicity: 2,
        }
    }
}

impl PrecomputeParams {
    /// Default resolution and periodicity at the given time.
    pub fn at_time(time: f32) -> Self {
        Self {
            time,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("time", self.time)?;
        if self.resolution == 0 {
            return Err(ConfigError::NonPositiveResolution);
        }
        if self.periodicity == 0 {
            return Err(ConfigError::NonPositivePeriodicity);
        }
        Ok(())
    }
}

/// A bank of profile buffers, one per spectral bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct BankParams {
    /// Full wavelength range, split evenly into `n_zeta` buckets.
    pub profile: ProfileParams,

    /// Number of spectral buckets (one profile buffer each).
    pub n_zeta: usize,
}

impl Default for BankParams {
    fn default() -> Self {
        Self {
            profile: ProfileParams::default(),
            n_zeta: 1,
        }
    }
}

impl BankParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.profile.validate()?;
        if self.n_zeta == 0 {
            return Err(ConfigError::NonPositiveBuckets);
        }
        Ok(())
    }

    /// Width of one bucket in zeta units.
    pub fn bucket_width(&self) -> f32 {
        (self.profile.zeta_max - self.profile.zeta_min) / self.n_zeta as f32
    }
}
