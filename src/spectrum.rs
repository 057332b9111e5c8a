//! Spectral density models.
//!
//! A spectral density maps `zeta = log2(wavelength)` to wave energy density.
//! Profile buffers only sample it while building their node cache, so any
//! plain closure `Fn(f64) -> f64` works as well as the named models here.

use crate::error::ConfigError;

/// Wave energy density as a function of `zeta = log2(wavelength)`.
pub trait SpectralDensity {
    fn density(&self, zeta: f64) -> f64;
}

impl<F> SpectralDensity for F
where
    F: Fn(f64) -> f64,
{
    fn density(&self, zeta: f64) -> f64 {
        self(zeta)
    }
}

/// Flat spectrum: the same density at every wavelength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant(pub f64);

impl SpectralDensity for Constant {
    fn density(&self, _zeta: f64) -> f64 {
        self.0
    }
}

/// Fully developed wind sea (Pierson-Moskowitz), reparametrised in `zeta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiersonMoskowitz {
    wind_speed: f64,
}

impl PiersonMoskowitz {
    /// Normalisation of the amplitude spectrum.
    const SCALE: f64 = 0.139098;
    /// Long-wave cutoff, folded into wavelength units.
    const CUTOFF: f64 = 1.8038897788076411;

    /// Spectrum for a wind blowing at `wind_speed` m/s.
    pub fn new(wind_speed: f32) -> Result<Self, ConfigError> {
        if !wind_speed.is_finite() || wind_speed <= 0.0 {
            return Err(ConfigError::NonPositiveWindSpeed(wind_speed));
        }
        Ok(Self {
            wind_speed: wind_speed as f64,
        })
    }

    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    /// `zeta` of the most energetic wavelength.
    pub fn peak_zeta(&self) -> f64 {
        0.5 * (0.75 * self.wind_speed.powi(4) / Self::CUTOFF).log2()
    }
}

impl SpectralDensity for PiersonMoskowitz {
    fn density(&self, zeta: f64) -> f64 {
        let growth = 2f64.powf(1.5 * zeta);
        let cutoff = (-Self::CUTOFF * 4f64.powf(zeta) / self.wind_speed.powi(4)).exp();
        Self::SCALE * (growth * cutoff).sqrt()
    }
}
