//! Spectral integration into periodic profile tables.

use std::f64::consts::TAU;
use std::sync::{Arc, PoisonError, RwLock};

use glam::Vec4;
use rayon::prelude::*;
use tracing::debug;

use super::data::ProfileData;
use super::kernel::{cubic_bump, dispersion_relation, gerstner_wave};
use crate::error::{ConfigError, ProfileError};
use crate::math::{integrate_with_step, midpoint_nodes};
use crate::params::{PrecomputeParams, ProfileParams};
use crate::spectrum::SpectralDensity;

/// Profile buffer for one range of wavelengths.
///
/// The spectral density is sampled once, at construction, on the midpoint
/// nodes of `[zeta_min, zeta_max]`; every later precompute reuses that cache.
///
/// Each [`precompute`](Self::precompute) builds a fresh [`ProfileData`] and
/// publishes it by swapping a shared handle. Readers holding a snapshot from
/// [`snapshot`](Self::snapshot) keep a consistent table while a newer one
/// is being built or published.
#[derive(Debug)]
pub struct ProfileBuffer {
    zeta_min: f32,
    zeta_max: f32,
    integration_nodes: usize,
    spectrum_cache: Vec<f64>,
    published: RwLock<Option<Arc<ProfileData>>>,
}

impl ProfileBuffer {
    /// Build a buffer over `[zeta_min, zeta_max]` with `integration_nodes` quadrature nodes.
    ///
    /// `spectrum` is only evaluated here; it is not retained.
    ///
    /// # Errors
    /// Fails if the range is not finite and ordered, or `integration_nodes` is zero.
    pub fn new(
        zeta_min: f32,
        zeta_max: f32,
        integration_nodes: usize,
        spectrum: &impl SpectralDensity,
    ) -> Result<Self, ConfigError> {
        Self::from_params(
            &ProfileParams {
                zeta_min,
                zeta_max,
                integration_nodes,
            },
            spectrum,
        )
    }

    pub fn from_params(
        params: &ProfileParams,
        spectrum: &impl SpectralDensity,
    ) -> Result<Self, ConfigError> {
        params.validate()?;

        let mut buffer = Self {
            zeta_min: params.zeta_min,
            zeta_max: params.zeta_max,
            integration_nodes: params.integration_nodes,
            spectrum_cache: Vec::new(),
            published: RwLock::new(None),
        };
        buffer.refresh_spectrum(spectrum);

        debug!(
            zeta_min = params.zeta_min,
            zeta_max = params.zeta_max,
            nodes = params.integration_nodes,
            "profile buffer created"
        );
        Ok(buffer)
    }

    /// Re-sample the spectral density into the node cache.
    ///
    /// Already published tables are untouched; the new density takes effect
    /// at the next precompute.
    pub fn refresh_spectrum(&mut self, spectrum: &impl SpectralDensity) {
        self.spectrum_cache = midpoint_nodes(
            self.integration_nodes,
            self.zeta_min as f64,
            self.zeta_max as f64,
        )
        .map(|(_, zeta)| spectrum.density(zeta))
        .collect();
    }

    pub fn zeta_min(&self) -> f32 {
        self.zeta_min
    }

    pub fn zeta_max(&self) -> f32 {
        self.zeta_max
    }

    pub fn integration_nodes(&self) -> usize {
        self.integration_nodes
    }

    /// Spectral density at each integration node, in node order.
    pub fn spectrum_cache(&self) -> &[f64] {
        &self.spectrum_cache
    }

    /// Period a precompute with `periodicity` produces: `periodicity * 2^zeta_max`.
    pub fn period_for(&self, periodicity: u32) -> f32 {
        (periodicity as f64 * (self.zeta_max as f64).exp2()) as f32
    }

    /// Integrate the profile at `params.time` and publish it.
    ///
    /// Sample `i` is the integral at `p = i * period / resolution`. Samples are
    /// independent and computed in parallel. Returns the published table.
    ///
    /// # Errors
    /// Fails if `resolution` or `periodicity` is zero or `time` is not finite.
    pub fn precompute(&self, params: &PrecomputeParams) -> Result<Arc<ProfileData>, ConfigError> {
        params.validate()?;

        let resolution = params.resolution;
        let period = params.periodicity as f64 * (self.zeta_max as f64).exp2();
        let time = params.time as f64;

        let samples: Vec<Vec4> = (0..resolution)
            .into_par_iter()
            .map(|i| self.integrate_at(i as f64 * period / resolution as f64, period, time))
            .collect();

        let data = Arc::new(ProfileData::new(period as f32, samples));
        *self.published.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&data));

        debug!(resolution, period, time, "profile buffer precomputed");
        Ok(data)
    }

    /// Profile integral at offset `p` of a buffer with the given period.
    ///
    /// Each wave is blended with its copy one period back so the table is
    /// continuous across `p = period ≡ 0`.
    fn integrate_at(&self, p: f64, period: f64, time: f64) -> Vec4 {
        let weight = p / period;
        let bump_here = cubic_bump(weight);
        let bump_wrapped = cubic_bump(1.0 - weight);

        integrate_with_step(
            self.integration_nodes,
            self.zeta_min as f64,
            self.zeta_max as f64,
            |zeta, step| {
                let wavelength = zeta.exp2();
                let k = TAU / wavelength;
                let omega_t = dispersion_relation(k) * time;

                let here = gerstner_wave(k * p - omega_t, k);
                let wrapped = gerstner_wave(k * (p - period) - omega_t, k);

                (here * bump_here + wrapped * bump_wrapped) * (wavelength * self.spectrum_cache[step])
            },
        )
        .as_vec4()
    }

    /// Latest published table.
    ///
    /// # Errors
    /// [`ProfileError::NotInitialized`] before the first precompute.
    pub fn snapshot(&self) -> Result<Arc<ProfileData>, ProfileError> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(ProfileError::NotInitialized)
    }

    pub fn is_precomputed(&self) -> bool {
        self.snapshot().is_ok()
    }

    /// Period of the latest published table.
    pub fn period(&self) -> Result<f32, ProfileError> {
        Ok(self.snapshot()?.period())
    }

    /// Evaluate the latest published table at `p`.
    ///
    /// For many lookups, take one [`snapshot`](Self::snapshot) and evaluate
    /// on it instead of locking per call.
    pub fn evaluate(&self, p: f32) -> Result<Vec4, ProfileError> {
        Ok(self.snapshot()?.evaluate(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::Constant;
    use proptest::prelude::*;

    fn small_buffer() -> ProfileBuffer {
        ProfileBuffer::new(0.0, 4.0, 32, &Constant(1.0)).unwrap()
    }

    fn small_params(time: f32) -> PrecomputeParams {
        PrecomputeParams {
            time,
            resolution: 256,
            periodicity: 2,
        }
    }

    #[test]
    fn test_rejects_invalid_construction() {
        assert_eq!(
            ProfileBuffer::new(1.0, 1.0, 8, &Constant(1.0)).unwrap_err(),
            ConfigError::InvalidZetaRange { min: 1.0, max: 1.0 }
        );
        assert_eq!(
            ProfileBuffer::new(2.0, 1.0, 8, &Constant(1.0)).unwrap_err(),
            ConfigError::InvalidZetaRange { min: 2.0, max: 1.0 }
        );
        assert_eq!(
            ProfileBuffer::new(0.0, 1.0, 0, &Constant(1.0)).unwrap_err(),
            ConfigError::NonPositiveIntegrationNodes
        );
    }

    #[test]
    fn test_rejects_invalid_precompute() {
        let buffer = small_buffer();
        let zero_res = PrecomputeParams {
            resolution: 0,
            ..small_params(0.0)
        };
        assert_eq!(
            buffer.precompute(&zero_res).unwrap_err(),
            ConfigError::NonPositiveResolution
        );
        let zero_period = PrecomputeParams {
            periodicity: 0,
            ..small_params(0.0)
        };
        assert_eq!(
            buffer.precompute(&zero_period).unwrap_err(),
            ConfigError::NonPositivePeriodicity
        );
        assert!(!buffer.is_precomputed());
    }

    #[test]
    fn test_spectrum_cache_uses_midpoint_nodes() {
        let buffer = ProfileBuffer::new(0.0, 4.0, 4, &|zeta: f64| zeta).unwrap();
        assert_eq!(buffer.spectrum_cache(), &[0.5, 1.5, 2.5, 3.5]);
        assert_eq!(buffer.integration_nodes(), 4);
    }

    #[test]
    fn test_evaluate_before_precompute_is_not_initialized() {
        let buffer = small_buffer();
        assert_eq!(buffer.evaluate(0.0), Err(ProfileError::NotInitialized));
        assert_eq!(buffer.period(), Err(ProfileError::NotInitialized));
        assert!(buffer.snapshot().is_err());
    }

    #[test]
    fn test_precompute_sets_period_and_resolution() {
        let buffer = small_buffer();
        let data = buffer.precompute(&small_params(0.0)).unwrap();
        assert_eq!(data.len(), 256);
        assert!((data.period() - 32.0).abs() < 1e-4);
        assert!((buffer.period().unwrap() - buffer.period_for(2)).abs() < 1e-6);
    }

    #[test]
    fn test_zero_spectrum_gives_flat_profile() {
        let buffer = ProfileBuffer::new(0.0, 3.0, 16, &Constant(0.0)).unwrap();
        let data = buffer.precompute(&small_params(1.5)).unwrap();
        assert!(data.samples().iter().all(|s| *s == Vec4::ZERO));
    }

    #[test]
    fn test_refresh_spectrum_takes_effect_on_next_precompute() {
        let mut buffer = ProfileBuffer::new(0.0, 3.0, 16, &Constant(0.0)).unwrap();
        let flat = buffer.precompute(&small_params(0.0)).unwrap();

        buffer.refresh_spectrum(&Constant(1.0));
        assert!(buffer.spectrum_cache().iter().all(|&d| d == 1.0));
        // Published table is unchanged until the next precompute
        assert_eq!(*buffer.snapshot().unwrap(), *flat);

        let waves = buffer.precompute(&small_params(0.0)).unwrap();
        assert!(waves.samples().iter().any(|s| s.length() > 0.0));
    }

    #[test]
    fn test_precompute_publishes_new_table_and_keeps_old_snapshot() {
        let buffer = small_buffer();
        buffer.precompute(&small_params(0.0)).unwrap();
        let before = buffer.snapshot().unwrap();

        let finer = PrecomputeParams {
            resolution: 512,
            ..small_params(1.0)
        };
        buffer.precompute(&finer).unwrap();

        assert_eq!(before.len(), 256);
        assert_eq!(buffer.snapshot().unwrap().len(), 512);
    }

    #[test]
    fn test_precompute_is_deterministic() {
        let buffer = small_buffer();
        let a = buffer.precompute(&small_params(2.5)).unwrap();
        let b = buffer.precompute(&small_params(2.5)).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_profile_changes_over_time() {
        let buffer = small_buffer();
        let t0 = buffer.precompute(&small_params(0.0)).unwrap();
        let t1 = buffer.precompute(&small_params(0.7)).unwrap();
        assert_ne!(t0.as_bytes(), t1.as_bytes());
    }

    #[test]
    fn test_single_wave_matches_closed_form() {
        // A narrow band around one wavelength behaves like a single Gerstner wave
        // away from the blend region
        let zeta = 2.0_f32;
        let width = 1e-3_f32;
        let buffer = ProfileBuffer::new(zeta - width, zeta + width, 1, &Constant(1.0)).unwrap();
        let data = buffer.precompute(&small_params(0.0)).unwrap();

        let wavelength = (zeta as f64).exp2();
        let k = TAU / wavelength;
        let scale = wavelength * 2.0 * width as f64;

        // At p = 0 only the unshifted copy contributes
        let expected = (gerstner_wave(0.0, k) * scale).as_vec4();
        assert!((data.samples()[0] - expected).length() < 1e-4);
    }

    #[test]
    fn test_wrap_is_as_smooth_as_interior() {
        let buffer = small_buffer();
        let data = buffer.precompute(&small_params(0.3)).unwrap();
        let samples = data.samples();

        let max_step = samples
            .windows(2)
            .map(|w| (w[1] - w[0]).length())
            .fold(0.0_f32, f32::max);
        let wrap_step = (samples[0] - samples[samples.len() - 1]).length();
        assert!(wrap_step <= 2.0 * max_step, "wrap {wrap_step} vs {max_step}");
    }

    #[test]
    fn test_large_spectrum_end_to_end() {
        let buffer = ProfileBuffer::new(1.0, 10.0, 64, &Constant(1.0)).unwrap();
        let params = PrecomputeParams {
            time: 0.0,
            resolution: 1024,
            periodicity: 2,
        };
        let data = buffer.precompute(&params).unwrap();

        assert!((data.period() - 2048.0).abs() < 1e-3);
        assert_eq!(data.evaluate(0.0), data.evaluate(2048.0));
        for s in data.samples() {
            assert!(s.is_finite());
            assert!(s.x.abs() < 1.0e4 && s.y.abs() < 1.0e4);
        }
    }

    proptest! {
        #[test]
        fn evaluate_is_periodic(p in -1.0e4f32..1.0e4, time in 0.0f32..50.0) {
            let buffer = small_buffer();
            let data = buffer.precompute(&small_params(time)).unwrap();
            let period = data.period();

            let here = data.evaluate(p);
            let next = data.evaluate(p + period);
            let scale = 1.0 + here.length();
            prop_assert!((here - next).length() < 1e-2 * scale);
        }
    }
}
