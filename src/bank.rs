//! One profile buffer per spectral bucket.
//!
//! The wavelength range is split into `n_zeta` equal buckets in `zeta`.
//! A wave grid advects amplitudes per bucket and looks up each bucket's
//! profile, so all buffers are precomputed together at the same time.

use std::sync::Arc;

use tracing::info;

use crate::error::ConfigError;
use crate::params::{BankParams, PrecomputeParams, ProfileParams};
use crate::profile::{ProfileBuffer, ProfileData};
use crate::spectrum::SpectralDensity;

/// Profile buffers covering adjacent `zeta` buckets, shortest waves first.
#[derive(Debug)]
pub struct ProfileBank {
    params: BankParams,
    buffers: Vec<ProfileBuffer>,
}

impl ProfileBank {
    /// Build one buffer per bucket, each with the full node count of `params.profile`.
    pub fn new(params: BankParams, spectrum: &impl SpectralDensity) -> Result<Self, ConfigError> {
        params.validate()?;

        let width = params.bucket_width();
        let buffers = (0..params.n_zeta)
            .map(|bucket| {
                let zeta_min = params.profile.zeta_min + bucket as f32 * width;
                let bucket_params = ProfileParams {
                    zeta_min,
                    zeta_max: zeta_min + width,
                    integration_nodes: params.profile.integration_nodes,
                };
                ProfileBuffer::from_params(&bucket_params, spectrum)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { params, buffers })
    }

    pub fn params(&self) -> &BankParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    pub fn get(&self, bucket: usize) -> Option<&ProfileBuffer> {
        self.buffers.get(bucket)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProfileBuffer> {
        self.buffers.iter()
    }

    /// Midpoint `zeta` of a bucket, the wavelength a grid treats it as.
    pub fn representative_zeta(&self, bucket: usize) -> f32 {
        let width = self.params.bucket_width();
        self.params.profile.zeta_min + (bucket as f32 + 0.5) * width
    }

    /// Re-sample a new spectral density into every bucket.
    pub fn refresh_spectrum(&mut self, spectrum: &impl SpectralDensity) {
        for buffer in &mut self.buffers {
            buffer.refresh_spectrum(spectrum);
        }
    }

    /// Precompute every bucket at `params.time`, returning the published tables in bucket order.
    pub fn precompute_all(&self, params: &PrecomputeParams) -> Result<Vec<Arc<ProfileData>>, ConfigError> {
        let tables = self
            .buffers
            .iter()
            .map(|buffer| buffer.precompute(params))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            buckets = self.buffers.len(),
            resolution = params.resolution,
            time = params.time,
            "profile bank precomputed"
        );
        Ok(tables)
    }
}

impl<'a> IntoIterator for &'a ProfileBank {
    type Item = &'a ProfileBuffer;
    type IntoIter = std::slice::Iter<'a, ProfileBuffer>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffers.iter()
    }
}
