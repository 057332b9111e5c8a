//! Published profile tables and their export view.

use glam::Vec4;

use crate::math::{linear, pos_modulo};

/// One finished precompute pass: `resolution` samples over one period.
///
/// Immutable once built. Sample `i` holds the profile at
/// `p = i * period / resolution` as (horizontal offset, vertical offset,
/// d horizontal / dp, d vertical / dp).
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileData {
    period: f32,
    samples: Vec<Vec4>,
}

impl ProfileData {
    /// `samples` must be non-empty and `period` positive.
    pub(crate) fn new(period: f32, samples: Vec<Vec4>) -> Self {
        debug_assert!(!samples.is_empty());
        debug_assert!(period > 0.0);
        Self { period, samples }
    }

    /// Spatial length after which the profile repeats.
    pub fn period(&self) -> f32 {
        self.period
    }

    /// Number of samples (the precompute resolution).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: a published table holds at least one sample, since a
    /// zero resolution is rejected before any table is built.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Vec4] {
        &self.samples
    }

    /// Samples flattened to `4 * len()` floats, row-major.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.samples)
    }

    /// Raw export bytes: row-major 4-float tuples, native endianness, no header.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.samples)
    }

    /// Copy the flattened samples into `dest`, returning the number of floats written.
    ///
    /// Copies `min(dest.len(), 4 * len())` floats.
    pub fn copy_into(&self, dest: &mut [f32]) -> usize {
        let src = self.as_floats();
        let count = src.len().min(dest.len());
        dest[..count].copy_from_slice(&src[..count]);
        count
    }

    /// Profile at offset `p`, linearly interpolated and wrapped at the period.
    ///
    /// Valid for any finite `p`, including negative offsets.
    pub fn evaluate(&self, p: f32) -> Vec4 {
        let n = self.samples.len();
        // Reduce in f64 so large offsets keep sub-sample precision
        let x = (n as f64 * p as f64 / self.period as f64).rem_euclid(n as f64);
        let lookup = linear(|i| self.samples[pos_modulo(i, n)]);
        lookup(x as f32)
    }
}
