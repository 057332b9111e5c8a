//! Error types for configuration and profile evaluation.

use thiserror::Error;

/// Invalid configuration, rejected at construction time.
///
/// These are permanent failures: retrying with the same parameters
/// produces the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("sample count {count} is not a perfect square")]
    NonSquareSampleCount { count: usize },
    #[error("sample grid must not be empty")]
    EmptySamples,
    #[error("world size must be positive and finite, got {0}")]
    NonPositiveWorldSize(f32),
    #[error("integration node count must be positive")]
    NonPositiveIntegrationNodes,
    #[error("profile resolution must be positive")]
    NonPositiveResolution,
    #[error("periodicity must be positive")]
    NonPositivePeriodicity,
    #[error("zeta range must be finite and ordered (min={min}, max={max})")]
    InvalidZetaRange { min: f32, max: f32 },
    #[error("{name} must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f32 },
    #[error("wind speed must be positive and finite, got {0}")]
    NonPositiveWindSpeed(f32),
    #[error("spectral bucket count must be positive")]
    NonPositiveBuckets,
}

/// Failures when reading from a profile buffer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("profile buffer has not been precomputed yet")]
    NotInitialized,
    #[error(transparent)]
    Config(#[from] ConfigError),
}
