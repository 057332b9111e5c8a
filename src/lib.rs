//! Wavelet surface library - spectral wave profiles and shoreline level sets
//!
//! Two numerical building blocks for a real-time water surface:
//! - [`profile`]: periodic Gerstner profile tables integrated from a spectral density
//! - [`environment`]: a bilinear level-set grid describing where the water is

pub mod bank;
pub mod cli;
pub mod environment;
pub mod error;
pub mod math;
pub mod params;
pub mod profile;
pub mod spectrum;
pub mod terrain;

pub use bank::ProfileBank;
pub use environment::Environment;
pub use error::{ConfigError, ProfileError};
pub use profile::{ProfileBuffer, ProfileData};
pub use spectrum::SpectralDensity;
