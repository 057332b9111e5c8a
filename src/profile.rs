//! Periodic wave profile buffers.
//!
//! A profile buffer integrates a superposition of Gerstner waves, weighted by
//! a spectral density, into a table indexed by the scalar offset
//! `p = dot(position, wave_direction)`. The table wraps seamlessly at its
//! period so lookups are valid for any `p`.

mod buffer;
mod data;
mod kernel;

// Re-export public types
pub use buffer::ProfileBuffer;
pub use data::ProfileData;
pub use kernel::{cubic_bump, dispersion_relation, gerstner_wave, GRAVITY};
