//! Parameter definitions with physical units and documented semantics.
//!
//! Every record here is a fixed configuration: build it, call `validate()`,
//! hand it to a constructor. Nothing is mutated at runtime.

mod environment;
mod profile;
mod terrain;

// Re-export all types
pub use environment::EnvironmentParams;
pub use profile::{BankParams, PrecomputeParams, ProfileParams};
pub use terrain::TerrainParams;

use crate::error::ConfigError;

/// Reject NaN and infinities for a named parameter.
pub(crate) fn ensure_finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFiniteParameter { name, value })
    }
}
