//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::error::ConfigError;
use crate::params::{BankParams, PrecomputeParams, ProfileParams, TerrainParams};
use crate::spectrum::{Constant, PiersonMoskowitz, SpectralDensity};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wavelet-surface")]
#[command(about = "Spectral wave profiles and shoreline level sets", long_about = None)]
pub struct Args {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Precompute profile buffers and report their statistics
    Profile(ProfileArgs),
    /// Bake a procedural island and query its level set
    Environment(EnvironmentArgs),
}

/// Profile precompute options
#[derive(clap::Args, Debug)]
pub struct ProfileArgs {
    /// Spectrum: pierson-moskowitz (default), constant
    #[arg(long, value_name = "NAME", default_value = "pierson-moskowitz")]
    pub spectrum: String,

    /// Wind speed for the Pierson-Moskowitz spectrum (m/s)
    #[arg(long, value_name = "M_PER_S", default_value = "5")]
    pub wind_speed: f32,

    /// Density of the constant spectrum
    #[arg(long, value_name = "DENSITY", default_value = "1")]
    pub density: f64,

    /// log2 of the shortest wavelength (defaults to log2(0.03))
    #[arg(long, value_name = "ZETA", allow_hyphen_values = true)]
    pub zeta_min: Option<f32>,

    /// log2 of the longest wavelength (defaults to log2(10))
    #[arg(long, value_name = "ZETA", allow_hyphen_values = true)]
    pub zeta_max: Option<f32>,

    /// Quadrature nodes per bucket
    #[arg(long, value_name = "COUNT", default_value = "100")]
    pub nodes: usize,

    /// Number of spectral buckets
    #[arg(long, value_name = "COUNT", default_value = "1")]
    pub buckets: usize,

    /// Simulation time to precompute at (seconds)
    #[arg(long, value_name = "SECONDS", default_value = "0")]
    pub time: f32,

    /// Samples per buffer
    #[arg(long, value_name = "COUNT", default_value = "4096")]
    pub resolution: usize,

    /// Buffer period in multiples of the longest wavelength
    #[arg(long, value_name = "COUNT", default_value = "2")]
    pub periodicity: u32,

    /// Write the raw buffers (4 native-endian f32 per sample, buckets in order)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Spectrum selected on the command line
#[derive(Debug, Clone, Copy)]
pub enum SpectrumChoice {
    Constant(Constant),
    PiersonMoskowitz(PiersonMoskowitz),
}

impl SpectralDensity for SpectrumChoice {
    fn density(&self, zeta: f64) -> f64 {
        match self {
            SpectrumChoice::Constant(s) => s.density(zeta),
            SpectrumChoice::PiersonMoskowitz(s) => s.density(zeta),
        }
    }
}

impl ProfileArgs {
    /// Parse the spectrum name, falling back to Pierson-Moskowitz
    pub fn parse_spectrum(&self) -> Result<SpectrumChoice, ConfigError> {
        match self.spectrum.to_lowercase().as_str() {
            "constant" => Ok(SpectrumChoice::Constant(Constant(self.density))),
            "pierson-moskowitz" | "pm" => Ok(SpectrumChoice::PiersonMoskowitz(
                PiersonMoskowitz::new(self.wind_speed)?,
            )),
            other => {
                warn!(spectrum = other, "unknown spectrum, using pierson-moskowitz");
                Ok(SpectrumChoice::PiersonMoskowitz(PiersonMoskowitz::new(
                    self.wind_speed,
                )?))
            }
        }
    }

    pub fn bank_params(&self) -> BankParams {
        let defaults = ProfileParams::default();
        BankParams {
            profile: ProfileParams {
                zeta_min: self.zeta_min.unwrap_or(defaults.zeta_min),
                zeta_max: self.zeta_max.unwrap_or(defaults.zeta_max),
                integration_nodes: self.nodes,
            },
            n_zeta: self.buckets,
        }
    }

    pub fn precompute_params(&self) -> PrecomputeParams {
        PrecomputeParams {
            time: self.time,
            resolution: self.resolution,
            periodicity: self.periodicity,
        }
    }
}

/// Island baking and level-set query options
#[derive(clap::Args, Debug)]
pub struct EnvironmentArgs {
    /// Samples per grid side
    #[arg(long, value_name = "COUNT", default_value = "128")]
    pub samples: usize,

    /// Half-extent of the grid (meters)
    #[arg(long, value_name = "METERS", default_value = "50")]
    pub world_size: f32,

    /// Still-water height (meters)
    #[arg(long, value_name = "METERS", default_value = "0", allow_hyphen_values = true)]
    pub water_level: f32,

    /// Radius of the island's dry core (meters)
    #[arg(long, value_name = "METERS", default_value = "15")]
    pub island_radius: f32,

    /// Noise seed
    #[arg(long, value_name = "SEED", default_value = "42")]
    pub seed: u32,

    /// Query lattice points per side for the wet-fraction estimate
    #[arg(long, value_name = "COUNT", default_value = "64")]
    pub lattice: usize,

    /// Query position as x,y (meters)
    #[arg(long, value_name = "X,Y", value_delimiter = ',', allow_hyphen_values = true)]
    pub at: Option<Vec<f32>>,
}

impl EnvironmentArgs {
    pub fn terrain_params(&self) -> TerrainParams {
        TerrainParams {
            samples_per_side: self.samples,
            world_size: self.world_size,
            water_level: self.water_level,
            island_radius_m: self.island_radius,
            seed: self.seed,
            ..TerrainParams::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults() {
        let args = Args::parse_from(["wavelet-surface", "profile"]);
        let Command::Profile(profile) = args.command else {
            panic!("expected profile subcommand");
        };
        assert_eq!(profile.precompute_params(), PrecomputeParams::default());
        assert_eq!(profile.bank_params(), BankParams::default());
        assert!(matches!(
            profile.parse_spectrum(),
            Ok(SpectrumChoice::PiersonMoskowitz(_))
        ));
    }

    #[test]
    fn test_profile_flags_map_onto_params() {
        let args = Args::parse_from([
            "wavelet-surface",
            "profile",
            "--spectrum",
            "constant",
            "--zeta-min",
            "-1",
            "--zeta-max",
            "6",
            "--buckets",
            "3",
            "--resolution",
            "512",
        ]);
        let Command::Profile(profile) = args.command else {
            panic!("expected profile subcommand");
        };
        let bank = profile.bank_params();
        assert_eq!(bank.profile.zeta_min, -1.0);
        assert_eq!(bank.profile.zeta_max, 6.0);
        assert_eq!(bank.n_zeta, 3);
        assert_eq!(profile.precompute_params().resolution, 512);
        assert!(matches!(
            profile.parse_spectrum(),
            Ok(SpectrumChoice::Constant(Constant(d))) if d == 1.0
        ));
    }

    #[test]
    fn test_environment_query_position() {
        let args = Args::parse_from(["wavelet-surface", "environment", "--at", "-3.5,2"]);
        let Command::Environment(env) = args.command else {
            panic!("expected environment subcommand");
        };
        assert_eq!(env.at, Some(vec![-3.5, 2.0]));
        assert_eq!(env.terrain_params().samples_per_side, 128);
    }
}
