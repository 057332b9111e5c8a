//! wavelet-surface - precompute wave profiles and bake shoreline level sets
//!
//! `profile` integrates Gerstner profile tables from a spectrum and can dump
//! the raw buffers a host would copy out. `environment` bakes a procedural
//! island into a level-set grid and queries it.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use glam::Vec2;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wavelet_surface::cli::{Args, Command, EnvironmentArgs, ProfileArgs};
use wavelet_surface::terrain::IslandTerrain;
use wavelet_surface::ProfileBank;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match &args.command {
        Command::Profile(profile) => run_profile(profile),
        Command::Environment(environment) => run_environment(environment),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_profile(args: &ProfileArgs) -> Result<()> {
    let spectrum = args.parse_spectrum()?;
    let bank = ProfileBank::new(args.bank_params(), &spectrum)?;
    let tables = bank.precompute_all(&args.precompute_params())?;

    for (bucket, table) in tables.iter().enumerate() {
        let max_offset = table
            .samples()
            .iter()
            .map(|s| s.truncate().truncate().length())
            .fold(0.0_f32, f32::max);

        println!(
            "Bucket {}: zeta {:.2} | period {:.3}m | {} samples | max offset {:.4}m",
            bucket,
            bank.representative_zeta(bucket),
            table.period(),
            table.len(),
            max_offset
        );
    }

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        for table in &tables {
            writer.write_all(table.as_bytes())?;
        }
        writer.flush()?;
        info!(path = %path.display(), buckets = tables.len(), "profile buffers written");
    }

    Ok(())
}

fn run_environment(args: &EnvironmentArgs) -> Result<()> {
    let terrain = IslandTerrain::new(args.terrain_params())?;
    let env = terrain.bake_environment()?;

    println!(
        "Environment: {}x{} samples | dx {:.3}m | extent ±{}m",
        env.n(),
        env.n(),
        env.dx(),
        env.world_size()
    );

    if args.lattice > 0 {
        let step = 2.0 * env.world_size() / args.lattice as f32;
        let mut wet = 0usize;
        for i in 0..args.lattice {
            for j in 0..args.lattice {
                let pos = Vec2::new(j as f32 + 0.5, i as f32 + 0.5) * step - env.world_size();
                if env.contains(pos) {
                    wet += 1;
                }
            }
        }
        let total = args.lattice * args.lattice;
        println!(
            "Wet fraction: {:.1}% ({} of {} query points)",
            100.0 * wet as f32 / total as f32,
            wet,
            total
        );
    }

    if let Some(at) = &args.at {
        let [x, y] = at.as_slice() else {
            bail!("--at expects exactly two values, got {}", at.len());
        };
        let pos = Vec2::new(*x, *y);
        let gradient = env.levelset_gradient(pos);
        println!(
            "At ({}, {}): level set {:.4} | {} | gradient ({:.4}, {:.4})",
            x,
            y,
            env.levelset(pos),
            if env.contains(pos) { "water" } else { "land" },
            gradient.x,
            gradient.y
        );
    }

    Ok(())
}
