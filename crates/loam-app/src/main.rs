//! Loam: generate a 2D tile world from the command line.
//!
//! Loads `config.ron` (creating it on first run), applies CLI overrides,
//! generates one world and prints a per-chunk and per-material summary.
//!
//! Run with: `cargo run -p loam-app -- --seed 1234 --preview`

mod preview;
mod summary;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use loam_config::{CliArgs, Config, ConfigError, ConfigOrigin};
use loam_worldgen::{MaterialKind, WorldGenError, WorldGenerator, seed};
use tracing::{error, info};

use crate::summary::WorldSummary;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    WorldGen(#[from] WorldGenError),
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let loaded = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            loam_log::init_logging(None, false, None);
            error!(error = %e, "failed to load config");
            return ExitCode::FAILURE;
        }
    };

    let config = loaded.config;
    let log_dir = loam_config::default_log_dir();
    loam_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));
    log_config_origin(&loaded.path, loaded.origin);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "world generation failed");
            ExitCode::FAILURE
        }
    }
}

/// Config with CLI overrides applied, plus where it came from.
struct LoadedConfig {
    config: Config,
    path: PathBuf,
    origin: ConfigOrigin,
}

fn load_config(args: &CliArgs) -> Result<LoadedConfig, AppError> {
    let config_dir: PathBuf = match &args.config {
        Some(dir) => dir.clone(),
        None => loam_config::default_config_dir()?,
    };
    let (mut config, origin) = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(args);
    Ok(LoadedConfig {
        config,
        path: config_dir.join(loam_config::CONFIG_FILE),
        origin,
    })
}

fn log_config_origin(path: &Path, origin: ConfigOrigin) {
    match origin {
        ConfigOrigin::Created => info!("Created default config at {}", path.display()),
        ConfigOrigin::Loaded => info!("Loaded config from {}", path.display()),
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    let world_seed = config
        .world
        .seed
        .unwrap_or_else(|| seed::random_seed(&mut rand::rng()));
    info!(
        "World: {} columns, {} per chunk, seed {}",
        config.world.world_size, config.world.chunk_size, world_seed
    );

    let generator = WorldGenerator::new(config.world.clone(), world_seed)?;
    let mut summary = WorldSummary::new(config.debug.preview);
    let report = generator.generate(
        &config.world.sprites,
        &mut seed::variant_rng(world_seed),
        &mut summary,
    )?;

    println!(
        "seed {}: {} tiles in {} chunks ({} trees, {} tall grass)",
        report.seed, report.tiles_placed, report.chunks, report.trees, report.tall_grass
    );
    print!(
        "{}",
        summary.report(|material| match material {
            MaterialKind::Ore(slot) => config
                .world
                .ore_name(slot)
                .map_or_else(|| material.to_string(), str::to_string),
            _ => material.to_string(),
        })
    );

    if let Some(tiles) = summary.tiles() {
        print!("{}", preview::render(tiles, config.world.world_size));
    }
    Ok(())
}
