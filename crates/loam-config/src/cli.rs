//! Command-line argument parsing for the loam generator.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Loam command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "loam", about = "Deterministic 2D tile-world generator")]
pub struct CliArgs {
    /// World seed. A random seed is drawn when neither this nor the config sets one.
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<f64>,

    /// World width in columns.
    #[arg(long)]
    pub world_size: Option<u32>,

    /// Columns per chunk.
    #[arg(long)]
    pub chunk_size: Option<u32>,

    /// Disable cave carving.
    #[arg(long)]
    pub no_caves: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print an ASCII preview of the generated world.
    #[arg(long)]
    pub preview: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.world.seed = Some(seed);
        }
        if let Some(size) = args.world_size {
            self.world.world_size = size;
        }
        if let Some(size) = args.chunk_size {
            self.world.chunk_size = size;
        }
        if args.no_caves {
            self.world.generate_caves = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if args.preview {
            self.debug.preview = true;
        }
    }
}
