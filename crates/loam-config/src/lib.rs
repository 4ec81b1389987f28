//! Persistent settings for the loam world generator.
//!
//! World generation and debug settings live in a single `config.ron`, created
//! with defaults on first run. Command-line arguments override individual
//! fields after loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE, Config, ConfigOrigin, DebugConfig, default_config_dir, default_log_dir,
};
pub use error::ConfigError;
