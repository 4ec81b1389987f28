//! Configuration error types.

use std::path::PathBuf;

/// Errors that can occur when locating, loading, or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The platform reports no per-user config directory.
    #[error("no config directory available on this platform")]
    NoConfigDir,

    /// Failed to read a config file.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the config directory or write the file.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON for [`crate::Config`].
    #[error("failed to parse config: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),
}
