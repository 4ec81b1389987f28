//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use loam_worldgen::WorldGenConfig;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// World generation settings.
    pub world: WorldGenConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Print an ASCII rendering of the generated world.
    pub preview: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            preview: false,
        }
    }
}

/// How [`Config::load_or_create`] obtained its config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Read from an existing `config.ron`.
    Loaded,
    /// No file existed; defaults were written.
    Created,
}

/// Per-user config directory, `<config dir>/loam`.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|d| d.join("loam"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Directory for debug log files, `<data dir>/loam/logs`, if the platform has one.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("loam").join("logs"))
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    ///
    /// Runs before logging is initialized, so the caller reports the origin.
    pub fn load_or_create(config_dir: &Path) -> Result<(Self, ConfigOrigin), ConfigError> {
        let path = config_dir.join(CONFIG_FILE);
        if !path.exists() {
            let config = Config::default();
            config.save(config_dir)?;
            return Ok((config, ConfigOrigin::Created));
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
        Ok((config, ConfigOrigin::Loaded))
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let write_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| ConfigError::Write { path, source }
        };
        std::fs::create_dir_all(config_dir).map_err(write_err(config_dir))?;

        // Biome and ore tables nest four levels deep; keep them expanded.
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        let path = config_dir.join(CONFIG_FILE);
        std::fs::write(&path, serialized).map_err(write_err(&path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loam_worldgen::MaterialKind;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(4))
                .unwrap();
        assert!(ron_str.contains("world_size: 128"));
        assert!(ron_str.contains("chunk_size: 16"));
        assert!(ron_str.contains("\"grassland\""));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.world.seed = Some(-1234.5);
        config.world.sprites = config.world.sprites.clone().with(MaterialKind::Stone, 5);
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(debug: (log_level: \"warn\"))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.world, WorldGenConfig::default());
        assert_eq!(config.debug.log_level, "warn");
        assert!(!config.debug.preview);
    }

    #[test]
    fn test_partial_world_section() {
        let ron_str = "(world: (world_size: 64, generate_caves: false))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.world.world_size, 64);
        assert!(!config.world.generate_caves);
        assert_eq!(config.world.biomes.len(), 4);
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.world.world_size = 256;
        config.world.seed = Some(42.0);
        config.debug.preview = true;

        config.save(dir.path()).unwrap();
        let (loaded, origin) = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
        assert_eq!(origin, ConfigOrigin::Loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("loam");

        let (config, origin) = Config::load_or_create(&nested).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(origin, ConfigOrigin::Created);
        assert!(nested.join(CONFIG_FILE).exists());

        let (_, origin) = Config::load_or_create(&nested).unwrap();
        assert_eq!(origin, ConfigOrigin::Loaded);
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// This is a comment\n(\n  // Another comment\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }
}
