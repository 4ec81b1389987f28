//! World generation settings and their validation.

use serde::{Deserialize, Serialize};

use crate::biome::{BiomeDef, BiomeKey, BiomePalette, BiomeRegistry, OreDef, PaletteStop};
use crate::error::WorldGenError;
use crate::material::{MaterialKind, SpriteCatalog, VariantTable};
use crate::tile_registry::check_chunk_layout;

/// Highest surface a column may reach, in tiles.
pub const MAX_COLUMN_HEIGHT: f64 = 4096.0;
/// Tallest trunk a biome may grow.
pub const MAX_TREE_HEIGHT: u32 = 256;

/// Everything that stays constant for one generation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    /// World width in columns. The biome grid is `world_size` square.
    pub world_size: u32,
    /// Columns per chunk. Must divide `world_size`.
    pub chunk_size: u32,
    /// Fixed world seed. `None` asks the caller to pick a random one.
    pub seed: Option<f64>,
    /// Base height added to every column, in tiles.
    pub height_addition: f64,
    /// Frequency of the biome noise.
    pub biome_frequency: f64,
    /// Bands mapping biome noise to palette keys.
    pub palette: BiomePalette,
    /// Carve caves out of the ground.
    pub generate_caves: bool,
    /// Names of the global ore slots. Later slots override earlier ones.
    pub ore_slots: Vec<String>,
    /// Biomes; the first is the fallback for unmatched palette keys.
    pub biomes: Vec<BiomeDef>,
    /// Sprite variant counts per material.
    pub sprites: VariantTable,
}

impl WorldGenConfig {
    /// Check every precondition that does not depend on the sprite catalog.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition.
    pub fn validate(&self) -> Result<(), WorldGenError> {
        check_chunk_layout(self.world_size, self.chunk_size)?;

        if self.ore_slots.len() > usize::from(u8::MAX) + 1 {
            return Err(WorldGenError::TooManyOreSlots(self.ore_slots.len()));
        }
        if self.biomes.is_empty() {
            return Err(WorldGenError::NoBiomes);
        }

        for biome in &self.biomes {
            if biome.ores.len() > self.ore_slots.len() {
                return Err(WorldGenError::OreSlotOutOfRange {
                    biome: biome.name.clone(),
                    ores: biome.ores.len(),
                    slots: self.ore_slots.len(),
                });
            }
            if biome.dirt_layer_height < 1.0 {
                return Err(invalid(biome, "dirt_layer_height must be at least 1"));
            }
            if biome.min_tree_height > biome.max_tree_height {
                return Err(invalid(
                    biome,
                    "min_tree_height must not exceed max_tree_height",
                ));
            }
            if biome.max_tree_height > MAX_TREE_HEIGHT {
                return Err(invalid(biome, "max_tree_height must not exceed 256"));
            }

            // Noise samples lie in [0, 1), so the multiplier adds at most itself.
            let top = self.height_addition + biome.height_multiplier.max(0.0);
            if !top.is_finite() || top > MAX_COLUMN_HEIGHT {
                return Err(WorldGenError::ColumnTooTall {
                    biome: biome.name.clone(),
                    height: top,
                    limit: MAX_COLUMN_HEIGHT,
                });
            }
        }

        self.build_registry().map(|_| ())
    }

    /// Check that `catalog` can draw every material this configuration can emit.
    ///
    /// # Errors
    ///
    /// Returns [`WorldGenError::EmptyVariants`] for the first undrawable material.
    pub fn validate_catalog(&self, catalog: &dyn SpriteCatalog) -> Result<(), WorldGenError> {
        self.materials()
            .find(|kind| catalog.variant_count(*kind) == 0)
            .map_or(Ok(()), |kind| Err(WorldGenError::EmptyVariants(kind)))
    }

    /// Register the configured biomes in order.
    pub fn build_registry(&self) -> Result<BiomeRegistry, WorldGenError> {
        let mut registry = BiomeRegistry::new();
        for biome in &self.biomes {
            registry.register(biome.clone())?;
        }
        Ok(registry)
    }

    /// Every material a run with this configuration can emit.
    pub fn materials(&self) -> impl Iterator<Item = MaterialKind> + '_ {
        MaterialKind::BASE
            .into_iter()
            .chain((0..self.ore_slots.len()).map(|slot| MaterialKind::Ore(slot as u8)))
    }

    /// Name of the ore in `slot`, if configured.
    pub fn ore_name(&self, slot: u8) -> Option<&str> {
        self.ore_slots.get(usize::from(slot)).map(String::as_str)
    }
}

fn invalid(biome: &BiomeDef, reason: &str) -> WorldGenError {
    WorldGenError::InvalidBiome {
        name: biome.name.clone(),
        reason: reason.to_string(),
    }
}

// --- Default world ---

fn default_ores(slots: usize) -> Vec<OreDef> {
    let ores = [
        // coal
        OreDef {
            rarity: 0.18,
            size: 0.74,
            max_spawn_height: 5.0,
        },
        // iron
        OreDef {
            rarity: 0.16,
            size: 0.76,
            max_spawn_height: 10.0,
        },
        // gold
        OreDef {
            rarity: 0.12,
            size: 0.78,
            max_spawn_height: 20.0,
        },
        // diamond
        OreDef {
            rarity: 0.11,
            size: 0.8,
            max_spawn_height: 30.0,
        },
    ];
    ores.into_iter().take(slots).collect()
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        let biomes = vec![
            BiomeDef {
                name: "grassland".to_string(),
                key: BiomeKey(0),
                terrain_frequency: 0.04,
                cave_frequency: 0.08,
                surface_threshold: 0.25,
                height_multiplier: 25.0,
                dirt_layer_height: 5.0,
                tree_chance: 10,
                tall_grass_chance: 3,
                min_tree_height: 4,
                max_tree_height: 6,
                ores: default_ores(4),
            },
            BiomeDef {
                name: "forest".to_string(),
                key: BiomeKey(1),
                terrain_frequency: 0.04,
                cave_frequency: 0.08,
                surface_threshold: 0.25,
                height_multiplier: 25.0,
                dirt_layer_height: 5.0,
                tree_chance: 5,
                tall_grass_chance: 2,
                min_tree_height: 5,
                max_tree_height: 8,
                ores: default_ores(4),
            },
            BiomeDef {
                name: "desert".to_string(),
                key: BiomeKey(2),
                terrain_frequency: 0.04,
                cave_frequency: 0.085,
                surface_threshold: 0.3,
                height_multiplier: 15.0,
                dirt_layer_height: 6.0,
                tree_chance: 0,
                tall_grass_chance: 0,
                min_tree_height: 0,
                max_tree_height: 0,
                ores: default_ores(3),
            },
            BiomeDef {
                name: "snow".to_string(),
                key: BiomeKey(3),
                terrain_frequency: 0.05,
                cave_frequency: 0.08,
                surface_threshold: 0.25,
                height_multiplier: 35.0,
                dirt_layer_height: 4.0,
                tree_chance: 15,
                tall_grass_chance: 0,
                min_tree_height: 6,
                max_tree_height: 9,
                ores: default_ores(4),
            },
        ];

        let palette = BiomePalette {
            stops: vec![
                PaletteStop {
                    until: 0.42,
                    key: BiomeKey(2),
                },
                PaletteStop {
                    until: 0.5,
                    key: BiomeKey(0),
                },
                PaletteStop {
                    until: 0.58,
                    key: BiomeKey(1),
                },
                PaletteStop {
                    until: 1.0,
                    key: BiomeKey(3),
                },
            ],
            fallback: BiomeKey(0),
        };

        Self {
            world_size: 128,
            chunk_size: 16,
            seed: None,
            height_addition: 40.0,
            biome_frequency: 0.015,
            palette,
            generate_caves: true,
            ore_slots: ["coal", "iron", "gold", "diamond"]
                .into_iter()
                .map(String::from)
                .collect(),
            biomes,
            sprites: VariantTable::uniform(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = WorldGenConfig::default();
        config.validate().unwrap();
        config.validate_catalog(&config.sprites).unwrap();
        assert_eq!(config.materials().count(), 6 + 4);
        assert_eq!(config.ore_name(3), Some("diamond"));
        assert_eq!(config.ore_name(4), None);
    }

    #[test]
    fn test_misaligned_chunks_rejected() {
        let config = WorldGenConfig {
            world_size: 100,
            chunk_size: 16,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WorldGenError::WorldSizeNotChunkAligned { .. })
        ));
    }

    #[test]
    fn test_no_biomes_rejected() {
        let config = WorldGenConfig {
            biomes: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(WorldGenError::NoBiomes)));
    }

    #[test]
    fn test_more_ores_than_slots_rejected() {
        let mut config = WorldGenConfig::default();
        config.ore_slots.truncate(2);
        assert!(matches!(
            config.validate(),
            Err(WorldGenError::OreSlotOutOfRange { ores: 4, slots: 2, .. })
        ));
    }

    #[test]
    fn test_fewer_ores_than_slots_accepted() {
        let mut config = WorldGenConfig::default();
        config.biomes[0].ores.clear();
        config.validate().unwrap();
    }

    #[test]
    fn test_duplicate_biome_name_rejected() {
        let mut config = WorldGenConfig::default();
        config.biomes[1].name = "grassland".to_string();
        assert!(matches!(config.validate(), Err(WorldGenError::Registry(_))));
    }

    #[test]
    fn test_thin_dirt_layer_rejected() {
        let mut config = WorldGenConfig::default();
        config.biomes[2].dirt_layer_height = 0.5;
        assert!(matches!(
            config.validate(),
            Err(WorldGenError::InvalidBiome { .. })
        ));
    }

    #[test]
    fn test_inverted_tree_height_rejected() {
        let mut config = WorldGenConfig::default();
        config.biomes[0].min_tree_height = 9;
        assert!(matches!(
            config.validate(),
            Err(WorldGenError::InvalidBiome { .. })
        ));
    }

    #[test]
    fn test_empty_ore_variants_rejected() {
        let config = WorldGenConfig::default();
        let catalog = VariantTable::uniform(2).with(MaterialKind::Ore(3), 0);
        assert!(matches!(
            config.validate_catalog(&catalog),
            Err(WorldGenError::EmptyVariants(MaterialKind::Ore(3)))
        ));
    }

    #[test]
    fn test_column_height_bounded() {
        let mut config = WorldGenConfig::default();
        config.height_addition = MAX_COLUMN_HEIGHT - 35.0;
        config.validate().unwrap();

        config.height_addition = MAX_COLUMN_HEIGHT - 34.0;
        assert!(matches!(
            config.validate(),
            Err(WorldGenError::ColumnTooTall { ref biome, .. }) if biome == "snow"
        ));
    }

    #[test]
    fn test_non_finite_height_rejected() {
        let mut config = WorldGenConfig::default();
        config.biomes[1].height_multiplier = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(WorldGenError::ColumnTooTall { .. })
        ));

        let mut config = WorldGenConfig::default();
        config.height_addition = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(WorldGenError::ColumnTooTall { .. })
        ));
    }

    #[test]
    fn test_tree_height_bounded() {
        let mut config = WorldGenConfig::default();
        config.biomes[0].max_tree_height = MAX_TREE_HEIGHT;
        config.validate().unwrap();

        config.biomes[0].max_tree_height = MAX_TREE_HEIGHT + 1;
        assert!(matches!(
            config.validate(),
            Err(WorldGenError::InvalidBiome { .. })
        ));
    }
}
