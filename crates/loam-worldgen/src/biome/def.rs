//! Biome and ore definitions: the parameter sets that shape each region of the world.

use serde::{Deserialize, Serialize};

use super::BiomeKey;

/// Placement parameters for the ore occupying one global ore slot within a biome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OreDef {
    /// Noise frequency of the ore field. Higher values give smaller, more scattered veins.
    pub rarity: f64,
    /// Noise threshold. Cells where the field exceeds this value hold ore.
    pub size: f64,
    /// Minimum depth below the column surface, in tiles, before the ore may appear.
    pub max_spawn_height: f64,
}

/// Full descriptor for a biome type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiomeDef {
    /// Human-readable biome name (e.g., "grassland").
    pub name: String,
    /// Palette key the biome noise maps onto this biome.
    pub key: BiomeKey,
    /// Frequency of the terrain height noise for columns in this biome.
    pub terrain_frequency: f64,
    /// Frequency of the cave noise.
    pub cave_frequency: f64,
    /// Cave threshold. Cells where cave noise exceeds this value stay solid.
    pub surface_threshold: f64,
    /// Scale applied to terrain noise to obtain the column height.
    pub height_multiplier: f64,
    /// Number of tiles from the surface down to where stone begins.
    pub dirt_layer_height: f64,
    /// A tree grows when a roll in `0..tree_chance` equals 1. Values below 2 disable trees.
    pub tree_chance: u32,
    /// Same rule as `tree_chance`, for tall grass.
    pub tall_grass_chance: u32,
    /// Inclusive lower bound of the trunk height.
    pub min_tree_height: u32,
    /// Exclusive upper bound of the trunk height.
    pub max_tree_height: u32,
    /// Ore parameters indexed by global ore slot. Missing slots carry no ore.
    pub ores: Vec<OreDef>,
}

impl BiomeDef {
    /// Ore parameters for `slot`, if this biome defines one.
    pub fn ore(&self, slot: usize) -> Option<&OreDef> {
        self.ores.get(slot)
    }
}
