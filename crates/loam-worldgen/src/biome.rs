//! Biome system: definitions, registry, palette discretization and the precomputed biome map.
//!
//! A single low-frequency noise field is sampled over the whole world and
//! banded through a [`BiomePalette`] into discrete [`BiomeKey`]s, which the
//! [`BiomeRegistry`] resolves to biome parameter sets.

mod def;
mod map;
mod palette;
mod registry;

pub use def::{BiomeDef, OreDef};
pub use map::BiomeMap;
pub use palette::{BiomePalette, PaletteStop};
pub use registry::{BiomeId, BiomeKey, BiomeRegistry, BiomeRegistryError};

#[cfg(test)]
pub(crate) fn test_biome(name: &str, key: u16) -> BiomeDef {
    BiomeDef {
        name: name.into(),
        key: BiomeKey(key),
        terrain_frequency: 0.05,
        cave_frequency: 0.08,
        surface_threshold: 0.25,
        height_multiplier: 10.0,
        dirt_layer_height: 3.0,
        tree_chance: 10,
        tall_grass_chance: 4,
        min_tree_height: 4,
        max_tree_height: 6,
        ores: Vec::new(),
    }
}
