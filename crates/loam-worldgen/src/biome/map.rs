//! Precomputed biome classification for every cell of the world grid.

use tracing::{debug, warn};

use super::{BiomeDef, BiomeId, BiomeKey, BiomePalette, BiomeRegistry};
use crate::grid::Grid;
use crate::noise_field::NoiseField;

/// World-sized grid of palette keys plus the registry that resolves them.
///
/// Built once at the start of generation; every later lookup is a pure read.
#[derive(Debug)]
pub struct BiomeMap {
    keys: Grid<BiomeKey>,
    registry: BiomeRegistry,
}

impl BiomeMap {
    /// Sample the biome noise over a `world_size` x `world_size` grid and
    /// discretize each value through `palette`.
    ///
    /// # Panics
    ///
    /// Panics if `registry` is empty.
    pub fn build(
        field: &NoiseField,
        registry: BiomeRegistry,
        palette: &BiomePalette,
        frequency: f64,
        world_size: u32,
    ) -> Self {
        assert!(!registry.is_empty(), "biome map needs at least one biome");

        let keys = Grid::from_fn(world_size, world_size, |x, y| {
            palette.classify(field.sample(x as f64, y as f64, frequency))
        });

        let unmatched = keys
            .iter()
            .filter(|key| registry.lookup_by_key(**key).is_none())
            .count();
        if unmatched > 0 {
            warn!(
                unmatched,
                fallback = %registry.get(BiomeId(0)).name,
                "biome palette produced keys with no registered biome"
            );
        }
        debug!(world_size, biomes = registry.len(), "biome map built");

        Self { keys, registry }
    }

    /// Palette key stored for `(x, y)`.
    pub fn key_at(&self, x: i32, y: i32) -> BiomeKey {
        *self.keys.get(x, y)
    }

    /// Biome ID for `(x, y)`; unmatched keys resolve to biome 0.
    pub fn biome_id_at(&self, x: i32, y: i32) -> BiomeId {
        self.registry.resolve_key(self.key_at(x, y))
    }

    /// Biome definition for `(x, y)`.
    pub fn biome_at(&self, x: i32, y: i32) -> &BiomeDef {
        self.registry.get(self.biome_id_at(x, y))
    }

    /// The registry backing this map.
    pub fn registry(&self) -> &BiomeRegistry {
        &self.registry
    }

    /// Side length of the precomputed grid.
    pub fn size(&self) -> u32 {
        self.keys.width()
    }
}
