//! Biome-aware cave mask.
//!
//! Each cell samples the cave noise at the cave frequency of the biome that
//! owns that cell, so cave density follows biome boundaries cell by cell.
//! Rows above the biome map take the biome of its top row but still sample
//! the noise at their own coordinates.

use tracing::debug;

use crate::biome::BiomeMap;
use crate::grid::Grid;
use crate::noise_field::NoiseField;

/// Per-cell solid/open mask. `true` means the ground is kept.
#[derive(Debug)]
pub struct CaveMask {
    solid: Grid<bool>,
}

impl CaveMask {
    /// Evaluate the mask over the world's columns and rows `0..rows`.
    ///
    /// A cell is solid when its noise exceeds the owning biome's `surface_threshold`.
    /// `rows` should cover the tallest column (see [`crate::HeightProfile::rows`]).
    pub fn build(field: &NoiseField, biomes: &BiomeMap, rows: u32) -> Self {
        let solid = Grid::from_fn(biomes.size(), rows, |x, y| {
            let biome = biomes.biome_at(x, y);
            field.sample(x as f64, y as f64, biome.cave_frequency) > biome.surface_threshold
        });

        let open = solid.iter().filter(|s| !**s).count();
        debug!(open_cells = open, "cave mask built");

        Self { solid }
    }

    /// Returns `true` if ground at `(x, y)` survives cave carving.
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        *self.solid.get(x, y)
    }
}
