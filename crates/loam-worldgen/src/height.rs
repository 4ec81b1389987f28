//! Per-column terrain surface height.
//!
//! Height is a 1D function of `x`: the terrain noise is sampled on the row
//! the seed offset alone selects, at the frequency of the column's biome.

use tracing::debug;

use crate::biome::BiomeMap;
use crate::noise_field::NoiseField;

/// Surface height of every column, in tiles.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightProfile {
    heights: Vec<f64>,
}

impl HeightProfile {
    /// Compute heights for columns `0..world_size`.
    ///
    /// The biome of a column is the one at its bottom row `(x, 0)`.
    pub fn build(
        field: &NoiseField,
        biomes: &BiomeMap,
        world_size: u32,
        height_addition: f64,
    ) -> Self {
        let heights: Vec<f64> = (0..world_size as i32)
            .map(|x| {
                let biome = biomes.biome_at(x, 0);
                field.sample(x as f64, 0.0, biome.terrain_frequency) * biome.height_multiplier
                    + height_addition
            })
            .collect();

        debug!(
            min = heights.iter().copied().fold(f64::INFINITY, f64::min),
            max = heights.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            "height profile built"
        );

        Self { heights }
    }

    /// Surface height of column `x`. Rows `0..height` are ground.
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside the world.
    pub fn at(&self, x: i32) -> f64 {
        self.heights[x as usize]
    }

    /// Rows a per-cell mask must cover: every ground row of every column,
    /// and at least `world_size`.
    pub fn rows(&self, world_size: u32) -> u32 {
        let top = self.heights.iter().copied().fold(0.0, f64::max).ceil();
        (top as u32).max(world_size)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Returns `true` if the profile has no columns.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}
