//! Per-slot ore presence masks.
//!
//! The world has a fixed, ordered list of ore slots. Each slot gets one mask
//! over the whole grid; a cell's presence is decided by the ore parameters the
//! owning biome declares for that slot. Biomes that declare fewer ores than
//! there are slots simply have no ore in the remaining slots.

use tracing::debug;

use crate::biome::BiomeMap;
use crate::grid::Grid;
use crate::noise_field::NoiseField;

/// One presence mask per global ore slot, in slot order.
#[derive(Debug)]
pub struct OreMasks {
    slots: Vec<Grid<bool>>,
}

impl OreMasks {
    /// Build masks for `slot_count` ore slots over rows `0..rows`.
    pub fn build(field: &NoiseField, biomes: &BiomeMap, slot_count: usize, rows: u32) -> Self {
        let size = biomes.size();
        let slots = (0..slot_count)
            .map(|slot| {
                let mask = Grid::from_fn(size, rows, |x, y| {
                    biomes.biome_at(x, y).ore(slot).is_some_and(|ore| {
                        field.sample(x as f64, y as f64, ore.rarity) > ore.size
                    })
                });
                debug!(
                    slot,
                    present = mask.iter().filter(|p| **p).count(),
                    "ore mask built"
                );
                mask
            })
            .collect();

        Self { slots }
    }

    /// Returns `true` if ore `slot` is present at `(x, y)`. Unknown slots are absent.
    pub fn is_present(&self, slot: usize, x: i32, y: i32) -> bool {
        self.slots.get(slot).is_some_and(|mask| *mask.get(x, y))
    }

    /// Number of ore slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
