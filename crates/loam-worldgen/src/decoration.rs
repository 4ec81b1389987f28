//! Surface decoration: trees and tall grass rolled once per column top.
//!
//! Rolls follow a "one in N" rule: a draw from `0..chance` must equal 1. The
//! tree roll comes first; tall grass is only rolled when no tree grew.

use rand::Rng;

use crate::biome::BiomeDef;
use crate::error::WorldGenError;
use crate::material::MaterialKind;
use crate::placement::{TileSink, TileWriter};

/// Height of the canopy column above the trunk.
const CANOPY_HEIGHT: i32 = 3;
/// Height of the canopy on either side of the trunk.
const SIDE_CANOPY_HEIGHT: i32 = 2;

/// What a column top received.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoration {
    /// A tree with the given trunk height.
    Tree {
        /// Trunk tiles above the ground.
        trunk_height: u32,
    },
    /// A single tall-grass tile.
    TallGrass,
}

/// Places trees and tall grass on top of placed ground tiles.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecorationPlacer;

impl DecorationPlacer {
    /// Create a placer.
    pub fn new() -> Self {
        Self
    }

    /// Roll decorations for the column whose top ground row is `top_y`.
    ///
    /// Nothing happens unless the ground tile at `(x, top_y)` was actually
    /// placed. `biome` supplies the chances and tree height range.
    pub fn decorate<R: Rng, S: TileSink>(
        &self,
        x: i32,
        top_y: i32,
        biome: &BiomeDef,
        writer: &mut TileWriter<'_, R, S>,
    ) -> Result<Option<Decoration>, WorldGenError> {
        if !writer.contains(x, top_y) {
            return Ok(None);
        }

        if one_in(writer.rng(), biome.tree_chance) {
            let trunk_height =
                tree_height(writer.rng(), biome.min_tree_height, biome.max_tree_height);
            self.place_tree(x, top_y + 1, trunk_height, writer)?;
            return Ok(Some(Decoration::Tree { trunk_height }));
        }

        if one_in(writer.rng(), biome.tall_grass_chance) {
            writer.place_clipped(x, top_y + 1, MaterialKind::TallGrass)?;
            return Ok(Some(Decoration::TallGrass));
        }

        Ok(None)
    }

    /// Place a tree whose trunk starts at `(x, base_y)`.
    ///
    /// The trunk is `trunk_height` logs tall, topped by a three-leaf column,
    /// with two-leaf columns either side of the lower two canopy rows.
    pub fn place_tree<R: Rng, S: TileSink>(
        &self,
        x: i32,
        base_y: i32,
        trunk_height: u32,
        writer: &mut TileWriter<'_, R, S>,
    ) -> Result<(), WorldGenError> {
        let trunk_height = trunk_height as i32;
        for dy in 0..trunk_height {
            writer.place_clipped(x, base_y + dy, MaterialKind::Log)?;
        }

        let canopy_y = base_y + trunk_height;
        for dy in 0..CANOPY_HEIGHT {
            writer.place_clipped(x, canopy_y + dy, MaterialKind::Leaf)?;
        }
        for side in [x - 1, x + 1] {
            for dy in 0..SIDE_CANOPY_HEIGHT {
                writer.place_clipped(side, canopy_y + dy, MaterialKind::Leaf)?;
            }
        }
        Ok(())
    }
}

/// Draw from `0..chance` and report whether it hit 1. Chances of 0 never draw.
fn one_in(rng: &mut impl Rng, chance: u32) -> bool {
    chance > 0 && rng.random_range(0..chance) == 1
}

fn tree_height(rng: &mut impl Rng, min: u32, max: u32) -> u32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}
