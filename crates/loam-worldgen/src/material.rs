//! Tile materials and the sprite-variant lookup used to pick a visual for each tile.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification assigned to a placed tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaterialKind {
    /// Deep ground below the dirt layer.
    Stone,
    /// Layer between stone and the surface.
    Dirt,
    /// Topmost ground tile of a column.
    Grass,
    /// Ore in the given global ore slot. Higher slots override lower ones.
    Ore(u8),
    /// Tree trunk.
    Log,
    /// Tree canopy.
    Leaf,
    /// Single-tile surface decoration.
    TallGrass,
}

impl MaterialKind {
    /// Materials every run can emit regardless of ore configuration.
    pub const BASE: [MaterialKind; 6] = [
        MaterialKind::Stone,
        MaterialKind::Dirt,
        MaterialKind::Grass,
        MaterialKind::Log,
        MaterialKind::Leaf,
        MaterialKind::TallGrass,
    ];

    /// Returns `true` for trunk, canopy and tall grass tiles.
    pub fn is_decoration(self) -> bool {
        matches!(
            self,
            MaterialKind::Log | MaterialKind::Leaf | MaterialKind::TallGrass
        )
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialKind::Stone => f.write_str("stone"),
            MaterialKind::Dirt => f.write_str("dirt"),
            MaterialKind::Grass => f.write_str("grass"),
            MaterialKind::Ore(slot) => write!(f, "ore[{slot}]"),
            MaterialKind::Log => f.write_str("log"),
            MaterialKind::Leaf => f.write_str("leaf"),
            MaterialKind::TallGrass => f.write_str("tall_grass"),
        }
    }
}

/// Asset-resolution collaborator: how many interchangeable sprites a material has.
///
/// The generator only needs the count; it picks an index in `0..count` and
/// leaves resolving that index to an actual asset to the renderer.
pub trait SpriteCatalog {
    /// Number of sprite variants for `kind`. Zero means the material cannot be drawn.
    fn variant_count(&self, kind: MaterialKind) -> usize;
}

/// Sprite variant counts with a shared default and per-material overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantTable {
    /// Variant count for materials without an override.
    pub default_variants: usize,
    /// Per-material variant counts.
    pub overrides: BTreeMap<MaterialKind, usize>,
}

impl VariantTable {
    /// A table where every material has `count` variants.
    pub fn uniform(count: usize) -> Self {
        Self {
            default_variants: count,
            overrides: BTreeMap::new(),
        }
    }

    /// Override the variant count for one material.
    pub fn with(mut self, kind: MaterialKind, count: usize) -> Self {
        self.overrides.insert(kind, count);
        self
    }
}

impl Default for VariantTable {
    fn default() -> Self {
        Self::uniform(1)
    }
}

impl SpriteCatalog for VariantTable {
    fn variant_count(&self, kind: MaterialKind) -> usize {
        self.overrides
            .get(&kind)
            .copied()
            .unwrap_or(self.default_variants)
    }
}
