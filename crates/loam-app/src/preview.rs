//! ASCII rendering of a generated world, top row first.

use std::collections::HashMap;

use loam_worldgen::{MaterialKind, TileCoord};

/// Character drawn for a material.
pub fn glyph(material: MaterialKind) -> char {
    match material {
        MaterialKind::Stone => '#',
        MaterialKind::Dirt => '%',
        MaterialKind::Grass => '"',
        MaterialKind::Ore(slot) => char::from_digit(u32::from(slot), 10).unwrap_or('*'),
        MaterialKind::Log => '|',
        MaterialKind::Leaf => '^',
        MaterialKind::TallGrass => ',',
    }
}

/// Render columns `0..width` from the highest placed row down to row 0.
pub fn render(tiles: &HashMap<TileCoord, MaterialKind>, width: u32) -> String {
    let top = tiles.keys().map(|c| c.y).max().unwrap_or(-1);
    let mut out = String::new();
    for y in (0..=top).rev() {
        let row: String = (0..width as i32)
            .map(|x| {
                tiles
                    .get(&TileCoord::new(x, y))
                    .map_or(' ', |material| glyph(*material))
            })
            .collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}
