//! Tile sink that tallies a generated world for the end-of-run summary.

use std::collections::{BTreeMap, HashMap};

use loam_worldgen::{Chunk, MaterialKind, TileCoord, TilePlacement, TileSink};

/// Tile count of one chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkTally {
    pub chunk: Chunk,
    pub tiles: usize,
}

/// Per-chunk and per-material counts, plus the tile grid when a preview is wanted.
#[derive(Debug, Default)]
pub struct WorldSummary {
    chunks: Vec<ChunkTally>,
    materials: BTreeMap<MaterialKind, usize>,
    tiles: Option<HashMap<TileCoord, MaterialKind>>,
}

impl WorldSummary {
    /// Create a summary. With `keep_tiles`, every placement is kept for [`WorldSummary::tiles`].
    pub fn new(keep_tiles: bool) -> Self {
        Self {
            tiles: keep_tiles.then(HashMap::new),
            ..Default::default()
        }
    }

    pub fn chunks(&self) -> &[ChunkTally] {
        &self.chunks
    }

    pub fn materials(&self) -> &BTreeMap<MaterialKind, usize> {
        &self.materials
    }

    /// Placed tiles, if they were kept.
    pub fn tiles(&self) -> Option<&HashMap<TileCoord, MaterialKind>> {
        self.tiles.as_ref()
    }

    /// Render the chunk and material tables. `label` names each material.
    pub fn report(&self, label: impl Fn(MaterialKind) -> String) -> String {
        let mut out = String::from("chunks:\n");
        for tally in &self.chunks {
            out.push_str(&format!(
                "  #{:<3} x {:>5}..{:<5} {:>7} tiles\n",
                tally.chunk.index, tally.chunk.x_start, tally.chunk.x_end, tally.tiles
            ));
        }
        out.push_str("materials:\n");
        for (material, count) in &self.materials {
            out.push_str(&format!("  {:<12} {:>7}\n", label(*material), count));
        }
        out
    }
}

impl TileSink for WorldSummary {
    fn place(&mut self, tile: TilePlacement) {
        if let Some(tally) = self.chunks.get_mut(tile.chunk) {
            tally.tiles += 1;
        }
        *self.materials.entry(tile.material).or_default() += 1;
        if let Some(tiles) = &mut self.tiles {
            tiles.insert(tile.coord, tile.material);
        }
    }

    fn chunk_created(&mut self, chunk: &Chunk) {
        self.chunks.push(ChunkTally {
            chunk: *chunk,
            tiles: 0,
        });
    }
}
