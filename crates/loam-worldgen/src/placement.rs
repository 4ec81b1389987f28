//! Tile placement: the registry-gated path every generated tile takes to the output sink.

use rand::Rng;

use crate::error::WorldGenError;
use crate::material::{MaterialKind, SpriteCatalog};
use crate::tile_registry::{Chunk, TileCoord, TileRegistry};

/// A tile handed to the renderer. Emitted exactly once per coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TilePlacement {
    /// Where the tile sits.
    pub coord: TileCoord,
    /// What the tile is made of.
    pub material: MaterialKind,
    /// Index into the material's sprite variants.
    pub variant: usize,
    /// Index of the owning chunk.
    pub chunk: usize,
}

/// Receiver of generation output, typically a renderer or scene builder.
pub trait TileSink {
    /// Called once for every placed tile.
    fn place(&mut self, tile: TilePlacement);

    /// Called once per chunk, in column order, before any tile is placed.
    fn chunk_created(&mut self, _chunk: &Chunk) {}
}

impl<F: FnMut(TilePlacement)> TileSink for F {
    fn place(&mut self, tile: TilePlacement) {
        self(tile)
    }
}

/// Placement context shared by terrain assembly and decoration.
///
/// Owns the mutable state of a run for its duration: the occupancy registry,
/// the random source used for sprite variants and decoration rolls, and the sink.
pub struct TileWriter<'a, R, S> {
    registry: &'a mut TileRegistry,
    catalog: &'a dyn SpriteCatalog,
    rng: &'a mut R,
    sink: &'a mut S,
    placed: usize,
    duplicates: usize,
    clipped: usize,
}

impl<'a, R: Rng, S: TileSink> TileWriter<'a, R, S> {
    /// Create a writer over the given run state.
    pub fn new(
        registry: &'a mut TileRegistry,
        catalog: &'a dyn SpriteCatalog,
        rng: &'a mut R,
        sink: &'a mut S,
    ) -> Self {
        Self {
            registry,
            catalog,
            rng,
            sink,
            placed: 0,
            duplicates: 0,
            clipped: 0,
        }
    }

    /// Place `material` at `(x, y)`.
    ///
    /// Returns `Ok(false)` without touching the sink if the cell is already occupied.
    ///
    /// # Errors
    ///
    /// Fails if `x` falls outside the chunk array or the material has no sprite variants.
    pub fn place(&mut self, x: i32, y: i32, material: MaterialKind) -> Result<bool, WorldGenError> {
        let coord = TileCoord::new(x, y);
        if self.registry.contains(coord) {
            self.duplicates += 1;
            return Ok(false);
        }

        let chunk = match self.registry.chunk(x) {
            Some(chunk) => chunk.index,
            None => {
                return Err(WorldGenError::ChunkOutOfRange {
                    x,
                    chunk: self.registry.chunk_index_of(x),
                    chunks: self.registry.chunks().len(),
                });
            }
        };

        let count = self.catalog.variant_count(material);
        if count == 0 {
            return Err(WorldGenError::EmptyVariants(material));
        }
        let variant = self.rng.random_range(0..count);

        self.registry.try_place(coord);
        self.sink.place(TilePlacement {
            coord,
            material,
            variant,
            chunk,
        });
        self.placed += 1;
        Ok(true)
    }

    /// Like [`TileWriter::place`], but silently drops tiles whose column is outside the world.
    pub fn place_clipped(
        &mut self,
        x: i32,
        y: i32,
        material: MaterialKind,
    ) -> Result<bool, WorldGenError> {
        if self.registry.chunk(x).is_none() {
            self.clipped += 1;
            return Ok(false);
        }
        self.place(x, y, material)
    }

    /// Returns `true` if `(x, y)` has already been placed.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.registry.contains(TileCoord::new(x, y))
    }

    /// The random source of this run.
    pub fn rng(&mut self) -> &mut R {
        &mut *self.rng
    }

    /// Tiles emitted so far.
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Placements skipped because the cell was occupied.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Decoration tiles dropped for lying outside the world.
    pub fn clipped(&self) -> usize {
        self.clipped
    }
}
