//! Tile occupancy and chunk partitioning.
//!
//! The registry is the single source of truth for whether a cell has already
//! been filled and which chunk owns a column. Registration is idempotent: a
//! second placement at the same coordinate is refused, not an error.

use hashbrown::HashSet;

use crate::error::WorldGenError;

/// Integer tile coordinate. `y` grows upward from the bottom row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl TileCoord {
    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A contiguous half-open column range `[x_start, x_end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    /// Position in the chunk array.
    pub index: usize,
    /// First column of the chunk.
    pub x_start: i32,
    /// One past the last column of the chunk.
    pub x_end: i32,
}

/// Deduplicating occupancy set plus the fixed chunk array.
#[derive(Debug)]
pub struct TileRegistry {
    occupied: HashSet<TileCoord>,
    chunk_size: u32,
    chunks: Vec<Chunk>,
}

impl TileRegistry {
    /// Create a registry and lay out the chunk array for a world `world_size` columns wide.
    ///
    /// # Errors
    ///
    /// Fails if either size is zero or `world_size` is not a multiple of `chunk_size`.
    pub fn new(world_size: u32, chunk_size: u32) -> Result<Self, WorldGenError> {
        check_chunk_layout(world_size, chunk_size)?;

        let chunks = (0..world_size / chunk_size)
            .map(|i| Chunk {
                index: i as usize,
                x_start: (i * chunk_size) as i32,
                x_end: ((i + 1) * chunk_size) as i32,
            })
            .collect();

        Ok(Self {
            occupied: HashSet::new(),
            chunk_size,
            chunks,
        })
    }

    /// Register `coord`. Returns `false` if it was already occupied.
    pub fn try_place(&mut self, coord: TileCoord) -> bool {
        self.occupied.insert(coord)
    }

    /// Returns `true` if `coord` is occupied.
    pub fn contains(&self, coord: TileCoord) -> bool {
        self.occupied.contains(&coord)
    }

    /// Chunk index owning column `x`: `floor(x / chunk_size)`.
    ///
    /// Not bounds checked; see [`TileRegistry::chunk`].
    pub fn chunk_index_of(&self, x: i32) -> i64 {
        i64::from(x).div_euclid(i64::from(self.chunk_size))
    }

    /// Chunk owning column `x`, or `None` if `x` is outside the world.
    pub fn chunk(&self, x: i32) -> Option<&Chunk> {
        usize::try_from(self.chunk_index_of(x))
            .ok()
            .and_then(|i| self.chunks.get(i))
    }

    /// All chunks, in column order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    /// Returns `true` if no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }
}

/// Ensure `world_size` splits into a whole, non-empty number of chunks.
pub(crate) fn check_chunk_layout(world_size: u32, chunk_size: u32) -> Result<(), WorldGenError> {
    if chunk_size == 0 {
        return Err(WorldGenError::ZeroChunkSize);
    }
    if world_size == 0 {
        return Err(WorldGenError::ZeroWorldSize);
    }
    if world_size % chunk_size != 0 {
        return Err(WorldGenError::WorldSizeNotChunkAligned {
            world_size,
            chunk_size,
        });
    }
    Ok(())
}
