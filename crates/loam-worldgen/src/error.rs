//! World generation error types.

use crate::biome::BiomeRegistryError;
use crate::material::MaterialKind;

/// Errors raised while validating a configuration or assembling a world.
///
/// Everything except [`WorldGenError::ChunkOutOfRange`] is reported before any
/// tile is emitted.
#[derive(Debug, thiserror::Error)]
pub enum WorldGenError {
    /// `chunk_size` is zero.
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,

    /// `world_size` is zero.
    #[error("world size must be greater than zero")]
    ZeroWorldSize,

    /// The world cannot be split into whole chunks.
    #[error("world size {world_size} is not a multiple of chunk size {chunk_size}")]
    WorldSizeNotChunkAligned {
        /// Configured world width.
        world_size: u32,
        /// Configured chunk width.
        chunk_size: u32,
    },

    /// The configuration lists no biomes.
    #[error("at least one biome is required")]
    NoBiomes,

    /// Biome registration failed.
    #[error(transparent)]
    Registry(#[from] BiomeRegistryError),

    /// A biome parameter is out of range.
    #[error("invalid biome {name}: {reason}")]
    InvalidBiome {
        /// Biome name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A biome's columns could rise above [`crate::MAX_COLUMN_HEIGHT`] or
    /// have no finite height.
    #[error("biome {biome} reaches height {height}, above the limit of {limit}")]
    ColumnTooTall {
        /// Biome name.
        biome: String,
        /// Highest surface the biome can produce.
        height: f64,
        /// Configured limit.
        limit: f64,
    },

    /// A biome declares more ores than there are global ore slots.
    #[error("biome {biome} declares {ores} ores but only {slots} ore slots exist")]
    OreSlotOutOfRange {
        /// Biome name.
        biome: String,
        /// Number of ores the biome declares.
        ores: usize,
        /// Number of global ore slots.
        slots: usize,
    },

    /// More ore slots than a [`MaterialKind::Ore`] index can address.
    #[error("{0} ore slots configured, at most 256 are supported")]
    TooManyOreSlots(usize),

    /// The sprite catalog has no variants for a material the run can emit.
    #[error("no sprite variants for material {0}")]
    EmptyVariants(MaterialKind),

    /// A tile resolved to a chunk outside the chunk array.
    #[error("column {x} maps to chunk {chunk}, but only {chunks} chunks exist")]
    ChunkOutOfRange {
        /// Offending column.
        x: i32,
        /// Computed chunk index.
        chunk: i64,
        /// Length of the chunk array.
        chunks: usize,
    },
}
