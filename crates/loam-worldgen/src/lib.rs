//! Deterministic 2D tile-world generation: noise-driven biomes, caves, ores,
//! column heights, layered terrain, and surface decoration.

mod assembler;
mod cave;
mod config;
mod decoration;
mod error;
mod generator;
mod grid;
mod height;
mod material;
mod noise_field;
mod ore;
mod placement;
mod tile_registry;

pub mod biome;
pub mod seed;

pub use assembler::{DecorationCounts, TerrainAssembler};
pub use biome::{
    BiomeDef, BiomeId, BiomeKey, BiomeMap, BiomePalette, BiomeRegistry, BiomeRegistryError,
    OreDef, PaletteStop,
};
pub use cave::CaveMask;
pub use config::{MAX_COLUMN_HEIGHT, MAX_TREE_HEIGHT, WorldGenConfig};
pub use decoration::{Decoration, DecorationPlacer};
pub use error::WorldGenError;
pub use generator::{GenerationReport, WorldGenerator};
pub use grid::Grid;
pub use height::HeightProfile;
pub use material::{MaterialKind, SpriteCatalog, VariantTable};
pub use noise_field::NoiseField;
pub use ore::OreMasks;
pub use placement::{TilePlacement, TileSink, TileWriter};
pub use tile_registry::{Chunk, TileCoord, TileRegistry};
