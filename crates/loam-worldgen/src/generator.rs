//! The world generation pipeline.
//!
//! One run, single-threaded and synchronous:
//! biome map, then column heights, then cave and ore masks tall enough for
//! the highest column, then terrain assembly with decoration. All preconditions are checked before the first
//! pass so that a bad configuration never yields a partial world.

use rand::Rng;
use tracing::{debug, info, info_span};

use crate::assembler::TerrainAssembler;
use crate::biome::BiomeMap;
use crate::cave::CaveMask;
use crate::config::WorldGenConfig;
use crate::error::WorldGenError;
use crate::height::HeightProfile;
use crate::material::SpriteCatalog;
use crate::noise_field::NoiseField;
use crate::ore::OreMasks;
use crate::placement::{TilePlacement, TileSink, TileWriter};
use crate::tile_registry::TileRegistry;

/// Summary of a finished run.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationReport {
    /// World seed the run used.
    pub seed: f64,
    /// Number of chunks announced to the sink.
    pub chunks: usize,
    /// Tiles emitted to the sink.
    pub tiles_placed: usize,
    /// Placements skipped because the cell was already filled.
    pub duplicates_skipped: usize,
    /// Decoration tiles dropped outside the world's columns.
    pub clipped: usize,
    /// Trees grown.
    pub trees: usize,
    /// Tall-grass tiles placed.
    pub tall_grass: usize,
}

/// Generates worlds from a validated configuration and seed.
#[derive(Clone, Debug)]
pub struct WorldGenerator {
    config: WorldGenConfig,
    seed: f64,
}

impl WorldGenerator {
    /// Create a generator, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first configuration precondition that does not hold.
    pub fn new(config: WorldGenConfig, seed: f64) -> Result<Self, WorldGenError> {
        config.validate()?;
        Ok(Self { config, seed })
    }

    /// Generate the world, streaming tiles to `sink`.
    ///
    /// `rng` drives sprite-variant choice and decoration rolls; a seeded RNG
    /// makes the full output replayable.
    ///
    /// # Errors
    ///
    /// Fails before emitting anything if `catalog` cannot draw a material the
    /// run may produce.
    pub fn generate<R: Rng, S: TileSink>(
        &self,
        catalog: &dyn SpriteCatalog,
        rng: &mut R,
        sink: &mut S,
    ) -> Result<GenerationReport, WorldGenError> {
        let config = &self.config;
        let span = info_span!("generate_world", seed = self.seed, world_size = config.world_size);
        let _enter = span.enter();

        config.validate_catalog(catalog)?;
        let mut tiles = TileRegistry::new(config.world_size, config.chunk_size)?;
        let registry = config.build_registry()?;

        let field = NoiseField::new(self.seed);
        let biomes = BiomeMap::build(
            &field,
            registry,
            &config.palette,
            config.biome_frequency,
            config.world_size,
        );
        for (id, biome) in biomes.registry().iter() {
            let columns = (0..config.world_size as i32)
                .filter(|&x| biomes.biome_id_at(x, 0) == id)
                .count();
            debug!(biome = %biome.name, columns, "biome coverage");
        }

        let heights =
            HeightProfile::build(&field, &biomes, config.world_size, config.height_addition);
        let rows = heights.rows(config.world_size);
        let caves = config
            .generate_caves
            .then(|| CaveMask::build(&field, &biomes, rows));
        let ores = OreMasks::build(&field, &biomes, config.ore_slots.len(), rows);

        for chunk in tiles.chunks() {
            sink.chunk_created(chunk);
        }
        let chunks = tiles.chunks().len();
        debug!(chunks, "chunks created");

        let assembler = TerrainAssembler::new(&biomes, &heights, caves.as_ref(), &ores);
        let mut writer = TileWriter::new(&mut tiles, catalog, rng, sink);
        let counts = assembler.assemble(&mut writer)?;

        let report = GenerationReport {
            seed: self.seed,
            chunks,
            tiles_placed: writer.placed(),
            duplicates_skipped: writer.duplicates(),
            clipped: writer.clipped(),
            trees: counts.trees,
            tall_grass: counts.tall_grass,
        };
        info!(
            tiles = report.tiles_placed,
            duplicates = report.duplicates_skipped,
            trees = report.trees,
            tall_grass = report.tall_grass,
            "world generated"
        );
        Ok(report)
    }

    /// Generate the world and collect every placement in emission order.
    pub fn generate_tiles<R: Rng>(
        &self,
        catalog: &dyn SpriteCatalog,
        rng: &mut R,
    ) -> Result<(Vec<TilePlacement>, GenerationReport), WorldGenError> {
        let mut tiles = Vec::new();
        let report = self.generate(catalog, rng, &mut |t: TilePlacement| tiles.push(t))?;
        Ok((tiles, report))
    }
}


#[cfg(test)]
#[path = "world_properties_tests.rs"]
mod property_tests;
