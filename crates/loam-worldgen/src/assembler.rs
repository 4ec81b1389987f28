//! Terrain assembly: classify every ground cell of every column and place it.
//!
//! Columns are processed left to right, rows bottom-up. Each row re-resolves
//! its biome, so dirt depth and ore parameters follow the biome map vertically.
//! Decorations use the column's bottom-row biome instead.

use rand::Rng;
use tracing::trace;

use crate::biome::BiomeMap;
use crate::cave::CaveMask;
use crate::decoration::{Decoration, DecorationPlacer};
use crate::error::WorldGenError;
use crate::height::HeightProfile;
use crate::material::MaterialKind;
use crate::ore::OreMasks;
use crate::placement::{TileSink, TileWriter};

/// Decorations placed during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecorationCounts {
    /// Trees grown.
    pub trees: usize,
    /// Tall-grass tiles placed.
    pub tall_grass: usize,
}

/// Classifies ground cells and routes them to a [`TileWriter`].
pub struct TerrainAssembler<'a> {
    biomes: &'a BiomeMap,
    heights: &'a HeightProfile,
    caves: Option<&'a CaveMask>,
    ores: &'a OreMasks,
    decorations: DecorationPlacer,
}

impl<'a> TerrainAssembler<'a> {
    /// Create an assembler. Pass `caves: None` to disable cave carving.
    pub fn new(
        biomes: &'a BiomeMap,
        heights: &'a HeightProfile,
        caves: Option<&'a CaveMask>,
        ores: &'a OreMasks,
    ) -> Self {
        Self {
            biomes,
            heights,
            caves,
            ores,
            decorations: DecorationPlacer::new(),
        }
    }

    /// Material of the ground cell `(x, y)` in a column of the given height.
    ///
    /// Below the dirt layer the cell is stone unless an ore applies; ore slots
    /// are checked in ascending order and the last eligible one wins.
    pub fn classify(&self, x: i32, y: i32, height: f64) -> MaterialKind {
        let biome = self.biomes.biome_at(x, y);
        let row = f64::from(y);

        if row < height - biome.dirt_layer_height {
            let mut material = MaterialKind::Stone;
            for slot in 0..self.ores.slot_count() {
                if let Some(ore) = biome.ore(slot)
                    && self.ores.is_present(slot, x, y)
                    && height - row > ore.max_spawn_height
                {
                    material = MaterialKind::Ore(slot as u8);
                }
            }
            material
        } else if row < height - 1.0 {
            MaterialKind::Dirt
        } else {
            MaterialKind::Grass
        }
    }

    /// Assemble one column, including its surface decoration.
    pub fn assemble_column<R: Rng, S: TileSink>(
        &self,
        x: i32,
        writer: &mut TileWriter<'_, R, S>,
    ) -> Result<Option<Decoration>, WorldGenError> {
        let height = self.heights.at(x);
        let column_biome = self.biomes.biome_at(x, 0);
        let mut decoration = None;

        let mut y = 0;
        while f64::from(y) < height {
            let material = self.classify(x, y, height);
            if self.caves.is_none_or(|caves| caves.is_solid(x, y)) {
                writer.place(x, y, material)?;
            }
            if f64::from(y) >= height - 1.0 {
                decoration = self.decorations.decorate(x, y, column_biome, writer)?;
            }
            y += 1;
        }

        trace!(x, height, ?decoration, "column assembled");
        Ok(decoration)
    }

    /// Assemble every column of the world in order.
    pub fn assemble<R: Rng, S: TileSink>(
        &self,
        writer: &mut TileWriter<'_, R, S>,
    ) -> Result<DecorationCounts, WorldGenError> {
        let mut counts = DecorationCounts::default();
        for x in 0..self.heights.len() as i32 {
            match self.assemble_column(x, writer)? {
                Some(Decoration::Tree { .. }) => counts.trees += 1,
                Some(Decoration::TallGrass) => counts.tall_grass += 1,
                None => {}
            }
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::{
        BiomeDef, BiomeKey, BiomePalette, BiomeRegistry, OreDef, PaletteStop, test_biome,
    };
    use crate::material::VariantTable;
    use crate::noise_field::NoiseField;
    use crate::placement::TilePlacement;
    use crate::tile_registry::{TileCoord, TileRegistry};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const SIZE: u32 = 16;
    const FIELD_SEED: f64 = 100.0;
    const SPLIT_FREQUENCY: f64 = 0.13;

    struct Fixture {
        biomes: BiomeMap,
        heights: HeightProfile,
        caves: CaveMask,
        ores: OreMasks,
    }

    fn fixture(biome: BiomeDef, height_addition: f64) -> Fixture {
        let palette = BiomePalette {
            stops: Vec::new(),
            fallback: biome.key,
        };
        fixture_with(vec![biome], &palette, 0.01, height_addition)
    }

    fn fixture_with(
        defs: Vec<BiomeDef>,
        palette: &BiomePalette,
        biome_frequency: f64,
        height_addition: f64,
    ) -> Fixture {
        let field = NoiseField::new(FIELD_SEED);
        let slots = defs.iter().map(|def| def.ores.len()).max().unwrap_or(0);
        let mut reg = BiomeRegistry::new();
        for def in defs {
            reg.register(def).unwrap();
        }
        let biomes = BiomeMap::build(&field, reg, palette, biome_frequency, SIZE);
        let heights = HeightProfile::build(&field, &biomes, SIZE, height_addition);
        let rows = heights.rows(SIZE);
        let caves = CaveMask::build(&field, &biomes, rows);
        let ores = OreMasks::build(&field, &biomes, slots, rows);
        Fixture {
            biomes,
            heights,
            caves,
            ores,
        }
    }

    /// Two bands split at the median biome noise of the map, so each key
    /// covers about half of it.
    fn median_split(low: BiomeKey, high: BiomeKey) -> BiomePalette {
        let field = NoiseField::new(FIELD_SEED);
        let mut values: Vec<f64> = (0..SIZE)
            .flat_map(|y| (0..SIZE).map(move |x| (x, y)))
            .map(|(x, y)| field.sample(f64::from(x), f64::from(y), SPLIT_FREQUENCY))
            .collect();
        values.sort_by(f64::total_cmp);
        BiomePalette {
            stops: vec![PaletteStop {
                until: values[values.len() / 2],
                key: low,
            }],
            fallback: high,
        }
    }

    fn flat_biome_keyed(name: &str, key: u16) -> BiomeDef {
        let mut biome = flat_biome();
        biome.name = name.into();
        biome.key = BiomeKey(key);
        biome
    }

    fn flat_biome() -> BiomeDef {
        let mut biome = test_biome("flat", 0);
        biome.terrain_frequency = 0.0;
        biome.height_multiplier = 0.0;
        biome.dirt_layer_height = 3.0;
        biome.tree_chance = 0;
        biome.tall_grass_chance = 0;
        biome
    }

    fn always_ore(max_spawn_height: f64) -> OreDef {
        OreDef {
            rarity: 0.1,
            size: -1.0,
            max_spawn_height,
        }
    }

    fn decorations(f: &Fixture) -> Vec<Option<Decoration>> {
        let mut registry = TileRegistry::new(SIZE, SIZE).unwrap();
        let catalog = VariantTable::uniform(2);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut sink = |_t: TilePlacement| {};
        let mut writer = TileWriter::new(&mut registry, &catalog, &mut rng, &mut sink);
        let assembler = TerrainAssembler::new(&f.biomes, &f.heights, None, &f.ores);
        (0..SIZE as i32)
            .map(|x| assembler.assemble_column(x, &mut writer).unwrap())
            .collect()
    }

    fn run(f: &Fixture, caves: bool) -> Vec<TilePlacement> {
        let mut registry = TileRegistry::new(SIZE, SIZE).unwrap();
        let catalog = VariantTable::uniform(2);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut tiles = Vec::new();
        let mut sink = |t: TilePlacement| tiles.push(t);
        let mut writer = TileWriter::new(&mut registry, &catalog, &mut rng, &mut sink);
        let assembler =
            TerrainAssembler::new(&f.biomes, &f.heights, caves.then_some(&f.caves), &f.ores);
        assembler.assemble(&mut writer).unwrap();
        drop(writer);
        tiles
    }

    #[test]
    fn test_layers_of_flat_column() {
        let f = fixture(flat_biome(), 8.0);
        let assembler = TerrainAssembler::new(&f.biomes, &f.heights, None, &f.ores);
        let layers: Vec<_> = (0..8).map(|y| assembler.classify(2, y, 8.0)).collect();
        assert_eq!(&layers[..5], &[MaterialKind::Stone; 5]);
        assert_eq!(&layers[5..7], &[MaterialKind::Dirt; 2]);
        assert_eq!(layers[7], MaterialKind::Grass);
    }

    #[test]
    fn test_fractional_height_has_single_top_row() {
        let f = fixture(flat_biome(), 5.5);
        let tiles = run(&f, false);
        let column: Vec<_> = tiles.iter().filter(|t| t.coord.x == 0).collect();
        assert_eq!(column.len(), 6);
        let grass: Vec<_> = column
            .iter()
            .filter(|t| t.material == MaterialKind::Grass)
            .collect();
        assert_eq!(grass.len(), 1);
        assert_eq!(grass[0].coord.y, 5);
    }

    #[test]
    fn test_later_ore_slot_wins() {
        let mut biome = flat_biome();
        biome.ores = vec![always_ore(0.0), always_ore(0.0), always_ore(0.0), always_ore(0.0)];
        let f = fixture(biome, 10.0);
        let assembler = TerrainAssembler::new(&f.biomes, &f.heights, None, &f.ores);
        assert_eq!(assembler.classify(4, 0, 10.0), MaterialKind::Ore(3));
    }

    #[test]
    fn test_shallow_ore_is_ignored() {
        let mut biome = flat_biome();
        biome.ores = vec![always_ore(0.0), always_ore(8.0)];
        let f = fixture(biome, 10.0);
        let assembler = TerrainAssembler::new(&f.biomes, &f.heights, None, &f.ores);
        // depth 10 - 1 = 9 > 8: deep slot applies.
        assert_eq!(assembler.classify(1, 1, 10.0), MaterialKind::Ore(1));
        // depth 10 - 2 = 8 is not > 8: falls back to slot 0.
        assert_eq!(assembler.classify(1, 2, 10.0), MaterialKind::Ore(0));
    }

    #[test]
    fn test_ore_never_replaces_dirt_or_grass() {
        let mut biome = flat_biome();
        biome.ores = vec![always_ore(0.0)];
        let f = fixture(biome, 10.0);
        let assembler = TerrainAssembler::new(&f.biomes, &f.heights, None, &f.ores);
        assert_eq!(assembler.classify(0, 7, 10.0), MaterialKind::Dirt);
        assert_eq!(assembler.classify(0, 9, 10.0), MaterialKind::Grass);
    }

    #[test]
    fn test_open_cave_cells_are_skipped() {
        let mut biome = flat_biome();
        biome.surface_threshold = 1.0;
        let f = fixture(biome, 6.0);
        assert!(run(&f, true).is_empty());
        assert_eq!(run(&f, false).len(), (SIZE * 6) as usize);
    }

    #[test]
    fn test_cave_gate_matches_mask() {
        let mut biome = flat_biome();
        biome.surface_threshold = 0.5;
        let f = fixture(biome, 12.0);
        let tiles = run(&f, true);
        for x in 0..SIZE as i32 {
            for y in 0..12 {
                let placed = tiles.iter().any(|t| t.coord == TileCoord::new(x, y));
                assert_eq!(placed, f.caves.is_solid(x, y), "Mismatch at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_dirt_depth_follows_row_biome() {
        let mut thin = flat_biome_keyed("thin", 1);
        thin.dirt_layer_height = 1.0;
        let mut thick = flat_biome_keyed("thick", 2);
        thick.dirt_layer_height = 39.0;
        let palette = median_split(BiomeKey(1), BiomeKey(2));
        let f = fixture_with(vec![thin, thick], &palette, SPLIT_FREQUENCY, 40.0);
        let assembler = TerrainAssembler::new(&f.biomes, &f.heights, None, &f.ores);

        let layer = |dirt: f64, y: i32| {
            if f64::from(y) < 40.0 - dirt {
                MaterialKind::Stone
            } else if y < 39 {
                MaterialKind::Dirt
            } else {
                MaterialKind::Grass
            }
        };
        let mut differs_from_column_biome = 0;
        for x in 0..SIZE as i32 {
            let column_dirt = f.biomes.biome_at(x, 0).dirt_layer_height;
            for y in 0..40 {
                let expected = layer(f.biomes.biome_at(x, y).dirt_layer_height, y);
                assert_eq!(assembler.classify(x, y, 40.0), expected, "Mismatch at ({x}, {y})");
                if expected != layer(column_dirt, y) {
                    differs_from_column_biome += 1;
                }
            }
        }
        assert!(differs_from_column_biome > 0);
    }

    #[test]
    fn test_decoration_follows_bottom_row_biome() {
        let bare = flat_biome_keyed("bare", 1);
        let mut wooded = flat_biome_keyed("wooded", 2);
        wooded.tree_chance = 2;
        let palette = median_split(BiomeKey(1), BiomeKey(2));
        let f = fixture_with(vec![bare, wooded], &palette, SPLIT_FREQUENCY, 20.0);

        let mut trees = 0;
        let mut top_differs = 0;
        for (x, decoration) in (0..SIZE as i32).zip(decorations(&f)) {
            let column = &f.biomes.biome_at(x, 0).name;
            if column != &f.biomes.biome_at(x, 19).name {
                top_differs += 1;
            }
            if column == "bare" {
                assert_eq!(decoration, None, "Bare column {x} decorated");
            } else if matches!(decoration, Some(Decoration::Tree { .. })) {
                trees += 1;
            }
        }
        assert!(trees > 0);
        assert!(top_differs > 0);
    }
}
