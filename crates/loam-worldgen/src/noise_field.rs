//! Seeded 2D gradient noise sampler shared by every generation pass.
//!
//! All fields (biome, cave, ore, terrain height) sample the same Perlin
//! lattice; they differ only in frequency. The world seed offsets the input
//! coordinates before they are scaled, so a seed selects a different region
//! of one infinite noise plane.

use noise::{NoiseFn, Perlin};

/// Permutation seed of the underlying Perlin lattice. World variation comes
/// from the coordinate offset, not from this value.
const LATTICE_SEED: u32 = 0;

/// Largest value [`NoiseField::sample`] can return.
const UNIT_MAX: f64 = 1.0 - f64::EPSILON;

/// Deterministic 2D noise in `[0, 1)`, offset by a world seed.
#[derive(Clone, Debug)]
pub struct NoiseField {
    perlin: Perlin,
    seed: f64,
}

impl NoiseField {
    /// Create a field for the given world seed.
    pub fn new(seed: f64) -> Self {
        Self {
            perlin: Perlin::new(LATTICE_SEED),
            seed,
        }
    }

    /// Sample the field at `((x + seed) * frequency, (y + seed) * frequency)`.
    ///
    /// A `frequency` of zero collapses every input onto the lattice origin,
    /// yielding a constant field.
    pub fn sample(&self, x: f64, y: f64, frequency: f64) -> f64 {
        let raw = self.perlin.get([
            (x + self.seed) * frequency,
            (y + self.seed) * frequency,
        ]);

        // Normalize from [-1, 1] to [0, 1).
        ((raw + 1.0) * 0.5).clamp(0.0, UNIT_MAX)
    }
}
