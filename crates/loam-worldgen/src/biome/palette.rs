//! Biome palette: discretizes a biome-noise value into a [`BiomeKey`].

use serde::{Deserialize, Serialize};

use super::BiomeKey;

/// Upper bound of a palette band and the key assigned to values below it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteStop {
    /// Exclusive upper bound of the band, in `[0.0, 1.0]`.
    pub until: f64,
    /// Key assigned to values inside the band.
    pub key: BiomeKey,
}

/// Ordered bands covering the `[0, 1)` noise range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiomePalette {
    /// Bands in ascending `until` order; first match wins.
    pub stops: Vec<PaletteStop>,
    /// Key returned when no band covers the value.
    pub fallback: BiomeKey,
}

impl BiomePalette {
    /// Looks up the key for a noise value in `[0.0, 1.0)`.
    pub fn classify(&self, value: f64) -> BiomeKey {
        self.stops
            .iter()
            .find(|stop| value < stop.until)
            .map_or(self.fallback, |stop| stop.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_band_palette() -> BiomePalette {
        BiomePalette {
            stops: vec![
                PaletteStop {
                    until: 0.3,
                    key: BiomeKey(7),
                },
                PaletteStop {
                    until: 0.6,
                    key: BiomeKey(8),
                },
                PaletteStop {
                    until: 0.9,
                    key: BiomeKey(9),
                },
            ],
            fallback: BiomeKey(99),
        }
    }

    #[test]
    fn test_band_boundaries() {
        let palette = three_band_palette();
        assert_eq!(palette.classify(0.0), BiomeKey(7));
        assert_eq!(palette.classify(0.299), BiomeKey(7));
        assert_eq!(palette.classify(0.3), BiomeKey(8));
        assert_eq!(palette.classify(0.75), BiomeKey(9));
    }

    #[test]
    fn test_uncovered_value_uses_fallback() {
        let palette = three_band_palette();
        assert_eq!(palette.classify(0.95), BiomeKey(99));
    }

    #[test]
    fn test_empty_palette_always_fallback() {
        let palette = BiomePalette {
            stops: Vec::new(),
            fallback: BiomeKey(1),
        };
        assert_eq!(palette.classify(0.5), BiomeKey(1));
    }
}
