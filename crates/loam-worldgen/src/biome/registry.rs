//! Biome registry: maps [`BiomeId`] to [`BiomeDef`] with name and palette-key lookup.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::BiomeDef;

/// Unique identifier for a registered biome (its registration index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BiomeId(pub u16);

/// Discrete palette index a biome is classified under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BiomeKey(pub u16);

/// Errors that can occur when registering biomes.
#[derive(Debug, thiserror::Error)]
pub enum BiomeRegistryError {
    /// A biome with this name is already registered.
    #[error("duplicate biome name: {0}")]
    DuplicateName(String),
    /// Another biome already claims this palette key.
    #[error("biome {name} reuses palette key {key:?}")]
    DuplicateKey {
        /// Name of the rejected biome.
        name: String,
        /// The contested key.
        key: BiomeKey,
    },
}

/// Stores all registered biome definitions with O(1) lookup by ID and key.
#[derive(Debug)]
pub struct BiomeRegistry {
    biomes: Vec<BiomeDef>,
    name_to_id: HashMap<String, BiomeId>,
    key_to_id: HashMap<BiomeKey, BiomeId>,
}

impl BiomeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            biomes: Vec::new(),
            name_to_id: HashMap::new(),
            key_to_id: HashMap::new(),
        }
    }

    /// Registers a new biome definition, returning its assigned [`BiomeId`].
    ///
    /// # Errors
    ///
    /// Returns [`BiomeRegistryError::DuplicateName`] if a biome with the same name exists,
    /// or [`BiomeRegistryError::DuplicateKey`] if its palette key is taken.
    pub fn register(&mut self, def: BiomeDef) -> Result<BiomeId, BiomeRegistryError> {
        if self.name_to_id.contains_key(&def.name) {
            return Err(BiomeRegistryError::DuplicateName(def.name.clone()));
        }
        if self.key_to_id.contains_key(&def.key) {
            return Err(BiomeRegistryError::DuplicateKey {
                name: def.name.clone(),
                key: def.key,
            });
        }
        // Keys are unique u16s, so at most u16::MAX biomes precede this one.
        let id = BiomeId(self.biomes.len() as u16);
        self.name_to_id.insert(def.name.clone(), id);
        self.key_to_id.insert(def.key, id);
        self.biomes.push(def);
        Ok(id)
    }

    /// Returns the definition for the given biome ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn get(&self, id: BiomeId) -> &BiomeDef {
        &self.biomes[id.0 as usize]
    }

    /// Looks up the biome registered under a palette key.
    pub fn lookup_by_key(&self, key: BiomeKey) -> Option<BiomeId> {
        self.key_to_id.get(&key).copied()
    }

    /// Resolves a palette key, falling back to the first registered biome.
    pub fn resolve_key(&self, key: BiomeKey) -> BiomeId {
        self.lookup_by_key(key).unwrap_or(BiomeId(0))
    }

    /// Iterate registered biomes in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (BiomeId, &BiomeDef)> {
        self.biomes
            .iter()
            .enumerate()
            .map(|(i, def)| (BiomeId(i as u16), def))
    }

    /// Returns the number of registered biomes.
    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    /// Returns `true` if no biomes are registered.
    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }
}

impl Default for BiomeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
