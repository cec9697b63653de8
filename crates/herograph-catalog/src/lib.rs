//! Herograph Catalog Layer
//!
//! In-memory index over loaded character records, plus the JSON loader that
//! seeds it.
//!
//! # Architecture
//!
//! - Records are validated into domain types at load time
//! - The catalog is built once and borrowed by every consumer
//! - Name lookup is exact and case-sensitive, through a keyed index
//!
//! # Examples
//!
//! ```
//! use herograph_catalog::CharacterCatalog;
//! use herograph_domain::Character;
//!
//! let catalog = CharacterCatalog::new(vec![
//!     Character::new("Beast").unwrap(),
//!     Character::new("Storm").unwrap(),
//! ]).unwrap();
//!
//! assert_eq!(catalog.names(), vec!["Beast", "Storm"]);
//! assert!(catalog.get("storm").is_err());
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod records;

pub use error::{CatalogError, Result};
pub use loader::{load_records, parse_records, read_records, save_records, JsonFileSource};
pub use records::{CharacterRecordDto, EntityGroupDto, EntityRefDto};

use herograph_domain::traits::CharacterSource;
use herograph_domain::Character;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::info;

/// Immutable, name-indexed collection of characters
///
/// Construction rejects duplicate names, so every name resolves to exactly
/// one record.
#[derive(Debug, Clone, Default)]
pub struct CharacterCatalog {
    records: Vec<Character>,
    index: HashMap<String, usize>,
}

impl CharacterCatalog {
    /// Build a catalog from records, preserving their order
    ///
    /// # Errors
    /// Returns `DuplicateCharacter` if two records share a name
    pub fn new(records: Vec<Character>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.name().to_string(), position).is_some() {
                return Err(CatalogError::DuplicateCharacter(record.name().to_string()));
            }
        }

        info!("Character catalog built with {} records", records.len());
        Ok(Self { records, index })
    }

    /// Build a catalog from any character source
    pub fn from_source<S>(source: &S) -> Result<Self>
    where
        S: CharacterSource,
        CatalogError: From<S::Error>,
    {
        Self::new(source.load()?)
    }

    /// Build a catalog from a JSON catalog file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(load_records(path)?)
    }

    /// All character names, in load order
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(Character::name).collect()
    }

    /// All records, in load order
    pub fn records(&self) -> impl Iterator<Item = &Character> {
        self.records.iter()
    }

    /// Look up a character by exact name
    ///
    /// # Errors
    /// Returns `NotFound` if no record has this name
    pub fn get(&self, name: &str) -> Result<&Character> {
        self.index
            .get(name)
            .map(|&position| &self.records[position])
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Whether a character with this exact name exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Check that every given name exists
    ///
    /// All missing names are reported together, sorted, in a single error.
    pub fn validate_all<'a, I>(&self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        // requested \ known, computed against the index
        let missing: BTreeSet<&str> = names
            .into_iter()
            .filter(|name| !self.index.contains_key(*name))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }

        Err(CatalogError::UnknownCharacters(
            missing.into_iter().map(str::to_string).collect(),
        ))
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no characters
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
