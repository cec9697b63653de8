//! Relationship table construction
//!
//! Enumerates unordered character pairs and counts the sub-entities each
//! pair shares.

use crate::error::{RelationsError, Result};
use crate::intersector::MultiSetIntersector;
use crate::resolver::parse_entity_type;
use crate::table::RelationshipTable;
use herograph_catalog::CharacterCatalog;
use herograph_domain::{EntityType, RelationshipRow};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info};

/// Builds relationship tables from a catalog
///
/// Every call recomputes from the catalog; nothing is cached between builds.
#[derive(Debug, Clone, Copy)]
pub struct RelationshipTableBuilder<'c> {
    intersector: MultiSetIntersector<'c>,
}

impl<'c> RelationshipTableBuilder<'c> {
    /// Create a builder over the given catalog
    pub fn new(catalog: &'c CharacterCatalog) -> Self {
        Self {
            intersector: MultiSetIntersector::new(catalog),
        }
    }

    /// Build the relationship table for `names` and `entity_type`
    ///
    /// Rows follow input-position order: `[a, b, c]` yields `(a, b)`,
    /// `(a, c)`, `(b, c)`. Fewer than two names yield an empty table.
    ///
    /// # Errors
    /// - `Catalog(UnknownCharacters)` if any name is absent from the catalog
    /// - `DuplicateNames` if a name appears more than once
    ///
    /// Both checks run before any pair is computed.
    pub fn build<S: AsRef<str>>(&self, names: &[S], entity_type: EntityType) -> Result<RelationshipTable> {
        let names: Vec<&str> = names.iter().map(|name| name.as_ref()).collect();
        self.validate(&names)?;

        if names.len() < 2 {
            debug!("Fewer than two names, {} table is empty", entity_type);
            return Ok(RelationshipTable::empty(entity_type));
        }

        info!(
            "Building {} relationship table for {} characters ({} pairs)",
            entity_type,
            names.len(),
            pair_count(names.len())
        );

        let mut rows = Vec::with_capacity(pair_count(names.len()));
        for (first, second) in pairs(&names) {
            let common_count = self.intersector.common_count([*first, *second], entity_type)?;
            debug!("{} / {}: {} common {}", first, second, common_count, entity_type);
            rows.push(RelationshipRow::new(*first, *second, entity_type, common_count));
        }

        Ok(RelationshipTable::new(entity_type, rows))
    }

    /// Same as [`build`](Self::build), for an entity type given by name
    ///
    /// # Errors
    /// Returns `InvalidInput` if the name is not one of the four entity types,
    /// before the character names are looked at.
    pub fn build_named<S: AsRef<str>>(&self, names: &[S], entity_type: &str) -> Result<RelationshipTable> {
        let entity_type = parse_entity_type(entity_type)?;
        self.build(names, entity_type)
    }

    /// Build one table per entity type, in [`EntityType::ALL`] order
    pub fn build_all<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<RelationshipTable>> {
        EntityType::ALL
            .iter()
            .map(|&entity_type| self.build(names, entity_type))
            .collect()
    }

    fn validate(&self, names: &[&str]) -> Result<()> {
        self.intersector
            .catalog()
            .validate_all(names.iter().copied())?;

        let mut seen = HashSet::with_capacity(names.len());
        let duplicates: BTreeSet<&str> = names
            .iter()
            .copied()
            .filter(|name| !seen.insert(*name))
            .collect();
        if !duplicates.is_empty() {
            return Err(RelationsError::DuplicateNames(
                duplicates.into_iter().map(str::to_string).collect(),
            ));
        }

        Ok(())
    }
}

/// Number of unordered pairs among `n` items
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Unordered 2-combinations of `items` in input-position order
pub fn pairs<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> {
    items
        .iter()
        .enumerate()
        .flat_map(move |(i, first)| items[i + 1..].iter().map(move |second| (first, second)))
}
