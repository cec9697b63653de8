//! Multi-set intersection across characters
//!
//! One implementation serves both the pairwise table builder and group-wide
//! "what do these N characters all share" queries; callers pick how many
//! names to pass.

use crate::error::{RelationsError, Result};
use crate::resolver::EntityUrlResolver;
use herograph_catalog::CharacterCatalog;
use herograph_domain::EntityType;
use std::collections::BTreeSet;

/// Intersects entity URL sets of characters from one catalog
#[derive(Debug, Clone, Copy)]
pub struct MultiSetIntersector<'c> {
    catalog: &'c CharacterCatalog,
    resolver: EntityUrlResolver,
}

impl<'c> MultiSetIntersector<'c> {
    /// Create an intersector over the given catalog
    pub fn new(catalog: &'c CharacterCatalog) -> Self {
        Self {
            catalog,
            resolver: EntityUrlResolver,
        }
    }

    /// URLs of `entity_type` shared by every named character
    ///
    /// Names are treated as a set, so their order and repetition do not
    /// affect the result. With a single name the result is that character's
    /// own set.
    ///
    /// # Errors
    /// - `EmptyNameSet` if no names are given
    /// - `Catalog(UnknownCharacters)` listing every name absent from the catalog
    pub fn common_urls<'n, I>(&self, names: I, entity_type: EntityType) -> Result<BTreeSet<&'c str>>
    where
        I: IntoIterator<Item = &'n str>,
    {
        let names: BTreeSet<&str> = names.into_iter().collect();
        if names.is_empty() {
            return Err(RelationsError::EmptyNameSet);
        }
        self.catalog.validate_all(names.iter().copied())?;

        let mut sets = Vec::with_capacity(names.len());
        for name in &names {
            let character = self.catalog.get(name)?;
            sets.push(self.resolver.resolve(character, entity_type));
        }

        // Smallest first, so the running intersection shrinks fastest
        sets.sort_by_key(|set| set.len());
        let mut sets = sets.into_iter();
        let mut common = sets.next().unwrap_or_default();
        for set in sets {
            if common.is_empty() {
                break;
            }
            common.retain(|url| set.contains(url));
        }

        Ok(common)
    }

    /// Number of URLs of `entity_type` shared by every named character
    pub fn common_count<'n, I>(&self, names: I, entity_type: EntityType) -> Result<usize>
    where
        I: IntoIterator<Item = &'n str>,
    {
        Ok(self.common_urls(names, entity_type)?.len())
    }

    /// The catalog this intersector reads from
    pub fn catalog(&self) -> &'c CharacterCatalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herograph_catalog::CatalogError;
    use herograph_domain::{Character, EntityGroup};

    fn catalog() -> CharacterCatalog {
        let character = |name: &str, comics: &[&str], events: &[&str]| {
            Character::new(name)
                .unwrap()
                .with_group(EntityType::Comics, EntityGroup::from_uris(comics.iter().copied()))
                .with_group(EntityType::Events, EntityGroup::from_uris(events.iter().copied()))
        };

        CharacterCatalog::new(vec![
            character("X", &["c1", "c2", "c3"], &["e1"]),
            character("Y", &["c2", "c3", "c4"], &["e1", "e2"]),
            character("Z", &["c3", "c5"], &[]),
        ])
        .unwrap()
    }

    #[test]
    fn test_pairwise_intersection() {
        let catalog = catalog();
        let intersector = MultiSetIntersector::new(&catalog);

        let common = intersector.common_urls(["X", "Y"], EntityType::Comics).unwrap();
        assert_eq!(common.into_iter().collect::<Vec<_>>(), vec!["c2", "c3"]);
    }

    #[test]
    fn test_group_intersection() {
        let catalog = catalog();
        let intersector = MultiSetIntersector::new(&catalog);

        let common = intersector
            .common_urls(["Z", "X", "Y"], EntityType::Comics)
            .unwrap();
        assert_eq!(common.into_iter().collect::<Vec<_>>(), vec!["c3"]);
    }

    #[test]
    fn test_single_name_returns_own_set() {
        let catalog = catalog();
        let intersector = MultiSetIntersector::new(&catalog);

        let own = intersector.common_urls(["Y"], EntityType::Events).unwrap();
        let resolved = EntityUrlResolver.resolve(catalog.get("Y").unwrap(), EntityType::Events);
        assert_eq!(own, resolved);
    }

    #[test]
    fn test_repeated_name_is_idempotent() {
        let catalog = catalog();
        let intersector = MultiSetIntersector::new(&catalog);

        let count = intersector.common_count(["X", "X"], EntityType::Comics).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_empty_group_intersects_to_empty() {
        let catalog = catalog();
        let intersector = MultiSetIntersector::new(&catalog);

        assert_eq!(intersector.common_count(["X", "Z"], EntityType::Events).unwrap(), 0);
    }

    #[test]
    fn test_empty_name_set_rejected() {
        let catalog = catalog();
        let intersector = MultiSetIntersector::new(&catalog);

        let result = intersector.common_urls(std::iter::empty(), EntityType::Comics);
        assert!(matches!(result, Err(RelationsError::EmptyNameSet)));
    }

    #[test]
    fn test_unknown_names_reported_together() {
        let catalog = catalog();
        let intersector = MultiSetIntersector::new(&catalog);

        let err = intersector
            .common_urls(["X", "Nobody", "Ghost"], EntityType::Comics)
            .unwrap_err();
        assert!(err.is_invalid_input());
        match err {
            RelationsError::Catalog(CatalogError::UnknownCharacters(missing)) => {
                assert_eq!(missing, vec!["Ghost".to_string(), "Nobody".to_string()]);
            }
            other => panic!("Expected UnknownCharacters, got {:?}", other),
        }
    }
}
