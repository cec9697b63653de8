//! Entity URL resolution
//!
//! Turns a character's membership group for one entity type into a set of
//! comparable identifiers.

use crate::error::{RelationsError, Result};
use herograph_domain::{Character, EntityType};
use std::collections::BTreeSet;

/// Resolves a character's sub-entity membership into URI sets
///
/// Sets borrow from the character, so resolving against a catalog allocates
/// no new strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityUrlResolver;

impl EntityUrlResolver {
    /// Set of resource URIs the character has for `entity_type`
    ///
    /// Empty when the group has no members.
    pub fn resolve<'c>(&self, character: &'c Character, entity_type: EntityType) -> BTreeSet<&'c str> {
        character.group(entity_type).unique_uris()
    }

    /// Same as [`resolve`](Self::resolve), for an entity type given by name
    ///
    /// # Errors
    /// Returns `InvalidInput` if the name is not one of the four entity types
    pub fn resolve_named<'c>(&self, character: &'c Character, entity_type: &str) -> Result<BTreeSet<&'c str>> {
        Ok(self.resolve(character, parse_entity_type(entity_type)?))
    }
}

/// Parse an entity type name, mapping failure to `InvalidInput`
pub fn parse_entity_type(value: &str) -> Result<EntityType> {
    value.parse().map_err(RelationsError::InvalidInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use herograph_domain::EntityGroup;

    fn character() -> Character {
        Character::new("X")
            .unwrap()
            .with_group(EntityType::Comics, EntityGroup::from_uris(["c1", "c2", "c2"]))
            .with_group(EntityType::Series, EntityGroup::from_uris(["s1"]))
    }

    #[test]
    fn test_resolve_deduplicates() {
        let character = character();
        let urls = EntityUrlResolver.resolve(&character, EntityType::Comics);
        assert_eq!(urls.into_iter().collect::<Vec<_>>(), vec!["c1", "c2"]);
    }

    #[test]
    fn test_resolve_empty_group() {
        let character = character();
        assert!(EntityUrlResolver.resolve(&character, EntityType::Events).is_empty());
    }

    #[test]
    fn test_resolve_named() {
        let character = character();
        let urls = EntityUrlResolver.resolve_named(&character, "series").unwrap();
        assert!(urls.contains("s1"));
    }

    #[test]
    fn test_resolve_named_rejects_unknown_type() {
        let character = character();
        let err = EntityUrlResolver.resolve_named(&character, "powers").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(err, RelationsError::InvalidInput(_)));
    }
}
