//! Character module - the catalog's unit of record

use crate::EntityType;
use std::collections::BTreeSet;

/// Reference to one sub-entity instance
///
/// The `resource_uri` is opaque: two characters appearing in the same comic
/// carry the identical URI string, and nothing else about it is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef {
    /// Globally unique identifier of the sub-entity
    pub resource_uri: String,

    /// Human-readable title, when the source provides one
    pub name: Option<String>,
}

impl EntityRef {
    /// Create a reference from its resource URI
    pub fn new(resource_uri: impl Into<String>) -> Self {
        Self {
            resource_uri: resource_uri.into(),
            name: None,
        }
    }

    /// Attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Ordered sequence of sub-entity references of one type
///
/// Order is preserved as loaded; repeated URIs are kept here and collapsed
/// only when the group is viewed as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityGroup {
    items: Vec<EntityRef>,
}

impl EntityGroup {
    /// Create a group from its references
    pub fn new(items: Vec<EntityRef>) -> Self {
        Self { items }
    }

    /// Create a group from bare resource URIs
    pub fn from_uris<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: uris.into_iter().map(EntityRef::new).collect(),
        }
    }

    /// References in load order
    pub fn items(&self) -> &[EntityRef] {
        &self.items
    }

    /// Number of references, duplicates included
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the group has no references
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Deduplicated set of resource URIs
    pub fn unique_uris(&self) -> BTreeSet<&str> {
        self.items.iter().map(|item| item.resource_uri.as_str()).collect()
    }
}

/// A named character and its four sub-entity groups
///
/// Records are immutable once loaded into a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,

    /// Comics the character appears in
    pub comics: EntityGroup,

    /// Series the character appears in
    pub series: EntityGroup,

    /// Stories the character appears in
    pub stories: EntityGroup,

    /// Events the character takes part in
    pub events: EntityGroup,
}

impl Character {
    /// Create a character with empty groups
    ///
    /// # Errors
    /// Returns error if the name is empty or only whitespace
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Character name cannot be empty".to_string());
        }

        Ok(Self {
            name,
            comics: EntityGroup::default(),
            series: EntityGroup::default(),
            stories: EntityGroup::default(),
            events: EntityGroup::default(),
        })
    }

    /// Replace the group for one entity type
    pub fn with_group(mut self, entity_type: EntityType, group: EntityGroup) -> Self {
        *self.group_mut(entity_type) = group;
        self
    }

    /// The character's unique name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Group for the given entity type
    pub fn group(&self, entity_type: EntityType) -> &EntityGroup {
        match entity_type {
            EntityType::Comics => &self.comics,
            EntityType::Series => &self.series,
            EntityType::Stories => &self.stories,
            EntityType::Events => &self.events,
        }
    }

    /// Distinct URI counts per entity type, in [`EntityType::ALL`] order
    pub fn membership_counts(&self) -> [(EntityType, usize); 4] {
        EntityType::ALL.map(|entity_type| (entity_type, self.group(entity_type).unique_uris().len()))
    }

    fn group_mut(&mut self, entity_type: EntityType) -> &mut EntityGroup {
        match entity_type {
            EntityType::Comics => &mut self.comics,
            EntityType::Series => &mut self.series,
            EntityType::Stories => &mut self.stories,
            EntityType::Events => &mut self.events,
        }
    }
}
