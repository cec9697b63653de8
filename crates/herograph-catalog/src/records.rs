//! Wire representation of character records
//!
//! Handles conversion between the loose JSON shape served by the remote API
//! (and stored in catalog files) and the strongly-typed domain records.
//! Fields the domain does not use are carried in `extra` so a fetched file
//! can be written back without loss.

use herograph_domain::{Character, EntityGroup, EntityRef, EntityType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One character object as found in a catalog file or API page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecordDto {
    /// Unique character name
    pub name: String,

    /// Comics group
    pub comics: EntityGroupDto,

    /// Series group
    pub series: EntityGroupDto,

    /// Stories group
    pub stories: EntityGroupDto,

    /// Events group
    pub events: EntityGroupDto,

    /// Remaining fields (id, description, thumbnail, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Group wrapper: `{"available": n, "items": [...], ...}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityGroupDto {
    /// Sub-entity references
    pub items: Vec<EntityRefDto>,

    /// Remaining fields (available, returned, collectionURI)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reference object: `{"resourceURI": "...", "name": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRefDto {
    /// Opaque sub-entity identifier
    #[serde(rename = "resourceURI")]
    pub resource_uri: String,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Remaining fields (e.g. story `type`)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CharacterRecordDto {
    fn group(&self, entity_type: EntityType) -> &EntityGroupDto {
        match entity_type {
            EntityType::Comics => &self.comics,
            EntityType::Series => &self.series,
            EntityType::Stories => &self.stories,
            EntityType::Events => &self.events,
        }
    }
}

/// Convert a wire record into a domain character
///
/// # Errors
/// Returns a reason string if the name is empty or a reference has an empty URI
pub fn character_from_dto(dto: &CharacterRecordDto) -> Result<Character, String> {
    let mut character = Character::new(dto.name.clone())?;

    for entity_type in EntityType::ALL {
        let group = dto.group(entity_type);
        let mut items = Vec::with_capacity(group.items.len());
        for (position, item) in group.items.iter().enumerate() {
            if item.resource_uri.trim().is_empty() {
                return Err(format!(
                    "{} item {} of '{}' has an empty resourceURI",
                    entity_type, position, dto.name
                ));
            }
            let mut entity = EntityRef::new(item.resource_uri.clone());
            entity.name = item.name.clone();
            items.push(entity);
        }
        character = character.with_group(entity_type, EntityGroup::new(items));
    }

    Ok(character)
}

/// Convert a domain character into its minimal wire form
pub fn character_to_dto(character: &Character) -> CharacterRecordDto {
    let group = |entity_type: EntityType| EntityGroupDto {
        items: character
            .group(entity_type)
            .items()
            .iter()
            .map(|item| EntityRefDto {
                resource_uri: item.resource_uri.clone(),
                name: item.name.clone(),
                extra: Map::new(),
            })
            .collect(),
        extra: Map::new(),
    };

    CharacterRecordDto {
        name: character.name().to_string(),
        comics: group(EntityType::Comics),
        series: group(EntityType::Series),
        stories: group(EntityType::Stories),
        events: group(EntityType::Events),
        extra: Map::new(),
    }
}
