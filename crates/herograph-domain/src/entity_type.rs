//! Entity type module - the closed set of sub-entity collections

use std::fmt;

/// Category of sub-entity a character can be a member of
///
/// The set is closed: every character record carries exactly one group per
/// variant, and relationship tables are always computed for a single variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityType {
    /// Comic issues
    Comics,

    /// Comic series
    Series,

    /// Individual stories within issues
    Stories,

    /// Crossover events
    Events,
}

impl EntityType {
    /// Every entity type, in canonical order
    pub const ALL: [EntityType; 4] = [
        EntityType::Comics,
        EntityType::Series,
        EntityType::Stories,
        EntityType::Events,
    ];

    /// Get the entity type name as used in records and API paths
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Comics => "comics",
            EntityType::Series => "series",
            EntityType::Stories => "stories",
            EntityType::Events => "events",
        }
    }

    /// Parse an entity type from its exact lowercase name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "comics" => Some(EntityType::Comics),
            "series" => Some(EntityType::Series),
            "stories" => Some(EntityType::Stories),
            "events" => Some(EntityType::Events),
            _ => None,
        }
    }

    /// Column name holding the shared amount in a relationship table
    ///
    /// ```
    /// use herograph_domain::EntityType;
    ///
    /// assert_eq!(EntityType::Comics.column_name(), "CommonComicsAmount");
    /// assert_eq!(EntityType::Events.column_name(), "CommonEventsAmount");
    /// ```
    pub fn column_name(&self) -> &'static str {
        match self {
            EntityType::Comics => "CommonComicsAmount",
            EntityType::Series => "CommonSeriesAmount",
            EntityType::Stories => "CommonStoriesAmount",
            EntityType::Events => "CommonEventsAmount",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Invalid entity type '{}' (must be one of comics, series, stories, events)",
                s
            )
        })
    }
}
