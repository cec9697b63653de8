//! Relationship module - pairwise shared-entity counts

use crate::EntityType;

/// One row of a relationship table
///
/// Rows are pairwise only: `character_a` precedes `character_b` in the input
/// list the table was built from, and the two are never the same character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationshipRow {
    /// First character of the pair
    pub character_a: String,

    /// Second character of the pair
    pub character_b: String,

    /// Entity type the count was computed for
    pub entity_type: EntityType,

    /// Number of distinct sub-entities both characters share
    pub common_count: usize,
}

impl RelationshipRow {
    /// Create a new relationship row
    pub fn new(
        character_a: impl Into<String>,
        character_b: impl Into<String>,
        entity_type: EntityType,
        common_count: usize,
    ) -> Self {
        Self {
            character_a: character_a.into(),
            character_b: character_b.into(),
            entity_type,
            common_count,
        }
    }

    /// Whether the pair shares at least one sub-entity
    pub fn is_connected(&self) -> bool {
        self.common_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_creation() {
        let row = RelationshipRow::new("X", "Y", EntityType::Comics, 2);
        assert_eq!(row.character_a, "X");
        assert_eq!(row.character_b, "Y");
        assert_eq!(row.common_count, 2);
        assert!(row.is_connected());
    }

    #[test]
    fn test_zero_count_is_not_connected() {
        let row = RelationshipRow::new("X", "Z", EntityType::Series, 0);
        assert!(!row.is_connected());
    }
}
