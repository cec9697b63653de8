//! Relationship table and its export formats
//!
//! Columns: `Character1 | Character2 | Common<EntityType>Amount`.

use crate::error::Result;
use herograph_domain::{EntityType, RelationshipRow};
use serde_json::{Map, Value};
use std::io;

/// Header of the first character column
pub const CHARACTER_1_COLUMN: &str = "Character1";

/// Header of the second character column
pub const CHARACTER_2_COLUMN: &str = "Character2";

/// Relationship rows for one entity type, in pair-generation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipTable {
    entity_type: EntityType,
    rows: Vec<RelationshipRow>,
}

impl RelationshipTable {
    /// Create a table from rows computed for `entity_type`
    pub fn new(entity_type: EntityType, rows: Vec<RelationshipRow>) -> Self {
        Self { entity_type, rows }
    }

    /// Create a table with no rows
    pub fn empty(entity_type: EntityType) -> Self {
        Self::new(entity_type, Vec::new())
    }

    /// Entity type the counts refer to
    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    /// Column headers, the count column named after the entity type
    pub fn column_names(&self) -> [&'static str; 3] {
        [
            CHARACTER_1_COLUMN,
            CHARACTER_2_COLUMN,
            self.entity_type.column_name(),
        ]
    }

    /// All rows
    pub fn rows(&self) -> &[RelationshipRow] {
        &self.rows
    }

    /// Consume the table, returning its rows
    pub fn into_rows(self) -> Vec<RelationshipRow> {
        self.rows
    }

    /// Rows whose pair shares at least one sub-entity (weighted graph edges)
    pub fn edges(&self) -> impl Iterator<Item = &RelationshipRow> {
        self.rows.iter().filter(|row| row.is_connected())
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the table as CSV, header first
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(self.column_names())?;

        for row in &self.rows {
            let count = row.common_count.to_string();
            csv_writer.write_record([
                row.character_a.as_str(),
                row.character_b.as_str(),
                count.as_str(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Render the table as a CSV string
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Table as a JSON array of records keyed by column name
    pub fn to_json_value(&self) -> Value {
        let [first, second, count] = self.column_names();
        let records = self
            .rows
            .iter()
            .map(|row| {
                let mut record = Map::new();
                record.insert(first.to_string(), Value::from(row.character_a.clone()));
                record.insert(second.to_string(), Value::from(row.character_b.clone()));
                record.insert(count.to_string(), Value::from(row.common_count));
                Value::Object(record)
            })
            .collect();

        Value::Array(records)
    }

    /// Render the table as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json_value())?)
    }
}
