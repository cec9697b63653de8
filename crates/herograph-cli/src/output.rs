//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use herograph_domain::{Character, EntityType};
use herograph_relations::RelationshipTable;
use std::collections::BTreeSet;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a relationship table.
    pub fn format_relationships(&self, table: &RelationshipTable) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(table.to_json()?),
            OutputFormat::Csv => Ok(table.to_csv_string()?),
            OutputFormat::Table => Ok(self.format_relationships_table(table)),
        }
    }

    fn format_relationships_table(&self, table: &RelationshipTable) -> String {
        if table.is_empty() {
            return self.colorize("No character pairs to compare.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(table.column_names());
        for row in table.rows() {
            builder.push_record([
                row.character_a.clone(),
                row.character_b.clone(),
                row.common_count.to_string(),
            ]);
        }

        render(builder)
    }

    /// Format the catalog's character names.
    pub fn format_names(&self, names: &[&str]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(names)?),
            OutputFormat::Csv => single_column_csv("Name", names.iter().copied()),
            OutputFormat::Table => {
                if names.is_empty() {
                    return Ok(self.colorize("Catalog is empty.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["#", "Name"]);
                for (position, name) in names.iter().enumerate() {
                    builder.push_record([(position + 1).to_string(), name.to_string()]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format the URLs shared by a group of characters.
    pub fn format_common_urls(
        &self,
        entity_type: EntityType,
        names: &[String],
        urls: &BTreeSet<&str>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "entityType": entity_type.as_str(),
                "characters": names,
                "count": urls.len(),
                "resourceURIs": urls,
            }))?),
            OutputFormat::Csv => single_column_csv("resourceURI", urls.iter().copied()),
            OutputFormat::Table => {
                let summary = format!(
                    "{} common {} for {}",
                    urls.len(),
                    entity_type,
                    names.join(", ")
                );
                if urls.is_empty() {
                    return Ok(self.colorize(&summary, "yellow"));
                }
                let listing: Vec<&str> = urls.iter().copied().collect();
                Ok(format!("{}\n{}", self.info(&summary), listing.join("\n")))
            }
        }
    }

    /// Format one character's membership sizes.
    pub fn format_character(&self, character: &Character) -> Result<String> {
        let counts = character.membership_counts();
        match self.format {
            OutputFormat::Json => {
                let mut record = serde_json::Map::new();
                record.insert("name".to_string(), character.name().into());
                for (entity_type, count) in counts {
                    record.insert(entity_type.as_str().to_string(), count.into());
                }
                Ok(serde_json::to_string_pretty(&record)?)
            }
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(Vec::new());
                writer.write_record(["EntityType", "Count"])?;
                for (entity_type, count) in counts {
                    writer.write_record([entity_type.as_str(), count.to_string().as_str()])?;
                }
                into_string(writer)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Entity type", "Count"]);
                for (entity_type, count) in counts {
                    builder.push_record([entity_type.as_str().to_string(), count.to_string()]);
                }
                Ok(format!(
                    "{}\n{}",
                    self.colorize(character.name(), "cyan"),
                    render(builder)
                ))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn single_column_csv<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([header])?;
    for value in values {
        writer.write_record([value])?;
    }
    into_string(writer)
}

fn into_string(mut writer: csv::Writer<Vec<u8>>) -> Result<String> {
    writer.flush()?;
    let bytes = writer.get_ref().clone();
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
