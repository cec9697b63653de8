//! Table command implementation.

use crate::cli::TableArgs;
use crate::error::Result;
use crate::output::Formatter;
use herograph_catalog::CharacterCatalog;
use herograph_relations::{RelationshipTable, RelationshipTableBuilder};
use std::fs::{self, File};
use tracing::info;

/// Build the relationship table the arguments describe.
///
/// With no names, every catalog character takes part, in catalog order.
pub fn build_table(args: &TableArgs, catalog: &CharacterCatalog) -> Result<RelationshipTable> {
    let builder = RelationshipTableBuilder::new(catalog);
    let table = if args.names.is_empty() {
        builder.build_named(&catalog.names(), &args.entity)?
    } else {
        builder.build_named(&args.names, &args.entity)?
    };
    Ok(table)
}

/// Execute the table command.
pub fn execute_table(args: TableArgs, catalog: &CharacterCatalog, formatter: &Formatter) -> Result<()> {
    let table = build_table(&args, catalog)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            table.write_csv(File::create(path)?)?;
            info!("Wrote {} rows to {}", table.len(), path.display());
            println!(
                "{}",
                formatter.success(&format!("Wrote {} rows to {}", table.len(), path.display()))
            );
        }
        None => println!("{}", formatter.format_relationships(&table)?),
    }

    Ok(())
}
