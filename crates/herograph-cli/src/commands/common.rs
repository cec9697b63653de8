//! Common command implementation.

use crate::cli::CommonArgs;
use crate::error::Result;
use crate::output::Formatter;
use herograph_catalog::CharacterCatalog;
use herograph_relations::{parse_entity_type, MultiSetIntersector};

/// Execute the common command.
pub fn execute_common(
    args: CommonArgs,
    catalog: &CharacterCatalog,
    formatter: &Formatter,
) -> Result<()> {
    let entity_type = parse_entity_type(&args.entity)?;
    let intersector = MultiSetIntersector::new(catalog);
    let urls = intersector.common_urls(args.names.iter().map(String::as_str), entity_type)?;

    println!(
        "{}",
        formatter.format_common_urls(entity_type, &args.names, &urls)?
    );
    Ok(())
}
