//! Names command implementation.

use crate::error::Result;
use crate::output::Formatter;
use herograph_catalog::CharacterCatalog;

/// Execute the names command.
pub fn execute_names(catalog: &CharacterCatalog, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_names(&catalog.names())?);
    Ok(())
}
