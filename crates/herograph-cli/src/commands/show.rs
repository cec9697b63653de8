//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::output::Formatter;
use herograph_catalog::CharacterCatalog;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, catalog: &CharacterCatalog, formatter: &Formatter) -> Result<()> {
    let character = catalog.get(&args.name)?;
    println!("{}", formatter.format_character(character)?);
    Ok(())
}
