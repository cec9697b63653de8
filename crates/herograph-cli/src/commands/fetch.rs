//! Fetch command implementation.

use crate::cli::FetchArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use herograph_api::MarvelApiClient;
use herograph_catalog::loader::into_characters;
use herograph_catalog::{save_records, CharacterCatalog};

/// Execute the fetch command.
///
/// Records are validated as a catalog before anything is written.
pub async fn execute_fetch(args: FetchArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let api_config = config.resolve_api_config(args.api_config.as_deref())?;
    let client = MarvelApiClient::new(api_config)?;

    println!("{}", formatter.info("Fetching characters..."));
    let records = client.fetch_catalog().await?;

    let catalog = CharacterCatalog::new(into_characters(records.clone())?)?;
    save_records(&args.output, &records)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Saved {} characters to {}",
            catalog.len(),
            args.output.display()
        ))
    );
    Ok(())
}
