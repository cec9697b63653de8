//! Count command implementation.

use crate::cli::CountArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use herograph_api::{ApiResource, MarvelApiClient};

/// Execute the count command.
pub async fn execute_count(
    args: CountArgs,
    config: &Config,
    format: OutputFormat,
    formatter: &Formatter,
) -> Result<()> {
    let resource: ApiResource = args.resource.parse()?;
    let api_config = config.resolve_api_config(args.api_config.as_deref())?;
    let client = MarvelApiClient::new(api_config)?;

    let total = client.total_count(resource).await?;

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "resource": resource.to_string(),
                "total": total,
            }))?
        ),
        OutputFormat::Csv => println!("resource,total\n{},{}", resource, total),
        OutputFormat::Table => println!("{}", formatter.info(&format!("{}: {}", resource, total))),
    }
    Ok(())
}
