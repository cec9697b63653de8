//! Herograph CLI - Count what characters share across comics, series, stories and events.

use clap::Parser;
use herograph_catalog::CharacterCatalog;
use herograph_cli::commands;
use herograph_cli::{Cli, Command, Config, Formatter};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr)
    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> herograph_cli::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Fetch(args) => commands::execute_fetch(args, &config, &formatter).await?,
        Command::Count(args) => {
            commands::execute_count(args, &config, format, &formatter).await?
        }
        Command::Names => {
            let catalog = load_catalog(&config, cli.catalog.as_deref())?;
            commands::execute_names(&catalog, &formatter)?
        }
        Command::Show(args) => {
            let catalog = load_catalog(&config, cli.catalog.as_deref())?;
            commands::execute_show(args, &catalog, &formatter)?
        }
        Command::Common(args) => {
            let catalog = load_catalog(&config, cli.catalog.as_deref())?;
            commands::execute_common(args, &catalog, &formatter)?
        }
        Command::Table(args) => {
            let catalog = load_catalog(&config, cli.catalog.as_deref())?;
            commands::execute_table(args, &catalog, &formatter)?
        }
    }

    Ok(())
}

fn load_catalog(config: &Config, override_path: Option<&Path>) -> herograph_cli::Result<CharacterCatalog> {
    let path = config.resolve_catalog_path(override_path)?;
    debug!("Loading catalog from {}", path.display());
    Ok(CharacterCatalog::from_path(&path)?)
}
