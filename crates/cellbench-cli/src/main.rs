//! cellbench — browse the single-cell model catalog from the terminal.
//!
//! Run with: cargo run -p cellbench-cli -- models --modality atac

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use cellbench_catalog::Catalog;
use cellbench_cli::{telemetry, App, Cli};
use cellbench_config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    let filter = telemetry::env_filter(cli.verbose, &config.logging.level);
    telemetry::init_tracing(cli.json_logs || config.logging.json, filter);
    debug!(?config, "Configuration resolved");

    let catalog = Catalog::load(config.catalog.data_dir.as_deref())
        .context("Failed to load catalog")?;

    let app = App::new(catalog, config, cli.json);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app.run(&cli.command, &mut out)
}
