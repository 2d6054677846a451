use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use team_builder::{
    catalog::CsvCatalogSource,
    cli::{repl, Cli, LogLevel},
    engine::Backend,
};

/// Initialize tracing from the --log-level flag
///
/// Logs go to stderr so they never interleave with the menu on stdout.
fn initialize_tracing(log_level: &LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_filter_directive()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let source = CsvCatalogSource::new(cli.catalog.clone());
    let backend = Backend::load(&source).with_context(|| {
        format!(
            "data collection failed: could not load catalog from {}",
            cli.catalog.display()
        )
    })?;

    let backend = repl::run_stdio(backend)?;
    tracing::debug!(team_size = backend.roster().len(), "Exiting");

    Ok(())
}
