use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use choropleth::cli::{Cli, Commands};
use choropleth::commands::{download, lookup, render};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Render(args) => render::run(&cli, args),
        Commands::Download(args) => download::run(&cli, args),
        Commands::Lookup(args) => lookup::run(&cli, args),
    };
    if let Err(e) = &result {
        tracing::error!("{e:#}");
    }
    result
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from warn.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::builder().from_env_lossy()
    } else {
        EnvFilter::builder().parse_lossy(format!("choropleth={level},topokit={level}"))
    };

    let _ = tracing_subscriber::fmt::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
