use std::path::PathBuf;

use crate::{ProjectionKind, Source};

/// Choropleth map of U.S. county educational attainment
#[derive(clap::Parser, Debug)]
#[command(name = "choropleth", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render the map to an SVG (or HTML) file
    Render(RenderArgs),

    /// Save both datasets to a directory
    Download(DownloadArgs),

    /// Print the tooltip text for one county
    Lookup(LookupArgs),
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Education records: URL or file, defaults to the configured URL
    #[arg(long)]
    pub education: Option<Source>,

    /// County topology: URL or file, defaults to the configured URL
    #[arg(long)]
    pub counties: Option<Source>,

    /// Output file, defaults to "./choropleth.svg" (or ".html" with --html)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Override the configured projection
    #[arg(long, value_enum)]
    pub projection: Option<ProjectionKind>,

    /// Write a standalone HTML page (map + tooltip container) instead of bare SVG
    #[arg(long)]
    pub html: bool,
}

#[derive(clap::Args, Debug)]
pub struct DownloadArgs {
    /// Output directory, defaults to "."
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// JSON configuration file (for the dataset URLs)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct LookupArgs {
    /// County FIPS code, e.g. 1001
    pub fips: i64,

    /// Education records: URL or file, defaults to the configured URL
    #[arg(long)]
    pub education: Option<Source>,

    /// JSON configuration file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,
}
