use std::path::PathBuf;

use anyhow::Result;

use crate::{Source, cli::{Cli, DownloadArgs}, common::{ensure_dir_exists, fetch_both, write_atomic}};

pub fn run(cli: &Cli, args: &DownloadArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let out_dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    ensure_dir_exists(&out_dir)?;

    let education = Source::parse(&config.education_url);
    let counties = Source::parse(&config.counties_url);
    tracing::info!(%education, %counties, dir = %out_dir.display(), "downloading datasets");

    let (education_bytes, counties_bytes) = fetch_both(&education, &counties)?;

    let education_path = out_dir.join("education.json");
    let counties_path = out_dir.join("counties.json");
    write_atomic(&education_path, &education_bytes)?;
    write_atomic(&counties_path, &counties_bytes)?;

    if cli.verbose > 0 {
        println!("Downloaded {} and {}", education_path.display(), counties_path.display());
    }
    Ok(())
}
