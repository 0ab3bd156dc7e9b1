use std::path::PathBuf;

use anyhow::Result;

use crate::{RenderContext, Source, cli::{Cli, RenderArgs}, common::PendingWrite};

const PAGE_TITLE: &str = "United States Educational Attainment";

pub fn run(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let mut config = super::load_config(args.config.as_deref())?;
    if let Some(projection) = args.projection {
        config.projection = projection;
    }

    let education = args.education.clone().unwrap_or_else(|| Source::parse(&config.education_url));
    let counties = args.counties.clone().unwrap_or_else(|| Source::parse(&config.counties_url));
    let output = args.output.clone().unwrap_or_else(|| {
        PathBuf::from(if args.html { "choropleth.html" } else { "choropleth.svg" })
    });

    let context = RenderContext::load(config, &education, &counties)?;
    let scene = context.scene();

    let mut sink = PendingWrite::open(&output)?;
    if args.html {
        scene.write_html(&mut sink, PAGE_TITLE)?;
    } else {
        scene.write_svg(&mut sink)?;
    }
    sink.finalize()?;

    tracing::info!(path = %output.display(), counties = scene.counties.len(), "map written");
    if cli.verbose > 0 {
        println!("Rendered {} counties into {}", scene.counties.len(), output.display());
    }
    Ok(())
}
