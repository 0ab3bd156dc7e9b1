use anyhow::Result;

use crate::{EducationData, Source, cli::{Cli, LookupArgs}, common::parse_records};

pub fn run(_cli: &Cli, args: &LookupArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let source = args.education.clone().unwrap_or_else(|| Source::parse(&config.education_url));

    let data = EducationData::new(parse_records(&source.fetch()?)?);
    match data.get(args.fips) {
        Some(record) => println!("{}", record.tooltip_text()),
        None => println!("No education record for FIPS {} (drawn with value 0)", args.fips),
    }
    Ok(())
}
