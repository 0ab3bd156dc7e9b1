pub mod download;
pub mod lookup;
pub mod render;

use std::path::Path;

use anyhow::Result;

use crate::Config;

/// Defaults, overlaid with the config file when one is given.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    config.validate()?;
    Ok(config)
}
