//! Render configuration: canvas geometry, legend layout, interaction constants, data sources.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::common::{COUNTIES_URL, EDUCATION_URL};

/// How topology coordinates become canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ProjectionKind {
    /// Coordinates are already planar (the default county topology is pre-projected).
    #[default]
    Identity,
    /// Longitude/latitude through the composite Albers USA projection.
    AlbersUsa,
}

/// Every field has a default, so a config file only needs the fields it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: f64,
    pub height: f64,
    /// Legend starts this far from the left edge.
    pub margin_left: f64,
    /// Legend ends this far from the right edge.
    pub margin_right: f64,
    pub legend_height: f64,
    /// Vertical offset of the legend group.
    pub legend_offset: f64,
    pub tick_size: f64,
    /// Allowed zoom factors, `[min, max]`.
    pub scale_extent: [f64; 2],
    /// Tooltip position relative to the pointer, `[dx, dy]`.
    pub tooltip_offset: [f64; 2],
    pub education_url: String,
    pub counties_url: String,
    /// Member of the topology's `objects` holding the counties.
    pub counties_object: String,
    pub projection: ProjectionKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 600.0,
            margin_left: 600.0,
            margin_right: 100.0,
            legend_height: 8.0,
            legend_offset: 40.0,
            tick_size: 13.0,
            scale_extent: [1.0, 8.0],
            tooltip_offset: [10.0, -28.0],
            education_url: EDUCATION_URL.to_string(),
            counties_url: COUNTIES_URL.to_string(),
            counties_object: "counties".to_string(),
            projection: ProjectionKind::Identity,
        }
    }
}

impl Config {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("[config] Invalid configuration JSON")
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("[config] in {}", path.display()))
    }

    /// Horizontal pixel range of the legend.
    pub fn legend_range(&self) -> [f64; 2] {
        [self.margin_left, self.width - self.margin_right]
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            bail!("[config] Canvas must have a positive size, got {}x{}", self.width, self.height);
        }
        let [lo, hi] = self.legend_range();
        if !(lo < hi) {
            bail!("[config] Margins leave no room for the legend ({lo}..{hi})");
        }
        let [k0, k1] = self.scale_extent;
        if !(k0 > 0.0 && k0 <= k1) {
            bail!("[config] Invalid zoom scale extent [{k0}, {k1}]");
        }
        if self.counties_object.is_empty() {
            bail!("[config] counties_object must name a topology object");
        }
        Ok(())
    }
}
