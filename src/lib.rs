#![doc = "Choropleth public API"]
mod common;
mod config;
mod data;
mod interact;
mod io;
mod scale;
mod scene;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod commands;

#[doc(inline)]
pub use common::{COUNTIES_URL, EDUCATION_URL, Source, fetch_both, js_number, load_datasets, parse_records, parse_topology};

#[doc(inline)]
pub use config::{Config, ProjectionKind};

#[doc(inline)]
pub use data::{EducationData, EducationRecord};

#[doc(inline)]
pub use interact::{DeltaMode, Tooltip, ZoomBehavior, ZoomTransform, wheel_delta};

#[doc(inline)]
pub use io::svg::{AlbersUsa, Projection, path_data};

#[doc(inline)]
pub use scale::{Axis, GREENS_9, LinearScale, Rgb, ThresholdScale, Tick, range_step};

#[doc(inline)]
pub use scene::{CountyContext, CountyPath, Legend, LegendRect, RenderContext, Scene};

pub use topokit;
