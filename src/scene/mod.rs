//! Renderer-independent description of the map: what to draw, not how.

mod context;
mod legend;
mod map;

pub use context::{CountyContext, RenderContext};
pub use legend::{Legend, LegendRect};
pub use map::CountyPath;

use crate::common::js_number;

/// Everything the SVG root holds.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub counties: Vec<CountyPath>,
    pub legend: Legend,
}

impl Scene {
    /// `viewBox` value, e.g. `0,0,960,600`.
    pub fn view_box(&self) -> String {
        format!("0,0,{},{}", js_number(self.width), js_number(self.height))
    }
}
