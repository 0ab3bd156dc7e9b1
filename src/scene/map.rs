use crate::{io::svg::path_data, scale::Rgb};

use super::{CountyContext, RenderContext};

/// One `<path class="county">`.
#[derive(Clone, Debug, PartialEq)]
pub struct CountyPath {
    pub county: CountyContext,
    /// Path data in canvas pixels.
    pub d: String,
    pub fill: Rgb,
}

impl RenderContext {
    /// One path per county feature, in topology order.
    pub fn county_paths(&self) -> Vec<CountyPath> {
        self.features().iter()
            .map(|feature| {
                let county = self.county(feature);
                let fill = self.fill(&county);
                // null geometries still get an (empty) element carrying their data
                let d = feature.geometry.as_ref()
                    .map_or_else(String::new, |geometry| path_data(geometry, self.projection()));
                CountyPath { d, fill, county }
            })
            .collect()
    }
}
