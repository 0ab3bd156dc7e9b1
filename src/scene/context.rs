use anyhow::{Context, Result};
use topokit::{Feature, Id, Topology};

use crate::{
    common::{Source, load_datasets},
    config::Config,
    data::{EducationData, EducationRecord},
    io::svg::Projection,
    scale::{Axis, GREENS_9, LinearScale, Rgb, ThresholdScale},
};

use super::Scene;

/// What a county element needs at event time: its id and the value it was drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct CountyContext {
    pub id: Option<Id>,
    /// Matched attainment, or 0 when no record matches.
    pub education: f64,
}

impl CountyContext {
    /// FIPS code used for record lookup; only numeric ids qualify.
    #[inline]
    pub fn fips(&self) -> Option<i64> {
        self.id.as_ref().and_then(Id::as_number)
    }
}

/// Loaded data plus every scale derived from it. Built once after loading and
/// passed to scene construction and event handling.
pub struct RenderContext {
    config: Config,
    data: EducationData,
    features: Vec<Feature>,
    x: LinearScale,
    color: ThresholdScale,
    projection: Projection,
}

impl RenderContext {
    pub fn new(config: Config, records: Vec<EducationRecord>, topology: &Topology) -> Result<Self> {
        config.validate()?;

        let features = topokit::feature(topology, &config.counties_object)
            .with_context(|| format!("[render] Failed to decode topology object {:?}", config.counties_object))?;
        let data = EducationData::new(records);

        let (x, color) = match data.extent() {
            Some((min, max)) => (
                LinearScale::new([min, max], config.legend_range()),
                ThresholdScale::for_extent(min, max, GREENS_9.to_vec()),
            ),
            None => {
                tracing::warn!("education dataset is empty; every county gets the lowest bucket");
                (
                    LinearScale::new([0.0, 0.0], config.legend_range()),
                    ThresholdScale::new(Vec::new(), GREENS_9.to_vec()),
                )
            }
        };

        let projection = Projection::new(config.projection)?;

        let context = Self { config, data, features, x, color, projection };
        tracing::info!(
            counties = context.features.len(),
            matched = context.num_matched(),
            records = context.data.len(),
            "render context ready",
        );
        Ok(context)
    }

    /// Fetch both datasets (concurrently) and build the context.
    pub fn load(config: Config, education: &Source, counties: &Source) -> Result<Self> {
        let (records, topology) = load_datasets(education, counties)?;
        Self::new(config, records, &topology)
    }

    pub fn config(&self) -> &Config { &self.config }

    pub fn data(&self) -> &EducationData { &self.data }

    pub fn features(&self) -> &[Feature] { &self.features }

    /// Attainment → legend pixels.
    pub fn x_scale(&self) -> &LinearScale { &self.x }

    /// Attainment → fill colour.
    pub fn color_scale(&self) -> &ThresholdScale { &self.color }

    pub fn projection(&self) -> &Projection { &self.projection }

    /// Legend axis: one tick per breakpoint.
    pub fn axis(&self) -> Axis {
        Axis::bottom(&self.x, self.color.breakpoints(), self.config.tick_size)
    }

    pub fn county(&self, feature: &Feature) -> CountyContext {
        let id = feature.id.clone();
        let education = self.data.value_or_zero(id.as_ref().and_then(Id::as_number));
        CountyContext { id, education }
    }

    pub fn fill(&self, county: &CountyContext) -> Rgb {
        self.color.color(county.education)
    }

    /// Counties with a matching record.
    pub fn num_matched(&self) -> usize {
        self.features.iter()
            .filter(|f| f.id.as_ref().and_then(Id::as_number).is_some_and(|fips| self.data.get(fips).is_some()))
            .count()
    }

    pub fn scene(&self) -> Scene {
        Scene {
            width: self.config.width,
            height: self.config.height,
            counties: self.county_paths(),
            legend: self.legend(),
        }
    }
}
