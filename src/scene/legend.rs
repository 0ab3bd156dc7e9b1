use crate::scale::{Axis, Rgb};

use super::RenderContext;

/// One swatch per threshold bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRect {
    pub bucket: usize,
    /// Bucket bounds after clamping open ends to the outermost breakpoints.
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
}

/// `<g id="legend">`: swatches plus the breakpoint axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    /// Translation of the whole group.
    pub offset: (f64, f64),
    pub rects: Vec<LegendRect>,
    pub axis: Axis,
}

impl RenderContext {
    pub fn legend(&self) -> Legend {
        let x = self.x_scale();
        let color = self.color_scale();
        let bounds = color.extent();

        let rects = color.colors().iter().enumerate()
            .map(|(bucket, &fill)| {
                let (lower, upper) = color.invert_extent(bucket);
                let lower = lower.or(bounds.map(|(lo, _)| lo));
                let upper = upper.or(bounds.map(|(_, hi)| hi));

                let (left, width) = match (lower, upper) {
                    (Some(lo), Some(hi)) => (x.apply(lo), x.apply(hi) - x.apply(lo)),
                    // no breakpoints at all: park the swatch at the start of the legend
                    _ => (x.range()[0], 0.0),
                };

                LegendRect { bucket, lower, upper, x: left, width, height: self.config().legend_height, fill }
            })
            .collect();

        Legend {
            offset: (0.0, self.config().legend_offset),
            rects,
            axis: self.axis(),
        }
    }
}
