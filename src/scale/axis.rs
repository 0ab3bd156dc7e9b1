use crate::common::{js_number, js_round};

use super::LinearScale;

/// A labelled tick of a bottom-oriented axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Horizontal position after the half-pixel offset.
    pub position: f64,
    pub label: String,
}

/// Bottom-oriented axis: ticks hang below the baseline, labels below the ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub ticks: Vec<Tick>,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
    /// Shift that puts one-pixel lines on pixel centres.
    pub offset: f64,
}

impl Axis {
    pub const TICK_PADDING: f64 = 3.0;
    pub const OFFSET: f64 = 0.5;

    /// Ticks at explicit `values`, each labelled as a rounded percentage.
    pub fn bottom(scale: &LinearScale, values: &[f64], tick_size: f64) -> Self {
        let ticks = values.iter()
            .map(|&value| Tick {
                value,
                position: scale.apply(value) + Self::OFFSET,
                label: percent_label(value),
            })
            .collect();

        Self {
            ticks,
            tick_size_inner: tick_size,
            tick_size_outer: tick_size,
            tick_padding: Self::TICK_PADDING,
            offset: Self::OFFSET,
        }
    }

    /// Distance from the baseline to the top of a label.
    pub fn spacing(&self) -> f64 {
        self.tick_size_inner.max(0.0) + self.tick_padding
    }
}

/// `12.49 -> "12%"`, `12.5 -> "13%"`.
pub fn percent_label(x: f64) -> String {
    format!("{}%", js_number(js_round(x)))
}
