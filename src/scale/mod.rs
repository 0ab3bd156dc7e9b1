//! Scales mapping attainment percentages to pixels and colours.

mod axis;
mod color;
mod linear;
mod threshold;

pub use axis::{Axis, Tick};
pub use color::{GREENS_9, Rgb};
pub use linear::LinearScale;
pub use threshold::{ThresholdScale, range_step};
