//! Event-driven state: the shared tooltip and the map's zoom transform.

mod hover;
mod tooltip;
mod zoom;

pub use tooltip::Tooltip;
pub use zoom::{DeltaMode, ZoomBehavior, ZoomTransform, wheel_delta};
