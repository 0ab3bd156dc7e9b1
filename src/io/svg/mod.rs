//! SVG output: projection, path data, and document writing.

mod geometry;
mod proj;
mod writer;

pub use geometry::path_data;
pub use proj::{AlbersUsa, Projection};
