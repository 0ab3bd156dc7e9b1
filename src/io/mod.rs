//! IO module for format-specific writing operations.
//!
//! - `svg` - SVG format for the rendered map (paths, legend, standalone HTML page)

pub(crate) mod svg;
