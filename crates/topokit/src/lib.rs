//! Decode TopoJSON topologies into standalone `geo` features.
//!
//! A topology stores every shared boundary once, as an *arc*; geometries refer
//! to arcs by index (bitwise-negated for reversed traversal). Decoding stitches
//! the arcs back into rings and lines and applies the optional quantization
//! transform.

pub mod decode;
pub mod error;
pub mod topology;

pub use decode::{Feature, feature};
pub use error::TopoError;
pub use topology::{GeometryObject, Id, TopoGeometry, Topology, Transform};
