use thiserror::Error;

/// Errors raised while reading or decoding a topology.
#[derive(Debug, Error)]
pub enum TopoError {
    /// The document is not valid JSON or does not match the TopoJSON shape.
    #[error("invalid topology JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level `type` member is something other than `"Topology"`.
    #[error("expected a Topology, found type {0:?}")]
    NotATopology(String),

    /// The requested member of `objects` does not exist.
    #[error("topology has no object named {0:?}")]
    UnknownObject(String),

    /// A geometry refers to an arc the topology does not contain.
    #[error("arc index {index} out of range ({len} arcs)")]
    ArcOutOfRange { index: i64, len: usize },

    /// A position holds fewer than two numbers.
    #[error("position with {0} coordinates, expected at least 2")]
    MalformedPosition(usize),
}
