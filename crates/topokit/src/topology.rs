use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::TopoError;

/// A TopoJSON document.
#[derive(Clone, Debug, Deserialize)]
pub struct Topology {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub bbox: Option<Vec<f64>>,

    /// Present on quantized topologies; arcs are then delta-encoded.
    #[serde(default)]
    pub transform: Option<Transform>,

    /// Each arc is a list of positions; only the first two numbers are used.
    pub arcs: Vec<Vec<Vec<f64>>>,

    pub objects: BTreeMap<String, GeometryObject>,
}

/// Quantization transform: `x * scale[0] + translate[0]`, likewise for y.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

/// Identifier of a geometry object. Numbers and strings are kept apart:
/// `1001` and `"01001"` are different ids.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Text(String),
}

impl Id {
    /// The numeric value, for ids that were written as JSON numbers.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Id::Number(n) => Some(*n),
            Id::Text(_) => None,
        }
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{n}"),
            Id::Text(s) => f.write_str(s),
        }
    }
}

/// A member of `objects` (or of a geometry collection).
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "RawObject")]
pub struct GeometryObject {
    pub id: Option<Id>,
    pub properties: Option<Map<String, Value>>,
    pub geometry: TopoGeometry,
}

/// Wire shape of a geometry object before its `type` is resolved.
#[derive(Deserialize)]
struct RawObject {
    #[serde(default)]
    id: Option<Id>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl TryFrom<RawObject> for GeometryObject {
    type Error = serde_json::Error;

    /// A null or missing `type` is a null geometry, not an error.
    fn try_from(raw: RawObject) -> Result<Self, Self::Error> {
        let geometry = match raw.kind {
            None => TopoGeometry::Null,
            Some(kind) => {
                let mut fields = raw.rest;
                fields.insert("type".to_string(), Value::String(kind));
                serde_json::from_value(Value::Object(fields))?
            }
        };
        Ok(Self { id: raw.id, properties: raw.properties, geometry })
    }
}

/// Arc-referencing geometry, keyed by the TopoJSON `type` member.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum TopoGeometry {
    /// `"type": null`: the object exists but has no shape.
    #[serde(skip)]
    Null,
    Point { coordinates: Vec<f64> },
    MultiPoint { coordinates: Vec<Vec<f64>> },
    LineString { arcs: Vec<i64> },
    MultiLineString { arcs: Vec<Vec<i64>> },
    Polygon { arcs: Vec<Vec<i64>> },
    MultiPolygon { arcs: Vec<Vec<Vec<i64>>> },
    GeometryCollection { geometries: Vec<GeometryObject> },
}

impl Topology {
    /// Parse a topology from JSON text.
    pub fn from_json(text: &str) -> Result<Self, TopoError> {
        Self::checked(serde_json::from_str(text)?)
    }

    /// Parse a topology from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TopoError> {
        Self::checked(serde_json::from_slice(bytes)?)
    }

    fn checked(topology: Topology) -> Result<Self, TopoError> {
        if topology.kind != "Topology" {
            return Err(TopoError::NotATopology(topology.kind));
        }
        Ok(topology)
    }

    /// Look up a named member of `objects`.
    pub fn object(&self, name: &str) -> Result<&GeometryObject, TopoError> {
        self.objects.get(name).ok_or_else(|| TopoError::UnknownObject(name.to_string()))
    }

    /// Number of arcs in the topology.
    pub fn num_arcs(&self) -> usize { self.arcs.len() }
}
