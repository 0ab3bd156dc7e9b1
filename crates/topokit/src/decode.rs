use geo::{Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use serde_json::{Map, Value};

use crate::{GeometryObject, Id, TopoError, TopoGeometry, Topology, Transform};

/// A standalone feature expanded from a topology object.
#[derive(Clone, Debug)]
pub struct Feature {
    pub id: Option<Id>,
    pub properties: Option<Map<String, Value>>,
    /// `None` for null geometry objects.
    pub geometry: Option<Geometry<f64>>,
}

/// Expand the named object into features.
///
/// A `GeometryCollection` object yields one feature per member (like a
/// FeatureCollection); any other object yields a single feature.
pub fn feature(topology: &Topology, name: &str) -> Result<Vec<Feature>, TopoError> {
    let object = topology.object(name)?;
    let decoder = Decoder::new(topology)?;

    match &object.geometry {
        TopoGeometry::GeometryCollection { geometries } => geometries.iter()
            .map(|member| decoder.feature(member))
            .collect(),
        _ => Ok(vec![decoder.feature(object)?]),
    }
}

/// Arcs decoded to absolute coordinates, shared by every geometry of a topology.
struct Decoder {
    transform: Option<Transform>,
    arcs: Vec<Vec<Coord<f64>>>,
}

impl Decoder {
    fn new(topology: &Topology) -> Result<Self, TopoError> {
        let arcs = topology.arcs.iter()
            .map(|arc| decode_arc(arc, topology.transform.as_ref()))
            .collect::<Result<_, _>>()?;

        Ok(Self { transform: topology.transform, arcs })
    }

    fn feature(&self, object: &GeometryObject) -> Result<Feature, TopoError> {
        Ok(Feature {
            id: object.id.clone(),
            properties: object.properties.clone(),
            geometry: self.geometry(&object.geometry)?,
        })
    }

    fn geometry(&self, geometry: &TopoGeometry) -> Result<Option<Geometry<f64>>, TopoError> {
        Ok(Some(match geometry {
            TopoGeometry::Null => return Ok(None),
            TopoGeometry::Point { coordinates } => Geometry::Point(Point(self.point(coordinates)?)),
            TopoGeometry::MultiPoint { coordinates } => Geometry::MultiPoint(MultiPoint(
                coordinates.iter()
                    .map(|p| self.point(p).map(Point))
                    .collect::<Result<_, _>>()?,
            )),
            TopoGeometry::LineString { arcs } => Geometry::LineString(self.line(arcs)?),
            TopoGeometry::MultiLineString { arcs } => Geometry::MultiLineString(MultiLineString(
                arcs.iter().map(|line| self.line(line)).collect::<Result<_, _>>()?,
            )),
            TopoGeometry::Polygon { arcs } => Geometry::Polygon(self.polygon(arcs)?),
            TopoGeometry::MultiPolygon { arcs } => Geometry::MultiPolygon(MultiPolygon(
                arcs.iter().map(|rings| self.polygon(rings)).collect::<Result<_, _>>()?,
            )),
            // null members are left out of a nested collection
            TopoGeometry::GeometryCollection { geometries } => Geometry::GeometryCollection(GeometryCollection(
                geometries.iter()
                    .filter_map(|g| self.geometry(&g.geometry).transpose())
                    .collect::<Result<_, _>>()?,
            )),
        }))
    }

    /// Standalone positions are quantized but never delta-encoded.
    fn point(&self, position: &[f64]) -> Result<Coord<f64>, TopoError> {
        let (x, y) = xy(position)?;
        Ok(match &self.transform {
            Some(t) => Coord { x: x * t.scale[0] + t.translate[0], y: y * t.scale[1] + t.translate[1] },
            None => Coord { x, y },
        })
    }

    /// Concatenate arcs; each arc after the first repeats the previous end
    /// point, which is dropped.
    fn stitch(&self, indices: &[i64]) -> Result<Vec<Coord<f64>>, TopoError> {
        let mut points: Vec<Coord<f64>> = Vec::new();

        for &index in indices {
            let (arc_index, reversed) = if index < 0 { (!index, true) } else { (index, false) };
            let arc = usize::try_from(arc_index).ok()
                .and_then(|i| self.arcs.get(i))
                .ok_or(TopoError::ArcOutOfRange { index, len: self.arcs.len() })?;

            points.pop();
            if reversed {
                points.extend(arc.iter().rev().copied());
            } else {
                points.extend(arc.iter().copied());
            }
        }

        Ok(points)
    }

    fn line(&self, indices: &[i64]) -> Result<LineString<f64>, TopoError> {
        let mut points = self.stitch(indices)?;
        if let Some(&first) = points.first() {
            while points.len() < 2 { points.push(first) }
        }
        Ok(LineString(points))
    }

    fn ring(&self, indices: &[i64]) -> Result<LineString<f64>, TopoError> {
        let mut points = self.stitch(indices)?;
        if let Some(&first) = points.first() {
            while points.len() < 4 { points.push(first) }
        }
        Ok(LineString(points))
    }

    /// First ring is the exterior, the rest are holes.
    fn polygon(&self, rings: &[Vec<i64>]) -> Result<Polygon<f64>, TopoError> {
        let mut rings = rings.iter().map(|ring| self.ring(ring));
        let exterior = rings.next().transpose()?.unwrap_or_else(|| LineString(Vec::new()));
        let interiors = rings.collect::<Result<Vec<_>, _>>()?;
        Ok(Polygon::new(exterior, interiors))
    }
}

fn xy(position: &[f64]) -> Result<(f64, f64), TopoError> {
    match position {
        [x, y, ..] => Ok((*x, *y)),
        _ => Err(TopoError::MalformedPosition(position.len())),
    }
}

/// Undo delta encoding and quantization for one arc.
fn decode_arc(arc: &[Vec<f64>], transform: Option<&Transform>) -> Result<Vec<Coord<f64>>, TopoError> {
    let Some(t) = transform else {
        return arc.iter()
            .map(|p| xy(p).map(|(x, y)| Coord { x, y }))
            .collect();
    };

    let (mut x, mut y) = (0.0, 0.0);
    arc.iter()
        .map(|p| {
            let (dx, dy) = xy(p)?;
            x += dx;
            y += dy;
            Ok(Coord { x: x * t.scale[0] + t.translate[0], y: y * t.scale[1] + t.translate[1] })
        })
        .collect()
}
