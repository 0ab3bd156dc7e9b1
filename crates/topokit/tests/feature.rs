// Integration tests for expanding topology objects into features.

use geo::{Area, Geometry};
use topokit::{Id, TopoError, Topology, feature};

/// Two unit squares sharing the edge x = 1, quantized with scale 1 and a
/// translate of (100, 200). Arc 0 is the shared edge.
///
/// ```
/// (0,1)--(1,1)--(2,1)
///   |  A   |  B   |
/// (0,0)--(1,0)--(2,0)
/// ```
const TWO_SQUARES: &str = r#"{
    "type": "Topology",
    "transform": {"scale": [1, 1], "translate": [100, 200]},
    "arcs": [
        [[1, 0], [0, 1]],
        [[1, 1], [-1, 0], [0, -1], [1, 0]],
        [[1, 0], [1, 0], [0, 1], [-1, 0]]
    ],
    "objects": {
        "counties": {
            "type": "GeometryCollection",
            "geometries": [
                {"type": "Polygon", "id": 1001, "arcs": [[1, 0]]},
                {"type": "Polygon", "id": "01003", "arcs": [[2, -1]], "properties": {"name": "B"}}
            ]
        },
        "outline": {"type": "MultiLineString", "arcs": [[1], [2]]}
    }
}"#;

fn two_squares() -> Topology {
    Topology::from_json(TWO_SQUARES).unwrap()
}

#[test]
fn collection_expands_to_one_feature_per_member() {
    let features = feature(&two_squares(), "counties").unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0].id, Some(Id::Number(1001)));
    assert_eq!(features[1].id, Some(Id::Text("01003".into())));
    assert_eq!(features[1].properties.as_ref().unwrap()["name"], "B");
}

#[test]
fn shared_arc_rebuilds_both_squares() {
    let features = feature(&two_squares(), "counties").unwrap();
    for f in &features {
        let Some(Geometry::Polygon(polygon)) = &f.geometry else { panic!("expected polygon") };
        assert!((polygon.unsigned_area() - 1.0).abs() < 1e-9);
        assert!(polygon.exterior().is_closed());
    }

    let Some(Geometry::Polygon(a)) = &features[0].geometry else { unreachable!() };
    let xs: Vec<f64> = a.exterior().0.iter().map(|c| c.x).collect();
    assert!(xs.iter().all(|&x| (100.0..=101.0).contains(&x)));

    let Some(Geometry::Polygon(b)) = &features[1].geometry else { unreachable!() };
    let xs: Vec<f64> = b.exterior().0.iter().map(|c| c.x).collect();
    assert!(xs.iter().all(|&x| (101.0..=102.0).contains(&x)));
}

#[test]
fn non_collection_object_is_a_single_feature() {
    let features = feature(&two_squares(), "outline").unwrap();
    assert_eq!(features.len(), 1);
    let Some(Geometry::MultiLineString(lines)) = &features[0].geometry else { panic!("expected lines") };
    assert_eq!(lines.0.len(), 2);
}

#[test]
fn unknown_object_is_reported() {
    let err = feature(&two_squares(), "states").unwrap_err();
    assert!(matches!(err, TopoError::UnknownObject(ref name) if name == "states"));
}

#[test]
fn wrong_document_type_is_rejected() {
    let err = Topology::from_json(r#"{"type": "FeatureCollection", "arcs": [], "objects": {}}"#).unwrap_err();
    assert!(matches!(err, TopoError::NotATopology(_)));
}

#[test]
fn unquantized_points_pass_through() {
    let topo = Topology::from_json(r#"{
        "type": "Topology",
        "arcs": [],
        "objects": {"capital": {"type": "Point", "coordinates": [-86.3, 32.4]}}
    }"#).unwrap();
    let features = feature(&topo, "capital").unwrap();
    let Some(Geometry::Point(p)) = &features[0].geometry else { panic!("expected point") };
    assert_eq!((p.x(), p.y()), (-86.3, 32.4));
}

#[test]
fn null_geometry_becomes_a_shapeless_feature() {
    let topo = Topology::from_json(r#"{
        "type": "Topology",
        "arcs": [[[0, 0], [1, 0], [1, 1], [0, 0]]],
        "objects": {
            "counties": {
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Polygon", "id": 1001, "arcs": [[0]]},
                    {"type": null, "id": 1003},
                    {"id": 1005, "properties": {"name": "untyped"}}
                ]
            }
        }
    }"#).unwrap();

    let features = feature(&topo, "counties").unwrap();
    assert_eq!(features.len(), 3);
    assert!(matches!(features[0].geometry, Some(Geometry::Polygon(_))));
    assert_eq!(features[1].id, Some(Id::Number(1003)));
    assert!(features[1].geometry.is_none());
    assert!(features[2].geometry.is_none());
    assert_eq!(features[2].properties.as_ref().unwrap()["name"], "untyped");
}

#[test]
fn null_members_drop_out_of_nested_collections() {
    let topo = Topology::from_json(r#"{
        "type": "Topology",
        "arcs": [[[0, 0], [2, 2]]],
        "objects": {
            "mixed": {
                "type": "GeometryCollection",
                "id": "m",
                "geometries": [
                    {"type": "GeometryCollection", "geometries": [
                        {"type": "LineString", "arcs": [0]},
                        {"type": null}
                    ]}
                ]
            }
        }
    }"#).unwrap();

    let features = feature(&topo, "mixed").unwrap();
    let Some(Geometry::GeometryCollection(members)) = &features[0].geometry else { panic!("expected collection") };
    assert_eq!(members.0.len(), 1);
}

#[test]
fn unknown_geometry_type_is_still_an_error() {
    let err = Topology::from_json(r#"{
        "type": "Topology",
        "arcs": [],
        "objects": {"x": {"type": "Circle", "radius": 3}}
    }"#).unwrap_err();
    assert!(matches!(err, TopoError::Json(_)));
}
