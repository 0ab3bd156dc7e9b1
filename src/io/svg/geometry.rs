//! Geometry to SVG path data.

use geo::{Coord, Geometry, LineString, Polygon};

use crate::common::fmt_coord;

use super::Projection;

/// Build the `d` attribute for a geometry: `M x,yL x,y…Z` per ring, rounded to
/// three decimals. Point geometries contribute nothing.
pub fn path_data(geometry: &Geometry<f64>, projection: &Projection) -> String {
    let mut out = String::new();
    push_geometry(&mut out, geometry, projection);
    out
}

fn push_geometry(out: &mut String, geometry: &Geometry<f64>, projection: &Projection) {
    match geometry {
        Geometry::Polygon(polygon) => push_polygon(out, polygon, projection),
        Geometry::MultiPolygon(polygons) => {
            for polygon in &polygons.0 { push_polygon(out, polygon, projection) }
        }
        Geometry::LineString(line) => push_line(out, line, projection),
        Geometry::MultiLineString(lines) => {
            for line in &lines.0 { push_line(out, line, projection) }
        }
        Geometry::GeometryCollection(collection) => {
            for member in &collection.0 { push_geometry(out, member, projection) }
        }
        Geometry::Rect(rect) => push_polygon(out, &rect.to_polygon(), projection),
        Geometry::Triangle(triangle) => push_polygon(out, &triangle.to_polygon(), projection),
        Geometry::Line(line) => push_coords(out, [line.start, line.end].iter(), projection, false),
        Geometry::Point(_) | Geometry::MultiPoint(_) => {}
    }
}

fn push_polygon(out: &mut String, polygon: &Polygon<f64>, projection: &Projection) {
    push_ring(out, polygon.exterior(), projection);
    for hole in polygon.interiors() {
        push_ring(out, hole, projection);
    }
}

/// Rings are closed with `Z`, so the repeated closing coordinate is left out.
fn push_ring(out: &mut String, ring: &LineString<f64>, projection: &Projection) {
    let coords = match ring.0.as_slice() {
        [first, rest @ .., last] if first == last => &ring.0[..rest.len() + 1],
        all => all,
    };
    push_coords(out, coords.iter(), projection, true);
}

fn push_line(out: &mut String, line: &LineString<f64>, projection: &Projection) {
    push_coords(out, line.0.iter(), projection, false);
}

fn push_coords<'a>(out: &mut String, coords: impl Iterator<Item = &'a Coord<f64>>, projection: &Projection, close: bool) {
    let mut started = false;
    for (x, y) in coords.filter_map(|c| projection.project(c)) {
        out.push(if started { 'L' } else { 'M' });
        out.push_str(&fmt_coord(x));
        out.push(',');
        out.push_str(&fmt_coord(y));
        started = true;
    }
    if started && close { out.push('Z') }
}

#[cfg(test)]
mod tests {
    use geo::{LineString, MultiPolygon, Point, polygon};

    use super::*;

    #[test]
    fn polygon_ring_drops_closing_point_and_closes() {
        let square = polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)];
        assert_eq!(path_data(&Geometry::Polygon(square), &Projection::Identity), "M0,0L10,0L10,10L0,10Z");
    }

    #[test]
    fn holes_and_parts_become_subpaths() {
        let outer = LineString::from(vec![(0.0, 0.0), (9.0, 0.0), (9.0, 9.0), (0.0, 0.0)]);
        let hole = LineString::from(vec![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)]);
        let other = LineString::from(vec![(20.0, 20.0), (21.5, 20.0), (21.5, 21.25), (20.0, 20.0)]);
        let shape = MultiPolygon(vec![
            Polygon::new(outer, vec![hole]),
            Polygon::new(other, vec![]),
        ]);
        assert_eq!(
            path_data(&Geometry::MultiPolygon(shape), &Projection::Identity),
            "M0,0L9,0L9,9ZM1,1L2,1L2,2ZM20,20L21.5,20L21.5,21.25Z",
        );
    }

    #[test]
    fn coordinates_round_to_three_decimals() {
        let line = LineString::from(vec![(0.12345, 1.0), (2.0, 3.99999)]);
        assert_eq!(path_data(&Geometry::LineString(line), &Projection::Identity), "M0.123,1L2,4");
    }

    #[test]
    fn points_draw_nothing() {
        assert_eq!(path_data(&Geometry::Point(Point::new(1.0, 2.0)), &Projection::Identity), "");
    }
}
