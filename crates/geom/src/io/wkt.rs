//! WKT reading operations.

use std::str::FromStr;

use ::wkt::Wkt;
use ::wkt::types::{Coord, LineString, Polygon};

use crate::{Geometry, GeomError, Line, Result, Rings, Vertex};

/// Decode WKT text into a [`Geometry`], keeping any Z ordinate.
/// The Z may be tagged (`LINESTRING Z(...)`) or implied by three ordinates per coordinate.
/// Measure (M) ordinates are discarded.
pub fn decode(text: &str) -> Result<Geometry> {
    let text = text.trim();
    let parsed = match Wkt::<f64>::from_str(text) {
        Ok(parsed) => parsed,
        Err(err) => tag_implicit_dimension(text)
            .and_then(|tagged| Wkt::<f64>::from_str(&tagged).ok())
            .ok_or_else(|| GeomError::Malformed(format!("{err} in {:?}", preview(text))))?,
    };

    match parsed {
        Wkt::Point(point) => Ok(Geometry::Point(point.0.as_ref().map(vertex))),
        Wkt::LineString(line) => Ok(Geometry::LineString(line_vertices(&line))),
        Wkt::MultiLineString(lines) => Ok(Geometry::MultiLineString(
            lines.0.iter().map(line_vertices).collect()
        )),
        Wkt::Polygon(polygon) => Ok(Geometry::Polygon(rings(&polygon))),
        Wkt::MultiPolygon(polygons) => Ok(Geometry::MultiPolygon(
            polygons.0.iter().map(rings).collect()
        )),
        Wkt::MultiPoint(_) => Err(GeomError::UnsupportedKind("MultiPoint")),
        Wkt::GeometryCollection(_) => Err(GeomError::UnsupportedKind("GeometryCollection")),
    }
}

#[inline]
fn vertex(coord: &Coord<f64>) -> Vertex {
    Vertex { x: coord.x, y: coord.y, z: coord.z }
}

fn line_vertices(line: &LineString<f64>) -> Line {
    line.0.iter().map(vertex).collect()
}

fn rings(polygon: &Polygon<f64>) -> Rings {
    polygon.0.iter().map(line_vertices).collect()
}

/// `LINESTRING(0 0 1, ...)` -> `LINESTRING Z (0 0 1, ...)`, judged by the first coordinate.
/// `None` when the text already carries a tag or the ordinate count says nothing.
fn tag_implicit_dimension(text: &str) -> Option<String> {
    let (keyword, body) = text.split_at(text.find('(')?);
    let keyword = keyword.trim();
    if keyword.is_empty() || keyword.contains(char::is_whitespace) { return None }

    let first = body.trim_start_matches(|c: char| c == '(' || c.is_whitespace());
    let tag = match first[..first.find([',', ')'])?].split_whitespace().count() {
        3 => "Z",
        4 => "ZM",
        _ => return None,
    };
    Some(format!("{keyword} {tag} {body}"))
}

/// Clip long inputs so error messages stay readable.
fn preview(text: &str) -> &str {
    const MAX: usize = 48;
    match text.char_indices().nth(MAX) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
