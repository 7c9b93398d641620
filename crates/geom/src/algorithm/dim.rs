use crate::{Geometry, Line, Rings, Vertex};

impl Geometry {
    /// Drop the elevation from every vertex, keeping planar ordinates, vertex order and counts.
    /// Lines in multi-geometries and polygon rings are reduced independently. Idempotent.
    pub fn to_2d(&self) -> Geometry {
        match self {
            Geometry::Point(point) => Geometry::Point(point.map(planar)),
            Geometry::LineString(line) => Geometry::LineString(line_2d(line)),
            Geometry::MultiLineString(lines) => Geometry::MultiLineString(lines.iter().map(|line| line_2d(line)).collect()),
            Geometry::Polygon(rings) => Geometry::Polygon(rings_2d(rings)),
            Geometry::MultiPolygon(polygons) => Geometry::MultiPolygon(polygons.iter().map(|rings| rings_2d(rings)).collect()),
        }
    }
}

/// Free-function form of [`Geometry::to_2d`].
#[inline]
pub fn to_2d(geom: &Geometry) -> Geometry { geom.to_2d() }

#[inline]
fn planar(vertex: Vertex) -> Vertex { Vertex::new(vertex.x, vertex.y) }

fn line_2d(line: &[Vertex]) -> Line {
    line.iter().copied().map(planar).collect()
}

fn rings_2d(rings: &[Line]) -> Rings {
    rings.iter().map(|ring| line_2d(ring)).collect()
}
