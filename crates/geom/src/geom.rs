use geo::{Coord, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

use crate::Crs;

/// A single vertex in the units of its CRS, with an optional elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Vertex {
    #[inline] pub fn new(x: f64, y: f64) -> Self { Self { x, y, z: None } }

    #[inline] pub fn with_z(x: f64, y: f64, z: f64) -> Self { Self { x, y, z: Some(z) } }

    /// Check if the vertex carries a third ordinate.
    #[inline] pub fn is_3d(&self) -> bool { self.z.is_some() }
}

/// An ordered run of vertices (a line or a polygon ring).
pub type Line = Vec<Vertex>;

/// Polygon rings: the exterior first, then any holes.
pub type Rings = Vec<Line>;

/// The closed set of geometry kinds that road records may carry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// `None` for `POINT EMPTY`.
    Point(Option<Vertex>),
    LineString(Line),
    MultiLineString(Vec<Line>),
    Polygon(Rings),
    MultiPolygon(Vec<Rings>),
}

impl Geometry {
    /// WKT-style name of the geometry kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }

    /// Total number of vertices across all components.
    pub fn num_vertices(&self) -> usize { self.vertices().count() }

    /// A geometry is empty when it holds no vertex at all.
    pub fn is_empty(&self) -> bool { self.vertices().next().is_none() }

    /// Check if any vertex carries a third ordinate.
    pub fn has_z(&self) -> bool { self.vertices().any(Vertex::is_3d) }

    /// Iterate over every vertex in storage order.
    pub fn vertices(&self) -> Box<dyn Iterator<Item = &Vertex> + '_> {
        match self {
            Geometry::Point(point) => Box::new(point.iter()),
            Geometry::LineString(line) => Box::new(line.iter()),
            Geometry::MultiLineString(lines) => Box::new(lines.iter().flatten()),
            Geometry::Polygon(rings) => Box::new(rings.iter().flatten()),
            Geometry::MultiPolygon(polygons) => Box::new(polygons.iter().flatten().flatten()),
        }
    }

    /// Rebuild the geometry with every vertex passed through `f`, keeping structure intact.
    /// Stops at the first error.
    pub fn try_map_vertices<E>(&self, mut f: impl FnMut(&Vertex) -> Result<Vertex, E>) -> Result<Geometry, E> {
        fn map_line<E>(line: &[Vertex], f: &mut impl FnMut(&Vertex) -> Result<Vertex, E>) -> Result<Line, E> {
            line.iter().map(|vertex| f(vertex)).collect()
        }

        fn map_rings<E>(rings: &[Line], f: &mut impl FnMut(&Vertex) -> Result<Vertex, E>) -> Result<Rings, E> {
            rings.iter().map(|ring| map_line(ring, f)).collect()
        }

        Ok(match self {
            Geometry::Point(point) => Geometry::Point(point.as_ref().map(&mut f).transpose()?),
            Geometry::LineString(line) => Geometry::LineString(map_line(line, &mut f)?),
            Geometry::MultiLineString(lines) => Geometry::MultiLineString(
                lines.iter().map(|line| map_line(line, &mut f)).collect::<Result<_, _>>()?
            ),
            Geometry::Polygon(rings) => Geometry::Polygon(map_rings(rings, &mut f)?),
            Geometry::MultiPolygon(polygons) => Geometry::MultiPolygon(
                polygons.iter().map(|rings| map_rings(rings, &mut f)).collect::<Result<_, _>>()?
            ),
        })
    }

    /// Convert to a planar `geo` geometry, ignoring any elevation.
    /// An empty point becomes an empty `MultiPoint`, since `geo` has no empty point.
    pub fn to_geo(&self) -> geo::Geometry<f64> {
        fn line_string(line: &Line) -> LineString<f64> {
            line.iter().map(|v| Coord { x: v.x, y: v.y }).collect()
        }

        fn polygon(rings: &Rings) -> Polygon<f64> {
            let mut rings = rings.iter().map(line_string);
            let exterior = rings.next().unwrap_or_else(|| LineString::new(Vec::new()));
            Polygon::new(exterior, rings.collect())
        }

        match self {
            Geometry::Point(Some(v)) => geo::Geometry::Point(Point::new(v.x, v.y)),
            Geometry::Point(None) => geo::Geometry::MultiPoint(MultiPoint::new(Vec::new())),
            Geometry::LineString(line) => geo::Geometry::LineString(line_string(line)),
            Geometry::MultiLineString(lines) => geo::Geometry::MultiLineString(
                MultiLineString::new(lines.iter().map(line_string).collect())
            ),
            Geometry::Polygon(rings) => geo::Geometry::Polygon(polygon(rings)),
            Geometry::MultiPolygon(polygons) => geo::Geometry::MultiPolygon(
                MultiPolygon::new(polygons.iter().map(polygon).collect())
            ),
        }
    }
}

/// A geometry together with the CRS its coordinates are expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: Geometry,
    crs: Crs,
}

impl Shape {
    pub fn new(geometry: Geometry, crs: Crs) -> Self { Self { geometry, crs } }

    #[inline] pub fn geometry(&self) -> &Geometry { &self.geometry }

    #[inline] pub fn crs(&self) -> Crs { self.crs }

    #[inline] pub fn into_geometry(self) -> Geometry { self.geometry }
}
