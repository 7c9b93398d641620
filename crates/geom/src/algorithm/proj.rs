use proj4rs::{proj::Proj as Proj4, transform::transform};

use crate::{Crs, Geometry, GeomError, Result, Shape, Vertex};

/// A prepared transform between two CRSs.
/// Building it is the expensive, fallible part; reprojecting with it only fails on bad vertices.
pub struct Reprojector {
    from: Crs,
    to: Crs,
    source: Proj4,
    target: Proj4,
}

impl Reprojector {
    /// Build the PROJ.4 pair for `from -> to`.
    pub fn new(from: Crs, to: Crs) -> Result<Self> {
        let build = |crs: Crs| -> Result<Proj4> {
            let proj_string = crs.proj4().ok_or_else(|| GeomError::UnsupportedCrs {
                from, to, reason: format!("no definition for {crs}"),
            })?;
            Proj4::from_proj_string(proj_string).map_err(|err| GeomError::UnsupportedCrs {
                from, to, reason: format!("failed to build PROJ.4 for {crs}: {err}"),
            })
        };

        Ok(Self { from, to, source: build(from)?, target: build(to)? })
    }

    /// British National Grid metres to WGS84 degrees, the pair road records need.
    pub fn national_grid_to_wgs84() -> Result<Self> {
        Self::new(Crs::BRITISH_NATIONAL_GRID, Crs::WGS84)
    }

    #[inline] pub fn from(&self) -> Crs { self.from }

    #[inline] pub fn to(&self) -> Crs { self.to }

    /// Remap every vertex into the target CRS. Structure, order and counts are untouched,
    /// and any elevation passes through as is.
    pub fn reproject(&self, geometry: &Geometry) -> Result<Shape> {
        if geometry.is_empty() { return Err(GeomError::EmptyGeometry(geometry.kind())) }

        let projected = if self.from == self.to {
            geometry.clone()
        } else {
            geometry.try_map_vertices(|vertex| self.transform_vertex(vertex))?
        };

        Ok(Shape::new(projected, self.to))
    }

    /// Geographic coordinates go in and come out as degrees; proj4rs wants radians for them.
    fn transform_vertex(&self, vertex: &Vertex) -> Result<Vertex> {
        let mut point = if self.from.is_geographic() {
            (vertex.x.to_radians(), vertex.y.to_radians(), 0.0)
        } else {
            (vertex.x, vertex.y, 0.0)
        };

        let failed = |reason: String| GeomError::Transform {
            x: vertex.x, y: vertex.y, from: self.from, to: self.to, reason,
        };

        transform(&self.source, &self.target, &mut point).map_err(|err| failed(err.to_string()))?;
        if !point.0.is_finite() || !point.1.is_finite() {
            return Err(failed("non-finite result".into()))
        }

        let (x, y) = if self.to.is_geographic() {
            (point.0.to_degrees(), point.1.to_degrees())
        } else {
            (point.0, point.1)
        };

        Ok(Vertex { x, y, z: vertex.z })
    }
}

/// Reproject a single geometry, building the transform on the spot.
pub fn reproject(geometry: &Geometry, from: Crs, to: Crs) -> Result<Shape> {
    Reprojector::new(from, to)?.reproject(geometry)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn national_grid_point_lands_in_central_london() {
        let reprojector = Reprojector::national_grid_to_wgs84().unwrap();
        let shape = reprojector.reproject(&Geometry::Point(Some(Vertex::new(530000.0, 180000.0)))).unwrap();
        let Geometry::Point(Some(v)) = shape.geometry() else { panic!("expected point") };
        assert_abs_diff_eq!(v.x, -0.12835, epsilon = 1e-3);
        assert_abs_diff_eq!(v.y, 51.50399, epsilon = 1e-3);
        assert_eq!(shape.crs(), Crs::WGS84);
    }

    #[test]
    fn grid_origin_maps_near_true_origin() {
        // False origin of the grid sits at 49N 2W.
        let shape = reproject(&Geometry::Point(Some(Vertex::new(400000.0, -100000.0))), Crs::BRITISH_NATIONAL_GRID, Crs::WGS84).unwrap();
        let Geometry::Point(Some(v)) = shape.geometry() else { panic!("expected point") };
        assert_abs_diff_eq!(v.x, -2.0, epsilon = 5e-3);
        assert_abs_diff_eq!(v.y, 49.0, epsilon = 5e-3);
    }

    #[test]
    fn unknown_crs_fails_to_build() {
        let err = Reprojector::new(Crs::epsg(2154), Crs::WGS84).err().unwrap();
        assert!(matches!(err, GeomError::UnsupportedCrs { .. }));
        assert!(err.is_projection());
    }

    #[test]
    fn empty_geometry_is_refused() {
        let reprojector = Reprojector::national_grid_to_wgs84().unwrap();
        assert_eq!(
            reprojector.reproject(&Geometry::LineString(Vec::new())),
            Err(GeomError::EmptyGeometry("LineString")),
        );
    }

    #[test]
    fn identity_pair_returns_input() {
        let reprojector = Reprojector::new(Crs::WGS84, Crs::WGS84).unwrap();
        let geom = Geometry::LineString(vec![Vertex::new(-0.1, 51.5), Vertex::new(-0.2, 51.6)]);
        assert_eq!(reprojector.reproject(&geom).unwrap().into_geometry(), geom);
    }
}
