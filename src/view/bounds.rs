use geo::{BoundingRect, Coord, Rect};
use serde::Serialize;

use crate::{error::{Error, Result}, feature::ProjectedFeature};

/// Axis-aligned lon/lat envelope used to frame the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Envelope from a `geo` rectangle whose x is longitude and y latitude.
    pub fn from_rect(rect: Rect<f64>) -> Self {
        Self { min_lat: rect.min().y, min_lon: rect.min().x, max_lat: rect.max().y, max_lon: rect.max().x }
    }

    /// (lat, lon) of the box center.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        ((self.min_lat + self.max_lat) / 2.0, (self.min_lon + self.max_lon) / 2.0)
    }

    /// A box with no area; the host pads it before framing.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.min_lat == self.max_lat || self.min_lon == self.max_lon
    }
}

/// Compute the envelope of every vertex of every feature.
pub fn bounds(features: &[ProjectedFeature]) -> Result<BoundingBox> {
    features.iter()
        .filter_map(|feature| feature.geometry().to_geo().bounding_rect())
        .reduce(|a, b| Rect::new(
            Coord {
                x: a.min().x.min(b.min().x),
                y: a.min().y.min(b.min().y),
            },
            Coord {
                x: a.max().x.max(b.max().x),
                y: a.max().y.max(b.max().y),
            }
        ))
        .map(BoundingBox::from_rect)
        .ok_or(Error::EmptyInput("no features to frame"))
}

#[cfg(test)]
mod tests {
    use impactmap_geom::{Crs, Geometry, Shape, Vertex};

    use super::*;

    fn feature(id: &str, geometry: Geometry) -> ProjectedFeature {
        ProjectedFeature::new(id, id, "Camden", Shape::new(geometry, Crs::WGS84), 1.0).unwrap()
    }

    #[test]
    fn empty_is_an_error() {
        assert!(matches!(bounds(&[]), Err(Error::EmptyInput(_))));
    }

    #[test]
    fn envelope_covers_all_vertices() {
        let features = [
            feature("1", Geometry::LineString(vec![Vertex::new(-0.13, 51.50), Vertex::new(-0.12, 51.51)])),
            feature("2", Geometry::MultiLineString(vec![
                vec![Vertex::new(-0.20, 51.49), Vertex::new(-0.15, 51.52)],
                vec![Vertex::new(-0.05, 51.47)],
            ])),
        ];
        let bbox = bounds(&features).unwrap();
        assert_eq!(bbox, BoundingBox { min_lat: 51.47, min_lon: -0.20, max_lat: 51.52, max_lon: -0.05 });
        assert!(!bbox.is_degenerate());
    }

    #[test]
    fn single_point_is_zero_area() {
        let bbox = bounds(&[feature("1", Geometry::Point(Some(Vertex::new(-1.8, 51.07))))]).unwrap();
        assert!(bbox.is_degenerate());
        assert_eq!(bbox.center(), (51.07, -1.8));
    }
}
