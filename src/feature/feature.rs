use std::collections::BTreeMap;

use impactmap_geom::{Crs, Geometry, Shape};

use crate::{error::{Error, Result}, record::AttrValue};

/// A road segment ready for drawing: attributes plus 2D geometry in the map CRS.
/// The geometry is never empty and the score is always finite.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedFeature {
    id: String,
    label: String,
    group_key: String,
    shape: Shape,
    score: f64,
    attributes: BTreeMap<String, AttrValue>,
}

impl ProjectedFeature {
    /// Construct a feature, refusing empty geometries and non-finite scores.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        group_key: impl Into<String>,
        shape: Shape,
        score: f64,
    ) -> Result<Self> {
        let id = id.into();
        if shape.geometry().is_empty() { return Err(Error::EmptyGeometry(id)) }
        if !score.is_finite() { return Err(Error::NonFiniteScore { id, score }) }

        let crs = shape.crs();
        Ok(Self {
            id,
            label: label.into(),
            group_key: group_key.into(),
            shape: Shape::new(shape.into_geometry().to_2d(), crs),
            score,
            attributes: BTreeMap::new(),
        })
    }

    /// Attach secondary attributes (counts, categorical tags).
    pub fn with_attributes(mut self, attributes: BTreeMap<String, AttrValue>) -> Self {
        self.attributes = attributes;
        self
    }

    #[inline] pub fn id(&self) -> &str { &self.id }

    #[inline] pub fn label(&self) -> &str { &self.label }

    #[inline] pub fn group_key(&self) -> &str { &self.group_key }

    #[inline] pub fn shape(&self) -> &Shape { &self.shape }

    #[inline] pub fn geometry(&self) -> &Geometry { self.shape.geometry() }

    #[inline] pub fn crs(&self) -> Crs { self.shape.crs() }

    #[inline] pub fn score(&self) -> f64 { self.score }

    #[inline] pub fn attributes(&self) -> &BTreeMap<String, AttrValue> { &self.attributes }

    #[inline] pub fn attribute(&self, key: &str) -> Option<&AttrValue> { self.attributes.get(key) }
}

#[cfg(test)]
mod tests {
    use impactmap_geom::{Crs, Geometry, Shape, Vertex};

    use super::*;

    fn segment() -> Shape {
        Shape::new(Geometry::LineString(vec![Vertex::new(-0.1, 51.5), Vertex::new(-0.11, 51.51)]), Crs::WGS84)
    }

    #[test]
    fn refuses_empty_geometry() {
        let empty = Shape::new(Geometry::LineString(Vec::new()), Crs::WGS84);
        let err = ProjectedFeature::new("1", "A Road", "Camden", empty, 1.0).unwrap_err();
        assert!(matches!(err, Error::EmptyGeometry(id) if id == "1"));
    }

    #[test]
    fn refuses_non_finite_score() {
        for score in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ProjectedFeature::new("2", "B Road", "Camden", segment(), score).unwrap_err();
            assert!(matches!(err, Error::NonFiniteScore { .. }));
        }
    }

    #[test]
    fn accepts_negative_and_zero_scores() {
        assert!(ProjectedFeature::new("3", "C Road", "Camden", segment(), 0.0).is_ok());
        assert!(ProjectedFeature::new("4", "D Road", "Camden", segment(), -2.5).is_ok());
    }

    #[test]
    fn geometry_is_stored_planar() {
        let shape = Shape::new(Geometry::Point(Some(Vertex::with_z(-0.1, 51.5, 20.0))), Crs::WGS84);
        let feature = ProjectedFeature::new("5", "E Road", "Camden", shape, 1.0).unwrap();
        assert!(!feature.geometry().has_z());
        assert_eq!(feature.crs(), Crs::WGS84);
    }
}
