use impactmap_geom::{Geometry, Line, Vertex};
use serde_json::{json, Map, Value};

use crate::{
    feature::ProjectedFeature,
    style::{CategoryLegend, LegendDescriptor, StyleDescriptor},
    view::BoundingBox,
};

/// A feature ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFeature {
    pub feature: ProjectedFeature,
    pub style: StyleDescriptor,
    pub tooltip: String,
}

/// Legend matching whichever encoding produced the styles.
#[derive(Debug, Clone, PartialEq)]
pub enum Legend {
    Continuous(LegendDescriptor),
    Categorical(CategoryLegend),
}

impl Legend {
    pub fn caption(&self) -> &str {
        match self {
            Legend::Continuous(legend) => &legend.caption,
            Legend::Categorical(legend) => &legend.attribute,
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Legend::Continuous(legend) => json!({
                "type": "continuous",
                "caption": legend.caption,
                "min": legend.min,
                "max": legend.max,
                "colors": legend.palette.stops().iter().map(|c| c.to_hex()).collect::<Vec<_>>(),
            }),
            Legend::Categorical(legend) => json!({
                "type": "categorical",
                "caption": legend.attribute,
                "entries": legend.entries.iter()
                    .map(|(value, color)| json!({ "value": value, "color": color.to_hex() }))
                    .collect::<Vec<_>>(),
            }),
        }
    }
}

/// Output of one render pass: what the host draws, how to explain it, and where to look.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFrame {
    features: Vec<RenderedFeature>,
    legend: Legend,
    bounds: BoundingBox,
    total_score: f64,
}

impl MapFrame {
    pub(crate) fn new(features: Vec<RenderedFeature>, legend: Legend, bounds: BoundingBox) -> Self {
        let total_score = features.iter().map(|rendered| rendered.feature.score()).sum();
        Self { features, legend, bounds, total_score }
    }

    #[inline] pub fn features(&self) -> &[RenderedFeature] { &self.features }

    #[inline] pub fn legend(&self) -> &Legend { &self.legend }

    #[inline] pub fn bounds(&self) -> BoundingBox { self.bounds }

    /// Sum of the drawn features' scores.
    #[inline] pub fn total_score(&self) -> f64 { self.total_score }

    /// Export as a GeoJSON FeatureCollection with simplestyle stroke properties.
    /// The legend and total score ride along as foreign members.
    pub fn to_geojson(&self) -> Value {
        let features = self.features.iter()
            .map(|rendered| {
                let mut properties = Map::new();
                properties.insert("id".into(), json!(rendered.feature.id()));
                properties.insert("label".into(), json!(rendered.feature.label()));
                properties.insert("group".into(), json!(rendered.feature.group_key()));
                properties.insert("score".into(), json!(rendered.feature.score()));
                properties.insert("tooltip".into(), json!(rendered.tooltip));
                properties.insert("stroke".into(), json!(rendered.style.color.to_hex()));
                properties.insert("stroke-width".into(), json!(rendered.style.weight));
                properties.insert("stroke-opacity".into(), json!(rendered.style.opacity));

                json!({
                    "type": "Feature",
                    "id": rendered.feature.id(),
                    "geometry": geometry_to_json(rendered.feature.geometry()),
                    "properties": Value::Object(properties),
                })
            })
            .collect::<Vec<_>>();

        json!({
            "type": "FeatureCollection",
            "bbox": [self.bounds.min_lon, self.bounds.min_lat, self.bounds.max_lon, self.bounds.max_lat],
            "features": features,
            "legend": self.legend.to_json(),
            "total_score": self.total_score,
        })
    }
}

fn position(vertex: &Vertex) -> Value { json!([vertex.x, vertex.y]) }

fn line(line: &Line) -> Value { Value::Array(line.iter().map(position).collect()) }

fn rings(rings: &[Line]) -> Value { Value::Array(rings.iter().map(line).collect()) }

fn geometry_to_json(geometry: &Geometry) -> Value {
    match geometry {
        Geometry::Point(None) => Value::Null,
        Geometry::Point(Some(vertex)) => json!({ "type": "Point", "coordinates": position(vertex) }),
        Geometry::LineString(points) => json!({ "type": "LineString", "coordinates": line(points) }),
        Geometry::MultiLineString(lines) => json!({
            "type": "MultiLineString",
            "coordinates": lines.iter().map(line).collect::<Vec<_>>(),
        }),
        Geometry::Polygon(polygon) => json!({ "type": "Polygon", "coordinates": rings(polygon) }),
        Geometry::MultiPolygon(polygons) => json!({
            "type": "MultiPolygon",
            "coordinates": polygons.iter().map(|polygon| rings(polygon)).collect::<Vec<_>>(),
        }),
    }
}
