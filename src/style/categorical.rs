use ahash::AHashMap;
use tracing::warn;

use crate::{
    error::{Error, Result},
    feature::ProjectedFeature,
    style::{Palette, Rgb, StyleDescriptor},
};

/// Category -> color pairs in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLegend {
    pub attribute: String,
    pub entries: Vec<(String, Rgb)>,
}

impl CategoryLegend {
    pub fn color_of(&self, value: &str) -> Option<Rgb> {
        self.entries.iter().find(|(name, _)| name == value).map(|&(_, color)| color)
    }
}

/// Styles keyed by feature id for a categorical map.
#[derive(Debug, Clone)]
pub struct Categorical {
    styles: AHashMap<String, StyleDescriptor>,
    legend: CategoryLegend,
}

impl Categorical {
    #[inline] pub fn style(&self, id: &str) -> Option<&StyleDescriptor> { self.styles.get(id) }

    #[inline] pub fn styles(&self) -> &AHashMap<String, StyleDescriptor> { &self.styles }

    #[inline] pub fn legend(&self) -> &CategoryLegend { &self.legend }

    #[inline] pub fn into_parts(self) -> (AHashMap<String, StyleDescriptor>, CategoryLegend) { (self.styles, self.legend) }
}

/// Color features by a categorical attribute.
///
/// Each distinct value takes the next palette color (wrapping); features without the attribute are gray.
pub fn encode_categorical(features: &[ProjectedFeature], attribute: &str, palette: &Palette) -> Result<Categorical> {
    if features.is_empty() { return Err(Error::EmptyInput("no features to encode")) }
    if palette.is_empty() { return Err(Error::InvalidPalette("palette has no colors".into())) }

    let mut entries: Vec<(String, Rgb)> = Vec::new();
    let mut styles = AHashMap::with_capacity(features.len());

    for feature in features {
        let color = match feature.attribute(attribute) {
            Some(value) => {
                let value = value.to_string();
                match entries.iter().find(|(name, _)| *name == value) {
                    Some(&(_, color)) => color,
                    None => {
                        let color = palette.cycle(entries.len());
                        entries.push((value, color));
                        color
                    }
                }
            }
            None => Rgb::GRAY,
        };
        if styles.contains_key(feature.id()) {
            warn!(id = feature.id(), "duplicate feature id, keeping the first style");
            continue
        }
        styles.insert(feature.id().to_string(), StyleDescriptor { color, ..StyleDescriptor::default() });
    }

    Ok(Categorical { styles, legend: CategoryLegend { attribute: attribute.to_string(), entries } })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use impactmap_geom::{Crs, Geometry, Shape, Vertex};

    use super::*;
    use crate::{record::AttrValue, style::{DEFAULT_OPACITY, DEFAULT_WEIGHT}};

    fn feature(id: &str, activity: Option<&str>) -> ProjectedFeature {
        let shape = Shape::new(Geometry::Point(Some(Vertex::new(-1.8, 51.07))), Crs::WGS84);
        let attributes = activity.into_iter()
            .map(|a| ("activity_type".to_string(), AttrValue::from(a)))
            .collect::<BTreeMap<_, _>>();
        ProjectedFeature::new(id, id, "Wiltshire", shape, 1.0).unwrap().with_attributes(attributes)
    }

    #[test]
    fn distinct_values_take_palette_in_first_seen_order() {
        let palette = Palette::categorical();
        let features = [
            feature("1", Some("Remedial")),
            feature("2", Some("Section 58")),
            feature("3", Some("Remedial")),
            feature("4", None),
        ];
        let categorical = encode_categorical(&features, "activity_type", &palette).unwrap();

        assert_eq!(categorical.style("1").unwrap().color, palette.cycle(0));
        assert_eq!(categorical.style("2").unwrap().color, palette.cycle(1));
        assert_eq!(categorical.style("3").unwrap().color, palette.cycle(0));
        assert_eq!(categorical.style("4").unwrap().color, Rgb::GRAY);
        assert_eq!(categorical.legend().entries.len(), 2);
        assert_eq!(categorical.legend().color_of("Section 58"), Some(palette.cycle(1)));

        let style = categorical.style("1").unwrap();
        assert_eq!((style.weight, style.opacity), (DEFAULT_WEIGHT, DEFAULT_OPACITY));
    }

    #[test]
    fn palette_wraps_when_categories_outnumber_colors() {
        let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
        let features = ["a", "b", "c"].map(|v| feature(v, Some(v)));
        let categorical = encode_categorical(&features, "activity_type", &palette).unwrap();
        assert_eq!(categorical.style("c").unwrap().color, categorical.style("a").unwrap().color);
    }

    #[test]
    fn duplicate_id_keeps_first_style() {
        let palette = Palette::categorical();
        let features = [feature("1", Some("Remedial")), feature("1", Some("Section 58"))];
        let categorical = encode_categorical(&features, "activity_type", &palette).unwrap();
        assert_eq!(categorical.styles().len(), 1);
        assert_eq!(categorical.style("1").unwrap().color, palette.cycle(0));
    }

    #[test]
    fn empty_features_is_empty_input() {
        assert!(matches!(encode_categorical(&[], "activity_type", &Palette::categorical()), Err(Error::EmptyInput(_))));
    }
}
