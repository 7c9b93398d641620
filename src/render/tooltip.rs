use serde::{Deserialize, Serialize};

use crate::feature::ProjectedFeature;

/// An extra `caption: value` line taken from a secondary attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipLine {
    pub caption: String,
    pub attribute: String,
}

/// HTML tooltip layout shown when hovering a street.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipTemplate {
    pub id_caption: String,
    pub label_caption: String,
    pub score_caption: String,
    pub extra: Vec<TooltipLine>,
}

impl Default for TooltipTemplate {
    fn default() -> Self {
        Self {
            id_caption: "USRN".into(),
            label_caption: "Street Name".into(),
            score_caption: "Total Impact Score".into(),
            extra: Vec::new(),
        }
    }
}

impl TooltipTemplate {
    /// Lines are joined with `<br>`; missing attributes read `N/A`.
    pub fn render(&self, feature: &ProjectedFeature) -> String {
        let mut out = format!(
            "{}: {}<br>{}: {}<br><strong>{}: {:.2}</strong>",
            self.id_caption, feature.id(),
            self.label_caption, feature.label(),
            self.score_caption, feature.score(),
        );
        for line in &self.extra {
            let value = feature.attribute(&line.attribute)
                .map(|value| value.to_string())
                .unwrap_or_else(|| "N/A".into());
            out.push_str(&format!("<br>{}: {}", line.caption, value));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use impactmap_geom::{Crs, Geometry, Shape, Vertex};

    use super::*;
    use crate::record::AttrValue;

    fn feature() -> ProjectedFeature {
        let shape = Shape::new(Geometry::Point(Some(Vertex::new(-0.1, 51.5))), Crs::WGS84);
        ProjectedFeature::new("8400001", "High Street", "Camden", shape, 12.345).unwrap()
            .with_attributes(BTreeMap::from([("promoter".to_string(), AttrValue::from("Thames Water"))]))
    }

    #[test]
    fn default_layout() {
        assert_eq!(
            TooltipTemplate::default().render(&feature()),
            "USRN: 8400001<br>Street Name: High Street<br><strong>Total Impact Score: 12.35</strong>",
        );
    }

    #[test]
    fn extra_lines_fall_back_to_na() {
        let template = TooltipTemplate {
            extra: vec![
                TooltipLine { caption: "Work Promoter".into(), attribute: "promoter".into() },
                TooltipLine { caption: "TTRO Required".into(), attribute: "is_ttro_required".into() },
            ],
            ..TooltipTemplate::default()
        };
        let text = template.render(&feature());
        assert!(text.ends_with("<br>Work Promoter: Thames Water<br>TTRO Required: N/A"), "{text}");
    }
}
