use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    render::TooltipTemplate,
    style::{Channel, Palette, ScoreField, StyleRanges, DEFAULT_OPACITY, DEFAULT_TITLE, DEFAULT_WEIGHT},
};

/// Everything that decides how a render pass looks. Every field has a default,
/// so a config file only needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Ordered color stops for the score ramp.
    pub palette: Palette,
    pub weight: Channel,
    pub opacity: Channel,
    /// Legend caption prefix.
    pub title: String,
    /// Numeric attribute to color by instead of the primary score.
    pub score_attribute: Option<String>,
    /// Color by this categorical attribute instead of a numeric ramp.
    pub category: Option<String>,
    pub category_palette: Palette,
    pub tooltip: TooltipTemplate,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            palette: Palette::impact(),
            weight: Channel::Fixed(DEFAULT_WEIGHT),
            opacity: Channel::Fixed(DEFAULT_OPACITY),
            title: DEFAULT_TITLE.to_string(),
            score_attribute: None,
            category: None,
            category_palette: Palette::categorical(),
            tooltip: TooltipTemplate::default(),
        }
    }
}

impl StyleConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    #[inline]
    pub fn ranges(&self) -> StyleRanges {
        StyleRanges { weight: self.weight, opacity: self.opacity }
    }

    pub fn score_field(&self) -> ScoreField {
        match &self.score_attribute {
            Some(key) => ScoreField::Attribute(key.clone()),
            None => ScoreField::Score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, style::Rgb};

    #[test]
    fn empty_object_is_default() {
        assert_eq!(StyleConfig::from_json_str("{}").unwrap(), StyleConfig::default());
    }

    #[test]
    fn partial_config_overrides_fields() {
        let config = StyleConfig::from_json_str(r##"{
            "palette": ["#00ff00", "#ff0000"],
            "weight": { "min": 2, "max": 8 },
            "opacity": 0.9,
            "title": "Works Count",
            "score_attribute": "works_count"
        }"##).unwrap();

        assert_eq!(config.palette.stops(), &[Rgb::new(0, 255, 0), Rgb::new(255, 0, 0)]);
        assert_eq!(config.ranges(), StyleRanges {
            weight: Channel::Linear { min: 2.0, max: 8.0 },
            opacity: Channel::Fixed(0.9),
        });
        assert_eq!(config.score_field(), ScoreField::Attribute("works_count".into()));
        assert_eq!(config.tooltip, TooltipTemplate::default());
    }

    #[test]
    fn bad_palette_is_a_config_error() {
        assert!(matches!(StyleConfig::from_json_str(r#"{"palette": []}"#), Err(Error::Config(_))));
        assert!(matches!(StyleConfig::from_json_str(r#"{"palette": ["green"]}"#), Err(Error::Config(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = StyleConfig::from_json_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
