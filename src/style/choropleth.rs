use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    feature::ProjectedFeature,
    style::{Palette, Rgb},
};

pub const DEFAULT_WEIGHT: f64 = 3.0;
pub const DEFAULT_OPACITY: f64 = 0.7;
pub const DEFAULT_TITLE: &str = "Total Impact Score";

/// How a visual channel responds to the normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Channel {
    /// Same value for every feature.
    Fixed(f64),
    /// `min + t * (max - min)`.
    Linear { min: f64, max: f64 },
}

impl Channel {
    #[inline]
    pub fn value(&self, t: f64) -> f64 {
        match *self {
            Channel::Fixed(value) => value,
            Channel::Linear { min, max } => min + t * (max - min),
        }
    }
}

/// Weight and opacity behaviour of an encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleRanges {
    pub weight: Channel,
    pub opacity: Channel,
}

impl Default for StyleRanges {
    fn default() -> Self {
        Self { weight: Channel::Fixed(DEFAULT_WEIGHT), opacity: Channel::Fixed(DEFAULT_OPACITY) }
    }
}

/// Which numeric value of a feature drives the color scale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScoreField {
    #[default]
    Score,
    /// A numeric secondary attribute; features lacking it are skipped.
    Attribute(String),
}

impl ScoreField {
    pub fn value_of(&self, feature: &ProjectedFeature) -> Option<f64> {
        match self {
            ScoreField::Score => Some(feature.score()),
            ScoreField::Attribute(key) => feature.attribute(key).and_then(|value| value.as_number()),
        }
    }
}

/// Score range of the features being drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorDomain {
    pub min: f64,
    pub max: f64,
}

impl ColorDomain {
    /// Min/max over the finite values, or `None` if there are none.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter()
            .filter(|value| value.is_finite())
            .fold(None, |domain, value| Some(match domain {
                None => ColorDomain { min: value, max: value },
                Some(ColorDomain { min, max }) => ColorDomain { min: min.min(value), max: max.max(value) },
            }))
    }

    #[inline] pub fn is_degenerate(&self) -> bool { self.min == self.max }

    /// Position of `value` in the domain, clamped to [0, 1]; 0 when the domain is a single point.
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        if self.is_degenerate() { return 0.0 }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Draw style of one feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleDescriptor {
    pub color: Rgb,
    pub weight: f64,
    pub opacity: f64,
}

impl Default for StyleDescriptor {
    fn default() -> Self {
        Self { color: Rgb::GRAY, weight: DEFAULT_WEIGHT, opacity: DEFAULT_OPACITY }
    }
}

/// Color scale legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendDescriptor {
    pub palette: Palette,
    pub min: f64,
    pub max: f64,
    pub caption: String,
}

/// Styles keyed by feature id, plus the legend that explains them.
#[derive(Debug, Clone)]
pub struct Choropleth {
    styles: AHashMap<String, StyleDescriptor>,
    domain: ColorDomain,
    legend: LegendDescriptor,
}

impl Choropleth {
    #[inline] pub fn style(&self, id: &str) -> Option<&StyleDescriptor> { self.styles.get(id) }

    #[inline] pub fn styles(&self) -> &AHashMap<String, StyleDescriptor> { &self.styles }

    #[inline] pub fn domain(&self) -> ColorDomain { self.domain }

    #[inline] pub fn legend(&self) -> &LegendDescriptor { &self.legend }

    #[inline] pub fn into_parts(self) -> (AHashMap<String, StyleDescriptor>, LegendDescriptor) { (self.styles, self.legend) }
}

/// Encode the primary score with the default legend title.
pub fn encode(features: &[ProjectedFeature], palette: &Palette, ranges: &StyleRanges) -> Result<Choropleth> {
    encode_field(features, &ScoreField::Score, palette, ranges, DEFAULT_TITLE)
}

/// Encode `field` over exactly the given features: the domain is local to what is drawn.
///
/// Features whose value is missing or non-finite get no style and are reported with a warning.
pub fn encode_field(
    features: &[ProjectedFeature],
    field: &ScoreField,
    palette: &Palette,
    ranges: &StyleRanges,
    title: &str,
) -> Result<Choropleth> {
    if palette.is_empty() { return Err(Error::InvalidPalette("palette has no colors".into())) }

    let values = features.iter()
        .filter_map(|feature| match field.value_of(feature) {
            Some(value) if value.is_finite() => Some((feature, value)),
            other => {
                let err = Error::NonFiniteScore { id: feature.id().to_string(), score: other.unwrap_or(f64::NAN) };
                warn!(id = feature.id(), ?field, %err, "skipping feature");
                None
            }
        })
        .collect::<Vec<_>>();

    let domain = ColorDomain::from_values(values.iter().map(|&(_, value)| value))
        .ok_or(Error::EmptyInput("no features with a finite score to encode"))?;

    let mut styles = AHashMap::with_capacity(values.len());
    for (feature, value) in values {
        let t = domain.normalize(value);
        let style = StyleDescriptor {
            color: palette.sample(t),
            weight: ranges.weight.value(t),
            opacity: ranges.opacity.value(t),
        };
        if styles.contains_key(feature.id()) {
            warn!(id = feature.id(), "duplicate feature id, keeping the first style");
            continue
        }
        styles.insert(feature.id().to_string(), style);
    }

    debug!(styled = styles.len(), min = domain.min, max = domain.max, "encoded choropleth");

    Ok(Choropleth {
        styles,
        domain,
        legend: LegendDescriptor {
            palette: palette.clone(),
            min: domain.min,
            max: domain.max,
            caption: format!("{title} (Range: {:.2} - {:.2})", domain.min, domain.max),
        },
    })
}
