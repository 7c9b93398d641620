use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// A secondary attribute value: a count or a categorical tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Number(f64),
    Text(String),
}

impl AttrValue {
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self { AttrValue::Number(n) => Some(*n), AttrValue::Text(_) => None }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self { AttrValue::Text(s) => Some(s), AttrValue::Number(_) => None }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(n) => write!(f, "{n}"),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self { AttrValue::Number(value) }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self { AttrValue::Text(value.to_string()) }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self { AttrValue::Text(value) }
}

/// One row handed over by the data source, geometry still as WKT in EPSG:27700.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Unique street reference number.
    pub id: String,
    /// Street name.
    pub label: String,
    /// Highway authority the street belongs to.
    pub group_key: String,
    pub geometry_wkt: Option<String>,
    pub score: f64,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttrValue>,
}

impl RawRecord {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        group_key: impl Into<String>,
        geometry_wkt: impl Into<String>,
        score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            group_key: group_key.into(),
            geometry_wkt: Some(geometry_wkt.into()),
            score,
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Clear the geometry, as a data source does for rows without one.
    pub fn without_geometry(mut self) -> Self {
        self.geometry_wkt = None;
        self
    }
}
