use serde::{Deserialize, Serialize};

use crate::feature::ProjectedFeature;

/// Keep only features whose categorical attribute is one of `values`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter {
    pub attribute: String,
    pub values: Vec<String>,
}

/// What the user currently has selected. The color domain is computed over what survives it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Highway authority; `None` shows every group.
    pub group: Option<String>,
    pub category: Option<CategoryFilter>,
}

impl Selection {
    /// Everything.
    pub fn all() -> Self { Self::default() }

    /// A single group.
    pub fn group(name: impl Into<String>) -> Self {
        Self { group: Some(name.into()), category: None }
    }

    pub fn with_category<S: Into<String>>(mut self, attribute: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self {
        self.category = Some(CategoryFilter {
            attribute: attribute.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn matches(&self, feature: &ProjectedFeature) -> bool {
        let in_group = self.group.as_deref().is_none_or(|group| feature.group_key() == group);
        let in_category = self.category.as_ref().is_none_or(|filter| {
            feature.attribute(&filter.attribute)
                .is_some_and(|value| filter.values.iter().any(|allowed| *allowed == value.to_string()))
        });
        in_group && in_category
    }
}
