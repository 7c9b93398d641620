mod categorical;
mod choropleth;
mod color;
mod palette;

pub use categorical::{encode_categorical, Categorical, CategoryLegend};
pub use choropleth::{
    encode, encode_field, Channel, Choropleth, ColorDomain, LegendDescriptor, ScoreField, StyleDescriptor,
    StyleRanges, DEFAULT_OPACITY, DEFAULT_TITLE, DEFAULT_WEIGHT,
};
pub use color::Rgb;
pub use palette::Palette;
