#![doc = "Street works impact map: WKT road segments in, styled WGS84 features out"]
mod config;
mod error;
mod feature;
mod record;
mod render;
mod source;
mod style;
mod view;

pub use impactmap_geom as geom;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use record::{AttrValue, RawRecord};

#[doc(inline)]
pub use feature::{build, build_with, ProjectedFeature};

#[doc(inline)]
pub use style::{
    encode, encode_categorical, encode_field, Categorical, CategoryLegend, Channel, Choropleth, ColorDomain,
    LegendDescriptor, Palette, Rgb, ScoreField, StyleDescriptor, StyleRanges,
};

#[doc(inline)]
pub use view::{bounds, BoundingBox};

#[doc(inline)]
pub use source::{ColumnMap, DataSource, FrameSource, MemorySource};

#[doc(inline)]
pub use config::StyleConfig;

#[doc(inline)]
pub use render::{CategoryFilter, Legend, MapFrame, RenderedFeature, Renderer, Selection, TooltipLine, TooltipTemplate};
