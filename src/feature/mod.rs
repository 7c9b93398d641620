mod build;
mod feature;

pub use build::{build, build_with};
pub use feature::ProjectedFeature;
