mod dim;
mod proj;

pub use dim::to_2d;
pub use proj::{reproject, Reprojector};
