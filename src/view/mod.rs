mod bounds;

pub use bounds::{bounds, BoundingBox};
