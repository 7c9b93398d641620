#![doc = "Road geometry decoding, dimensionality normalization and CRS reprojection"]
mod algorithm;
mod crs;
mod error;
mod geom;
mod io;

pub use algorithm::{reproject, to_2d, Reprojector};
pub use crs::Crs;
pub use error::{GeomError, Result};
pub use geom::{Geometry, Line, Rings, Shape, Vertex};
pub use io::decode;
