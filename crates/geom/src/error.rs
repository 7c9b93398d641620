use thiserror::Error;

use crate::Crs;

/// Failures raised while decoding or reprojecting a geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// The text is not valid WKT.
    #[error("malformed WKT: {0}")]
    Malformed(String),

    /// Valid WKT, but a geometry kind road records never carry.
    #[error("unsupported geometry kind: {0}")]
    UnsupportedKind(&'static str),

    /// No transform can be built between the two CRSs.
    #[error("cannot build transform {from} -> {to}: {reason}")]
    UnsupportedCrs { from: Crs, to: Crs, reason: String },

    /// Empty geometries have nothing to reproject.
    #[error("cannot reproject an empty {0}")]
    EmptyGeometry(&'static str),

    /// A vertex fell outside what the transform can handle.
    #[error("failed to transform ({x}, {y}) from {from} to {to}: {reason}")]
    Transform { x: f64, y: f64, from: Crs, to: Crs, reason: String },
}

impl GeomError {
    /// Check if this error comes from the CRS transform rather than from decoding.
    pub fn is_projection(&self) -> bool {
        matches!(self, GeomError::UnsupportedCrs { .. } | GeomError::EmptyGeometry(_) | GeomError::Transform { .. })
    }
}

pub type Result<T> = std::result::Result<T, GeomError>;
