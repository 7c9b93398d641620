use impactmap_geom::GeomError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Failures of a render pass.
///
/// Per-record problems (`MalformedGeometry`, `EmptyGeometry`, `NonFiniteScore`) are logged and the
/// record skipped while building; the other variants abort the pass.
#[derive(Error, Debug)]
pub enum Error {
    /// The geometry text of a record could not be decoded.
    #[error("malformed geometry: {0}")]
    MalformedGeometry(#[source] GeomError),

    /// The CRS transform could not be built or applied.
    #[error("projection failed: {0}")]
    Projection(#[source] GeomError),

    /// There is nothing to work on.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// A feature was given a geometry without vertices.
    #[error("feature {0} has no geometry")]
    EmptyGeometry(String),

    /// A score that cannot be placed on a color scale.
    #[error("non-finite score {score} for feature {id}")]
    NonFiniteScore { id: String, score: f64 },

    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("data frame error: {0}")]
    Frame(#[from] PolarsError),

    #[error("invalid style config: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<GeomError> for Error {
    fn from(err: GeomError) -> Self {
        if err.is_projection() { Error::Projection(err) } else { Error::MalformedGeometry(err) }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
