use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Plot area collapsed to zero. Layout recovers from this locally; it is
    /// only returned by callers that explicitly ask for a drawable area.
    #[error("degenerate plot geometry: width={width}, height={height}")]
    DegenerateGeometry { width: f64, height: f64 },

    #[error("key `{key}` is not part of the scale domain")]
    UnknownKey { key: String },

    #[error("series `{name}` is not part of the primary domain")]
    UnknownSeries { name: String },

    #[error("query metadata has no primary dimension descriptor")]
    MissingFieldMetadata,

    #[error("duplicate domain key `{key}`")]
    DuplicateKey { key: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
