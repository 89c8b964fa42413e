// crates/atlas-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading tables, parsing geography or
/// interpreting user input.
///
/// Callers on the browser side rarely surface these: every failure path
/// there substitutes a built-in fallback. The server maps them to HTTP
/// status codes.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid GeoJSON: {0}")]
    InvalidGeoJson(String),

    #[error("unknown panel tab: {0:?}")]
    UnknownTab(String),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
