//! Error types for planimeter
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for planimeter operations
pub type PlanimeterResult<T> = Result<T, PlanimeterError>;

/// Main error type for planimeter operations
#[derive(Error, Debug)]
pub enum PlanimeterError {
    /// A shape was constructed with a NaN or infinite dimension
    #[error("non-finite {dimension} {value} for {shape}")]
    NonFiniteDimension {
        shape: &'static str,
        dimension: &'static str,
        value: f64,
    },

    /// Scene file extension is neither `.toml` nor `.json`
    #[error("unsupported scene format for {path} - expected .toml or .json")]
    UnsupportedSceneFormat { path: PathBuf },

    /// IO error while reading a scene file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML scene parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON scene parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
