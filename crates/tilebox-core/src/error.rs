//! Error types for Tilebox.

use thiserror::Error;

/// Main error type for Tilebox operations.
///
/// The geometry primitives themselves never fail; this covers loading
/// presets and the opt-in validation helpers.
#[derive(Error, Debug)]
pub enum TileboxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
}

impl From<serde_json::Error> for TileboxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for Tilebox operations.
pub type Result<T> = std::result::Result<T, TileboxError>;
