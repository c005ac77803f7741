//! Error types for configuration, map loading and frame output.

use std::path::PathBuf;

use thiserror::Error;

/// Renderer errors
#[derive(Debug, Error)]
pub enum RenderError {
    /// Configuration contract violated
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Map symbol count does not match rows x cols
    #[error("Map size mismatch: expected {expected} cells, got {actual}")]
    MapSize { expected: usize, actual: usize },

    /// Pixel buffer length does not match width x height
    #[error("Buffer size mismatch: expected {expected} pixels, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Output file or directory could not be created
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A frame could not be encoded or written
    #[error("Failed to write frame to {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type for renderer operations
pub type Result<T> = std::result::Result<T, RenderError>;
