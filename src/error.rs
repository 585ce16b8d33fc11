//! Error types for the editor's fallible edges.
//!
//! Pointer handling itself never fails: a missing element makes a handler a
//! no-op. Errors only come from loading settings and reading image files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while setting up an editor
#[derive(Error, Debug)]
pub enum HotAreaError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings JSON could not be parsed or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image file could not be decoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Image has a zero dimension and cannot host hot areas
    #[error("Empty image: {}", path.display())]
    EmptyImage { path: PathBuf },
}

/// Result type alias for editor setup operations
pub type HotAreaResult<T> = Result<T, HotAreaError>;
