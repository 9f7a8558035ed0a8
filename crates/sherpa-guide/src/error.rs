//! Error types for loading guide documents

use thiserror::Error;

/// Result type for guide operations
pub type Result<T> = std::result::Result<T, GuideError>;

/// Errors raised while reading a guide document from disk.
///
/// Parsing itself never fails; these only surface inside the loaders, which
/// log them and fall back to an empty document.
#[derive(Debug, Error)]
pub enum GuideError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
