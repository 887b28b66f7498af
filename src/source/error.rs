//! Content acquisition errors.

use humansize::{format_size, BINARY};
use std::path::PathBuf;

/// Hard ceiling on input size (10 MiB).
pub const MAX_CONTENT_SIZE: u64 = 10 * 1024 * 1024;

/// Errors that can occur while reading input.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Not a file: {}", .path.display())]
    NotAFile { path: PathBuf },

    #[error(
        "Input too large: {} bytes exceeds the {} limit",
        .size,
        human_size(.limit)
    )]
    TooLarge { size: u64, limit: u64 },

    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Read error: {0}")]
    ReadError(#[from] std::io::Error),
}

fn human_size(bytes: &u64) -> String {
    format_size(*bytes, BINARY)
}
