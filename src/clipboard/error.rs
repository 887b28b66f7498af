//! Clipboard operation errors.

/// Errors reported by a clipboard backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The backend cannot perform this operation (e.g. no readback).
    #[error("operation not supported by this clipboard backend")]
    NotSupported,

    /// The backend's command-line tool is not installed.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Failed(String),

    #[error("No clipboard backend available. On Linux, install xclip or wl-clipboard.")]
    NoBackend,
}

/// Why a transfer did not take effect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(BackendError),

    #[error("Clipboard error: {0}")]
    SetFailed(BackendError),

    #[error("Clipboard verification failed: verification mismatch")]
    VerificationMismatch,
}
