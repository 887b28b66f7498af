//! The clipboard capability the pipeline depends on.

use super::error::BackendError;

/// How a backend's writes are confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// A successful `set` is taken at face value.
    TrustWrite,
    /// Write a sentinel, let the clipboard settle, and read it back.
    ///
    /// Used where readback is unreliable (heterogeneous X11/Wayland
    /// clipboard daemons on Linux).
    SelfTest,
}

impl Verification {
    /// Policy for the platform this binary was built for.
    pub fn for_platform() -> Self {
        if cfg!(target_os = "linux") {
            Verification::SelfTest
        } else {
            Verification::TrustWrite
        }
    }
}

/// A clipboard that can be written and, optionally, read back.
pub trait ClipboardBackend {
    /// Human-readable name for logs.
    fn name(&self) -> &'static str;

    /// Whether the backend can be used on this system.
    fn is_available(&self) -> bool {
        true
    }

    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), BackendError>;

    /// Read the clipboard contents. Backends without readback keep the
    /// default, which reports [`BackendError::NotSupported`].
    fn get_text(&mut self) -> Result<String, BackendError> {
        Err(BackendError::NotSupported)
    }

    /// Verification policy for writes through this backend.
    fn verification(&self) -> Verification;
}
