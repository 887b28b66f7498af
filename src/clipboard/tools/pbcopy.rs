//! macOS pasteboard tools.

use super::{pipe_to, read_from};
use crate::clipboard::backend::{ClipboardBackend, Verification};
use crate::clipboard::error::BackendError;

/// macOS clipboard via `pbcopy`/`pbpaste`.
pub struct Pbcopy {
    verification: Verification,
}

impl Pbcopy {
    pub fn new(verification: Verification) -> Self {
        Self { verification }
    }
}

impl ClipboardBackend for Pbcopy {
    fn name(&self) -> &'static str {
        "pbcopy"
    }

    fn is_available(&self) -> bool {
        // Both ship with macOS.
        cfg!(target_os = "macos")
    }

    fn set_text(&mut self, text: &str) -> Result<(), BackendError> {
        pipe_to("pbcopy", &[], text)
    }

    fn get_text(&mut self) -> Result<String, BackendError> {
        read_from("pbpaste", &[])
    }

    fn verification(&self) -> Verification {
        self.verification
    }
}
