//! In-process clipboard access through `arboard`.

use crate::clipboard::backend::{ClipboardBackend, Verification};
use crate::clipboard::error::BackendError;

/// How long a Linux write waits for a clipboard manager to take ownership
/// before this process exits and drops the selection.
#[cfg(target_os = "linux")]
const HANDOFF_WAIT: std::time::Duration = std::time::Duration::from_millis(250);

/// Cross-platform clipboard backed by the `arboard` crate.
pub struct Arboard {
    clipboard: arboard::Clipboard,
    verification: Verification,
}

impl Arboard {
    /// Connect to the system clipboard.
    pub fn new(verification: Verification) -> Result<Self, BackendError> {
        let clipboard = arboard::Clipboard::new()
            .map_err(|e| BackendError::Failed(format!("clipboard init: {}", e)))?;
        Ok(Self {
            clipboard,
            verification,
        })
    }
}

impl ClipboardBackend for Arboard {
    fn name(&self) -> &'static str {
        "arboard"
    }

    #[cfg(target_os = "linux")]
    fn set_text(&mut self, text: &str) -> Result<(), BackendError> {
        use arboard::SetExtLinux;
        use std::time::Instant;

        self.clipboard
            .set()
            .wait_until(Instant::now() + HANDOFF_WAIT)
            .text(text.to_owned())
            .map_err(|e| BackendError::Failed(format!("clipboard set: {}", e)))
    }

    #[cfg(not(target_os = "linux"))]
    fn set_text(&mut self, text: &str) -> Result<(), BackendError> {
        self.clipboard
            .set_text(text.to_owned())
            .map_err(|e| BackendError::Failed(format!("clipboard set: {}", e)))
    }

    fn get_text(&mut self) -> Result<String, BackendError> {
        self.clipboard.get_text().map_err(|e| match e {
            arboard::Error::ClipboardNotSupported => BackendError::NotSupported,
            other => BackendError::Failed(format!("clipboard get: {}", other)),
        })
    }

    fn verification(&self) -> Verification {
        self.verification
    }
}
