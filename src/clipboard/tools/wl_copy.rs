//! Wayland clipboard tools (`wl-clipboard`).

use super::{pipe_to, read_from, tool_exists};
use crate::clipboard::backend::{ClipboardBackend, Verification};
use crate::clipboard::error::BackendError;

/// Wayland clipboard via `wl-copy`, read back with `wl-paste`.
pub struct WlCopy {
    verification: Verification,
}

impl WlCopy {
    pub fn new(verification: Verification) -> Self {
        Self { verification }
    }
}

impl ClipboardBackend for WlCopy {
    fn name(&self) -> &'static str {
        "wl-copy"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux")
            && std::env::var_os("WAYLAND_DISPLAY").is_some()
            && tool_exists("wl-copy")
    }

    fn set_text(&mut self, text: &str) -> Result<(), BackendError> {
        if text.is_empty() {
            // wl-copy treats empty input as "nothing to copy"
            return pipe_to("wl-copy", &["--clear"], "");
        }
        pipe_to("wl-copy", &[], text)
    }

    fn get_text(&mut self) -> Result<String, BackendError> {
        if !tool_exists("wl-paste") {
            return Err(BackendError::NotSupported);
        }
        read_from("wl-paste", &["--no-newline"])
    }

    fn verification(&self) -> Verification {
        self.verification
    }
}
