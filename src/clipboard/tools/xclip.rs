//! Linux X11 clipboard tool.

use super::{pipe_to, read_from, tool_exists};
use crate::clipboard::backend::{ClipboardBackend, Verification};
use crate::clipboard::error::BackendError;

/// Linux X11 clipboard tool using xclip.
///
/// `xclip` forks and keeps serving the selection after we exit.
pub struct Xclip {
    verification: Verification,
}

impl Xclip {
    pub fn new(verification: Verification) -> Self {
        Self { verification }
    }
}

impl ClipboardBackend for Xclip {
    fn name(&self) -> &'static str {
        "xclip"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && std::env::var_os("DISPLAY").is_some() && tool_exists("xclip")
    }

    fn set_text(&mut self, text: &str) -> Result<(), BackendError> {
        pipe_to("xclip", &["-selection", "clipboard"], text)
    }

    fn get_text(&mut self) -> Result<String, BackendError> {
        read_from("xclip", &["-selection", "clipboard", "-o"])
    }

    fn verification(&self) -> Verification {
        self.verification
    }
}
