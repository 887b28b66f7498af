//! Clipboard access and write verification.
//!
//! The pipeline depends only on [`ClipboardBackend`]: `set_text` plus an
//! optional `get_text`. Which backend is used, and how its writes are
//! confirmed, is decided once at startup by [`platform_backend`].
//!
//! # Example
//!
//! ```ignore
//! use copy_cli::clipboard::{platform_backend, Verifier, DEFAULT_SENTINEL, DEFAULT_SETTLE_DELAY};
//!
//! let mut backend = platform_backend()?;
//! let outcome = Verifier::new(backend.as_mut(), DEFAULT_SETTLE_DELAY, DEFAULT_SENTINEL)
//!     .preflight();
//! ```

mod backend;
mod error;
pub mod tools;
mod verify;

pub use backend::{ClipboardBackend, Verification};
pub use error::{BackendError, TransferError};
pub use verify::{TransferOutcome, Verifier, DEFAULT_SENTINEL, DEFAULT_SETTLE_DELAY};

use tools::{command_tools, Arboard};
use tracing::debug;

/// Pick the clipboard backend for this platform.
///
/// On Linux the command-line tools are preferred because they keep serving
/// the clipboard after this process exits; `arboard` is the fallback. On
/// other platforms `arboard` comes first.
pub fn platform_backend() -> Result<Box<dyn ClipboardBackend>, BackendError> {
    let verification = Verification::for_platform();
    select_backend(
        command_tools(verification),
        cfg!(target_os = "linux"),
        || Arboard::new(verification).map(|b| Box::new(b) as Box<dyn ClipboardBackend>),
    )
}

/// Choose between available command-line `tools` and the in-process backend.
pub fn select_backend<F>(
    mut tools: Vec<Box<dyn ClipboardBackend>>,
    prefer_tools: bool,
    in_process: F,
) -> Result<Box<dyn ClipboardBackend>, BackendError>
where
    F: FnOnce() -> Result<Box<dyn ClipboardBackend>, BackendError>,
{
    let available = tools.iter().position(|t| t.is_available());

    if prefer_tools {
        if let Some(index) = available {
            let tool = tools.swap_remove(index);
            debug!(backend = tool.name(), "selected clipboard tool");
            return Ok(tool);
        }
    }

    match in_process() {
        Ok(backend) => {
            debug!(backend = backend.name(), "selected in-process clipboard");
            Ok(backend)
        }
        Err(err) => {
            debug!(%err, "in-process clipboard unavailable");
            match available {
                Some(index) => Ok(tools.swap_remove(index)),
                None if prefer_tools => Err(BackendError::NoBackend),
                None => Err(err),
            }
        }
    }
}
