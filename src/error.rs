//! Top-level error taxonomy and exit codes.

use crate::classify::BinaryReason;
use crate::clipboard::TransferError;
use crate::source::SourceError;

/// Exit status for every failure.
pub const EXIT_FAILURE: i32 = 1;

/// Exit status after Ctrl+C.
pub const EXIT_INTERRUPTED: i32 = 130;

/// Anything that stops an invocation. Each variant is reported as one
/// line and ends the process; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Input appears to be binary ({0})")]
    BinaryContent(BinaryReason),

    #[error(transparent)]
    Transfer(#[from] TransferError),

    #[error("No input provided")]
    Usage,

    #[error("Config error: {0:#}")]
    Config(anyhow::Error),
}

impl CopyError {
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }

    /// Follow-up guidance printed after the error line.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CopyError::BinaryContent(_) => Some("Use -f to force copy"),
            CopyError::Usage => Some("Use: copy <file>  or  pipe data to copy"),
            CopyError::Transfer(_) if cfg!(target_os = "linux") => Some(
                "Linux clipboard setup:\n  X11:      sudo apt install xclip\n  Wayland:  sudo apt install wl-clipboard",
            ),
            _ => None,
        }
    }
}
