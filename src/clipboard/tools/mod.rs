//! Concrete clipboard backends.
//!
//! `Arboard` talks to the platform clipboard in-process. The others drive
//! the platform's command-line clipboard utilities, which keep serving the
//! clipboard after this process exits.

mod native;
mod pbcopy;
mod wl_copy;
mod xclip;

pub use native::Arboard;
pub use pbcopy::Pbcopy;
pub use wl_copy::WlCopy;
pub use xclip::Xclip;

use super::backend::{ClipboardBackend, Verification};
use super::error::BackendError;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::process::{Command, Stdio};

/// Command-line tools for the current platform, in priority order.
pub fn command_tools(verification: Verification) -> Vec<Box<dyn ClipboardBackend>> {
    vec![
        Box::new(WlCopy::new(verification)),
        Box::new(Xclip::new(verification)),
        Box::new(Pbcopy::new(verification)),
    ]
}

/// Check if `program` is on `PATH`.
fn tool_exists(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run `program` with `text` on its standard input.
///
/// xclip and wl-copy fork a process that keeps serving the clipboard and
/// inherits our descriptors, so stderr goes to an unlinked temporary file
/// rather than a pipe that would never reach EOF. The child is always
/// waited on, even when writing its input fails.
fn pipe_to(program: &'static str, args: &[&str], text: &str) -> Result<(), BackendError> {
    let mut stderr = tempfile::tempfile().map_err(|e| BackendError::Failed(e.to_string()))?;
    let child_stderr = stderr
        .try_clone()
        .map_err(|e| BackendError::Failed(e.to_string()))?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::from(child_stderr))
        .spawn()
        .map_err(|e| spawn_error(program, e))?;

    // Dropping stdin at the end of the arm closes the pipe.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    let status = child
        .wait()
        .map_err(|e| BackendError::Failed(e.to_string()))?;

    if !status.success() {
        return Err(failure(program, &captured(&mut stderr)));
    }
    written.map_err(|e| BackendError::Failed(format!("{} failed: {}", program, e)))
}

/// Everything written to a captured stderr file so far.
fn captured(file: &mut File) -> Vec<u8> {
    let mut out = Vec::new();
    if file.seek(SeekFrom::Start(0)).is_ok() {
        let _ = file.read_to_end(&mut out);
    }
    out
}

/// Run `program` and capture its standard output as text.
fn read_from(program: &'static str, args: &[&str]) -> Result<String, BackendError> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_error(program, e))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(failure(program, &output.stderr))
    }
}

fn spawn_error(program: &'static str, err: std::io::Error) -> BackendError {
    if err.kind() == std::io::ErrorKind::NotFound {
        BackendError::NotFound(program)
    } else {
        BackendError::Failed(err.to_string())
    }
}

fn failure(program: &str, stderr: &[u8]) -> BackendError {
    let detail = String::from_utf8_lossy(stderr).trim().to_string();
    if detail.is_empty() {
        BackendError::Failed(format!("{} failed", program))
    } else {
        BackendError::Failed(format!("{} failed: {}", program, detail))
    }
}
