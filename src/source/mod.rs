//! Input acquisition: standard input or a named file.

pub mod decode;
mod error;

pub use decode::{DecodedContent, Encoding, Ladder, LadderError};
pub use error::{SourceError, MAX_CONTENT_SIZE};

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Process state read once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Standard input is a pipe or redirect rather than a terminal.
    pub stdin_piped: bool,
    /// Positional file argument, if any.
    pub file: Option<PathBuf>,
    /// Copy a preview even when the content looks binary.
    pub force: bool,
    /// Print detailed statistics.
    pub verbose: bool,
}

impl Invocation {
    /// Capture the interactive-terminal state of the current process.
    pub fn from_env(file: Option<PathBuf>, force: bool, verbose: bool) -> Self {
        Self {
            stdin_piped: !atty::is(atty::Stream::Stdin),
            file,
            force,
            verbose,
        }
    }

    /// Decide where content comes from.
    ///
    /// Piped standard input always wins; a file argument given alongside
    /// it is ignored. Returns `None` when neither source is available.
    pub fn source(&self) -> Option<ContentSource> {
        if self.stdin_piped {
            if let Some(path) = &self.file {
                warn!(path = %path.display(), "stdin is piped; ignoring file argument");
            }
            return Some(ContentSource::Stdin);
        }
        self.file.clone().map(|path| ContentSource::File { path })
    }
}

/// Where the content of one invocation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Stdin,
    File { path: PathBuf },
}

impl ContentSource {
    /// Short name for messages: `stdin` or the file name.
    pub fn label(&self) -> String {
        match self {
            ContentSource::Stdin => "stdin".to_string(),
            ContentSource::File { path } => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ContentSource::Stdin => None,
            ContentSource::File { path } => Some(path),
        }
    }
}

/// Read and decode a file.
///
/// Checks run in order: existence, regular file, size ceiling. A zero-byte
/// file is a successful, empty result. I/O faults are reported as-is and
/// never retried with another encoding.
pub fn read_file(path: &Path, limit: u64, ladder: &Ladder) -> Result<DecodedContent, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let metadata = fs::metadata(path).map_err(|e| io_error(path, e))?;
    if !metadata.is_file() {
        return Err(SourceError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let size = metadata.len();
    if size > limit {
        return Err(SourceError::TooLarge { size, limit });
    }
    if size == 0 {
        return Ok(DecodedContent::empty());
    }

    let bytes = fs::read(path).map_err(|e| io_error(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read file");
    Ok(ladder.decode(bytes))
}

/// Read all of `reader` (standard input) and decode it.
///
/// Input beyond `limit` bytes is rejected rather than buffered.
pub fn read_stream<R: Read>(
    reader: R,
    limit: u64,
    ladder: &Ladder,
) -> Result<DecodedContent, SourceError> {
    let mut bytes = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)?;

    let size = bytes.len() as u64;
    if size > limit {
        return Err(SourceError::TooLarge { size, limit });
    }
    debug!(bytes = size, "read stdin");
    Ok(ladder.decode(bytes))
}

fn io_error(path: &Path, err: io::Error) -> SourceError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => SourceError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => SourceError::ReadError(err),
    }
}
