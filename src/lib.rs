//! copy - move text from a file or standard input onto the clipboard.
//!
//! Input is decoded through an encoding fallback ladder, screened for
//! binary content, and written through a clipboard backend whose write is
//! confirmed where the platform allows it.

pub mod classify;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod source;

pub use classify::{classify, Classification, Classifier};
pub use clipboard::{ClipboardBackend, TransferOutcome};
pub use config::Config;
pub use error::CopyError;
pub use pipeline::{run, Report};
pub use source::{ContentSource, Invocation};
