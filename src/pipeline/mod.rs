//! One invocation, end to end: resolve the source, read and decode it,
//! gate it through the classifier, then write and verify the clipboard.

mod gate;
mod report;

pub use gate::{byte_preview, gate, Transferable};
pub use report::{group_thousands, ContentStats, Report};

use std::io::Read;
use tracing::debug;

use crate::clipboard::{
    BackendError, ClipboardBackend, TransferError, TransferOutcome, Verification, Verifier,
};
use crate::config::Config;
use crate::error::CopyError;
use crate::source::{read_file, read_stream, ContentSource, Invocation};

/// Run the pipeline.
///
/// `connect` is only called once content has been read and gated, so
/// usage errors, unreadable sources and blocked binary input never touch
/// the clipboard.
pub fn run<R, F>(
    invocation: &Invocation,
    stdin: R,
    config: &Config,
    connect: F,
) -> Result<Report, CopyError>
where
    R: Read,
    F: FnOnce() -> Result<Box<dyn ClipboardBackend>, BackendError>,
{
    let source = invocation.source().ok_or(CopyError::Usage)?;
    let ladder = config
        .ladder()
        .map_err(|e| CopyError::Config(anyhow::anyhow!("input.encodings: {}", e)))?;
    let limit = config.input.max_file_size;

    let content = match &source {
        ContentSource::Stdin => read_stream(stdin, limit, &ladder)?,
        ContentSource::File { path } => read_file(path, limit, &ladder)?,
    };
    let input_bytes = content.raw().len() as u64;
    let encoding = content.encoding();
    debug!(source = %source.label(), bytes = input_bytes, ?encoding, "content acquired");

    let payload = gate(
        content,
        &config.classifier(),
        invocation.force,
        config.binary.preview_bytes,
    )?;

    let mut backend = connect().map_err(TransferError::Unavailable)?;
    let self_tested = backend.verification() == Verification::SelfTest;
    let outcome = Verifier::new(
        backend.as_mut(),
        config.verify.settle_delay(),
        &config.verify.sentinel,
    )
    .transfer(&payload);

    let outcome = match outcome {
        TransferOutcome::Failed(err) => return Err(err.into()),
        delivered => delivered,
    };

    let path = source
        .path()
        .map(|p| std::fs::canonicalize(p).unwrap_or_else(|_| p.to_path_buf()));

    Ok(Report {
        source,
        path,
        input_bytes,
        encoding,
        stats: ContentStats::of(payload.text()),
        outcome,
        preview: payload.is_preview(),
        empty: payload.is_empty(),
        self_tested,
    })
}
