//! The classification gate between acquisition and transfer.

use tracing::{debug, warn};

use crate::classify::{Classification, Classifier};
use crate::error::CopyError;
use crate::source::DecodedContent;

/// Content cleared for the clipboard.
///
/// Only [`gate`] builds one, so every write the verifier performs has
/// either been classified as text or explicitly forced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transferable {
    text: String,
    preview: bool,
}

impl Transferable {
    pub(crate) fn from_text(text: String) -> Self {
        Self {
            text,
            preview: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when a binary input was force-copied as a preview.
    pub fn is_preview(&self) -> bool {
        self.preview
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Classify `content` and decide what, if anything, may be copied.
///
/// Empty content passes unclassified. Binary content is refused unless
/// `force` is set, in which case a short preview of the raw bytes is
/// copied instead of the payload.
pub fn gate(
    content: DecodedContent,
    classifier: &Classifier,
    force: bool,
    preview_bytes: usize,
) -> Result<Transferable, CopyError> {
    if content.is_empty() {
        return Ok(Transferable::from_text(String::new()));
    }

    match classifier.classify(content.text()) {
        Classification::Text => {
            debug!("content classified as text");
            Ok(Transferable::from_text(content.into_text()))
        }
        Classification::LikelyBinary(reason) if force => {
            warn!(%reason, "binary content forced; copying a preview");
            Ok(Transferable {
                text: byte_preview(content.raw(), preview_bytes),
                preview: true,
            })
        }
        Classification::LikelyBinary(reason) => Err(CopyError::BinaryContent(reason)),
    }
}

/// Render the first `limit` bytes as an escaped byte-string literal,
/// with a trailing `...` when `raw` is longer.
pub fn byte_preview(raw: &[u8], limit: usize) -> String {
    let shown = &raw[..raw.len().min(limit)];
    let mut preview = String::from("b'");
    for &byte in shown {
        preview.extend(std::ascii::escape_default(byte).map(char::from));
    }
    preview.push('\'');
    if raw.len() > limit {
        preview.push_str("...");
    }
    preview
}
