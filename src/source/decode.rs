//! Encoding fallback ladder.
//!
//! Bytes are decoded by trying each rung in order. Multi-byte rungs can
//! reject their input; the ladder always ends on a single-byte encoding,
//! which accepts every byte value, so decoding never fails once a
//! [`Ladder`] has been built.

use serde::{Deserialize, Serialize};
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A text encoding the ladder can try.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    /// Strict UTF-8. A leading byte-order mark is kept as U+FEFF.
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    /// UTF-8 with an optional leading byte-order mark, which is stripped.
    #[serde(rename = "utf-8-sig", alias = "utf8-sig")]
    Utf8Bom,
    /// ISO-8859-1: every byte maps to the code point of the same value.
    #[serde(rename = "latin-1", alias = "latin1", alias = "iso-8859-1")]
    Latin1,
    /// Windows code page 1252.
    #[serde(rename = "windows-1252", alias = "cp1252")]
    Windows1252,
}

impl Encoding {
    /// The name used in config files and verbose output.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf8Bom => "utf-8-sig",
            Encoding::Latin1 => "latin-1",
            Encoding::Windows1252 => "windows-1252",
        }
    }

    /// Whether this encoding accepts every possible byte sequence.
    pub fn is_single_byte(self) -> bool {
        matches!(self, Encoding::Latin1 | Encoding::Windows1252)
    }

    /// Attempt to decode `bytes`, returning `None` when the input is not
    /// valid in this encoding.
    pub fn try_decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            Encoding::Utf8Bom => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                std::str::from_utf8(body).ok().map(str::to_owned)
            }
            Encoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            Encoding::Windows1252 => Some(bytes.iter().map(|&b| cp1252_char(b)).collect()),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Code points for bytes 0x80..=0x9F. Undefined slots keep their C1 value.
const CP1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

fn cp1252_char(byte: u8) -> char {
    match byte {
        0x80..=0x9F => CP1252_HIGH[usize::from(byte - 0x80)],
        _ => char::from(byte),
    }
}

/// Default ladder order.
pub const DEFAULT_LADDER: [Encoding; 4] = [
    Encoding::Utf8,
    Encoding::Utf8Bom,
    Encoding::Latin1,
    Encoding::Windows1252,
];

/// Errors building a ladder from a configured encoding list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LadderError {
    #[error("encoding list is empty")]
    Empty,

    #[error("encoding list must include latin-1 or windows-1252 as a terminal fallback")]
    NoTerminal,
}

/// An ordered list of decode attempts ending in a total decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    fallible: Vec<Encoding>,
    terminal: Encoding,
}

impl Ladder {
    /// Build a ladder from `encodings`, in order.
    ///
    /// Rungs listed after the first single-byte encoding can never be
    /// reached and are dropped.
    pub fn new(encodings: &[Encoding]) -> Result<Self, LadderError> {
        if encodings.is_empty() {
            return Err(LadderError::Empty);
        }
        let terminal_at = encodings
            .iter()
            .position(|e| e.is_single_byte())
            .ok_or(LadderError::NoTerminal)?;
        if terminal_at + 1 < encodings.len() {
            debug!(
                dropped = ?&encodings[terminal_at + 1..],
                "encodings after a single-byte fallback are unreachable"
            );
        }
        Ok(Self {
            fallible: encodings[..terminal_at].to_vec(),
            terminal: encodings[terminal_at],
        })
    }

    /// Decode `bytes` with the first rung that accepts them. The buffer is
    /// kept as the content's raw bytes.
    pub fn decode(&self, bytes: Vec<u8>) -> DecodedContent {
        if bytes.is_empty() {
            return DecodedContent::empty();
        }
        for &encoding in &self.fallible {
            match encoding.try_decode(&bytes) {
                Some(text) => {
                    debug!(%encoding, "decoded");
                    return DecodedContent::new(text, encoding, bytes);
                }
                None => debug!(%encoding, "decode failed, trying next encoding"),
            }
        }
        let text = self
            .terminal
            .try_decode(&bytes)
            .unwrap_or_else(|| bytes.iter().map(|&b| char::from(b)).collect());
        debug!(encoding = %self.terminal, "decoded with terminal fallback");
        DecodedContent::new(text, self.terminal, bytes)
    }
}

impl Default for Ladder {
    fn default() -> Self {
        Self {
            fallible: vec![Encoding::Utf8, Encoding::Utf8Bom],
            terminal: Encoding::Latin1,
        }
    }
}

/// Fully-read text together with the encoding that produced it.
///
/// The raw bytes are retained for the force-preview path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedContent {
    text: String,
    encoding: Option<Encoding>,
    raw: Vec<u8>,
}

impl DecodedContent {
    fn new(text: String, encoding: Encoding, raw: Vec<u8>) -> Self {
        Self {
            text,
            encoding: Some(encoding),
            raw,
        }
    }

    /// Zero-byte input: no encoding was needed.
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            encoding: None,
            raw: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// `None` for empty content.
    pub fn encoding(&self) -> Option<Encoding> {
        self.encoding
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
