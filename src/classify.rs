//! Text versus binary classification.
//!
//! A heuristic: a NUL character is conclusive, otherwise long content is
//! density-checked on a leading sample. Short content without NUL is
//! always text so short non-ASCII text is not rejected.

use tracing::debug;

/// Default number of characters sampled for the density check.
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

/// Default minimum share of printable characters in the sample.
pub const DEFAULT_MIN_PRINTABLE_RATIO: f64 = 0.7;

/// Why content was judged binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryReason {
    NullByte,
    LowPrintableRatio,
}

impl std::fmt::Display for BinaryReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryReason::NullByte => f.write_str("null byte"),
            BinaryReason::LowPrintableRatio => f.write_str("low printable ratio"),
        }
    }
}

/// Outcome of classifying decoded content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Text,
    LikelyBinary(BinaryReason),
}

impl Classification {
    pub fn is_binary(&self) -> bool {
        matches!(self, Classification::LikelyBinary(_))
    }
}

/// Binary content classifier with tunable thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classifier {
    sample_size: usize,
    min_printable_ratio: f64,
}

impl Classifier {
    pub fn new(sample_size: usize, min_printable_ratio: f64) -> Self {
        Self {
            sample_size,
            min_printable_ratio,
        }
    }

    /// Classify `content`. Pure and total: the same input always yields
    /// the same result, and the empty string is text.
    pub fn classify(&self, content: &str) -> Classification {
        if content.contains('\0') {
            debug!("NUL character found");
            return Classification::LikelyBinary(BinaryReason::NullByte);
        }

        // Content must exceed the sample size before density is checked.
        let mut chars = content.chars();
        let sample: Vec<char> = chars.by_ref().take(self.sample_size).collect();
        if sample.len() < self.sample_size || chars.next().is_none() {
            return Classification::Text;
        }

        let printable = sample.iter().filter(|&&c| is_printable(c)).count();
        let ratio = printable as f64 / sample.len() as f64;
        debug!(ratio, "printable density");
        if ratio < self.min_printable_ratio {
            Classification::LikelyBinary(BinaryReason::LowPrintableRatio)
        } else {
            Classification::Text
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_SIZE, DEFAULT_MIN_PRINTABLE_RATIO)
    }
}

/// Printable ASCII, newline, carriage return or tab.
fn is_printable(c: char) -> bool {
    matches!(c, ' '..='~' | '\n' | '\r' | '\t')
}

/// Classify with the default thresholds.
pub fn classify(content: &str) -> Classification {
    Classifier::default().classify(content)
}
