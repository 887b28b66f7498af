//! What a successful invocation prints.

use humansize::{format_size, BINARY};
use std::path::PathBuf;

use crate::clipboard::TransferOutcome;
use crate::source::{ContentSource, Encoding};

/// Character and line counts of the copied text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentStats {
    pub chars: usize,
    pub lines: usize,
}

impl ContentStats {
    /// A trailing newline does not start another line.
    pub fn of(text: &str) -> Self {
        let newlines = text.matches('\n').count();
        let lines = if !text.is_empty() && !text.ends_with('\n') {
            newlines + 1
        } else {
            newlines
        };
        Self {
            chars: text.chars().count(),
            lines,
        }
    }
}

/// Summary of one successful transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub source: ContentSource,
    /// Absolute path of the file source, when resolvable.
    pub path: Option<PathBuf>,
    pub input_bytes: u64,
    pub encoding: Option<Encoding>,
    pub stats: ContentStats,
    pub outcome: TransferOutcome,
    pub preview: bool,
    pub empty: bool,
    pub self_tested: bool,
}

impl Report {
    /// Lines for standard output.
    pub fn render(&self, verbose: bool) -> Vec<String> {
        if self.empty {
            return vec!["Empty input".to_string()];
        }

        let mut lines = Vec::new();
        match &self.source {
            ContentSource::Stdin => lines.push("✓ Copied stdin to clipboard".to_string()),
            ContentSource::File { .. } => lines.push(format!(
                "✓ Copied '{}' to clipboard",
                self.source.label()
            )),
        }
        if self.preview {
            lines.push("  Note: binary content; copied a preview of the first bytes".to_string());
        }

        if !verbose {
            lines.push(format!(
                "  ({} chars, {} lines)",
                group_thousands(self.stats.chars as u64),
                group_thousands(self.stats.lines as u64)
            ));
            return lines;
        }

        if let Some(path) = &self.path {
            lines.push(format!("  Path: {}", path.display()));
        }
        lines.push(format!(
            "  Size: {} bytes ({})",
            group_thousands(self.input_bytes),
            format_size(self.input_bytes, BINARY)
        ));
        if let Some(encoding) = self.encoding {
            lines.push(format!("  Encoding: {}", encoding));
        }
        lines.push(format!("  Lines: {}", group_thousands(self.stats.lines as u64)));
        lines.push(format!(
            "  Characters: {}",
            group_thousands(self.stats.chars as u64)
        ));
        if self.outcome == TransferOutcome::WrittenUnverifiable {
            lines.push("  Note: clipboard readback unavailable; write not verified".to_string());
        }
        if self.self_tested {
            lines.push("  Note: Clipboard verification may be limited on Wayland".to_string());
        }
        lines
    }
}

/// Format `n` with comma thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
