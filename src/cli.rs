//! CLI definitions for copy

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use std::path::PathBuf;

/// Build clap styles: green headers and literals, red errors.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "copy")]
#[command(about = "Copy file contents or stdin to clipboard")]
#[command(after_help = "EXAMPLES:
    copy file.txt
    cat file.txt | copy
    echo \"text\" | copy

When standard input is piped, it is copied and any file argument is ignored.")]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// File to copy (omit to read from stdin)
    pub file: Option<PathBuf>,

    /// Show detailed information
    #[arg(short, long)]
    pub verbose: bool,

    /// Force copy even if content appears binary (copies a preview)
    #[arg(short, long)]
    pub force: bool,
}
