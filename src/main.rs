//! copy - CLI entry point

use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use copy_cli::cli::Cli;
use copy_cli::clipboard::platform_backend;
use copy_cli::error::EXIT_INTERRUPTED;
use copy_cli::{Config, CopyError, Invocation, Report};

fn main() {
    init_tracing();

    ctrlc::set_handler(|| {
        eprintln!("\nCancelled");
        std::process::exit(EXIT_INTERRUPTED);
    })
    .ok(); // Ignore if handler already set

    let cli = Cli::parse();
    let invocation = Invocation::from_env(cli.file, cli.force, cli.verbose);

    match execute(&invocation) {
        Ok(report) => {
            for line in report.render(invocation.verbose) {
                println!("{}", line);
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            if let Some(hint) = err.hint() {
                eprintln!("{}", hint);
            }
            std::process::exit(err.exit_code());
        }
    }
}

fn execute(invocation: &Invocation) -> Result<Report, CopyError> {
    let config = Config::load().map_err(CopyError::Config)?;
    copy_cli::run(invocation, io::stdin().lock(), &config, platform_backend)
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
