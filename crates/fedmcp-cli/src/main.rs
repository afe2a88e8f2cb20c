//! # fedmcp CLI entry point
//!
//! Parses command-line arguments and runs manifest validation.
//! Uses clap derive macros with an invocation shape matching the
//! Python `fedmcp.py` script: a single positional path.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fedmcp_cli::validate::{run_validate, ValidateArgs};

/// fedmcp — MCP federation manifest validator.
///
/// Validates a federation manifest (JSON) against the bundled
/// `mcp-fed.schema.json` schema and prints a confirmation line
/// on success.
#[derive(Parser, Debug)]
#[command(name = "fedmcp", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    args: ValidateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level. The subscriber writes
    // to stderr so stdout carries only the success line.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("fedmcp starting");

    match run_validate(&cli.args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
