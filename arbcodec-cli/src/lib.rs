//! Shared plumbing of the `arb2po`, `arb2xliff`, `po2arb` and `xliff2arb`
//! binaries.

pub mod commands;
pub mod files;
pub mod locale;

use std::ffi::OsString;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

pub use commands::{ExportArgs, ImportArgs, export, export_xliff, import};
pub use locale::{determine_arb_locale, parse_locale};

/// Installs a stderr logger filtered by `RUST_LOG`, `warn` when unset.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber installed by an embedding process wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parses `A` from the process arguments and hands it to `command`.
///
/// Without any argument the help text is printed and the process exits
/// successfully. A failing command prints `error: <message>` to stderr and
/// exits with status 1.
pub fn run<A: Parser>(command: impl FnOnce(A) -> Result<(), String>) -> ExitCode {
    init_logging();
    match run_from(std::env::args_os(), command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run_from<A: Parser>(
    args: impl IntoIterator<Item = OsString>,
    command: impl FnOnce(A) -> Result<(), String>,
) -> Result<(), String> {
    let args: Vec<OsString> = args.into_iter().collect();
    if args.len() <= 1 {
        return A::command()
            .print_help()
            .map_err(|e| format!("cannot write help: {e}"));
    }
    command(A::parse_from(args))
}
