use std::process::ExitCode;

use arbcodec_cli::{ExportArgs, export, run};
use clap::Parser;

/// Convert ARB files to a gettext PO catalog.
#[derive(Parser, Debug)]
#[command(name = "arb2po", version)]
struct Cli {
    #[command(flatten)]
    args: ExportArgs,
}

fn main() -> ExitCode {
    run(|cli: Cli| export("gettext", &cli.args))
}
