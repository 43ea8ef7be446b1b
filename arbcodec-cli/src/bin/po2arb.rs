use std::process::ExitCode;

use arbcodec_cli::{ImportArgs, import, run};
use clap::Parser;

/// Convert a gettext PO catalog to ARB files.
#[derive(Parser, Debug)]
#[command(name = "po2arb", version)]
struct Cli {
    #[command(flatten)]
    args: ImportArgs,
}

fn main() -> ExitCode {
    run(|cli: Cli| import("gettext", &cli.args))
}
