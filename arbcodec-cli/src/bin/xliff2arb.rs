use std::process::ExitCode;

use arbcodec_cli::{ImportArgs, import, run};
use clap::Parser;

/// Convert an XLIFF 1.2 or 2.x document to ARB files.
#[derive(Parser, Debug)]
#[command(name = "xliff2arb", version)]
struct Cli {
    #[command(flatten)]
    args: ImportArgs,
}

fn main() -> ExitCode {
    // The version is read from the document's namespace.
    run(|cli: Cli| import("xliff", &cli.args))
}
