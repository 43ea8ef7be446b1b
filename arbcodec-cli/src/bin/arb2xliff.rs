use std::process::ExitCode;

use arbcodec_cli::{ExportArgs, export_xliff, run};
use clap::Parser;

/// Convert ARB files to an XLIFF document.
#[derive(Parser, Debug)]
#[command(name = "arb2xliff", version)]
struct Cli {
    #[command(flatten)]
    args: ExportArgs,

    /// XLIFF version to write: xliff-1.2 (xliff, xliff-1.x) or xliff-2.0 (xliff-2.x, xliff-2.1)
    #[arg(long, value_name = "format", default_value = "xliff-1.2")]
    format: String,
}

fn main() -> ExitCode {
    run(|cli: Cli| export_xliff(&cli.format, &cli.args))
}
