//! The two directions every tool runs: ARB → interchange document and back.

use std::{path::PathBuf, str::FromStr};

use arbcodec::{ConvertOptions, Error, FormatType, ParseOptions, convert_from_arb, parse_to_arb};
use clap::Args;

use crate::{
    files::{read_text, write_output},
    locale::{determine_arb_locale, parse_locale},
};

/// Arguments of the ARB → interchange tools.
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Source ARB file (required)
    #[arg(long, value_name = "filename")]
    pub sourcefile: Option<PathBuf>,

    /// Target ARB file
    #[arg(long, value_name = "filename")]
    pub targetfile: Option<PathBuf>,

    /// Where the translations come from
    #[arg(long, value_name = "value")]
    pub original: Option<String>,

    /// Source locale override, e.g. en-US, in case it cannot be determined from file content or file name
    #[arg(long, value_name = "locale")]
    pub sourcelang: Option<String>,

    /// Target locale override, e.g. de-DE, in case it cannot be determined from file content or file name
    #[arg(long, value_name = "locale")]
    pub targetlang: Option<String>,

    /// Write the result to this file instead of stdout
    #[arg(long, value_name = "filename")]
    pub out: Option<PathBuf>,
}

/// Arguments of the interchange → ARB tools.
#[derive(Args, Debug, Clone, Default)]
pub struct ImportArgs {
    /// Source document (required)
    #[arg(long, value_name = "filename")]
    pub file: Option<PathBuf>,

    /// Write source ARB to file if given or stdout if omitted
    #[arg(long, value_name = "filename")]
    pub sourceout: Option<PathBuf>,

    /// Write target ARB to file if given
    #[arg(long, value_name = "filename")]
    pub targetout: Option<PathBuf>,
}

/// Locale of an ARB file: the override, else `@@locale`, else the file name.
fn resolve_locale(
    override_locale: Option<&str>,
    content: &str,
    path: &std::path::Path,
) -> Option<String> {
    let arb_locale = determine_arb_locale(content);
    let file_name = path.to_string_lossy();
    parse_locale([override_locale, Some(arb_locale.as_str()), Some(&*file_name)])
}

/// Converts the ARB file(s) named in `args` into `format`.
pub fn export(format: &str, args: &ExportArgs) -> Result<(), String> {
    let sourcefile = args
        .sourcefile
        .as_deref()
        .ok_or("option '--sourcefile <filename>' is required")?;

    let source = read_text(sourcefile)?;
    let source_language = resolve_locale(args.sourcelang.as_deref(), &source, sourcefile);

    let (target, target_language) = match args.targetfile.as_deref() {
        Some(targetfile) => {
            let target = read_text(targetfile)?;
            let language = resolve_locale(args.targetlang.as_deref(), &target, targetfile);
            (Some(target), language)
        }
        None => (None, None),
    };
    tracing::debug!(
        format,
        source_language = source_language.as_deref().unwrap_or_default(),
        target_language = target_language.as_deref().unwrap_or_default(),
        "resolved locales"
    );

    let options = ConvertOptions {
        source,
        target,
        original: args.original.clone(),
        source_language,
        target_language,
    };
    let result = convert_from_arb(format, options).map_err(|e| e.to_string())?;
    write_output(args.out.as_deref(), &result.content)
}

/// Like [`export`], accepting only XLIFF identifiers.
pub fn export_xliff(format: &str, args: &ExportArgs) -> Result<(), String> {
    match FormatType::from_str(format).map_err(|e| e.to_string())? {
        FormatType::Xliff12 | FormatType::Xliff2 => export(format, args),
        FormatType::Gettext => Err(Error::UnsupportedFormat(format.to_string()).to_string()),
    }
}

/// Parses the document named in `args` as `format` and writes the bundles.
///
/// The source ARB goes to `--sourceout` or stdout; the target ARB is written
/// only when `--targetout` is given, empty if the document has no target.
pub fn import(format: &str, args: &ImportArgs) -> Result<(), String> {
    let file = args
        .file
        .as_deref()
        .ok_or("option '--file <filename>' is required")?;

    let content = read_text(file)?;
    let result = parse_to_arb(format, &ParseOptions::new(content)).map_err(|e| e.to_string())?;

    write_output(args.sourceout.as_deref(), &result.source)?;
    if let Some(targetout) = args.targetout.as_deref() {
        write_output(Some(targetout), result.target.as_deref().unwrap_or_default())?;
    }
    Ok(())
}
