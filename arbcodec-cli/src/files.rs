//! File input and output for the command line tools.

use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

/// Reads a text file, decoding UTF-16 when it starts with a byte order mark.
/// A UTF-8 BOM is dropped.
pub fn read_text(path: &Path) -> Result<String, String> {
    let file =
        File::open(path).map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .strip_bom(true)
        .build(file);

    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read input file");
    Ok(content)
}

/// Writes `content` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), String> {
    match path {
        Some(path) => std::fs::write(path, content)
            .map_err(|e| format!("cannot write {}: {}", path.display(), e)),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| format!("cannot write to stdout: {e}"))
        }
    }
}
