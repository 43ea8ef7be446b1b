//! All error types for the arbcodec crate.
//!
//! These are returned from every fallible operation (bundle decoding, XML
//! reading, format dispatch).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("format `{0}` is not supported")]
    UnsupportedFormat(String),

    #[error("could not determine XLIFF version")]
    UndetectableVersion,

    #[error("invalid bundle: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new invalid document error.
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Error::InvalidDocument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_error() {
        let error = Error::UnsupportedFormat("invalid".to_string());
        assert_eq!(error.to_string(), "format `invalid` is not supported");
    }

    #[test]
    fn test_undetectable_version_error() {
        let error = Error::UndetectableVersion;
        assert_eq!(error.to_string(), "could not determine XLIFF version");
    }

    #[test]
    fn test_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::from(json_error);
        assert!(error.to_string().starts_with("invalid bundle: "));
    }

    #[test]
    fn test_invalid_document_error() {
        let error = Error::invalid_document("unclosed element `file`");
        assert_eq!(
            error.to_string(),
            "invalid document: unclosed element `file`"
        );
    }

    #[test]
    fn test_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnsupportedFormat("xliff-1.1".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnsupportedFormat"));
        assert!(debug.contains("xliff-1.1"));
    }
}
