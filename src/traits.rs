//! Traits for format-agnostic reading, writing and conversion in arbcodec.

use std::io::{BufRead, Cursor, Write};

use crate::{
    clock::Clock,
    error::Error,
    types::{ConvertOptions, ParseOptions},
};

/// A trait for documents that can be read from and written to text.
///
/// # Example
///
/// ```rust
/// use arbcodec::{arb::Bundle, traits::Parser};
/// let bundle = Bundle::from_str(r#"{"@@locale": "en_US", "hello": "Hello"}"#)?;
/// assert_eq!(bundle.messages.len(), 1);
/// assert!(bundle.to_text()?.contains("\"hello\": \"Hello\""));
/// # Ok::<(), arbcodec::Error>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Serialize into a string.
    fn to_text(&self) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.to_writer(&mut buf)?;
        String::from_utf8(buf).map_err(|e| Error::invalid_document(e.to_string()))
    }
}

/// One interchange format: turns ARB bundles into a document and back.
///
/// Implementations never read the system time themselves; every timestamp
/// comes from the supplied [`Clock`].
pub trait Interchange {
    /// Bundle(s) → interchange document.
    fn convert(&self, options: &ConvertOptions, clock: &dyn Clock) -> Result<ParseOptions, Error>;

    /// Interchange document → bundle(s).
    fn parse(&self, options: &ParseOptions, clock: &dyn Clock) -> Result<ConvertOptions, Error>;
}
