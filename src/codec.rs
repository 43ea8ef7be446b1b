/// This module provides the `Codec` struct and the free conversion functions
/// that route a format identifier to the matching interchange codec.
///
/// Converting applies the bundle defaults (provenance label and source
/// locale) before dispatch. Parsing with the bare `xliff` identifier first
/// sniffs the XLIFF namespace in the content to pick the version.
///
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    clock::{Clock, SystemClock},
    error::Error,
    formats::FormatType,
    types::{ConvertOptions, ParseOptions},
};

lazy_static! {
    static ref XLIFF_VERSION_REGEX: Regex =
        Regex::new(r"urn:oasis:names:tc:xliff:document:(\d\.\d)").unwrap();
}

/// Identifier that asks [`Codec::parse_to_arb`] to detect the XLIFF version.
const GENERIC_XLIFF: &str = "xliff";

/// Dispatches conversions to the format codecs, reading time from `C`.
#[derive(Debug, Clone, Default)]
pub struct Codec<C: Clock = SystemClock> {
    clock: C,
}

impl Codec<SystemClock> {
    /// Creates a codec using the system clock.
    pub fn new() -> Self {
        Codec { clock: SystemClock }
    }
}

impl<C: Clock> Codec<C> {
    /// Creates a codec reading the current instant from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Codec { clock }
    }

    /// Converts ARB bundle(s) into the interchange format named by `format`.
    ///
    /// # Example
    /// ```rust
    /// use arbcodec::{Codec, ConvertOptions};
    /// let result = Codec::new().convert_from_arb("gettext", ConvertOptions::new("{}"))?;
    /// assert!(result.content.contains("# original: application resource bundle"));
    /// # Ok::<(), arbcodec::Error>(())
    /// ```
    pub fn convert_from_arb(
        &self,
        format: &str,
        options: ConvertOptions,
    ) -> Result<ParseOptions, Error> {
        let format_type = FormatType::from_str(format)?;
        tracing::debug!(format, codec = %format_type, "converting from ARB");
        format_type
            .codec()
            .convert(&options.with_defaults(), &self.clock)
    }

    /// Parses an interchange document back into ARB bundle(s).
    pub fn parse_to_arb(&self, format: &str, options: &ParseOptions) -> Result<ConvertOptions, Error> {
        let format_type = if format == GENERIC_XLIFF {
            detect_xliff_version(&options.content)?
        } else {
            FormatType::from_str(format)?
        };
        tracing::debug!(format, codec = %format_type, "parsing to ARB");
        format_type.codec().parse(options, &self.clock)
    }
}

/// Picks the XLIFF codec from the namespace URI in `content`.
///
/// An unsupported version fails naming it, e.g. `xliff-1.1`.
pub fn detect_xliff_version(content: &str) -> Result<FormatType, Error> {
    let version = XLIFF_VERSION_REGEX
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(Error::UndetectableVersion)?;
    tracing::debug!(version, "detected XLIFF version");
    FormatType::from_str(&format!("{GENERIC_XLIFF}-{version}"))
}

/// Converts ARB bundle(s) into the interchange format named by `format`,
/// timestamping with the system clock.
///
/// # Example
/// ```rust
/// use arbcodec::{ConvertOptions, convert_from_arb};
/// let source = r#"{"hello": "Hello", "@hello": {"description": "", "type": "text", "placeholders": {}}}"#;
/// let result = convert_from_arb("xliff-2.x", ConvertOptions::new(source))?;
/// assert!(result.content.contains(r#"<unit id="hello">"#));
/// # Ok::<(), arbcodec::Error>(())
/// ```
pub fn convert_from_arb(format: &str, options: ConvertOptions) -> Result<ParseOptions, Error> {
    Codec::new().convert_from_arb(format, options)
}

/// Parses an interchange document into ARB bundle(s), timestamping with the
/// system clock. Pass `"xliff"` to detect the XLIFF version from the content.
pub fn parse_to_arb(format: &str, options: &ParseOptions) -> Result<ConvertOptions, Error> {
    Codec::new().parse_to_arb(format, options)
}
