//! All supported interchange formats for arbcodec.
//!
//! Each submodule provides one [`Interchange`] implementation; the
//! [`FormatType`] enum maps format identifiers onto them.

pub mod gettext;
pub mod xliff_1_2;
pub mod xliff_2;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

// Reexporting the codecs for easier access
pub use gettext::GettextCodec;
pub use xliff_1_2::Xliff12Codec;
pub use xliff_2::Xliff2Codec;

use crate::{Error, traits::Interchange};

/// `xmlns:xsi` of every XLIFF document written by the codecs.
pub(crate) const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Represents all supported interchange formats for generic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatType {
    /// gettext `.po` catalog.
    Gettext,
    /// XLIFF 1.2 document.
    Xliff12,
    /// XLIFF 2.0/2.1 document.
    Xliff2,
}

/// Canonical identifier of each format.
///
/// # Example
/// ```rust
/// use arbcodec::formats::FormatType;
/// assert_eq!(FormatType::Gettext.to_string(), "gettext");
/// assert_eq!(FormatType::Xliff12.to_string(), "xliff-1.2");
/// assert_eq!(FormatType::Xliff2.to_string(), "xliff-2.0");
/// ```
impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Gettext => write!(f, "gettext"),
            FormatType::Xliff12 => write!(f, "xliff-1.2"),
            FormatType::Xliff2 => write!(f, "xliff-2.0"),
        }
    }
}

/// Resolves a format identifier through the alias table.
///
/// Accepts exactly these identifiers:
/// - `"xliff"`, `"xliff-1.x"`, `"xliff-1.2"` → `FormatType::Xliff12`
/// - `"xliff-2.x"`, `"xliff-2.0"`, `"xliff-2.1"` → `FormatType::Xliff2`
/// - `"gettext"` → `FormatType::Gettext`
///
/// Anything else is [`Error::UnsupportedFormat`] carrying the identifier as
/// given.
///
/// # Example
/// ```rust
/// use arbcodec::formats::FormatType;
/// use std::str::FromStr;
/// assert_eq!(FormatType::from_str("xliff-2.x").unwrap(), FormatType::Xliff2);
/// assert!(FormatType::from_str("xliff-1.1").is_err());
/// ```
impl FromStr for FormatType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xliff" | "xliff-1.x" | "xliff-1.2" => Ok(FormatType::Xliff12),
            "xliff-2.x" | "xliff-2.0" | "xliff-2.1" => Ok(FormatType::Xliff2),
            "gettext" => Ok(FormatType::Gettext),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl FormatType {
    /// Returns the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Gettext => "po",
            FormatType::Xliff12 | FormatType::Xliff2 => "xliff",
        }
    }

    /// The codec implementing this format.
    pub fn codec(&self) -> &'static dyn Interchange {
        match self {
            FormatType::Gettext => &GettextCodec,
            FormatType::Xliff12 => &Xliff12Codec,
            FormatType::Xliff2 => &Xliff2Codec,
        }
    }
}
