#![forbid(unsafe_code)]
//! Conversion between Flutter/Dart Application Resource Bundles (ARB) and
//! translation interchange formats.
//!
//! ARB is the source of truth. A conversion takes a source bundle (and
//! optionally a target bundle with the translations) and produces an XLIFF 1.2,
//! XLIFF 2.x or gettext PO document; parsing goes the other way and rebuilds
//! the bundles, preserving key order, descriptions and placeholder metadata.
//!
//! # Quick Start
//!
//! ```rust
//! use arbcodec::{ConvertOptions, ParseOptions, convert_from_arb, parse_to_arb};
//!
//! let source = r#"{
//!   "@@locale": "en_US",
//!   "greeting": "Hello {name}",
//!   "@greeting": {
//!     "description": "Shown on the start page",
//!     "type": "text",
//!     "placeholders": {"name": {"example": "Ada"}}
//!   }
//! }"#;
//!
//! let xliff = convert_from_arb("xliff", ConvertOptions::new(source))?;
//! let back = parse_to_arb("xliff", &ParseOptions::new(xliff.content))?;
//! assert!(back.source.contains("\"greeting\": \"Hello {name}\""));
//! # Ok::<(), arbcodec::Error>(())
//! ```
//!
//! # Supported Formats
//!
//! - **XLIFF 1.2**: `xliff`, `xliff-1.x`, `xliff-1.2`
//! - **XLIFF 2.x**: `xliff-2.x`, `xliff-2.0`, `xliff-2.1`
//! - **gettext PO**: `gettext`

pub mod arb;
pub mod clock;
pub mod codec;
pub mod error;
pub mod formats;
pub mod traits;
pub mod types;
pub mod util;
pub mod xml;

// Re-export most used types for easy consumption
pub use crate::{
    clock::{Clock, FixedClock, SystemClock},
    codec::{Codec, convert_from_arb, parse_to_arb},
    error::Error,
    formats::FormatType,
    types::{ConvertOptions, ParseOptions},
};
