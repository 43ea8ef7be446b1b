//! Input and output records of the conversion entry points.

use serde::{Deserialize, Serialize};

/// Provenance label used when the caller does not supply one.
pub const DEFAULT_ORIGINAL: &str = "application resource bundle";

/// Source locale used when the caller does not supply one.
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en-US";

/// Bundle side of a conversion: ARB text plus provenance and locales.
///
/// This is the input of [`crate::convert_from_arb`] and the output of
/// [`crate::parse_to_arb`]. Locales use hyphens (`en-US`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Source ARB as JSON text.
    pub source: String,
    /// Target ARB as JSON text, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Free-text label describing where the strings come from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
}

impl ConvertOptions {
    pub fn new(source: impl Into<String>) -> Self {
        ConvertOptions {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_original(mut self, original: impl Into<String>) -> Self {
        self.original = Some(original.into());
        self
    }

    pub fn with_source_language(mut self, language: impl Into<String>) -> Self {
        self.source_language = Some(language.into());
        self
    }

    pub fn with_target_language(mut self, language: impl Into<String>) -> Self {
        self.target_language = Some(language.into());
        self
    }

    /// Fills in the provenance label and source locale when absent or empty.
    pub fn with_defaults(mut self) -> Self {
        if non_empty(self.original.as_deref()).is_none() {
            self.original = Some(DEFAULT_ORIGINAL.to_string());
        }
        if non_empty(self.source_language.as_deref()).is_none() {
            self.source_language = Some(DEFAULT_SOURCE_LANGUAGE.to_string());
        }
        self
    }

    /// The target ARB text, treating an empty string as absent.
    pub fn target_text(&self) -> Option<&str> {
        non_empty(self.target.as_deref())
    }
}

/// Interchange side of a conversion: the whole document text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    pub content: String,
}

impl ParseOptions {
    pub fn new(content: impl Into<String>) -> Self {
        ParseOptions {
            content: content.into(),
        }
    }
}

/// `None` for missing and empty values alike.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Owned counterpart of [`non_empty`], used when building parse results.
pub(crate) fn non_empty_owned(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
