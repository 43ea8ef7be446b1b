//! Locale discovery for ARB input files.

use lazy_static::lazy_static;
use regex::Regex;
use unic_langid::LanguageIdentifier;

lazy_static! {
    static ref ARB_LOCALE_REGEX: Regex = Regex::new(r#""@@locale":\s*"(.+)""#).unwrap();
    static ref LOCALE_REGEX: Regex =
        Regex::new(r"(^|[\W_])([a-z]{2}[-_][A-Z]{2})($|[\W_])").unwrap();
}

/// The raw `@@locale` value of an ARB document, or an empty string.
pub fn determine_arb_locale(content: &str) -> String {
    ARB_LOCALE_REGEX
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Finds the first `ll-CC`/`ll_CC` locale among `candidates`, hyphenated.
///
/// Candidates are tried in order: an explicit override, the `@@locale` value,
/// then the file name. Matches that are not valid language identifiers are
/// skipped.
///
/// # Example
/// ```rust
/// use arbcodec_cli::parse_locale;
/// assert_eq!(parse_locale([None, Some("app_de_DE.arb")]), Some("de-DE".to_string()));
/// assert_eq!(parse_locale([Some("nothing valid")]), None);
/// ```
pub fn parse_locale<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    candidates.into_iter().flatten().find_map(|candidate| {
        let found = LOCALE_REGEX.captures(candidate)?.get(2)?.as_str();
        let locale = found.replace('_', "-");
        match locale.parse::<LanguageIdentifier>() {
            Ok(_) => Some(locale),
            Err(e) => {
                tracing::debug!(candidate, error = %e, "ignoring invalid locale");
                None
            }
        }
    })
}
