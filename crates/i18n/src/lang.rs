//! Language negotiation
//!
//! Maps the host's requested locales onto the set of locales the app ships
//! translations for.

use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use unic_langid::LanguageIdentifier;

/// Locale used when negotiation finds no match
pub const DEFAULT_LOCALE: &str = "en";

/// Locale tags the app ships resources for
pub const AVAILABLE: &[&str] = &["en", "ru"];

/// Locales the app ships resources for
///
/// The tags in [`AVAILABLE`] are static and well-formed, so parse failures
/// are filtered out rather than surfaced.
pub fn available_locales() -> Vec<LanguageIdentifier> {
    AVAILABLE
        .iter()
        .filter_map(|tag| tag.parse().ok())
        .collect()
}

/// Negotiate the best available locale for the host's requested list
///
/// Unparsable requested tags are ignored; with no match the default locale
/// wins.
pub fn negotiate(requested: &[&str]) -> LanguageIdentifier {
    let requested: Vec<LanguageIdentifier> = requested
        .iter()
        .filter_map(|tag| tag.parse().ok())
        .collect();
    let available = available_locales();
    let default: LanguageIdentifier = DEFAULT_LOCALE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default());

    let negotiated = negotiate_languages(
        &requested,
        &available,
        Some(&default),
        NegotiationStrategy::Filtering,
    )
    .first()
    .map(|locale| (*locale).clone());
    negotiated.unwrap_or(default)
}
