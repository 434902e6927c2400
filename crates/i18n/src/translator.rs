//! Message formatting
//!
//! A [`Translator`] owns one fluent bundle for the negotiated locale and
//! resolves message keys to localized strings. Unknown keys fall back to the
//! key itself so a missing translation never breaks the chrome.

use fluent::{FluentBundle, FluentResource};
use thiserror::Error;
use unic_langid::LanguageIdentifier;

use crate::lang::negotiate;

const EN_FTL: &str = include_str!("../resources/en.ftl");
const RU_FTL: &str = include_str!("../resources/ru.ftl");

/// Internationalization errors
#[derive(Debug, Error)]
pub enum I18nError {
    /// An embedded resource failed to parse
    #[error("failed to parse fluent resource for locale {locale}")]
    ResourceParse {
        /// Locale whose resource is broken
        locale: String,
    },

    /// A resource could not be added to its bundle
    #[error("failed to build fluent bundle for locale {locale}")]
    Bundle {
        /// Locale whose bundle is broken
        locale: String,
    },
}

/// Resolves message keys to localized strings
pub struct Translator {
    bundle: FluentBundle<FluentResource>,
    locale: LanguageIdentifier,
}

impl Translator {
    /// Build a translator for the best match of the requested locales
    pub fn new(requested: &[&str]) -> Result<Self, I18nError> {
        let locale = negotiate(requested);
        let source = match locale.language.as_str() {
            "ru" => RU_FTL,
            _ => EN_FTL,
        };

        let resource =
            FluentResource::try_new(source.to_string()).map_err(|_| I18nError::ResourceParse {
                locale: locale.to_string(),
            })?;

        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        // No placeables in the shell strings; skip the unicode isolation marks.
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|_| I18nError::Bundle {
                locale: locale.to_string(),
            })?;

        Ok(Self { bundle, locale })
    }

    /// The negotiated locale this translator serves
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Resolve `key` to its localized string
    ///
    /// Falls back to the key itself when the message is missing, logging the
    /// miss.
    pub fn text(&self, key: &str) -> String {
        let Some(pattern) = self.bundle.get_message(key).and_then(|m| m.value()) else {
            tracing::warn!(key, locale = %self.locale, "missing translation");
            return key.to_string();
        };
        let mut errors = Vec::new();
        let value = self.bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(key, ?errors, "translation formatted with errors");
        }
        value.into_owned()
    }
}
