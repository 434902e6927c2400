//! Internationalization for htracker
//!
//! Screen titles and chrome labels are resolved through a fluent-based
//! translator with embedded resources and language negotiation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lang;
pub mod translator;

pub use lang::{available_locales, negotiate, DEFAULT_LOCALE};
pub use translator::{I18nError, Translator};
