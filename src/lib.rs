//! htracker — navigation and layout shell of a habit-tracking app
//!
//! The shell wires a navigation stack, top bars, a bottom navigation bar, a
//! side drawer and a shared modal bottom sheet, and routes between a fixed
//! set of screens. Screen bodies are placeholders; the crate's subject is the
//! wiring.
//!
//! - [`app_ui`] provides routes, the router, chrome view-models, themes
//! - [`app_platform`] provides the host seams (system bars)
//! - [`i18n`] provides localized titles and labels
//! - [`scaffold`] composes them into the running shell

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod scaffold;

pub use scaffold::{AppScaffold, DrawerView, ScaffoldView, TopBarView};

// Re-export the crates the scaffold API surfaces.
pub use app_platform;
pub use app_ui;
pub use i18n;
