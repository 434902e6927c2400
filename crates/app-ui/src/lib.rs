//! User interface for htracker
//!
//! This crate provides the navigation and layout primitives of the
//! habit-tracker shell: routes and the back stack, the chrome policy, the
//! modal bottom sheet state machine, chrome component view-models, themes
//! and design tokens, and screen view-models.
//!
//! # Modules
//!
//! - [`navigation`] - Routes, navigation stack, router, chrome policy
//! - [`sheet`] - Modal bottom sheet state machine
//! - [`components`] - Chrome component view-models
//! - [`screens`] - Screen view-models and navigation events
//! - [`theme`] - Theme provider and color roles
//! - [`tokens`] - Design tokens (spacing, shapes, motion, stacking)
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::{Route, Router, TopBarKind};
//!
//! let mut router = Router::new();
//! router.navigate_to(Route::Today, true, None);
//! assert_eq!(*router.current_route(), Route::Today);
//! assert_eq!(router.current_route().chrome().top_bar, TopBarKind::Main);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod screens;
pub mod sheet;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use navigation::{
    NavigationError, NavigationStack, Route, Router, ScaffoldChrome, SideEffect, StackEntry,
    SubscriptionId, TopBarKind,
};

pub use sheet::{SheetContent, SheetHost, SheetState, SheetTransition};

pub use components::{
    BottomNavigateBar, BottomTab, DrawerDestination, MainDrawer, MainTopBar, SheetContainer,
    StepTopBar, WindowTopBar,
};

pub use screens::{screen_for, ScreenEvent, ScreenView};

pub use theme::{
    all_themes, dark_theme, get_theme, light_theme, Theme, ThemeColors, ThemeName, ThemeState,
};
