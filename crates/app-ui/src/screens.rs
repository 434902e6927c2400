//! Screen view-models
//!
//! Screens are external collaborators to the router: each is a pure builder
//! taking its route's parameters and producing a serializable [`ScreenView`].
//! Navigation intents leave a screen as typed [`ScreenEvent`]s which the
//! scaffold translates into router calls; screens never touch the stack.

use crate::navigation::Route;
use crate::theme::ThemeName;
use serde::{Deserialize, Serialize};

/// Navigation intent raised by a screen or chrome element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScreenEvent {
    /// Splash finished; enter the main area
    SplashFinished,
    /// Open the side drawer
    OpenDrawer,
    /// Start creating a habit
    AddHabitsRequested,
    /// Edit an existing habit
    EditHabitsRequested {
        /// The habit to edit
        habit_id: i64,
    },
    /// Browse a template set
    TemplatesRequested {
        /// The template set to browse
        templates_id: i32,
    },
    /// A template was chosen; edit a habit based on it
    TemplateChosen {
        /// The chosen template
        template_id: i64,
    },
    /// Open the icon picker sheet
    OpenChooseIcon,
    /// Open the icon color picker sheet
    OpenChooseIconColor,
    /// Settings requested a theme change
    ThemeChangeRequested {
        /// The requested theme
        theme: ThemeName,
    },
    /// Back action (top bar or hardware)
    BackRequested,
}

/// Rendered screen body handed to the host frontend
///
/// Bodies are placeholders: the shell's responsibility is wiring, not screen
/// content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenView {
    /// Launch screen
    Splash,
    /// Today's checklist placeholder
    Today {
        /// Placeholder body text
        text: String,
    },
    /// Habit list
    Habits,
    /// History placeholder
    History {
        /// Placeholder body text
        text: String,
    },
    /// Habit creation chooser
    AddHabits,
    /// Habit editor
    EditHabits {
        /// Habit being edited, if any
        habit_id: Option<i64>,
        /// Template being instantiated, if any
        template_id: Option<i64>,
    },
    /// Template list
    TemplatesHabits {
        /// Template set shown
        templates_id: i32,
    },
    /// Settings
    Settings {
        /// Currently selected theme
        theme: ThemeName,
    },
}

/// Build the screen view for the current route
///
/// Pure: same route and theme always produce the same view. Parameterized
/// routes hand their own parameters through; nothing else is visible to a
/// screen.
pub fn screen_for(route: &Route, theme: ThemeName) -> ScreenView {
    match route {
        Route::Splash => ScreenView::Splash,
        Route::Today => ScreenView::Today {
            text: "TODAY".to_string(),
        },
        Route::Habits => ScreenView::Habits,
        Route::History => ScreenView::History {
            text: "HISTORY".to_string(),
        },
        Route::AddHabits => ScreenView::AddHabits,
        Route::EditHabits {
            habit_id,
            template_id,
        } => ScreenView::EditHabits {
            habit_id: *habit_id,
            template_id: *template_id,
        },
        Route::TemplatesHabits { templates_id } => ScreenView::TemplatesHabits {
            templates_id: *templates_id,
        },
        Route::Settings => ScreenView::Settings { theme },
    }
}
