//! Chrome component library for htracker
//!
//! Components are serializable props structs rendered by the host frontend.
//! Event handling is expressed as string handler identifiers the host maps
//! back to scaffold events; the structs themselves stay pure data.

use crate::navigation::Route;
use crate::sheet::SheetState;
use crate::theme::{Color, Theme};
use crate::tokens::radius;
use serde::{Deserialize, Serialize};

/// Event handler callback identifier
pub type EventHandler = String;

// =============================================================================
// Top Bars
// =============================================================================

/// Main top bar: title, open-drawer action and add-habit action
///
/// Shown on the top-level sections (Today, Habits, History).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainTopBar {
    /// Localized title
    pub title: String,
    /// Bar surface color
    pub background_color: Color,
    /// Icon and title color
    pub content_color: Color,
    /// Handler for the drawer hamburger action
    pub on_open_drawer: EventHandler,
    /// Handler for the add-habit action
    pub on_navigate_to_add_habits: EventHandler,
}

impl MainTopBar {
    /// Build the main bar for a top-level section
    pub fn new(title: impl Into<String>, theme: &Theme) -> Self {
        Self {
            title: title.into(),
            background_color: theme.colors.primary.clone(),
            content_color: theme.colors.on_primary.clone(),
            on_open_drawer: "open_drawer".to_string(),
            on_navigate_to_add_habits: "add_habits".to_string(),
        }
    }
}

/// Step top bar: title plus back action
///
/// Shown on Settings and AddHabits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepTopBar {
    /// Localized title
    pub title: String,
    /// Bar surface color
    pub background_color: Color,
    /// Icon and title color
    pub content_color: Color,
    /// Handler for the back action
    pub on_back: EventHandler,
}

impl StepTopBar {
    /// Build the step bar
    pub fn new(title: impl Into<String>, theme: &Theme) -> Self {
        Self {
            title: title.into(),
            background_color: theme.colors.primary.clone(),
            content_color: theme.colors.on_primary.clone(),
            on_back: "back".to_string(),
        }
    }
}

/// Window top bar: back action only, no title
///
/// Shown on EditHabits and TemplatesHabits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowTopBar {
    /// Bar surface color
    pub background_color: Color,
    /// Icon color
    pub content_color: Color,
    /// Handler for the back action
    pub on_back: EventHandler,
}

impl WindowTopBar {
    /// Build the window bar
    pub fn new(theme: &Theme) -> Self {
        Self {
            background_color: theme.colors.primary.clone(),
            content_color: theme.colors.on_primary.clone(),
            on_back: "back".to_string(),
        }
    }
}

// =============================================================================
// Bottom Navigation Bar
// =============================================================================

/// Tabs of the bottom navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BottomTab {
    /// Today's checklist
    Today,
    /// All habits
    Habits,
    /// Completion history
    History,
}

impl BottomTab {
    /// All tabs in display order
    pub fn all() -> [BottomTab; 3] {
        [BottomTab::Today, BottomTab::Habits, BottomTab::History]
    }

    /// The route this tab navigates to
    pub fn route(&self) -> Route {
        match self {
            BottomTab::Today => Route::Today,
            BottomTab::Habits => Route::Habits,
            BottomTab::History => Route::History,
        }
    }

    /// Icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            BottomTab::Today => "calendar-check",
            BottomTab::Habits => "list",
            BottomTab::History => "clock",
        }
    }

    /// Translation key for the tab label
    pub fn label_key(&self) -> &'static str {
        match self {
            BottomTab::Today => "today",
            BottomTab::Habits => "habits",
            BottomTab::History => "history",
        }
    }
}

/// One bottom bar item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottomBarItem {
    /// Which tab this is
    pub tab: BottomTab,
    /// Localized label
    pub label: String,
    /// Whether the current route belongs to this tab
    pub selected: bool,
}

/// Bottom navigation bar across the top-level sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottomNavigateBar {
    /// Items in display order
    pub items: Vec<BottomBarItem>,
    /// Bar surface color
    pub background_color: Color,
    /// Color of the selected item
    pub selected_color: Color,
    /// Color of unselected items
    pub unselected_color: Color,
}

impl BottomNavigateBar {
    /// Build the bar with the tab matching `current` marked selected
    ///
    /// `labels` are the localized labels in [`BottomTab::all`] order.
    pub fn new(current: &Route, labels: [String; 3], theme: &Theme) -> Self {
        let items = BottomTab::all()
            .into_iter()
            .zip(labels)
            .map(|(tab, label)| BottomBarItem {
                tab,
                label,
                selected: tab.route() == *current,
            })
            .collect();
        Self {
            items,
            background_color: theme.colors.primary.clone(),
            selected_color: theme.colors.secondary.clone(),
            unselected_color: theme.colors.on_primary.clone(),
        }
    }
}

// =============================================================================
// Drawer
// =============================================================================

/// Destinations reachable from the side drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerDestination {
    /// Today's checklist
    Today,
    /// All habits
    Habits,
    /// Completion history
    History,
    /// Application settings
    Settings,
}

impl DrawerDestination {
    /// All destinations in display order
    pub fn all() -> [DrawerDestination; 4] {
        [
            DrawerDestination::Today,
            DrawerDestination::Habits,
            DrawerDestination::History,
            DrawerDestination::Settings,
        ]
    }

    /// The route this destination navigates to
    pub fn route(&self) -> Route {
        match self {
            DrawerDestination::Today => Route::Today,
            DrawerDestination::Habits => Route::Habits,
            DrawerDestination::History => Route::History,
            DrawerDestination::Settings => Route::Settings,
        }
    }

    /// Whether selecting this destination clears the back stack
    ///
    /// Switching between top-level sections resets history so Back never
    /// returns to a previous section; Settings is pushed on top instead.
    pub fn clears_back_stack(&self) -> bool {
        !matches!(self, DrawerDestination::Settings)
    }

    /// Translation key for the destination label
    pub fn label_key(&self) -> &'static str {
        match self {
            DrawerDestination::Today => "today",
            DrawerDestination::Habits => "habits",
            DrawerDestination::History => "history",
            DrawerDestination::Settings => "settings",
        }
    }
}

/// One drawer row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerItem {
    /// Which destination this row navigates to
    pub destination: DrawerDestination,
    /// Localized label
    pub label: String,
    /// Whether the current route is this destination
    pub selected: bool,
}

/// Side drawer content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainDrawer {
    /// Rows in display order
    pub items: Vec<DrawerItem>,
    /// Drawer surface color
    pub background_color: Color,
    /// Row label color
    pub content_color: Color,
    /// Scrim behind the open drawer
    pub scrim_color: Color,
    /// Trailing edge corner radius
    pub corner_radius: f32,
}

impl MainDrawer {
    /// Build the drawer with the row matching `current` marked selected
    ///
    /// `labels` are the localized labels in [`DrawerDestination::all`] order.
    pub fn new(current: &Route, labels: [String; 4], theme: &Theme) -> Self {
        let items = DrawerDestination::all()
            .into_iter()
            .zip(labels)
            .map(|(destination, label)| DrawerItem {
                destination,
                label,
                selected: destination.route() == *current,
            })
            .collect();
        Self {
            items,
            background_color: theme.colors.primary.clone(),
            content_color: theme.colors.on_primary.clone(),
            scrim_color: theme.colors.scrim.clone(),
            corner_radius: radius::DRAWER,
        }
    }
}

// =============================================================================
// Sheet Container
// =============================================================================

/// The shared bottom sheet container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetContainer {
    /// Current sheet state (hidden, or shown with content)
    pub state: SheetState,
    /// Sheet surface color
    pub background_color: Color,
    /// Sheet content color
    pub content_color: Color,
    /// Scrim behind the open sheet
    pub scrim_color: Color,
    /// Top corner radius
    pub corner_radius: f32,
}

impl SheetContainer {
    /// Build the container for the current sheet state
    pub fn new(state: SheetState, theme: &Theme) -> Self {
        Self {
            state,
            background_color: theme.colors.primary.clone(),
            content_color: theme.colors.on_primary.clone(),
            scrim_color: theme.colors.scrim.clone(),
            corner_radius: radius::SHEET,
        }
    }
}
