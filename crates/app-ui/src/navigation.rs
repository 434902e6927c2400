//! Navigation system for htracker
//!
//! This module provides the type-safe navigation core of the shell:
//! - Route definitions with typed parameters
//! - Navigation stack management (push / pop / clear-and-reset)
//! - A router with a synchronous observer list and committed side effects
//! - The chrome policy mapping each route to its top bar, bottom bar and
//!   drawer availability

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// =============================================================================
// Route Definitions
// =============================================================================

/// All possible routes in the application
///
/// Routes that carry parameters carry them inline, so an entry on the back
/// stack is self-describing and round-trips through serde without a separate
/// argument bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Launch screen, cleared away when entering the main area
    Splash,
    /// Today's habit checklist
    Today,
    /// All habits
    Habits,
    /// Completion history
    History,
    /// Habit creation chooser
    AddHabits,
    /// Habit editor, opened either for an existing habit or from a template
    EditHabits {
        /// Existing habit to edit
        #[serde(skip_serializing_if = "Option::is_none")]
        habit_id: Option<i64>,
        /// Template to instantiate (mutually exclusive with `habit_id` by
        /// convention, both optional)
        #[serde(skip_serializing_if = "Option::is_none")]
        template_id: Option<i64>,
    },
    /// Template list for one template set
    TemplatesHabits {
        /// Template set identifier
        templates_id: i32,
    },
    /// Application settings
    Settings,
}

impl Default for Route {
    fn default() -> Self {
        Route::Splash
    }
}

impl Route {
    /// Translation key for this route's title, if it has one
    pub fn title_key(&self) -> Option<&'static str> {
        match self {
            Route::Splash => None,
            Route::Today => Some("today"),
            Route::Habits => Some("habits"),
            Route::History => Some("history"),
            Route::AddHabits => Some("add-habits"),
            Route::EditHabits { .. } => Some("edit-habits"),
            Route::TemplatesHabits { .. } => Some("templates-habits"),
            Route::Settings => Some("settings"),
        }
    }

    /// Whether this is one of the top-level drawer/bottom-bar sections
    pub fn is_top_level(&self) -> bool {
        matches!(self, Route::Today | Route::Habits | Route::History)
    }

    /// Stable name used in logs and serialized views
    pub fn name(&self) -> &'static str {
        match self {
            Route::Splash => "splash",
            Route::Today => "today",
            Route::Habits => "habits",
            Route::History => "history",
            Route::AddHabits => "add_habits",
            Route::EditHabits { .. } => "edit_habits",
            Route::TemplatesHabits { .. } => "templates_habits",
            Route::Settings => "settings",
        }
    }

    /// Serialize this route (with parameters) for stack persistence or host
    /// hand-off
    pub fn encode(&self) -> String {
        // Route serialization cannot fail: the enum contains only plain data.
        serde_json::to_string(self).unwrap_or_else(|_| "{\"route\":\"Splash\"}".to_string())
    }

    /// Decode a serialized route, validating parameters
    ///
    /// Malformed input surfaces [`NavigationError::MalformedParameters`]
    /// rather than silently producing an unroutable value.
    pub fn decode(encoded: &str) -> Result<Self, NavigationError> {
        serde_json::from_str(encoded)
            .map_err(|source| NavigationError::MalformedParameters { source })
    }

    /// The chrome (top bar, bottom bar, drawer availability) for this route
    pub fn chrome(&self) -> ScaffoldChrome {
        match self {
            Route::Today | Route::Habits | Route::History => ScaffoldChrome {
                top_bar: TopBarKind::Main,
                bottom_bar: true,
                drawer_gestures: true,
            },
            Route::Settings | Route::AddHabits => ScaffoldChrome {
                top_bar: TopBarKind::Step,
                bottom_bar: false,
                drawer_gestures: false,
            },
            Route::EditHabits { .. } | Route::TemplatesHabits { .. } => ScaffoldChrome {
                top_bar: TopBarKind::Window,
                bottom_bar: false,
                drawer_gestures: false,
            },
            Route::Splash => ScaffoldChrome {
                top_bar: TopBarKind::Hidden,
                bottom_bar: false,
                drawer_gestures: false,
            },
        }
    }
}

// =============================================================================
// Chrome Policy
// =============================================================================

/// Which top bar variant a route shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopBarKind {
    /// No top bar (splash)
    Hidden,
    /// Title, open-drawer action and add-habit action
    Main,
    /// Title and back action
    Step,
    /// Back action only
    Window,
}

/// Chrome configuration derived from the current route
///
/// This is a pure function of the route; see [`Route::chrome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldChrome {
    /// Top bar variant
    pub top_bar: TopBarKind,
    /// Whether the bottom navigation bar is shown
    pub bottom_bar: bool,
    /// Whether drawer swipe gestures are enabled
    pub drawer_gestures: bool,
}

// =============================================================================
// Navigation Errors
// =============================================================================

/// Navigation errors
#[derive(Debug, Error)]
pub enum NavigationError {
    /// A serialized stack entry failed to decode into a valid route
    #[error("malformed route parameters: {source}")]
    MalformedParameters {
        /// Underlying decode failure
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route, parameters included
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: Uuid::new_v4().to_string(),
        }
    }
}

/// Ordered history of visited screens, last entry = visible screen
///
/// Invariant: the stack is never empty while the app is running. Only
/// [`NavigationStack::reset`] replaces the whole stack, and it always leaves
/// exactly one entry behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries (bottom to top)
    entries: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(root)],
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top entry (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Discard the entire stack and replace it with a single entry
    pub fn reset(&mut self, route: Route) {
        self.entries = vec![StackEntry::new(route)];
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self.current_entry().route
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        self.entries.last().expect("stack is never empty")
    }

    /// Check if back navigation is possible
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

// =============================================================================
// Router
// =============================================================================

/// Side effect attached to a navigation, run once the transition commits
pub type SideEffect = Box<dyn FnOnce()>;

/// Observer notified synchronously with the new top route on every commit
pub type Observer = Box<dyn FnMut(&Route)>;

/// Handle for removing a router subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Screen router owning the navigation stack
///
/// The router is the single owner of navigation state. All mutation happens
/// through [`Router::navigate_to`] and [`Router::back`] on one cooperative
/// event turn at a time; observers are notified synchronously with the commit
/// so chrome consumers never see a stale route.
///
/// Side effects attached to a navigation are queued against the committed
/// entry and run by [`Router::run_pending_effect`] at the end of the event
/// turn. If a later navigation supersedes the entry before the effect runs,
/// the effect is dropped (last-write-wins).
pub struct Router {
    stack: NavigationStack,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    pending_effect: Option<(String, SideEffect)>,
}

impl Router {
    /// Create a router starting at the splash screen
    pub fn new() -> Self {
        Self::with_root(Route::Splash)
    }

    /// Create a router with an explicit root route
    pub fn with_root(root: Route) -> Self {
        Self {
            stack: NavigationStack::new(root),
            observers: Vec::new(),
            next_subscription: 0,
            pending_effect: None,
        }
    }

    /// The currently visible route
    pub fn current_route(&self) -> &Route {
        self.stack.current()
    }

    /// The navigation stack (read-only; the router is the sole owner)
    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    /// Navigate forward to `route`
    ///
    /// With `clear_stack` the prior history is discarded and the new route
    /// becomes the only entry, so Back never returns across a top-level
    /// section switch. `side_effect`, if given, is queued against the new
    /// entry and runs via [`Router::run_pending_effect`] only while that
    /// entry is still on top.
    pub fn navigate_to(&mut self, route: Route, clear_stack: bool, side_effect: Option<SideEffect>) {
        tracing::debug!(
            route = route.name(),
            clear_stack,
            depth = self.stack.depth(),
            "navigate"
        );
        if clear_stack {
            self.stack.reset(route);
        } else {
            self.stack.push(route);
        }
        if let Some(effect) = side_effect {
            self.pending_effect = Some((self.stack.current_entry().key.clone(), effect));
        }
        self.notify();
    }

    /// Navigate back, making the previous entry visible
    ///
    /// Returns `false` without mutating anything when only one entry remains;
    /// exiting the app on that signal is a host concern.
    pub fn back(&mut self) -> bool {
        if !self.stack.pop() {
            tracing::debug!("back ignored at stack root");
            return false;
        }
        tracing::debug!(route = self.stack.current().name(), "back");
        self.notify();
        true
    }

    /// Subscribe to route changes
    ///
    /// The observer is invoked synchronously on every commit, and once
    /// immediately with the current route so new consumers start consistent.
    pub fn subscribe(&mut self, mut observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        observer(self.stack.current());
        self.observers.push((id, observer));
        id
    }

    /// Remove a subscription; unknown ids are ignored
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.observers.retain(|(existing, _)| *existing != id);
    }

    /// Run the queued side effect if its transition is still current
    ///
    /// Called by the composition root at the end of each event turn. An
    /// effect whose entry has been superseded (by a further navigation or a
    /// back pop) is dropped without running.
    pub fn run_pending_effect(&mut self) {
        let Some((key, effect)) = self.pending_effect.take() else {
            return;
        };
        if key == self.stack.current_entry().key {
            tracing::debug!(route = self.stack.current().name(), "running navigation side effect");
            effect();
        } else {
            tracing::debug!("navigation side effect superseded, dropped");
        }
    }

    fn notify(&mut self) {
        let route = self.stack.current().clone();
        for (_, observer) in &mut self.observers {
            observer(&route);
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
