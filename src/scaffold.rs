//! Application scaffold
//!
//! The composition root of the shell. It owns the router, the sheet host,
//! the theme selection and the drawer state, translates screen and chrome
//! events into router calls, applies committed navigation side effects
//! (system-bar recoloring on the Splash -> Today edge), and renders the whole
//! shell as a serializable [`ScaffoldView`] for the host frontend.
//!
//! All mutation happens on one cooperative event turn at a time; every public
//! method is a complete turn ending with [`Router::run_pending_effect`].

use std::cell::RefCell;
use std::rc::Rc;

use app_platform::SystemBarStyler;
use app_ui::navigation::{NavigationError, Route, Router, SubscriptionId, TopBarKind};
use app_ui::screens::{screen_for, ScreenEvent, ScreenView};
use app_ui::sheet::{SheetContent, SheetHost, SheetTransition};
use app_ui::theme::{Theme, ThemeState};
use app_ui::{
    BottomNavigateBar, BottomTab, DrawerDestination, MainDrawer, MainTopBar, SheetContainer,
    StepTopBar, WindowTopBar,
};
use i18n::{I18nError, Translator};
use serde::{Deserialize, Serialize};

// =============================================================================
// Rendered View
// =============================================================================

/// The top bar actually rendered for the current route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopBarView {
    /// No top bar (splash)
    Hidden,
    /// Main bar with drawer and add-habit actions
    Main(MainTopBar),
    /// Step bar with title and back
    Step(StepTopBar),
    /// Window bar with back only
    Window(WindowTopBar),
}

/// Drawer portion of the rendered scaffold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerView {
    /// Whether swipe gestures may open the drawer on this route
    pub gestures_enabled: bool,
    /// Whether the drawer is currently open
    pub open: bool,
    /// Drawer content
    pub content: MainDrawer,
}

/// Complete rendered shell handed to the host frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldView {
    /// Stable name of the visible route
    pub route: String,
    /// Top bar for the route
    pub top_bar: TopBarView,
    /// Bottom navigation bar, present only on top-level sections
    pub bottom_bar: Option<BottomNavigateBar>,
    /// Drawer state and content
    pub drawer: DrawerView,
    /// Shared bottom sheet container
    pub sheet: SheetContainer,
    /// Screen body
    pub screen: ScreenView,
}

// =============================================================================
// Scaffold
// =============================================================================

/// Composition root wiring router, chrome, sheet, theme and host platform
pub struct AppScaffold<S: SystemBarStyler + 'static> {
    router: Router,
    sheet: SheetHost,
    theme: ThemeState,
    translator: Translator,
    drawer_open: bool,
    system_bars: Rc<RefCell<S>>,
}

impl<S: SystemBarStyler + 'static> AppScaffold<S> {
    /// Create the scaffold starting at the splash screen
    pub fn new(system_bars: S, locales: &[&str]) -> Result<Self, I18nError> {
        Ok(Self {
            router: Router::new(),
            sheet: SheetHost::new(),
            theme: ThemeState::new(),
            translator: Translator::new(locales)?,
            drawer_open: false,
            system_bars: Rc::new(RefCell::new(system_bars)),
        })
    }

    /// The currently visible route
    pub fn current_route(&self) -> &Route {
        self.router.current_route()
    }

    /// Depth of the navigation stack
    pub fn stack_depth(&self) -> usize {
        self.router.stack().depth()
    }

    /// Whether the drawer is open
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Current sheet host (read-only)
    pub fn sheet(&self) -> &SheetHost {
        &self.sheet
    }

    /// Currently selected theme
    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// The host system-bar styler, shared for inspection
    pub fn system_bars(&self) -> Rc<RefCell<S>> {
        Rc::clone(&self.system_bars)
    }

    /// Subscribe to route changes; notified synchronously on every commit
    pub fn subscribe_routes(&mut self, observer: Box<dyn FnMut(&Route)>) -> SubscriptionId {
        self.router.subscribe(observer)
    }

    /// Remove a route subscription
    pub fn unsubscribe_routes(&mut self, id: SubscriptionId) {
        self.router.unsubscribe(id);
    }

    // -------------------------------------------------------------------------
    // Event handling
    // -------------------------------------------------------------------------

    /// Handle an event raised by the current screen or its chrome
    pub fn handle(&mut self, event: ScreenEvent) {
        tracing::debug!(?event, route = self.router.current_route().name(), "scaffold event");
        match event {
            ScreenEvent::SplashFinished => self.leave_splash(),
            ScreenEvent::OpenDrawer => {
                if self.router.current_route().chrome().drawer_gestures {
                    self.drawer_open = true;
                }
            }
            ScreenEvent::AddHabitsRequested => {
                self.router.navigate_to(Route::AddHabits, false, None);
            }
            ScreenEvent::EditHabitsRequested { habit_id } => {
                self.router.navigate_to(
                    Route::EditHabits {
                        habit_id: Some(habit_id),
                        template_id: None,
                    },
                    false,
                    None,
                );
            }
            ScreenEvent::TemplatesRequested { templates_id } => {
                self.router
                    .navigate_to(Route::TemplatesHabits { templates_id }, false, None);
            }
            ScreenEvent::TemplateChosen { template_id } => {
                self.router.navigate_to(
                    Route::EditHabits {
                        habit_id: None,
                        template_id: Some(template_id),
                    },
                    false,
                    None,
                );
            }
            ScreenEvent::OpenChooseIcon => {
                self.sheet.show(SheetContent::ChooseIcon);
            }
            ScreenEvent::OpenChooseIconColor => {
                self.sheet.show(SheetContent::ChooseIconColor);
            }
            ScreenEvent::ThemeChangeRequested { theme } => {
                if self.theme.set(theme) {
                    let color = self.theme.theme().colors.primary;
                    self.system_bars.borrow_mut().set_system_bars_color(&color);
                }
            }
            ScreenEvent::BackRequested => {
                self.router.back();
            }
        }
        self.router.run_pending_effect();
    }

    /// Select a destination from the open drawer
    ///
    /// Top-level sections replace the whole back stack so Back never crosses
    /// a section switch; Settings is pushed on top. The drawer closes either
    /// way.
    pub fn select_drawer_destination(&mut self, destination: DrawerDestination) {
        let route = destination.route();
        if *self.router.current_route() != route {
            self.router
                .navigate_to(route, destination.clears_back_stack(), None);
        }
        self.drawer_open = false;
        self.router.run_pending_effect();
    }

    /// Select a bottom bar tab
    pub fn select_bottom_tab(&mut self, tab: BottomTab) {
        let route = tab.route();
        if *self.router.current_route() != route {
            self.router.navigate_to(route, true, None);
        }
        self.router.run_pending_effect();
    }

    /// Hardware back press
    ///
    /// An open sheet consumes back first, then an open drawer, then the
    /// navigation stack. Returns `false` when nothing was left to pop; the
    /// host may exit the app on that signal.
    pub fn system_back(&mut self) -> bool {
        if self.sheet.is_shown() {
            self.sheet.hide();
            return true;
        }
        if self.drawer_open {
            self.drawer_open = false;
            return true;
        }
        let popped = self.router.back();
        self.router.run_pending_effect();
        popped
    }

    /// Close the drawer without navigating
    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Hide the bottom sheet; navigation never does this implicitly
    pub fn hide_sheet(&mut self) -> SheetTransition {
        self.sheet.hide()
    }

    /// Open a route received in serialized form (state restore, host intents)
    ///
    /// Malformed parameters are surfaced to the caller, and the scaffold
    /// falls back to the Habits section instead of rendering nothing.
    pub fn open_serialized_route(&mut self, encoded: &str) -> Result<(), NavigationError> {
        match Route::decode(encoded) {
            Ok(route) => {
                self.router.navigate_to(route, false, None);
                self.router.run_pending_effect();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "dropping malformed route, falling back");
                self.router.navigate_to(Route::Habits, true, None);
                self.router.run_pending_effect();
                Err(err)
            }
        }
    }

    fn leave_splash(&mut self) {
        let color = self.theme.theme().colors.primary;
        let bars = Rc::clone(&self.system_bars);
        self.router.navigate_to(
            Route::Today,
            true,
            Some(Box::new(move || {
                let mut bars = bars.borrow_mut();
                bars.set_status_bar_color(&color);
                bars.set_navigation_bar_color(&color);
                bars.set_system_bars_color(&color);
            })),
        );
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Render the complete shell for the current state
    pub fn render(&self) -> ScaffoldView {
        let route = self.router.current_route().clone();
        let chrome = route.chrome();
        let theme = self.theme.theme();

        let title = route
            .title_key()
            .map(|key| self.translator.text(key))
            .unwrap_or_default();

        let top_bar = match chrome.top_bar {
            TopBarKind::Hidden => TopBarView::Hidden,
            TopBarKind::Main => TopBarView::Main(MainTopBar::new(title, &theme)),
            TopBarKind::Step => TopBarView::Step(StepTopBar::new(title, &theme)),
            TopBarKind::Window => TopBarView::Window(WindowTopBar::new(&theme)),
        };

        let bottom_bar = chrome.bottom_bar.then(|| {
            let labels = BottomTab::all().map(|tab| self.translator.text(tab.label_key()));
            BottomNavigateBar::new(&route, labels, &theme)
        });

        let drawer_labels =
            DrawerDestination::all().map(|dest| self.translator.text(dest.label_key()));
        let drawer = DrawerView {
            gestures_enabled: chrome.drawer_gestures,
            open: self.drawer_open,
            content: MainDrawer::new(&route, drawer_labels, &theme),
        };

        ScaffoldView {
            route: route.name().to_string(),
            top_bar,
            bottom_bar,
            drawer,
            sheet: SheetContainer::new(self.sheet.state(), &theme),
            screen: screen_for(&route, self.theme.name()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use app_platform::{BarCall, RecordingSystemBars};
    use app_ui::sheet::SheetState;
    use app_ui::theme::ThemeName;

    fn scaffold() -> AppScaffold<RecordingSystemBars> {
        AppScaffold::new(RecordingSystemBars::new(), &["en"]).unwrap()
    }

    #[test]
    fn starts_on_splash_with_no_chrome() {
        let shell = scaffold();
        assert_eq!(*shell.current_route(), Route::Splash);

        let view = shell.render();
        assert_eq!(view.top_bar, TopBarView::Hidden);
        assert!(view.bottom_bar.is_none());
        assert!(!view.drawer.gestures_enabled);
    }

    #[test]
    fn leaving_splash_clears_the_stack_and_styles_the_bars() {
        let mut shell = scaffold();
        shell.handle(ScreenEvent::SplashFinished);

        assert_eq!(*shell.current_route(), Route::Today);
        assert_eq!(shell.stack_depth(), 1);

        let primary = shell.theme().colors.primary;
        let bars = shell.system_bars();
        assert_eq!(
            bars.borrow().calls(),
            &[
                BarCall::StatusBar(primary.clone()),
                BarCall::NavigationBar(primary.clone()),
                BarCall::SystemBars(primary),
            ]
        );
    }

    #[test]
    fn drawer_section_switch_resets_history() {
        let mut shell = scaffold();
        shell.handle(ScreenEvent::SplashFinished);
        shell.handle(ScreenEvent::AddHabitsRequested);
        assert_eq!(shell.stack_depth(), 2);

        shell.handle(ScreenEvent::OpenDrawer);
        // AddHabits disables drawer gestures.
        assert!(!shell.is_drawer_open());

        shell.handle(ScreenEvent::BackRequested);
        shell.handle(ScreenEvent::OpenDrawer);
        assert!(shell.is_drawer_open());

        shell.select_drawer_destination(DrawerDestination::History);
        assert_eq!(*shell.current_route(), Route::History);
        assert_eq!(shell.stack_depth(), 1);
        assert!(!shell.is_drawer_open());
        assert!(!shell.system_back());
    }

    #[test]
    fn settings_is_pushed_not_reset() {
        let mut shell = scaffold();
        shell.handle(ScreenEvent::SplashFinished);
        shell.handle(ScreenEvent::OpenDrawer);
        shell.select_drawer_destination(DrawerDestination::Settings);

        assert_eq!(*shell.current_route(), Route::Settings);
        assert_eq!(shell.stack_depth(), 2);
        assert!(shell.system_back());
        assert_eq!(*shell.current_route(), Route::Today);
    }

    #[test]
    fn bottom_tab_switch_is_idempotent() {
        let mut shell = scaffold();
        shell.handle(ScreenEvent::SplashFinished);

        shell.select_bottom_tab(BottomTab::Habits);
        assert_eq!(*shell.current_route(), Route::Habits);
        assert_eq!(shell.stack_depth(), 1);

        shell.select_bottom_tab(BottomTab::Habits);
        assert_eq!(shell.stack_depth(), 1);
    }

    #[test]
    fn edit_flow_keeps_params_on_back() {
        let mut shell = scaffold();
        shell.handle(ScreenEvent::SplashFinished);
        shell.select_bottom_tab(BottomTab::Habits);
        shell.handle(ScreenEvent::EditHabitsRequested { habit_id: 5 });

        assert_eq!(
            *shell.current_route(),
            Route::EditHabits {
                habit_id: Some(5),
                template_id: None,
            }
        );

        shell.handle(ScreenEvent::TemplatesRequested { templates_id: 3 });
        assert!(shell.system_back());
        assert_eq!(
            *shell.current_route(),
            Route::EditHabits {
                habit_id: Some(5),
                template_id: None,
            }
        );
    }

    #[test]
    fn sheet_consumes_back_before_the_stack() {
        let mut shell = scaffold();
        shell.handle(ScreenEvent::SplashFinished);
        shell.handle(ScreenEvent::EditHabitsRequested { habit_id: 1 });
        shell.handle(ScreenEvent::OpenChooseIcon);
        assert!(shell.sheet().is_shown());

        assert!(shell.system_back());
        assert!(!shell.sheet().is_shown());
        assert_eq!(
            *shell.current_route(),
            Route::EditHabits {
                habit_id: Some(1),
                template_id: None,
            }
        );
    }

    #[test]
    fn sheet_swaps_without_hiding_and_survives_navigation() {
        let mut shell = scaffold();
        shell.handle(ScreenEvent::SplashFinished);
        shell.handle(ScreenEvent::EditHabitsRequested { habit_id: 1 });

        shell.handle(ScreenEvent::OpenChooseIcon);
        shell.handle(ScreenEvent::OpenChooseIconColor);
        assert_eq!(
            shell.sheet().state(),
            SheetState::Shown(SheetContent::ChooseIconColor)
        );

        // Unrelated navigation does not auto-dismiss the sheet.
        shell.handle(ScreenEvent::BackRequested);
        assert!(shell.sheet().is_shown());
        assert_eq!(shell.hide_sheet(), SheetTransition::Closed);
    }

    #[test]
    fn malformed_route_falls_back_to_habits() {
        let mut shell = scaffold();
        shell.handle(ScreenEvent::SplashFinished);

        let err = shell
            .open_serialized_route("{\"route\":\"EditHabits\",\"params\":{\"habit_id\":\"x\"}}")
            .unwrap_err();
        assert!(matches!(err, NavigationError::MalformedParameters { .. }));
        assert_eq!(*shell.current_route(), Route::Habits);
        assert_eq!(shell.stack_depth(), 1);
    }

    #[test]
    fn serialized_route_round_trips_through_the_scaffold() {
        let mut shell = scaffold();
        shell.handle(ScreenEvent::SplashFinished);

        let encoded = Route::EditHabits {
            habit_id: Some(5),
            template_id: None,
        }
        .encode();
        shell.open_serialized_route(&encoded).unwrap();

        assert_eq!(
            shell.render().screen,
            ScreenView::EditHabits {
                habit_id: Some(5),
                template_id: None,
            }
        );
    }

    #[test]
    fn theme_change_restyles_the_bars() {
        let mut shell = scaffold();
        shell.handle(ScreenEvent::SplashFinished);
        let calls_before = shell.system_bars().borrow().calls().len();

        shell.handle(ScreenEvent::ThemeChangeRequested {
            theme: ThemeName::Dark,
        });
        assert_eq!(shell.theme().name, ThemeName::Dark);

        let bars = shell.system_bars();
        let calls = bars.borrow();
        assert_eq!(calls.calls().len(), calls_before + 1);
        assert_eq!(
            calls.calls().last(),
            Some(&BarCall::SystemBars(shell.theme().colors.primary))
        );
    }

    #[test]
    fn render_follows_the_chrome_table() {
        let mut shell = scaffold();
        shell.handle(ScreenEvent::SplashFinished);

        let view = shell.render();
        assert!(matches!(view.top_bar, TopBarView::Main(_)));
        assert!(view.bottom_bar.is_some());
        assert!(view.drawer.gestures_enabled);

        shell.handle(ScreenEvent::OpenDrawer);
        shell.select_drawer_destination(DrawerDestination::Settings);
        let view = shell.render();
        assert!(matches!(view.top_bar, TopBarView::Step(_)));
        assert!(view.bottom_bar.is_none());
        assert!(!view.drawer.gestures_enabled);

        shell.system_back();
        shell.handle(ScreenEvent::EditHabitsRequested { habit_id: 9 });
        let view = shell.render();
        assert!(matches!(view.top_bar, TopBarView::Window(_)));
        assert!(view.bottom_bar.is_none());
        assert!(!view.drawer.gestures_enabled);
    }

    #[test]
    fn main_bar_title_is_localized() {
        let mut shell = AppScaffold::new(RecordingSystemBars::new(), &["ru"]).unwrap();
        shell.handle(ScreenEvent::SplashFinished);

        match shell.render().top_bar {
            TopBarView::Main(bar) => assert_eq!(bar.title, "Сегодня"),
            other => panic!("unexpected top bar: {:?}", other),
        }
    }
}
