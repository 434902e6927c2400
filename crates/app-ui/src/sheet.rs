//! Modal bottom sheet state machine
//!
//! A single shared sheet container slides up from the bottom edge and shows
//! one of a closed set of contents. Opening while already shown swaps the
//! content in place; there is never a visible Hidden state in between.
//! Navigation elsewhere in the app does not close the sheet.

use serde::{Deserialize, Serialize};

/// Contents that can be slotted into the shared bottom sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetContent {
    /// Habit icon picker
    ChooseIcon,
    /// Habit icon color picker
    ChooseIconColor,
}

/// Visibility state of the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "content", rename_all = "snake_case")]
pub enum SheetState {
    /// Sheet is off screen; its content is irrelevant
    #[default]
    Hidden,
    /// Sheet is visible with the given content
    Shown(SheetContent),
}

/// Transition produced by a show/hide request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetTransition {
    /// Hidden -> Shown
    Opened(SheetContent),
    /// Shown -> Shown with different content, no intermediate Hidden
    Swapped {
        /// Content being replaced
        from: SheetContent,
        /// Content now visible
        to: SheetContent,
    },
    /// Shown -> Hidden
    Closed,
    /// Request changed nothing
    NoChange,
}

/// Owner of the single shared sheet slot
#[derive(Debug, Default)]
pub struct SheetHost {
    state: SheetState,
}

impl SheetHost {
    /// Create a hidden sheet host
    pub fn new() -> Self {
        Self::default()
    }

    /// Current sheet state
    pub fn state(&self) -> SheetState {
        self.state
    }

    /// Whether the sheet is currently visible
    pub fn is_shown(&self) -> bool {
        matches!(self.state, SheetState::Shown(_))
    }

    /// Request the sheet to show `content`
    ///
    /// The slot is overwritten on every open request: if the sheet is already
    /// visible with other content, the content swaps without passing through
    /// Hidden.
    pub fn show(&mut self, content: SheetContent) -> SheetTransition {
        let transition = match self.state {
            SheetState::Hidden => SheetTransition::Opened(content),
            SheetState::Shown(current) if current == content => SheetTransition::NoChange,
            SheetState::Shown(current) => SheetTransition::Swapped {
                from: current,
                to: content,
            },
        };
        self.state = SheetState::Shown(content);
        tracing::debug!(?transition, "sheet show");
        transition
    }

    /// Hide the sheet; no-op while already hidden
    pub fn hide(&mut self) -> SheetTransition {
        match self.state {
            SheetState::Hidden => SheetTransition::NoChange,
            SheetState::Shown(_) => {
                self.state = SheetState::Hidden;
                tracing::debug!("sheet hidden");
                SheetTransition::Closed
            }
        }
    }
}
