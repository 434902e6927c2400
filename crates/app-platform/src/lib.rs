//! Host-platform collaborators for htracker
//!
//! The shell treats the host platform as an external boundary: system-bar
//! styling and hardware back delivery are invoked as side effects, never
//! modeled inside routing state. This crate defines those seams as traits so
//! the shell stays host-agnostic and fully testable off-device.

#![warn(missing_docs)]
#![warn(clippy::all)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Platform errors
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The host rejected a system-bar styling call
    #[error("system bar styling unsupported: {0}")]
    Unsupported(String),
}

/// A system-bar styling call, recorded for inspection in tests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "bar", content = "color", rename_all = "snake_case")]
pub enum BarCall {
    /// Status bar recolored
    StatusBar(String),
    /// Navigation bar recolored
    NavigationBar(String),
    /// Both bars recolored at once
    SystemBars(String),
}

/// Host hook for recoloring the system bars
///
/// Applied as a navigation side effect once a transition commits (the
/// Splash -> Today edge recolors all bars to the theme primary).
pub trait SystemBarStyler {
    /// Set the status bar color
    fn set_status_bar_color(&mut self, color: &str);

    /// Set the navigation bar color
    fn set_navigation_bar_color(&mut self, color: &str);

    /// Set both system bars at once
    fn set_system_bars_color(&mut self, color: &str);
}

/// Styler that records every call; used by tests and the demo binary
#[derive(Debug, Default)]
pub struct RecordingSystemBars {
    calls: Vec<BarCall>,
}

impl RecordingSystemBars {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All styling calls in the order they were made
    pub fn calls(&self) -> &[BarCall] {
        &self.calls
    }
}

impl SystemBarStyler for RecordingSystemBars {
    fn set_status_bar_color(&mut self, color: &str) {
        tracing::debug!(color, "status bar recolored");
        self.calls.push(BarCall::StatusBar(color.to_string()));
    }

    fn set_navigation_bar_color(&mut self, color: &str) {
        tracing::debug!(color, "navigation bar recolored");
        self.calls.push(BarCall::NavigationBar(color.to_string()));
    }

    fn set_system_bars_color(&mut self, color: &str) {
        tracing::debug!(color, "system bars recolored");
        self.calls.push(BarCall::SystemBars(color.to_string()));
    }
}

/// Styler that ignores every call; for hosts without stylable bars
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSystemBars;

impl SystemBarStyler for NoopSystemBars {
    fn set_status_bar_color(&mut self, _color: &str) {}
    fn set_navigation_bar_color(&mut self, _color: &str) {}
    fn set_system_bars_color(&mut self, _color: &str) {}
}
