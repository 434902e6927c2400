//! Theme provider for htracker
//!
//! Supplies the color palette and shape tokens used uniformly by the
//! scaffold chrome (top bars, drawer, bottom sheet). The router does not own
//! the theme; the composition root holds a [`ThemeState`] and applies changes
//! requested from the settings screen.

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGB(A) hex string (e.g., "#FFFFFF" or "#FFFFFF66")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Append an alpha channel to a hex color (alpha in 0.0..=1.0)
pub fn with_alpha(hex: &str, alpha: f32) -> Color {
    let clamped = alpha.clamp(0.0, 1.0);
    let byte = (clamped * 255.0).round() as u8;
    format!("{}{:02X}", hex, byte)
}

// =============================================================================
// Themes
// =============================================================================

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Bright theme with white surfaces
    #[default]
    Light,
    /// Dark theme with near-black surfaces
    Dark,
}

/// Color roles used by the scaffold chrome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Surface color of the scaffold, system bars, drawer and sheet
    pub primary: Color,
    /// Content drawn on primary surfaces
    pub on_primary: Color,
    /// Emphasis surface (selected bottom-bar item, buttons)
    pub secondary: Color,
    /// Content drawn on secondary surfaces
    pub on_secondary: Color,
    /// Accent for highlights and the add-habit action
    pub accent: Color,
    /// Hairline dividers
    pub divider: Color,
    /// Scrim behind the drawer and the bottom sheet
    pub scrim: Color,
}

/// A complete theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Which theme this is
    pub name: ThemeName,
    /// Color roles
    pub colors: ThemeColors,
}

impl Theme {
    /// Whether this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.name == ThemeName::Dark
    }
}

/// The light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        colors: ThemeColors {
            primary: "#FFFFFF".to_string(),
            on_primary: "#1C1B1F".to_string(),
            secondary: "#6750A4".to_string(),
            on_secondary: "#FFFFFF".to_string(),
            accent: "#FFB703".to_string(),
            divider: "#E7E0EC".to_string(),
            scrim: with_alpha("#1C1B1F", 0.4),
        },
    }
}

/// The dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        colors: ThemeColors {
            primary: "#1C1B1F".to_string(),
            on_primary: "#E6E1E5".to_string(),
            secondary: "#D0BCFF".to_string(),
            on_secondary: "#381E72".to_string(),
            accent: "#FFB703".to_string(),
            divider: "#49454F".to_string(),
            scrim: with_alpha("#E6E1E5", 0.4),
        },
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

/// All themes, for the settings screen
pub fn all_themes() -> Vec<Theme> {
    vec![light_theme(), dark_theme()]
}

// =============================================================================
// Theme State
// =============================================================================

/// Mutable theme selection owned by the composition root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeState {
    current: ThemeName,
}

impl ThemeState {
    /// Create state with the default (light) theme
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected theme name
    pub fn name(&self) -> ThemeName {
        self.current
    }

    /// The selected theme
    pub fn theme(&self) -> Theme {
        get_theme(self.current)
    }

    /// Select a theme; returns true if the selection changed
    pub fn set(&mut self, name: ThemeName) -> bool {
        if self.current == name {
            return false;
        }
        tracing::debug!(?name, "theme changed");
        self.current = name;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_alpha_helpers() {
        assert_eq!(parse_hex_color("#FFB703"), Some((0xFF, 0xB7, 0x03)));
        assert_eq!(parse_hex_color("nope"), None);
        assert_eq!(with_alpha("#FFFFFF", 0.4), "#FFFFFF66");
    }

    #[test]
    fn themes_by_name() {
        assert!(!get_theme(ThemeName::Light).is_dark());
        assert!(get_theme(ThemeName::Dark).is_dark());
        assert_eq!(all_themes().len(), 2);
    }

    #[test]
    fn theme_state_reports_changes() {
        let mut state = ThemeState::new();
        assert_eq!(state.name(), ThemeName::Light);
        assert!(state.set(ThemeName::Dark));
        assert!(!state.set(ThemeName::Dark));
        assert_eq!(state.theme().name, ThemeName::Dark);
    }
}
