//! Design tokens for htracker
//!
//! Shared spacing, shape and motion constants used by the chrome components.

/// Spacing scale (logical pixels)
pub mod spacing {
    /// Small padding
    pub const SMALL: f32 = 8.0;
    /// Middle padding, also the sheet corner radius base
    pub const MIDDLE: f32 = 16.0;
    /// Large padding
    pub const LARGE: f32 = 24.0;
}

/// Corner radii for the shared surfaces
pub mod radius {
    /// Top corners of the modal bottom sheet
    pub const SHEET: f32 = super::spacing::MIDDLE;
    /// Trailing edge of the side drawer
    pub const DRAWER: f32 = super::spacing::LARGE;
}

/// Sizing constants
pub mod sizing {
    /// Height of top bars
    pub const TOP_BAR_HEIGHT: f32 = 56.0;
    /// Height of the bottom navigation bar
    pub const BOTTOM_BAR_HEIGHT: f32 = 64.0;
    /// Fraction of the screen width the drawer occupies
    pub const DRAWER_WIDTH_FRACTION: f32 = 0.8;
}

/// Motion durations (milliseconds)
pub mod duration {
    /// Sheet slide in/out
    pub const SHEET_MS: u64 = 250;
    /// Drawer open/close
    pub const DRAWER_MS: u64 = 200;
}

/// Stacking order of scaffold layers
pub mod z_index {
    /// Screen content
    pub const CONTENT: i32 = 0;
    /// Top and bottom bars
    pub const CHROME: i32 = 10;
    /// Side drawer and its scrim
    pub const DRAWER: i32 = 20;
    /// Modal bottom sheet and its scrim
    pub const SHEET: i32 = 30;
}
