//! Navigation menu state and layout rules.
//!
//! The menu panel, the hamburger button, and the page body each carry a
//! presentation class while the menu is open. A single [`MenuPhase`] value
//! drives all three so they cannot fall out of agreement.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Scroll offset beyond which the navbar takes its condensed look.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Viewport width above which the desktop layout applies and the mobile
/// menu auto-closes.
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

/// Open/closed phase of the mobile slide-out menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuPhase {
    #[default]
    Closed,
    Open,
}

impl MenuPhase {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Navigation state shared through context.
#[derive(Clone, Debug, Default)]
pub struct MenuState {
    pub phase: MenuPhase,
    /// Last measured navbar height; pins the menu flush beneath the bar.
    pub nav_height_px: f64,
    pub scrolled: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == MenuPhase::Open
    }
}

/// Whether the navbar shows its scrolled state at this scroll offset.
#[must_use]
pub fn is_scrolled(scroll_y_px: f64) -> bool {
    scroll_y_px > SCROLL_THRESHOLD_PX
}

/// Whether growing the viewport to this width auto-closes the mobile menu.
#[must_use]
pub fn closes_on_resize(viewport_width_px: f64) -> bool {
    viewport_width_px > DESKTOP_BREAKPOINT_PX
}

/// Whether a document click dismisses the menu. Clicks inside the panel or
/// on the toggle button never do, and a closed menu ignores clicks entirely.
#[must_use]
pub fn outside_click_closes(phase: MenuPhase, inside_panel: bool, inside_toggle: bool) -> bool {
    phase == MenuPhase::Open && !inside_panel && !inside_toggle
}

/// Inline `top` for the menu panel, rounded to whole pixels.
#[must_use]
pub fn menu_top_style(nav_height_px: f64) -> String {
    format!("{}px", nav_height_px.round())
}

/// Inline `max-height` keeping the panel within the viewport below the bar.
#[must_use]
pub fn menu_max_height_style(nav_height_px: f64) -> String {
    format!("calc(100dvh - {}px)", nav_height_px.round())
}
