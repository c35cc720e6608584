use super::*;

// =============================================================
// Scroll state
// =============================================================

#[test]
fn navbar_plain_at_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
}

#[test]
fn navbar_condensed_past_threshold() {
    assert!(is_scrolled(50.1));
    assert!(is_scrolled(400.0));
}

// =============================================================
// Resize auto-close
// =============================================================

#[test]
fn resize_to_769_closes_menu() {
    assert!(closes_on_resize(769.0));
}

#[test]
fn resize_to_breakpoint_keeps_menu() {
    assert!(!closes_on_resize(768.0));
    assert!(!closes_on_resize(320.0));
}

// =============================================================
// Outside-click dismissal
// =============================================================

#[test]
fn outside_click_closes_open_menu() {
    assert!(outside_click_closes(MenuPhase::Open, false, false));
}

#[test]
fn click_inside_panel_keeps_menu() {
    assert!(!outside_click_closes(MenuPhase::Open, true, false));
}

#[test]
fn click_on_toggle_keeps_menu() {
    assert!(!outside_click_closes(MenuPhase::Open, false, true));
}

#[test]
fn click_ignored_when_closed() {
    assert!(!outside_click_closes(MenuPhase::Closed, false, false));
}

// =============================================================
// Panel layout
// =============================================================

#[test]
fn layout_rounds_measured_height() {
    assert_eq!(menu_top_style(71.6), "72px");
    assert_eq!(menu_max_height_style(71.6), "calc(100dvh - 72px)");
}

#[test]
fn layout_handles_unmeasured_navbar() {
    assert_eq!(menu_top_style(0.0), "0px");
    assert_eq!(menu_max_height_style(0.0), "calc(100dvh - 0px)");
}

// =============================================================
// Phase
// =============================================================

#[test]
fn menu_defaults_closed() {
    let state = MenuState::default();
    assert_eq!(state.phase, MenuPhase::Closed);
    assert!(!state.is_open());
    assert!(!state.scrolled);
}

#[test]
fn toggled_flips_phase() {
    assert_eq!(MenuPhase::Closed.toggled(), MenuPhase::Open);
    assert_eq!(MenuPhase::Open.toggled(), MenuPhase::Closed);
}
