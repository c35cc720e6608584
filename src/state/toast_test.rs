use super::*;

#[test]
fn show_sets_content_and_visibility() {
    let mut toast = ToastState::default();
    assert!(!toast.visible);

    let generation = toast.show("Request sent", "All good.", false);
    assert_eq!(toast.title, "Request sent");
    assert_eq!(toast.desc, "All good.");
    assert!(!toast.is_error);
    assert!(toast.visible);
    assert_eq!(generation, toast.generation());
}

#[test]
fn show_overwrites_previous_toast() {
    let mut toast = ToastState::default();
    let first = toast.show("Request sent", "All good.", false);
    let second = toast.show("Send failed", "Try again.", true);

    assert!(second > first);
    assert_eq!(toast.title, "Send failed");
    assert!(toast.is_error);
    assert!(toast.visible);
}

#[test]
fn dismiss_hides_current_generation() {
    let mut toast = ToastState::default();
    let generation = toast.show("Request sent", "All good.", false);
    assert!(toast.dismiss(generation));
    assert!(!toast.visible);
}

#[test]
fn stale_dismiss_leaves_newer_toast_visible() {
    let mut toast = ToastState::default();
    let first = toast.show("Request sent", "All good.", false);
    let _second = toast.show("Send failed", "Try again.", true);

    assert!(!toast.dismiss(first));
    assert!(toast.visible, "newer toast must survive the older timer");
}
