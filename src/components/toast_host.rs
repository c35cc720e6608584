//! Shared toast rendering and scheduling.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Show a toast and schedule its dismissal. The generation returned by
/// `ToastState::show` guards the timer, so a toast shown later is never
/// hidden by an earlier call's timer.
pub fn show(toast: RwSignal<ToastState>, title: &str, desc: &str, is_error: bool) {
    let mut generation = 0;
    toast.update(|t| generation = t.show(title, desc, is_error));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(
            crate::state::toast::TOAST_DISMISS_MS,
        ))
        .await;
        toast.update(|t| {
            t.dismiss(generation);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = generation;
    }
}

/// The single toast element shared by every notifier call site.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    view! {
        <div
            class="toast"
            class:show=move || toast.get().visible
            class:error=move || toast.get().is_error
            role="status"
            aria-live="polite"
        >
            <div class="toast-title">{move || toast.get().title}</div>
            <div class="toast-desc">{move || toast.get().desc}</div>
        </div>
    }
}
