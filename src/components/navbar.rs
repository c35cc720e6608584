//! Site navigation: fixed top bar, scrolled state, and the mobile
//! slide-out menu.
//!
//! The slide-out is pinned flush beneath the bar by measuring the bar on
//! load, scroll, and resize. Dismissal listeners (outside click, Escape,
//! desktop resize) attach to `window`/`document` once on hydration and
//! live for the page session.

use leptos::prelude::*;

use crate::state::menu::{self, MenuPhase, MenuState};

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#services", "Services"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

/// Move the menu to `phase`, keeping the panel class, the button class,
/// and the body class in agreement through the one shared state value.
fn set_menu_phase(menu_state: RwSignal<MenuState>, phase: MenuPhase) {
    menu_state.update(|m| m.phase = phase);
    apply_body_class(phase == MenuPhase::Open);
}

/// Apply or remove the `menu-open` class on `<body>`; the body is outside
/// the component tree, so this one flag is set imperatively.
fn apply_body_class(open: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let class_list = body.class_list();
            if open {
                let _ = class_list.add_1("menu-open");
            } else {
                let _ = class_list.remove_1("menu-open");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = open;
    }
}

/// Re-measure the bar and store its height for the panel layout.
#[cfg(feature = "hydrate")]
fn sync_nav_height(menu_state: RwSignal<MenuState>, nav_ref: NodeRef<leptos::html::Nav>) {
    let Some(nav) = nav_ref.get_untracked() else {
        return;
    };
    let height = nav.get_bounding_client_rect().height();
    if (menu_state.get_untracked().nav_height_px - height).abs() > f64::EPSILON {
        menu_state.update(|m| m.nav_height_px = height);
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let menu_state = expect_context::<RwSignal<MenuState>>();
    let nav_ref = NodeRef::<leptos::html::Nav>::new();
    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();

    let on_toggle = move |_| {
        let next = menu_state.get_untracked().phase.toggled();
        set_menu_phase(menu_state, next);
    };
    let close_menu = move || {
        if menu_state.get_untracked().is_open() {
            set_menu_phase(menu_state, MenuPhase::Closed);
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let listeners_installed = StoredValue::new(false);
        Effect::new(move || {
            if nav_ref.get().is_none() {
                return;
            }
            sync_nav_height(menu_state, nav_ref);

            if listeners_installed.get_value() {
                return;
            }
            listeners_installed.set_value(true);

            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };

            let scroll_cb = Closure::<dyn FnMut()>::new(move || {
                let scroll_y = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or_default();
                let scrolled = menu::is_scrolled(scroll_y);
                if menu_state.get_untracked().scrolled != scrolled {
                    menu_state.update(|m| m.scrolled = scrolled);
                }
                sync_nav_height(menu_state, nav_ref);
            });
            let _ = window
                .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
            scroll_cb.forget();

            let resize_cb = Closure::<dyn FnMut()>::new(move || {
                sync_nav_height(menu_state, nav_ref);
                let width = web_sys::window()
                    .and_then(|w| w.inner_width().ok())
                    .and_then(|v| v.as_f64())
                    .unwrap_or_default();
                if menu::closes_on_resize(width) && menu_state.get_untracked().is_open() {
                    set_menu_phase(menu_state, MenuPhase::Closed);
                }
            });
            let _ = window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
            resize_cb.forget();

            let key_cb = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
                move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" && menu_state.get_untracked().is_open() {
                        set_menu_phase(menu_state, MenuPhase::Closed);
                    }
                },
            );
            let _ = document
                .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
            key_cb.forget();

            let click_cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
                let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                else {
                    return;
                };
                let inside_panel = panel_ref
                    .get_untracked()
                    .is_some_and(|panel| panel.contains(Some(&target)));
                let inside_toggle = toggle_ref
                    .get_untracked()
                    .is_some_and(|button| button.contains(Some(&target)));
                let phase = menu_state.get_untracked().phase;
                if menu::outside_click_closes(phase, inside_panel, inside_toggle) {
                    set_menu_phase(menu_state, MenuPhase::Closed);
                }
            });
            let _ = document
                .add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref());
            click_cb.forget();
        });
    }

    view! {
        <nav class="navbar" class:scrolled=move || menu_state.get().scrolled node_ref=nav_ref>
            <div class="navbar__inner">
                <a href="#home" class="navbar__brand">"Clearline Consulting"</a>
                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! { <a href=*href>{*label}</a> })
                        .collect_view()}
                </div>
                <button
                    type="button"
                    class="hamburger"
                    class:active=move || menu_state.get().is_open()
                    aria-label="Toggle navigation menu"
                    on:click=on_toggle
                    node_ref=toggle_ref
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
        <div
            class="mobile-menu"
            class:active=move || menu_state.get().is_open()
            style:top=move || menu::menu_top_style(menu_state.get().nav_height_px)
            style:max-height=move || menu::menu_max_height_style(menu_state.get().nav_height_px)
            node_ref=panel_ref
        >
            {NAV_LINKS
                .iter()
                .map(|(href, label)| {
                    view! {
                        <a href=*href on:click=move |_| close_menu()>{*label}</a>
                    }
                })
                .collect_view()}
        </div>
    }
}
