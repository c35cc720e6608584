//! # clearline-site
//!
//! Leptos + WASM client for the Clearline Consulting single-page site.
//! All behavior is client-side: the responsive navigation menu, the
//! scroll-triggered section reveals, and the consultation form that posts
//! to a third-party form relay (or falls back to a pre-filled email draft
//! when the page is opened straight from disk).
//!
//! Pure rules live under `state`, `net` and `util` so they stay natively
//! testable; browser wiring is gated behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
