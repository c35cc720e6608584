//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own the DOM wiring and read/write shared state from Leptos
//! context providers; the rules they apply live in `state`.

pub mod consultation_form;
pub mod navbar;
pub mod toast_host;
