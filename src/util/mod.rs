//! Utility helpers isolating browser/environment concerns.
//!
//! SYSTEM CONTEXT
//! ==============
//! `mailto` is pure string building; `origin` and `reveal` touch the DOM
//! and compile to inert stubs outside the `hydrate` feature.

pub mod mailto;
pub mod origin;
pub mod reveal;
