//! Outbound network modules.

pub mod relay;
