//! Shared application state provided through Leptos context.
//!
//! Pages and components read and write these through `RwSignal` context
//! providers so state transitions stay separate from rendering.

pub mod flash;
pub mod plans;
pub mod subscription;
pub mod ui;
