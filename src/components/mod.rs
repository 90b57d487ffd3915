//! Reusable UI component modules.
//!
//! Components render page chrome and behavior surfaces while reading shared
//! state from Leptos context providers.

pub mod flash_stack;
pub mod pricing_card;
pub mod progress_bar;
pub mod toolbar;
