//! # leadharvest
//!
//! Leptos + WASM client for the LeadHarvest email-scraping service.
//!
//! This crate contains the pages, components, and shared state for the
//! pricing and dashboard screens, plus the pure behavior helpers behind
//! them: the pricing-card hover lift, the scrape progress bar, timed
//! flash-message dismissal, and the persisted light/dark theme.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
