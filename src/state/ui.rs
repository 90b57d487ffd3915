//! Local UI chrome state (theme).
//!
//! Keeps the theme flag out of domain state so the toolbar button can track
//! it reactively. The flag mirrors the `light-mode` class on `<body>`; both
//! are written together through `util::light_mode::toggle`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared across pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the light theme is active. Dark is the default.
    pub light_mode: bool,
}

impl UiState {
    /// State seeded from the persisted preference at startup.
    #[must_use]
    pub fn with_light_mode(light_mode: bool) -> Self {
        Self { light_mode }
    }
}
