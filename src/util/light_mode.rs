//! Light mode initialization and toggle.
//!
//! Reads the persisted preference from `localStorage` and mirrors it as a
//! `light-mode` marker class on `<body>`. Toggle writes the new preference
//! back and updates that class. Dark is the default whenever nothing usable
//! is stored, and storage failures degrade to session-only behavior.

#[cfg(test)]
#[path = "light_mode_test.rs"]
mod light_mode_test;

/// `localStorage` key holding the persisted preference.
pub const STORAGE_KEY: &str = "lightMode";

/// Marker class present on `<body>` while light mode is active.
pub const BODY_CLASS: &str = "light-mode";

/// Interpret a stored preference value. Only the literal string `"true"`
/// selects light mode; anything else (or nothing) selects dark.
#[must_use]
pub fn preference_from_stored(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// Stored representation of a preference.
#[must_use]
pub fn stored_value(light: bool) -> &'static str {
    if light { "true" } else { "false" }
}

/// Read the light mode preference from localStorage.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(raw) = storage.get_item(STORAGE_KEY) {
                return preference_from_stored(raw.as_deref());
            }
        }
        false
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Add or remove the marker class on `<body>`.
pub fn apply(light: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let classes = body.class_list();
            let _ = if light { classes.add_1(BODY_CLASS) } else { classes.remove_1(BODY_CLASS) };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = light;
    }
}

/// Toggle light mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, stored_value(next));
            }
        }
    }
    next
}
