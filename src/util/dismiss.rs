//! Flash dismissal timeline.
//!
//! A flash stays fully visible for a fixed delay, fades, then leaves the
//! document shortly after the fade begins. The phases are explicit so the
//! queue state and the timers driving it stay in lockstep: scheduled tasks
//! request transitions by id, the queue applies them.

#[cfg(test)]
#[path = "dismiss_test.rs"]
mod dismiss_test;

/// Time a flash stays fully visible before fading, in milliseconds.
pub const FADE_DELAY_MS: u64 = 3000;

/// Time between the start of the fade and removal, in milliseconds.
pub const REMOVE_DELAY_MS: u64 = 500;

/// Lifecycle of a flash message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DismissPhase {
    /// On screen at full opacity.
    #[default]
    Visible,
    /// Opacity driven to zero, still in the document.
    Fading,
    /// Gone from the document.
    Removed,
}

/// Inline opacity for a phase. The empty value leaves the stylesheet
/// opacity in effect.
#[must_use]
pub fn opacity(phase: DismissPhase) -> &'static str {
    match phase {
        DismissPhase::Visible => "",
        DismissPhase::Fading | DismissPhase::Removed => "0",
    }
}
