//! Pricing card hover lift.
//!
//! Pure style computation for the pointer-enter effect. Components bind the
//! result to inline `transform` and `box-shadow`; the empty values returned
//! for the resting state clear both inline properties, so leaving hover
//! always restores whatever the stylesheet defines.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

/// Vertical lift applied while a card is hovered.
pub const LIFT_TRANSFORM: &str = "translateY(-10px)";

/// Drop shadow applied while a card is hovered.
pub const LIFT_SHADOW: &str = "0 15px 30px rgba(0, 0, 0, 0.2)";

/// Inline style pair for a card at a given hover state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardLift {
    pub transform: &'static str,
    pub box_shadow: &'static str,
}

/// Style pair for a card that is (or is not) hovered.
#[must_use]
pub fn lift(hovered: bool) -> CardLift {
    if hovered {
        CardLift { transform: LIFT_TRANSFORM, box_shadow: LIFT_SHADOW }
    } else {
        CardLift::default()
    }
}
