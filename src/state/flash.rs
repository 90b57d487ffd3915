//! Flash message queue and dismissal state machine.
//!
//! DESIGN
//! ======
//! Timers request transitions by id rather than holding element handles, so
//! a flash that already left the queue makes every later transition a no-op
//! instead of a fault. Phases only ever move forward: visible, fading, gone.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use crate::util::dismiss::DismissPhase;

/// Category of a flash message, mirrored into a CSS modifier class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            FlashKind::Success => "flash flash--success",
            FlashKind::Error => "flash flash--error",
        }
    }
}

/// A queued flash message.
#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
    pub id: String,
    pub kind: FlashKind,
    pub text: String,
    pub phase: DismissPhase,
}

/// Queue of live flash messages, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlashState {
    pub messages: Vec<Flash>,
}

impl FlashState {
    /// Enqueue a new flash and return its id.
    pub fn push(&mut self, kind: FlashKind, text: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.messages.push(Flash {
            id: id.clone(),
            kind,
            text: text.into(),
            phase: DismissPhase::Visible,
        });
        id
    }

    /// Begin the fade for `id`. Unknown ids are a no-op.
    pub fn begin_fade(&mut self, id: &str) {
        if let Some(flash) = self.messages.iter_mut().find(|f| f.id == id)
            && flash.phase == DismissPhase::Visible
        {
            flash.phase = DismissPhase::Fading;
        }
    }

    /// Drop `id` from the queue. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: &str) {
        self.messages.retain(|f| f.id != id);
    }

    /// Phase for `id`; ids no longer queued read as removed.
    #[must_use]
    pub fn phase_of(&self, id: &str) -> DismissPhase {
        self.messages
            .iter()
            .find(|f| f.id == id)
            .map_or(DismissPhase::Removed, |f| f.phase)
    }
}
