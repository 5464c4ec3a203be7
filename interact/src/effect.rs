//! Lifecycles for timed, non-interactive visual effects.
//!
//! Every effect is an element (or a class on one) that moves through a fixed
//! set of phases with known delays between them. The host drives the phases
//! with timers and animation frames; these types only say what comes next
//! and after how long, so the timing rules are testable on their own.

#[cfg(test)]
#[path = "effect_test.rs"]
mod effect_test;

use crate::consts::{FLASH_MS, ROOM_RIPPLE_MS, TOAST_FADE_MS, TOAST_SHOW_MS};
use crate::event::FeedbackKind;

/// Phase of a single-dwell effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Active,
    Removed,
}

/// An effect that becomes active on trigger and is removed after a dwell.
///
/// Used for the node transition overlay, the room-entrance ripple, and
/// message flashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedEffect {
    phase: Phase,
    dwell_ms: u32,
}

impl TimedEffect {
    #[must_use]
    pub fn new(dwell_ms: u32) -> Self {
        Self { phase: Phase::Idle, dwell_ms }
    }

    #[must_use]
    pub fn room_ripple() -> Self {
        Self::new(ROOM_RIPPLE_MS)
    }

    #[must_use]
    pub fn flash() -> Self {
        Self::new(FLASH_MS)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn dwell_ms(&self) -> u32 {
        self.dwell_ms
    }

    /// Idle → Active. Returns the dwell to wait before [`expire`](Self::expire),
    /// or `None` if the effect was already triggered.
    pub fn trigger(&mut self) -> Option<u32> {
        if self.phase != Phase::Idle {
            return None;
        }
        self.phase = Phase::Active;
        Some(self.dwell_ms)
    }

    /// Active → Removed. Returns `true` when the host should tear the effect down.
    pub fn expire(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.phase = Phase::Removed;
        true
    }
}

/// Element lookup and class toggling, implemented over the DOM by the host.
pub trait ClassTarget {
    type Element;

    /// The element with this id, if it is on the page.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn add_class(&self, el: &Self::Element, class: &str);
}

/// Element id of a chat message.
#[must_use]
pub fn message_element_id(message_id: &str) -> String {
    format!("message-{message_id}")
}

/// Flash a chat message for a feedback cue.
///
/// Returns the flashed element with its running effect; the host removes
/// `kind.flash_class()` once the effect's dwell has passed. A message that is
/// not on the page yields `None` and nothing is touched.
pub fn start_flash<T>(target: &T, message_id: &str, kind: FeedbackKind) -> Option<(T::Element, TimedEffect)>
where
    T: ClassTarget + ?Sized,
{
    let Some(el) = target.element_by_id(&message_element_id(message_id)) else {
        log::debug!("feedback for message {message_id} not on page");
        return None;
    };
    target.add_class(&el, kind.flash_class());
    let mut effect = TimedEffect::flash();
    effect.trigger()?;
    Some((el, effect))
}

/// Phase of a toast element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPhase {
    /// Appended to the document, not yet visible.
    #[default]
    Mounted,
    /// `show` class applied (next animation frame after mount).
    Shown,
    /// `show` class removed; fading out.
    Hiding,
    /// Detached from the document.
    Removed,
}

/// What the host must do to advance a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStep {
    /// Wait for the next animation frame, then advance.
    NextFrame,
    /// Wait this many milliseconds, then advance.
    After(u32),
    /// Nothing left to do.
    Done,
}

/// Toast lifecycle: mounted → shown → hiding → removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToastTimeline {
    phase: ToastPhase,
}

impl ToastTimeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// How to wait before the next [`advance`](Self::advance).
    #[must_use]
    pub fn pending(&self) -> ToastStep {
        match self.phase {
            ToastPhase::Mounted => ToastStep::NextFrame,
            ToastPhase::Shown => ToastStep::After(TOAST_SHOW_MS),
            ToastPhase::Hiding => ToastStep::After(TOAST_FADE_MS),
            ToastPhase::Removed => ToastStep::Done,
        }
    }

    /// Move to the next phase and return it.
    pub fn advance(&mut self) -> ToastPhase {
        self.phase = match self.phase {
            ToastPhase::Mounted => ToastPhase::Shown,
            ToastPhase::Shown => ToastPhase::Hiding,
            ToastPhase::Hiding | ToastPhase::Removed => ToastPhase::Removed,
        };
        self.phase
    }
}
