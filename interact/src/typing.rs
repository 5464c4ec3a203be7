//! Typing indicator debounce.
//!
//! Input activity sends `typing_start` right away and arms a single delayed
//! stop. New activity cancels and re-arms it, so `typing_stop` fires once per
//! idle gap. Losing focus cancels any pending stop and sends it immediately.
//! Each armed timer carries a token; a timer that fires with a stale token is
//! ignored even if the host failed to cancel it.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::consts::TYPING_IDLE_MS;
use crate::engine::Action;
use crate::event::Command;

/// Debounce state for one text field.
#[derive(Debug, Clone, Default)]
pub struct TypingDebounce {
    next_token: u64,
    pending: Option<u64>,
}

impl TypingDebounce {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Token of the armed stop timer, if any.
    #[must_use]
    pub fn pending(&self) -> Option<u64> {
        self.pending
    }

    /// The field received input.
    pub fn input(&mut self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(3);
        if self.pending.take().is_some() {
            actions.push(Action::CancelTypingStop);
        }
        actions.push(Action::Send(Command::TypingStart));
        self.next_token += 1;
        self.pending = Some(self.next_token);
        actions.push(Action::ArmTypingStop { token: self.next_token, after_ms: TYPING_IDLE_MS });
        actions
    }

    /// A stop timer fired.
    pub fn fire(&mut self, token: u64) -> Vec<Action> {
        if self.pending != Some(token) {
            return Vec::new();
        }
        self.pending = None;
        vec![Action::Send(Command::TypingStop)]
    }

    /// The field lost focus.
    pub fn blur(&mut self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(2);
        if self.pending.take().is_some() {
            actions.push(Action::CancelTypingStop);
        }
        actions.push(Action::Send(Command::TypingStop));
        actions
    }
}
