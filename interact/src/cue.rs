//! Translate inbound server cues into host actions.

#[cfg(test)]
#[path = "cue_test.rs"]
mod cue_test;

use serde_json::Value;

use crate::config::{HookConfig, TransitionStyle};
use crate::effect::TimedEffect;
use crate::engine::Action;
use crate::event::{Command, Cue, CueError};

/// Actions for a parsed cue.
#[must_use]
pub fn play(cue: &Cue, config: &HookConfig) -> Vec<Action> {
    match cue {
        Cue::EnterNode { node_id } => {
            vec![Action::PlayTransition { node_id: node_id.clone(), style: config.transition }]
        }
        // The server-rendered progress indicator already reflects the cancel.
        Cue::CancelDwell => Vec::new(),
        Cue::FeedbackGiven { message_id, kind } => vec![
            Action::FlashMessage { message_id: message_id.clone(), kind: *kind },
            Action::ShowToast { kind: *kind },
        ],
        Cue::ClearInput { id } => vec![Action::ClearInput { id: id.clone() }],
        Cue::BucketsUpdated { buckets } => vec![Action::PersistBuckets(buckets.clone())],
    }
}

/// Parse a raw cue and return its actions. Unknown or malformed cues are
/// logged and produce no actions.
#[must_use]
pub fn dispatch(name: &str, payload: Value, config: &HookConfig) -> Vec<Action> {
    match Cue::parse(name, payload) {
        Ok(cue) => play(&cue, config),
        Err(CueError::Unknown(name)) => {
            log::debug!("cue: ignoring {name}");
            Vec::new()
        }
        Err(e) => {
            log::warn!("cue: {e}");
            Vec::new()
        }
    }
}

/// A node-entry transition in flight: overlay up, dwell, then navigate.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    node_id: String,
    style: TransitionStyle,
    effect: TimedEffect,
}

impl Transition {
    #[must_use]
    pub fn new(node_id: String, style: TransitionStyle) -> Self {
        Self { node_id, style, effect: TimedEffect::new(style.dwell_ms()) }
    }

    #[must_use]
    pub fn style(&self) -> TransitionStyle {
        self.style
    }

    /// Overlay became active; returns the dwell to hold it for.
    pub fn activate(&mut self) -> Option<u32> {
        self.effect.trigger()
    }

    /// Dwell elapsed. Returns the navigation command exactly once.
    pub fn finish(&mut self) -> Option<Command> {
        if !self.effect.expire() {
            return None;
        }
        Some(Command::NavigateToNode { id: self.node_id.clone() })
    }
}
