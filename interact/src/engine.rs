use serde_json::Value;

use crate::camera::{CameraReading, Point};
use crate::centering::CenterAnimation;
use crate::config::{HookConfig, TransitionStyle};
use crate::consts::CENTER_STEPS;
use crate::cue;
use crate::event::{Command, FeedbackKind};
use crate::gesture::GestureCapture;
use crate::keys::{self, KeyCommand, KeyInput, MoveKey, PanelKey};
use crate::movement::MoveLoop;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Surface cursor states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// A drag is in progress.
    Grabbing,
    /// Default cursor over the surface.
    Idle,
}

impl Cursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Grabbing => "grabbing",
            Self::Idle => "move",
        }
    }
}

/// Actions returned from handlers for the host to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Push a command to the server.
    Send(Command),
    /// Suppress the browser default for the triggering event.
    PreventDefault,
    SetCursor(Cursor),
    /// Start the repeating move timer.
    StartMoveLoop,
    /// Drop the repeating move timer.
    StopMoveLoop,
    /// Call [`HookCore::center_step`] with this generation on the next animation frame.
    ScheduleCenterStep { generation: u64 },
    PlayTransition { node_id: String, style: TransitionStyle },
    /// Flash the message element, if it exists.
    FlashMessage { message_id: String, kind: FeedbackKind },
    ShowToast { kind: FeedbackKind },
    /// Clear the value of the input with this id, if it exists.
    ClearInput { id: String },
    /// Write the bucket list to client storage.
    PersistBuckets(Vec<Option<String>>),
    /// Arm the typing stop timer; deliver `token` back when it fires.
    ArmTypingStop { token: u64, after_ms: u32 },
    CancelTypingStop,
}

/// Per-surface interaction state: everything that doesn't touch the DOM.
///
/// Separated from the wasm hook so it can be tested without a browser.
#[derive(Debug, Clone, Default)]
pub struct HookCore {
    pub config: HookConfig,
    gesture: GestureCapture,
    movement: MoveLoop,
    centering: Option<CenterAnimation>,
    generation: u64,
}

impl HookCore {
    #[must_use]
    pub fn new(config: HookConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Queries ---

    /// Current generation; scheduled work started under an older one is dropped.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn gesture(&self) -> &GestureCapture {
        &self.gesture
    }

    #[must_use]
    pub fn movement(&self) -> &MoveLoop {
        &self.movement
    }

    #[must_use]
    pub fn is_centering(&self) -> bool {
        self.centering.is_some()
    }

    // --- Pointer / touch ---

    pub fn pointer_down(&mut self, pt: Point, on_link: bool) -> Vec<Action> {
        self.gesture.pointer_down(pt, on_link)
    }

    pub fn pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.gesture.pointer_move(pt)
    }

    pub fn pointer_up(&mut self) -> Vec<Action> {
        self.gesture.pointer_up()
    }

    #[must_use]
    pub fn wheel(&self, delta_y: f64, pt: Point) -> Vec<Action> {
        self.gesture.wheel(delta_y, pt)
    }

    pub fn touch_start(&mut self, touches: &[Point]) -> Vec<Action> {
        self.gesture.touch_start(touches)
    }

    pub fn touch_move(&mut self, touches: &[Point]) -> Vec<Action> {
        self.gesture.touch_move(touches)
    }

    pub fn touch_end(&mut self, remaining: &[Point]) -> Vec<Action> {
        self.gesture.touch_end(remaining)
    }

    // --- Keyboard ---

    /// Key pressed. `reading` is only consulted when the key starts centering.
    pub fn key_down<F>(&mut self, input: KeyInput<'_>, reading: F) -> Vec<Action>
    where
        F: FnOnce() -> CameraReading,
    {
        let Some(command) = keys::route(input, &self.config) else {
            return Vec::new();
        };
        let mut actions = vec![Action::PreventDefault];
        match command {
            KeyCommand::Center => actions.extend(self.begin_centering(reading())),
            KeyCommand::Panel(PanelKey::Open) => actions.push(Action::Send(Command::OpenCreateNode)),
            KeyCommand::Panel(PanelKey::Close) => {
                actions.push(Action::Send(Command::CloseCreateNode));
                actions.push(Action::Send(Command::DeselectNode));
            }
            KeyCommand::Panel(PanelKey::Confirm) => actions.push(Action::Send(Command::EnterSelectedNode)),
            KeyCommand::Move(key) => {
                if self.movement.press(key) {
                    actions.push(Action::StartMoveLoop);
                }
            }
        }
        actions
    }

    /// Key released.
    pub fn key_up(&mut self, key: &str) -> Vec<Action> {
        let Some(key) = MoveKey::parse(&keys::normalize(key)) else {
            return Vec::new();
        };
        if self.movement.release(key) {
            return vec![Action::StopMoveLoop];
        }
        Vec::new()
    }

    /// Window lost focus; key-ups will never arrive for held keys.
    pub fn window_blur(&mut self) -> Vec<Action> {
        if self.movement.clear() {
            return vec![Action::StopMoveLoop];
        }
        Vec::new()
    }

    /// One movement loop step.
    #[must_use]
    pub fn move_tick(&self) -> Vec<Action> {
        self.movement.tick().map(Action::Send).into_iter().collect()
    }

    // --- Centering ---

    /// Start panning onto the player, superseding any running centering.
    pub fn begin_centering(&mut self, reading: CameraReading) -> Vec<Action> {
        self.generation += 1;
        self.centering = Some(CenterAnimation::new(reading.center_offset(), CENTER_STEPS, self.generation));
        vec![Action::ScheduleCenterStep { generation: self.generation }]
    }

    /// Run one centering frame. Stale generations produce nothing.
    pub fn center_step(&mut self, generation: u64) -> Vec<Action> {
        let Some(anim) = self.centering.as_mut() else {
            return Vec::new();
        };
        if anim.generation() != generation || generation != self.generation {
            return Vec::new();
        }
        let Some(delta) = anim.next_step() else {
            self.centering = None;
            return Vec::new();
        };
        let mut actions = vec![Action::Send(Command::Pan { dx: delta.x, dy: delta.y })];
        if anim.is_finished() {
            self.centering = None;
            if self.config.camera_follow {
                actions.push(Action::Send(Command::EnableCameraFollow));
            }
        } else {
            actions.push(Action::ScheduleCenterStep { generation });
        }
        actions
    }

    // --- Cues ---

    #[must_use]
    pub fn cue(&self, name: &str, payload: Value) -> Vec<Action> {
        cue::dispatch(name, payload, &self.config)
    }

    // --- Lifecycle ---

    /// Release everything transient: drag, touch anchor, held keys, and any
    /// scheduled centering frames.
    pub fn detach(&mut self) -> Vec<Action> {
        self.generation += 1;
        self.centering = None;
        self.gesture.reset();
        self.window_blur()
    }
}
