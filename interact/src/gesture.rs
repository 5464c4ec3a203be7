//! Pointer, wheel, and touch capture for the grid surface.
//!
//! A drag is tracked between pointer-down and pointer-up; every move sample
//! pans by the inverted delta from the previous sample, so the content
//! follows a "grab and pull" metaphor. Touch works the same way for a single
//! finger. Multi-touch is ignored.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::camera::Point;
use crate::engine::{Action, Cursor};
use crate::event::Command;

/// Mouse drag state for one surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No button held over the surface.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging {
        /// Previous sample, used to compute the next pan delta.
        last: Point,
    },
}

/// Gesture capture for one mounted surface.
#[derive(Debug, Clone, Default)]
pub struct GestureCapture {
    state: GestureState,
    touch_anchor: Option<Point>,
}

impl GestureCapture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    #[must_use]
    pub fn touch_anchor(&self) -> Option<Point> {
        self.touch_anchor
    }

    /// Pointer pressed over the surface. Presses on links never start a drag.
    pub fn pointer_down(&mut self, pt: Point, on_link: bool) -> Vec<Action> {
        if on_link {
            return Vec::new();
        }
        self.state = GestureState::Dragging { last: pt };
        vec![Action::SetCursor(Cursor::Grabbing)]
    }

    /// Pointer moved anywhere in the window.
    pub fn pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let GestureState::Dragging { last } = self.state else {
            return Vec::new();
        };
        self.state = GestureState::Dragging { last: pt };
        let delta = pt.pull_from(last);
        vec![Action::Send(Command::Pan { dx: delta.x, dy: delta.y })]
    }

    /// Pointer released anywhere in the window.
    pub fn pointer_up(&mut self) -> Vec<Action> {
        self.state = GestureState::Idle;
        vec![Action::SetCursor(Cursor::Idle)]
    }

    /// Wheel over the surface: zoom around the cursor instead of scrolling the page.
    pub fn wheel(&self, delta_y: f64, pt: Point) -> Vec<Action> {
        vec![Action::PreventDefault, Action::Send(Command::Zoom { delta: delta_y, x: pt.x, y: pt.y })]
    }

    pub fn touch_start(&mut self, touches: &[Point]) -> Vec<Action> {
        if let [only] = touches {
            self.touch_anchor = Some(*only);
        }
        Vec::new()
    }

    pub fn touch_move(&mut self, touches: &[Point]) -> Vec<Action> {
        let [only] = touches else {
            return Vec::new();
        };
        let Some(last) = self.touch_anchor else {
            self.touch_anchor = Some(*only);
            return Vec::new();
        };
        self.touch_anchor = Some(*only);
        let delta = only.pull_from(last);
        vec![Action::Send(Command::Pan { dx: delta.x, dy: delta.y })]
    }

    /// Touch lifted. A remaining single finger becomes the new anchor so the
    /// next move does not jump.
    pub fn touch_end(&mut self, remaining: &[Point]) -> Vec<Action> {
        self.touch_anchor = match remaining {
            [only] => Some(*only),
            _ => None,
        };
        Vec::new()
    }

    /// Drop any in-flight gesture (surface detached).
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.touch_anchor = None;
    }
}
