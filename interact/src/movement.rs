//! Held movement keys and the fixed-cadence move loop.
//!
//! The host runs one repeating timer per surface while [`MoveLoop::is_running`]
//! is true and calls [`MoveLoop::tick`] every [`MOVE_TICK_MS`](crate::consts::MOVE_TICK_MS).
//! The loop starts on the first held key and stops the moment the last one
//! is released.

#[cfg(test)]
#[path = "movement_test.rs"]
mod movement_test;

use std::collections::BTreeSet;

use crate::camera::Point;
use crate::consts::DIAGONAL_SCALE;
use crate::event::Command;
use crate::keys::MoveKey;

/// Direction for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heading {
    pub vector: Point,
    /// Both axes were active and the vector was scaled.
    pub normalized: bool,
}

/// Derive the heading for a set of held keys.
///
/// Each axis is resolved independently; opposite keys cancel. Returns `None`
/// when the result is zero on both axes.
#[must_use]
pub fn heading<'a, I>(keys: I) -> Option<Heading>
where
    I: IntoIterator<Item = &'a MoveKey>,
{
    let (mut up, mut down, mut left, mut right) = (false, false, false, false);
    for key in keys {
        match key.axis() {
            (0, -1) => up = true,
            (0, 1) => down = true,
            (-1, 0) => left = true,
            (1, 0) => right = true,
            _ => {}
        }
    }
    let x = f64::from(i8::from(right) - i8::from(left));
    let y = f64::from(i8::from(down) - i8::from(up));
    let vector = Point::new(x, y);
    if vector.is_zero() {
        return None;
    }
    let normalized = x.abs() > 0.0 && y.abs() > 0.0;
    let vector = if normalized { vector.scale(DIAGONAL_SCALE) } else { vector };
    Some(Heading { vector, normalized })
}

/// Pressed-key set plus loop state for one surface.
#[derive(Debug, Clone, Default)]
pub struct MoveLoop {
    pressed: BTreeSet<MoveKey>,
    running: bool,
}

impl MoveLoop {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn pressed(&self) -> &BTreeSet<MoveKey> {
        &self.pressed
    }

    /// Register a held key. Returns `true` when the loop must start.
    pub fn press(&mut self, key: MoveKey) -> bool {
        self.pressed.insert(key);
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Release a key. Returns `true` when the loop must stop.
    pub fn release(&mut self, key: MoveKey) -> bool {
        self.pressed.remove(&key);
        if self.running && self.pressed.is_empty() {
            self.running = false;
            return true;
        }
        false
    }

    /// Forget every held key (window blur, detach). Returns `true` when the
    /// loop was running and must stop.
    pub fn clear(&mut self) -> bool {
        self.pressed.clear();
        std::mem::take(&mut self.running)
    }

    /// One loop step: a `move` command when the held keys produce motion.
    #[must_use]
    pub fn tick(&self) -> Option<Command> {
        if !self.running {
            return None;
        }
        heading(&self.pressed).map(|h| Command::Move { dx: h.vector.x, dy: h.vector.y, normalized: h.normalized })
    }
}
