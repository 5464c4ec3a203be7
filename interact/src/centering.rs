//! Eased pan onto the player.
//!
//! The offset between viewport and player is split into a fixed number of
//! frame-scheduled steps. Step `i` pans by the difference of the cubic
//! ease-out curve between `i - 1` and `i`, so the steps sum to exactly the
//! offset while front-loading the motion.

#[cfg(test)]
#[path = "centering_test.rs"]
mod centering_test;

use crate::camera::Point;

/// Cubic ease-out: fast start, gentle landing.
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// An in-flight centering animation.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterAnimation {
    offset: Point,
    step: u32,
    steps: u32,
    generation: u64,
}

impl CenterAnimation {
    #[must_use]
    pub fn new(offset: Point, steps: u32, generation: u64) -> Self {
        Self { offset, step: 0, steps: steps.max(1), generation }
    }

    /// Generation this animation was started under.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }

    /// Advance one frame and return this frame's pan delta, or `None` once
    /// every step has been taken.
    pub fn next_step(&mut self) -> Option<Point> {
        if self.is_finished() {
            return None;
        }
        let steps = f64::from(self.steps);
        let before = ease_out_cubic(f64::from(self.step) / steps);
        self.step += 1;
        let after = ease_out_cubic(f64::from(self.step) / steps);
        Some(self.offset.scale(after - before))
    }
}
