#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

/// A point or displacement in viewport (CSS pixel) space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Inverted delta from `last` to `self`: content moves opposite to the cursor.
    #[must_use]
    pub fn pull_from(self, last: Point) -> Point {
        Point { x: -(self.x - last.x), y: -(self.y - last.y) }
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Point {
        Point { x: self.x * factor, y: self.y * factor }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x.abs() < f64::EPSILON && self.y.abs() < f64::EPSILON
    }
}

/// Player and viewport positions as published by the surface.
///
/// Both are read from numeric data attributes; absent or unparseable values
/// read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraReading {
    pub player: Point,
    pub viewport: Point,
}

impl CameraReading {
    /// Build a reading from an attribute lookup (`data-player-x` and friends).
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let num = |name: &str| lookup(name).and_then(|raw| parse_number(&raw)).unwrap_or(0.0);
        Self {
            player: Point::new(num("data-player-x"), num("data-player-y")),
            viewport: Point::new(num("data-viewport-x"), num("data-viewport-y")),
        }
    }

    /// Offset that moves the viewport onto the player.
    #[must_use]
    pub fn center_offset(&self) -> Point {
        Point { x: self.player.x - self.viewport.x, y: self.player.y - self.viewport.y }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}
