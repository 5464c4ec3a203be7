//! Per-surface behaviour switches.
//!
//! The hooks have shipped with several behaviour sets over time (panel keys
//! on or off, `c` as a second centering key, a ripple or zoom transition, and
//! re-engaging camera follow after centering). One canonical set is the
//! default; the rest are opt-in through `data-*` attributes on the surface
//! element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{RIPPLE_DWELL_MS, ZOOM_DWELL_MS};

/// Visual style of the node-entry transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionStyle {
    /// Layered ripple rings.
    #[default]
    Ripple,
    /// Zoom into the node.
    Zoom,
}

impl TransitionStyle {
    /// How long the overlay holds before navigation.
    #[must_use]
    pub fn dwell_ms(self) -> u32 {
        match self {
            Self::Ripple => RIPPLE_DWELL_MS,
            Self::Zoom => ZOOM_DWELL_MS,
        }
    }

    /// Overlay CSS class.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Ripple => "node-transition-ripple",
            Self::Zoom => "node-transition-zoom",
        }
    }
}

/// Behaviour switches for one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookConfig {
    /// `n` / `escape` / `enter` drive the create panel and selection.
    pub panel_keys: bool,
    /// `c` centers on the player in addition to space.
    pub center_on_c: bool,
    /// Send `enable_camera_follow` once a centering animation finishes.
    pub camera_follow: bool,
    pub transition: TransitionStyle,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self { panel_keys: true, center_on_c: true, camera_follow: false, transition: TransitionStyle::Ripple }
    }
}

impl HookConfig {
    /// Read overrides from surface attributes; anything unrecognised keeps the default.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |name: &str, default: bool| lookup(name).and_then(|raw| parse_flag(&raw)).unwrap_or(default);
        let transition = match lookup("data-transition").as_deref().map(str::trim) {
            Some("zoom") => TransitionStyle::Zoom,
            Some("ripple") => TransitionStyle::Ripple,
            _ => defaults.transition,
        };
        Self {
            panel_keys: flag("data-panel-keys", defaults.panel_keys),
            center_on_c: flag("data-center-on-c", defaults.center_on_c),
            camera_follow: flag("data-camera-follow", defaults.camera_follow),
            transition,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
