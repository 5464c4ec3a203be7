//! Shared timing and tuning constants for the interaction core.

// ── Movement ────────────────────────────────────────────────────

/// Period of the movement loop in milliseconds (~60 ticks per second).
pub const MOVE_TICK_MS: u32 = 16;

/// Per-axis scale applied when both axes are non-zero, keeping diagonal
/// speed equal to axis-aligned speed.
pub const DIAGONAL_SCALE: f64 = std::f64::consts::FRAC_1_SQRT_2;

// ── Centering ───────────────────────────────────────────────────

/// Number of animation-frame steps used to pan onto the player.
pub const CENTER_STEPS: u32 = 20;

// ── Cue effects ─────────────────────────────────────────────────

/// Dwell of the ripple transition before navigating into a node.
pub const RIPPLE_DWELL_MS: u32 = 1000;

/// Dwell of the zoom transition before navigating into a node.
pub const ZOOM_DWELL_MS: u32 = 800;

/// Number of layered rings in the ripple transition overlay.
pub const RIPPLE_RINGS: usize = 3;

/// Lifetime of the decorative room-entrance ripple.
pub const ROOM_RIPPLE_MS: u32 = 1200;

/// How long a feedback flash class stays on a message.
pub const FLASH_MS: u32 = 600;

/// How long a toast stays fully shown before it starts hiding.
pub const TOAST_SHOW_MS: u32 = 1500;

/// Delay between a toast starting to hide and its removal.
pub const TOAST_FADE_MS: u32 = 300;

// ── Typing ──────────────────────────────────────────────────────

/// Idle gap after the last input before `typing_stop` is sent.
pub const TYPING_IDLE_MS: u32 = 2000;

// ── Storage ─────────────────────────────────────────────────────

/// Client storage key holding the cached bucket id list.
pub const BUCKETS_STORAGE_KEY: &str = "gridroom:bucket_ids";
