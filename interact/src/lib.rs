//! Interaction core for the Gridroom surface hooks.
//!
//! This crate holds every decision the browser hooks make, with no browser
//! dependency: translating raw pointer, wheel, touch, and keyboard input into
//! server commands, running the movement loop and centering animation,
//! interpreting server cues, and mirroring bucket ids into client storage.
//! Handlers return [`engine::Action`]s; the wasm bridge in the root crate is
//! responsible only for wiring DOM events in and carrying actions out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Per-surface [`engine::HookCore`] and the [`engine::Action`] set |
//! | [`event`] | Outbound [`event::Command`]s and inbound [`event::Cue`]s |
//! | [`gesture`] | Mouse drag, wheel, and single-touch pan capture |
//! | [`keys`] | Key classification and priority routing |
//! | [`movement`] | Pressed-key set and the fixed-cadence move loop |
//! | [`centering`] | Eased multi-step pan onto the player |
//! | [`camera`] | Points and the player/viewport reading |
//! | [`cue`] | Cue → action translation |
//! | [`effect`] | Timed visual-effect lifecycles (overlays, flashes, toasts) |
//! | [`typing`] | Typing start/stop debounce |
//! | [`buckets`] | Bucket id persistence through a key/value store |
//! | [`registry`] | Active-surface registry for keyboard routing |
//! | [`config`] | [`config::HookConfig`] parsed from surface attributes |
//! | [`consts`] | Timing and tuning constants |

pub mod buckets;
pub mod camera;
pub mod centering;
pub mod config;
pub mod consts;
pub mod cue;
pub mod effect;
pub mod engine;
pub mod event;
pub mod gesture;
pub mod keys;
pub mod movement;
pub mod registry;
pub mod typing;
