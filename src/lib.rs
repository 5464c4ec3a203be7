//! # gridroom-client
//!
//! WASM hooks for the Gridroom live page. Each hook is a `#[wasm_bindgen]`
//! object the page's JavaScript hook shim creates on `mounted()`, feeds cues
//! into from `handleEvent`, and drops on `destroyed()`:
//!
//! | Hook | Role |
//! |------|------|
//! | [`hooks::GridCanvasHook`] | Pan/zoom/touch capture, keyboard movement, centering, node transitions |
//! | [`hooks::RoomHook`] | Room-entrance ripple, feedback flashes and toasts, input clearing |
//! | [`hooks::TypingHook`] | `typing_start` / `typing_stop` for a text field |
//! | [`hooks::BucketStoreHook`] | Bucket id cache in `localStorage` |
//! | [`hooks::ScrollToBottomHook`] | Keeps a message list scrolled to the newest entry |
//!
//! All decisions are made by the [`interact`] crate; this crate only wires DOM
//! events in and carries the resulting actions out. The live-page socket is
//! not ours: every hook is handed the shim's `pushEvent` as a plain function.
//!
//! Browser code is gated behind the `hydrate` feature so the crate still
//! builds and tests natively.

pub mod markup;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod hooks;
#[cfg(feature = "hydrate")]
pub mod net;
#[cfg(feature = "hydrate")]
pub mod util;

/// WASM entry point: panic hook and console logging.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    util::logging::init();
}
