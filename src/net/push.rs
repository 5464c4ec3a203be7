//! Command sender over the host's `pushEvent`.
//!
//! The socket itself belongs to the page; hooks only get a function that
//! takes `(name, payload)`. Sends are fire-and-forget: nothing is awaited,
//! retried, or acknowledged.

use interact::event::Command;
use wasm_bindgen::JsValue;

use crate::util::js::from_json;

/// Cloneable handle to the shim's push function.
#[derive(Clone, Debug)]
pub struct Pusher {
    push: js_sys::Function,
}

impl Pusher {
    pub fn new(push: js_sys::Function) -> Self {
        Self { push }
    }

    /// Push one command. Failures are logged and dropped.
    pub fn send(&self, command: &Command) {
        let Some(payload) = from_json(&command.payload()) else {
            return;
        };
        let name = JsValue::from_str(command.name());
        if let Err(e) = self.push.call2(&JsValue::NULL, &name, &payload) {
            log::warn!("push {} failed: {e:?}", command.name());
        }
    }
}
