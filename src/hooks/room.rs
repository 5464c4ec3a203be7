//! Room container hook: entrance ripple and room-level cues.

use interact::config::HookConfig;
use interact::cue;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::dom;
use crate::net::push::Pusher;
use crate::util::js::to_json;

/// Hook object for the room container.
#[wasm_bindgen]
pub struct RoomHook {
    el: HtmlElement,
    pusher: Pusher,
}

#[wasm_bindgen]
impl RoomHook {
    /// Mount on `el` and play the entrance ripple.
    #[wasm_bindgen(constructor)]
    pub fn new(el: HtmlElement, push: js_sys::Function) -> RoomHook {
        dom::effects::room_ripple(&el);
        Self { el, pusher: Pusher::new(push) }
    }

    /// Play a server cue. The transition style is read from the element on
    /// every cue so re-rendered attributes take effect.
    #[wasm_bindgen(js_name = handleCue)]
    pub fn handle_cue(&self, name: &str, payload: JsValue) {
        let config = HookConfig::from_attributes(|attr| dom::attr(&self.el, attr));
        let actions = cue::dispatch(name, to_json(&payload), &config);
        super::perform_all("room", actions, &self.pusher, None);
    }
}
