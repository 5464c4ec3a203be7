//! Bucket persistence hook: restores saved buckets on mount and saves the
//! server's list whenever it changes.

use interact::buckets;
use interact::config::HookConfig;
use interact::cue;
use wasm_bindgen::prelude::*;

use crate::net::push::Pusher;
use crate::util::js::to_json;
use crate::util::storage::LocalStore;

#[wasm_bindgen]
pub struct BucketStoreHook {
    pusher: Pusher,
}

#[wasm_bindgen]
impl BucketStoreHook {
    /// Mount and send `restore_buckets` when a saved list exists.
    #[wasm_bindgen(constructor)]
    pub fn new(push: js_sys::Function) -> BucketStoreHook {
        let pusher = Pusher::new(push);
        if let Some(command) = buckets::restore(&LocalStore) {
            pusher.send(&command);
        }
        Self { pusher }
    }

    /// Handle `buckets_updated`; other cues are played generically.
    #[wasm_bindgen(js_name = handleCue)]
    pub fn handle_cue(&self, name: &str, payload: JsValue) {
        let actions = cue::dispatch(name, to_json(&payload), &HookConfig::default());
        super::perform_all("bucket store", actions, &self.pusher, None);
    }
}
