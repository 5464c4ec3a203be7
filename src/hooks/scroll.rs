//! Keeps a scrolling container pinned to its newest content.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
pub struct ScrollToBottomHook {
    el: HtmlElement,
}

#[wasm_bindgen]
impl ScrollToBottomHook {
    #[wasm_bindgen(constructor)]
    pub fn new(el: HtmlElement) -> ScrollToBottomHook {
        let hook = Self { el };
        hook.updated();
        hook
    }

    pub fn updated(&self) {
        self.el.set_scroll_top(self.el.scroll_height());
    }
}
