//! DOM plumbing: listeners, frame/timer scheduling, and visual effects.

pub mod effects;
pub mod listener;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, Window};

/// Error raised while mounting a hook. Handlers never raise after mount.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("no window")]
    NoWindow,
    #[error("failed to listen for {event}: {detail}")]
    Listen { event: &'static str, detail: String },
}

impl From<HookError> for JsValue {
    fn from(e: HookError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

pub fn window() -> Result<Window, HookError> {
    web_sys::window().ok_or(HookError::NoWindow)
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

/// Create a `<div>` with the given class list.
pub fn div(class: &str) -> Option<HtmlElement> {
    let el = match document()?.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            log::warn!("create div failed: {e:?}");
            return None;
        }
    };
    el.set_class_name(class);
    match el.dyn_into::<HtmlElement>() {
        Ok(el) => Some(el),
        Err(el) => {
            log::warn!("created <{}> is not an HtmlElement", el.tag_name());
            None
        }
    }
}

/// Read an attribute from an element.
pub fn attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(name)
}

/// Whether the event started on (or inside) a link.
pub fn from_link(event: &web_sys::Event) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    let Some(el) = target.dyn_ref::<Element>() else {
        return false;
    };
    match el.closest("a") {
        Ok(link) => link.is_some(),
        Err(e) => {
            log::debug!("link lookup failed: {e:?}");
            false
        }
    }
}

/// Tag name of the focused element, if any.
pub fn focused_tag() -> Option<String> {
    document().and_then(|d| d.active_element()).map(|el| el.tag_name())
}

/// Run `f` on the next animation frame. Falls back to running it now when no
/// frame can be requested.
pub fn next_frame<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(window) = web_sys::window() else {
        f();
        return;
    };
    // The callback is handed to JS and freed after its single call.
    let callback = Closure::once_into_js(f);
    if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
        log::warn!("requestAnimationFrame failed: {e:?}");
    }
}

/// Run `f` once after `ms` milliseconds. The timer cannot be cancelled.
pub fn after<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    gloo_timers::callback::Timeout::new(ms, f).forget();
}
