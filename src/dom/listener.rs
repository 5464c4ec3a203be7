//! Event listeners that unregister themselves when dropped.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use super::HookError;

/// A registered DOM event listener. Dropping it removes the listener and
/// frees the closure.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Listen for `event` on `target`.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, HookError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| HookError::Listen { event, detail: format!("{e:?}") })?;
        Ok(Self { target: target.clone(), event, callback })
    }

    /// Listen with `passive: false` so the handler may call `preventDefault`
    /// (wheel and touch listeners are passive by default in most browsers).
    pub fn active<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, HookError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| HookError::Listen { event, detail: format!("{e:?}") })?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) =
            self.target.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("failed to remove {} listener: {e:?}", self.event);
        }
    }
}
