//! Typing indicator hook for the chat input.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use interact::engine::Action;
use interact::typing::TypingDebounce;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::dom::listener::Listener;
use crate::net::push::Pusher;

struct Typing {
    debounce: TypingDebounce,
    pusher: Pusher,
    stop_timer: Option<Timeout>,
}

/// Hook object for a text field whose activity drives the typing indicator.
#[wasm_bindgen]
pub struct TypingHook {
    state: Rc<RefCell<Typing>>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl TypingHook {
    #[wasm_bindgen(constructor)]
    pub fn new(el: HtmlElement, push: js_sys::Function) -> Result<TypingHook, JsValue> {
        let state = Rc::new(RefCell::new(Typing {
            debounce: TypingDebounce::new(),
            pusher: Pusher::new(push),
            stop_timer: None,
        }));
        let on_input = Rc::downgrade(&state);
        let on_blur = Rc::downgrade(&state);
        let listeners = vec![
            Listener::new(&el, "input", move |_event| {
                if let Some(state) = on_input.upgrade() {
                    let actions = state.borrow_mut().debounce.input();
                    apply(&state, actions);
                }
            })?,
            Listener::new(&el, "blur", move |_event| {
                if let Some(state) = on_blur.upgrade() {
                    let actions = state.borrow_mut().debounce.blur();
                    apply(&state, actions);
                }
            })?,
        ];
        Ok(Self { state, listeners })
    }

    /// Unmount: remove listeners and cancel any pending stop.
    pub fn destroyed(&mut self) {
        self.listeners.clear();
        let timer = self.state.borrow_mut().stop_timer.take();
        drop(timer);
    }
}

fn apply(state: &Rc<RefCell<Typing>>, actions: Vec<Action>) {
    let pusher = state.borrow().pusher.clone();
    for action in actions {
        match action {
            Action::ArmTypingStop { token, after_ms } => {
                let timer = Timeout::new(after_ms, fire(Rc::downgrade(state), token));
                // Replacing the slot cancels whatever was armed before.
                state.borrow_mut().stop_timer = Some(timer);
            }
            Action::CancelTypingStop => {
                let timer = state.borrow_mut().stop_timer.take();
                drop(timer);
            }
            other => {
                if let Some(unhandled) = super::perform(other, &pusher, None) {
                    log::debug!("typing: ignoring {unhandled:?}");
                }
            }
        }
    }
}

fn fire(state: Weak<RefCell<Typing>>, token: u64) -> impl FnOnce() + 'static {
    move || {
        let Some(state) = state.upgrade() else {
            return;
        };
        // The fired timer stays in its slot until the next arm replaces it.
        let actions = state.borrow_mut().debounce.fire(token);
        apply(&state, actions);
    }
}
