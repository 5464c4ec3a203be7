//! Timed visual effects played in response to server cues.
//!
//! Each effect follows the lifecycle types in [`interact::effect`] and
//! [`interact::cue::Transition`]; this module only creates, classes, and
//! removes elements at the moments those types dictate. Missing elements are
//! skipped silently.

use std::cell::RefCell;
use std::rc::Rc;

use interact::config::TransitionStyle;
use interact::consts::RIPPLE_RINGS;
use interact::cue::Transition;
use interact::effect::{ClassTarget, TimedEffect, ToastPhase, ToastStep, ToastTimeline, start_flash};
use interact::event::{Command, FeedbackKind};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use super::{after, body, div, document, next_frame};
use crate::markup;
use crate::net::push::Pusher;

/// Full-screen node-entry overlay; navigates once the dwell has elapsed.
pub fn play_transition(node_id: String, style: TransitionStyle, pusher: Pusher) {
    let (Some(body), Some(overlay)) = (body(), div(&markup::transition_classes(style))) else {
        // No document to animate in; navigate straight away.
        pusher.send(&Command::NavigateToNode { id: node_id });
        return;
    };
    if style == TransitionStyle::Ripple {
        for index in 0..RIPPLE_RINGS {
            if let Some(ring) = div(markup::RIPPLE_RING_CLASS) {
                set_style(&ring, "animation-delay", &markup::ring_delay(index));
                append(&overlay, &ring);
            }
        }
    }
    append(&body, &overlay);

    let transition = Rc::new(RefCell::new(Transition::new(node_id, style)));
    next_frame(move || {
        add_class(&overlay, markup::ACTIVE_CLASS);
        let Some(dwell) = transition.borrow_mut().activate() else {
            return;
        };
        after(dwell, move || {
            overlay.remove();
            let command = transition.borrow_mut().finish();
            if let Some(command) = command {
                pusher.send(&command);
            }
        });
    });
}

/// Decorative one-shot ripple inside `container`.
pub fn room_ripple(container: &Element) {
    let Some(ripple) = div(markup::ROOM_RIPPLE_CLASS) else {
        return;
    };
    append(container, &ripple);
    let mut effect = TimedEffect::room_ripple();
    if let Some(dwell) = effect.trigger() {
        after(dwell, move || {
            if effect.expire() {
                ripple.remove();
            }
        });
    }
}

/// The live document as a [`ClassTarget`].
struct Page;

impl ClassTarget for Page {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        document().and_then(|d| d.get_element_by_id(id))
    }

    fn add_class(&self, el: &Element, class: &str) {
        add_class(el, class);
    }
}

/// Flash a chat message. Returns `false` when the message is not on the page.
pub fn flash_message(message_id: &str, kind: FeedbackKind) -> bool {
    let Some((el, mut effect)) = start_flash(&Page, message_id, kind) else {
        return false;
    };
    after(effect.dwell_ms(), move || {
        if effect.expire() {
            remove_class(&el, kind.flash_class());
        }
    });
    true
}

/// Transient toast describing the feedback. Toasts stack freely.
pub fn show_toast(kind: FeedbackKind) {
    let (Some(body), Some(toast)) = (body(), div(&markup::toast_classes(kind))) else {
        return;
    };
    toast.set_text_content(Some(kind.toast_text()));
    append(&body, &toast);
    advance_toast(toast, ToastTimeline::new());
}

fn advance_toast(toast: HtmlElement, mut timeline: ToastTimeline) {
    let step = timeline.pending();
    let run = move || {
        match timeline.advance() {
            ToastPhase::Shown => add_class(&toast, markup::SHOW_CLASS),
            ToastPhase::Hiding => remove_class(&toast, markup::SHOW_CLASS),
            ToastPhase::Removed => {
                toast.remove();
                return;
            }
            ToastPhase::Mounted => {}
        }
        advance_toast(toast, timeline);
    };
    match step {
        ToastStep::NextFrame => next_frame(run),
        ToastStep::After(ms) => after(ms, run),
        ToastStep::Done => {}
    }
}

/// Clear a text field's value by element id.
pub fn clear_input(id: &str) {
    let Some(el) = document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value("");
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value("");
    }
}

fn append(parent: &Element, child: &Element) {
    if let Err(e) = parent.append_child(child) {
        log::debug!("append failed: {e:?}");
    }
}

fn add_class(el: &Element, class: &str) {
    if let Err(e) = el.class_list().add_1(class) {
        log::debug!("add class {class} failed: {e:?}");
    }
}

fn remove_class(el: &Element, class: &str) {
    if let Err(e) = el.class_list().remove_1(class) {
        log::debug!("remove class {class} failed: {e:?}");
    }
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("set style {property} failed: {e:?}");
    }
}
