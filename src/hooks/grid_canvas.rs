//! The grid surface hook: pointer, wheel, touch, and keyboard navigation.
//!
//! Mouse and touch listeners belong to the hook; keyboard listeners are
//! page-wide and shared through [`super::keyboard`]. The surface state lives
//! behind `Rc<RefCell<_>>` so timers and frames can reach it, and every
//! callback holds a `Weak` so an unmounted surface is simply skipped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use interact::camera::{CameraReading, Point};
use interact::config::HookConfig;
use interact::consts::MOVE_TICK_MS;
use interact::engine::{Action, HookCore};
use interact::keys::{KeyInput, Modifiers};
use interact::registry::SurfaceId;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent, TouchList, WheelEvent};

use super::keyboard;
use crate::dom::listener::Listener;
use crate::dom::{self, HookError};
use crate::markup;
use crate::net::push::Pusher;
use crate::util::js::to_json;

/// Mounted surface state shared between the hook and its callbacks.
pub(super) struct Surface {
    el: HtmlElement,
    core: HookCore,
    pusher: Pusher,
    move_timer: Option<Interval>,
}

/// Hook object for the grid element.
#[wasm_bindgen]
pub struct GridCanvasHook {
    surface: Rc<RefCell<Surface>>,
    id: Option<SurfaceId>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl GridCanvasHook {
    /// Mount on `el`. `push` is the page's `(name, payload)` sender.
    #[wasm_bindgen(constructor)]
    pub fn new(el: HtmlElement, push: js_sys::Function) -> Result<GridCanvasHook, JsValue> {
        let config = HookConfig::from_attributes(|name| dom::attr(&el, name));
        let surface = Rc::new(RefCell::new(Surface {
            el: el.clone(),
            core: HookCore::new(config),
            pusher: Pusher::new(push),
            move_timer: None,
        }));
        let id = keyboard::register(&surface)?;
        let listeners = match pointer_listeners(&el, &surface, id) {
            Ok(listeners) => listeners,
            Err(e) => {
                keyboard::unregister(id);
                return Err(e.into());
            }
        };
        log::debug!("grid canvas mounted ({config:?})");
        Ok(Self { surface, id: Some(id), listeners })
    }

    /// Play a server cue (`entering_node`, `feedback_given`, ...).
    #[wasm_bindgen(js_name = handleCue)]
    pub fn handle_cue(&self, name: &str, payload: JsValue) {
        let actions = self.surface.borrow().core.cue(name, to_json(&payload));
        apply(&self.surface, actions, None);
    }

    /// The server re-rendered the element; pick up changed configuration.
    pub fn updated(&self) {
        let mut surface = self.surface.borrow_mut();
        let config = HookConfig::from_attributes(|name| dom::attr(&surface.el, name));
        surface.core.config = config;
    }

    /// Unmount: stop every loop, drop listeners, leave the keyboard registry.
    pub fn destroyed(&mut self) {
        self.release();
    }
}

impl GridCanvasHook {
    fn release(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        keyboard::unregister(id);
        self.listeners.clear();
        let actions = self.surface.borrow_mut().core.detach();
        apply(&self.surface, actions, None);
        log::debug!("grid canvas destroyed");
    }
}

impl Drop for GridCanvasHook {
    fn drop(&mut self) {
        self.release();
    }
}

fn pointer_listeners(
    el: &HtmlElement,
    surface: &Rc<RefCell<Surface>>,
    id: SurfaceId,
) -> Result<Vec<Listener>, HookError> {
    let window = dom::window()?;
    let weak = Rc::downgrade(surface);

    Ok(vec![
        Listener::new(el, "mousedown", handler(&weak, move |surface, event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            keyboard::activate(id);
            let on_link = dom::from_link(event);
            let actions = surface.borrow_mut().core.pointer_down(client_point(mouse), on_link);
            apply(surface, actions, Some(event));
        }))?,
        Listener::new(&window, "mousemove", handler(&weak, |surface, event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let actions = surface.borrow_mut().core.pointer_move(client_point(mouse));
            apply(surface, actions, Some(event));
        }))?,
        Listener::new(&window, "mouseup", handler(&weak, |surface, event| {
            let actions = surface.borrow_mut().core.pointer_up();
            apply(surface, actions, Some(event));
        }))?,
        Listener::active(el, "wheel", handler(&weak, |surface, event| {
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            let actions = surface.borrow().core.wheel(wheel.delta_y(), client_point(wheel));
            apply(surface, actions, Some(event));
        }))?,
        Listener::active(el, "touchstart", handler(&weak, move |surface, event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            keyboard::activate(id);
            let actions = surface.borrow_mut().core.touch_start(&touch_points(&touch.touches()));
            apply(surface, actions, Some(event));
        }))?,
        Listener::active(el, "touchmove", handler(&weak, |surface, event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let actions = surface.borrow_mut().core.touch_move(&touch_points(&touch.touches()));
            apply(surface, actions, Some(event));
        }))?,
        Listener::new(el, "touchend", handler(&weak, |surface, event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let actions = surface.borrow_mut().core.touch_end(&touch_points(&touch.touches()));
            apply(surface, actions, Some(event));
        }))?,
    ])
}

/// Wrap a surface handler so it runs only while the surface is alive.
fn handler<F>(weak: &Weak<RefCell<Surface>>, f: F) -> impl FnMut(Event) + 'static
where
    F: Fn(&Rc<RefCell<Surface>>, &Event) + 'static,
{
    let weak = weak.clone();
    move |event| {
        if let Some(surface) = weak.upgrade() {
            f(&surface, &event);
        }
    }
}

fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn touch_points(list: &TouchList) -> Vec<Point> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
        .collect()
}

pub(super) fn on_key_down(surface: &Rc<RefCell<Surface>>, event: &Event) {
    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
        return;
    };
    let key = key_event.key();
    let input = KeyInput {
        key: &key,
        in_text_field: dom::focused_tag().is_some_and(|tag| markup::is_text_field(&tag)),
        modifiers: modifiers(key_event),
    };
    let actions = {
        let mut state = surface.borrow_mut();
        let el = state.el.clone();
        state.core.key_down(input, || {
            CameraReading::from_attributes(|name| dom::attr(&el, name))
        })
    };
    apply(surface, actions, Some(event));
}

fn modifiers(event: &KeyboardEvent) -> Modifiers {
    Modifiers {
        shift: event.shift_key(),
        ctrl: event.ctrl_key(),
        alt: event.alt_key(),
        meta: event.meta_key(),
    }
}

pub(super) fn on_key_up(surface: &Rc<RefCell<Surface>>, event: &Event) {
    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
        return;
    };
    let actions = surface.borrow_mut().core.key_up(&key_event.key());
    apply(surface, actions, Some(event));
}

pub(super) fn on_window_blur(surface: &Rc<RefCell<Surface>>) {
    let actions = surface.borrow_mut().core.window_blur();
    apply(surface, actions, None);
}

/// Carry out core actions. Never called with the surface borrowed.
fn apply(surface: &Rc<RefCell<Surface>>, actions: Vec<Action>, event: Option<&Event>) {
    let pusher = surface.borrow().pusher.clone();
    for action in actions {
        match action {
            Action::SetCursor(cursor) => {
                let state = surface.borrow();
                if let Err(e) = state.el.style().set_property("cursor", cursor.css()) {
                    log::debug!("set cursor failed: {e:?}");
                }
            }
            Action::StartMoveLoop => start_move_loop(surface),
            Action::StopMoveLoop => {
                // Dropping the interval cancels it.
                let timer = surface.borrow_mut().move_timer.take();
                drop(timer);
            }
            Action::ScheduleCenterStep { generation } => schedule_center_step(surface, generation),
            other => {
                if let Some(unhandled) = super::perform(other, &pusher, event) {
                    log::debug!("grid canvas: ignoring {unhandled:?}");
                }
            }
        }
    }
}

fn start_move_loop(surface: &Rc<RefCell<Surface>>) {
    let weak = Rc::downgrade(surface);
    let timer = Interval::new(MOVE_TICK_MS, move || {
        let Some(surface) = weak.upgrade() else {
            return;
        };
        let actions = surface.borrow().core.move_tick();
        apply(&surface, actions, None);
    });
    surface.borrow_mut().move_timer = Some(timer);
}

fn schedule_center_step(surface: &Rc<RefCell<Surface>>, generation: u64) {
    let weak = Rc::downgrade(surface);
    dom::next_frame(move || {
        let Some(surface) = weak.upgrade() else {
            return;
        };
        let actions = surface.borrow_mut().core.center_step(generation);
        apply(&surface, actions, None);
    });
}
