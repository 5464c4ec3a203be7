//! Page-wide keyboard dispatch.
//!
//! One set of window listeners serves every mounted grid surface. Key events
//! go to the registry's active surface only; the listeners are installed with
//! the first surface and removed with the last.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use interact::registry::{Registry, SurfaceId};

use super::grid_canvas::{self, Surface};
use crate::dom::listener::Listener;
use crate::dom::{self, HookError};

thread_local! {
    static SURFACES: RefCell<Registry<Weak<RefCell<Surface>>>> = RefCell::new(Registry::new());
    static LISTENERS: RefCell<Vec<Listener>> = const { RefCell::new(Vec::new()) };
}

/// Register a surface and make it the keyboard target.
pub(super) fn register(surface: &Rc<RefCell<Surface>>) -> Result<SurfaceId, HookError> {
    let id = SURFACES.with_borrow_mut(|reg| reg.attach(Rc::downgrade(surface)));
    if LISTENERS.with_borrow(Vec::is_empty) {
        match install() {
            Ok(listeners) => LISTENERS.with_borrow_mut(|slot| *slot = listeners),
            Err(e) => {
                SURFACES.with_borrow_mut(|reg| reg.detach(id));
                return Err(e);
            }
        }
    }
    Ok(id)
}

pub(super) fn unregister(id: SurfaceId) {
    let now_empty = SURFACES.with_borrow_mut(|reg| {
        reg.detach(id);
        reg.is_empty()
    });
    if now_empty {
        // Dropped outside the borrow: removing a listener runs JS.
        let listeners = LISTENERS.with_borrow_mut(std::mem::take);
        drop(listeners);
    }
}

/// Route keys to this surface from now on. The surface losing activity
/// releases its held keys, since their key-ups will go elsewhere.
pub(super) fn activate(id: SurfaceId) {
    let losing = SURFACES.with_borrow_mut(|reg| reg.hand_off(id).and_then(|prev| reg.get(prev).and_then(Weak::upgrade)));
    if let Some(surface) = losing {
        grid_canvas::on_window_blur(&surface);
    }
}

fn active() -> Option<Rc<RefCell<Surface>>> {
    SURFACES.with_borrow(|reg| reg.active().and_then(Weak::upgrade))
}

fn install() -> Result<Vec<Listener>, HookError> {
    let window = dom::window()?;
    Ok(vec![
        Listener::new(&window, "keydown", |event| {
            if let Some(surface) = active() {
                grid_canvas::on_key_down(&surface, &event);
            }
        })?,
        Listener::new(&window, "keyup", |event| {
            if let Some(surface) = active() {
                grid_canvas::on_key_up(&surface, &event);
            }
        })?,
        Listener::new(&window, "blur", |_event| {
            if let Some(surface) = active() {
                grid_canvas::on_window_blur(&surface);
            }
        })?,
    ])
}
