//! `#[wasm_bindgen]` hook objects, one per live-page hook.
//!
//! DESIGN
//! ======
//! Every hook owns an [`interact`] state machine, feeds it DOM events, and
//! hands the returned actions to [`perform`] (plus whatever surface-specific
//! actions it handles itself). Listeners are RAII [`Listener`]s, so dropping a
//! hook, or calling `destroyed()`, unregisters everything it installed.
//!
//! [`Listener`]: crate::dom::listener::Listener

mod bucket_store;
mod grid_canvas;
mod keyboard;
mod room;
mod scroll;
mod typing;

pub use bucket_store::BucketStoreHook;
pub use grid_canvas::GridCanvasHook;
pub use room::RoomHook;
pub use scroll::ScrollToBottomHook;
pub use typing::TypingHook;

use interact::buckets;
use interact::engine::Action;
use web_sys::Event;

use crate::dom::effects;
use crate::net::push::Pusher;
use crate::util::storage::LocalStore;

/// Carry out a surface-independent action. Actions that only make sense to a
/// specific hook are handed back so the caller can handle or log them.
pub(crate) fn perform(action: Action, pusher: &Pusher, event: Option<&Event>) -> Option<Action> {
    match action {
        Action::Send(command) => pusher.send(&command),
        Action::PreventDefault => {
            if let Some(event) = event {
                event.prevent_default();
            }
        }
        Action::PlayTransition { node_id, style } => effects::play_transition(node_id, style, pusher.clone()),
        Action::FlashMessage { message_id, kind } => {
            effects::flash_message(&message_id, kind);
        }
        Action::ShowToast { kind } => effects::show_toast(kind),
        Action::ClearInput { id } => effects::clear_input(&id),
        Action::PersistBuckets(list) => {
            buckets::persist(&LocalStore, &list);
        }
        other @ (Action::SetCursor(_)
        | Action::StartMoveLoop
        | Action::StopMoveLoop
        | Action::ScheduleCenterStep { .. }
        | Action::ArmTypingStop { .. }
        | Action::CancelTypingStop) => return Some(other),
    }
    None
}

/// Perform every action generically, logging the ones this hook cannot handle.
pub(crate) fn perform_all(hook: &str, actions: Vec<Action>, pusher: &Pusher, event: Option<&Event>) {
    for action in actions {
        if let Some(unhandled) = perform(action, pusher, event) {
            log::debug!("{hook}: ignoring {unhandled:?}");
        }
    }
}
