use super::*;
use crate::camera::CameraReading;
use crate::engine::{Action, HookCore};
use crate::keys::KeyInput;

#[test]
fn empty_registry_has_no_active_surface() {
    let reg: Registry<u32> = Registry::new();
    assert!(reg.is_empty());
    assert!(reg.active().is_none());
}

#[test]
fn latest_attach_is_active() {
    let mut reg = Registry::new();
    let a = reg.attach("a");
    let b = reg.attach("b");
    assert_ne!(a, b);
    assert_eq!(reg.active_id(), Some(b));
    assert_eq!(reg.active(), Some(&"b"));
}

#[test]
fn detaching_active_falls_back_to_most_recent() {
    let mut reg = Registry::new();
    let a = reg.attach("a");
    let b = reg.attach("b");
    let c = reg.attach("c");
    assert!(reg.activate(a));
    assert_eq!(reg.detach(a), Some("a"));
    assert_eq!(reg.active_id(), Some(c));
    assert_eq!(reg.detach(c), Some("c"));
    assert_eq!(reg.active_id(), Some(b));
}

#[test]
fn detaching_inactive_keeps_active() {
    let mut reg = Registry::new();
    let a = reg.attach(1);
    let b = reg.attach(2);
    reg.detach(a);
    assert_eq!(reg.active_id(), Some(b));
    assert_eq!(reg.len(), 1);
}

#[test]
fn unknown_ids_are_rejected() {
    let mut reg = Registry::new();
    let a = reg.attach(1);
    reg.detach(a);
    assert_eq!(reg.detach(a), None);
    assert!(!reg.activate(a));
    assert!(reg.get(a).is_none());
}

#[test]
fn ids_are_not_reused() {
    let mut reg = Registry::new();
    let a = reg.attach(1);
    reg.detach(a);
    let b = reg.attach(2);
    assert_ne!(a, b);
}

#[test]
fn keys_reach_only_the_active_surface() {
    let mut reg = Registry::new();
    let first = reg.attach(HookCore::default());
    let second = reg.attach(HookCore::default());

    let input = KeyInput::plain("w");
    let actions = reg.active_mut().map(|core| core.key_down(input, CameraReading::default)).unwrap_or_default();
    assert!(actions.contains(&Action::StartMoveLoop));

    assert!(reg.get(second).is_some_and(|core| core.movement().is_running()));
    assert!(reg.get(first).is_some_and(|core| !core.movement().is_running()));
}

#[test]
fn hand_off_reports_the_surface_losing_activity() {
    let mut reg = Registry::new();
    let a = reg.attach("a");
    let b = reg.attach("b");
    assert_eq!(reg.hand_off(a), Some(b));
    assert_eq!(reg.active_id(), Some(a));
}

#[test]
fn hand_off_to_the_active_or_unknown_surface_is_silent() {
    let mut reg = Registry::new();
    let a = reg.attach("a");
    assert_eq!(reg.hand_off(a), None);
    let gone = reg.attach("gone");
    reg.detach(gone);
    assert_eq!(reg.hand_off(gone), None);
    assert_eq!(reg.active_id(), Some(a));
}

#[test]
fn held_keys_stop_when_activity_moves_away() {
    let mut reg = Registry::new();
    let first = reg.attach(HookCore::default());
    let second = reg.attach(HookCore::default());

    let held = reg.active_mut().map(|core| core.key_down(KeyInput::plain("w"), CameraReading::default));
    assert!(held.is_some_and(|actions| actions.contains(&Action::StartMoveLoop)));

    // Pointer lands on the other surface while `w` is still down.
    let losing = reg.hand_off(first);
    assert_eq!(losing, Some(second));
    let stopped = core_at(&mut reg, losing).map(HookCore::window_blur).unwrap_or_default();
    assert_eq!(stopped, vec![Action::StopMoveLoop]);
    assert!(reg.get(second).is_some_and(|core| !core.movement().is_running()));

    // The key-up now reaches the new surface and is a no-op there.
    let released = reg.active_mut().map(|core| core.key_up("w")).unwrap_or_default();
    assert!(released.is_empty());
}

fn core_at(reg: &mut Registry<HookCore>, id: Option<SurfaceId>) -> Option<&mut HookCore> {
    reg.get_mut(id?)
}
