use super::*;

fn down(key: &str) -> KeyInput<'_> {
    KeyInput::plain(key)
}

fn typing(key: &str) -> KeyInput<'_> {
    KeyInput { in_text_field: true, ..KeyInput::plain(key) }
}

fn chord(key: &str, modifiers: Modifiers) -> KeyInput<'_> {
    KeyInput { modifiers, ..KeyInput::plain(key) }
}

// =============================================================
// Centering
// =============================================================

#[test]
fn space_centers() {
    assert_eq!(route(down(" "), &HookConfig::default()), Some(KeyCommand::Center));
    assert_eq!(route(down("Spacebar"), &HookConfig::default()), Some(KeyCommand::Center));
}

#[test]
fn c_centers_in_either_case_when_enabled() {
    let config = HookConfig::default();
    assert_eq!(route(down("c"), &config), Some(KeyCommand::Center));
    assert_eq!(route(down("C"), &config), Some(KeyCommand::Center));
}

#[test]
fn c_is_not_ours_when_disabled() {
    let config = HookConfig { center_on_c: false, ..HookConfig::default() };
    assert_eq!(route(down("c"), &config), None);
}

// =============================================================
// Panel keys
// =============================================================

#[test]
fn panel_keys_route_when_enabled() {
    let config = HookConfig::default();
    assert_eq!(route(down("n"), &config), Some(KeyCommand::Panel(PanelKey::Open)));
    assert_eq!(route(down("N"), &config), Some(KeyCommand::Panel(PanelKey::Open)));
    assert_eq!(route(down("Escape"), &config), Some(KeyCommand::Panel(PanelKey::Close)));
    assert_eq!(route(down("Enter"), &config), Some(KeyCommand::Panel(PanelKey::Confirm)));
}

#[test]
fn panel_keys_ignored_while_typing() {
    let config = HookConfig::default();
    assert_eq!(route(typing("n"), &config), None);
    assert_eq!(route(typing("Escape"), &config), None);
    assert_eq!(route(typing("Enter"), &config), None);
}

#[test]
fn nothing_routes_while_typing() {
    let config = HookConfig::default();
    for key in [" ", "c", "C", "w", "a", "s", "d", "ArrowLeft", "ArrowUp"] {
        assert_eq!(route(typing(key), &config), None, "{key:?}");
    }
}

#[test]
fn shortcut_chords_are_left_to_the_browser() {
    let config = HookConfig::default();
    let ctrl = Modifiers { ctrl: true, ..Modifiers::default() };
    let meta = Modifiers { meta: true, ..Modifiers::default() };
    let alt = Modifiers { alt: true, ..Modifiers::default() };
    assert_eq!(route(chord("c", ctrl), &config), None);
    assert_eq!(route(chord("c", meta), &config), None);
    assert_eq!(route(chord("a", ctrl), &config), None);
    assert_eq!(route(chord("n", alt), &config), None);
    assert_eq!(route(chord(" ", meta), &config), None);
}

#[test]
fn shift_alone_does_not_block_routing() {
    let shift = Modifiers { shift: true, ..Modifiers::default() };
    assert!(!shift.is_chord());
    assert_eq!(route(chord("W", shift), &HookConfig::default()), Some(KeyCommand::Move(MoveKey::W)));
}

#[test]
fn panel_keys_fall_through_when_disabled() {
    let config = HookConfig { panel_keys: false, ..HookConfig::default() };
    assert_eq!(route(down("n"), &config), None);
    assert_eq!(route(down("Enter"), &config), None);
}

// =============================================================
// Movement keys
// =============================================================

#[test]
fn wasd_and_arrows_route_to_movement() {
    let config = HookConfig::default();
    assert_eq!(route(down("w"), &config), Some(KeyCommand::Move(MoveKey::W)));
    assert_eq!(route(down("D"), &config), Some(KeyCommand::Move(MoveKey::D)));
    assert_eq!(route(down("ArrowLeft"), &config), Some(KeyCommand::Move(MoveKey::ArrowLeft)));
    assert_eq!(route(down("ArrowDown"), &config), Some(KeyCommand::Move(MoveKey::ArrowDown)));
}

#[test]
fn unrelated_keys_are_not_routed() {
    let config = HookConfig::default();
    for key in ["x", "Tab", "Shift", "1", "F5"] {
        assert_eq!(route(down(key), &config), None, "{key}");
    }
}

#[test]
fn opposite_keys_have_opposite_axes() {
    assert_eq!(MoveKey::W.axis(), MoveKey::ArrowUp.axis());
    let (ux, uy) = MoveKey::W.axis();
    let (dx, dy) = MoveKey::S.axis();
    assert_eq!((ux + dx, uy + dy), (0, 0));
    let (lx, ly) = MoveKey::A.axis();
    let (rx, ry) = MoveKey::ArrowRight.axis();
    assert_eq!((lx + rx, ly + ry), (0, 0));
}
