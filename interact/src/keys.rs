//! Keyboard classification and priority routing.
//!
//! Keys are matched case-insensitively against the browser's `KeyboardEvent.key`
//! value. Only the first matching rule fires for a keystroke: centering, then
//! panel keys, then movement keys. Nothing routes while focus is in a text
//! field or while Ctrl, Alt or Meta is held, so typing and browser shortcuts
//! keep their defaults.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

use crate::config::HookConfig;

/// A movement key. WASD and arrow keys are tracked separately so releasing
/// one does not stop motion still held on the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoveKey {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl MoveKey {
    /// Parse a lowercased key name.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "w" => Some(Self::W),
            "a" => Some(Self::A),
            "s" => Some(Self::S),
            "d" => Some(Self::D),
            "arrowup" => Some(Self::ArrowUp),
            "arrowdown" => Some(Self::ArrowDown),
            "arrowleft" => Some(Self::ArrowLeft),
            "arrowright" => Some(Self::ArrowRight),
            _ => None,
        }
    }

    /// Unit contribution of this key as `(x, y)`, screen-down positive.
    #[must_use]
    pub fn axis(self) -> (i8, i8) {
        match self {
            Self::W | Self::ArrowUp => (0, -1),
            Self::S | Self::ArrowDown => (0, 1),
            Self::A | Self::ArrowLeft => (-1, 0),
            Self::D | Self::ArrowRight => (1, 0),
        }
    }
}

/// Create-panel and selection keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKey {
    /// `n`: open the node creation panel.
    Open,
    /// `escape`: close the panel and drop the selection.
    Close,
    /// `enter`: enter the selected node.
    Confirm,
}

/// What a keystroke means once routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Center,
    Panel(PanelKey),
    Move(MoveKey),
}

/// Modifier keys held during a key event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Meta / Command key.
    pub meta: bool,
}

impl Modifiers {
    /// A shortcut chord is being typed. Shift alone is not one.
    #[must_use]
    pub fn is_chord(self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// A key-down as seen by the router.
#[derive(Debug, Clone, Copy)]
pub struct KeyInput<'a> {
    /// `KeyboardEvent.key`, any case.
    pub key: &'a str,
    /// Focus is inside an `<input>` or `<textarea>`.
    pub in_text_field: bool,
    pub modifiers: Modifiers,
}

impl<'a> KeyInput<'a> {
    /// An unmodified key-down with focus outside any text field.
    #[must_use]
    pub fn plain(key: &'a str) -> Self {
        Self { key, in_text_field: false, modifiers: Modifiers::default() }
    }
}

/// Lowercase a browser key name for matching.
#[must_use]
pub fn normalize(key: &str) -> String {
    match key {
        "Spacebar" => " ".to_owned(),
        other => other.to_lowercase(),
    }
}

/// Route a key-down by priority. `None` means the key is not ours and the
/// browser default must be left alone.
#[must_use]
pub fn route(input: KeyInput<'_>, config: &HookConfig) -> Option<KeyCommand> {
    if input.in_text_field || input.modifiers.is_chord() {
        return None;
    }
    let key = normalize(input.key);

    if key == " " || (config.center_on_c && key == "c") {
        return Some(KeyCommand::Center);
    }

    if config.panel_keys {
        let panel = match key.as_str() {
            "n" => Some(PanelKey::Open),
            "escape" => Some(PanelKey::Close),
            "enter" => Some(PanelKey::Confirm),
            _ => None,
        };
        if let Some(panel) = panel {
            return Some(KeyCommand::Panel(panel));
        }
    }

    MoveKey::parse(&key).map(KeyCommand::Move)
}
