//! Element ids and class names shared with the server-rendered markup.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use interact::config::TransitionStyle;
use interact::event::FeedbackKind;

/// Class toggled on overlays once their entry animation should run.
pub const ACTIVE_CLASS: &str = "active";

/// Class toggled on toasts while visible.
pub const SHOW_CLASS: &str = "show";

pub const ROOM_RIPPLE_CLASS: &str = "room-entrance-ripple";

pub const RIPPLE_RING_CLASS: &str = "ripple-ring";

/// Full class list of a node-entry overlay.
#[must_use]
pub fn transition_classes(style: TransitionStyle) -> String {
    format!("node-transition {}", style.class())
}

/// Full class list of a feedback toast.
#[must_use]
pub fn toast_classes(kind: FeedbackKind) -> String {
    let modifier = match kind {
        FeedbackKind::Affirm => "affirm",
        FeedbackKind::Dismiss => "dismiss",
    };
    format!("feedback-toast feedback-toast-{modifier}")
}

/// Whether an element with this tag name captures typing.
#[must_use]
pub fn is_text_field(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea")
}

/// Animation delay for the `index`th ripple ring, staggering the rings.
#[must_use]
pub fn ring_delay(index: usize) -> String {
    format!("{}ms", index * 150)
}
