use std::cell::RefCell;
use std::collections::BTreeMap;

use super::*;

/// Elements by id, each with its class list.
#[derive(Default)]
struct Page {
    classes: RefCell<BTreeMap<String, Vec<String>>>,
}

impl Page {
    fn with(ids: &[&str]) -> Self {
        let page = Self::default();
        for id in ids {
            page.classes.borrow_mut().insert((*id).to_owned(), Vec::new());
        }
        page
    }

    fn classes_of(&self, id: &str) -> Vec<String> {
        self.classes.borrow().get(id).cloned().unwrap_or_default()
    }
}

impl ClassTarget for Page {
    type Element = String;

    fn element_by_id(&self, id: &str) -> Option<String> {
        self.classes.borrow().contains_key(id).then(|| id.to_owned())
    }

    fn add_class(&self, el: &String, class: &str) {
        if let Some(list) = self.classes.borrow_mut().get_mut(el) {
            list.push(class.to_owned());
        }
    }
}

// =============================================================
// TimedEffect
// =============================================================

#[test]
fn timed_effect_runs_idle_active_removed() {
    let mut effect = TimedEffect::new(1000);
    assert_eq!(effect.phase(), Phase::Idle);
    assert_eq!(effect.trigger(), Some(1000));
    assert_eq!(effect.phase(), Phase::Active);
    assert!(effect.expire());
    assert_eq!(effect.phase(), Phase::Removed);
}

#[test]
fn timed_effect_triggers_once() {
    let mut effect = TimedEffect::flash();
    assert_eq!(effect.trigger(), Some(600));
    assert_eq!(effect.trigger(), None);
}

#[test]
fn expire_before_trigger_does_nothing() {
    let mut effect = TimedEffect::room_ripple();
    assert!(!effect.expire());
    assert_eq!(effect.phase(), Phase::Idle);
}

#[test]
fn expire_twice_reports_teardown_once() {
    let mut effect = TimedEffect::room_ripple();
    assert_eq!(effect.dwell_ms(), 1200);
    effect.trigger();
    assert!(effect.expire());
    assert!(!effect.expire());
}

// =============================================================
// ToastTimeline
// =============================================================

#[test]
fn toast_waits_a_frame_then_shows() {
    let mut toast = ToastTimeline::new();
    assert_eq!(toast.pending(), ToastStep::NextFrame);
    assert_eq!(toast.advance(), ToastPhase::Shown);
}

#[test]
fn toast_full_timeline() {
    let mut toast = ToastTimeline::new();
    let mut waits = Vec::new();
    loop {
        let step = toast.pending();
        waits.push(step);
        if step == ToastStep::Done {
            break;
        }
        toast.advance();
    }
    assert_eq!(
        waits,
        vec![ToastStep::NextFrame, ToastStep::After(1500), ToastStep::After(300), ToastStep::Done]
    );
    assert_eq!(toast.phase(), ToastPhase::Removed);
}

#[test]
fn removed_toast_stays_removed() {
    let mut toast = ToastTimeline::new();
    for _ in 0..5 {
        toast.advance();
    }
    assert_eq!(toast.phase(), ToastPhase::Removed);
}

// =============================================================
// Message flash
// =============================================================

#[test]
fn message_ids_are_prefixed() {
    assert_eq!(message_element_id("42"), "message-42");
}

#[test]
fn flash_marks_the_message_for_its_dwell() {
    let page = Page::with(&["message-7"]);
    let (el, mut effect) = start_flash(&page, "7", FeedbackKind::Affirm).expect("flashed");
    assert_eq!(el, "message-7");
    assert_eq!(page.classes_of("message-7"), vec!["flash-affirm".to_owned()]);
    assert_eq!(effect.phase(), Phase::Active);
    assert_eq!(effect.dwell_ms(), FLASH_MS);
    assert!(effect.expire());
}

#[test]
fn flash_for_a_missing_message_touches_nothing() {
    let page = Page::with(&["message-1"]);
    assert!(start_flash(&page, "404", FeedbackKind::Dismiss).is_none());
    assert!(page.classes_of("message-1").is_empty());
    assert!(page.classes_of("message-404").is_empty());
    assert_eq!(page.classes.borrow().len(), 1);
}
