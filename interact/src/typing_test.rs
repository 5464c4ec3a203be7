use super::*;

fn stops(actions: &[Action]) -> usize {
    actions.iter().filter(|a| matches!(a, Action::Send(Command::TypingStop))).count()
}

fn armed_token(actions: &[Action]) -> Option<u64> {
    actions.iter().find_map(|a| match a {
        Action::ArmTypingStop { token, .. } => Some(*token),
        _ => None,
    })
}

#[test]
fn input_starts_typing_and_arms_two_second_stop() {
    let mut t = TypingDebounce::new();
    let actions = t.input();
    assert!(matches!(actions[0], Action::Send(Command::TypingStart)));
    assert!(matches!(actions[1], Action::ArmTypingStop { after_ms: 2000, .. }));
    assert_eq!(t.pending(), armed_token(&actions));
}

#[test]
fn new_input_cancels_and_rearms() {
    let mut t = TypingDebounce::new();
    let first = armed_token(&t.input()).expect("token");
    let actions = t.input();
    assert!(matches!(actions[0], Action::CancelTypingStop));
    let second = armed_token(&actions).expect("token");
    assert_ne!(first, second);
    assert_eq!(t.pending(), Some(second));
}

#[test]
fn stale_timer_is_ignored() {
    let mut t = TypingDebounce::new();
    let first = armed_token(&t.input()).expect("token");
    let second = armed_token(&t.input()).expect("token");
    assert!(t.fire(first).is_empty());
    assert_eq!(stops(&t.fire(second)), 1);
}

#[test]
fn stop_fires_exactly_once_per_idle_gap() {
    let mut t = TypingDebounce::new();
    let mut total = 0;
    for _ in 0..3 {
        let last = (0..4).filter_map(|_| armed_token(&t.input())).last().expect("token");
        total += stops(&t.fire(last));
        total += stops(&t.fire(last));
    }
    assert_eq!(total, 3);
}

#[test]
fn blur_stops_immediately_and_cancels_pending() {
    let mut t = TypingDebounce::new();
    let token = armed_token(&t.input()).expect("token");
    let actions = t.blur();
    assert!(matches!(actions[0], Action::CancelTypingStop));
    assert_eq!(stops(&actions), 1);
    assert!(t.pending().is_none());
    assert!(t.fire(token).is_empty());
}

#[test]
fn blur_without_pending_still_sends_stop() {
    let mut t = TypingDebounce::new();
    let actions = t.blur();
    assert_eq!(actions.len(), 1);
    assert_eq!(stops(&actions), 1);
}
