use super::*;

#[test]
fn fresh_debounce_is_not_armed() {
    let debounce = Debounce::new();
    assert!(!debounce.is_armed());
}

#[test]
fn fire_succeeds_once_for_armed_token() {
    let mut debounce = Debounce::new();
    let token = debounce.restart();
    assert!(debounce.fire(token));
    assert!(!debounce.fire(token));
    assert!(!debounce.is_armed());
}

#[test]
fn restart_invalidates_previous_token() {
    let mut debounce = Debounce::new();
    let first = debounce.restart();
    let second = debounce.restart();
    assert_ne!(first, second);
    assert!(!debounce.fire(first));
    assert!(debounce.fire(second));
}

#[test]
fn cancel_disarms_pending_token() {
    let mut debounce = Debounce::new();
    let token = debounce.restart();
    debounce.cancel();
    assert!(!debounce.is_armed());
    assert!(!debounce.fire(token));
}

#[test]
fn schedule_wraps_kind_token_and_delay() {
    let mut debounce = Debounce::new();
    let timer = debounce.schedule(TimerKind::TypingHide, Duration::from_millis(2000));
    assert_eq!(timer.kind, TimerKind::TypingHide);
    assert_eq!(timer.delay, Duration::from_millis(2000));
    assert!(debounce.fire(timer.token));
}
