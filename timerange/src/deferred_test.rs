use super::*;

#[test]
fn fire_with_latest_ticket_yields_value_once() {
    let mut deferred = Deferred::new();
    let ticket = deferred.schedule("reset");
    assert!(deferred.is_pending());
    assert_eq!(deferred.fire(ticket), Some("reset"));
    assert_eq!(deferred.fire(ticket), None);
    assert!(!deferred.is_pending());
}

#[test]
fn reschedule_makes_older_ticket_stale() {
    let mut deferred = Deferred::new();
    let first = deferred.schedule(1);
    let second = deferred.schedule(2);
    assert_ne!(first, second);
    assert_eq!(deferred.fire(first), None);
    assert!(deferred.is_pending());
    assert_eq!(deferred.fire(second), Some(2));
}

#[test]
fn cancel_drops_pending_value() {
    let mut deferred = Deferred::new();
    let ticket = deferred.schedule(());
    assert!(deferred.cancel());
    assert!(!deferred.cancel());
    assert_eq!(deferred.fire(ticket), None);
}

#[test]
fn tickets_stay_unique_after_cancel() {
    let mut deferred = Deferred::new();
    let first = deferred.schedule('a');
    deferred.cancel();
    let second = deferred.schedule('b');
    assert!(second.id() > first.id());
    assert_eq!(deferred.pending_ticket(), Some(second));
}

#[test]
fn default_has_nothing_pending() {
    let deferred: Deferred<u8> = Deferred::default();
    assert!(!deferred.is_pending());
    assert_eq!(deferred.pending_ticket(), None);
}
