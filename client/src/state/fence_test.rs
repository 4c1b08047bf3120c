use super::*;

#[test]
fn latest_token_is_current() {
    let mut fence = RequestFence::default();
    let token = fence.begin();
    assert!(fence.is_current(token));
}

#[test]
fn newer_request_supersedes_older() {
    let mut fence = RequestFence::default();
    let first = fence.begin();
    let second = fence.begin();
    assert!(!fence.is_current(first));
    assert!(fence.is_current(second));
}

#[test]
fn invalidate_drops_outstanding_token() {
    let mut fence = RequestFence::default();
    let token = fence.begin();
    fence.invalidate();
    assert!(!fence.is_current(token));
}
