use lacuna_store::stack::Stack;

use super::subscriber::{SubKey, Subscribers};
use super::{CHANGES, SUBSCRIBERS};

pub type Changes = Stack<(Subscribers, Change)>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Change {
    Changed,
    Dropped,
}

/// Move all pending changes, along with the subscribers that should be
/// notified, into `local_changes`.
pub fn drain_changes(local_changes: &mut Changes) {
    CHANGES.with_borrow_mut(|changes| changes.drain_into(local_changes));
}

/// Discard all pending changes.
pub fn clear_all_changes() {
    CHANGES.with_borrow_mut(|changes| changes.clear());
}

// Record a change for everyone subscribed to `subkey`.
// Nothing is recorded if there are no subscribers.
pub(crate) fn changed(subkey: SubKey, change: Change) {
    let subscribers = SUBSCRIBERS.with_borrow(|subs| subs.get(subkey));
    if subscribers.is_empty() {
        return;
    }
    CHANGES.with_borrow_mut(|changes| changes.push((subscribers, change)));
}
