use std::cell::RefCell;

use lacuna_store::stack::Stack;

pub(crate) use self::change::changed;
pub use self::change::{clear_all_changes, drain_changes, Change, Changes};
pub(crate) use self::subscriber::{new_key, remove_key, subscribe, subscribers, unsubscribe};
pub use self::subscriber::{SubKey, Subscriber, Subscribers};
use self::subscriber::SubscriberMap;

mod change;
mod subscriber;

thread_local! {
    static SUBSCRIBERS: RefCell<SubscriberMap> = const { RefCell::new(SubscriberMap::empty()) };
    static CHANGES: RefCell<Changes> = const { RefCell::new(Stack::empty()) };
    static TRACKING: RefCell<Stack<Subscriber>> = const { RefCell::new(Stack::empty()) };
}

/// Run `f` and subscribe `subscriber` to every value read inside it.
///
/// Calls can nest, in which case only the innermost subscriber is
/// subscribed.
///
/// Subscriptions made here are not owned by anything. They stay until the
/// value is dropped or [`clear_all_subs`] is called, so a subscriber that
/// stops reading a value keeps receiving its changes. Use
/// [`Value::subscribe`](crate::Value::subscribe) for a subscription that ends
/// when its `Subscription` is dropped.
/// ```
/// # use lacuna_state::*;
/// let mut value = Value::new(1);
/// let doubled = track(Subscriber::ZERO, || *value.to_ref() * 2);
/// assert_eq!(doubled, 2);
///
/// value.set(2);
/// let mut changes = Changes::empty();
/// drain_changes(&mut changes);
/// assert_eq!(changes.len(), 1);
/// ```
pub fn track<F, U>(subscriber: Subscriber, f: F) -> U
where
    F: FnOnce() -> U,
{
    struct Guard;

    impl Drop for Guard {
        fn drop(&mut self) {
            TRACKING.with_borrow_mut(|tracking| tracking.pop());
        }
    }

    TRACKING.with_borrow_mut(|tracking| tracking.push(subscriber));
    let _guard = Guard;
    f()
}

// Subscribe the active tracker, if any, to the value at `key`.
pub(crate) fn observed(key: SubKey) {
    let Some(subscriber) = TRACKING.with_borrow(|tracking| tracking.iter().next_back().copied()) else {
        return;
    };
    subscribe(key, subscriber);
}

/// Remove all subscribers from values.
///
/// This keeps the values intact and leaves them with
/// empty subscribers.
pub fn clear_all_subs() {
    SUBSCRIBERS.with_borrow_mut(|subs| subs.clear_subscribers());
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::{Change, Subscriber};

    pub fn drain_changes() -> Vec<(Vec<Subscriber>, Change)> {
        super::CHANGES.with_borrow_mut(|changes| {
            let mut ret = changes
                .drain()
                .map(|(subscribers, change)| (subscribers.iter().collect(), change))
                .collect::<Vec<_>>();
            ret.reverse();
            ret
        })
    }

    pub fn count_subs() -> usize {
        super::SUBSCRIBERS.with_borrow(|subs| subs.count())
    }
}
