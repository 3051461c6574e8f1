use lacuna_store::slab::{Key, Slab};

use super::SUBSCRIBERS;

// The key associated with the value that is being subscribed to.
// Keys are generational: once a value is dropped its key never matches
// the subscribers of a later value, even if the slot is reused.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SubKey(Key);

/// Something with an interest in a value, e.g a widget or a view that has to
/// be redrawn when the value changes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Subscriber(u32);

impl Subscriber {
    pub const MAX: Self = Self(u32::MAX);
    pub const ONE: Self = Self(1);
    pub const ZERO: Self = Self(0);
}

impl From<u32> for Subscriber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Subscriber> for u32 {
    fn from(Subscriber(value): Subscriber) -> Self {
        value
    }
}

/// Contains zero, one or more subscribers associated with a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Subscribers {
    Empty,
    One(Subscriber),
    Heap(Vec<Subscriber>),
}

impl Subscribers {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn contains(&self, sub: Subscriber) -> bool {
        self.iter().any(|s| s == sub)
    }

    // Insert a new subscriber.
    // A subscriber is only stored once, no matter how many times the
    // value is read while it's tracking.
    fn insert(&mut self, sub: Subscriber) {
        if self.contains(sub) {
            return;
        }

        match self {
            Self::Empty => *self = Self::One(sub),
            Self::One(key) => *self = Self::Heap(vec![*key, sub]),
            Self::Heap(keys) => keys.push(sub),
        }
    }

    // Remove a subscriber.
    // Once the last subscriber is removed this becomes `Self::Empty`.
    fn remove(&mut self, sub: Subscriber) {
        match self {
            Self::Empty => (),
            Self::One(key) if sub == *key => *self = Self::Empty,
            Self::One(_) => (),
            Self::Heap(keys) => {
                keys.retain(|k| *k != sub);
                match keys.as_slice() {
                    [] => *self = Self::Empty,
                    [key] => *self = Self::One(*key),
                    _ => (),
                }
            }
        }
    }

    /// Produce an iterator over the subscribers
    pub fn iter(&self) -> impl Iterator<Item = Subscriber> + '_ {
        let slice = match self {
            Self::Empty => &[][..],
            Self::One(sub) => std::slice::from_ref(sub),
            Self::Heap(subs) => subs.as_slice(),
        };
        slice.iter().copied()
    }

    fn clear(&mut self) {
        *self = Self::Empty;
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Heap(subs) => subs.len(),
        }
    }
}

pub(super) struct SubscriberMap {
    inner: Slab<Subscribers>,
}

impl SubscriberMap {
    pub(super) const fn empty() -> Self {
        Self { inner: Slab::empty() }
    }

    pub(super) fn get(&self, key: SubKey) -> Subscribers {
        self.inner.get(key.0).cloned().unwrap_or(Subscribers::Empty)
    }

    pub(super) fn push_empty(&mut self) -> SubKey {
        SubKey(self.inner.insert(Subscribers::Empty))
    }

    pub(super) fn remove(&mut self, key: SubKey) -> Option<Subscribers> {
        self.inner.try_remove(key.0)
    }

    pub(super) fn subscribe(&mut self, key: SubKey, subscriber: Subscriber) {
        if let Some(subs) = self.inner.get_mut(key.0) {
            subs.insert(subscriber);
        }
    }

    pub(super) fn unsubscribe(&mut self, key: SubKey, subscriber: Subscriber) {
        if let Some(subs) = self.inner.get_mut(key.0) {
            subs.remove(subscriber);
        }
    }

    // Remove every subscriber but keep the entry as it is owned by a value.
    pub(super) fn clear_subscribers(&mut self) {
        for (_, subs) in self.inner.iter_mut() {
            subs.clear();
        }
    }

    #[cfg(test)]
    pub(super) fn count(&self) -> usize {
        self.inner.iter_values().map(Subscribers::len).sum()
    }
}

// Reserve an empty set of subscribers for a new value.
pub(crate) fn new_key() -> SubKey {
    SUBSCRIBERS.with_borrow_mut(|subs| subs.push_empty())
}

// Remove the subscribers of a value that is going away.
pub(crate) fn remove_key(key: SubKey) {
    let _ = SUBSCRIBERS.with_borrow_mut(|subs| subs.remove(key));
}

pub(crate) fn subscribers(key: SubKey) -> Subscribers {
    SUBSCRIBERS.with_borrow(|subs| subs.get(key))
}

// Subscribe to a key
pub(crate) fn subscribe(sub_key: SubKey, subscriber: Subscriber) {
    log::trace!("subscribed to sub key {sub_key:?} | subscriber: {subscriber:?}");
    SUBSCRIBERS.with_borrow_mut(|subs| subs.subscribe(sub_key, subscriber));
}

// Unsubscribe from a key
pub(crate) fn unsubscribe(sub_key: SubKey, subscriber: Subscriber) {
    log::trace!("unsubscribed with sub key {sub_key:?} | subscriber {subscriber:?}");
    SUBSCRIBERS.with_borrow_mut(|subs| subs.unsubscribe(sub_key, subscriber));
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn transition_from_empty_to_heap_and_back_to_empty() {
        let mut subs = SubscriberMap::empty();
        let key = subs.push_empty();

        let keys = [Subscriber::ZERO, Subscriber::ONE, Subscriber::MAX];

        for s in &keys {
            subs.subscribe(key, *s);
        }
        assert_eq!(subs.get(key), Subscribers::Heap(keys.to_vec()));

        subs.unsubscribe(key, Subscriber::ZERO);
        subs.unsubscribe(key, Subscriber::MAX);
        assert_eq!(subs.get(key), Subscribers::One(Subscriber::ONE));

        subs.unsubscribe(key, Subscriber::ONE);
        assert_eq!(subs.get(key), Subscribers::Empty);
    }

    #[test]
    fn subscribe_once() {
        let mut subs = SubscriberMap::empty();
        let key = subs.push_empty();
        subs.subscribe(key, Subscriber::ONE);
        subs.subscribe(key, Subscriber::ONE);
        assert_eq!(subs.count(), 1);
    }

    #[test]
    fn clear_keeps_entries() {
        let mut subs = SubscriberMap::empty();
        let key = subs.push_empty();
        subs.subscribe(key, Subscriber::ONE);
        subs.clear_subscribers();

        assert_eq!(subs.count(), 0);
        subs.subscribe(key, Subscriber::ZERO);
        assert_eq!(subs.get(key), Subscribers::One(Subscriber::ZERO));
    }

    #[test]
    fn removed_key_has_no_subscribers() {
        let mut subs = SubscriberMap::empty();
        let key = subs.push_empty();
        subs.subscribe(key, Subscriber::ONE);
        assert!(subs.remove(key).is_some());

        subs.subscribe(key, Subscriber::ONE);
        assert!(subs.get(key).is_empty());
    }

    #[test]
    fn stale_key_does_not_touch_reused_slot() {
        let mut subs = SubscriberMap::empty();
        let stale = subs.push_empty();
        subs.subscribe(stale, Subscriber::ONE);
        subs.remove(stale);

        let current = subs.push_empty();
        subs.subscribe(current, Subscriber::ONE);

        subs.unsubscribe(stale, Subscriber::ONE);
        subs.subscribe(stale, Subscriber::ZERO);
        assert!(subs.get(stale).is_empty());
        assert_eq!(subs.get(current), Subscribers::One(Subscriber::ONE));
    }
}
