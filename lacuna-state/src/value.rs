use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use crate::store::{changed, new_key, observed, remove_key, subscribe, subscribers, unsubscribe};
use crate::{Change, SubKey, Subscriber, Subscribers};

/// A value that reacts to change.
///
/// Reading the value through [`Value::to_ref`] inside [`track`](crate::track)
/// subscribes the tracking subscriber. Mutating it through [`Value::to_mut`]
/// or [`Value::set`] records a [`Change`] for every subscriber.
/// ```
/// # use lacuna_state::*;
/// let mut value = Value::<usize>::new(1);
/// *value.to_mut() += 1;
/// assert_eq!(*value.to_ref(), 2);
/// ```
pub struct Value<T> {
    inner: T,
    key: SubKey,
    // Ensure that `Value` is not Send or Sync.
    // The subscribers live in TLS, moving a value to another thread
    // would detach it from them.
    _p: PhantomData<*const ()>,
}

impl<T: Default> Default for Value<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Value::new(value)
    }
}

impl<T> Value<T> {
    /// Create a new instance of a `Value`.
    pub fn new(value: T) -> Self {
        let key = new_key();
        Self {
            inner: value,
            key,
            _p: PhantomData,
        }
    }

    /// Shared access to the value.
    /// This is a tracked read.
    pub fn to_ref(&self) -> &T {
        observed(self.key);
        &self.inner
    }

    /// Unique access to the value.
    /// A change is recorded once the `Unique` is dropped, if it was
    /// mutably dereferenced.
    pub fn to_mut(&mut self) -> Unique<'_, T> {
        Unique {
            value: &mut self.inner,
            key: self.key,
            changed: false,
        }
    }

    /// Convenience function for reassigning a value.
    pub fn set(&mut self, new_value: T) {
        *self.to_mut() = new_value;
    }

    /// Subscribe to changes until the returned `Subscription` is dropped.
    #[must_use]
    pub fn subscribe(&self, subscriber: Subscriber) -> Subscription {
        subscribe(self.key, subscriber);
        Subscription {
            key: self.key,
            subscriber,
        }
    }

    /// The current subscribers.
    /// Useful for debugging.
    pub fn subscribers(&self) -> Subscribers {
        subscribers(self.key)
    }
}

impl<T: Debug> Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("inner", &self.inner)
            .field("key", &self.key)
            .finish()
    }
}

impl<T> Drop for Value<T> {
    fn drop(&mut self) {
        log::trace!("dropping value {:?}", self.key);
        changed(self.key, Change::Dropped);
        remove_key(self.key);
    }
}

/// Unique access to the underlying value.
/// This is the primary means to mutate the value.
pub struct Unique<'a, T> {
    value: &'a mut T,
    key: SubKey,
    changed: bool,
}

impl<T> Deref for Unique<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value
    }
}

impl<T> DerefMut for Unique<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.changed = true;
        self.value
    }
}

impl<T> Drop for Unique<'_, T> {
    fn drop(&mut self) {
        if self.changed {
            changed(self.key, Change::Changed);
        }
    }
}

/// A subscription to a value.
/// Unsubscribes when dropped.
#[derive(Debug, PartialEq)]
pub struct Subscription {
    key: SubKey,
    subscriber: Subscriber,
}

impl Subscription {
    pub fn subscriber(&self) -> Subscriber {
        self.subscriber
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        unsubscribe(self.key, self.subscriber);
    }
}
