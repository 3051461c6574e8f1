use std::fmt::{self, Debug};
use std::future::Future;

use crate::{Error, Result};

/// A value that is either present or absent.
///
/// Every operation takes the `Optional` by value and returns a new one, so
/// an `Optional` is never changed in place. Use [`Optional::as_ref`] or
/// `clone()` to derive from a value while keeping it around.
///
/// There is exactly one absent state: `Optional::of(None)` and
/// `Optional::empty()` are the same value, and [`Optional::into_option`]
/// always hands back `None` for it.
///
/// Equality is the equality of `T`. Two present values compare equal when the
/// held values do, two absent values are always equal.
/// ```
/// # use lacuna_optional::*;
/// assert_eq!(Optional::<u8>::of(None), Optional::empty());
/// assert!(Optional::of(Some(0)).is_present());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    /// Wrap a raw value. The result is present iff `raw` is `Some`.
    pub const fn of(raw: Option<T>) -> Self {
        Self(raw)
    }

    /// Same as [`Optional::of`].
    pub const fn of_nullable(raw: Option<T>) -> Self {
        Self::of(raw)
    }

    /// An absent value.
    pub const fn empty() -> Self {
        Self(None)
    }

    /// A present value.
    pub const fn some(value: T) -> Self {
        Self(Some(value))
    }

    pub const fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Apply `f` to a present value.
    /// `f` is not called if the value is absent.
    pub fn map<F, R>(self, f: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        Optional(self.0.map(f))
    }

    /// Apply `f` to a present value where `f` itself may produce nothing.
    /// `f` is not called if the value is absent.
    ///
    /// ```
    /// # use lacuna_optional::*;
    /// struct Address { city: Option<String> }
    ///
    /// let address = Optional::some(Address { city: None });
    /// assert!(address.flat_map(|a| a.city).is_empty());
    /// ```
    pub fn flat_map<F, U>(self, f: F) -> Optional<U::Item>
    where
        F: FnOnce(T) -> U,
        U: IntoOptional,
    {
        match self.0 {
            Some(value) => f(value).into_optional(),
            None => Optional::empty(),
        }
    }

    /// Keep a present value only if `predicate` holds for it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self(self.0.filter(predicate))
    }

    /// Return `self` if present, otherwise the `Optional` produced by `supplier`.
    /// `supplier` is only called when the value is absent.
    pub fn or<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self.0 {
            Some(_) => self,
            None => supplier(),
        }
    }

    /// The present value, or `fallback`.
    pub fn or_else(self, fallback: T) -> T {
        self.0.unwrap_or(fallback)
    }

    /// The present value, or the value produced by `supplier`.
    /// `supplier` is only called when the value is absent.
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.0.unwrap_or_else(supplier)
    }

    /// The present value, or [`Error::NoValuePresent`].
    pub fn or_else_throw(self) -> Result<T> {
        self.0.ok_or(Error::NoValuePresent)
    }

    /// The present value, or the error produced by `error`.
    pub fn or_else_throw_with<F, E>(self, error: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.0.ok_or_else(error)
    }

    /// Same as [`Optional::or_else_throw`].
    pub fn get(self) -> Result<T> {
        self.or_else_throw()
    }

    /// The present value, or the output of the future produced by `supplier`.
    /// See [`or_else_get_async`](crate::or_else_get_async).
    pub async fn or_else_get_async<F, Fut>(self, supplier: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        crate::or_else_get_async(self, supplier).await
    }

    /// Call `consumer` with the value if it's present.
    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.0 {
            consumer(value);
        }
    }

    /// Call `action` with the value if it's present, otherwise call `empty_action`.
    pub fn if_present_or_else<F, E>(&self, action: F, empty_action: E)
    where
        F: FnOnce(&T),
        E: FnOnce(),
    {
        match &self.0 {
            Some(value) => action(value),
            None => empty_action(),
        }
    }

    /// The raw value.
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    pub const fn as_ref(&self) -> Optional<&T> {
        Optional(self.0.as_ref())
    }

    pub fn as_mut(&mut self) -> Optional<&mut T> {
        Optional(self.0.as_mut())
    }
}

impl<T: Clone> Optional<&T> {
    pub fn cloned(self) -> Optional<T> {
        Optional(self.0.cloned())
    }
}

impl<T: Copy> Optional<&T> {
    pub fn copied(self) -> Optional<T> {
        Optional(self.0.copied())
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Debug> Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => f.debug_tuple("Optional::Present").field(value).finish(),
            None => write!(f, "Optional::Absent"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(raw: Option<T>) -> Self {
        Self::of(raw)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.0
    }
}

/// Anything that can be turned into an [`Optional`].
///
/// This is what [`Optional::flat_map`] accepts as the output of its function.
pub trait IntoOptional {
    type Item;

    fn into_optional(self) -> Optional<Self::Item>;
}

impl<T> IntoOptional for Option<T> {
    type Item = T;

    fn into_optional(self) -> Optional<T> {
        Optional::of(self)
    }
}

impl<T> IntoOptional for Optional<T> {
    type Item = T;

    fn into_optional(self) -> Optional<T> {
        self
    }
}
