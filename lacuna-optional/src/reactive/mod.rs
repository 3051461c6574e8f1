pub use self::container::ReactiveOptional;
pub use self::view::{optional_ref, OptionalRef};

mod container;
mod view;

/// A single observable storage location supplied by a host.
///
/// The reactive adapters in this crate only need three things from a host:
/// create a cell, read it (letting the host track the read) and write it
/// (letting the host notify anyone that depends on it).
pub trait Cell {
    type Item;

    /// Create a cell with initial content.
    fn new(initial: Option<Self::Item>) -> Self
    where
        Self: Sized;

    /// Read the current content.
    fn get(&self) -> Option<&Self::Item>;

    /// Replace the content.
    fn set(&mut self, value: Option<Self::Item>);
}

/// A plain cell without any change tracking.
impl<T> Cell for Option<T> {
    type Item = T;

    fn new(initial: Option<T>) -> Self {
        initial
    }

    fn get(&self) -> Option<&T> {
        self.as_ref()
    }

    fn set(&mut self, value: Option<T>) {
        *self = value;
    }
}
