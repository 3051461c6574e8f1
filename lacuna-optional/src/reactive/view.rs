use std::fmt::{self, Debug};

use super::Cell;
use crate::Optional;

/// Read / write view of a [`Cell`] as an [`Optional`].
///
/// Nothing is cached: every read wraps whatever the cell holds right now, and
/// every write goes straight into the cell.
/// ```
/// # use lacuna_optional::*;
/// let mut cell = Some(1);
/// let mut view = optional_ref(&mut cell);
/// view.set(Optional::empty());
/// assert!(view.get().is_empty());
/// assert_eq!(cell, None);
/// ```
pub struct OptionalRef<'a, C> {
    cell: &'a mut C,
}

impl<'a, C: Cell> OptionalRef<'a, C> {
    pub fn new(cell: &'a mut C) -> Self {
        Self { cell }
    }

    /// Wrap the current content of the cell.
    pub fn get(&self) -> Optional<&C::Item> {
        Optional::of(self.cell.get())
    }

    pub fn get_cloned(&self) -> Optional<C::Item>
    where
        C::Item: Clone,
    {
        self.get().cloned()
    }

    /// Store the raw content of `value` in the cell.
    pub fn set(&mut self, value: Optional<C::Item>) {
        self.cell.set(value.into_option());
    }
}

impl<C> Debug for OptionalRef<'_, C>
where
    C: Cell,
    C::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OptionalRef").field(&self.get()).finish()
    }
}

/// Expose `cell` as an [`Optional`].
pub fn optional_ref<C: Cell>(cell: &mut C) -> OptionalRef<'_, C> {
    OptionalRef::new(cell)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_reflects_cell() {
        let mut cell = Some(String::from("a"));
        let view = optional_ref(&mut cell);
        assert_eq!(view.get_cloned(), Optional::some(String::from("a")));
    }

    #[test]
    fn write_then_read() {
        let mut cell: Option<u32> = None;
        let mut view = optional_ref(&mut cell);

        view.set(Optional::some(42));
        assert_eq!(view.get().copied(), Optional::some(42));

        view.set(Optional::empty());
        assert!(view.get().is_empty());
        assert_eq!(cell, None);
    }

    #[test]
    fn debug() {
        let mut cell = Some(1);
        assert_eq!(format!("{:?}", optional_ref(&mut cell)), "OptionalRef(Optional::Present(1))");
    }
}
