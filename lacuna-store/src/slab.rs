#![deny(missing_docs)]
//! A slab keeps fixed keys, unlike a vector.
//! Inserting a value into a slab returns the key of the value.
//! Removing a value leaves a vacant slot behind that is reused by the next
//! insertion, so the key of every other value stays the same.
//!
//! Every reuse of a slot bumps its generation. A key from before the removal
//! no longer matches the slot and can not reach the new value.
use std::fmt::{self, Debug};

/// A generation associated with a key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Gen(u16);

impl Gen {
    /// The generation of a slot that was never reused
    pub const ZERO: Self = Self(0);

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl From<u16> for Gen {
    fn from(val: u16) -> Self {
        Self(val)
    }
}

/// A key is a combination of an index and a generation.
/// To access a value using a key the value at the given index
/// has to have a matching generation.
///
/// Bits 0..48: 48-bit index
/// Bits 48..64 are the 16-bit generation
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Key(u64);

impl Key {
    const GEN_BITS: u32 = 16;
    const INDEX_BITS: u32 = 48;
    const INDEX_MASK: u64 = u64::MAX >> Self::GEN_BITS;
    /// The largest index a key can hold
    pub const MAX_INDEX: usize = Self::INDEX_MASK as usize;

    /// Create a new instance of a key
    pub const fn new(index: usize, generation: Gen) -> Self {
        Self(((generation.0 as u64) << Self::INDEX_BITS) | (index as u64 & Self::INDEX_MASK))
    }

    /// The index of the slot
    pub const fn index(&self) -> usize {
        (self.0 & Self::INDEX_MASK) as usize
    }

    /// Get the key generation
    pub const fn generation(&self) -> Gen {
        Gen((self.0 >> Self::INDEX_BITS) as u16)
    }

    fn bump(self) -> Self {
        Self::new(self.index(), self.generation().next())
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key <{}:{}>", self.index(), self.generation().0)
    }
}

// -----------------------------------------------------------------------------
//   - Entry -
// -----------------------------------------------------------------------------
#[derive(Debug, PartialEq, Clone)]
enum Entry<T> {
    // Vacant entries form a linked list of free slots.
    // The key carries the generation the slot gets once it's reused.
    Vacant(Option<Key>),
    Occupied(T, Gen),
}

impl<T> Entry<T> {
    fn as_occupied(&self, generation: Gen) -> Option<&T> {
        match self {
            Self::Occupied(value, current) if *current == generation => Some(value),
            _ => None,
        }
    }

    fn as_occupied_mut(&mut self, generation: Gen) -> Option<&mut T> {
        match self {
            Self::Occupied(value, current) if *current == generation => Some(value),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
//   - Slab -
// -----------------------------------------------------------------------------
/// A generational slab
#[derive(Debug, Clone, PartialEq)]
pub struct Slab<T> {
    next_id: Option<Key>,
    inner: Vec<Entry<T>>,
}

impl<T> Default for Slab<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Slab<T> {
    /// Create an empty slab
    pub const fn empty() -> Self {
        Self {
            next_id: None,
            inner: vec![],
        }
    }

    /// Insert a value into the slab, returning the key
    ///
    /// # Panics
    ///
    /// Panics if the slab would grow beyond `Key::MAX_INDEX` entries
    pub fn insert(&mut self, value: T) -> Key {
        match self.next_id.take() {
            Some(key) => {
                let entry = &mut self.inner[key.index()];

                let Entry::Vacant(next_id) = entry else {
                    unreachable!("the free list only ever points to vacant entries")
                };

                self.next_id = next_id.take();
                *entry = Entry::Occupied(value, key.generation());
                key
            }
            None => {
                let index = self.inner.len();
                assert!(index < Key::MAX_INDEX, "slab is full");
                self.inner.push(Entry::Occupied(value, Gen::ZERO));
                Key::new(index, Gen::ZERO)
            }
        }
    }

    /// Remove a value from the slab if the key is still current.
    pub fn try_remove(&mut self, key: Key) -> Option<T> {
        let slot = self.inner.get_mut(key.index())?;
        slot.as_occupied(key.generation())?;

        let entry = std::mem::replace(slot, Entry::Vacant(self.next_id.take()));
        self.next_id = Some(key.bump());

        match entry {
            Entry::Occupied(value, _) => Some(value),
            Entry::Vacant(_) => unreachable!("the entry was checked to be occupied"),
        }
    }

    /// Get a reference to a value
    pub fn get(&self, key: Key) -> Option<&T> {
        self.inner.get(key.index())?.as_occupied(key.generation())
    }

    /// Get a mutable reference to a value
    pub fn get_mut(&mut self, key: Key) -> Option<&mut T> {
        self.inner.get_mut(key.index())?.as_occupied_mut(key.generation())
    }

    /// Number of occupied entries
    pub fn count(&self) -> usize {
        self.iter_values().count()
    }

    /// Iterate over all occupied values
    pub fn iter_values(&self) -> impl Iterator<Item = &T> + '_ {
        self.inner.iter().filter_map(|entry| match entry {
            Entry::Occupied(value, _) => Some(value),
            Entry::Vacant(_) => None,
        })
    }

    /// Iterate over all occupied values along with their key
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Key, &mut T)> + '_ {
        self.inner.iter_mut().enumerate().filter_map(|(i, entry)| match entry {
            Entry::Occupied(value, generation) => Some((Key::new(i, *generation), value)),
            Entry::Vacant(_) => None,
        })
    }
}
