//! # Bounds-Checked Collection
//!
//! A growable array with an explicitly testable contract:
//! * `capacity() >= len()` and `max_size() >= len()` at all times.
//! * `resize` sets the length exactly, growing with default values and
//!   shrinking by discarding the tail while preserving the prefix.
//! * Indexed access through [`Collection::at`] validates the index and
//!   reports [`CollectionError::OutOfRange`] instead of panicking.
//! * [`Collection::swap`] exchanges contents *and* capacities in O(1).
//!
//! Storage delegates to `Vec`; this type only adds the checked surface.

use std::ops::Range;

use crate::fault::CollectionError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of logically present elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements the current storage can hold before reallocating.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Upper bound on the number of elements any storage could ever hold.
    ///
    /// Allocations are capped at `isize::MAX` bytes, so the bound depends
    /// only on the element size.
    pub fn max_size(&self) -> usize {
        match size_of::<T>() {
            0 => usize::MAX,
            elem => isize::MAX as usize / elem,
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Grows the storage so that `capacity() >= min_capacity` afterward.
    ///
    /// Length and existing element values are untouched. Never shrinks.
    pub fn reserve(&mut self, min_capacity: usize) {
        let additional = min_capacity.saturating_sub(self.items.len());
        self.items.reserve(additional);
    }

    /// Drops every element. Capacity is retained.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Removes the elements in `range`, shifting the tail left.
    ///
    /// `erase(0..len)` empties the collection without touching capacity.
    pub fn erase(&mut self, range: Range<usize>) -> Result<(), CollectionError> {
        if range.start > range.end || range.end > self.items.len() {
            return Err(CollectionError::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.items.len(),
            });
        }
        self.items.drain(range);
        Ok(())
    }

    /// Bounds-checked read. Fails exactly when `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, CollectionError> {
        self.items.get(index).ok_or(CollectionError::OutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Bounds-checked write access. Same index contract as [`Self::at`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(CollectionError::OutOfRange { index, len })
    }

    /// Exchanges contents and capacities with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.items, &mut other.items);
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Default> Collection<T> {
    /// Sets the length to exactly `new_len`.
    ///
    /// Growing appends default values; shrinking discards the tail and
    /// leaves the first `new_len` elements unchanged.
    pub fn resize(&mut self, new_len: usize) {
        self.items.resize_with(new_len, T::default);
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
