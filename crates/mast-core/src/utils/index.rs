// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Typed Indices
//!
//! `TypedIndex<T>` wraps a `usize` position and carries a zero-sized tag type
//! so that transmitter positions and receiver positions cannot be confused.
//! The tag supplies a `NAME` used by `Debug` and `Display`.
//!
//! ```rust
//! use mast_core::utils::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct TowerTag;
//! impl TypedIndexTag for TowerTag { const NAME: &'static str = "TowerIndex"; }
//!
//! type TowerIndex = TypedIndex<TowerTag>;
//! let tower = TowerIndex::new(3);
//! assert_eq!(tower.get(), 3);
//! assert_eq!(format!("{}", tower), "TowerIndex(3)");
//!
//! let all: Vec<_> = TowerIndex::range(2).collect();
//! assert_eq!(all, vec![TowerIndex::new(0), TowerIndex::new(1)]);
//! ```

/// Names an index space.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// An index into the collection identified by the tag `T`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the raw position.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Returns an iterator over the indices `0..len` of this index space.
    #[inline]
    pub fn range(len: usize) -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..len).map(Self::new)
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    fn from(typed_index: TypedIndex<T>) -> Self {
        typed_index.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct AntennaTag;

    impl TypedIndexTag for AntennaTag {
        const NAME: &'static str = "AntennaIdx";
    }

    type AntennaIndex = TypedIndex<AntennaTag>;

    #[test]
    fn test_new_and_get() {
        assert_eq!(AntennaIndex::new(10).get(), 10);
    }

    #[test]
    fn test_conversions() {
        let idx: AntennaIndex = 42.into();
        assert_eq!(idx.get(), 42);
        let raw: usize = idx.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_debug_and_display_use_tag_name() {
        let idx = AntennaIndex::new(7);
        assert_eq!(format!("{}", idx), "AntennaIdx(7)");
        assert_eq!(format!("{:?}", idx), "AntennaIdx(7)");
    }

    #[test]
    fn test_range_is_ordered_and_sized() {
        let range = AntennaIndex::range(3);
        assert_eq!(range.len(), 3);
        let collected: Vec<usize> = range.map(|i| i.get()).collect();
        assert_eq!(collected, vec![0, 1, 2]);
        assert_eq!(AntennaIndex::range(0).count(), 0);
    }

    #[test]
    fn test_ordering_follows_position() {
        assert!(AntennaIndex::new(1) < AntennaIndex::new(2));
    }
}
