//! Defines the Row type which makes up lines in the grid.

use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut, Range, RangeFull};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::index::Column;

/// A row in the grid.
#[derive(Default, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row<T> {
    inner: Vec<T>,
}

impl<T: Clone> Row<T> {
    /// Create a new row, with every cell a clone of `template`.
    pub fn new(columns: Column, template: &T) -> Row<T> {
        Row { inner: vec![template.clone(); columns.0] }
    }
}

#[allow(clippy::len_without_is_empty)]
impl<T> Row<T> {
    /// Wrap an existing cell vector as a row.
    #[inline]
    pub fn from_vec(vec: Vec<T>) -> Row<T> {
        Row { inner: vec }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Splice a cell in at `at`, shifting later cells right.
    ///
    /// Crate-private; row widths only change through the grid's column
    /// resizing, which keeps every row the same length.
    #[inline]
    pub(crate) fn insert(&mut self, at: Column, cell: T) {
        self.inner.insert(at.0, cell);
    }

    /// Remove the cell at `at`, shifting later cells left.
    #[inline]
    pub(crate) fn remove(&mut self, at: Column) -> T {
        self.inner.remove(at.0)
    }
}

impl<T: PartialEq> PartialEq for Row<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for Row<T> {}

impl<T: Hash> Hash for Row<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<T> Index<Column> for Row<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: Column) -> &T {
        &self.inner[index.0]
    }
}

impl<T> IndexMut<Column> for Row<T> {
    #[inline]
    fn index_mut(&mut self, index: Column) -> &mut T {
        &mut self.inner[index.0]
    }
}

impl<T> Index<Range<Column>> for Row<T> {
    type Output = [T];

    #[inline]
    fn index(&self, index: Range<Column>) -> &[T] {
        &self.inner[(index.start.0)..(index.end.0)]
    }
}

impl<T> IndexMut<Range<Column>> for Row<T> {
    #[inline]
    fn index_mut(&mut self, index: Range<Column>) -> &mut [T] {
        &mut self.inner[(index.start.0)..(index.end.0)]
    }
}

impl<T> Index<RangeFull> for Row<T> {
    type Output = [T];

    #[inline]
    fn index(&self, _: RangeFull) -> &[T] {
        &self.inner[..]
    }
}

impl<T> IndexMut<RangeFull> for Row<T> {
    #[inline]
    fn index_mut(&mut self, _: RangeFull) -> &mut [T] {
        &mut self.inner[..]
    }
}
