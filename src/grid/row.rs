//! Defines the Row type which makes up the lines of the grid.

use std::iter;
use std::ops::{Index, IndexMut};
use std::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::index::Column;

/// A single row in the grid.
///
/// Each slot holds `Option<T>`, with `None` marking a slot that has
/// never been set. Rows own their storage independently, so two rows of
/// the same grid may differ in length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row<T> {
    inner: Vec<Option<T>>,
}

impl<T> Row<T> {
    /// Create a row of `columns` absent slots.
    pub fn new(columns: Column) -> Row<T> {
        Row { inner: iter::repeat_with(|| None).take(columns.0).collect() }
    }

    /// Wrap an existing slot sequence into a row.
    #[inline]
    pub fn from_vec(vec: Vec<Option<T>>) -> Row<T> {
        Row { inner: vec }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a Row<T> {
    type IntoIter = slice::Iter<'a, Option<T>>;
    type Item = &'a Option<T>;

    #[inline]
    fn into_iter(self) -> slice::Iter<'a, Option<T>> {
        self.inner.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Row<T> {
    type IntoIter = slice::IterMut<'a, Option<T>>;
    type Item = &'a mut Option<T>;

    #[inline]
    fn into_iter(self) -> slice::IterMut<'a, Option<T>> {
        self.inner.iter_mut()
    }
}

impl<T> Index<Column> for Row<T> {
    type Output = Option<T>;

    #[inline]
    fn index(&self, column: Column) -> &Option<T> {
        &self.inner[column.0]
    }
}

impl<T> IndexMut<Column> for Row<T> {
    #[inline]
    fn index_mut(&mut self, column: Column) -> &mut Option<T> {
        &mut self.inner[column.0]
    }
}
