// Copyright 2019 The array2d Project Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the Row type which makes up the lines of a grid.

use std::ops::{Index, IndexMut, Range, RangeFrom, RangeFull, RangeTo};
use std::{slice, vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A row in the grid.
#[derive(Default, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Row<T> {
    inner: Vec<T>,
}

impl<T: Clone> Row<T> {
    /// Create a new row of `columns` copies of `template`.
    pub fn new(columns: usize, template: &T) -> Row<T> {
        Row { inner: vec![template.clone(); columns] }
    }

    /// Increase the number of columns in the row, padding with `template`.
    #[inline]
    pub(crate) fn grow(&mut self, columns: usize, template: &T) {
        if self.inner.len() >= columns {
            return;
        }

        self.inner.resize(columns, template.clone());
    }

    /// Overwrite every cell in `range` with `template`.
    pub(crate) fn reset(&mut self, range: Range<usize>, template: &T) {
        for item in &mut self.inner[range] {
            *item = template.clone();
        }
    }
}

#[allow(clippy::len_without_is_empty)]
impl<T> Row<T> {
    #[inline]
    pub fn from_vec(vec: Vec<T>) -> Row<T> {
        Row { inner: vec }
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.inner.get_mut(index)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.inner.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.inner.iter_mut()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Reduce the number of columns in the row.
    ///
    /// This will return all cells that were removed.
    pub(crate) fn shrink(&mut self, columns: usize) -> Option<Vec<T>> {
        if self.inner.len() <= columns {
            return None;
        }

        Some(self.inner.split_off(columns))
    }

    #[inline]
    pub(crate) fn insert(&mut self, index: usize, item: T) {
        self.inner.insert(index, item);
    }

    #[inline]
    pub(crate) fn remove(&mut self, index: usize) -> T {
        self.inner.remove(index)
    }

    /// Remove the cells in `range`, dropping them.
    #[inline]
    pub(crate) fn delete(&mut self, range: Range<usize>) {
        self.inner.drain(range);
    }

    #[inline]
    pub(crate) fn reverse(&mut self) {
        self.inner.reverse();
    }

    /// Rotate cells towards the end of the row, wrapping around to the front.
    #[inline]
    pub(crate) fn rotate_right(&mut self, count: usize) {
        self.inner.rotate_right(count);
    }
}

impl<T> From<Vec<T>> for Row<T> {
    fn from(vec: Vec<T>) -> Row<T> {
        Row::from_vec(vec)
    }
}

impl<T> From<Row<T>> for Vec<T> {
    fn from(row: Row<T>) -> Vec<T> {
        row.into_vec()
    }
}

impl<T> IntoIterator for Row<T> {
    type IntoIter = vec::IntoIter<T>;
    type Item = T;

    #[inline]
    fn into_iter(self) -> vec::IntoIter<T> {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Row<T> {
    type IntoIter = slice::Iter<'a, T>;
    type Item = &'a T;

    #[inline]
    fn into_iter(self) -> slice::Iter<'a, T> {
        self.inner.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Row<T> {
    type IntoIter = slice::IterMut<'a, T>;
    type Item = &'a mut T;

    #[inline]
    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.inner.iter_mut()
    }
}

impl<T> Index<usize> for Row<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.inner[index]
    }
}

impl<T> IndexMut<usize> for Row<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.inner[index]
    }
}

impl<T> Index<Range<usize>> for Row<T> {
    type Output = [T];

    #[inline]
    fn index(&self, index: Range<usize>) -> &[T] {
        &self.inner[index]
    }
}

impl<T> Index<RangeTo<usize>> for Row<T> {
    type Output = [T];

    #[inline]
    fn index(&self, index: RangeTo<usize>) -> &[T] {
        &self.inner[index]
    }
}

impl<T> Index<RangeFrom<usize>> for Row<T> {
    type Output = [T];

    #[inline]
    fn index(&self, index: RangeFrom<usize>) -> &[T] {
        &self.inner[index]
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
