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

//! Wrapper around Vec which supports fast indexing and rotation.
//!
//! The rotation implemented by `Storage` is a simple integer addition.
//! Compare with standard library rotation which requires rearranging items in
//! memory.
//!
//! As a consequence, the indexing operators need to be reimplemented for this
//! type to account for the 0th element not always being at the start of the
//! allocation. Operations which reorder rows in memory linearize the buffer
//! first.

use std::iter::Chain;
use std::mem;
use std::ops::{Index, IndexMut, Range};
use std::slice;

use static_assertions::assert_eq_size;

use super::Row;

assert_eq_size!(Row<u8>, [usize; 3]);

#[derive(Clone, Debug)]
pub struct Storage<T> {
    inner: Vec<Row<T>>,

    /// Index in `inner` of the first logical row.
    zero: usize,
}

impl<T> Default for Storage<T> {
    fn default() -> Storage<T> {
        Storage { inner: Vec::new(), zero: 0 }
    }
}

impl<T: PartialEq> PartialEq for Storage<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Storage<T> {}

#[allow(clippy::len_without_is_empty)]
impl<T> Storage<T> {
    #[inline]
    pub fn with_capacity(rows: usize, template: Row<T>) -> Storage<T>
    where
        T: Clone,
    {
        Storage { inner: vec![template; rows], zero: 0 }
    }

    #[inline]
    pub fn from_vec(inner: Vec<Row<T>>) -> Storage<T> {
        Storage { inner, zero: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Compute actual index in underlying storage given the requested index.
    #[inline]
    fn compute_index(&self, requested: usize) -> usize {
        debug_assert!(requested < self.inner.len());
        let zeroed = requested + self.zero;

        // This part is critical for performance,
        // so an if/else is used here instead of a modulo operation.
        if zeroed >= self.inner.len() {
            zeroed - self.inner.len()
        } else {
            zeroed
        }
    }

    /// Rotate the logical rows by `count`.
    ///
    /// Positive counts move every row towards index zero, the first rows wrapping around to the
    /// end. Negative counts move rows towards the end.
    #[inline]
    pub fn rotate(&mut self, count: isize) {
        let len = self.inner.len();
        if len == 0 {
            return;
        }

        let count = count.rem_euclid(len as isize) as usize;
        self.zero = (self.zero + count) % len;
    }

    /// Move the first logical row back to the start of the allocation.
    #[inline]
    pub fn linearize(&mut self) {
        self.inner.rotate_left(self.zero);
        self.zero = 0;
    }

    pub fn insert(&mut self, index: usize, row: Row<T>) {
        self.linearize();
        self.inner.insert(index, row);
    }

    #[inline]
    pub fn push(&mut self, row: Row<T>) {
        self.insert(self.inner.len(), row);
    }

    pub fn remove(&mut self, index: usize) -> Row<T> {
        self.linearize();
        self.inner.remove(index)
    }

    /// Remove the logical rows in `range`, dropping them.
    pub fn delete(&mut self, range: Range<usize>) {
        self.linearize();
        self.inner.drain(range);
    }

    pub fn truncate(&mut self, len: usize) {
        self.linearize();
        self.inner.truncate(len);
    }

    pub fn reverse(&mut self) {
        self.linearize();
        self.inner.reverse();
    }

    pub fn clear(&mut self) {
        self.inner.clear();
        self.zero = 0;
    }

    /// Remove all rows, returning them in logical order.
    pub fn take_all(&mut self) -> Vec<Row<T>> {
        self.linearize();
        mem::replace(&mut self.inner, Vec::new())
    }

    /// Update the raw storage buffer.
    pub fn replace_inner(&mut self, vec: Vec<Row<T>>) {
        self.inner = vec;
        self.zero = 0;
    }

    #[inline]
    pub fn iter(&self) -> Chain<slice::Iter<'_, Row<T>>, slice::Iter<'_, Row<T>>> {
        let (tail, head) = self.inner.split_at(self.zero);
        head.iter().chain(tail.iter())
    }

    #[inline]
    pub fn iter_mut(&mut self) -> Chain<slice::IterMut<'_, Row<T>>, slice::IterMut<'_, Row<T>>> {
        let (tail, head) = self.inner.split_at_mut(self.zero);
        head.iter_mut().chain(tail.iter_mut())
    }
}

impl<T> Index<usize> for Storage<T> {
    type Output = Row<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[self.compute_index(index)]
    }
}

impl<T> IndexMut<usize> for Storage<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let index = self.compute_index(index); // borrowck
        &mut self.inner[index]
    }
}
