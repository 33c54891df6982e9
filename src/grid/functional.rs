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

//! Map and fold over the cells of a grid.
//!
//! Folds walk the grid with its own iterators: left folds in row-major order, right folds in
//! reverse row-major order, `f(a0, f(a1, f(a2, acc)))`.

use std::ops::{Add, Mul};

use log::debug;

use crate::error::{Error, ShapeError};
use crate::grid::row::Row;
use crate::grid::Grid;

/// Whether `predicate` holds for every cell. Vacuously true on an empty grid.
pub fn all<T, F>(grid: &Grid<T>, predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    grid.iter().all(predicate)
}

/// Whether `predicate` holds for any cell. Always false on an empty grid.
pub fn any<T, F>(grid: &Grid<T>, predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    grid.iter().any(predicate)
}

impl<T> Grid<T> {
    /// Fail unless `other` has the same dimensions.
    pub(crate) fn check_same_shape<U>(&self, other: &Grid<U>) -> Result<(), ShapeError> {
        let (left, right) = (self.dimensions(), other.dimensions());
        if left != right {
            debug!("Elementwise operation on grids of dimensions {:?} and {:?}", left, right);
            return Err(ShapeError::DimensionMismatch { left, right });
        }
        Ok(())
    }

    fn check_non_empty(&self) -> Result<(), ShapeError> {
        if self.is_empty() {
            return Err(ShapeError::Empty);
        }
        Ok(())
    }

    fn check_fold_column(&self, col: usize) -> Result<(), Error> {
        self.check_non_empty()?;
        self.begin_col(col)?;
        Ok(())
    }

    /// New grid of the same shape with `f` applied to every cell.
    pub fn map<S, F>(&self, mut f: F) -> Grid<S>
    where
        F: FnMut(&T) -> S,
    {
        let rows = self.raw.iter().map(|row| Row::from_vec(row.iter().map(&mut f).collect()));
        self.sibling(rows.collect())
    }

    /// New grid combining every cell with the cell at the same position in `other`.
    ///
    /// Fails if the grids differ in shape.
    pub fn map2<U, S, F>(&self, other: &Grid<U>, mut f: F) -> Result<Grid<S>, ShapeError>
    where
        F: FnMut(&T, &U) -> S,
    {
        self.check_same_shape(other)?;

        let rows = self.raw.iter().zip(other.raw.iter()).map(|(left, right)| {
            Row::from_vec(left.iter().zip(right.iter()).map(|(l, r)| f(l, r)).collect())
        });
        Ok(self.sibling(rows.collect()))
    }

    /// Replace every cell with `f` applied to it.
    pub fn map_inplace<F>(&mut self, mut f: F) -> &mut Grid<T>
    where
        F: FnMut(&T) -> T,
    {
        for cell in self.iter_mut() {
            *cell = f(cell);
        }
        self
    }

    /// Fold from the left: `f(f(f(init, a0), a1), a2)`.
    pub fn foldl<S, F>(&self, init: S, f: F) -> Result<S, ShapeError>
    where
        F: FnMut(S, &T) -> S,
    {
        self.check_non_empty()?;
        Ok(self.iter().fold(init, f))
    }

    /// Fold from the left with `seed` standing in for the first cell, which is skipped.
    pub fn foldl_seeded<S, F>(&self, seed: S, f: F) -> Result<S, ShapeError>
    where
        F: FnMut(S, &T) -> S,
    {
        self.check_non_empty()?;
        Ok((self.begin() + 1).fold(seed, f))
    }

    /// Fold from the right: `f(a0, f(a1, f(a2, init)))`.
    pub fn foldr<S, F>(&self, init: S, mut f: F) -> Result<S, ShapeError>
    where
        F: FnMut(&T, S) -> S,
    {
        self.check_non_empty()?;
        Ok(self.rbegin().fold(init, |acc, cell| f(cell, acc)))
    }

    /// Fold from the right with `seed` standing in for the last cell, which is skipped.
    pub fn foldr_seeded<S, F>(&self, seed: S, mut f: F) -> Result<S, ShapeError>
    where
        F: FnMut(&T, S) -> S,
    {
        self.check_non_empty()?;
        Ok((self.rbegin() + 1).fold(seed, |acc, cell| f(cell, acc)))
    }

    /// Fold column `col` from the top.
    pub fn foldl_col<S, F>(&self, col: usize, init: S, f: F) -> Result<S, Error>
    where
        F: FnMut(S, &T) -> S,
    {
        self.check_fold_column(col)?;
        Ok(self.begin_col(col)?.fold(init, f))
    }

    /// Fold column `col` from the top with `seed` standing in for its first cell.
    pub fn foldl_col_seeded<S, F>(&self, col: usize, seed: S, f: F) -> Result<S, Error>
    where
        F: FnMut(S, &T) -> S,
    {
        self.check_fold_column(col)?;
        Ok((self.begin_col(col)? + 1).fold(seed, f))
    }

    /// Fold column `col` from the bottom.
    pub fn foldr_col<S, F>(&self, col: usize, init: S, mut f: F) -> Result<S, Error>
    where
        F: FnMut(&T, S) -> S,
    {
        self.check_fold_column(col)?;
        Ok(self.rbegin_col(col)?.fold(init, |acc, cell| f(cell, acc)))
    }

    /// Fold column `col` from the bottom with `seed` standing in for its last cell.
    pub fn foldr_col_seeded<S, F>(&self, col: usize, seed: S, mut f: F) -> Result<S, Error>
    where
        F: FnMut(&T, S) -> S,
    {
        self.check_fold_column(col)?;
        Ok((self.rbegin_col(col)? + 1).fold(seed, |acc, cell| f(cell, acc)))
    }

    /// Whether `predicate` holds for every cell.
    #[inline]
    pub fn all<F: FnMut(&T) -> bool>(&self, predicate: F) -> bool {
        all(self, predicate)
    }

    /// Whether `predicate` holds for any cell.
    #[inline]
    pub fn any<F: FnMut(&T) -> bool>(&self, predicate: F) -> bool {
        any(self, predicate)
    }
}

impl<T: Clone> Grid<T> {
    /// Fold from the left, starting with the first cell as accumulator.
    pub fn foldl1<F>(&self, f: F) -> Result<T, ShapeError>
    where
        F: FnMut(T, &T) -> T,
    {
        let first = self.begin().cell().ok_or(ShapeError::Empty)?;
        self.foldl_seeded(first.clone(), f)
    }

    /// Fold from the right, starting with the last cell as accumulator.
    pub fn foldr1<F>(&self, f: F) -> Result<T, ShapeError>
    where
        F: FnMut(&T, T) -> T,
    {
        let last = self.rbegin().cell().ok_or(ShapeError::Empty)?;
        self.foldr_seeded(last.clone(), f)
    }

    /// Fold column `col` from the top, starting with its first cell as accumulator.
    pub fn foldl1_col<F>(&self, col: usize, f: F) -> Result<T, Error>
    where
        F: FnMut(T, &T) -> T,
    {
        self.check_fold_column(col)?;
        let first = self[0][col].clone();
        self.foldl_col_seeded(col, first, f)
    }

    /// Fold column `col` from the bottom, starting with its last cell as accumulator.
    pub fn foldr1_col<F>(&self, col: usize, f: F) -> Result<T, Error>
    where
        F: FnMut(&T, T) -> T,
    {
        self.check_fold_column(col)?;
        let last = self[self.row_count() - 1][col].clone();
        self.foldr_col_seeded(col, last, f)
    }
}

impl<T: Clone + Add<Output = T>> Grid<T> {
    /// Sum of all cells.
    pub fn sum(&self) -> Result<T, ShapeError> {
        self.foldl1(|acc, cell| acc + cell.clone())
    }

    /// Sum of the cells in column `col`.
    pub fn sum_col(&self, col: usize) -> Result<T, Error> {
        self.foldl1_col(col, |acc, cell| acc + cell.clone())
    }
}

impl<T: Clone + Mul<Output = T>> Grid<T> {
    /// Product of all cells.
    pub fn product(&self) -> Result<T, ShapeError> {
        self.foldl1(|acc, cell| acc * cell.clone())
    }

    /// Product of the cells in column `col`.
    pub fn product_col(&self, col: usize) -> Result<T, Error> {
        self.foldl1_col(col, |acc, cell| acc * cell.clone())
    }
}
