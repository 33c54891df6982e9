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

//! Row and column insertion and deletion.
//!
//! Strict operations check their arguments before touching the grid, so a failed call leaves it
//! exactly as it was. The `safe_` operations trim or pad mismatched rows and columns, and report
//! out of range positions through the grid's [`Reporter`](crate::Reporter) without changing
//! anything.

use std::ops::Range;

use log::{debug, trace};

use crate::diagnostics::Diagnostic;
use crate::error::{Error, IndexError, ShapeError};
use crate::grid::row::Row;
use crate::grid::Grid;
use crate::index::Axis;

impl<T> Grid<T> {
    fn axis_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row_count(),
            Axis::Column => self.col_count(),
        }
    }

    /// Check that `position` is a valid insertion point on `axis`.
    fn check_insert(&self, axis: Axis, position: usize) -> Result<(), IndexError> {
        let len = self.axis_len(axis);
        if position > len {
            debug!("Attempted to insert a {} at index {} into a grid with {}", axis, position, len);
            return Err(IndexError::Insert { axis, position, len });
        }
        Ok(())
    }

    /// Like `check_insert`, reporting a diagnostic instead of failing.
    fn accept_insert(&self, axis: Axis, position: usize) -> bool {
        let len = self.axis_len(axis);
        if position > len {
            self.report(Diagnostic::InsertOutOfRange { axis, position, len });
            return false;
        }
        true
    }

    /// Insert a row which is known to fit.
    ///
    /// A grid without cells drops its zero-length rows so the new row defines the width.
    fn put_row(&mut self, position: usize, row: Vec<T>) {
        if self.is_empty() && !row.is_empty() {
            self.raw.replace_inner(vec![Row::from_vec(row)]);
        } else {
            self.raw.insert(position, Row::from_vec(row));
        }
    }

    /// Insert a column which is known to fit.
    ///
    /// A grid without cells whose height differs from the column becomes a single column.
    fn put_col(&mut self, position: usize, col: Vec<T>) {
        if col.len() == self.row_count() {
            for (row, cell) in self.raw.iter_mut().zip(col) {
                row.insert(position, cell);
            }
        } else {
            let rows = col.into_iter().map(|cell| Row::from_vec(vec![cell]));
            self.raw.replace_inner(rows.collect());
        }
    }

    /// Insert `row` before row `position`.
    ///
    /// Valid positions are `0..=row_count()`. The row must have exactly `col_count()` cells,
    /// unless the grid is empty.
    pub fn insert_row(&mut self, position: usize, row: Vec<T>) -> Result<&mut Grid<T>, Error> {
        self.check_insert(Axis::Row, position)?;

        let expected = self.col_count();
        if row.len() != expected && !self.is_empty() {
            debug!(
                "Attempted to insert a row of length {} into a grid of width {}",
                row.len(),
                expected
            );
            return Err(ShapeError::LengthMismatch { axis: Axis::Row, expected, found: row.len() }
                .into());
        }

        self.put_row(position, row);
        Ok(self)
    }

    /// Insert `col` before column `position`.
    ///
    /// Valid positions are `0..=col_count()`. The column must have exactly `row_count()` cells,
    /// unless the grid is empty.
    pub fn insert_col(&mut self, position: usize, col: Vec<T>) -> Result<&mut Grid<T>, Error> {
        self.check_insert(Axis::Column, position)?;

        let expected = self.row_count();
        if col.len() != expected && !self.is_empty() {
            debug!(
                "Attempted to insert a column of length {} into a grid of height {}",
                col.len(),
                expected
            );
            return Err(ShapeError::LengthMismatch {
                axis: Axis::Column,
                expected,
                found: col.len(),
            }
            .into());
        }

        self.put_col(position, col);
        Ok(self)
    }

    /// Insert `row` below the last row.
    #[inline]
    pub fn append_row(&mut self, row: Vec<T>) -> Result<&mut Grid<T>, Error> {
        self.insert_row(self.row_count(), row)
    }

    /// Insert `col` right of the last column.
    #[inline]
    pub fn append_col(&mut self, col: Vec<T>) -> Result<&mut Grid<T>, Error> {
        self.insert_col(self.col_count(), col)
    }

    /// Remove row `index`.
    pub fn delete_row(&mut self, index: usize) -> Result<&mut Grid<T>, IndexError> {
        let rows = self.row_count();
        if index >= rows {
            debug!("Tried to delete row {} from a grid with {} rows", index, rows);
            return Err(IndexError::Row { index, rows });
        }

        self.raw.remove(index);
        Ok(self)
    }

    /// Remove column `index`.
    pub fn delete_col(&mut self, index: usize) -> Result<&mut Grid<T>, IndexError> {
        let cols = self.col_count();
        if index >= cols {
            debug!("Tried to delete column {} from a grid with {} columns", index, cols);
            return Err(IndexError::Column { index, cols });
        }

        for row in self.raw.iter_mut() {
            row.remove(index);
        }
        Ok(self)
    }

    /// Check a half-open range on `axis`; `None` if it is empty.
    fn check_range(
        &self,
        axis: Axis,
        range: Range<usize>,
    ) -> Result<Option<Range<usize>>, IndexError> {
        let len = self.axis_len(axis);
        let Range { start, end } = range;
        if start > len || end > len {
            debug!("Tried to delete {}s {}..{} from a grid with {} of them", axis, start, end, len);
            return Err(IndexError::Range { axis, start, end, len });
        }

        Ok(if start < end { Some(start..end) } else { None })
    }

    /// Remove rows `start..end`.
    ///
    /// Nothing is removed if `start >= end`.
    pub fn delete_rows(&mut self, start: usize, end: usize) -> Result<&mut Grid<T>, IndexError> {
        if let Some(range) = self.check_range(Axis::Row, start..end)? {
            self.raw.delete(range);
        }
        Ok(self)
    }

    /// Remove columns `start..end`.
    ///
    /// Nothing is removed if `start >= end`.
    pub fn delete_cols(&mut self, start: usize, end: usize) -> Result<&mut Grid<T>, IndexError> {
        if let Some(range) = self.check_range(Axis::Column, start..end)? {
            for row in self.raw.iter_mut() {
                row.delete(range.clone());
            }
        }
        Ok(self)
    }
}

impl<T: Clone> Grid<T> {
    /// Insert `row` before row `position`, trimming it or padding it with `backup` to fit.
    ///
    /// Out of range positions are reported and leave the grid unchanged.
    pub fn safe_insert_row(&mut self, position: usize, row: Vec<T>, backup: T) -> &mut Grid<T> {
        if !self.accept_insert(Axis::Row, position) {
            return self;
        }

        let mut row = row;
        if !self.is_empty() {
            let cols = self.col_count();
            if row.len() != cols {
                trace!("Fitting row of length {} to width {}", row.len(), cols);
            }
            row.resize(cols, backup);
        }

        self.put_row(position, row);
        self
    }

    /// Insert `col` before column `position`, trimming it or padding it with `backup` to fit.
    ///
    /// Out of range positions are reported and leave the grid unchanged.
    pub fn safe_insert_col(&mut self, position: usize, col: Vec<T>, backup: T) -> &mut Grid<T> {
        if !self.accept_insert(Axis::Column, position) {
            return self;
        }

        let mut col = col;
        if !self.is_empty() {
            let rows = self.row_count();
            if col.len() != rows {
                trace!("Fitting column of length {} to height {}", col.len(), rows);
            }
            col.resize(rows, backup);
        }

        self.put_col(position, col);
        self
    }

    /// Insert `row` below the last row, trimming it or padding it with `backup` to fit.
    #[inline]
    pub fn safe_append_row(&mut self, row: Vec<T>, backup: T) -> &mut Grid<T> {
        self.safe_insert_row(self.row_count(), row, backup)
    }

    /// Insert `col` right of the last column, trimming it or padding it with `backup` to fit.
    #[inline]
    pub fn safe_append_col(&mut self, col: Vec<T>, backup: T) -> &mut Grid<T> {
        self.safe_insert_col(self.col_count(), col, backup)
    }

    /// Insert a row of `value` before row `position`.
    pub fn insertfill_row(
        &mut self,
        position: usize,
        value: T,
    ) -> Result<&mut Grid<T>, IndexError> {
        self.check_insert(Axis::Row, position)?;
        let cols = self.col_count();
        self.raw.insert(position, Row::new(cols, &value));
        Ok(self)
    }

    /// Insert a column of `value` before column `position`.
    pub fn insertfill_col(
        &mut self,
        position: usize,
        value: T,
    ) -> Result<&mut Grid<T>, IndexError> {
        self.check_insert(Axis::Column, position)?;
        for row in self.raw.iter_mut() {
            row.insert(position, value.clone());
        }
        Ok(self)
    }

    /// Insert a row of `value` before row `position`, reporting out of range positions.
    pub fn safe_insertfill_row(&mut self, position: usize, value: T) -> &mut Grid<T> {
        if self.accept_insert(Axis::Row, position) {
            let cols = self.col_count();
            self.raw.insert(position, Row::new(cols, &value));
        }
        self
    }

    /// Insert a column of `value` before column `position`, reporting out of range positions.
    pub fn safe_insertfill_col(&mut self, position: usize, value: T) -> &mut Grid<T> {
        if self.accept_insert(Axis::Column, position) {
            for row in self.raw.iter_mut() {
                row.insert(position, value.clone());
            }
        }
        self
    }
}
