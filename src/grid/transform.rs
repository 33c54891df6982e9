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

//! Flips, transposition, rotation and shifting.
//!
//! Shifts follow one sign convention: positive counts move cells right (horizontal) or down
//! (vertical), so the cell at `(i, j)` ends up at `(i, j + s)` or `(i + s, j)`.

use log::debug;

use crate::error::ShapeError;
use crate::grid::row::Row;
use crate::grid::Grid;
use crate::index::Axis;

/// Where a non-cyclic shift by `shift` vacates cells on an axis of length `len`.
///
/// `len` must not be zero.
fn vacated(shift: isize, len: usize) -> std::ops::Range<usize> {
    let distance = shift.unsigned_abs();
    if distance >= len {
        0..len
    } else if shift > 0 {
        0..distance
    } else {
        len - distance..len
    }
}

/// Cyclic shift by `shift` on an axis of length `len`, as a rightward rotation.
///
/// `len` must not be zero.
fn rightward(shift: isize, len: usize) -> usize {
    shift.rem_euclid(len as isize) as usize
}

impl<T> Grid<T> {
    /// Reverse every row, moving the cell at `(i, j)` to `(i, cols - 1 - j)`.
    pub fn flip_horizontal(&mut self) -> &mut Grid<T> {
        for row in self.raw.iter_mut() {
            row.reverse();
        }
        self
    }

    /// Reverse the order of the rows, moving the cell at `(i, j)` to `(rows - 1 - i, j)`.
    pub fn flip_vertical(&mut self) -> &mut Grid<T> {
        self.raw.reverse();
        self
    }

    /// Move the cell at `(i, j)` to `(j, i)`.
    pub fn transpose(&mut self) -> &mut Grid<T> {
        let (rows, cols) = self.dimensions();
        let mut transposed: Vec<Vec<T>> = (0..cols).map(|_| Vec::with_capacity(rows)).collect();

        for row in self.raw.take_all() {
            for (column, cell) in transposed.iter_mut().zip(row) {
                column.push(cell);
            }
        }

        self.raw.replace_inner(transposed.into_iter().map(Row::from_vec).collect());
        self
    }

    /// Rotate by 90° clockwise.
    pub fn rotate_cw(&mut self) -> &mut Grid<T> {
        self.transpose().flip_horizontal()
    }

    /// Rotate by 90° counter-clockwise.
    pub fn rotate_ccw(&mut self) -> &mut Grid<T> {
        self.transpose().flip_vertical()
    }

    fn check_axis(&self, axis: Axis) -> Result<usize, ShapeError> {
        let len = match axis {
            Axis::Row => self.row_count(),
            Axis::Column => self.col_count(),
        };

        if len == 0 {
            debug!("Tried to shift along an empty {} axis", axis);
            return Err(ShapeError::ZeroSizedAxis(axis));
        }

        Ok(len)
    }

    /// Shift every row by `shift` columns, wrapping cells around at the edges.
    pub fn shift_horizontal(&mut self, shift: isize) -> Result<&mut Grid<T>, ShapeError> {
        let cols = self.check_axis(Axis::Column)?;
        let count = rightward(shift, cols);
        if count != 0 {
            for row in self.raw.iter_mut() {
                row.rotate_right(count);
            }
        }
        Ok(self)
    }

    /// Shift the rows by `shift`, wrapping rows around at the edges.
    pub fn shift_vertical(&mut self, shift: isize) -> Result<&mut Grid<T>, ShapeError> {
        let rows = self.check_axis(Axis::Row)?;
        self.raw.rotate(-(rightward(shift, rows) as isize));
        Ok(self)
    }
}

impl<T: Clone> Grid<T> {
    /// Shift every row by `shift` columns, setting vacated cells to `filler`.
    pub fn shift_horizontal_fill(
        &mut self,
        shift: isize,
        filler: T,
    ) -> Result<&mut Grid<T>, ShapeError> {
        let cols = self.check_axis(Axis::Column)?;
        let vacated = vacated(shift, cols);

        self.shift_horizontal(shift)?;
        for row in self.raw.iter_mut() {
            row.reset(vacated.clone(), &filler);
        }

        Ok(self)
    }

    /// Shift the rows by `shift`, setting vacated rows to `filler`.
    pub fn shift_vertical_fill(
        &mut self,
        shift: isize,
        filler: T,
    ) -> Result<&mut Grid<T>, ShapeError> {
        let rows = self.check_axis(Axis::Row)?;
        let cols = self.col_count();

        self.shift_vertical(shift)?;
        for row in vacated(shift, rows) {
            self.raw[row] = Row::new(cols, &filler);
        }

        Ok(self)
    }
}
