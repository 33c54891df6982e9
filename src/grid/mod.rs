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

//! A row-major two-dimensional array which keeps its rows rectangular.

use std::convert::TryFrom;
use std::fmt;
use std::ops::{Index, IndexMut};

use log::debug;
#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::diagnostics::{Diagnostic, Reporter};
use crate::error::{IndexError, ShapeError};
use crate::index::Point;

mod edit;
pub mod functional;
mod iter;
mod ops;
mod resize;
mod row;
mod storage;
mod transform;
#[cfg(test)]
mod tests;

pub use self::iter::{
    BidirectionalIterator, ColumnIter, ColumnIterMut, GridCursor, GridIter, GridIterMut,
};
pub use self::row::Row;
use self::storage::Storage;

/// Rectangular grid of cells.
///
/// ```notrust
///          col 0   col 1        col C-1
///        ┌───────┬───────┬─────┬───────┐
/// row 0  │   0   │   1   │ ... │  C-1  │
///        ├───────┼───────┼─────┼───────┤
/// row 1  │   C   │  C+1  │ ... │ 2C-1  │
///        ├───────┼───────┼─────┼───────┤
///        │  ...  │       │     │       │
///        └───────┴───────┴─────┴───────┘
/// ```
///
/// Cells are addressed by `(row, col)` or by their row-major linear index. Every row has the
/// length of row 0; a grid without rows and a grid with a single zero-length row are both empty.
///
/// Iterators borrow the grid, so the borrow checker rules out using them across a structural
/// change.
#[derive(Clone)]
pub struct Grid<T> {
    /// Rows in the grid. Each row holds a list of cells corresponding to the
    /// columns in that row.
    raw: Storage<T>,

    /// Sink for diagnostics of the `safe_` operations.
    reporter: Reporter,
}

impl<T> Default for Grid<T> {
    fn default() -> Grid<T> {
        Grid { raw: Storage::default(), reporter: Reporter::default() }
    }
}

/// Grids without cells are all equal, whatever their number of zero-length rows.
impl<T: PartialEq> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.is_empty() && other.is_empty()) || self.raw.eq(&other.raw)
    }
}

impl<T: Eq> Eq for Grid<T> {}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.raw.iter().map(Row::as_slice)).finish()
    }
}

impl<T: Clone> Grid<T> {
    /// Create a `rows` by `cols` grid of `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Grid<T> {
        Grid::from_storage(Storage::with_capacity(rows, Row::new(cols, &value)))
    }

    /// Copy of the cell at `(row, col)`, if there is one.
    #[inline]
    pub fn safe_look(&self, row: usize, col: usize) -> Option<T> {
        self.get(row, col).cloned()
    }
}

impl<T> Grid<T> {
    /// Create an empty grid without any rows.
    pub fn new() -> Grid<T> {
        Grid::default()
    }

    /// Create a grid from a list of rows.
    ///
    /// Fails if the rows are not all of the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Grid<T>, ShapeError> {
        let grid = Grid::from_storage(Storage::from_vec(
            rows.into_iter().map(Row::from_vec).collect(),
        ));
        grid.verify_dimensions()?;
        Ok(grid)
    }

    /// Create a grid with `row` as its only row.
    pub fn from_row(row: Vec<T>) -> Grid<T> {
        Grid::from_storage(Storage::from_vec(vec![Row::from_vec(row)]))
    }

    #[inline]
    fn from_storage(raw: Storage<T>) -> Grid<T> {
        Grid { raw, reporter: Reporter::default() }
    }

    /// Empty grid sharing this grid's reporter.
    #[inline]
    pub(crate) fn sibling<S>(&self, rows: Vec<Row<S>>) -> Grid<S> {
        Grid { raw: Storage::from_vec(rows), reporter: self.reporter.clone() }
    }

    /// Replace the sink for diagnostics.
    #[must_use]
    pub fn with_reporter(mut self, reporter: Reporter) -> Grid<T> {
        self.reporter = reporter;
        self
    }

    pub fn set_reporter(&mut self, reporter: Reporter) {
        self.reporter = reporter;
    }

    #[inline]
    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    #[inline]
    pub(crate) fn report(&self, diagnostic: Diagnostic) {
        self.reporter.report(diagnostic);
    }

    /// Return the grid to the empty state, dropping every row.
    pub fn clear(&mut self) -> &mut Grid<T> {
        self.raw.clear();
        self
    }

    /// Number of rows in the grid.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.raw.len()
    }

    /// Number of cells in row 0, or zero if there are no rows.
    #[inline]
    pub fn col_count(&self) -> usize {
        if self.raw.len() == 0 {
            0
        } else {
            self.raw[0].len()
        }
    }

    /// Dimensions as `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.row_count(), self.col_count())
    }

    /// Total number of cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.row_count() * self.col_count()
    }

    /// Whether the grid holds no cells.
    ///
    /// This is the case for a grid without rows, and for a grid whose rows are all of length zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.row_count() == self.col_count()
    }

    /// Check that every row has the length of row 0.
    pub fn verify_dimensions(&self) -> Result<(), ShapeError> {
        let expected = self.col_count();
        for (row, cells) in self.raw.iter().enumerate().skip(1) {
            if cells.len() != expected {
                debug!(
                    "Rows not of equal length! Row 0 is length {}, but row {} is length {}",
                    expected,
                    row,
                    cells.len()
                );
                return Err(ShapeError::RaggedRow { row, expected, found: cells.len() });
            }
        }

        Ok(())
    }

    /// Like [`verify_dimensions`](Grid::verify_dimensions), reporting the result as a `bool`.
    #[inline]
    pub fn safe_verify_dimensions(&self) -> bool {
        self.verify_dimensions().is_ok()
    }

    #[inline]
    fn check_cell(&self, row: usize, col: usize) -> Result<(), IndexError> {
        let (rows, cols) = self.dimensions();
        if row < rows && col < cols {
            Ok(())
        } else {
            Err(IndexError::Cell { point: Point::new(row, col), rows, cols })
        }
    }

    /// Cell at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> Result<&T, IndexError> {
        self.check_cell(row, col)?;
        Ok(&self.raw[row][col])
    }

    /// Mutable cell at `(row, col)`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, IndexError> {
        self.check_cell(row, col)?;
        Ok(&mut self.raw[row][col])
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.at(row, col).ok()
    }

    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.at_mut(row, col).ok()
    }

    #[inline]
    fn linear_point(&self, index: usize) -> Result<Point, IndexError> {
        let size = self.size();
        if index < size {
            Ok(Point::from_linear(index, self.col_count()))
        } else {
            Err(IndexError::Linear { index, size })
        }
    }

    /// Cell at the row-major linear `index`.
    pub fn at_linear(&self, index: usize) -> Result<&T, IndexError> {
        let point = self.linear_point(index)?;
        Ok(&self[point])
    }

    /// Mutable cell at the row-major linear `index`.
    pub fn at_linear_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        let point = self.linear_point(index)?;
        Ok(&mut self[point])
    }

    /// Row at `index`.
    pub fn row(&self, index: usize) -> Result<&Row<T>, IndexError> {
        let rows = self.row_count();
        if index < rows {
            Ok(&self.raw[index])
        } else {
            Err(IndexError::Row { index, rows })
        }
    }

    /// Mutable row at `index`.
    ///
    /// Only the cells can be changed, the length of the row is fixed.
    pub fn row_mut(&mut self, index: usize) -> Result<&mut [T], IndexError> {
        let rows = self.row_count();
        if index < rows {
            Ok(&mut self.raw[index][..])
        } else {
            Err(IndexError::Row { index, rows })
        }
    }

    /// Iterate over the rows from top to bottom.
    #[inline]
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &Row<T>> + '_ {
        self.raw.iter()
    }

    /// Mutably iterate over every cell in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.raw.iter_mut().flat_map(|row| row.iter_mut())
    }

    /// Consume the grid, returning its rows.
    pub fn into_rows(mut self) -> Vec<Vec<T>> {
        self.raw.take_all().into_iter().map(Row::into_vec).collect()
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Grid<T> {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Grid<T>, ShapeError> {
        Grid::from_rows(rows)
    }
}

impl<T> From<Vec<T>> for Grid<T> {
    fn from(row: Vec<T>) -> Grid<T> {
        Grid::from_row(row)
    }
}

impl<T> From<Grid<T>> for Vec<Vec<T>> {
    fn from(grid: Grid<T>) -> Vec<Vec<T>> {
        grid.into_rows()
    }
}

/// Elements separated by `\t`, rows terminated by `\n`.
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.raw.iter() {
            for cell in row {
                write!(f, "{}\t", cell)?;
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}

/// Index by row.
///
/// Only the row index is checked; the returned row panics on its own for a bad column. Rows
/// can only be changed through [`row_mut`](Grid::row_mut) or by [`Point`], which keeps their
/// length fixed.
impl<T> Index<usize> for Grid<T> {
    type Output = Row<T>;

    #[inline]
    fn index(&self, index: usize) -> &Row<T> {
        assert!(index < self.row_count(), "row index {} out of range", index);
        &self.raw[index]
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, point: Point) -> &T {
        &self[point.row][point.col]
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, point: Point) -> &mut T {
        assert!(point.row < self.row_count(), "row index {} out of range", point.row);
        &mut self.raw[point.row][point.col]
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.raw.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Grid<T>, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Grid::from_rows(rows).map_err(de::Error::custom)
    }
}
