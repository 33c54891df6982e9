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

//! Whole-grid and single-column iterators.
//!
//! Both families are cursors: they sit on a cell, or on a sentinel position one step outside of
//! the sequence, and can be moved in either direction one cell at a time. Forward iterators end
//! on the position after the last cell, reversed iterators on the position before the first one.
//! Iterators over an empty grid sit on a null position from which they cannot move.

use std::fmt;
use std::ops::{Add, Sub};
use std::ptr;

use crate::error::{EndOfSequence, IndexError};
use crate::grid::Grid;
use crate::index::{Direction, Point, Step};

/// Bidirectional iterator.
pub trait BidirectionalIterator: Iterator {
    /// Move one cell back and return it.
    fn prev(&mut self) -> Option<Self::Item>;
}

/// Cursor over the cells of a grid.
pub trait GridCursor {
    type Cell;

    /// Cell under the cursor, `None` on a sentinel position.
    fn current(&self) -> Option<&Self::Cell>;

    /// Move one cell relative to the cursor's own direction.
    ///
    /// Fails without moving when the cursor is already on the sentinel in that direction.
    fn advance(&mut self, step: Step) -> Result<(), EndOfSequence>;

    fn direction(&self) -> Direction;

    /// Advance `count` times in the cursor's direction.
    ///
    /// Stops on the sentinel position if the sequence ends early.
    fn forward(&mut self, count: usize) -> Result<(), EndOfSequence> {
        for _ in 0..count {
            self.advance(Step::Next)?;
        }
        Ok(())
    }

    /// Advance `count` times against the cursor's direction.
    ///
    /// Stops on the sentinel position if the sequence ends early.
    fn backward(&mut self, count: usize) -> Result<(), EndOfSequence> {
        for _ in 0..count {
            self.advance(Step::Prev)?;
        }
        Ok(())
    }
}

/// Position of a whole-grid iterator.
///
/// Rows are signed so the reversed sentinel can sit on row `-1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Walk {
    cur: Point<isize, usize>,
    rows: usize,
    cols: usize,
    direction: Direction,
}

impl Walk {
    fn begin(rows: usize, cols: usize, direction: Direction) -> Walk {
        let cur = match direction {
            _ if rows * cols == 0 => Point::new(0, 0),
            Direction::Forward => Point::new(0, 0),
            Direction::Reversed => Point::new(rows as isize - 1, cols - 1),
        };
        Walk { cur, rows, cols, direction }
    }

    fn end(rows: usize, cols: usize, direction: Direction) -> Walk {
        let cur = match direction {
            _ if rows * cols == 0 => Point::new(0, 0),
            Direction::Forward => Point::new(rows as isize, 0),
            Direction::Reversed => Point::new(-1, cols - 1),
        };
        Walk { cur, rows, cols, direction }
    }

    fn point(&self) -> Option<Point> {
        let Point { row, col } = self.cur;
        if row >= 0 && (row as usize) < self.rows && col < self.cols {
            Some(Point::new(row as usize, col))
        } else {
            None
        }
    }

    fn step(&mut self, step: Step) -> Result<(), EndOfSequence> {
        if self.rows * self.cols == 0 {
            return Err(EndOfSequence);
        }

        match (self.direction, step) {
            (Direction::Forward, Step::Next) | (Direction::Reversed, Step::Prev) => {
                self.successor()
            },
            (Direction::Forward, Step::Prev) | (Direction::Reversed, Step::Next) => {
                self.predecessor()
            },
        }
    }

    /// Next cell in row-major order.
    fn successor(&mut self) -> Result<(), EndOfSequence> {
        let last_col = self.cols - 1;
        match self.cur {
            Point { row, .. } if row == self.rows as isize => return Err(EndOfSequence),
            Point { col, .. } if col == last_col => {
                self.cur.row += 1;
                self.cur.col = 0;
            },
            _ => self.cur.col += 1,
        }
        Ok(())
    }

    /// Previous cell in row-major order.
    fn predecessor(&mut self) -> Result<(), EndOfSequence> {
        match self.cur {
            Point { row: -1, .. } => return Err(EndOfSequence),
            Point { col: 0, .. } => {
                self.cur.row -= 1;
                self.cur.col = self.cols - 1;
            },
            _ => self.cur.col -= 1,
        }
        Ok(())
    }
}

/// Position of a column iterator.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct ColumnWalk {
    row: isize,
    rows: usize,
    direction: Direction,
}

impl ColumnWalk {
    fn begin(rows: usize, direction: Direction) -> ColumnWalk {
        let row = match direction {
            Direction::Forward => 0,
            Direction::Reversed => rows as isize - 1,
        };
        ColumnWalk { row, rows, direction }
    }

    fn end(rows: usize, direction: Direction) -> ColumnWalk {
        let row = match direction {
            Direction::Forward => rows as isize,
            Direction::Reversed => -1,
        };
        ColumnWalk { row, rows, direction }
    }

    fn row(&self) -> Option<usize> {
        if self.row >= 0 && (self.row as usize) < self.rows {
            Some(self.row as usize)
        } else {
            None
        }
    }

    fn step(&mut self, step: Step) -> Result<(), EndOfSequence> {
        let delta = match (self.direction, step) {
            (Direction::Forward, Step::Next) | (Direction::Reversed, Step::Prev) => 1,
            (Direction::Forward, Step::Prev) | (Direction::Reversed, Step::Next) => -1,
        };

        let next = self.row + delta;
        if next < -1 || next > self.rows as isize {
            return Err(EndOfSequence);
        }

        self.row = next;
        Ok(())
    }
}

/// Read-only iterator over every cell of a grid in row-major order.
pub struct GridIter<'a, T> {
    grid: &'a Grid<T>,
    walk: Walk,
}

impl<'a, T> GridIter<'a, T> {
    fn new(grid: &'a Grid<T>, walk: Walk) -> GridIter<'a, T> {
        GridIter { grid, walk }
    }

    /// Position of the cell under the cursor.
    pub fn point(&self) -> Option<Point> {
        self.walk.point()
    }

    /// Cell under the cursor, borrowed for the lifetime of the grid.
    pub fn cell(&self) -> Option<&'a T> {
        let grid = self.grid;
        self.walk.point().map(|point| &grid[point])
    }
}

impl<'a, T> Clone for GridIter<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for GridIter<'a, T> {}

impl<'a, T> fmt::Debug for GridIter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridIter")
            .field("position", &self.walk.cur)
            .field("direction", &self.walk.direction)
            .finish()
    }
}

/// Iterators are equal when they reference the same cell of the same grid.
impl<'a, T> PartialEq for GridIter<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.grid, other.grid) && self.walk.cur == other.walk.cur
    }
}

impl<'a, T> Eq for GridIter<'a, T> {}

impl<'a, T> GridCursor for GridIter<'a, T> {
    type Cell = T;

    fn current(&self) -> Option<&T> {
        self.cell()
    }

    fn advance(&mut self, step: Step) -> Result<(), EndOfSequence> {
        self.walk.step(step)
    }

    fn direction(&self) -> Direction {
        self.walk.direction
    }
}

impl<'a, T> Iterator for GridIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.cell()?;
        let _ = self.walk.step(Step::Next);
        Some(cell)
    }
}

impl<'a, T> BidirectionalIterator for GridIter<'a, T> {
    fn prev(&mut self) -> Option<Self::Item> {
        self.walk.step(Step::Prev).ok()?;
        self.cell()
    }
}

impl<'a, T> Add<usize> for GridIter<'a, T> {
    type Output = GridIter<'a, T>;

    /// Advance `rhs` cells, stopping on the sentinel.
    fn add(mut self, rhs: usize) -> GridIter<'a, T> {
        let _ = self.forward(rhs);
        self
    }
}

impl<'a, T> Sub<usize> for GridIter<'a, T> {
    type Output = GridIter<'a, T>;

    /// Retreat `rhs` cells, stopping on the sentinel.
    fn sub(mut self, rhs: usize) -> GridIter<'a, T> {
        let _ = self.backward(rhs);
        self
    }
}

/// Iterator over every cell of a grid in row-major order which allows writes.
///
/// Moves only through [`GridCursor`]; unlike [`GridIter`] it has no offset operators and no
/// equality, since it holds the grid's only borrow.
pub struct GridIterMut<'a, T> {
    grid: &'a mut Grid<T>,
    walk: Walk,
}

impl<'a, T> GridIterMut<'a, T> {
    pub fn point(&self) -> Option<Point> {
        self.walk.point()
    }

    /// Mutable cell under the cursor.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        let point = self.walk.point()?;
        Some(&mut self.grid[point])
    }
}

impl<'a, T> GridCursor for GridIterMut<'a, T> {
    type Cell = T;

    fn current(&self) -> Option<&T> {
        let point = self.walk.point()?;
        Some(&self.grid[point])
    }

    fn advance(&mut self, step: Step) -> Result<(), EndOfSequence> {
        self.walk.step(step)
    }

    fn direction(&self) -> Direction {
        self.walk.direction
    }
}

/// Read-only iterator over the cells of a single column.
pub struct ColumnIter<'a, T> {
    grid: &'a Grid<T>,
    col: usize,
    walk: ColumnWalk,
}

impl<'a, T> ColumnIter<'a, T> {
    /// Column this iterator is fixed to.
    pub fn column(&self) -> usize {
        self.col
    }

    /// Row of the cell under the cursor.
    pub fn row(&self) -> Option<usize> {
        self.walk.row()
    }

    /// Cell under the cursor, borrowed for the lifetime of the grid.
    pub fn cell(&self) -> Option<&'a T> {
        let grid = self.grid;
        let col = self.col;
        self.walk.row().map(|row| &grid[row][col])
    }
}

impl<'a, T> Clone for ColumnIter<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for ColumnIter<'a, T> {}

impl<'a, T> fmt::Debug for ColumnIter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnIter")
            .field("column", &self.col)
            .field("row", &self.walk.row)
            .field("direction", &self.walk.direction)
            .finish()
    }
}

impl<'a, T> PartialEq for ColumnIter<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.grid, other.grid) && self.col == other.col && self.walk.row == other.walk.row
    }
}

impl<'a, T> Eq for ColumnIter<'a, T> {}

impl<'a, T> GridCursor for ColumnIter<'a, T> {
    type Cell = T;

    fn current(&self) -> Option<&T> {
        self.cell()
    }

    fn advance(&mut self, step: Step) -> Result<(), EndOfSequence> {
        self.walk.step(step)
    }

    fn direction(&self) -> Direction {
        self.walk.direction
    }
}

impl<'a, T> Iterator for ColumnIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.cell()?;
        let _ = self.walk.step(Step::Next);
        Some(cell)
    }
}

impl<'a, T> BidirectionalIterator for ColumnIter<'a, T> {
    fn prev(&mut self) -> Option<Self::Item> {
        self.walk.step(Step::Prev).ok()?;
        self.cell()
    }
}

impl<'a, T> Add<usize> for ColumnIter<'a, T> {
    type Output = ColumnIter<'a, T>;

    fn add(mut self, rhs: usize) -> ColumnIter<'a, T> {
        let _ = self.forward(rhs);
        self
    }
}

impl<'a, T> Sub<usize> for ColumnIter<'a, T> {
    type Output = ColumnIter<'a, T>;

    fn sub(mut self, rhs: usize) -> ColumnIter<'a, T> {
        let _ = self.backward(rhs);
        self
    }
}

/// Iterator over the cells of a single column which allows writes.
///
/// Moves only through [`GridCursor`]; unlike [`ColumnIter`] it has no offset operators and no
/// equality, since it holds the grid's only borrow.
pub struct ColumnIterMut<'a, T> {
    grid: &'a mut Grid<T>,
    col: usize,
    walk: ColumnWalk,
}

impl<'a, T> ColumnIterMut<'a, T> {
    pub fn row(&self) -> Option<usize> {
        self.walk.row()
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        let row = self.walk.row()?;
        Some(&mut self.grid[Point::new(row, self.col)])
    }
}

impl<'a, T> GridCursor for ColumnIterMut<'a, T> {
    type Cell = T;

    fn current(&self) -> Option<&T> {
        let row = self.walk.row()?;
        Some(&self.grid[row][self.col])
    }

    fn advance(&mut self, step: Step) -> Result<(), EndOfSequence> {
        self.walk.step(step)
    }

    fn direction(&self) -> Direction {
        self.walk.direction
    }
}

impl<T> Grid<T> {
    #[inline]
    fn check_column(&self, col: usize) -> Result<(), IndexError> {
        let cols = self.col_count();
        if col < cols {
            Ok(())
        } else {
            Err(IndexError::Column { index: col, cols })
        }
    }

    /// Iterator on the first cell.
    #[inline]
    pub fn begin(&self) -> GridIter<'_, T> {
        let (rows, cols) = self.dimensions();
        GridIter::new(self, Walk::begin(rows, cols, Direction::Forward))
    }

    /// Sentinel after the last cell.
    #[inline]
    pub fn end(&self) -> GridIter<'_, T> {
        let (rows, cols) = self.dimensions();
        GridIter::new(self, Walk::end(rows, cols, Direction::Forward))
    }

    /// Reversed iterator on the last cell.
    #[inline]
    pub fn rbegin(&self) -> GridIter<'_, T> {
        let (rows, cols) = self.dimensions();
        GridIter::new(self, Walk::begin(rows, cols, Direction::Reversed))
    }

    /// Reversed sentinel before the first cell.
    #[inline]
    pub fn rend(&self) -> GridIter<'_, T> {
        let (rows, cols) = self.dimensions();
        GridIter::new(self, Walk::end(rows, cols, Direction::Reversed))
    }

    /// Iterate over every cell in row-major order.
    #[inline]
    pub fn iter(&self) -> GridIter<'_, T> {
        self.begin()
    }

    /// Iterate over every cell in reverse row-major order.
    #[inline]
    pub fn iter_rev(&self) -> GridIter<'_, T> {
        self.rbegin()
    }

    #[inline]
    pub fn begin_mut(&mut self) -> GridIterMut<'_, T> {
        let (rows, cols) = self.dimensions();
        GridIterMut { grid: self, walk: Walk::begin(rows, cols, Direction::Forward) }
    }

    #[inline]
    pub fn rbegin_mut(&mut self) -> GridIterMut<'_, T> {
        let (rows, cols) = self.dimensions();
        GridIterMut { grid: self, walk: Walk::begin(rows, cols, Direction::Reversed) }
    }

    fn column_iter(&self, col: usize, walk: ColumnWalk) -> Result<ColumnIter<'_, T>, IndexError> {
        self.check_column(col)?;
        Ok(ColumnIter { grid: self, col, walk })
    }

    /// Iterator on the top cell of column `col`.
    pub fn begin_col(&self, col: usize) -> Result<ColumnIter<'_, T>, IndexError> {
        self.column_iter(col, ColumnWalk::begin(self.row_count(), Direction::Forward))
    }

    /// Sentinel below the bottom cell of column `col`.
    pub fn end_col(&self, col: usize) -> Result<ColumnIter<'_, T>, IndexError> {
        self.column_iter(col, ColumnWalk::end(self.row_count(), Direction::Forward))
    }

    /// Reversed iterator on the bottom cell of column `col`.
    pub fn rbegin_col(&self, col: usize) -> Result<ColumnIter<'_, T>, IndexError> {
        self.column_iter(col, ColumnWalk::begin(self.row_count(), Direction::Reversed))
    }

    /// Reversed sentinel above the top cell of column `col`.
    pub fn rend_col(&self, col: usize) -> Result<ColumnIter<'_, T>, IndexError> {
        self.column_iter(col, ColumnWalk::end(self.row_count(), Direction::Reversed))
    }

    /// Iterate over column `col` from top to bottom.
    #[inline]
    pub fn column(&self, col: usize) -> Result<ColumnIter<'_, T>, IndexError> {
        self.begin_col(col)
    }

    pub fn begin_col_mut(&mut self, col: usize) -> Result<ColumnIterMut<'_, T>, IndexError> {
        self.check_column(col)?;
        let walk = ColumnWalk::begin(self.row_count(), Direction::Forward);
        Ok(ColumnIterMut { grid: self, col, walk })
    }

    pub fn rbegin_col_mut(&mut self, col: usize) -> Result<ColumnIterMut<'_, T>, IndexError> {
        self.check_column(col)?;
        let walk = ColumnWalk::begin(self.row_count(), Direction::Reversed);
        Ok(ColumnIterMut { grid: self, col, walk })
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type IntoIter = GridIter<'a, T>;
    type Item = &'a T;

    #[inline]
    fn into_iter(self) -> GridIter<'a, T> {
        self.begin()
    }
}
