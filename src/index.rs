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

//! Positions and orientations used to address cells of a grid.

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two axes of a grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Traversal orientation of an iterator.
///
/// A reversed iterator walks the grid from its last cell towards its first one, so stepping it
/// "forward" moves backwards through row-major order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Forward,
    Reversed,
}

impl Direction {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Reversed,
            Direction::Reversed => Direction::Forward,
        }
    }
}

/// Single motion of a cursor relative to its own [`Direction`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Step {
    /// Move one cell in the iterator's direction.
    Next,

    /// Move one cell against the iterator's direction.
    Prev,
}

/// Index in the grid using row, column notation.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<R = usize, C = usize> {
    pub row: R,
    pub col: C,
}

impl<R, C> Point<R, C> {
    pub fn new(row: R, col: C) -> Point<R, C> {
        Point { row, col }
    }
}

impl Point {
    /// Point addressed by the row-major linear index `index` in a grid with `cols` columns.
    ///
    /// `cols` must not be zero.
    #[inline]
    pub fn from_linear(index: usize, cols: usize) -> Point {
        debug_assert!(cols != 0);
        Point { row: index / cols, col: index % cols }
    }

    /// Row-major linear index of this point in a grid with `cols` columns.
    #[inline]
    pub fn to_linear(self, cols: usize) -> usize {
        self.row * cols + self.col
    }
}

impl<R: Ord, C: Ord> PartialOrd for Point<R, C> {
    fn partial_cmp(&self, other: &Point<R, C>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Ord, C: Ord> Ord for Point<R, C> {
    fn cmp(&self, other: &Point<R, C>) -> Ordering {
        match (self.row.cmp(&other.row), self.col.cmp(&other.col)) {
            (Ordering::Equal, ord) | (ord, _) => ord,
        }
    }
}

impl<R: fmt::Display, C: fmt::Display> fmt::Display for Point<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, col): (usize, usize)) -> Point {
        Point { row, col }
    }
}
