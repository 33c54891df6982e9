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

//! Error types returned by the strict grid operations.

use std::fmt;
use std::io;

use crate::index::{Axis, Point};

/// An operation would break, or depends on, the rectangular shape of the grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ShapeError {
    /// A row differs in length from row 0.
    RaggedRow { row: usize, expected: usize, found: usize },

    /// An inserted row or column does not match the orthogonal dimension.
    LengthMismatch { axis: Axis, expected: usize, found: usize },

    /// A resize would change the number of cells.
    AreaMismatch { current: usize, requested: usize },

    /// Two grids combined elementwise have different dimensions.
    DimensionMismatch { left: (usize, usize), right: (usize, usize) },

    /// The operation needs at least one cell.
    Empty,

    /// The operation divides by the length of an axis which is zero.
    ZeroSizedAxis(Axis),
}

impl ::std::error::Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ShapeError::RaggedRow { row, expected, found } => write!(
                f,
                "Rows not of equal length: row 0 has length {}, but row {} has length {}",
                expected, row, found
            ),
            ShapeError::LengthMismatch { axis, expected, found } => {
                write!(f, "Tried to add {} of length {}, expected length {}", axis, found, expected)
            },
            ShapeError::AreaMismatch { current, requested } => write!(
                f,
                "Resizing would change the element count from {} to {}",
                current, requested
            ),
            ShapeError::DimensionMismatch { left, right } => write!(
                f,
                "Grids of unequal dimensions: {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            ShapeError::Empty => f.write_str("Operation requires a non-empty grid"),
            ShapeError::ZeroSizedAxis(axis) => {
                write!(f, "Cannot shift along a {} axis of length zero", axis)
            },
        }
    }
}

/// A position argument lies outside the valid range for the current dimensions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum IndexError {
    /// Cell access outside of a `rows` by `cols` grid.
    Cell { point: Point, rows: usize, cols: usize },

    /// Row access past the last row.
    Row { index: usize, rows: usize },

    /// Column access past the last column.
    Column { index: usize, cols: usize },

    /// Linear access past the last cell.
    Linear { index: usize, size: usize },

    /// Insertion past the end of an axis of length `len`.
    Insert { axis: Axis, position: usize, len: usize },

    /// Deletion of a range reaching past the end of an axis of length `len`.
    Range { axis: Axis, start: usize, end: usize, len: usize },
}

impl ::std::error::Error for IndexError {}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            IndexError::Cell { point, rows, cols } => {
                write!(f, "Cell {} is outside of a {}x{} grid", point, rows, cols)
            },
            IndexError::Row { index, rows } => {
                write!(f, "Row {} does not exist in a grid with {} rows", index, rows)
            },
            IndexError::Column { index, cols } => {
                write!(f, "Column {} does not exist in a grid with {} columns", index, cols)
            },
            IndexError::Linear { index, size } => {
                write!(f, "Linear index {} is outside of a grid with {} cells", index, size)
            },
            IndexError::Insert { axis, position, len } => write!(
                f,
                "Tried to insert a {} at index {} into a grid with only {} of them",
                axis, position, len
            ),
            IndexError::Range { axis, start, end, len } => write!(
                f,
                "Tried to delete {}s [{}, {}) from a grid with {} of them",
                axis, start, end, len
            ),
        }
    }
}

/// Failure of an operation which can run into both error kinds.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error {
    Shape(ShapeError),
    Index(IndexError),
}

impl ::std::error::Error for Error {
    fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        match *self {
            Error::Shape(ref err) => Some(err),
            Error::Index(ref err) => Some(err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Shape(ref err) => write!(f, "Shape error: {}", err),
            Error::Index(ref err) => write!(f, "Index error: {}", err),
        }
    }
}

impl From<ShapeError> for Error {
    fn from(val: ShapeError) -> Error {
        Error::Shape(val)
    }
}

impl From<IndexError> for Error {
    fn from(val: IndexError) -> Error {
        Error::Index(val)
    }
}

/// Failure while building a grid from a text source.
#[derive(Debug)]
pub enum ParseError {
    Io(io::Error),
    Shape(ShapeError),
}

impl ::std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        match *self {
            ParseError::Io(ref err) => Some(err),
            ParseError::Shape(ref err) => Some(err),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ParseError::Io(ref err) => write!(f, "Unable to read grid text: {}", err),
            ParseError::Shape(ref err) => write!(f, "Grid text is not rectangular: {}", err),
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(val: io::Error) -> ParseError {
        ParseError::Io(val)
    }
}

impl From<ShapeError> for ParseError {
    fn from(val: ShapeError) -> ParseError {
        ParseError::Shape(val)
    }
}

/// A cursor was moved beyond one of its sentinel positions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EndOfSequence;

impl ::std::error::Error for EndOfSequence {}

impl fmt::Display for EndOfSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cursor moved past the end of its sequence")
    }
}
