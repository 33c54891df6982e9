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

//! Build grids from row-delimited text.
//!
//! Every character other than the row separator and the ignored characters becomes one cell,
//! converted by a caller-supplied function. A trailing line without a separator still becomes
//! the last row.

use std::io::Read;

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ShapeError};
use crate::grid::{Grid, Row};

/// Characters that structure the text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormat {
    /// Terminates a row.
    pub row_separator: char,

    /// Dropped wherever they appear.
    pub ignored: Vec<char>,
}

impl Default for TextFormat {
    fn default() -> TextFormat {
        TextFormat { row_separator: '\n', ignored: vec!['\r'] }
    }
}

impl TextFormat {
    fn split<T, F>(&self, text: &str, mut convert: F) -> Vec<Row<T>>
    where
        F: FnMut(char) -> T,
    {
        let mut rows = Vec::new();
        let mut current = Vec::new();

        for c in text.chars() {
            if c == self.row_separator {
                rows.push(Row::from_vec(current));
                current = Vec::new();
            } else if !self.ignored.contains(&c) {
                current.push(convert(c));
            }
        }

        if !current.is_empty() {
            rows.push(Row::from_vec(current));
        }

        trace!("Split text into {} rows", rows.len());

        rows
    }
}

impl<T> Grid<T> {
    /// Parse `text` in the default format, one cell per character.
    pub fn parse_str<F>(text: &str, convert: F) -> Result<Grid<T>, ShapeError>
    where
        F: FnMut(char) -> T,
    {
        Grid::parse_str_with(text, &TextFormat::default(), convert)
    }

    /// Parse `text` in `format`, one cell per character.
    ///
    /// Fails if the lines differ in length.
    pub fn parse_str_with<F>(
        text: &str,
        format: &TextFormat,
        convert: F,
    ) -> Result<Grid<T>, ShapeError>
    where
        F: FnMut(char) -> T,
    {
        let mut grid = Grid::new();
        grid.build_from_str_with(text, format, convert)?;
        Ok(grid)
    }

    /// Read `reader` to the end and parse it in the default format.
    pub fn parse_reader<R, F>(reader: R, convert: F) -> Result<Grid<T>, ParseError>
    where
        R: Read,
        F: FnMut(char) -> T,
    {
        Grid::parse_reader_with(reader, &TextFormat::default(), convert)
    }

    /// Read `reader` to the end and parse it in `format`.
    pub fn parse_reader_with<R, F>(
        reader: R,
        format: &TextFormat,
        convert: F,
    ) -> Result<Grid<T>, ParseError>
    where
        R: Read,
        F: FnMut(char) -> T,
    {
        let mut grid = Grid::new();
        grid.build_from_reader_with(reader, format, convert)?;
        Ok(grid)
    }

    /// Replace the content of this grid with `text` parsed in the default format.
    ///
    /// The grid is left unchanged on failure.
    pub fn build_from_str<F>(
        &mut self,
        text: &str,
        convert: F,
    ) -> Result<&mut Grid<T>, ShapeError>
    where
        F: FnMut(char) -> T,
    {
        self.build_from_str_with(text, &TextFormat::default(), convert)
    }

    pub fn build_from_str_with<F>(
        &mut self,
        text: &str,
        format: &TextFormat,
        convert: F,
    ) -> Result<&mut Grid<T>, ShapeError>
    where
        F: FnMut(char) -> T,
    {
        let parsed = self.sibling(format.split(text, convert));
        parsed.verify_dimensions()?;

        *self = parsed;
        Ok(self)
    }

    /// Replace the content of this grid with the text read from `reader`.
    ///
    /// The grid is left unchanged on failure.
    pub fn build_from_reader<R, F>(
        &mut self,
        reader: R,
        convert: F,
    ) -> Result<&mut Grid<T>, ParseError>
    where
        R: Read,
        F: FnMut(char) -> T,
    {
        self.build_from_reader_with(reader, &TextFormat::default(), convert)
    }

    pub fn build_from_reader_with<R, F>(
        &mut self,
        mut reader: R,
        format: &TextFormat,
        convert: F,
    ) -> Result<&mut Grid<T>, ParseError>
    where
        R: Read,
        F: FnMut(char) -> T,
    {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        Ok(self.build_from_str_with(&text, format, convert)?)
    }
}
