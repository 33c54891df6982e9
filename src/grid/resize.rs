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

//! Grid refill and resize.

use std::cmp::Ordering;

use log::{debug, trace};

use crate::error::ShapeError;
use crate::grid::row::Row;
use crate::grid::Grid;

/// Split row-major `cells` into `rows` rows of `cols` cells.
fn rechunk<T>(cells: Vec<T>, rows: usize, cols: usize) -> Vec<Row<T>> {
    let mut cells = cells.into_iter();
    (0..rows).map(|_| Row::from_vec(cells.by_ref().take(cols).collect())).collect()
}

impl<T> Grid<T> {
    /// All cells in row-major order, leaving the grid without rows.
    fn take_cells(&mut self) -> Vec<T> {
        self.raw.take_all().into_iter().flat_map(Row::into_vec).collect()
    }

    /// Reinterpret the cells as a `rows` by `cols` grid, keeping their row-major order.
    ///
    /// Fails if the new shape holds a different number of cells, or if its area overflows
    /// `usize`, reported as a request for `usize::MAX` cells.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<&mut Grid<T>, ShapeError> {
        let current = self.size();
        match rows.checked_mul(cols) {
            Some(requested) if requested == current => (),
            requested => {
                debug!("Cannot resize {} cells into a {}x{} grid", current, rows, cols);
                let requested = requested.unwrap_or(usize::MAX);
                return Err(ShapeError::AreaMismatch { current, requested });
            },
        }

        if self.dimensions() != (rows, cols) {
            let cells = self.take_cells();
            self.raw.replace_inner(rechunk(cells, rows, cols));
        }

        Ok(self)
    }
}

impl<T: Clone> Grid<T> {
    /// Replace the contents with a `rows` by `cols` grid of `value`.
    pub fn fill(&mut self, rows: usize, cols: usize, value: T) -> &mut Grid<T> {
        self.raw.replace_inner(vec![Row::new(cols, &value); rows]);
        self
    }

    /// Change the shape to `rows` by `cols`, keeping the row-major order of the cells.
    ///
    /// Trailing cells are dropped when the new shape is smaller; cells of `backup` are added at
    /// the end when it is bigger. Shapes whose area overflows `usize` leave the grid unchanged.
    pub fn safe_resize_keeporder(&mut self, rows: usize, cols: usize, backup: T) -> &mut Grid<T> {
        let area = match rows.checked_mul(cols) {
            Some(area) => area,
            None => {
                trace!("Ignoring resize to {}x{}, area overflows", rows, cols);
                return self;
            },
        };
        let mut cells = self.take_cells();

        if cells.len() != area {
            trace!("Resizing {} cells to {} keeping order", cells.len(), area);
        }
        cells.resize(area, backup);

        self.raw.replace_inner(rechunk(cells, rows, cols));
        self
    }

    /// Change the shape to `rows` by `cols`, keeping every cell at its `(row, col)` position.
    ///
    /// Rows and columns past the new bounds are dropped, new ones are filled with `backup`.
    pub fn safe_resize_topleft(&mut self, rows: usize, cols: usize, backup: T) -> &mut Grid<T> {
        match self.col_count().cmp(&cols) {
            Ordering::Less => self.grow_columns(cols, &backup),
            Ordering::Greater => self.shrink_columns(cols),
            Ordering::Equal => (),
        }

        match self.row_count().cmp(&rows) {
            Ordering::Less => self.grow_rows(rows, cols, &backup),
            Ordering::Greater => self.shrink_rows(rows),
            Ordering::Equal => (),
        }

        self
    }

    /// Add columns of `template` to the right edge.
    fn grow_columns(&mut self, cols: usize, template: &T) {
        for row in self.raw.iter_mut() {
            row.grow(cols, template);
        }
    }

    /// Remove columns from the right edge.
    fn shrink_columns(&mut self, cols: usize) {
        for row in self.raw.iter_mut() {
            row.shrink(cols);
        }
    }

    /// Add rows of `template` to the bottom edge.
    fn grow_rows(&mut self, rows: usize, cols: usize, template: &T) {
        for _ in self.row_count()..rows {
            self.raw.push(Row::new(cols, template));
        }
    }

    /// Remove rows from the bottom edge.
    fn shrink_rows(&mut self, rows: usize) {
        self.raw.truncate(rows);
    }
}
