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

//! Tests for the grid.

use std::sync::{Arc, Mutex};

use super::{BidirectionalIterator, Grid, GridCursor};
use crate::diagnostics::{Diagnostic, Report, Reporter};
use crate::error::{EndOfSequence, Error, IndexError, ShapeError};
use crate::index::{Axis, Direction, Point, Step};

#[derive(Default)]
struct Recorder(Mutex<Vec<Diagnostic>>);

impl Report for Recorder {
    fn report(&self, diagnostic: &Diagnostic) {
        self.0.lock().unwrap().push(*diagnostic);
    }
}

fn recorded(grid: Grid<i32>) -> (Grid<i32>, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    (grid.with_reporter(Reporter::from(recorder.clone())), recorder)
}

/// 2x3 grid counting from 1.
fn small() -> Grid<i32> {
    grid![[1, 2, 3], [4, 5, 6]].unwrap()
}

fn rows<T>(grid: Grid<T>) -> Vec<Vec<T>> {
    grid.into_rows()
}

#[test]
fn construction() {
    let grid = small();
    assert_eq!(grid.dimensions(), (2, 3));
    assert_eq!(grid.size(), 6);
    assert!(!grid.is_square());

    assert_eq!(
        Grid::from_rows(vec![vec![1, 2], vec![3]]),
        Err(ShapeError::RaggedRow { row: 1, expected: 2, found: 1 })
    );

    let filled = Grid::filled(2, 2, 'x');
    assert!(filled.is_square());
    assert_eq!(rows(filled), vec![vec!['x', 'x'], vec!['x', 'x']]);
}

#[test]
fn empty_representations() {
    let none: Grid<i32> = Grid::new();
    let one_empty_row = Grid::from_row(Vec::<i32>::new());

    assert!(none.is_empty());
    assert!(one_empty_row.is_empty());
    assert_eq!(none.row_count(), 0);
    assert_eq!(one_empty_row.row_count(), 1);
    assert_eq!(one_empty_row.col_count(), 0);
    assert_eq!(none, one_empty_row);
    assert!(none.verify_dimensions().is_ok());
    assert!(one_empty_row.safe_verify_dimensions());
}

#[test]
fn clear() {
    let mut grid = small();
    grid.clear();

    assert!(grid.is_empty());
    assert_eq!(grid.row_count(), 0);
}

#[test]
fn cell_access() {
    let mut grid = small();

    assert_eq!(grid.at(1, 2), Ok(&6));
    assert_eq!(
        grid.at(2, 0),
        Err(IndexError::Cell { point: Point::new(2, 0), rows: 2, cols: 3 })
    );
    assert_eq!(grid.get(0, 3), None);
    assert_eq!(grid.safe_look(0, 1), Some(2));
    assert_eq!(grid.safe_look(9, 9), None);
    assert_eq!(grid[Point::new(1, 0)], 4);
    assert_eq!(grid[0][2], 3);

    *grid.at_mut(0, 0).unwrap() = 10;
    grid[Point::new(1, 1)] = 50;
    assert_eq!(rows(grid), vec![vec![10, 2, 3], vec![4, 50, 6]]);
}

#[test]
fn linear_access() {
    let mut grid = small();

    assert_eq!(grid.at_linear(0), Ok(&1));
    assert_eq!(grid.at_linear(4), Ok(&5));
    assert_eq!(grid.at_linear(6), Err(IndexError::Linear { index: 6, size: 6 }));

    *grid.at_linear_mut(5).unwrap() = 60;
    assert_eq!(grid.at(1, 2), Ok(&60));
}

#[test]
fn row_access() {
    let mut grid = small();

    assert_eq!(grid.row(1).unwrap().as_slice(), &[4, 5, 6]);
    assert_eq!(grid.row(2), Err(IndexError::Row { index: 2, rows: 2 }));

    grid.row_mut(0).unwrap().copy_from_slice(&[7, 8, 9]);
    assert_eq!(grid.row(0).unwrap().as_slice(), &[7, 8, 9]);
    assert!(grid.row_mut(5).is_err());
}

#[test]
fn iterate_forward() {
    let grid = small();

    assert_eq!(grid.iter().cloned().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(grid.begin() + 6, grid.end());
    assert_eq!(grid.end().point(), None);
    assert_eq!((grid.begin() + 4).point(), Some(Point::new(1, 1)));
    assert_eq!((grid.end() - 1).cell(), Some(&6));
}

#[test]
fn iterate_reversed() {
    let grid = small();

    assert_eq!(grid.iter_rev().cloned().collect::<Vec<_>>(), vec![6, 5, 4, 3, 2, 1]);
    assert_eq!(grid.rbegin() + 6, grid.rend());
    assert_eq!(grid.rbegin().direction(), Direction::Reversed);
    assert_eq!((grid.rend() - 1).cell(), Some(&1));
}

#[test]
fn iterator_prev() {
    let grid = small();
    let mut iter = grid.end();

    assert_eq!(iter.prev(), Some(&6));
    assert_eq!(iter.prev(), Some(&5));
    assert_eq!(iter.next(), Some(&5));
    assert_eq!(iter.next(), Some(&6));
    assert_eq!(iter.next(), None);
    assert_eq!(iter, grid.end());
}

#[test]
fn iterator_stops_on_sentinels() {
    let grid = small();

    let mut iter = grid.end();
    assert_eq!(iter.advance(Step::Next), Err(EndOfSequence));
    assert_eq!(iter, grid.end());

    let mut iter = grid.rend();
    assert_eq!(iter.advance(Step::Next), Err(EndOfSequence));
    assert_eq!(iter.advance(Step::Prev), Ok(()));
    assert_eq!(iter, grid.rbegin() + 5);

    assert_eq!(grid.begin() + 100, grid.end());
    assert_eq!((grid.begin() - 1).point(), None);
}

#[test]
fn iterators_of_empty_grid() {
    let grid: Grid<i32> = Grid::new();

    assert_eq!(grid.begin(), grid.end());
    assert_eq!(grid.rbegin(), grid.rend());
    assert_eq!(grid.begin().cell(), None);
    assert_eq!(grid.iter().count(), 0);

    let mut iter = grid.begin();
    assert_eq!(iter.advance(Step::Next), Err(EndOfSequence));
    assert_eq!(iter.advance(Step::Prev), Err(EndOfSequence));
}

#[test]
fn iterators_compare_by_grid() {
    let grid = small();
    let copy = grid.clone();

    assert_eq!(grid.begin(), grid.begin());
    assert_ne!(grid.begin(), copy.begin());
    assert_ne!(grid.begin(), grid.begin() + 1);
}

#[test]
fn mutable_iterators() {
    let mut grid = small();

    let mut cursor = grid.begin_mut();
    while let Some(cell) = cursor.current_mut() {
        *cell *= 10;
        cursor.advance(Step::Next).unwrap();
    }
    assert_eq!(cursor.advance(Step::Next), Err(EndOfSequence));

    let mut cursor = grid.rbegin_mut();
    *cursor.current_mut().unwrap() = 0;
    assert_eq!(cursor.point(), Some(Point::new(1, 2)));

    assert_eq!(rows(grid), vec![vec![10, 20, 30], vec![40, 50, 0]]);
}

#[test]
fn column_iterators() {
    let grid = grid![[1, 2], [3, 4], [5, 6]].unwrap();

    assert_eq!(grid.column(1).unwrap().cloned().collect::<Vec<_>>(), vec![2, 4, 6]);
    assert_eq!(grid.rbegin_col(0).unwrap().cloned().collect::<Vec<_>>(), vec![5, 3, 1]);
    assert_eq!(grid.begin_col(0).unwrap() + 3, grid.end_col(0).unwrap());
    assert_eq!(grid.rbegin_col(1).unwrap() + 3, grid.rend_col(1).unwrap());
    assert_ne!(grid.begin_col(0).unwrap(), grid.begin_col(1).unwrap());
    assert_eq!(grid.begin_col(2).err(), Some(IndexError::Column { index: 2, cols: 2 }));

    let mut iter = grid.end_col(1).unwrap();
    assert_eq!(iter.prev(), Some(&6));
    assert_eq!(iter.row(), Some(2));
    assert_eq!(iter.column(), 1);
}

#[test]
fn mutable_column_iterator() {
    let mut grid = grid![[1, 2], [3, 4]].unwrap();

    let mut cursor = grid.rbegin_col_mut(1).unwrap();
    *cursor.current_mut().unwrap() = 40;
    cursor.forward(1).unwrap();
    *cursor.current_mut().unwrap() = 20;
    assert_eq!(cursor.forward(2), Err(EndOfSequence));
    assert_eq!(cursor.current(), None);

    assert_eq!(rows(grid), vec![vec![1, 20], vec![3, 40]]);
}

#[test]
fn resize_keeps_order() {
    let mut grid = small();

    grid.resize(3, 2).unwrap();
    assert_eq!(rows(grid.clone()), vec![vec![1, 2], vec![3, 4], vec![5, 6]]);

    assert_eq!(
        grid.resize(4, 2).err(),
        Some(ShapeError::AreaMismatch { current: 6, requested: 8 })
    );
    assert_eq!(grid.dimensions(), (3, 2));

    grid.resize(2, 3).unwrap();
    assert_eq!(grid, small());
}

#[test]
fn resize_with_overflowing_area() {
    let mut grid = grid![[1, 2], [3, 4]].unwrap();

    assert_eq!(
        grid.resize(usize::MAX, 2).err(),
        Some(ShapeError::AreaMismatch { current: 4, requested: usize::MAX })
    );
    assert_eq!(rows(grid), vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn safe_resize_keeporder_with_overflowing_area() {
    let mut grid = grid![[1, 2], [3, 4]].unwrap();

    grid.safe_resize_keeporder(usize::MAX, 2, 0);
    assert_eq!(rows(grid), vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn safe_resize_keeporder() {
    let mut grid = small();

    grid.safe_resize_keeporder(2, 4, 0);
    assert_eq!(rows(grid.clone()), vec![vec![1, 2, 3, 4], vec![5, 6, 0, 0]]);

    grid.safe_resize_keeporder(1, 3, 0);
    assert_eq!(rows(grid), vec![vec![1, 2, 3]]);
}

#[test]
fn safe_resize_topleft() {
    let mut grid = small();

    grid.safe_resize_topleft(3, 2, 0);
    assert_eq!(rows(grid.clone()), vec![vec![1, 2], vec![4, 5], vec![0, 0]]);

    grid.safe_resize_topleft(2, 4, 9);
    assert_eq!(rows(grid.clone()), vec![vec![1, 2, 9, 9], vec![4, 5, 9, 9]]);

    let mut empty = Grid::new();
    empty.safe_resize_topleft(1, 2, 7);
    assert_eq!(rows(empty), vec![vec![7, 7]]);
}

#[test]
fn fill() {
    let mut grid = small();
    grid.fill(1, 2, 0);

    assert_eq!(rows(grid), vec![vec![0, 0]]);
}

#[test]
fn flips() {
    let mut grid = small();

    grid.flip_horizontal();
    assert_eq!(rows(grid.clone()), vec![vec![3, 2, 1], vec![6, 5, 4]]);

    grid.flip_horizontal().flip_vertical();
    assert_eq!(rows(grid), vec![vec![4, 5, 6], vec![1, 2, 3]]);
}

#[test]
fn transpose() {
    let mut grid = small();

    grid.transpose();
    assert_eq!(rows(grid.clone()), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);

    grid.transpose();
    assert_eq!(grid, small());
}

#[test]
fn rotations() {
    let mut grid = small();

    grid.rotate_cw();
    assert_eq!(rows(grid.clone()), vec![vec![4, 1], vec![5, 2], vec![6, 3]]);

    grid.rotate_ccw();
    assert_eq!(grid, small());

    grid.rotate_ccw();
    assert_eq!(rows(grid.clone()), vec![vec![3, 6], vec![2, 5], vec![1, 4]]);

    grid.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
    assert_eq!(rows(grid), vec![vec![3, 6], vec![2, 5], vec![1, 4]]);
}

#[test]
fn shift_horizontal() {
    let mut grid = small();

    grid.shift_horizontal(1).unwrap();
    assert_eq!(rows(grid.clone()), vec![vec![3, 1, 2], vec![6, 4, 5]]);

    grid.shift_horizontal(-4).unwrap();
    assert_eq!(grid, small());

    grid.shift_horizontal(-1).unwrap();
    assert_eq!(rows(grid.clone()), vec![vec![2, 3, 1], vec![5, 6, 4]]);

    grid.shift_horizontal(3).unwrap();
    assert_eq!(rows(grid), vec![vec![2, 3, 1], vec![5, 6, 4]]);
}

#[test]
fn shift_vertical() {
    let mut grid = grid![[1], [2], [3]].unwrap();

    grid.shift_vertical(1).unwrap();
    assert_eq!(rows(grid.clone()), vec![vec![3], vec![1], vec![2]]);

    grid.shift_vertical(-2).unwrap();
    assert_eq!(rows(grid.clone()), vec![vec![2], vec![3], vec![1]]);

    // Access after rotating the row buffer.
    assert_eq!(grid.at(0, 0), Ok(&2));
    assert_eq!(grid.at_linear(2), Ok(&1));
    assert_eq!(grid.iter_rev().cloned().collect::<Vec<_>>(), vec![1, 3, 2]);
}

#[test]
fn shift_with_fill() {
    let mut grid = small();

    grid.shift_horizontal_fill(1, 0).unwrap();
    assert_eq!(rows(grid.clone()), vec![vec![0, 1, 2], vec![0, 4, 5]]);

    grid.shift_vertical_fill(-1, 9).unwrap();
    assert_eq!(rows(grid.clone()), vec![vec![0, 4, 5], vec![9, 9, 9]]);

    grid.shift_horizontal_fill(-5, 7).unwrap();
    assert_eq!(rows(grid), vec![vec![7, 7, 7], vec![7, 7, 7]]);
}

#[test]
fn shift_zero_sized_axis() {
    let mut grid: Grid<i32> = Grid::new();

    assert_eq!(grid.shift_horizontal(1).err(), Some(ShapeError::ZeroSizedAxis(Axis::Column)));
    assert_eq!(grid.shift_vertical(1).err(), Some(ShapeError::ZeroSizedAxis(Axis::Row)));
    assert!(grid.shift_vertical_fill(1, 0).is_err());

    let mut one_empty_row = Grid::from_row(Vec::<i32>::new());
    assert!(one_empty_row.shift_vertical(1).is_ok());
    assert!(one_empty_row.shift_horizontal(1).is_err());
}

#[test]
fn insert_rows_and_columns() {
    let mut grid = small();

    grid.insert_row(1, vec![7, 8, 9]).unwrap();
    grid.insert_col(0, vec![0, 0, 0]).unwrap();
    grid.append_col(vec![-1, -2, -3]).unwrap();
    assert_eq!(
        rows(grid),
        vec![vec![0, 1, 2, 3, -1], vec![0, 7, 8, 9, -2], vec![0, 4, 5, 6, -3]]
    );
}

#[test]
fn failed_insert_leaves_grid() {
    let mut grid = small();

    assert_eq!(
        grid.insert_row(0, vec![1]).err(),
        Some(Error::Shape(ShapeError::LengthMismatch { axis: Axis::Row, expected: 3, found: 1 }))
    );
    assert_eq!(
        grid.insert_col(4, vec![1, 2]).err(),
        Some(Error::Index(IndexError::Insert { axis: Axis::Column, position: 4, len: 3 }))
    );
    assert_eq!(grid, small());
}

#[test]
fn insert_into_empty_grid() {
    let mut grid = Grid::from_row(Vec::new());
    grid.insert_row(1, vec![1, 2]).unwrap();
    assert_eq!(rows(grid), vec![vec![1, 2]]);

    let mut grid = Grid::new();
    grid.append_col(vec![1, 2]).unwrap();
    grid.append_col(vec![3, 4]).unwrap();
    assert_eq!(rows(grid), vec![vec![1, 3], vec![2, 4]]);
}

#[test]
fn safe_insert_fits_length() {
    let mut grid = small();

    grid.safe_append_row(vec![7, 8, 9, 10], 0);
    grid.safe_insert_row(0, vec![-1], 0);
    grid.safe_insert_col(1, vec![5], 0);
    assert_eq!(
        rows(grid),
        vec![vec![-1, 5, 0, 0], vec![1, 0, 2, 3], vec![4, 0, 5, 6], vec![7, 0, 8, 9]]
    );
}

#[test]
fn safe_insert_out_of_range_is_reported() {
    let (mut grid, recorder) = recorded(small());

    grid.safe_insert_row(3, vec![0, 0, 0], 0);
    grid.safe_insertfill_col(4, 0);
    grid.safe_append_col(vec![7, 8], 0);

    assert_eq!(rows(grid), vec![vec![1, 2, 3, 7], vec![4, 5, 6, 8]]);
    assert_eq!(
        recorder.0.lock().unwrap().as_slice(),
        &[
            Diagnostic::InsertOutOfRange { axis: Axis::Row, position: 3, len: 2 },
            Diagnostic::InsertOutOfRange { axis: Axis::Column, position: 4, len: 3 },
        ]
    );
}

#[test]
fn reporter_follows_clones_and_results() {
    let (grid, recorder) = recorded(small());
    let mut mapped = grid.map(|cell| cell * 2);

    mapped.safe_insertfill_row(5, 0);
    assert_eq!(recorder.0.lock().unwrap().len(), 1);
}

#[test]
fn insertfill() {
    let mut grid = small();

    grid.insertfill_row(2, 0).unwrap();
    grid.insertfill_col(1, 9).unwrap();
    assert!(grid.insertfill_row(4, 0).is_err());
    assert_eq!(rows(grid), vec![vec![1, 9, 2, 3], vec![4, 9, 5, 6], vec![0, 9, 0, 0]]);
}

#[test]
fn delete_rows_and_columns() {
    let mut grid = grid![[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12]].unwrap();

    grid.delete_row(1).unwrap();
    grid.delete_col(0).unwrap();
    assert_eq!(rows(grid.clone()), vec![vec![2, 3, 4], vec![10, 11, 12]]);

    assert_eq!(grid.delete_row(2).err(), Some(IndexError::Row { index: 2, rows: 2 }));
    assert_eq!(grid.delete_col(3).err(), Some(IndexError::Column { index: 3, cols: 3 }));

    grid.delete_cols(1, 3).unwrap();
    assert_eq!(rows(grid.clone()), vec![vec![2], vec![10]]);

    grid.delete_rows(2, 1).unwrap();
    assert_eq!(grid.row_count(), 2);
    assert_eq!(
        grid.delete_rows(0, 3).err(),
        Some(IndexError::Range { axis: Axis::Row, start: 0, end: 3, len: 2 })
    );

    grid.delete_rows(0, 2).unwrap();
    assert!(grid.is_empty());
}

#[test]
fn map_and_map2() {
    let grid = small();

    let text = grid.map(|cell| cell.to_string());
    assert_eq!(text.at(1, 2).unwrap(), "6");
    assert_eq!(grid, small());

    let other = grid![[1.5, 1.5, 1.5], [0.5, 0.5, 0.5]].unwrap();
    let combined = grid.map2(&other, |&a, &b| f64::from(a) * b).unwrap();
    assert_eq!(rows(combined), vec![vec![1.5, 3.0, 4.5], vec![2.0, 2.5, 3.0]]);

    let transposed = grid.clone().transpose().clone();
    assert_eq!(
        grid.map2(&transposed, |a, b| a + b).err(),
        Some(ShapeError::DimensionMismatch { left: (2, 3), right: (3, 2) })
    );
}

#[test]
fn map_inplace() {
    let mut grid = small();
    grid.map_inplace(|cell| cell - 1);

    assert_eq!(rows(grid), vec![vec![0, 1, 2], vec![3, 4, 5]]);
}

#[test]
fn fold_order() {
    let grid = grid![['a', 'b'], ['c', 'd']].unwrap();

    let left = grid.foldl(String::from(">"), |mut acc, c| {
        acc.push(*c);
        acc
    });
    assert_eq!(left.unwrap(), ">abcd");

    let right = grid.foldr(String::from("<"), |c, mut acc| {
        acc.push(*c);
        acc
    });
    assert_eq!(right.unwrap(), "<dcba");

    let col = grid.foldl_col(1, String::new(), |mut acc, c| {
        acc.push(*c);
        acc
    });
    assert_eq!(col.unwrap(), "bd");

    let col = grid.foldr_col(0, String::new(), |c, mut acc| {
        acc.push(*c);
        acc
    });
    assert_eq!(col.unwrap(), "ca");
}

#[test]
fn seeded_folds_skip_first_element() {
    let grid = small();

    assert_eq!(grid.foldl_seeded(100, |acc, cell| acc + cell), Ok(120));
    assert_eq!(grid.foldr_seeded(100, |cell, acc| acc + cell), Ok(115));
    assert_eq!(grid.foldl_col_seeded(0, 100, |acc, cell| acc + cell), Ok(104));
    assert_eq!(grid.foldr_col_seeded(2, 100, |cell, acc| acc + cell), Ok(103));

    assert_eq!(grid.foldl1(|acc, cell| acc - cell), Ok(1 - 2 - 3 - 4 - 5 - 6));
    assert_eq!(grid.foldr1(|cell, acc| cell - acc), Ok(1 - (2 - (3 - (4 - (5 - 6))))));
    assert_eq!(grid.foldl1_col(2, |acc, cell| acc * cell), Ok(18));
    assert_eq!(grid.foldr1_col(1, |cell, acc| cell - acc), Ok(2 - 5));
}

#[test]
fn folds_on_empty_grid() {
    let grid: Grid<i32> = Grid::new();

    assert_eq!(grid.foldl(0, |acc, cell| acc + cell), Err(ShapeError::Empty));
    assert_eq!(grid.foldr1(|cell, acc| acc + cell), Err(ShapeError::Empty));
    assert_eq!(grid.sum(), Err(ShapeError::Empty));
    assert_eq!(
        grid.foldl_col(0, 0, |acc, cell| acc + cell),
        Err(Error::Shape(ShapeError::Empty))
    );

    let grid = small();
    assert_eq!(
        grid.foldl_col(3, 0, |acc, cell| acc + cell),
        Err(Error::Index(IndexError::Column { index: 3, cols: 3 }))
    );
}

#[test]
fn sums_and_products() {
    let grid = small();

    assert_eq!(grid.sum(), Ok(21));
    assert_eq!(grid.product(), Ok(720));
    assert_eq!(grid.sum_col(1), Ok(7));
    assert_eq!(grid.product_col(2), Ok(18));
    assert!(grid.sum_col(3).is_err());
}

#[test]
fn all_and_any() {
    let grid = small();

    assert!(grid.all(|&cell| cell > 0));
    assert!(!grid.all(|&cell| cell > 1));
    assert!(grid.any(|&cell| cell == 6));
    assert!(!grid.any(|&cell| cell > 6));

    let empty: Grid<i32> = Grid::new();
    assert!(empty.all(|_| false));
    assert!(!empty.any(|_| true));
}

#[test]
fn grid_operators() {
    let grid = small();
    let ones = Grid::filled(2, 3, 1);

    assert_eq!(rows((&grid + &ones).unwrap()), vec![vec![2, 3, 4], vec![5, 6, 7]]);
    assert_eq!(rows((&grid * &grid).unwrap()), vec![vec![1, 4, 9], vec![16, 25, 36]]);
    let fours = Grid::filled(2, 3, 4);
    assert_eq!(rows((&grid % &fours).unwrap()), vec![vec![1, 2, 3], vec![0, 1, 2]]);
    assert_eq!(
        (&grid - &Grid::filled(3, 2, 1)).err(),
        Some(ShapeError::DimensionMismatch { left: (2, 3), right: (3, 2) })
    );
    assert_eq!(rows(-&grid), vec![vec![-1, -2, -3], vec![-4, -5, -6]]);
}

#[test]
fn scalar_operators() {
    let grid = small();

    assert_eq!(rows(&grid * 2), vec![vec![2, 4, 6], vec![8, 10, 12]]);
    assert_eq!(rows(&grid / 2), vec![vec![0, 1, 1], vec![2, 2, 3]]);
    assert_eq!(rows(10_i32 - &grid), vec![vec![9, 8, 7], vec![6, 5, 4]]);
    assert_eq!(rows(grid.clone() + 1), vec![vec![2, 3, 4], vec![5, 6, 7]]);

    let halves = Grid::filled(1, 2, 1.0_f64) / 2.0;
    assert_eq!(rows(halves), vec![vec![0.5, 0.5]]);
}

#[test]
fn boolean_operators() {
    let flags = grid![[true, false], [false, true]].unwrap();
    let mask = grid![[true, true], [false, false]].unwrap();

    assert_eq!(rows(!&flags), vec![vec![false, true], vec![true, false]]);
    assert_eq!(rows((&flags & &mask).unwrap()), vec![vec![true, false], vec![false, false]]);
    assert_eq!(rows((&flags | &mask).unwrap()), vec![vec![true, true], vec![false, true]]);
    assert_eq!(rows(&flags ^ true), vec![vec![false, true], vec![true, false]]);
}

#[test]
fn comparisons() {
    let grid = small();
    let threes = Grid::filled(2, 3, 3);

    assert_eq!(
        rows(grid.lt_elementwise(&threes).unwrap()),
        vec![vec![true, true, false], vec![false, false, false]]
    );
    assert_eq!(
        rows(grid.eq_scalar(&5)),
        vec![vec![false, false, false], vec![false, true, false]]
    );
    assert_eq!(
        rows(grid.ge_scalar(&3)),
        vec![vec![false, false, true], vec![true, true, true]]
    );
    assert!(grid.ne_elementwise(&Grid::new()).is_err());
}

#[test]
fn display() {
    assert_eq!(small().to_string(), "1\t2\t3\t\n4\t5\t6\t\n");
    assert_eq!(Grid::<i32>::new().to_string(), "");
}

#[test]
fn debug() {
    assert_eq!(format!("{:?}", small()), "[[1, 2, 3], [4, 5, 6]]");
}

#[test]
fn conversions() {
    use std::convert::TryFrom;

    let grid = Grid::try_from(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let back: Vec<Vec<i32>> = grid.into();
    assert_eq!(back, vec![vec![1, 2], vec![3, 4]]);

    assert!(Grid::<i32>::try_from(vec![vec![1], vec![]]).is_err());
    assert_eq!(Grid::from(vec![1, 2]).dimensions(), (1, 2));
    assert_eq!((&small()).into_iter().count(), 6);
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let grid = small();

    let json = serde_json::to_string(&grid).unwrap();
    assert_eq!(json, "[[1,2,3],[4,5,6]]");

    let mut shifted = grid.clone();
    shifted.shift_vertical(1).unwrap();
    assert_eq!(serde_json::to_string(&shifted).unwrap(), "[[4,5,6],[1,2,3]]");

    let parsed: Grid<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, grid);

    let ragged = serde_json::from_str::<Grid<i32>>("[[1,2],[3]]");
    assert!(ragged.unwrap_err().to_string().contains("Rows not of equal length"));
}
