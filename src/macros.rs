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

/// Build a [`Grid`](crate::Grid) from row literals.
///
/// Expands to [`Grid::from_rows`](crate::Grid::from_rows), so the result is a
/// `Result<Grid<T>, ShapeError>` which is an error for ragged input.
///
/// ```
/// use array2d::grid;
///
/// let grid = grid![[1, 2, 3], [4, 5, 6]].unwrap();
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.col_count(), 3);
/// ```
#[macro_export]
macro_rules! grid {
    () => {
        $crate::Grid::from_rows(::std::vec::Vec::new())
    };
    ($([$($cell:expr),* $(,)?]),+ $(,)?) => {
        $crate::Grid::from_rows(vec![$(vec![$($cell),*]),+])
    };
}
