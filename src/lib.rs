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
//
//! Resizable, row-major two-dimensional arrays.
//!
//! [`Grid`] keeps its rows rectangular at all times. Every structural edit comes in a strict
//! flavor which returns an error and leaves the grid untouched, and a `safe_` flavor which
//! clamps, pads or skips instead of failing.
#![deny(clippy::all, clippy::if_not_else, clippy::enum_glob_use)]

#[macro_use]
mod macros;

pub mod diagnostics;
pub mod error;
pub mod grid;
pub mod index;
pub mod text;

pub use crate::diagnostics::{Diagnostic, LogReport, Report, Reporter};
pub use crate::error::{EndOfSequence, Error, IndexError, ParseError, ShapeError};
pub use crate::grid::functional::{all, any};
pub use crate::grid::{Grid, Row};
pub use crate::index::{Axis, Direction, Point, Step};
pub use crate::text::TextFormat;

static_assertions::assert_impl_all!(Grid<u8>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Reporter: Send, Sync);
