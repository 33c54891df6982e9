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

//! Diagnostics emitted by the `safe_` operations when they skip a request.
//!
//! Safe operations never fail. When they have to ignore a request, they describe what happened
//! through the [`Report`] held by the grid. By default this ends up in the `log` facade.

use std::fmt;
use std::sync::Arc;

use log::warn;

use crate::index::Axis;

/// Event emitted when a safe operation leaves the grid unchanged.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Diagnostic {
    /// Insertion of a row or column past the end of its axis.
    InsertOutOfRange { axis: Axis, position: usize, len: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Diagnostic::InsertOutOfRange { axis, position, len } => write!(
                f,
                "Attempted to insert {} at index {}, but grid has only {} of them; grid unchanged",
                axis, position, len
            ),
        }
    }
}

/// Sink for [`Diagnostic`]s.
pub trait Report: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forward every diagnostic to `log::warn!`.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogReport;

impl Report for LogReport {
    fn report(&self, diagnostic: &Diagnostic) {
        warn!("{}", diagnostic);
    }
}

/// Shared handle to the [`Report`] of a grid.
///
/// Cloning a grid clones the handle, so both grids report to the same sink.
#[derive(Clone)]
pub struct Reporter(Arc<dyn Report>);

impl Reporter {
    pub fn new<R: Report + 'static>(report: R) -> Reporter {
        Reporter(Arc::new(report))
    }

    #[inline]
    pub fn report(&self, diagnostic: Diagnostic) {
        self.0.report(&diagnostic);
    }
}

impl Default for Reporter {
    fn default() -> Reporter {
        Reporter::new(LogReport)
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Reporter")
    }
}

impl<R: Report + 'static> From<Arc<R>> for Reporter {
    fn from(report: Arc<R>) -> Reporter {
        Reporter(report)
    }
}
