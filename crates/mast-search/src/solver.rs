// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The strategy seam between the high-level solver and concrete algorithms.

use crate::{monitor::search_monitor::SearchMonitor, num::SolverNumeric, result::SolverOutcome};
use mast_model::island::Island;

/// A power planning algorithm.
///
/// Implementors report lifecycle events to `monitor` and honour its
/// `search_command` at least once per unit of work they consider a step.
pub trait PowerSolver<T>
where
    T: SolverNumeric,
{
    /// Returns a short, human readable name.
    fn name(&self) -> &str;

    /// Computes a power plan for `island`.
    fn solve(&mut self, island: &Island<T>, monitor: &mut dyn SearchMonitor<T>)
    -> SolverOutcome<T>;
}

impl<T> std::fmt::Debug for dyn PowerSolver<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PowerSolver({})", self.name())
    }
}
