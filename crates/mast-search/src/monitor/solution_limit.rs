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

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::SolverNumeric,
};
use mast_model::{island::Island, plan::PowerPlan};

/// A monitor that terminates the search once a specified number of
/// improving plans has been reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionLimitMonitor<T> {
    solutions_found: u64,
    solution_limit: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> SolutionLimitMonitor<T>
where
    T: SolverNumeric,
{
    /// Creates a new `SolutionLimitMonitor`.
    #[inline]
    pub fn new(solution_limit: u64) -> Self {
        Self {
            solutions_found: 0,
            solution_limit,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the number of plans seen in the current search.
    #[inline]
    pub fn solutions_found(&self) -> u64 {
        self.solutions_found
    }

    #[inline]
    fn reached_limit(&self) -> bool {
        self.solutions_found >= self.solution_limit
    }
}

impl<T> SearchMonitor<T> for SolutionLimitMonitor<T>
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "SolutionLimitMonitor"
    }

    fn on_enter_search(&mut self, _island: &Island<T>) {
        self.solutions_found = 0;
    }

    fn on_exit_search(&mut self) {}

    fn on_solution_found(&mut self, _plan: &PowerPlan<T>) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    fn on_step(&mut self) {}

    fn search_command(&self) -> SearchCommand {
        if self.reached_limit() {
            SearchCommand::Terminate("solution limit reached".to_string())
        } else {
            SearchCommand::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SolutionLimitMonitor;
    use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
    use mast_model::{island::IslandBuilder, plan::PowerPlan};

    #[test]
    fn test_continue_before_limit_and_terminate_at_limit() {
        let mut monitor = SolutionLimitMonitor::<i64>::new(3);
        assert_eq!(monitor.search_command(), SearchCommand::Continue);

        monitor.on_solution_found(&PowerPlan::empty());
        monitor.on_solution_found(&PowerPlan::empty());
        assert_eq!(monitor.search_command(), SearchCommand::Continue);

        monitor.on_solution_found(&PowerPlan::empty());
        assert!(matches!(
            monitor.search_command(),
            SearchCommand::Terminate(_)
        ));
        assert_eq!(monitor.solutions_found(), 3);
    }

    #[test]
    fn test_zero_limit_terminates_immediately() {
        let monitor = SolutionLimitMonitor::<i64>::new(0);
        assert!(matches!(
            monitor.search_command(),
            SearchCommand::Terminate(_)
        ));
    }

    #[test]
    fn test_enter_search_resets_counter() {
        let mut monitor = SolutionLimitMonitor::<i64>::new(1);
        monitor.on_solution_found(&PowerPlan::empty());
        let island = IslandBuilder::<i64>::new(2, 2).build().unwrap();
        monitor.on_enter_search(&island);
        assert_eq!(monitor.solutions_found(), 0);
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
    }
}
