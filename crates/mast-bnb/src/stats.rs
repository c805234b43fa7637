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

use mast_search::stats::{SolverStatistics, SolverStatisticsBuilder};
use std::time::Duration;

/// Statistics collected during the execution of the matrix solver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BnbSolverStatistics {
    /// Receiver orderings visited.
    pub permutations_explored: u64,
    /// Sweeps started, one per ordering and starting row.
    pub sweeps: u64,
    /// Columns processed across all sweeps.
    pub columns_swept: u64,
    /// Branches created, including the root branch of every sweep.
    pub branches_created: u64,
    /// Branches created for rows other than the cheapest one of a column.
    pub forks: u64,
    /// Branches discarded because their total reached the incumbent bound.
    pub prunings_bound: u64,
    /// The largest number of branches alive at once.
    pub max_live_branches: u64,
    /// Strictly improving plans found.
    pub solutions_found: u64,
    /// Steps reported to the search monitor.
    pub steps: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl BnbSolverStatistics {
    #[inline]
    pub fn on_permutation(&mut self) {
        self.permutations_explored = self.permutations_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_sweep(&mut self) {
        self.sweeps = self.sweeps.saturating_add(1);
        self.branches_created = self.branches_created.saturating_add(1);
    }

    #[inline]
    pub fn on_column_swept(&mut self) {
        self.columns_swept = self.columns_swept.saturating_add(1);
    }

    #[inline]
    pub fn on_fork(&mut self) {
        self.forks = self.forks.saturating_add(1);
        self.branches_created = self.branches_created.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub fn on_prunings_bound(&mut self, count: usize) {
        self.prunings_bound = self.prunings_bound.saturating_add(count as u64);
    }

    #[inline]
    pub fn on_live_branches(&mut self, live: usize) {
        self.max_live_branches = self.max_live_branches.max(live as u64);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_step(&mut self) {
        self.steps = self.steps.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl From<&BnbSolverStatistics> for SolverStatistics {
    fn from(stats: &BnbSolverStatistics) -> Self {
        SolverStatisticsBuilder::new()
            .solutions_found(stats.solutions_found)
            .steps(stats.steps)
            .solve_duration(stats.time_total)
            .build()
    }
}

impl std::fmt::Display for BnbSolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Mast-BnB Solver Statistics:")?;
        writeln!(f, "  Permutations explored: {}", self.permutations_explored)?;
        writeln!(f, "  Sweeps:                {}", self.sweeps)?;
        writeln!(f, "  Columns swept:         {}", self.columns_swept)?;
        writeln!(f, "  Branches created:      {}", self.branches_created)?;
        writeln!(f, "  Forks:                 {}", self.forks)?;
        writeln!(f, "  Prunings (bound):      {}", self.prunings_bound)?;
        writeln!(f, "  Max live branches:     {}", self.max_live_branches)?;
        writeln!(f, "  Solutions found:       {}", self.solutions_found)?;
        writeln!(f, "  Total time:            {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_increment() {
        let mut stats = BnbSolverStatistics::default();
        stats.on_permutation();
        stats.on_sweep();
        stats.on_sweep();
        stats.on_fork();
        stats.on_pruning_bound();
        stats.on_prunings_bound(3);
        stats.on_prunings_bound(0);
        stats.on_column_swept();
        stats.on_solution_found();
        stats.on_step();

        assert_eq!(stats.permutations_explored, 1);
        assert_eq!(stats.sweeps, 2);
        assert_eq!(stats.forks, 1);
        assert_eq!(stats.branches_created, 3);
        assert_eq!(stats.prunings_bound, 4);
        assert_eq!(stats.columns_swept, 1);
        assert_eq!(stats.solutions_found, 1);
        assert_eq!(stats.steps, 1);
    }

    #[test]
    fn test_live_branches_keeps_maximum() {
        let mut stats = BnbSolverStatistics::default();
        stats.on_live_branches(3);
        stats.on_live_branches(1);
        stats.on_live_branches(2);
        assert_eq!(stats.max_live_branches, 3);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = BnbSolverStatistics {
            forks: u64::MAX,
            branches_created: u64::MAX,
            ..Default::default()
        };
        stats.on_fork();
        assert_eq!(stats.forks, u64::MAX);
        assert_eq!(stats.branches_created, u64::MAX);
    }

    #[test]
    fn test_into_solver_statistics() {
        let stats = BnbSolverStatistics {
            solutions_found: 4,
            steps: 17,
            time_total: Duration::from_millis(250),
            ..Default::default()
        };
        let general = SolverStatistics::from(&stats);
        assert_eq!(general.solutions_found, 4);
        assert_eq!(general.steps, 17);
        assert_eq!(general.solve_duration, Duration::from_millis(250));
    }

    #[test]
    fn test_display_lists_counters() {
        let stats = BnbSolverStatistics {
            forks: 5,
            ..Default::default()
        };
        let text = format!("{}", stats);
        assert!(text.starts_with("Mast-BnB Solver Statistics:\n"));
        assert!(text.contains("  Forks:                 5\n"));
    }
}
