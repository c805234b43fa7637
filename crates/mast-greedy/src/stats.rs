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

/// Statistics collected during the execution of the iterative solver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreedySolverStatistics {
    /// Boost rounds started.
    pub iterations: u64,
    /// (transmitter, increase) proposals considered across all rounds.
    pub candidates_evaluated: u64,
    /// Transmitters boosted. A transmitter boosted twice counts twice.
    pub boosts: u64,
    /// Plans reported, at most one per run.
    pub solutions_found: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl GreedySolverStatistics {
    #[inline]
    pub fn on_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add(1);
    }

    #[inline]
    pub fn on_candidate(&mut self) {
        self.candidates_evaluated = self.candidates_evaluated.saturating_add(1);
    }

    #[inline]
    pub fn on_boost(&mut self) {
        self.boosts = self.boosts.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl From<&GreedySolverStatistics> for SolverStatistics {
    fn from(stats: &GreedySolverStatistics) -> Self {
        SolverStatisticsBuilder::new()
            .solutions_found(stats.solutions_found)
            .steps(stats.iterations)
            .solve_duration(stats.time_total)
            .build()
    }
}

impl std::fmt::Display for GreedySolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Mast-Greedy Solver Statistics:")?;
        writeln!(f, "  Iterations:           {}", self.iterations)?;
        writeln!(f, "  Candidates evaluated: {}", self.candidates_evaluated)?;
        writeln!(f, "  Boosts:               {}", self.boosts)?;
        writeln!(f, "  Solutions found:      {}", self.solutions_found)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_increment() {
        let mut stats = GreedySolverStatistics::default();
        stats.on_iteration();
        stats.on_iteration();
        stats.on_candidate();
        stats.on_boost();
        assert_eq!(stats.iterations, 2);
        assert_eq!(stats.candidates_evaluated, 1);
        assert_eq!(stats.boosts, 1);
        assert_eq!(stats.solutions_found, 0);
    }

    #[test]
    fn test_iterations_become_steps() {
        let stats = GreedySolverStatistics {
            iterations: 3,
            solutions_found: 1,
            ..Default::default()
        };
        let general = SolverStatistics::from(&stats);
        assert_eq!(general.steps, 3);
        assert_eq!(general.solutions_found, 1);
    }

    #[test]
    fn test_display_header() {
        let text = format!("{}", GreedySolverStatistics::default());
        assert!(text.starts_with("Mast-Greedy Solver Statistics:\n"));
        assert!(text.contains("  Boosts:               0\n"));
    }
}
