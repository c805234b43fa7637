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

//! Solver-independent run statistics.
//!
//! Every strategy keeps its own detailed counters and condenses them into a
//! `SolverStatistics` when it reports a `SolverOutcome`. Only what all
//! strategies share lives here.

use std::time::Duration;

/// What every strategy reports about a run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolverStatistics {
    /// Improving plans reported to the monitors.
    pub solutions_found: u64,
    /// Steps reported to the monitors.
    pub steps: u64,
    /// Wall-clock time of the run.
    pub solve_duration: Duration,
}

impl SolverStatistics {
    /// Returns the step rate of the run, or `None` for a run too short to
    /// measure.
    pub fn steps_per_second(&self) -> Option<f64> {
        let secs = self.solve_duration.as_secs_f64();
        (secs > 0.0).then(|| self.steps as f64 / secs)
    }
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solver Statistics:")?;
        writeln!(f, "  Solutions Found: {}", self.solutions_found)?;
        writeln!(f, "  Steps: {}", self.steps)?;
        if let Some(rate) = self.steps_per_second() {
            writeln!(f, "  Steps per Second: {:.0}", rate)?;
        }
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builds a `SolverStatistics` field by field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolverStatisticsBuilder {
    statistics: SolverStatistics,
}

impl SolverStatisticsBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn solutions_found(mut self, solutions_found: u64) -> Self {
        self.statistics.solutions_found = solutions_found;
        self
    }

    #[inline]
    pub fn steps(mut self, steps: u64) -> Self {
        self.statistics.steps = steps;
        self
    }

    #[inline]
    pub fn solve_duration(mut self, solve_duration: Duration) -> Self {
        self.statistics.solve_duration = solve_duration;
        self
    }

    #[inline]
    pub fn build(self) -> SolverStatistics {
        self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_every_field() {
        let stats = SolverStatisticsBuilder::new()
            .solutions_found(3)
            .steps(120)
            .solve_duration(Duration::from_millis(1500))
            .build();

        assert_eq!(
            stats,
            SolverStatistics {
                solutions_found: 3,
                steps: 120,
                solve_duration: Duration::from_millis(1500),
            }
        );
        assert_eq!(stats.steps_per_second(), Some(80.0));
    }

    #[test]
    fn test_display_lists_counters_and_rate() {
        let stats = SolverStatisticsBuilder::new()
            .solutions_found(2)
            .steps(17)
            .solve_duration(Duration::from_millis(1234))
            .build();

        let rendered = stats.to_string();
        assert!(rendered.starts_with("Solver Statistics:\n"));
        assert!(rendered.contains("Solutions Found: 2"));
        assert!(rendered.contains("Steps: 17"));
        assert!(rendered.contains("Steps per Second: 14"));
        assert!(rendered.contains("Solve Duration (secs): 1.234"));
    }

    #[test]
    fn test_zero_duration_has_no_rate() {
        let stats = SolverStatistics::default();
        assert_eq!(stats.steps_per_second(), None);

        let rendered = stats.to_string();
        assert!(!rendered.contains("Steps per Second"));
        assert!(rendered.contains("Solve Duration (secs): 0.000"));
    }
}
