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

//! # Strategy-Selecting Solver
//!
//! A high-level entry point that hides the concrete algorithms behind one
//! builder. The caller picks a `Strategy`, optionally a time limit, a
//! solution limit and progress logging; `Solver::solve` assembles the
//! matching monitor stack, runs the chosen algorithm and returns the shared
//! `SolverOutcome`.
//!
//! ## Strategies
//!
//! - `Strategy::Exact`: `mast_bnb::bnb::MatrixSolver`. Explores every
//!   ordering of the uncovered receivers. Cost grows factorially with their
//!   number.
//! - `Strategy::Greedy`: `mast_greedy::iterative::IterativeSolver`. One
//!   boost per round, at most one round per receiver. No optimality proof.
//!
//! ## Usage
//!
//! ```rust
//! use mast_core::geometry::point::Point;
//! use mast_model::island::IslandBuilder;
//! use mast_solver::solver::{SolverBuilder, Strategy};
//!
//! let mut builder = IslandBuilder::<i64>::new(10, 10);
//! builder
//!     .add_transmitter(1, Point::new(3, 5), 3)
//!     .add_receiver(1, Point::new(8, 8));
//! let island = builder.build().unwrap();
//!
//! let mut solver = SolverBuilder::new()
//!     .with_strategy(Strategy::Exact)
//!     .with_time_limit(std::time::Duration::from_secs(10))
//!     .build();
//! let outcome = solver.solve(&island);
//! assert!(outcome.is_optimal());
//! assert_eq!(outcome.plan().unwrap().total_increase(), 2);
//! ```

use mast_bnb::bnb::MatrixSolver;
use mast_greedy::iterative::IterativeSolver;
use mast_model::island::Island;
use mast_search::{
    monitor::{
        composite::CompositeMonitor, log::LogMonitor, solution_limit::SolutionLimitMonitor,
        time_limit::TimeLimitMonitor,
    },
    num::SolverNumeric,
    result::SolverOutcome,
    solver::PowerSolver,
};

/// The algorithm used by a `Solver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Exhaustive cost matrix search.
    #[default]
    Exact,
    /// Iterative greedy boosts.
    Greedy,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Exact => write!(f, "exact"),
            Strategy::Greedy => write!(f, "greedy"),
        }
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    name: String,
}

impl std::fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown strategy '{}', expected 'exact' or 'greedy'",
            self.name
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl std::str::FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Strategy::Exact),
            "greedy" => Ok(Strategy::Greedy),
            _ => Err(ParseStrategyError {
                name: s.to_string(),
            }),
        }
    }
}

/// Runs the configured strategy under the configured limits.
pub struct Solver<T> {
    strategy: Strategy,
    solution_limit: Option<u64>,
    time_limit: Option<std::time::Duration>,
    log_progress: bool,
    exact: MatrixSolver<T>,
    greedy: IterativeSolver,
}

impl<T> std::fmt::Debug for Solver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("strategy", &self.strategy)
            .field("solution_limit", &self.solution_limit)
            .field("time_limit", &self.time_limit)
            .field("log_progress", &self.log_progress)
            .finish()
    }
}

impl<T> Solver<T>
where
    T: SolverNumeric,
{
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn solution_limit(&self) -> Option<u64> {
        self.solution_limit
    }

    #[inline]
    pub fn has_solution_limit(&self) -> bool {
        self.solution_limit.is_some()
    }

    #[inline]
    pub fn time_limit(&self) -> Option<std::time::Duration> {
        self.time_limit
    }

    #[inline]
    pub fn has_time_limit(&self) -> bool {
        self.time_limit.is_some()
    }

    #[inline]
    pub fn logs_progress(&self) -> bool {
        self.log_progress
    }

    /// Computes a power plan for `island` with the configured strategy.
    pub fn solve(&mut self, island: &Island<T>) -> SolverOutcome<T> {
        let mut monitor = self.build_monitor();
        let solver: &mut dyn PowerSolver<T> = match self.strategy {
            Strategy::Exact => &mut self.exact,
            Strategy::Greedy => &mut self.greedy,
        };

        log::info!("solving {} with {}", island, solver.name());
        let outcome = solver.solve(island, &mut monitor);
        log::info!("{} finished: {}", solver.name(), outcome.result);

        debug_assert!(
            outcome
                .plan()
                .is_none_or(|plan| crate::verify::verify_plan(island, plan).is_ok()),
            "called `Solver::solve` and the strategy returned a plan that does not cover the island"
        );
        outcome
    }

    fn build_monitor<'a>(&self) -> CompositeMonitor<'a, T>
    where
        T: 'a,
    {
        let mut monitor = CompositeMonitor::with_capacity(3);
        if let Some(limit) = self.time_limit {
            monitor.add_monitor(TimeLimitMonitor::new(limit));
        }
        if let Some(limit) = self.solution_limit {
            monitor.add_monitor(SolutionLimitMonitor::new(limit));
        }
        if self.log_progress {
            monitor.add_monitor(LogMonitor::default());
        }
        monitor
    }
}

/// Configures a `Solver`.
#[derive(Debug, Clone, Default)]
pub struct SolverBuilder {
    strategy: Strategy,
    solution_limit: Option<u64>,
    time_limit: Option<std::time::Duration>,
    log_progress: bool,
}

impl SolverBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[inline]
    pub fn with_solution_limit(mut self, limit: u64) -> Self {
        self.solution_limit = Some(limit);
        self
    }

    #[inline]
    pub fn with_time_limit(mut self, limit: std::time::Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Prints a progress table to stdout while solving.
    #[inline]
    pub fn with_progress_log(mut self, enabled: bool) -> Self {
        self.log_progress = enabled;
        self
    }

    #[inline]
    pub fn build<T>(self) -> Solver<T>
    where
        T: SolverNumeric,
    {
        Solver {
            strategy: self.strategy,
            solution_limit: self.solution_limit,
            time_limit: self.time_limit,
            log_progress: self.log_progress,
            exact: MatrixSolver::new(),
            greedy: IterativeSolver::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::verify_plan;
    use mast_core::geometry::point::Point;
    use mast_model::{generator::IslandGenerator, island::IslandBuilder};
    use mast_search::result::{SolverResult, TerminationReason};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::time::Duration;

    type IntegerType = i64;

    fn p(x: IntegerType, y: IntegerType) -> Point<IntegerType> {
        Point::new(x, y)
    }

    fn radial() -> Island<IntegerType> {
        let mut builder = IslandBuilder::new(24, 24);
        builder
            .add_transmitter(1, p(12, 12), 1)
            .add_transmitter(2, p(12, 1), 1)
            .add_transmitter(3, p(12, 23), 1)
            .add_transmitter(4, p(1, 12), 1)
            .add_transmitter(5, p(23, 12), 1)
            .add_receiver(1, p(12, 6))
            .add_receiver(2, p(6, 12))
            .add_receiver(3, p(18, 12))
            .add_receiver(4, p(12, 18));
        builder.build().unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let solver = SolverBuilder::new().build::<IntegerType>();
        assert_eq!(solver.strategy(), Strategy::Exact);
        assert!(!solver.has_time_limit());
        assert!(!solver.has_solution_limit());
        assert!(!solver.logs_progress());
    }

    #[test]
    fn test_builder_settings() {
        let solver = SolverBuilder::new()
            .with_strategy(Strategy::Greedy)
            .with_time_limit(Duration::from_secs(3))
            .with_solution_limit(7)
            .build::<IntegerType>();
        assert_eq!(solver.strategy(), Strategy::Greedy);
        assert_eq!(solver.time_limit(), Some(Duration::from_secs(3)));
        assert_eq!(solver.solution_limit(), Some(7));
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("exact".parse::<Strategy>(), Ok(Strategy::Exact));
        assert_eq!(" Greedy ".parse::<Strategy>(), Ok(Strategy::Greedy));
        let error = "optimal".parse::<Strategy>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown strategy 'optimal', expected 'exact' or 'greedy'"
        );
        assert_eq!(Strategy::Greedy.to_string(), "greedy");
    }

    #[test]
    fn test_exact_beats_greedy_on_radial_island() {
        let island = radial();

        let exact = SolverBuilder::new().build().solve(&island);
        assert!(exact.is_optimal());
        assert_eq!(exact.plan().map(|p| p.total_increase()), Some(5));

        let greedy = SolverBuilder::new()
            .with_strategy(Strategy::Greedy)
            .build()
            .solve(&island);
        assert!(greedy.is_feasible());
        assert_eq!(greedy.reason, TerminationReason::HeuristicCompleted);
        assert_eq!(greedy.plan().map(|p| p.total_increase()), Some(16));
    }

    #[test]
    fn test_solution_limit_stops_exact_search() {
        let mut solver = SolverBuilder::new().with_solution_limit(1).build();
        let outcome = solver.solve(&radial());
        assert!(outcome.is_feasible());
        assert_eq!(
            outcome.reason,
            TerminationReason::Aborted("solution limit reached".to_string())
        );
    }

    #[test]
    fn test_generous_time_limit_does_not_interfere() {
        let mut solver = SolverBuilder::new()
            .with_time_limit(Duration::from_secs(60))
            .build();
        let outcome = solver.solve(&radial());
        assert!(outcome.is_optimal());
    }

    #[test]
    fn test_unsatisfiable_island() {
        let mut builder = IslandBuilder::<IntegerType>::new(5, 5);
        builder.add_receiver(1, p(2, 2));
        let island = builder.build().unwrap();

        for strategy in [Strategy::Exact, Strategy::Greedy] {
            let outcome = SolverBuilder::new()
                .with_strategy(strategy)
                .build()
                .solve(&island);
            assert_eq!(outcome.result, SolverResult::Infeasible);
        }
    }

    #[test]
    fn test_greedy_never_beats_exact() {
        let generator = IslandGenerator::new()
            .size(8, 14)
            .transmitters(1, 4)
            .receivers(1, 5)
            .power(0, 2);
        let mut exact = SolverBuilder::new().build();
        let mut greedy = SolverBuilder::new().with_strategy(Strategy::Greedy).build();

        for seed in 0..60 {
            let island = generator.generate(&mut ChaCha8Rng::seed_from_u64(seed));
            let exact_plan = exact.solve(&island).result.into_plan().unwrap();
            let greedy_plan = greedy.solve(&island).result.into_plan().unwrap();

            assert_eq!(verify_plan(&island, &exact_plan), Ok(()));
            assert_eq!(verify_plan(&island, &greedy_plan), Ok(()));
            assert!(exact_plan.total_increase() <= greedy_plan.total_increase());
        }
    }
}
