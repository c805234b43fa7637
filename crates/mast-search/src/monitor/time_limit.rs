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

//! # Time Limit Monitor
//!
//! Ends a search once its wall-clock budget is spent. The budget starts
//! counting in `on_enter_search`. Steps are cheap compared to reading the
//! clock, so the elapsed time is only compared against the budget on steps
//! where `(steps & clock_check_mask) == 0`; a mask of `0` checks every step.
//!
//! ```rust
//! use mast_model::island::IslandBuilder;
//! use mast_search::monitor::{
//!     search_monitor::{SearchCommand, SearchMonitor},
//!     time_limit::TimeLimitMonitor,
//! };
//! use std::time::Duration;
//!
//! let island = IslandBuilder::<i64>::new(4, 4).build().unwrap();
//! let mut monitor = TimeLimitMonitor::<i64>::new(Duration::from_secs(30));
//! monitor.on_enter_search(&island);
//! monitor.on_step();
//! assert_eq!(monitor.search_command(), SearchCommand::Continue);
//! ```

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use mast_model::{island::Island, plan::PowerPlan};
use num_traits::{PrimInt, Signed};
use std::time::{Duration, Instant};

/// Terminates the search after a fixed wall-clock duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor<T> {
    time_limit: Duration,
    clock_check_mask: u64,
    steps: u64,
    started: Instant,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> TimeLimitMonitor<T> {
    /// Reads the clock every 1024 steps.
    const DEFAULT_CLOCK_CHECK_MASK: u64 = 0x3FF;

    /// Creates a monitor with a budget of `time_limit`.
    #[inline]
    pub fn new(time_limit: Duration) -> Self {
        Self::with_clock_check_mask(time_limit, Self::DEFAULT_CLOCK_CHECK_MASK)
    }

    /// Creates a monitor that reads the clock whenever
    /// `(steps & clock_check_mask) == 0`.
    #[inline]
    pub fn with_clock_check_mask(time_limit: Duration, clock_check_mask: u64) -> Self {
        Self {
            time_limit,
            clock_check_mask,
            steps: 0,
            started: Instant::now(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the configured budget.
    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Returns the part of the budget not yet spent.
    #[inline]
    pub fn remaining(&self) -> Duration {
        self.time_limit.saturating_sub(self.started.elapsed())
    }

    #[inline(always)]
    fn is_check_step(&self) -> bool {
        self.steps & self.clock_check_mask == 0
    }
}

impl<T> SearchMonitor<T> for TimeLimitMonitor<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_search(&mut self, _island: &Island<T>) {
        self.steps = 0;
        self.started = Instant::now();
    }

    fn on_exit_search(&mut self) {}

    fn on_solution_found(&mut self, _plan: &PowerPlan<T>) {}

    #[inline(always)]
    fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
    }

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if self.is_check_step() && self.started.elapsed() >= self.time_limit {
            SearchCommand::Terminate("time limit reached".to_string())
        } else {
            SearchCommand::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mast_model::island::IslandBuilder;

    type IntegerType = i64;

    fn expired(mask: u64) -> TimeLimitMonitor<IntegerType> {
        let mut monitor = TimeLimitMonitor::with_clock_check_mask(Duration::from_millis(5), mask);
        monitor.started = Instant::now() - Duration::from_millis(100);
        monitor
    }

    #[test]
    fn test_expired_budget_terminates_on_check_step() {
        let monitor = expired(0x3FF);
        assert_eq!(
            monitor.search_command(),
            SearchCommand::Terminate("time limit reached".to_string())
        );
    }

    #[test]
    fn test_expired_budget_is_ignored_between_check_steps() {
        let mut monitor = expired(0b111);
        for _ in 0..7 {
            monitor.on_step();
            assert_eq!(monitor.search_command(), SearchCommand::Continue);
        }
        monitor.on_step();
        assert!(matches!(monitor.search_command(), SearchCommand::Terminate(_)));
    }

    #[test]
    fn test_fresh_budget_continues() {
        let monitor = TimeLimitMonitor::<IntegerType>::new(Duration::from_secs(600));
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
        assert!(monitor.remaining() > Duration::from_secs(590));
        assert_eq!(monitor.time_limit(), Duration::from_secs(600));
    }

    #[test]
    fn test_remaining_saturates_at_zero() {
        assert_eq!(expired(0).remaining(), Duration::ZERO);
    }

    #[test]
    fn test_enter_search_restarts_the_budget() {
        let mut monitor = expired(0);
        monitor.time_limit = Duration::from_secs(600);
        monitor.steps = 41;

        let island = IslandBuilder::<IntegerType>::new(2, 2).build().unwrap();
        monitor.on_enter_search(&island);

        assert_eq!(monitor.steps, 0);
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
    }

    #[test]
    fn test_step_counter_wraps() {
        let mut monitor = expired(0x3FF);
        monitor.steps = u64::MAX;
        monitor.on_step();
        assert_eq!(monitor.steps, 0);
    }
}
