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

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use mast_model::{island::Island, plan::PowerPlan};
use num_traits::{PrimInt, Signed};
use std::time::{Duration, Instant};

const RULE_WIDTH: usize = 64;

/// Prints a progress table to stdout while the search runs.
///
/// A row is printed at most once per `log_interval`, and the clock is only
/// read when `(steps & clock_check_mask) == 0`.
#[derive(Debug, Clone)]
pub struct LogMonitor<T>
where
    T: std::fmt::Display + PrimInt + Signed,
{
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    steps: u64,
    solutions_found: u64,
    best_objective: Option<T>,
}

impl<T> LogMonitor<T>
where
    T: std::fmt::Display + PrimInt + Signed,
{
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            steps: 0,
            solutions_found: 0,
            best_objective: None,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<14} | {:<10} | {:<20}",
            "Elapsed", "Steps", "Solutions", "Best Total Increase"
        );
        println!("{}", "-".repeat(RULE_WIDTH));
    }

    #[inline(always)]
    fn log_line(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let best_obj_str = match &self.best_objective {
            Some(best) => format!("{}", best),
            None => "Inf".to_string(),
        };
        let elapsed_field = format!("{:.1}s", elapsed);

        println!(
            "{:<9} | {:<14} | {:<10} | {:<20}",
            elapsed_field, self.steps, self.solutions_found, best_obj_str
        );

        self.last_log_time = now;
    }
}

impl<T> Default for LogMonitor<T>
where
    T: std::fmt::Display + PrimInt + Signed,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 255)
    }
}

impl<T> std::fmt::Display for LogMonitor<T>
where
    T: std::fmt::Display + PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> SearchMonitor<T> for LogMonitor<T>
where
    T: std::fmt::Display + PrimInt + Signed,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, _island: &Island<T>) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.steps = 0;
        self.solutions_found = 0;
        self.best_objective = None;
        self.print_header();
    }

    fn on_exit_search(&mut self) {
        self.log_line();
        println!("{}", "-".repeat(RULE_WIDTH));
        println!("Search finished.");
    }

    fn on_solution_found(&mut self, plan: &PowerPlan<T>) {
        self.solutions_found = self.solutions_found.saturating_add(1);
        self.best_objective = Some(match self.best_objective {
            Some(best) => best.min(plan.total_increase()),
            None => plan.total_increase(),
        });
    }

    fn on_step(&mut self) {
        self.steps = self.steps.wrapping_add(1);
        if (self.steps & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line();
        }
    }

    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}
