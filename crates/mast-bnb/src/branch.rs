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

//! # Branch Sweep
//!
//! One sweep searches the assignments of a cost matrix's columns to rows.
//! Column 0 is forced onto a given starting row; every later column may be
//! charged to any row, so each branch forks into one child per row. Children
//! are explored depth first, cheapest charge first, and rows of equal cost in
//! ascending order. Each child after the first gets its own copy of the
//! matrix; the first one reuses its parent's.
//!
//! A child is only created while its total stays strictly below the bound.
//! Charges never decrease a total, so once the cheapest remaining row of a
//! column reaches the bound, every row after it does too. Completed branches
//! tighten the bound for the rest of the sweep.
//!
//! The search monitor is consulted before every branch is expanded, so a
//! large sweep can still be interrupted.

use crate::{matrix::CostMatrix, stats::BnbSolverStatistics};
use mast_search::monitor::search_monitor::{SearchCommand, SearchMonitor};
use num_traits::{PrimInt, Signed};

/// How a sweep ended.
#[derive(Debug)]
pub enum SweepOutcome<'a, T> {
    /// The cheapest completed branch; its total is below the bound.
    Improved(CostMatrix<'a, T>),
    /// Every branch reached the bound.
    NoImprovement,
    /// The monitor asked to stop. `best` holds the cheapest branch completed
    /// before that, if any.
    Aborted {
        best: Option<CostMatrix<'a, T>>,
        reason: String,
    },
}

impl<T> SweepOutcome<'_, T> {
    /// Returns `true` if the sweep found a cheaper branch.
    #[inline]
    pub fn is_improved(&self) -> bool {
        matches!(self, SweepOutcome::Improved(_))
    }
}

/// A branch waiting to be expanded at column `col`.
struct PendingBranch<'a, T> {
    matrix: CostMatrix<'a, T>,
    col: usize,
}

/// Runs one sweep over `matrix` starting at `start_row`. Only branches with
/// a total strictly below `bound` survive.
///
/// # Panics
///
/// Panics if `start_row` is out of bounds or the matrix has no columns.
pub fn sweep<'a, T, S>(
    mut matrix: CostMatrix<'a, T>,
    start_row: usize,
    mut bound: T,
    monitor: &mut S,
    stats: &mut BnbSolverStatistics,
) -> SweepOutcome<'a, T>
where
    T: PrimInt + Signed,
    S: SearchMonitor<T> + ?Sized,
{
    debug_assert!(
        start_row < matrix.num_rows(),
        "called `sweep` with start row out of bounds: the len is {} but the index is {}",
        matrix.num_rows(),
        start_row
    );
    debug_assert!(
        matrix.num_columns() > 0,
        "called `sweep` with a matrix without columns"
    );

    stats.on_sweep();
    stats.on_column_swept();
    matrix.choose(0, start_row);
    if matrix.total_power_increase() >= bound {
        stats.on_pruning_bound();
        return SweepOutcome::NoImprovement;
    }

    let num_columns = matrix.num_columns();
    let mut best: Option<CostMatrix<'a, T>> = None;
    let mut stack = vec![PendingBranch { matrix, col: 1 }];
    stats.on_live_branches(stack.len());

    while let Some(PendingBranch { mut matrix, col }) = stack.pop() {
        // The bound may have tightened since this branch was pushed.
        if matrix.total_power_increase() >= bound {
            stats.on_pruning_bound();
            continue;
        }

        monitor.on_step();
        stats.on_step();
        if let SearchCommand::Terminate(reason) = monitor.search_command() {
            return SweepOutcome::Aborted { best, reason };
        }

        if col == num_columns {
            bound = matrix.total_power_increase();
            best = Some(matrix);
            continue;
        }

        stats.on_column_swept();
        let rows = matrix.rows_by_cost(col);
        let total = matrix.total_power_increase();
        let viable = rows
            .iter()
            .take_while(|&&row| total.saturating_add(matrix.value(col, row)) < bound)
            .count();
        stats.on_prunings_bound(rows.len() - viable);

        let Some((&cheapest, forks)) = rows[..viable].split_first() else {
            continue;
        };

        // Pushed in reverse so the cheapest child is expanded next.
        for &row in forks.iter().rev() {
            let mut fork = matrix.clone();
            stats.on_fork();
            fork.choose(col, row);
            stack.push(PendingBranch {
                matrix: fork,
                col: col + 1,
            });
        }
        matrix.choose(col, cheapest);
        stack.push(PendingBranch {
            matrix,
            col: col + 1,
        });
        stats.on_live_branches(stack.len());
    }

    match best {
        Some(branch) => SweepOutcome::Improved(branch),
        None => SweepOutcome::NoImprovement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mast_core::geometry::point::Point;
    use mast_model::{
        index::TransmitterIndex,
        island::Island,
        plan::PowerPlan,
        tower::{Receiver, Transmitter},
    };

    type IntegerType = i64;

    fn p(x: IntegerType, y: IntegerType) -> Point<IntegerType> {
        Point::new(x, y)
    }

    // Costs (rows T1, T2, T3; columns R1, R2, R3):
    //   T1: 48  5  3
    //   T2: 38  5 13
    //   T3:  2 45 53
    // Starting on T3, R2 ties between T1 and T2. Only T1 also absorbs R3.
    fn tie_transmitters() -> Vec<Transmitter<IntegerType>> {
        vec![
            Transmitter::new(1, p(10, 0), 0),
            Transmitter::new(2, p(20, 0), 0),
            Transmitter::new(3, p(60, 0), 0),
        ]
    }

    fn tie_receivers() -> Vec<Receiver<IntegerType>> {
        vec![
            Receiver::new(1, p(58, 0)),
            Receiver::new(2, p(15, 0)),
            Receiver::new(3, p(7, 0)),
        ]
    }

    struct TerminateAfter {
        steps: u64,
        limit: u64,
    }

    impl SearchMonitor<IntegerType> for TerminateAfter {
        fn name(&self) -> &str {
            "TerminateAfter"
        }
        fn on_enter_search(&mut self, _island: &Island<IntegerType>) {}
        fn on_exit_search(&mut self) {}
        fn on_solution_found(&mut self, _plan: &PowerPlan<IntegerType>) {}
        fn on_step(&mut self) {
            self.steps += 1;
        }
        fn search_command(&self) -> SearchCommand {
            if self.steps >= self.limit {
                SearchCommand::Terminate("stop".to_string())
            } else {
                SearchCommand::Continue
            }
        }
    }

    fn never_stop() -> TerminateAfter {
        TerminateAfter {
            steps: 0,
            limit: u64::MAX,
        }
    }

    #[test]
    fn test_every_row_is_explored() {
        let transmitters = tie_transmitters();
        let receivers = tie_receivers();
        let matrix = CostMatrix::new(&transmitters, &receivers);
        let mut stats = BnbSolverStatistics::default();

        let outcome = sweep(matrix, 2, IntegerType::MAX, &mut never_stop(), &mut stats);
        let SweepOutcome::Improved(best) = outcome else {
            panic!("expected an improving branch");
        };

        // Charging R2 to T2 would cost 2 + 5 + 3 = 10.
        assert_eq!(best.total_power_increase(), 7);
        let levels: Vec<_> = best.resulting_power_levels().collect();
        assert_eq!(
            levels,
            vec![(TransmitterIndex::new(0), 5), (TransmitterIndex::new(2), 2)]
        );
        assert_eq!(stats.forks, 4);
        assert_eq!(stats.branches_created, 5);
        assert_eq!(stats.max_live_branches, 5);
        assert_eq!(stats.columns_swept, 3);
        assert_eq!(stats.prunings_bound, 4);
        assert_eq!(stats.steps, 3);
    }

    #[test]
    fn test_cheaper_plan_behind_non_minimal_row() {
        // Two pairs of receivers 100 cells apart. Each pair is covered by
        // its middle transmitter for 5, or by both outer ones for 4 + 4.
        let transmitters = vec![
            Transmitter::new(1, p(0, 0), 0),
            Transmitter::new(2, p(9, 0), 0),
            Transmitter::new(3, p(18, 0), 0),
            Transmitter::new(4, p(0, 100), 0),
            Transmitter::new(5, p(9, 100), 0),
            Transmitter::new(6, p(18, 100), 0),
        ];
        let receivers = vec![
            Receiver::new(1, p(4, 0)),
            Receiver::new(2, p(4, 100)),
            Receiver::new(3, p(14, 0)),
            Receiver::new(4, p(14, 100)),
        ];
        let matrix = CostMatrix::new(&transmitters, &receivers);
        let mut stats = BnbSolverStatistics::default();

        // Taking the column minimum for R2 (T4 for 4) ends at 5 + 4 + 0 + 4.
        let outcome = sweep(matrix, 1, IntegerType::MAX, &mut never_stop(), &mut stats);
        let SweepOutcome::Improved(best) = outcome else {
            panic!("expected an improving branch");
        };
        assert_eq!(best.total_power_increase(), 10);
        let levels: Vec<_> = best.resulting_power_levels().collect();
        assert_eq!(
            levels,
            vec![(TransmitterIndex::new(1), 5), (TransmitterIndex::new(4), 5)]
        );
    }

    #[test]
    fn test_bound_prunes_equal_totals() {
        let transmitters = tie_transmitters();
        let receivers = tie_receivers();
        let mut stats = BnbSolverStatistics::default();

        let matrix = CostMatrix::new(&transmitters, &receivers);
        let outcome = sweep(matrix, 2, 7, &mut never_stop(), &mut stats);
        assert!(matches!(outcome, SweepOutcome::NoImprovement));
        assert_eq!(stats.prunings_bound, 3);
        assert_eq!(stats.forks, 0);

        let matrix = CostMatrix::new(&transmitters, &receivers);
        let outcome = sweep(matrix, 2, 8, &mut never_stop(), &mut stats);
        assert!(outcome.is_improved());
    }

    #[test]
    fn test_forced_first_column_is_pruned_immediately() {
        let transmitters = tie_transmitters();
        let receivers = tie_receivers();
        let matrix = CostMatrix::new(&transmitters, &receivers);
        let mut stats = BnbSolverStatistics::default();

        // T1 -> R1 alone costs 48.
        let outcome = sweep(matrix, 0, 40, &mut never_stop(), &mut stats);
        assert!(matches!(outcome, SweepOutcome::NoImprovement));
        assert_eq!(stats.prunings_bound, 1);
        assert_eq!(stats.columns_swept, 1);
        assert_eq!(stats.steps, 0);
    }

    #[test]
    fn test_single_column_sweep() {
        let transmitters = tie_transmitters();
        let receivers = vec![Receiver::new(1, p(58, 0))];
        let matrix = CostMatrix::new(&transmitters, &receivers);
        let mut stats = BnbSolverStatistics::default();

        let outcome = sweep(matrix, 1, IntegerType::MAX, &mut never_stop(), &mut stats);
        let SweepOutcome::Improved(best) = outcome else {
            panic!("expected an improving branch");
        };
        assert_eq!(best.total_power_increase(), 38);
        assert_eq!(stats.steps, 1);
        assert_eq!(stats.forks, 0);
    }

    #[test]
    fn test_monitor_can_interrupt_the_sweep() {
        let transmitters = tie_transmitters();
        let receivers = tie_receivers();
        let matrix = CostMatrix::new(&transmitters, &receivers);
        let mut stats = BnbSolverStatistics::default();
        let mut monitor = TerminateAfter { steps: 0, limit: 2 };

        let outcome = sweep(matrix, 2, IntegerType::MAX, &mut monitor, &mut stats);
        assert!(matches!(
            outcome,
            SweepOutcome::Aborted { best: None, ref reason } if reason == "stop"
        ));
        assert_eq!(stats.steps, 2);
    }

    #[test]
    fn test_boosted_row_absorbs_later_columns() {
        // Both receivers sit at distance 4 from T1 and T2.
        let transmitters = vec![
            Transmitter::new(1, p(0, 0), 0),
            Transmitter::new(2, p(8, 0), 0),
        ];
        let receivers = vec![Receiver::new(1, p(4, 4)), Receiver::new(2, p(4, 0))];
        let matrix = CostMatrix::new(&transmitters, &receivers);
        let mut stats = BnbSolverStatistics::default();

        let outcome = sweep(matrix, 1, IntegerType::MAX, &mut never_stop(), &mut stats);
        let SweepOutcome::Improved(best) = outcome else {
            panic!("expected an improving branch");
        };
        // After T2 absorbs R1, R2 costs 0 on T2 and 4 on T1.
        assert_eq!(best.total_power_increase(), 4);
        assert_eq!(best.increase_of(0), 0);
        assert_eq!(best.increase_of(1), 4);
        // The fork onto T1 is dropped once the bound drops to 4.
        assert_eq!(stats.forks, 1);
        assert_eq!(stats.prunings_bound, 1);
    }
}
