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

//! Exhaustive cost matrix search for power plans.
//!
//! `MatrixSolver` finds the cheapest set of power increases that brings every
//! receiver of an island into reach. For every ordering of the uncovered
//! receivers it builds a cost matrix, and for every transmitter as the owner
//! of the first receiver it runs a branch sweep on a copy of that matrix,
//! bounded by the best total found so far. Sweeps branch on every row of every
//! column, so a completed run has proven its plan optimal. Only strictly
//! cheaper plans replace the incumbent, so the first plan found among equally
//! cheap ones is returned.
//!
//! Orderings are enumerated lazily in a buffer that the solver keeps between
//! runs. The monitor is consulted before every sweep and before every branch
//! of a sweep; a termination request ends the run with the incumbent
//! reported as `Feasible`.

use crate::{
    branch::{self, SweepOutcome},
    incumbent::Incumbent,
    matrix::CostMatrix,
    permutation::{self, Permutations},
    result::BnbSolverOutcome,
    stats::BnbSolverStatistics,
};
use mast_model::{index::ReceiverIndex, island::Island, plan::PowerPlan, tower::Receiver};
use mast_search::{
    monitor::{
        no_op::NoOperationMonitor,
        search_monitor::{SearchCommand, SearchMonitor},
    },
    num::SolverNumeric,
    result::{SolverOutcome, TerminationReason},
    solver::PowerSolver,
};
use num_traits::{PrimInt, Signed};

/// The island cannot be covered: receivers are uncovered and there is no
/// transmitter to boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsatisfiableError {
    num_uncovered: usize,
}

impl UnsatisfiableError {
    #[inline]
    pub fn new(num_uncovered: usize) -> Self {
        Self { num_uncovered }
    }

    /// Returns the number of receivers left uncovered.
    #[inline]
    pub fn num_uncovered(&self) -> usize {
        self.num_uncovered
    }
}

impl std::fmt::Display for UnsatisfiableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cannot cover {} receiver(s): the island has no transmitters",
            self.num_uncovered
        )
    }
}

impl std::error::Error for UnsatisfiableError {}

/// Branch-and-bound search over receiver orderings and cost matrices.
#[derive(Debug, Clone)]
pub struct MatrixSolver<T> {
    order: Vec<Receiver<T>>,
}

impl<T> Default for MatrixSolver<T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MatrixSolver<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self { order: Vec::new() }
    }

    /// Creates a new solver with room for orderings of `num_receivers`
    /// receivers.
    #[inline]
    pub fn preallocated(num_receivers: usize) -> Self {
        Self {
            order: Vec::with_capacity(num_receivers),
        }
    }
}

impl<T> MatrixSolver<T>
where
    T: SolverNumeric,
{
    /// Solves `island`, reporting progress to `monitor`.
    pub fn solve<S>(&mut self, island: &Island<T>, monitor: &mut S) -> BnbSolverOutcome<T>
    where
        S: SearchMonitor<T> + ?Sized,
    {
        let session = MatrixSearchSession::new(self, island, monitor);
        let outcome = session.run();
        self.order.clear();
        outcome
    }

    /// Returns the cheapest plan covering every receiver of `island`.
    ///
    /// An island without uncovered receivers yields the empty plan, even
    /// without any transmitters.
    pub fn required_changes(
        &mut self,
        island: &Island<T>,
    ) -> Result<PowerPlan<T>, UnsatisfiableError> {
        let mut monitor = NoOperationMonitor::new();
        match self.solve(island, &mut monitor).into_plan() {
            Some(plan) => Ok(plan),
            None => Err(UnsatisfiableError::new(
                island.coverage().uncovered_receivers().len(),
            )),
        }
    }
}

impl<T> PowerSolver<T> for MatrixSolver<T>
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "MatrixSolver"
    }

    fn solve(
        &mut self,
        island: &Island<T>,
        monitor: &mut dyn SearchMonitor<T>,
    ) -> SolverOutcome<T> {
        MatrixSolver::solve(self, island, monitor).into()
    }
}

/// A single run of the matrix solver.
struct MatrixSearchSession<'a, T, S>
where
    T: SolverNumeric,
    S: SearchMonitor<T> + ?Sized,
{
    solver: &'a mut MatrixSolver<T>,
    island: &'a Island<T>,
    monitor: &'a mut S,
    incumbent: Incumbent<T>,
    stats: BnbSolverStatistics,
    start_time: std::time::Instant,
}

impl<T, S> std::fmt::Debug for MatrixSearchSession<'_, T, S>
where
    T: SolverNumeric,
    S: SearchMonitor<T> + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatrixSearchSession")
            .field("island", &self.island)
            .field("incumbent", &self.incumbent)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, T, S> MatrixSearchSession<'a, T, S>
where
    T: SolverNumeric,
    S: SearchMonitor<T> + ?Sized,
{
    #[inline]
    fn new(solver: &'a mut MatrixSolver<T>, island: &'a Island<T>, monitor: &'a mut S) -> Self {
        Self {
            solver,
            island,
            monitor,
            incumbent: Incumbent::new(),
            stats: BnbSolverStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    fn run(mut self) -> BnbSolverOutcome<T> {
        self.monitor.on_enter_search(self.island);

        let uncovered = self.island.coverage().uncovered_receivers();
        let reason = if uncovered.is_empty() {
            self.handle_plan(PowerPlan::empty());
            TerminationReason::OptimalityProven
        } else if self.island.num_transmitters() == 0 {
            log::warn!(
                "{} receiver(s) uncovered on an island without transmitters",
                uncovered.len()
            );
            TerminationReason::InfeasibilityProven
        } else {
            let mut order = std::mem::take(&mut self.solver.order);
            let reason = self.explore(&uncovered, &mut order);
            self.solver.order = order;
            reason
        };

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search();
        self.finalize_result(reason)
    }

    /// Runs one sweep per ordering of `uncovered` and starting row.
    fn explore(
        &mut self,
        uncovered: &[ReceiverIndex],
        order: &mut Vec<Receiver<T>>,
    ) -> TerminationReason {
        let island = self.island;
        match permutation::num_permutations(uncovered.len()) {
            Some(count) => log::debug!(
                "searching {} ordering(s) of {} uncovered receiver(s) over {} transmitter(s)",
                count,
                uncovered.len(),
                island.num_transmitters()
            ),
            None => log::debug!(
                "searching more than {} orderings of {} uncovered receivers",
                u64::MAX,
                uncovered.len()
            ),
        }

        let mut permutations = Permutations::new(uncovered.len());
        while let Some(permutation) = permutations.next_permutation() {
            self.stats.on_permutation();
            order.clear();
            order.extend(
                permutation
                    .iter()
                    .map(|&position| *island.receiver(uncovered[position])),
            );
            let matrix = CostMatrix::new(island.transmitters(), order.as_slice());

            for start_row in 0..island.num_transmitters() {
                self.monitor.on_step();
                self.stats.on_step();
                if let SearchCommand::Terminate(reason) = self.monitor.search_command() {
                    return TerminationReason::Aborted(reason);
                }

                match branch::sweep(
                    matrix.clone(),
                    start_row,
                    self.incumbent.upper_bound(),
                    &mut *self.monitor,
                    &mut self.stats,
                ) {
                    SweepOutcome::Improved(best) => self.handle_plan(best.to_power_plan()),
                    SweepOutcome::NoImprovement => {}
                    SweepOutcome::Aborted { best, reason } => {
                        if let Some(best) = best {
                            self.handle_plan(best.to_power_plan());
                        }
                        return TerminationReason::Aborted(reason);
                    }
                }
            }
        }

        TerminationReason::OptimalityProven
    }

    fn handle_plan(&mut self, plan: PowerPlan<T>) {
        debug_assert!(
            !self.incumbent.has_plan() || plan.total_increase() < self.incumbent.upper_bound(),
            "called `MatrixSearchSession::handle_plan` with a plan that does not improve the incumbent"
        );

        log::debug!("new incumbent with total increase {}", plan.total_increase());
        self.stats.on_solution_found();
        self.monitor.on_solution_found(&plan);
        self.incumbent.try_install(plan);
    }

    fn finalize_result(self, reason: TerminationReason) -> BnbSolverOutcome<T> {
        match reason {
            TerminationReason::OptimalityProven => match self.incumbent.into_plan() {
                Some(plan) => BnbSolverOutcome::optimal(plan, self.stats),
                None => BnbSolverOutcome::infeasible(self.stats),
            },
            TerminationReason::Aborted(reason) => {
                BnbSolverOutcome::aborted(self.incumbent.into_plan(), reason, self.stats)
            }
            TerminationReason::InfeasibilityProven | TerminationReason::HeuristicCompleted => {
                BnbSolverOutcome::infeasible(self.stats)
            }
        }
    }
}
