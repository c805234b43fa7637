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

//! Greedy power planning by repeated boosts.
//!
//! Every round looks at the receivers that are still out of reach. For each
//! of them the covered cells closest to it are located; any transmitter
//! covering such a cell could reach the receiver by growing by the distance
//! between the cell and the receiver. The round commits to the largest of
//! these increases, hoping that a big boost also covers other receivers, and
//! among the transmitters proposing it picks the one that would newly cover
//! the most receivers. Ties go to the lowest transmitter index.
//!
//! Each round covers at least one more receiver, so the loop terminates
//! after at most as many rounds as there are receivers. The result is a
//! valid cover without any optimality guarantee.

use crate::{result::GreedySolverOutcome, stats::GreedySolverStatistics};
use fixedbitset::FixedBitSet;
use mast_model::{
    coverage::Coverage,
    index::{ReceiverIndex, TransmitterIndex},
    island::Island,
    plan::{PowerChange, PowerPlan},
};
use mast_search::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::SolverNumeric,
    result::SolverOutcome,
    solver::PowerSolver,
};

/// How a run of the boost loop ended.
enum Termination<T> {
    Covered(PowerPlan<T>),
    NoCoverage,
    Aborted(String),
}

/// Iterative greedy heuristic. Reusable across islands; the bit sets keep
/// their capacity between runs.
#[derive(Debug, Clone, Default)]
pub struct IterativeSolver {
    candidates: FixedBitSet,
    boosted: FixedBitSet,
}

impl IterativeSolver {
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new solver with room for `num_transmitters` transmitters.
    #[inline]
    pub fn preallocated(num_transmitters: usize) -> Self {
        Self {
            candidates: FixedBitSet::with_capacity(num_transmitters),
            boosted: FixedBitSet::with_capacity(num_transmitters),
        }
    }

    /// Covers every receiver of `island` by boosting transmitters one at a
    /// time, reporting each round to `monitor`.
    pub fn solve<T, S>(&mut self, island: &Island<T>, monitor: &mut S) -> GreedySolverOutcome<T>
    where
        T: SolverNumeric,
        S: SearchMonitor<T> + ?Sized,
    {
        let start_time = std::time::Instant::now();
        let mut stats = GreedySolverStatistics::default();
        monitor.on_enter_search(island);

        let termination = self.boost_until_covered(island, monitor, &mut stats);
        if let Termination::Covered(plan) = &termination {
            stats.on_solution_found();
            monitor.on_solution_found(plan);
        }

        stats.set_total_time(start_time.elapsed());
        monitor.on_exit_search();

        match termination {
            Termination::Covered(plan) if plan.is_empty() => {
                GreedySolverOutcome::unchanged(plan, stats)
            }
            Termination::Covered(plan) => GreedySolverOutcome::completed(plan, stats),
            Termination::NoCoverage => GreedySolverOutcome::infeasible(stats),
            Termination::Aborted(reason) => GreedySolverOutcome::aborted(reason, stats),
        }
    }

    fn boost_until_covered<T, S>(
        &mut self,
        island: &Island<T>,
        monitor: &mut S,
        stats: &mut GreedySolverStatistics,
    ) -> Termination<T>
    where
        T: SolverNumeric,
        S: SearchMonitor<T> + ?Sized,
    {
        let mut working = island.clone();
        self.boosted.clear();
        self.boosted.grow(island.num_transmitters());

        loop {
            let boost = {
                let coverage = working.coverage();
                let uncovered = coverage.uncovered_receivers();
                if uncovered.is_empty() {
                    break;
                }

                monitor.on_step();
                stats.on_iteration();
                if let SearchCommand::Terminate(reason) = monitor.search_command() {
                    return Termination::Aborted(reason);
                }

                match self.select_boost(&coverage, &uncovered, stats) {
                    Some(boost) => boost,
                    None => {
                        log::warn!(
                            "{} receiver(s) uncovered and no transmitter covers any cell",
                            uncovered.len()
                        );
                        return Termination::NoCoverage;
                    }
                }
            };

            let (transmitter, increase) = boost;
            let power = working.transmitter(transmitter).power().saturating_add(increase);
            log::trace!("boosting {} by {} to {}", transmitter, increase, power);
            working.set_transmitter_power(transmitter, power);
            self.boosted.insert(transmitter.get());
            stats.on_boost();
        }

        let mut total = T::zero();
        let changes = self
            .boosted
            .ones()
            .map(|index| {
                let index = TransmitterIndex::new(index);
                let original = island.transmitter(index);
                let new_power = working.transmitter(index).power();
                total = total.saturating_add(new_power - original.power());
                PowerChange::new(index, original.id(), new_power)
            })
            .collect();

        Termination::Covered(PowerPlan::new(total, changes))
    }

    /// Picks the transmitter to boost and the increase to apply, or `None`
    /// if nothing is covered at all.
    fn select_boost<T>(
        &mut self,
        coverage: &Coverage<'_, T>,
        uncovered: &[ReceiverIndex],
        stats: &mut GreedySolverStatistics,
    ) -> Option<(TransmitterIndex, T)>
    where
        T: SolverNumeric,
    {
        let island = coverage.island();
        self.candidates.clear();
        self.candidates.grow(island.num_transmitters());

        let mut largest: Option<T> = None;
        for &receiver in uncovered {
            let target = island.receiver(receiver).position();
            for cell in coverage.closest_covered_points(&target) {
                let increase = cell.chebyshev_distance(&target);
                for &transmitter in coverage.transmitters_covering(&cell) {
                    stats.on_candidate();
                    match largest {
                        Some(best) if increase < best => {}
                        Some(best) if increase == best => {
                            self.candidates.insert(transmitter.get());
                        }
                        _ => {
                            largest = Some(increase);
                            self.candidates.clear();
                            self.candidates.insert(transmitter.get());
                        }
                    }
                }
            }
        }
        let increase = largest?;

        let mut best: Option<(TransmitterIndex, usize)> = None;
        for index in self.candidates.ones() {
            let index = TransmitterIndex::new(index);
            let transmitter = island.transmitter(index);
            let reach = transmitter.power().saturating_add(increase);
            let newly_covered = uncovered
                .iter()
                .filter(|&&receiver| {
                    transmitter
                        .position()
                        .is_within(&island.receiver(receiver).position(), reach)
                })
                .count();

            if best.is_none_or(|(_, count)| newly_covered > count) {
                best = Some((index, newly_covered));
            }
        }

        best.map(|(index, _)| (index, increase))
    }
}

impl<T> PowerSolver<T> for IterativeSolver
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "IterativeSolver"
    }

    fn solve(
        &mut self,
        island: &Island<T>,
        monitor: &mut dyn SearchMonitor<T>,
    ) -> SolverOutcome<T> {
        IterativeSolver::solve(self, island, monitor).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mast_core::geometry::point::Point;
    use mast_model::{generator::IslandGenerator, island::IslandBuilder};
    use mast_search::{
        monitor::{no_op::NoOperationMonitor, solution_limit::SolutionLimitMonitor},
        result::{SolverResult, TerminationReason},
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    type IntegerType = i64;

    fn p(x: IntegerType, y: IntegerType) -> Point<IntegerType> {
        Point::new(x, y)
    }

    fn ti(i: usize) -> TransmitterIndex {
        TransmitterIndex::new(i)
    }

    fn solve(island: &Island<IntegerType>) -> GreedySolverOutcome<IntegerType> {
        IterativeSolver::new().solve(island, &mut NoOperationMonitor::new())
    }

    fn assert_covers(island: &Island<IntegerType>, plan: &PowerPlan<IntegerType>) {
        let boosted = island.with_power_plan(plan);
        assert!(boosted.coverage().uncovered_receivers().is_empty());
        let paid: IntegerType = plan
            .changes()
            .iter()
            .map(|c| c.new_power() - island.transmitter(c.transmitter()).power())
            .sum();
        assert_eq!(paid, plan.total_increase());
    }

    #[test]
    fn test_scenario_boosts_nearest_transmitter() {
        let mut builder = IslandBuilder::new(10, 10);
        builder
            .add_transmitter(1, p(2, 5), 1)
            .add_transmitter(2, p(0, 6), 3)
            .add_transmitter(3, p(1, 2), 2)
            .add_transmitter(4, p(3, 5), 3)
            .add_receiver(1, p(0, 1))
            .add_receiver(2, p(8, 8))
            .add_receiver(3, p(6, 5));
        let island = builder.build().unwrap();

        let outcome = solve(&island);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::HeuristicCompleted
        );
        let plan = outcome.plan().expect("expected a plan");
        assert_eq!(plan.total_increase(), 2);
        assert_eq!(plan.new_power_of(ti(3)), Some(5));
        assert_eq!(plan.len(), 1);
        assert_eq!(outcome.statistics().iterations, 1);
        assert_covers(&island, plan);
    }

    #[test]
    fn test_radial_boosts_outer_transmitters() {
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
        let island = builder.build().unwrap();

        // Each receiver is 4 away from an outer transmitter's reach but 5
        // away from the central one's, so the heuristic never picks the
        // cheaper central boost.
        let outcome = solve(&island);
        let plan = outcome.plan().expect("expected a plan");
        assert_eq!(plan.total_increase(), 16);
        assert_eq!(plan.new_power_of(ti(0)), None);
        for index in 1..5 {
            assert_eq!(plan.new_power_of(ti(index)), Some(5));
        }
        assert_eq!(outcome.statistics().iterations, 4);
        assert_covers(&island, plan);
    }

    #[test]
    fn test_prefers_transmitter_covering_more_receivers() {
        // T1 and T2 both need +3 to reach R1; only T2 then also reaches R2.
        let mut builder = IslandBuilder::new(20, 20);
        builder
            .add_transmitter(1, p(5, 5), 0)
            .add_transmitter(2, p(11, 5), 0)
            .add_receiver(1, p(8, 5))
            .add_receiver(2, p(14, 5));
        let island = builder.build().unwrap();

        let outcome = solve(&island);
        let plan = outcome.plan().expect("expected a plan");
        assert_eq!(plan.total_increase(), 3);
        assert_eq!(plan.new_power_of(ti(1)), Some(3));
        assert_eq!(plan.new_power_of(ti(0)), None);
        assert_eq!(outcome.statistics().iterations, 1);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        let mut builder = IslandBuilder::new(20, 20);
        builder
            .add_transmitter(1, p(5, 5), 0)
            .add_transmitter(2, p(11, 5), 0)
            .add_receiver(1, p(8, 5));
        let island = builder.build().unwrap();

        let plan = solve(&island).plan().cloned().expect("expected a plan");
        assert_eq!(plan.new_power_of(ti(0)), Some(3));
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_nothing_to_do_is_optimal() {
        let island = IslandBuilder::<IntegerType>::new(4, 4).build().unwrap();
        let outcome = solve(&island);
        assert_eq!(outcome.result(), &SolverResult::Optimal(PowerPlan::empty()));
        assert_eq!(outcome.statistics().iterations, 0);
    }

    #[test]
    fn test_no_transmitters_is_infeasible() {
        let mut builder = IslandBuilder::<IntegerType>::new(4, 4);
        builder.add_receiver(1, p(1, 1));
        let island = builder.build().unwrap();

        let outcome = solve(&island);
        assert_eq!(outcome.result(), &SolverResult::Infeasible);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::InfeasibilityProven
        );
    }

    #[test]
    fn test_monitor_can_abort() {
        let mut builder = IslandBuilder::<IntegerType>::new(10, 10);
        builder
            .add_transmitter(1, p(0, 0), 0)
            .add_receiver(1, p(9, 9));
        let island = builder.build().unwrap();

        let mut monitor = SolutionLimitMonitor::new(0);
        let outcome = IterativeSolver::new().solve(&island, &mut monitor);
        assert_eq!(outcome.result(), &SolverResult::Unknown);
        assert!(matches!(
            outcome.termination_reason(),
            TerminationReason::Aborted(_)
        ));
    }

    #[test]
    fn test_random_islands_are_covered() {
        let generator = IslandGenerator::new().size(8, 20).power(0, 3);
        let mut solver = IterativeSolver::preallocated(10);

        for seed in 0..100 {
            let island = generator.generate(&mut ChaCha8Rng::seed_from_u64(seed));
            let outcome = solver.solve(&island, &mut NoOperationMonitor::new());
            let plan = outcome.plan().expect("expected a plan");
            assert_covers(&island, plan);
            assert!(outcome.statistics().iterations <= island.num_receivers() as u64);
        }
    }

    #[test]
    fn test_power_solver_trait() {
        let mut builder = IslandBuilder::<IntegerType>::new(10, 10);
        builder
            .add_transmitter(1, p(0, 0), 1)
            .add_receiver(1, p(4, 0));
        let island = builder.build().unwrap();

        let mut solver: Box<dyn PowerSolver<IntegerType>> = Box::new(IterativeSolver::new());
        let mut monitor = NoOperationMonitor::new();
        let outcome = solver.solve(&island, &mut monitor);
        assert_eq!(solver.name(), "IterativeSolver");
        assert!(outcome.is_feasible());
        assert_eq!(outcome.statistics.solutions_found, 1);
        assert_eq!(outcome.plan().map(|p| p.total_increase()), Some(3));
    }
}
