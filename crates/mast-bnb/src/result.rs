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

use crate::stats::BnbSolverStatistics;
use mast_model::plan::PowerPlan;
use mast_search::{
    result::{SolverOutcome, SolverResult, TerminationReason},
    stats::SolverStatistics,
};
use num_traits::{PrimInt, Signed};

/// Result of the matrix solver after termination.
#[derive(Debug, Clone)]
pub struct BnbSolverOutcome<T> {
    result: SolverResult<T>,
    termination_reason: TerminationReason,
    statistics: BnbSolverStatistics,
}

impl<T> BnbSolverOutcome<T> {
    #[inline]
    pub fn optimal(plan: PowerPlan<T>, statistics: BnbSolverStatistics) -> Self {
        Self {
            result: SolverResult::Optimal(plan),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    #[inline]
    pub fn infeasible(statistics: BnbSolverStatistics) -> Self {
        Self {
            result: SolverResult::Infeasible,
            termination_reason: TerminationReason::InfeasibilityProven,
            statistics,
        }
    }

    /// An interrupted search. A plan found before the interruption is
    /// `Feasible`; without one the result is `Unknown`, since nothing was
    /// proven about the island.
    #[inline]
    pub fn aborted<R>(plan: Option<PowerPlan<T>>, reason: R, statistics: BnbSolverStatistics) -> Self
    where
        R: Into<String>,
    {
        let result = match plan {
            Some(plan) => SolverResult::Feasible(plan),
            None => SolverResult::Unknown,
        };

        Self {
            result,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &BnbSolverStatistics {
        &self.statistics
    }

    /// Returns the plan, if any.
    #[inline]
    pub fn plan(&self) -> Option<&PowerPlan<T>> {
        self.result.plan()
    }

    /// Consumes the outcome and returns the plan, if any.
    #[inline]
    pub fn into_plan(self) -> Option<PowerPlan<T>> {
        self.result.into_plan()
    }
}

impl<T> From<BnbSolverOutcome<T>> for SolverOutcome<T>
where
    T: PrimInt + Signed,
{
    fn from(val: BnbSolverOutcome<T>) -> Self {
        debug_assert!(
            !matches!(val.termination_reason, TerminationReason::OptimalityProven)
                || matches!(val.result, SolverResult::Optimal(_)),
            "called `BnbSolverOutcome::into()` with inconsistent state: termination reason is OptimalityProven but result is not Optimal"
        );

        let statistics = SolverStatistics::from(&val.statistics);
        SolverOutcome::new(val.result, val.termination_reason, statistics)
    }
}

impl<T> std::fmt::Display for BnbSolverOutcome<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Result: {}", self.result)?;
        writeln!(f, "Termination: {}", self.termination_reason)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mast_model::{index::TransmitterIndex, plan::PowerChange};

    type IntegerType = i64;

    fn plan(total: IntegerType) -> PowerPlan<IntegerType> {
        PowerPlan::new(
            total,
            vec![PowerChange::new(TransmitterIndex::new(0), 1, total + 1)],
        )
    }

    fn stats() -> BnbSolverStatistics {
        BnbSolverStatistics {
            solutions_found: 2,
            steps: 9,
            ..Default::default()
        }
    }

    #[test]
    fn test_optimal_outcome() {
        let outcome = BnbSolverOutcome::optimal(plan(3), stats());
        assert_eq!(outcome.result(), &SolverResult::Optimal(plan(3)));
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::OptimalityProven
        );
        assert_eq!(outcome.statistics().solutions_found, 2);
        assert_eq!(outcome.plan().map(|p| p.total_increase()), Some(3));
    }

    #[test]
    fn test_infeasible_outcome() {
        let outcome = BnbSolverOutcome::<IntegerType>::infeasible(stats());
        assert_eq!(outcome.result(), &SolverResult::Infeasible);
        assert!(outcome.into_plan().is_none());
    }

    #[test]
    fn test_aborted_with_and_without_plan() {
        let with_plan = BnbSolverOutcome::aborted(Some(plan(4)), "time limit reached", stats());
        assert_eq!(with_plan.result(), &SolverResult::Feasible(plan(4)));
        assert_eq!(
            with_plan.termination_reason(),
            &TerminationReason::Aborted("time limit reached".to_string())
        );

        let without_plan = BnbSolverOutcome::<IntegerType>::aborted(None, "stop", stats());
        assert_eq!(without_plan.result(), &SolverResult::Unknown);
    }

    #[test]
    fn test_into_solver_outcome() {
        let outcome: SolverOutcome<IntegerType> =
            BnbSolverOutcome::optimal(plan(3), stats()).into();
        assert!(outcome.is_optimal());
        assert_eq!(outcome.reason, TerminationReason::OptimalityProven);
        assert_eq!(outcome.statistics.solutions_found, 2);
        assert_eq!(outcome.statistics.steps, 9);
    }
}
