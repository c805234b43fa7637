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

use crate::stats::GreedySolverStatistics;
use mast_model::plan::PowerPlan;
use mast_search::{
    result::{SolverOutcome, SolverResult, TerminationReason},
    stats::SolverStatistics,
};
use num_traits::{PrimInt, Signed};

/// Result of the iterative solver after termination.
#[derive(Debug, Clone)]
pub struct GreedySolverOutcome<T> {
    result: SolverResult<T>,
    termination_reason: TerminationReason,
    statistics: GreedySolverStatistics,
}

impl<T> GreedySolverOutcome<T> {
    /// A complete cover found by the heuristic.
    #[inline]
    pub fn completed(plan: PowerPlan<T>, statistics: GreedySolverStatistics) -> Self {
        Self {
            result: SolverResult::Feasible(plan),
            termination_reason: TerminationReason::HeuristicCompleted,
            statistics,
        }
    }

    /// Nothing needed changing. The empty plan is trivially optimal.
    #[inline]
    pub fn unchanged(plan: PowerPlan<T>, statistics: GreedySolverStatistics) -> Self {
        Self {
            result: SolverResult::Optimal(plan),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    #[inline]
    pub fn infeasible(statistics: GreedySolverStatistics) -> Self {
        Self {
            result: SolverResult::Infeasible,
            termination_reason: TerminationReason::InfeasibilityProven,
            statistics,
        }
    }

    /// An interrupted run. Partial boosts do not cover the island, so no
    /// plan is reported.
    #[inline]
    pub fn aborted<R>(reason: R, statistics: GreedySolverStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: SolverResult::Unknown,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    #[inline]
    pub fn statistics(&self) -> &GreedySolverStatistics {
        &self.statistics
    }

    #[inline]
    pub fn plan(&self) -> Option<&PowerPlan<T>> {
        self.result.plan()
    }
}

impl<T> From<GreedySolverOutcome<T>> for SolverOutcome<T>
where
    T: PrimInt + Signed,
{
    fn from(val: GreedySolverOutcome<T>) -> Self {
        let statistics = SolverStatistics::from(&val.statistics);
        SolverOutcome::new(val.result, val.termination_reason, statistics)
    }
}
