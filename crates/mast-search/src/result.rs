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

use crate::stats::SolverStatistics;
use mast_model::plan::PowerPlan;
use num_traits::{PrimInt, Signed};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult<T> {
    /// We have proven that no power plan can cover every receiver.
    Infeasible,
    /// We have found a plan and proven that no cheaper one exists.
    Optimal(PowerPlan<T>),
    /// We have found a plan covering every receiver, but not proven its optimality.
    Feasible(PowerPlan<T>),
    /// The solver terminated without finding a plan and
    /// without proving infeasibility.
    Unknown,
}

impl<T> SolverResult<T> {
    /// Returns the plan carried by this result, if any.
    #[inline]
    pub fn plan(&self) -> Option<&PowerPlan<T>> {
        match self {
            SolverResult::Optimal(plan) | SolverResult::Feasible(plan) => Some(plan),
            SolverResult::Infeasible | SolverResult::Unknown => None,
        }
    }

    /// Consumes the result and returns its plan, if any.
    #[inline]
    pub fn into_plan(self) -> Option<PowerPlan<T>> {
        match self {
            SolverResult::Optimal(plan) | SolverResult::Feasible(plan) => Some(plan),
            SolverResult::Infeasible | SolverResult::Unknown => None,
        }
    }
}

impl<T> std::fmt::Display for SolverResult<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Infeasible => write!(f, "Infeasible"),
            SolverResult::Optimal(plan) => {
                write!(f, "Optimal(total_increase={})", plan.total_increase())
            }
            SolverResult::Feasible(plan) => {
                write!(f, "Feasible(total_increase={})", plan.total_increase())
            }
            SolverResult::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The solver found and proved optimality of a plan.
    OptimalityProven,
    /// The solver proved that the island cannot be covered.
    InfeasibilityProven,
    /// The solver completed a heuristic run without an optimality proof.
    HeuristicCompleted,
    /// The solver aborted due to a search limit (time, solutions, etc.).
    /// The string contains information about the reason for abortion.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
            TerminationReason::HeuristicCompleted => write!(f, "Heuristic Completed"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome<T>
where
    T: PrimInt + Signed,
{
    pub result: SolverResult<T>,
    pub reason: TerminationReason,
    pub statistics: SolverStatistics,
}

impl<T> SolverOutcome<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn new(
        result: SolverResult<T>,
        reason: TerminationReason,
        statistics: SolverStatistics,
    ) -> Self {
        Self {
            result,
            reason,
            statistics,
        }
    }

    #[inline]
    pub fn optimal(plan: PowerPlan<T>, statistics: SolverStatistics) -> Self {
        Self::new(
            SolverResult::Optimal(plan),
            TerminationReason::OptimalityProven,
            statistics,
        )
    }

    #[inline]
    pub fn infeasible(statistics: SolverStatistics) -> Self {
        Self::new(
            SolverResult::Infeasible,
            TerminationReason::InfeasibilityProven,
            statistics,
        )
    }

    /// Builds the outcome of an interrupted search. A plan found before the
    /// interruption is reported as `Feasible`, otherwise the result is `Unknown`.
    #[inline]
    pub fn aborted<R>(plan: Option<PowerPlan<T>>, reason: R, statistics: SolverStatistics) -> Self
    where
        R: Into<String>,
    {
        let result = match plan {
            Some(plan) => SolverResult::Feasible(plan),
            None => SolverResult::Unknown,
        };
        Self::new(result, TerminationReason::Aborted(reason.into()), statistics)
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SolverResult::Optimal(_))
    }

    #[inline]
    pub fn is_feasible(&self) -> bool {
        matches!(self.result, SolverResult::Feasible(_))
    }

    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(self.result, SolverResult::Infeasible)
    }

    #[inline]
    pub fn has_plan(&self) -> bool {
        matches!(
            self.result,
            SolverResult::Optimal(_) | SolverResult::Feasible(_)
        )
    }

    /// Returns the plan, if any.
    #[inline]
    pub fn plan(&self) -> Option<&PowerPlan<T>> {
        self.result.plan()
    }
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Result: {}", self.result)?;
        writeln!(f, "Termination: {}", self.reason)?;
        write!(f, "{}", self.statistics)
    }
}
