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

//! Incumbent bookkeeping for the matrix search.
//!
//! `Incumbent<T>` holds the best plan found so far and exposes its total as
//! the pruning bound. Before any plan is installed the bound is `T::MAX`, so
//! nothing is pruned. Installation is strict: a plan only replaces the
//! incumbent if its total is smaller, which keeps the first plan found among
//! equally cheap ones.

use mast_model::plan::PowerPlan;
use num_traits::{PrimInt, Signed};

/// The best known plan and the bound it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incumbent<T> {
    upper_bound: T,
    plan: Option<PowerPlan<T>>,
}

impl<T> Default for Incumbent<T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Incumbent<T>
where
    T: PrimInt + Signed,
{
    /// Creates an empty incumbent with an unbounded total.
    #[inline]
    pub fn new() -> Self {
        Self {
            upper_bound: T::max_value(),
            plan: None,
        }
    }

    /// Returns the total a new plan has to beat.
    #[inline(always)]
    pub fn upper_bound(&self) -> T {
        self.upper_bound
    }

    /// Returns `true` if a plan has been installed.
    #[inline]
    pub fn has_plan(&self) -> bool {
        self.plan.is_some()
    }

    /// Returns the installed plan, if any.
    #[inline]
    pub fn plan(&self) -> Option<&PowerPlan<T>> {
        self.plan.as_ref()
    }

    /// Installs `plan` if it is strictly cheaper than the incumbent.
    /// Returns `true` on installation.
    pub fn try_install(&mut self, plan: PowerPlan<T>) -> bool {
        if self.plan.is_some() && plan.total_increase() >= self.upper_bound {
            return false;
        }
        self.upper_bound = plan.total_increase();
        self.plan = Some(plan);
        true
    }

    /// Consumes the incumbent and returns its plan.
    #[inline]
    pub fn into_plan(self) -> Option<PowerPlan<T>> {
        self.plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mast_model::{index::TransmitterIndex, plan::PowerChange};

    type IntegerType = i64;

    fn plan(total: IntegerType, id: u32) -> PowerPlan<IntegerType> {
        PowerPlan::new(
            total,
            vec![PowerChange::new(TransmitterIndex::new(0), id, total)],
        )
    }

    #[test]
    fn test_new_is_unbounded() {
        let incumbent = Incumbent::<IntegerType>::new();
        assert_eq!(incumbent.upper_bound(), IntegerType::MAX);
        assert!(!incumbent.has_plan());
    }

    #[test]
    fn test_only_strict_improvements_are_installed() {
        let mut incumbent = Incumbent::new();
        assert!(incumbent.try_install(plan(5, 1)));
        assert_eq!(incumbent.upper_bound(), 5);

        assert!(!incumbent.try_install(plan(5, 2)));
        assert_eq!(incumbent.plan().map(|p| p.changes()[0].transmitter_id()), Some(1));

        assert!(incumbent.try_install(plan(2, 3)));
        assert_eq!(incumbent.upper_bound(), 2);
        assert_eq!(incumbent.into_plan(), Some(plan(2, 3)));
    }

    #[test]
    fn test_empty_plan_is_installed_first() {
        let mut incumbent = Incumbent::<IntegerType>::new();
        assert!(incumbent.try_install(PowerPlan::empty()));
        assert_eq!(incumbent.upper_bound(), 0);
        assert!(!incumbent.try_install(PowerPlan::empty()));
    }
}
