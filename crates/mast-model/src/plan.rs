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

//! Power plans.
//!
//! A `PowerPlan<T>` is what every solver returns: the total power increase
//! and, for every transmitter whose power changes, its new absolute power
//! level. Transmitters that keep their power do not appear.

use crate::index::TransmitterIndex;
use num_traits::{PrimInt, Signed};

/// A single transmitter's new power level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PowerChange<T> {
    transmitter: TransmitterIndex,
    transmitter_id: u32,
    new_power: T,
}

impl<T> PowerChange<T>
where
    T: Copy,
{
    /// Creates a new power change for the transmitter at `transmitter`,
    /// whose user facing id is `transmitter_id`.
    #[inline]
    pub fn new(transmitter: TransmitterIndex, transmitter_id: u32, new_power: T) -> Self {
        Self {
            transmitter,
            transmitter_id,
            new_power,
        }
    }

    /// Returns the index of the changed transmitter.
    #[inline(always)]
    pub fn transmitter(&self) -> TransmitterIndex {
        self.transmitter
    }

    /// Returns the user facing id of the changed transmitter.
    #[inline(always)]
    pub fn transmitter_id(&self) -> u32 {
        self.transmitter_id
    }

    /// Returns the new absolute power level.
    #[inline(always)]
    pub fn new_power(&self) -> T {
        self.new_power
    }
}

/// The outcome of a power planning run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerPlan<T> {
    total_increase: T,
    changes: Vec<PowerChange<T>>, // sorted by transmitter index
}

impl<T> PowerPlan<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new plan. `changes` are sorted by transmitter index.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if a transmitter appears twice or
    /// `total_increase` is negative.
    pub fn new(total_increase: T, mut changes: Vec<PowerChange<T>>) -> Self {
        changes.sort_unstable_by_key(|change| change.transmitter);
        debug_assert!(
            changes
                .windows(2)
                .all(|w| w[0].transmitter != w[1].transmitter),
            "called `PowerPlan::new` with a transmitter changed more than once"
        );
        debug_assert!(
            total_increase >= T::zero(),
            "called `PowerPlan::new` with a negative total increase"
        );

        Self {
            total_increase,
            changes,
        }
    }

    /// Returns the plan that changes nothing.
    #[inline]
    pub fn empty() -> Self {
        Self {
            total_increase: T::zero(),
            changes: Vec::new(),
        }
    }

    /// Returns the sum of all power increases.
    #[inline(always)]
    pub fn total_increase(&self) -> T {
        self.total_increase
    }

    /// Returns the changes in transmitter index order.
    #[inline]
    pub fn changes(&self) -> &[PowerChange<T>] {
        &self.changes
    }

    /// Returns the number of changed transmitters.
    #[inline]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns `true` if the plan changes nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Returns the new power of `transmitter`, if the plan changes it.
    pub fn new_power_of(&self, transmitter: TransmitterIndex) -> Option<T> {
        self.changes
            .binary_search_by_key(&transmitter, |change| change.transmitter)
            .ok()
            .map(|position| self.changes[position].new_power)
    }
}

impl<T> std::fmt::Display for PowerPlan<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Power Plan")?;
        writeln!(f, "   Total Increase: {}", self.total_increase)?;
        writeln!(f)?;

        if self.changes.is_empty() {
            writeln!(f, "   (No changes required)")?;
            return Ok(());
        }

        writeln!(f, "   {:<12} | {:<12}", "Transmitter", "New Power")?;
        writeln!(f, "   {:-<12}-+-{:-<12}", "", "")?;
        for change in &self.changes {
            writeln!(
                f,
                "   {:<12} | {:<12}",
                change.transmitter_id, change.new_power
            )?;
        }

        Ok(())
    }
}
