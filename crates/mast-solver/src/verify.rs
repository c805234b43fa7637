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

//! Independent plan verification.
//!
//! `verify_plan` re-checks a plan against the island it was computed for
//! without trusting the solver's bookkeeping: every change must name an
//! existing transmitter and raise its power, the stated total must match the
//! sum of the raises, and applying the plan must leave no receiver uncovered.

use mast_model::{island::Island, plan::PowerPlan};
use mast_search::num::SolverNumeric;

/// Why a plan was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError<T> {
    /// A change refers to a transmitter index the island does not have.
    UnknownTransmitter { index: usize },
    /// A change does not raise its transmitter's power.
    PowerNotIncreased { id: u32, power: T, new_power: T },
    /// The stated total differs from the sum of the raises.
    TotalMismatch { stated: T, actual: T },
    /// Receivers (by id) still out of reach after applying the plan.
    UncoveredReceivers { ids: Vec<u32> },
}

impl<T> std::fmt::Display for PlanError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::UnknownTransmitter { index } => {
                write!(f, "plan changes unknown transmitter index {}", index)
            }
            PlanError::PowerNotIncreased {
                id,
                power,
                new_power,
            } => write!(
                f,
                "plan sets transmitter {} from power {} to {}, which is not an increase",
                id, power, new_power
            ),
            PlanError::TotalMismatch { stated, actual } => write!(
                f,
                "plan states a total increase of {} but its changes add up to {}",
                stated, actual
            ),
            PlanError::UncoveredReceivers { ids } => {
                write!(f, "plan leaves {} receiver(s) uncovered: ", ids.len())?;
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", id)?;
                }
                Ok(())
            }
        }
    }
}

impl<T> std::error::Error for PlanError<T> where T: std::fmt::Debug + std::fmt::Display {}

/// Checks that `plan` is a valid, fully covering plan for `island`.
pub fn verify_plan<T>(island: &Island<T>, plan: &PowerPlan<T>) -> Result<(), PlanError<T>>
where
    T: SolverNumeric,
{
    let mut actual = T::zero();
    for change in plan.changes() {
        let index = change.transmitter().get();
        if index >= island.num_transmitters() {
            return Err(PlanError::UnknownTransmitter { index });
        }

        let transmitter = island.transmitter(change.transmitter());
        if change.new_power() <= transmitter.power() {
            return Err(PlanError::PowerNotIncreased {
                id: transmitter.id(),
                power: transmitter.power(),
                new_power: change.new_power(),
            });
        }
        actual = actual.saturating_add(change.new_power() - transmitter.power());
    }

    if actual != plan.total_increase() {
        return Err(PlanError::TotalMismatch {
            stated: plan.total_increase(),
            actual,
        });
    }

    let boosted = island.with_power_plan(plan);
    let uncovered = boosted.coverage().uncovered_receivers();
    if !uncovered.is_empty() {
        return Err(PlanError::UncoveredReceivers {
            ids: uncovered
                .into_iter()
                .map(|index| island.receiver(index).id())
                .collect(),
        });
    }

    Ok(())
}
