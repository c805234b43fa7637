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

//! Mast-BnB: exact cost matrix search for transmitter power planning
//!
//! Given an island whose transmitters leave some receivers out of reach,
//! the crate computes the power increases that cover every receiver at the
//! smallest total increase.
//!
//! Core flow
//! - Collect the uncovered receivers of a `mast_model::island::Island<T>`.
//! - For every ordering of them, build a `matrix::CostMatrix` whose rows are
//!   the transmitters and whose columns follow the ordering.
//! - For every transmitter as the owner of the first column, run a
//!   `branch::sweep` on a copy of the matrix. It tries every row for each
//!   further column, cheapest first, pruning against the incumbent.
//! - Return the cheapest plan found through `bnb::MatrixSolver`.
//!
//! Guarantees
//! - A run that is not interrupted returns a plan of minimal total increase.
//! - Every returned plan covers all receivers when applied.
//! - Plans only list transmitters whose power actually increases.
//! - Among plans with the same total, the first one found is kept.
//!
//! Module map
//! - `bnb`: the solver and its per-run search session.
//! - `branch`: the depth-first column sweep with pruning.
//! - `incumbent`: best-so-far plan and pruning bound.
//! - `matrix`: the cost matrix of a single branch.
//! - `permutation`: lazy lexicographic orderings.
//! - `result`: solver outcomes with termination reasons.
//! - `stats`: lightweight counters and timing.

pub mod bnb;
pub mod branch;
pub mod incumbent;
pub mod matrix;
pub mod permutation;
pub mod result;
pub mod stats;
