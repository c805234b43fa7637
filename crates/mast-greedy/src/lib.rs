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

//! # Mast Greedy
//!
//! A fast heuristic alternative to the exact matrix search. The
//! `iterative::IterativeSolver` boosts one transmitter per round until every
//! receiver is covered, always committing to the largest increase needed by
//! any uncovered receiver.
//!
//! The heuristic always returns a valid cover when one exists, but it can
//! overpay: several small boosts may be chosen where one central transmitter
//! would have been cheaper.
//!
//! ## Modules
//!
//! - `iterative`: the solver.
//! - `result`: `GreedySolverOutcome`, convertible into the shared outcome type.
//! - `stats`: per-run counters.

pub mod iterative;
pub mod result;
pub mod stats;
