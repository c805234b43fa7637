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

//! # Mast Model
//!
//! **The domain model of the Mast transmitter power planner.**
//!
//! An *island* is a bounded integer grid carrying two kinds of towers:
//! transmitters, which broadcast to every cell within Chebyshev distance
//! `power` of their position, and receivers, which need to sit inside the
//! reach of at least one transmitter. Solvers consume an `Island<T>` and
//! produce a `PowerPlan<T>` raising the power of selected transmitters.
//!
//! ## Architecture
//!
//! * **`index`**: `TransmitterIndex` and `ReceiverIndex`, typed positions into
//!   the island's tower lists.
//! * **`tower`**: the `Transmitter<T>` and `Receiver<T>` value types.
//! * **`island`**: the immutable `Island<T>` snapshot and its validating
//!   `IslandBuilder<T>`.
//! * **`coverage`**: the derived cell → transmitters index answering
//!   "is this receiver covered?" queries.
//! * **`plan`**: `PowerPlan<T>`, the output of every solver.
//! * **`loading`**: the line-oriented text format reader (and writer).
//! * **`render`**: textual grid rendering.
//! * **`generator`**: seeded random islands for tests, benchmarks and tooling.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail-Fast**: `IslandBuilder::build` rejects malformed islands, so
//!     solvers never see overlapping towers, duplicate ids or negative power.
//! 2.  **Derived state is rebuilt, not patched**: a `Coverage` is computed
//!     from a snapshot and discarded when power levels change.

pub mod coverage;
pub mod generator;
pub mod index;
pub mod island;
pub mod loading;
pub mod plan;
pub mod render;
pub mod tower;
