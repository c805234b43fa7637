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

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for search and solver components. Coordinates,
//! power levels and objective values all share one signed integer type `T`;
//! `SolverNumeric` names the capabilities every solver needs from it so
//! generic signatures stay short.
//!
//! Accumulators use saturating arithmetic from `num_traits`, so `i8` through
//! `i64` and `isize` all qualify.

use num_traits::{FromPrimitive, PrimInt, Signed};
use std::hash::Hash;

/// A trait alias for integer types usable by the solvers.
pub trait SolverNumeric:
    PrimInt
    + Signed
    + FromPrimitive
    + Hash
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
{
}

impl<T> SolverNumeric for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + Hash
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
{
}

#[cfg(test)]
mod tests {
    use super::SolverNumeric;

    fn accepts<T: SolverNumeric>(value: T) -> T {
        value.saturating_add(T::one())
    }

    #[test]
    fn test_signed_primitives_qualify() {
        assert_eq!(accepts(1i8), 2);
        assert_eq!(accepts(1i16), 2);
        assert_eq!(accepts(1i32), 2);
        assert_eq!(accepts(1i64), 2);
        assert_eq!(accepts(1isize), 2);
        assert_eq!(accepts(i32::MAX), i32::MAX);
    }
}
