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

//! # Mast Core
//!
//! Foundational primitives shared by every crate of the Mast power planner.
//! The planner reasons about transmitters and receivers placed on a bounded
//! integer grid, so this crate only contains what is needed to talk about
//! positions and to address towers safely.
//!
//! ## Modules
//!
//! - `geometry`: integer points with the Chebyshev metric, rectangular grid
//!   bounds, and iteration over the square "disk" a transmitter reaches.
//! - `utils`: phantom-tagged, strongly typed indices (`TypedIndex<T>`) that
//!   keep transmitter and receiver index spaces apart at compile time.
//!
//! Refer to each module for detailed APIs and examples.

pub mod geometry;
pub mod utils;
