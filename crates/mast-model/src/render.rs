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

//! Textual grid rendering.
//!
//! `IslandRenderer` prints the island as a character grid with the top row
//! (`y = height - 1`) first. Every cell is right-aligned in a field of four
//! characters and shows, in order of precedence:
//!
//! - `R<id>` for a receiver,
//! - `T<id>` for a transmitter,
//! - `*` for a covered empty cell,
//! - `x` for an uncovered empty cell.

use crate::{coverage::Coverage, island::Island};
use mast_core::geometry::point::Point;
use num_traits::{PrimInt, Signed};
use rustc_hash::FxHashMap;
use std::{fmt::Display, hash::Hash};

const CELL_WIDTH: usize = 4;

/// Renders an island with its current coverage.
///
/// ```rust
/// use mast_core::geometry::point::Point;
/// use mast_model::{island::IslandBuilder, render::IslandRenderer};
///
/// let mut builder = IslandBuilder::<i64>::new(3, 2);
/// builder
///     .add_transmitter(1, Point::new(0, 0), 1)
///     .add_receiver(2, Point::new(2, 1));
/// let island = builder.build().unwrap();
///
/// let rendered = IslandRenderer::new(&island).to_string();
/// assert_eq!(rendered, "   *   *  R2\n  T1   *   x\n");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct IslandRenderer<'a, T>
where
    T: PrimInt + Signed,
{
    island: &'a Island<T>,
}

impl<'a, T> IslandRenderer<'a, T>
where
    T: PrimInt + Signed + Hash,
{
    /// Creates a renderer for `island`.
    #[inline]
    pub fn new(island: &'a Island<T>) -> Self {
        Self { island }
    }
}

impl<T> Display for IslandRenderer<'_, T>
where
    T: PrimInt + Signed + Hash,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let coverage = Coverage::new(self.island);

        let mut labels: FxHashMap<Point<T>, String> = FxHashMap::default();
        for transmitter in self.island.transmitters() {
            labels.insert(transmitter.position(), format!("T{}", transmitter.id()));
        }
        for receiver in self.island.receivers() {
            labels.insert(receiver.position(), format!("R{}", receiver.id()));
        }

        if self.island.bounds().is_empty() {
            return Ok(());
        }

        let mut y = self.island.height() - T::one();
        while y >= T::zero() {
            let mut x = T::zero();
            while x < self.island.width() {
                let cell = Point::new(x, y);
                let label = match labels.get(&cell) {
                    Some(label) => label.as_str(),
                    None if coverage.is_covered(&cell) => "*",
                    None => "x",
                };
                write!(f, "{:>width$}", label, width = CELL_WIDTH)?;
                x = x + T::one();
            }
            writeln!(f)?;
            y = y - T::one();
        }

        Ok(())
    }
}
