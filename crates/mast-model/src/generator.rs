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

//! Random island generation.
//!
//! `IslandGenerator` draws grid dimensions, tower counts, positions and
//! power levels uniformly from configurable inclusive ranges. All towers
//! occupy distinct cells, ids are `1..=n` per kind, and the result is fully
//! determined by the RNG passed in, which makes seeded generators suitable
//! for reproducible tests and benchmarks.
//!
//! ```rust
//! use mast_model::generator::IslandGenerator;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let generator = IslandGenerator::new().size(5, 8).receivers(2, 3);
//! let island = generator.generate(&mut StdRng::seed_from_u64(7));
//! assert!((5..=8).contains(&island.width()));
//! assert!((2..=3).contains(&island.num_receivers()));
//! ```

use crate::island::{Island, IslandBuilder};
use mast_core::geometry::point::Point;
use rand::Rng;

/// Configurable random island source.
///
/// # Defaults
///
/// | Setting | Range |
/// | :--- | :--- |
/// | width, height | `10..=40` |
/// | transmitters | `1..=10` |
/// | receivers | `1..=10` |
/// | power | `1..=5` |
///
/// Tower counts are capped by the number of grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IslandGenerator {
    min_size: i64,
    max_size: i64,
    min_transmitters: usize,
    max_transmitters: usize,
    min_receivers: usize,
    max_receivers: usize,
    min_power: i64,
    max_power: i64,
}

impl Default for IslandGenerator {
    fn default() -> Self {
        Self {
            min_size: 10,
            max_size: 40,
            min_transmitters: 1,
            max_transmitters: 10,
            min_receivers: 1,
            max_receivers: 10,
            min_power: 1,
            max_power: 5,
        }
    }
}

impl IslandGenerator {
    /// Creates a generator with the default ranges.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive range of both grid dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `min < 1` or `min > max`.
    #[inline]
    pub fn size(mut self, min: i64, max: i64) -> Self {
        assert!(
            min >= 1 && min <= max,
            "called `IslandGenerator::size` with invalid range {}..={}",
            min,
            max
        );
        self.min_size = min;
        self.max_size = max;
        self
    }

    /// Sets the inclusive range of the transmitter count.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[inline]
    pub fn transmitters(mut self, min: usize, max: usize) -> Self {
        assert!(
            min <= max,
            "called `IslandGenerator::transmitters` with invalid range {}..={}",
            min,
            max
        );
        self.min_transmitters = min;
        self.max_transmitters = max;
        self
    }

    /// Sets the inclusive range of the receiver count.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[inline]
    pub fn receivers(mut self, min: usize, max: usize) -> Self {
        assert!(
            min <= max,
            "called `IslandGenerator::receivers` with invalid range {}..={}",
            min,
            max
        );
        self.min_receivers = min;
        self.max_receivers = max;
        self
    }

    /// Sets the inclusive range of transmitter power levels.
    ///
    /// # Panics
    ///
    /// Panics if `min < 0` or `min > max`.
    #[inline]
    pub fn power(mut self, min: i64, max: i64) -> Self {
        assert!(
            min >= 0 && min <= max,
            "called `IslandGenerator::power` with invalid range {}..={}",
            min,
            max
        );
        self.min_power = min;
        self.max_power = max;
        self
    }

    /// Draws a random island.
    pub fn generate<R>(&self, rng: &mut R) -> Island<i64>
    where
        R: Rng + ?Sized,
    {
        let width = rng.random_range(self.min_size..=self.max_size);
        let height = rng.random_range(self.min_size..=self.max_size);
        let num_cells = (width * height) as usize;

        let num_transmitters = rng
            .random_range(self.min_transmitters..=self.max_transmitters)
            .min(num_cells);
        let num_receivers = rng
            .random_range(self.min_receivers..=self.max_receivers)
            .min(num_cells - num_transmitters);

        let cells = rand::seq::index::sample(rng, num_cells, num_transmitters + num_receivers);
        let mut positions = cells.iter().map(|cell| {
            let cell = cell as i64;
            Point::new(cell % width, cell / width)
        });

        let mut builder = IslandBuilder::new(width, height);
        for (id, position) in (1..=num_transmitters as u32).zip(positions.by_ref()) {
            let power = rng.random_range(self.min_power..=self.max_power);
            builder.add_transmitter(id, position, power);
        }
        for (id, position) in (1..=num_receivers as u32).zip(positions) {
            builder.add_receiver(id, position);
        }

        builder.build_unchecked()
    }
}
