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

//! # Coverage Index
//!
//! A `Coverage` maps every covered grid cell to the transmitters reaching
//! it. It is derived from an `Island` snapshot in one pass over the
//! transmitters' clipped reach squares and is never updated in place: when
//! power levels change, build a new one.
//!
//! Transmitter lists per cell are kept in ascending `TransmitterIndex` order
//! because transmitters are visited in index order during construction.
//! Most cells are reached by one or two transmitters, so the lists are
//! stored inline in a `SmallVec`.

use crate::{
    index::{ReceiverIndex, TransmitterIndex},
    island::Island,
};
use mast_core::geometry::point::Point;
use num_traits::{PrimInt, Signed};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::hash::Hash;

/// Cell → covering transmitters, derived from an island.
#[derive(Clone)]
pub struct Coverage<'a, T>
where
    T: PrimInt + Signed,
{
    island: &'a Island<T>,
    cells: FxHashMap<Point<T>, SmallVec<TransmitterIndex, 2>>,
}

impl<'a, T> Coverage<'a, T>
where
    T: PrimInt + Signed + Hash,
{
    /// Builds the coverage index of `island` at its current power levels.
    pub fn new(island: &'a Island<T>) -> Self {
        let bounds = island.bounds();
        let mut cells: FxHashMap<Point<T>, SmallVec<TransmitterIndex, 2>> =
            FxHashMap::default();

        for (index, transmitter) in island.transmitters().iter().enumerate() {
            let index = TransmitterIndex::new(index);
            for cell in bounds.cells_within(transmitter.position(), transmitter.power()) {
                cells.entry(cell).or_default().push(index);
            }
        }

        Self { island, cells }
    }

    /// Returns the island this index was built from.
    #[inline]
    pub fn island(&self) -> &'a Island<T> {
        self.island
    }

    /// Returns the number of covered cells.
    #[inline]
    pub fn num_covered_cells(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if at least one transmitter reaches `point`.
    #[inline]
    pub fn is_covered(&self, point: &Point<T>) -> bool {
        self.cells.contains_key(point)
    }

    /// Returns the transmitters reaching `point` in ascending index order.
    #[inline]
    pub fn transmitters_covering(&self, point: &Point<T>) -> &[TransmitterIndex] {
        self.cells
            .get(point)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// Returns an iterator over all covered cells in unspecified order.
    #[inline]
    pub fn covered_cells(&self) -> impl Iterator<Item = &Point<T>> {
        self.cells.keys()
    }

    /// Returns the receivers no transmitter reaches, in receiver index order.
    pub fn uncovered_receivers(&self) -> Vec<ReceiverIndex> {
        self.island
            .receivers()
            .iter()
            .enumerate()
            .filter(|(_, receiver)| !self.is_covered(&receiver.position()))
            .map(|(index, _)| ReceiverIndex::new(index))
            .collect()
    }

    /// Returns the number of receivers reached by at least one transmitter.
    pub fn num_covered_receivers(&self) -> usize {
        self.island
            .receivers()
            .iter()
            .filter(|receiver| self.is_covered(&receiver.position()))
            .count()
    }

    /// Returns every covered cell at minimal Chebyshev distance from
    /// `point`, sorted ascending. Empty if nothing is covered.
    pub fn closest_covered_points(&self, point: &Point<T>) -> Vec<Point<T>> {
        let mut best = T::max_value();
        let mut closest: Vec<Point<T>> = Vec::new();

        for cell in self.cells.keys() {
            let distance = cell.chebyshev_distance(point);
            if distance < best {
                best = distance;
                closest.clear();
                closest.push(*cell);
            } else if distance == best {
                closest.push(*cell);
            }
        }

        closest.sort_unstable();
        closest
    }
}

impl<T> std::fmt::Debug for Coverage<'_, T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coverage")
            .field("num_covered_cells", &self.cells.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::island::IslandBuilder;

    type IntegerType = i64;

    fn p(x: IntegerType, y: IntegerType) -> Point<IntegerType> {
        Point::new(x, y)
    }

    fn ti(i: usize) -> TransmitterIndex {
        TransmitterIndex::new(i)
    }

    fn scenario() -> Island<IntegerType> {
        let mut builder = IslandBuilder::new(10, 10);
        builder
            .add_transmitter(1, p(2, 5), 1)
            .add_transmitter(2, p(0, 6), 3)
            .add_transmitter(3, p(1, 2), 2)
            .add_transmitter(4, p(3, 5), 3)
            .add_receiver(1, p(0, 1))
            .add_receiver(2, p(8, 8))
            .add_receiver(3, p(6, 5));
        builder.build().unwrap()
    }

    #[test]
    fn test_uncovered_receivers_of_scenario() {
        let island = scenario();
        let coverage = island.coverage();
        assert_eq!(coverage.uncovered_receivers(), vec![ReceiverIndex::new(1)]);
        assert_eq!(coverage.num_covered_receivers(), 2);
    }

    #[test]
    fn test_transmitters_covering_is_sorted() {
        let island = scenario();
        let coverage = island.coverage();
        assert_eq!(coverage.transmitters_covering(&p(2, 5)), &[ti(0), ti(1), ti(3)]);
        assert_eq!(coverage.transmitters_covering(&p(6, 5)), &[ti(3)]);
        assert!(coverage.transmitters_covering(&p(9, 9)).is_empty());
    }

    #[test]
    fn test_coverage_is_clipped_to_bounds() {
        let mut builder = IslandBuilder::<IntegerType>::new(3, 3);
        builder.add_transmitter(1, p(0, 0), 5);
        let island = builder.build().unwrap();
        let coverage = island.coverage();
        assert_eq!(coverage.num_covered_cells(), 9);
        assert!(!coverage.is_covered(&p(-1, 0)));
    }

    #[test]
    fn test_zero_power_covers_own_cell() {
        let mut builder = IslandBuilder::<IntegerType>::new(3, 3);
        builder.add_transmitter(1, p(1, 1), 0);
        let island = builder.build().unwrap();
        let coverage = island.coverage();
        assert_eq!(coverage.num_covered_cells(), 1);
        assert!(coverage.is_covered(&p(1, 1)));
    }

    #[test]
    fn test_coverage_matches_direct_reach_check() {
        let island = scenario();
        let coverage = island.coverage();
        for cell in island.bounds().cells() {
            let reached: Vec<_> = island
                .transmitters()
                .iter()
                .enumerate()
                .filter(|(_, t)| t.reaches(&cell))
                .map(|(i, _)| ti(i))
                .collect();
            assert_eq!(coverage.transmitters_covering(&cell), reached.as_slice());
        }
    }

    #[test]
    fn test_closest_covered_points() {
        let mut builder = IslandBuilder::<IntegerType>::new(10, 10);
        builder
            .add_transmitter(1, p(1, 1), 1)
            .add_receiver(1, p(5, 2));
        let island = builder.build().unwrap();
        let coverage = island.coverage();
        // Column x = 2, rows 0..=2 are all at distance 3.
        assert_eq!(
            coverage.closest_covered_points(&p(5, 2)),
            vec![p(2, 0), p(2, 1), p(2, 2)]
        );
    }

    #[test]
    fn test_closest_covered_points_without_coverage() {
        let island = IslandBuilder::<IntegerType>::new(4, 4).build().unwrap();
        let coverage = island.coverage();
        assert!(coverage.closest_covered_points(&p(1, 1)).is_empty());
    }

    #[test]
    fn test_receivers_without_transmitters_are_uncovered() {
        let mut builder = IslandBuilder::<IntegerType>::new(4, 4);
        builder.add_receiver(1, p(0, 0)).add_receiver(2, p(3, 3));
        let island = builder.build().unwrap();
        assert_eq!(
            island.coverage().uncovered_receivers(),
            vec![ReceiverIndex::new(0), ReceiverIndex::new(1)]
        );
    }
}
