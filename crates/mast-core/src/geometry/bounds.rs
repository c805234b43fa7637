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

//! # Grid Bounds
//!
//! `Bounds<T>` is a `width × height` rectangle anchored at the origin. A cell
//! `(x, y)` belongs to the grid iff `0 ≤ x < width` and `0 ≤ y < height`.
//!
//! Besides containment, the bounds can enumerate the cells of a Chebyshev
//! ball clipped to the grid. This is how a transmitter's reach is
//! materialized into the coverage index.
//!
//! ## Usage
//!
//! ```rust
//! use mast_core::geometry::{bounds::Bounds, point::Point};
//!
//! let bounds = Bounds::new(10, 10);
//! assert!(bounds.contains(&Point::new(9, 0)));
//! assert!(!bounds.contains(&Point::new(10, 0)));
//!
//! // A radius-1 ball in the corner is clipped to four cells.
//! let cells: Vec<_> = bounds.cells_within(Point::new(0, 0), 1).collect();
//! assert_eq!(cells.len(), 4);
//! ```

use crate::geometry::point::Point;
use num_traits::{PrimInt, Signed};

/// The rectangular extent of the island grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Bounds<T> {
    width: T,
    height: T,
}

impl<T> Bounds<T>
where
    T: PrimInt + Signed,
{
    /// Creates new bounds.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `width` or `height` is negative.
    #[inline]
    pub fn new(width: T, height: T) -> Self {
        debug_assert!(
            width >= T::zero(),
            "called `Bounds::new` with negative width"
        );
        debug_assert!(
            height >= T::zero(),
            "called `Bounds::new` with negative height"
        );

        Self { width, height }
    }

    /// Returns the grid width.
    #[inline(always)]
    pub fn width(&self) -> T {
        self.width
    }

    /// Returns the grid height.
    #[inline(always)]
    pub fn height(&self) -> T {
        self.height
    }

    /// Returns `true` if the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= T::zero() || self.height <= T::zero()
    }

    /// Returns `true` if `point` lies on the grid.
    #[inline]
    pub fn contains(&self, point: &Point<T>) -> bool {
        point.x() >= T::zero()
            && point.x() < self.width
            && point.y() >= T::zero()
            && point.y() < self.height
    }

    /// Returns an iterator over every cell of the grid, row by row starting
    /// at `y = 0`.
    #[inline]
    pub fn cells(&self) -> CellIter<T> {
        if self.is_empty() {
            return CellIter::empty();
        }
        CellIter::new(
            T::zero(),
            self.width - T::one(),
            T::zero(),
            self.height - T::one(),
        )
    }

    /// Returns an iterator over every grid cell within Chebyshev distance
    /// `radius` of `center`, clipped to the grid.
    ///
    /// A negative radius yields nothing. The center itself does not need to
    /// lie on the grid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use mast_core::geometry::{bounds::Bounds, point::Point};
    ///
    /// let bounds = Bounds::new(5, 5);
    /// assert_eq!(bounds.cells_within(Point::new(2, 2), 1).count(), 9);
    /// assert_eq!(bounds.cells_within(Point::new(2, 2), 0).count(), 1);
    /// assert_eq!(bounds.cells_within(Point::new(2, 2), 10).count(), 25);
    /// ```
    pub fn cells_within(&self, center: Point<T>, radius: T) -> CellIter<T> {
        if radius < T::zero() || self.is_empty() {
            return CellIter::empty();
        }

        let last_x = self.width - T::one();
        let last_y = self.height - T::one();
        let min_x = center.x().saturating_sub(radius).max(T::zero());
        let max_x = center.x().saturating_add(radius).min(last_x);
        let min_y = center.y().saturating_sub(radius).max(T::zero());
        let max_y = center.y().saturating_add(radius).min(last_y);

        if min_x > max_x || min_y > max_y {
            return CellIter::empty();
        }
        CellIter::new(min_x, max_x, min_y, max_y)
    }
}

/// Row-major iterator over an inclusive rectangle of cells.
#[derive(Clone, Debug)]
pub struct CellIter<T> {
    min_x: T,
    max_x: T,
    max_y: T,
    next: Option<Point<T>>,
}

impl<T> CellIter<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn new(min_x: T, max_x: T, min_y: T, max_y: T) -> Self {
        Self {
            min_x,
            max_x,
            max_y,
            next: Some(Point::new(min_x, min_y)),
        }
    }

    #[inline]
    fn empty() -> Self {
        Self {
            min_x: T::zero(),
            max_x: T::zero(),
            max_y: T::zero(),
            next: None,
        }
    }
}

impl<T> Iterator for CellIter<T>
where
    T: PrimInt + Signed,
{
    type Item = Point<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current.x() < self.max_x {
            Some(Point::new(current.x() + T::one(), current.y()))
        } else if current.y() < self.max_y {
            Some(Point::new(self.min_x, current.y() + T::one()))
        } else {
            None
        };
        Some(current)
    }
}

impl<T> std::iter::FusedIterator for CellIter<T> where T: PrimInt + Signed {}

impl<T> std::fmt::Display for Bounds<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn bounds(width: IntegerType, height: IntegerType) -> Bounds<IntegerType> {
        Bounds::new(width, height)
    }

    #[test]
    fn test_contains_is_half_open() {
        let b = bounds(10, 4);
        assert!(b.contains(&Point::new(0, 0)));
        assert!(b.contains(&Point::new(9, 3)));
        assert!(!b.contains(&Point::new(10, 3)));
        assert!(!b.contains(&Point::new(9, 4)));
        assert!(!b.contains(&Point::new(-1, 0)));
        assert!(!b.contains(&Point::new(0, -1)));
    }

    #[test]
    fn test_empty_bounds_contain_nothing() {
        let b = bounds(0, 5);
        assert!(b.is_empty());
        assert!(!b.contains(&Point::new(0, 0)));
        assert_eq!(b.cells().count(), 0);
        assert_eq!(b.cells_within(Point::new(0, 0), 3).count(), 0);
    }

    #[test]
    fn test_cells_enumerates_row_major() {
        let b = bounds(3, 2);
        let cells: Vec<_> = b.cells().collect();
        assert_eq!(
            cells,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_cells_within_clips_to_grid() {
        let b = bounds(10, 10);
        let cells: Vec<_> = b.cells_within(Point::new(9, 9), 2).collect();
        assert_eq!(cells.len(), 9);
        assert!(cells.iter().all(|c| b.contains(c)));
        assert!(cells.contains(&Point::new(7, 7)));
        assert!(cells.contains(&Point::new(9, 9)));
    }

    #[test]
    fn test_cells_within_matches_chebyshev_filter() {
        let b = bounds(8, 6);
        let center = Point::new(2, 4);
        for radius in 0..5 {
            let mut expected: Vec<_> = b
                .cells()
                .filter(|c| center.chebyshev_distance(c) <= radius)
                .collect();
            let mut actual: Vec<_> = b.cells_within(center, radius).collect();
            expected.sort();
            actual.sort();
            assert_eq!(actual, expected, "radius {}", radius);
        }
    }

    #[test]
    fn test_cells_within_negative_radius_is_empty() {
        let b = bounds(5, 5);
        assert_eq!(b.cells_within(Point::new(2, 2), -1).count(), 0);
    }

    #[test]
    fn test_cells_within_center_off_grid() {
        let b = bounds(5, 5);
        assert_eq!(b.cells_within(Point::new(-3, 2), 2).count(), 0);
        assert_eq!(b.cells_within(Point::new(-1, 2), 2).count(), 2 * 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", bounds(10, 7)), "10x7");
    }
}
