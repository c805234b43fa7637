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

//! # Grid Points
//!
//! `Point<T>` is an immutable integer coordinate pair. Identity is by value,
//! so points can be used as hash map keys for coverage lookups.
//!
//! ## Usage
//!
//! ```rust
//! use mast_core::geometry::point::Point;
//!
//! let a = Point::new(2, 5);
//! let b = Point::new(8, 8);
//! assert_eq!(a.chebyshev_distance(&b), 6);
//! ```

use num_traits::{PrimInt, Signed};

/// A position on the island grid.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point<T> {
    x: T,
    y: T,
}

impl<T> Point<T> {
    /// Creates a new point from its coordinates.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> Point<T>
where
    T: Copy,
{
    /// Returns the x coordinate.
    #[inline(always)]
    pub fn x(&self) -> T {
        self.x
    }

    /// Returns the y coordinate.
    #[inline(always)]
    pub fn y(&self) -> T {
        self.y
    }
}

impl<T> Point<T>
where
    T: PrimInt + Signed,
{
    /// Returns the Chebyshev distance `max(|dx|, |dy|)` between two points.
    ///
    /// Coordinate differences saturate, so the result never overflows even
    /// for points at opposite ends of the numeric range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use mast_core::geometry::point::Point;
    ///
    /// let origin = Point::new(0i32, 0);
    /// assert_eq!(origin.chebyshev_distance(&Point::new(3, -7)), 7);
    /// assert_eq!(origin.chebyshev_distance(&origin), 0);
    /// ```
    #[inline]
    pub fn chebyshev_distance(&self, other: &Self) -> T {
        let dx = abs_diff(self.x, other.x);
        let dy = abs_diff(self.y, other.y);
        dx.max(dy)
    }

    /// Returns `true` if `other` lies within Chebyshev distance `radius`.
    #[inline]
    pub fn is_within(&self, other: &Self, radius: T) -> bool {
        self.chebyshev_distance(other) <= radius
    }
}

#[inline(always)]
fn abs_diff<T>(a: T, b: T) -> T
where
    T: PrimInt + Signed,
{
    if a >= b {
        a.saturating_sub(b)
    } else {
        b.saturating_sub(a)
    }
}

impl<T> std::fmt::Debug for Point<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({:?}, {:?})", self.x, self.y)
    }
}

impl<T> std::fmt::Display for Point<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}
