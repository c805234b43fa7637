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

//! Transmitter and receiver towers.
//!
//! Towers are plain values identified by a positive `id` taken from the
//! input. The id is what users see; the position of a tower inside an
//! `Island` (its `TransmitterIndex` / `ReceiverIndex`) is what solvers use.

use mast_core::geometry::point::Point;
use num_traits::{PrimInt, Signed};

/// A broadcasting tower. It reaches every cell within Chebyshev distance
/// `power` of its position.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transmitter<T> {
    id: u32,
    position: Point<T>,
    power: T,
}

impl<T> Transmitter<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new transmitter.
    #[inline]
    pub fn new(id: u32, position: Point<T>, power: T) -> Self {
        Self {
            id,
            position,
            power,
        }
    }

    /// Returns the user facing identifier.
    #[inline(always)]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the grid position.
    #[inline(always)]
    pub fn position(&self) -> Point<T> {
        self.position
    }

    /// Returns the current power level.
    #[inline(always)]
    pub fn power(&self) -> T {
        self.power
    }

    /// Returns `true` if `point` lies within this transmitter's reach,
    /// ignoring grid bounds.
    #[inline]
    pub fn reaches(&self, point: &Point<T>) -> bool {
        self.position.is_within(point, self.power)
    }

    /// Returns the additional power this transmitter needs to reach `point`.
    /// Zero if it already does.
    #[inline]
    pub fn required_increase(&self, point: &Point<T>) -> T {
        let missing = self.position.chebyshev_distance(point) - self.power;
        missing.max(T::zero())
    }

    #[inline]
    pub(crate) fn set_power(&mut self, power: T) {
        self.power = power;
    }
}

impl<T> std::fmt::Debug for Transmitter<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transmitter")
            .field("id", &self.id)
            .field("position", &self.position)
            .field("power", &self.power)
            .finish()
    }
}

impl<T> std::fmt::Display for Transmitter<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T{}@{} (power {})", self.id, self.position, self.power)
    }
}

/// A tower that needs to be covered by at least one transmitter.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Receiver<T> {
    id: u32,
    position: Point<T>,
}

impl<T> Receiver<T>
where
    T: Copy,
{
    /// Creates a new receiver.
    #[inline]
    pub fn new(id: u32, position: Point<T>) -> Self {
        Self { id, position }
    }

    /// Returns the user facing identifier.
    #[inline(always)]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the grid position.
    #[inline(always)]
    pub fn position(&self) -> Point<T> {
        self.position
    }
}

impl<T> std::fmt::Debug for Receiver<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Receiver")
            .field("id", &self.id)
            .field("position", &self.position)
            .finish()
    }
}

impl<T> std::fmt::Display for Receiver<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R{}@{}", self.id, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_transmitter_reach_is_chebyshev_square() {
        let t = Transmitter::<IntegerType>::new(1, Point::new(3, 5), 3);
        assert!(t.reaches(&Point::new(6, 8)));
        assert!(t.reaches(&Point::new(0, 2)));
        assert!(!t.reaches(&Point::new(7, 5)));
        assert!(!t.reaches(&Point::new(8, 8)));
    }

    #[test]
    fn test_required_increase() {
        let t = Transmitter::<IntegerType>::new(4, Point::new(3, 5), 3);
        assert_eq!(t.required_increase(&Point::new(8, 8)), 2);
        assert_eq!(t.required_increase(&Point::new(4, 4)), 0);
    }

    #[test]
    fn test_zero_power_reaches_only_itself() {
        let t = Transmitter::<IntegerType>::new(1, Point::new(2, 2), 0);
        assert!(t.reaches(&Point::new(2, 2)));
        assert!(!t.reaches(&Point::new(2, 3)));
    }

    #[test]
    fn test_display() {
        let t = Transmitter::<IntegerType>::new(2, Point::new(0, 6), 3);
        assert_eq!(format!("{}", t), "T2@(0, 6) (power 3)");
        let r = Receiver::<IntegerType>::new(7, Point::new(8, 8));
        assert_eq!(format!("{}", r), "R7@(8, 8)");
    }
}
