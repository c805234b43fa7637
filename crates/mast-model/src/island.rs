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

//! # Island
//!
//! `Island<T>` is an immutable snapshot of a grid and the towers placed on
//! it. Transmitters and receivers keep their insertion order, which defines
//! their `TransmitterIndex` / `ReceiverIndex`. The only mutation is
//! `Island::set_transmitter_power`, which callers use to apply a solution.
//!
//! Islands are created through `IslandBuilder`, which validates every tower
//! eagerly:
//!
//! - dimensions are non-negative,
//! - transmitter power is non-negative,
//! - ids are positive and unique per tower kind,
//! - every tower lies inside the grid,
//! - no two towers share a cell.
//!
//! ```rust
//! use mast_core::geometry::point::Point;
//! use mast_model::island::IslandBuilder;
//!
//! let mut builder = IslandBuilder::<i64>::new(10, 10);
//! builder
//!     .add_transmitter(1, Point::new(2, 5), 1)
//!     .add_receiver(1, Point::new(8, 8));
//! let island = builder.build().unwrap();
//! assert_eq!(island.num_transmitters(), 1);
//! assert_eq!(island.num_receivers(), 1);
//! ```

use crate::{
    coverage::Coverage,
    index::{ReceiverIndex, TransmitterIndex},
    plan::PowerPlan,
    tower::{Receiver, Transmitter},
};
use mast_core::geometry::{bounds::Bounds, point::Point};
use num_traits::{PrimInt, Signed};
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Distinguishes the two tower kinds in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TowerKind {
    Transmitter,
    Receiver,
}

impl std::fmt::Display for TowerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transmitter => write!(f, "transmitter"),
            Self::Receiver => write!(f, "receiver"),
        }
    }
}

/// The error type returned by `IslandBuilder::build`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IslandBuildError {
    /// Width or height is negative.
    NegativeDimensions,
    /// A transmitter was given a negative power level.
    NegativePower { id: u32 },
    /// A tower id is zero.
    InvalidId { kind: TowerKind },
    /// Two towers of the same kind share an id.
    DuplicateId { kind: TowerKind, id: u32 },
    /// A tower lies outside the grid.
    OutOfBounds { kind: TowerKind, id: u32 },
    /// A tower was placed on a cell already holding a tower of the same
    /// kind. A receiver may share its cell with a transmitter.
    OccupiedCell { kind: TowerKind, id: u32 },
}

impl std::fmt::Display for IslandBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeDimensions => write!(f, "Island dimensions must be non-negative"),
            Self::NegativePower { id } => {
                write!(f, "Transmitter {} has a negative power level", id)
            }
            Self::InvalidId { kind } => write!(f, "A {} id must be positive", kind),
            Self::DuplicateId { kind, id } => write!(f, "Duplicate {} id {}", kind, id),
            Self::OutOfBounds { kind, id } => {
                write!(f, "The {} with id {} lies outside the island", kind, id)
            }
            Self::OccupiedCell { kind, id } => write!(
                f,
                "The {} with id {} shares its cell with another {}",
                kind, id, kind
            ),
        }
    }
}

impl std::error::Error for IslandBuildError {}

/// A validated grid with its transmitters and receivers.
#[derive(Clone, PartialEq, Eq)]
pub struct Island<T>
where
    T: PrimInt + Signed,
{
    bounds: Bounds<T>,
    transmitters: Vec<Transmitter<T>>, // insertion order = TransmitterIndex
    receivers: Vec<Receiver<T>>,       // insertion order = ReceiverIndex
}

impl<T> Island<T>
where
    T: PrimInt + Signed + Hash,
{
    /// Returns the grid bounds.
    #[inline(always)]
    pub fn bounds(&self) -> Bounds<T> {
        self.bounds
    }

    /// Returns the grid width.
    #[inline]
    pub fn width(&self) -> T {
        self.bounds.width()
    }

    /// Returns the grid height.
    #[inline]
    pub fn height(&self) -> T {
        self.bounds.height()
    }

    /// Returns the number of transmitters.
    #[inline]
    pub fn num_transmitters(&self) -> usize {
        self.transmitters.len()
    }

    /// Returns the number of receivers.
    #[inline]
    pub fn num_receivers(&self) -> usize {
        self.receivers.len()
    }

    /// Returns all transmitters in index order.
    #[inline]
    pub fn transmitters(&self) -> &[Transmitter<T>] {
        &self.transmitters
    }

    /// Returns all receivers in index order.
    #[inline]
    pub fn receivers(&self) -> &[Receiver<T>] {
        &self.receivers
    }

    /// Returns the transmitter at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn transmitter(&self, index: TransmitterIndex) -> &Transmitter<T> {
        let index = index.get();
        debug_assert!(
            index < self.num_transmitters(),
            "called `Island::transmitter` with transmitter index out of bounds: the len is {} but the index is {}",
            self.num_transmitters(),
            index
        );

        &self.transmitters[index]
    }

    /// Returns the receiver at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn receiver(&self, index: ReceiverIndex) -> &Receiver<T> {
        let index = index.get();
        debug_assert!(
            index < self.num_receivers(),
            "called `Island::receiver` with receiver index out of bounds: the len is {} but the index is {}",
            self.num_receivers(),
            index
        );

        &self.receivers[index]
    }

    /// Looks up a transmitter by its user facing id.
    pub fn transmitter_index_by_id(&self, id: u32) -> Option<TransmitterIndex> {
        self.transmitters
            .iter()
            .position(|t| t.id() == id)
            .map(TransmitterIndex::new)
    }

    /// Sets the power level of a single transmitter.
    ///
    /// Any `Coverage` computed earlier is stale afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. In debug builds, also panics if
    /// `power` is negative.
    pub fn set_transmitter_power(&mut self, index: TransmitterIndex, power: T) {
        let index = index.get();
        debug_assert!(
            index < self.num_transmitters(),
            "called `Island::set_transmitter_power` with transmitter index out of bounds: the len is {} but the index is {}",
            self.num_transmitters(),
            index
        );
        debug_assert!(
            power >= T::zero(),
            "called `Island::set_transmitter_power` with negative power"
        );

        self.transmitters[index].set_power(power);
    }

    /// Returns a copy of this island with every change of `plan` applied.
    pub fn with_power_plan(&self, plan: &PowerPlan<T>) -> Self {
        let mut island = self.clone();
        for change in plan.changes() {
            island.set_transmitter_power(change.transmitter(), change.new_power());
        }
        island
    }

    /// Computes the coverage index of the current power levels.
    #[inline]
    pub fn coverage(&self) -> Coverage<'_, T> {
        Coverage::new(self)
    }
}

impl<T> std::fmt::Debug for Island<T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Island")
            .field("bounds", &self.bounds)
            .field("transmitters", &self.transmitters)
            .field("receivers", &self.receivers)
            .finish()
    }
}

impl<T> std::fmt::Display for Island<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Island(size: {}, num_transmitters: {}, num_receivers: {})",
            self.bounds,
            self.transmitters.len(),
            self.receivers.len()
        )
    }
}

/// Collects towers and validates them into an `Island`.
#[derive(Clone)]
pub struct IslandBuilder<T>
where
    T: PrimInt + Signed,
{
    width: T,
    height: T,
    transmitters: Vec<Transmitter<T>>,
    receivers: Vec<Receiver<T>>,
}

impl<T> IslandBuilder<T>
where
    T: PrimInt + Signed + Hash,
{
    /// Creates an empty builder for a `width × height` grid.
    ///
    /// Dimensions are validated in `build`.
    #[inline]
    pub fn new(width: T, height: T) -> Self {
        Self {
            width,
            height,
            transmitters: Vec::new(),
            receivers: Vec::new(),
        }
    }

    /// Returns the number of transmitters added so far.
    #[inline]
    pub fn num_transmitters(&self) -> usize {
        self.transmitters.len()
    }

    /// Returns the number of receivers added so far.
    #[inline]
    pub fn num_receivers(&self) -> usize {
        self.receivers.len()
    }

    /// Adds a transmitter. It receives the next `TransmitterIndex`.
    #[inline]
    pub fn add_transmitter(&mut self, id: u32, position: Point<T>, power: T) -> &mut Self {
        self.transmitters
            .push(Transmitter::new(id, position, power));
        self
    }

    /// Adds a receiver. It receives the next `ReceiverIndex`.
    #[inline]
    pub fn add_receiver(&mut self, id: u32, position: Point<T>) -> &mut Self {
        self.receivers.push(Receiver::new(id, position));
        self
    }

    /// Validates the collected towers and builds the island.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, checking transmitters before
    /// receivers in insertion order.
    ///
    /// ```rust
    /// use mast_core::geometry::point::Point;
    /// use mast_model::island::{IslandBuildError, IslandBuilder, TowerKind};
    ///
    /// let mut builder = IslandBuilder::<i64>::new(4, 4);
    /// builder.add_receiver(1, Point::new(4, 0));
    /// assert_eq!(
    ///     builder.build().unwrap_err(),
    ///     IslandBuildError::OutOfBounds { kind: TowerKind::Receiver, id: 1 }
    /// );
    /// ```
    pub fn build(self) -> Result<Island<T>, IslandBuildError> {
        if self.width < T::zero() || self.height < T::zero() {
            return Err(IslandBuildError::NegativeDimensions);
        }
        let bounds = Bounds::new(self.width, self.height);

        let mut transmitter_ids: FxHashSet<u32> = FxHashSet::default();
        let mut transmitter_cells: FxHashSet<Point<T>> = FxHashSet::default();
        let mut receiver_ids: FxHashSet<u32> = FxHashSet::default();
        let mut receiver_cells: FxHashSet<Point<T>> = FxHashSet::default();

        for transmitter in &self.transmitters {
            let id = transmitter.id();
            if transmitter.power() < T::zero() {
                return Err(IslandBuildError::NegativePower { id });
            }
            validate_tower(
                TowerKind::Transmitter,
                id,
                transmitter.position(),
                &bounds,
                &mut transmitter_ids,
                &mut transmitter_cells,
            )?;
        }

        for receiver in &self.receivers {
            validate_tower(
                TowerKind::Receiver,
                receiver.id(),
                receiver.position(),
                &bounds,
                &mut receiver_ids,
                &mut receiver_cells,
            )?;
        }

        Ok(Island {
            bounds,
            transmitters: self.transmitters,
            receivers: self.receivers,
        })
    }

    /// Builds the island without validation. The caller upholds every
    /// invariant `build` checks.
    pub(crate) fn build_unchecked(self) -> Island<T> {
        debug_assert!(
            self.clone().build().is_ok(),
            "called `IslandBuilder::build_unchecked` with towers that fail validation"
        );

        Island {
            bounds: Bounds::new(self.width, self.height),
            transmitters: self.transmitters,
            receivers: self.receivers,
        }
    }
}

fn validate_tower<T>(
    kind: TowerKind,
    id: u32,
    position: Point<T>,
    bounds: &Bounds<T>,
    seen_ids: &mut FxHashSet<u32>,
    seen_cells: &mut FxHashSet<Point<T>>,
) -> Result<(), IslandBuildError>
where
    T: PrimInt + Signed + Hash,
{
    if id == 0 {
        return Err(IslandBuildError::InvalidId { kind });
    }
    if !seen_ids.insert(id) {
        return Err(IslandBuildError::DuplicateId { kind, id });
    }
    if !bounds.contains(&position) {
        return Err(IslandBuildError::OutOfBounds { kind, id });
    }
    if !seen_cells.insert(position) {
        return Err(IslandBuildError::OccupiedCell { kind, id });
    }
    Ok(())
}

impl<T> std::fmt::Debug for IslandBuilder<T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IslandBuilder")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("transmitters", &self.transmitters)
            .field("receivers", &self.receivers)
            .finish()
    }
}
