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

//! # Cost Matrix
//!
//! A `CostMatrix` is the working table of one branch of the search. Rows are
//! the island's transmitters in index order, columns are an ordering of the
//! uncovered receivers. Cell `(row, col)` holds the power transmitter `row`
//! still needs to reach receiver `col`.
//!
//! Choosing a cell charges its value to the row's transmitter and lowers every
//! other cell of that row by the same amount, clamped at zero: once a
//! transmitter has been boosted, reaching further receivers only costs the
//! difference. Cells therefore never grow and never go negative.
//!
//! The tower slices are borrowed, so cloning a matrix copies only the table
//! and the accumulators. Forked branches are fully independent.

use mast_model::{
    index::TransmitterIndex,
    plan::{PowerChange, PowerPlan},
    tower::{Receiver, Transmitter},
};
use num_traits::{PrimInt, Signed};
use smallvec::SmallVec;

/// Row indices attaining a column minimum. Ties beyond four are rare.
pub type MinimumRows = SmallVec<usize, 4>;

/// Row indices of one column, cheapest first.
pub type CandidateRows = SmallVec<usize, 8>;

/// Remaining power requirements of one search branch.
#[derive(Clone)]
pub struct CostMatrix<'a, T> {
    transmitters: &'a [Transmitter<T>],
    receivers: &'a [Receiver<T>],
    cells: Vec<T>, // row-major, `num_columns` cells per row
    increases: Vec<T>,
    total: T,
}

impl<'a, T> CostMatrix<'a, T>
where
    T: PrimInt + Signed,
{
    /// Builds the matrix for `transmitters` (rows) and `receivers`
    /// (columns, in the given order).
    ///
    /// Receivers are expected to be uncovered at the transmitters' current
    /// power levels; a receiver that is already reached costs zero.
    pub fn new(transmitters: &'a [Transmitter<T>], receivers: &'a [Receiver<T>]) -> Self {
        let mut cells = Vec::with_capacity(transmitters.len() * receivers.len());
        for transmitter in transmitters {
            cells.extend(
                receivers
                    .iter()
                    .map(|receiver| transmitter.required_increase(&receiver.position())),
            );
        }

        Self {
            transmitters,
            receivers,
            cells,
            increases: vec![T::zero(); transmitters.len()],
            total: T::zero(),
        }
    }

    /// Returns the number of rows (transmitters).
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.transmitters.len()
    }

    /// Returns the number of columns (receivers).
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.receivers.len()
    }

    /// Returns the transmitters labelling the rows.
    #[inline]
    pub fn transmitters(&self) -> &'a [Transmitter<T>] {
        self.transmitters
    }

    /// Returns the receivers labelling the columns.
    #[inline]
    pub fn receivers(&self) -> &'a [Receiver<T>] {
        self.receivers
    }

    /// Returns the current value of cell `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `col` or `row` is out of bounds.
    #[inline]
    pub fn value(&self, col: usize, row: usize) -> T {
        debug_assert!(
            col < self.num_columns(),
            "called `CostMatrix::value` with column index out of bounds: the len is {} but the index is {}",
            self.num_columns(),
            col
        );
        debug_assert!(
            row < self.num_rows(),
            "called `CostMatrix::value` with row index out of bounds: the len is {} but the index is {}",
            self.num_rows(),
            row
        );

        self.cells[self.flat_index(col, row)]
    }

    /// Returns the power increase accumulated so far.
    #[inline]
    pub fn total_power_increase(&self) -> T {
        self.total
    }

    /// Returns the power increase accumulated by the transmitter of `row`.
    #[inline]
    pub fn increase_of(&self, row: usize) -> T {
        debug_assert!(
            row < self.num_rows(),
            "called `CostMatrix::increase_of` with row index out of bounds: the len is {} but the index is {}",
            self.num_rows(),
            row
        );

        self.increases[row]
    }

    /// Assigns receiver `col` to transmitter `row` and returns the power
    /// charged for it.
    ///
    /// The charged value `v` is added to the total and to the row's
    /// increase, and every cell of the row is lowered by `v`, saturating at
    /// zero.
    ///
    /// # Panics
    ///
    /// Panics if `col` or `row` is out of bounds.
    pub fn choose(&mut self, col: usize, row: usize) -> T {
        debug_assert!(
            col < self.num_columns(),
            "called `CostMatrix::choose` with column index out of bounds: the len is {} but the index is {}",
            self.num_columns(),
            col
        );
        debug_assert!(
            row < self.num_rows(),
            "called `CostMatrix::choose` with row index out of bounds: the len is {} but the index is {}",
            self.num_rows(),
            row
        );

        let value = self.cells[self.flat_index(col, row)];
        self.total = self.total.saturating_add(value);
        self.increases[row] = self.increases[row].saturating_add(value);

        let start = row * self.num_columns();
        let end = start + self.num_columns();
        for cell in &mut self.cells[start..end] {
            *cell = (*cell - value).max(T::zero());
        }

        value
    }

    /// Returns every row holding the minimum of column `col`, in ascending
    /// order. Empty if the matrix has no rows.
    pub fn minimum_rows(&self, col: usize) -> MinimumRows {
        debug_assert!(
            col < self.num_columns(),
            "called `CostMatrix::minimum_rows` with column index out of bounds: the len is {} but the index is {}",
            self.num_columns(),
            col
        );

        let mut best = T::max_value();
        let mut rows = MinimumRows::new();
        for row in 0..self.num_rows() {
            let value = self.cells[self.flat_index(col, row)];
            if value < best {
                best = value;
                rows.clear();
                rows.push(row);
            } else if value == best {
                rows.push(row);
            }
        }
        rows
    }

    /// Returns every row ordered by its cost for column `col`, cheapest
    /// first. Rows of equal cost keep ascending order, so the result starts
    /// with `minimum_rows(col)`.
    pub fn rows_by_cost(&self, col: usize) -> CandidateRows {
        debug_assert!(
            col < self.num_columns(),
            "called `CostMatrix::rows_by_cost` with column index out of bounds: the len is {} but the index is {}",
            self.num_columns(),
            col
        );

        let mut rows: CandidateRows = (0..self.num_rows()).collect();
        rows.sort_by_key(|&row| self.cells[self.flat_index(col, row)]);
        rows
    }

    /// Returns the new absolute power level of every transmitter whose power
    /// increased, in row order.
    pub fn resulting_power_levels(&self) -> impl Iterator<Item = (TransmitterIndex, T)> + '_ {
        self.transmitters
            .iter()
            .zip(&self.increases)
            .enumerate()
            .filter(|(_, (_, increase))| **increase > T::zero())
            .map(|(row, (transmitter, increase))| {
                (
                    TransmitterIndex::new(row),
                    transmitter.power().saturating_add(*increase),
                )
            })
    }

    /// Converts the accumulated increases into a power plan.
    pub fn to_power_plan(&self) -> PowerPlan<T> {
        let changes = self
            .resulting_power_levels()
            .map(|(index, power)| {
                PowerChange::new(index, self.transmitters[index.get()].id(), power)
            })
            .collect();
        PowerPlan::new(self.total, changes)
    }

    #[inline(always)]
    fn flat_index(&self, col: usize, row: usize) -> usize {
        row * self.num_columns() + col
    }
}

impl<T> std::fmt::Debug for CostMatrix<'_, T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostMatrix")
            .field("num_rows", &self.transmitters.len())
            .field("num_columns", &self.receivers.len())
            .field("total", &self.total)
            .field("increases", &self.increases)
            .finish()
    }
}

impl<T> std::fmt::Display for CostMatrix<'_, T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>6}", "")?;
        for receiver in self.receivers {
            write!(f, "{:>6}", format!("R{}", receiver.id()))?;
        }
        writeln!(f)?;

        for (row, transmitter) in self.transmitters.iter().enumerate() {
            write!(f, "{:>6}", format!("T{}", transmitter.id()))?;
            for col in 0..self.num_columns() {
                write!(f, "{:>6}", self.cells[self.flat_index(col, row)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
