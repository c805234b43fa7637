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

//! Lazy lexicographic permutations.
//!
//! The solver visits every ordering of the uncovered receivers. Materialising
//! `n!` orderings is not an option, so `Permutations` keeps a single buffer
//! of indices and rewrites it in place on every call to `next_permutation`.

/// Rearranges `values` into the next lexicographically greater permutation.
/// Returns `false` and leaves the slice sorted ascending once the last
/// permutation has been passed.
pub fn next_permutation<V>(values: &mut [V]) -> bool
where
    V: Ord,
{
    if values.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix.
    let mut pivot = values.len() - 1;
    while pivot > 0 && values[pivot - 1] >= values[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        values.reverse();
        return false;
    }

    let mut successor = values.len() - 1;
    while values[successor] <= values[pivot - 1] {
        successor -= 1;
    }
    values.swap(pivot - 1, successor);
    values[pivot..].reverse();
    true
}

/// Returns `n!`, or `None` if it does not fit into a `u64`.
pub fn num_permutations(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// An in-place enumerator over all permutations of `0..n`.
///
/// This is a lending iterator: each permutation borrows the internal
/// buffer, so it is exposed through `next_permutation` rather than
/// `Iterator`. For `n == 0` exactly one (empty) permutation is produced.
#[derive(Debug, Clone)]
pub struct Permutations {
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Permutations {
    /// Creates an enumerator over the permutations of `0..n`, starting with
    /// the identity.
    #[inline]
    pub fn new(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
            started: false,
            exhausted: false,
        }
    }

    /// Returns the number of elements being permuted.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the permuted set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Advances to the next permutation and returns it, or `None` once all
    /// permutations have been produced.
    pub fn next_permutation(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }
        if next_permutation(&mut self.indices) {
            Some(&self.indices)
        } else {
            self.exhausted = true;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_all(n: usize) -> Vec<Vec<usize>> {
        let mut permutations = Permutations::new(n);
        let mut all = Vec::new();
        while let Some(permutation) = permutations.next_permutation() {
            all.push(permutation.to_vec());
        }
        all
    }

    #[test]
    fn test_three_elements_in_lexicographic_order() {
        assert_eq!(
            collect_all(3),
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_counts_match_factorial() {
        for n in 0..=6 {
            let all = collect_all(n);
            assert_eq!(all.len() as u64, num_permutations(n).unwrap());
        }
    }

    #[test]
    fn test_empty_and_singleton_produce_one_permutation() {
        assert_eq!(collect_all(0), vec![Vec::<usize>::new()]);
        assert_eq!(collect_all(1), vec![vec![0]]);
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut permutations = Permutations::new(2);
        assert!(permutations.next_permutation().is_some());
        assert!(permutations.next_permutation().is_some());
        assert!(permutations.next_permutation().is_none());
        assert!(permutations.next_permutation().is_none());
    }

    #[test]
    fn test_next_permutation_with_duplicates() {
        let mut values = vec![1, 1, 2];
        let mut seen = vec![values.clone()];
        while next_permutation(&mut values) {
            seen.push(values.clone());
        }
        assert_eq!(seen, vec![vec![1, 1, 2], vec![1, 2, 1], vec![2, 1, 1]]);
        assert_eq!(values, vec![1, 1, 2]);
    }

    #[test]
    fn test_num_permutations_overflow() {
        assert_eq!(num_permutations(20), Some(2_432_902_008_176_640_000));
        assert_eq!(num_permutations(21), None);
    }
}
