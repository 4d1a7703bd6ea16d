//! The [`Relation`] value type: a binary relation over `{1..size}` stored as
//! a dense `size × size` boolean matrix.
//!
//! Elements are 1-based when a relation is built from pairs or printed, and
//! 0-based for every index-taking method.

use std::{
    fmt::{self, Display},
    ops::Index,
};

use bool_matrix::MatrixBool;

use crate::error::{RelationError, Result};

mod algebra;
mod bool_matrix;
mod properties;

/// A finite binary relation.
///
/// Besides the matrix, a relation tracks its `power`, the number of `true`
/// cells. Every write goes through [`Relation::set`] (or a private
/// equivalent) so the counter never drifts from the matrix.
///
/// `==` compares relations structurally: same size and same cells. The
/// relation-algebra equality, under which all-false relations of any size
/// are equal, is [`Relation::equals`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Relation {
    matrix: MatrixBool,
    power: usize,
}

impl Relation {
    /// All-false relation with `size` elements.
    ///
    /// Panics if `size * size` cells cannot be allocated; the fallible
    /// constructors report that as [`RelationError::TooLarge`] instead.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Relation { matrix: MatrixBool::new(size), power: 0 }
    }

    /// The relation `{(i, i)}` over `size` elements.
    #[must_use]
    pub fn identity(size: usize) -> Self {
        let mut out = Relation::new(size);
        for i in 0..size {
            out.put(i, i, true);
        }
        out
    }

    /// Build a relation from a square grid, `grid[row][column]`.
    pub fn from_grid<R: AsRef<[bool]>>(grid: &[R]) -> Result<Self> {
        let size = grid.len();
        let mut elements = Vec::with_capacity(size * size);
        for (row, cells) in grid.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != size {
                return Err(RelationError::NotSquare { row, len: cells.len(), expected: size });
            }
            elements.extend_from_slice(cells);
        }
        let matrix = MatrixBool::from_vec(elements, size);
        let power = matrix.count_true();
        Ok(Relation { matrix, power })
    }

    /// Build a relation from 1-based pairs. The size is the largest
    /// coordinate seen, so an empty iterator gives the empty relation.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let pairs: Vec<(usize, usize)> = pairs.into_iter().collect();
        let size = pairs.iter().map(|&(a, b)| a.max(b)).max().unwrap_or(0);
        Relation::with_size(size, pairs)
    }

    /// Build a relation with `size` elements from 1-based pairs.
    pub fn with_size<I>(size: usize, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let cells = size.checked_mul(size).filter(|&cells| cells <= isize::MAX as usize);
        if cells.is_none() {
            return Err(RelationError::TooLarge { size });
        }
        let mut out = Relation::new(size);
        for (row, column) in pairs {
            if row == 0 || column == 0 {
                return Err(RelationError::ZeroCoordinate { row, column });
            }
            out.set(row - 1, column - 1, true)?;
        }
        Ok(out)
    }

    /// Relate `items[i]` to `items[j]` whenever `pred(&items[i], &items[j])`.
    pub fn from_predicate<T, F>(items: &[T], mut pred: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut out = Relation::new(items.len());
        for (row, a) in items.iter().enumerate() {
            for (column, b) in items.iter().enumerate() {
                if pred(a, b) {
                    out.put(row, column, true);
                }
            }
        }
        out
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.matrix.dim
    }

    /// Number of related pairs.
    pub fn power(&self) -> usize {
        self.power
    }

    /// Number of cells in the matrix, `size * size`.
    pub fn cell_count(&self) -> usize {
        self.matrix.elements.len()
    }

    /// `true` if no pair is related, whatever the size.
    pub fn is_empty(&self) -> bool {
        self.power == 0
    }

    fn check(&self, row: usize, column: usize) -> Result<()> {
        if row >= self.size() || column >= self.size() {
            Err(RelationError::OutOfRange { row, column, size: self.size() })
        } else {
            Ok(())
        }
    }

    pub fn get(&self, row: usize, column: usize) -> Result<bool> {
        self.check(row, column)?;
        Ok(self.matrix[(row, column)])
    }

    /// Set a cell. `power` only changes if the cell actually flips.
    pub fn set(&mut self, row: usize, column: usize, value: bool) -> Result<()> {
        self.check(row, column)?;
        self.put(row, column, value);
        Ok(())
    }

    pub fn row(&self, row: usize) -> Result<&[bool]> {
        if row >= self.size() {
            return Err(RelationError::OutOfRange { row, column: 0, size: self.size() });
        }
        Ok(self.matrix.row(row))
    }

    /// Cell lookup where anything outside the matrix counts as `false`.
    pub(crate) fn contains(&self, row: usize, column: usize) -> bool {
        self.matrix.get_or_false(row, column)
    }

    /// Unchecked write; callers guarantee the indices are in range.
    pub(crate) fn put(&mut self, row: usize, column: usize, value: bool) {
        let cell = &mut self.matrix[(row, column)];
        match (*cell, value) {
            (true, false) => self.power -= 1,
            (false, true) => self.power += 1,
            _ => return,
        }
        *cell = value;
    }

    /// Copy of `self` with `size` elements, padding with or dropping cells.
    pub(crate) fn resized(&self, size: usize) -> Self {
        let matrix = self.matrix.resized(size);
        let power = if size >= self.size() { self.power } else { matrix.count_true() };
        Relation { matrix, power }
    }

    /// Related pairs as 0-based `(row, column)`, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size();
        self.matrix
            .elements
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(move |(i, _)| (i / size, i % size))
    }

    /// Related pairs as 1-based `(row, column)`, in row-major order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter().map(|(r, c)| (r + 1, c + 1))
    }
}

impl Index<(usize, usize)> for Relation {
    type Output = bool;

    /// Panics if either index is out of range; see [`Relation::get`] for
    /// the fallible version.
    fn index(&self, i: (usize, usize)) -> &Self::Output {
        assert!(i.0 < self.size() && i.1 < self.size(), "index {:?} out of range", i);
        &self.matrix[i]
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (row, column) in self.pairs() {
            write!(f, "({},{})", row, column)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use quickcheck::{Arbitrary, Gen};

    use super::*;

    impl Arbitrary for Relation {
        fn arbitrary(g: &mut Gen) -> Self {
            // Keep the matrices small, the closure properties are cubic
            let size = <usize as Arbitrary>::arbitrary(g) % g.size().clamp(1, 12);
            let mut out = Relation::new(size);
            for row in 0..size {
                for column in 0..size {
                    if Arbitrary::arbitrary(g) {
                        out.put(row, column, true);
                    }
                }
            }
            out
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let r = self.clone();
            Box::new((0..r.size()).rev().map(move |s| r.resized(s)))
        }
    }

    pub(crate) fn rel(pairs: &[(usize, usize)]) -> Relation {
        Relation::from_pairs(pairs.iter().copied()).unwrap()
    }

    pub(crate) fn rel_sized(size: usize, pairs: &[(usize, usize)]) -> Relation {
        Relation::with_size(size, pairs.iter().copied()).unwrap()
    }

    #[test]
    fn from_grid_matches_pairs() {
        let expected = rel(&[(1, 3), (2, 2), (3, 1)]);
        let result = Relation::from_grid(&[
            [false, false, true],
            [false, true, false],
            [true, false, false],
        ])
        .unwrap();
        assert_eq!(result, expected);
        assert_eq!(result.power(), 3);
        assert_eq!(result.cell_count(), 9);
    }

    #[test]
    fn from_grid_rejects_ragged_rows() {
        let grid = vec![vec![true, false], vec![true]];
        assert_eq!(
            Relation::from_grid(&grid),
            Err(RelationError::NotSquare { row: 1, len: 1, expected: 2 })
        );
    }

    #[test]
    fn pair_order_does_not_matter() {
        assert_eq!(rel(&[(2, 2), (3, 3), (1, 1)]), rel(&[(1, 1), (3, 3), (2, 2)]));
    }

    #[test]
    fn default_is_empty_relation() {
        let r = Relation::default();
        assert_eq!(r.size(), 0);
        assert_eq!(r.power(), 0);
        assert_eq!(r.cell_count(), 0);
        assert_eq!(Relation::from_pairs([]).unwrap(), r);
    }

    #[test]
    fn single_pair() {
        let r = rel(&[(1, 2)]);
        assert_eq!(r.cell_count(), 4);
        assert_eq!(r.size(), 2);
        assert_eq!(r.power(), 1);
    }

    #[test]
    fn duplicate_pairs_count_once() {
        let r = rel(&[(1, 2), (1, 3), (1, 3), (13, 3)]);
        assert_eq!(r.power(), 3);
        assert_eq!(r.size(), 13);
    }

    #[test]
    fn zero_coordinate_rejected() {
        assert_eq!(
            Relation::from_pairs([(0, 2)]),
            Err(RelationError::ZeroCoordinate { row: 0, column: 2 })
        );
    }

    #[test]
    fn oversized_relation_rejected() {
        assert_eq!(
            Relation::from_pairs([(usize::MAX, 1)]),
            Err(RelationError::TooLarge { size: usize::MAX })
        );
        assert_eq!(
            Relation::with_size(usize::MAX / 2, []),
            Err(RelationError::TooLarge { size: usize::MAX / 2 })
        );
    }

    #[test]
    fn with_size_bounds_pairs() {
        assert_eq!(
            Relation::with_size(3, [(1, 4)]),
            Err(RelationError::OutOfRange { row: 0, column: 3, size: 3 })
        );
        let r = rel_sized(41, &[(1, 2)]);
        assert_eq!(r.size(), 41);
        assert_eq!(r.power(), 1);
    }

    #[test]
    fn get_and_set_bounds() {
        let mut r = Relation::new(3);
        assert_eq!(r.get(3, 0), Err(RelationError::OutOfRange { row: 3, column: 0, size: 3 }));
        assert_eq!(r.set(0, 3, true), Err(RelationError::OutOfRange { row: 0, column: 3, size: 3 }));
        assert!(r.row(3).is_err());
        r.set(2, 1, true).unwrap();
        assert_eq!(r.get(2, 1), Ok(true));
        assert!(r[(2, 1)]);
        assert_eq!(r.row(2).unwrap(), &[false, true, false]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let r = Relation::new(2);
        let _ = r[(0, 2)];
    }

    #[test]
    fn set_only_counts_flips() {
        let mut r = Relation::new(2);
        r.set(0, 0, true).unwrap();
        r.set(0, 0, true).unwrap();
        assert_eq!(r.power(), 1);
        r.set(1, 1, false).unwrap();
        assert_eq!(r.power(), 1);
        r.set(0, 0, false).unwrap();
        assert_eq!(r.power(), 0);
    }

    #[test]
    fn clone_is_deep() {
        let original = rel(&[(1, 2), (2, 1)]);
        let mut copy = original.clone();
        copy.set(0, 0, true).unwrap();
        assert!(!original[(0, 0)]);
        assert_eq!(original.power(), 2);
        assert_eq!(copy.power(), 3);
    }

    #[test]
    fn from_predicate_relates_items() {
        let items = [3, 1, 2];
        let r = Relation::from_predicate(&items, |a, b| a < b);
        assert_eq!(r.to_string(), "{(2,1)(2,3)(3,1)}");
        assert_eq!(r.power(), 3);
    }

    #[test]
    fn display_is_one_based_row_major() {
        let r = rel(&[(3, 1), (1, 3), (2, 2)]);
        assert_eq!(r.to_string(), "{(1,3)(2,2)(3,1)}");
        assert_eq!(Relation::new(4).to_string(), "{}");
    }

    #[test]
    fn iter_is_zero_based() {
        let r = rel(&[(2, 1), (1, 2)]);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
        assert_eq!(r.pairs().collect::<Vec<_>>(), vec![(1, 2), (2, 1)]);
    }

    #[quickcheck]
    fn power_matches_scan(ops: Vec<(u8, u8, bool)>) -> bool {
        let mut r = Relation::new(7);
        for (row, column, value) in ops {
            r.set(usize::from(row % 7), usize::from(column % 7), value).unwrap();
        }
        r.power() == r.matrix.count_true() && r.power() == r.iter().count()
    }
}
