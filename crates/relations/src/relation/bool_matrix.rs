use std::ops::{Index, IndexMut};

/// Dense square matrix of booleans, stored row by row.
#[derive(Debug, PartialEq, Eq, Default)]
pub(crate) struct MatrixBool {
    pub(crate) dim: usize,
    pub(crate) elements: Vec<bool>,
}

impl Clone for MatrixBool {
    fn clone(&self) -> Self {
        Self { dim: self.dim, elements: self.elements.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.dim = source.dim;
        self.elements.clone_from(&source.elements);
    }
}

impl MatrixBool {
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self { dim, elements: vec![false; dim * dim] }
    }

    pub fn from_vec(elements: Vec<bool>, dim: usize) -> Self {
        debug_assert!(dim * dim == elements.len());
        Self { elements, dim }
    }

    /// Copy of `self` with `dim` rows and columns. Cells beyond the old
    /// dimension are `false`, cells beyond the new one are dropped.
    #[must_use]
    pub fn resized(&self, dim: usize) -> Self {
        let mut new_matrix = MatrixBool::new(dim);
        let shared = self.dim.min(dim);
        for row in 0..shared {
            new_matrix.row_mut(row)[..shared].copy_from_slice(&self.row(row)[..shared]);
        }
        new_matrix
    }

    pub fn row(&self, row: usize) -> &[bool] {
        &self.elements[row * self.dim..(row + 1) * self.dim]
    }

    fn row_mut(&mut self, row: usize) -> &mut [bool] {
        &mut self.elements[row * self.dim..(row + 1) * self.dim]
    }

    /// Cell `(row, column)`, or `false` if it lies outside the matrix.
    pub fn get_or_false(&self, row: usize, column: usize) -> bool {
        row < self.dim && column < self.dim && self[(row, column)]
    }

    pub fn count_true(&self) -> usize {
        self.elements.iter().filter(|&&b| b).count()
    }
}

impl Index<(usize, usize)> for MatrixBool {
    type Output = bool;

    fn index(&self, i: (usize, usize)) -> &Self::Output {
        debug_assert!(i.0 < self.dim && i.1 < self.dim);
        &self.elements[i.0 * self.dim + i.1]
    }
}

impl IndexMut<(usize, usize)> for MatrixBool {
    fn index_mut(&mut self, i: (usize, usize)) -> &mut Self::Output {
        debug_assert!(i.0 < self.dim && i.1 < self.dim);
        &mut self.elements[i.0 * self.dim + i.1]
    }
}
