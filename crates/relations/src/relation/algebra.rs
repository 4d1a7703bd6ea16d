//! Set algebra on relations.
//!
//! Binary operators accept operands of different sizes. A cell outside an
//! operand's matrix reads as `false` here, unlike [`Relation::get`], and
//! each operator picks its own result size.

use super::Relation;

impl Relation {
    /// `true` if every pair of `self` is also in `other`. A larger relation
    /// is never a subset of a smaller one, even if its extra rows are empty.
    pub fn is_subset(&self, other: &Relation) -> bool {
        self.size() <= other.size() && self.iter().all(|(r, c)| other.contains(r, c))
    }

    pub fn is_superset(&self, other: &Relation) -> bool {
        other.is_subset(self)
    }

    /// Relation-algebra equality.
    ///
    /// Two relations without pairs are equal whatever their sizes. Otherwise
    /// the sizes must match and `self` must be a subset of `other`. Note that
    /// only one direction of inclusion is checked, so `a.equals(&b)` does not
    /// imply `b.equals(&a)`.
    pub fn equals(&self, other: &Relation) -> bool {
        (self.is_empty() && other.is_empty())
            || (self.size() == other.size() && self.is_subset(other))
    }

    pub fn is_strict_subset(&self, other: &Relation) -> bool {
        !self.equals(other) && self.is_subset(other)
    }

    pub fn is_strict_superset(&self, other: &Relation) -> bool {
        other.is_strict_subset(self)
    }

    fn zip_with<F>(&self, other: &Relation, size: usize, f: F) -> Relation
    where
        F: Fn(bool, bool) -> bool,
    {
        let mut out = Relation::new(size);
        for row in 0..size {
            for column in 0..size {
                if f(self.contains(row, column), other.contains(row, column)) {
                    out.put(row, column, true);
                }
            }
        }
        out
    }

    /// Pairs in either relation. Sized to the larger operand.
    #[must_use]
    pub fn union(&self, other: &Relation) -> Relation {
        self.zip_with(other, self.size().max(other.size()), |a, b| a || b)
    }

    /// Result for intersection-like operators when an operand has no pairs:
    /// an empty relation sized to the other operand, or to the smaller size
    /// if both are empty.
    fn empty_product(&self, other: &Relation) -> Option<Relation> {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Some(Relation::new(self.size().min(other.size()))),
            (true, false) => Some(Relation::new(other.size())),
            (false, true) => Some(Relation::new(self.size())),
            (false, false) => None,
        }
    }

    /// Pairs in both relations. Sized to the smaller operand.
    #[must_use]
    pub fn intersection(&self, other: &Relation) -> Relation {
        if let Some(empty) = self.empty_product(other) {
            return empty;
        }
        self.zip_with(other, self.size().min(other.size()), |a, b| a && b)
    }

    /// Pairs of `self` missing from `other`. Sized like `self`.
    #[must_use]
    pub fn difference(&self, other: &Relation) -> Relation {
        self.zip_with(other, self.size(), |a, b| a && !b)
    }

    /// Pairs in exactly one of the relations. Sized to the larger operand.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Relation) -> Relation {
        self.zip_with(other, self.size().max(other.size()), |a, b| a != b)
    }

    #[must_use]
    pub fn complement(&self) -> Relation {
        let mut out = Relation::new(self.size());
        for row in 0..self.size() {
            for column in 0..self.size() {
                if !self.matrix[(row, column)] {
                    out.put(row, column, true);
                }
            }
        }
        out
    }

    /// The relation `{(b, a) | (a, b) ∈ self}`.
    #[must_use]
    pub fn converse(&self) -> Relation {
        let mut out = Relation::new(self.size());
        for (row, column) in self.iter() {
            out.put(column, row, true);
        }
        out
    }

    /// Only the pairs `(i, i)` of `self`, sized to the largest such `i`. A
    /// relation without any diagonal pair gives an empty relation of the
    /// same size.
    #[must_use]
    pub fn reflexive_part(&self) -> Relation {
        let diagonal: Vec<usize> = (0..self.size()).filter(|&i| self.matrix[(i, i)]).collect();
        match diagonal.last() {
            None => Relation::new(self.size()),
            Some(&last) => {
                let mut out = Relation::new(last + 1);
                for i in diagonal {
                    out.put(i, i, true);
                }
                out
            }
        }
    }

    /// Relational composition: `(i, k)` is related if some `z` has `(i, z)`
    /// in `self` and `(z, k)` in `other`.
    ///
    /// Only indices below the smaller size take part. The result is sized to
    /// the largest element that ends up related, or to the smaller operand
    /// when nothing does.
    #[must_use]
    pub fn composition(&self, other: &Relation) -> Relation {
        if let Some(empty) = self.empty_product(other) {
            return empty;
        }
        let bound = self.size().min(other.size());
        let mut found = Vec::new();
        let mut max_element = 0;
        for row in 0..bound {
            for column in 0..bound {
                if (0..bound).any(|z| self.matrix[(row, z)] && other.matrix[(z, column)]) {
                    max_element = max_element.max(row.max(column) + 1);
                    found.push((row, column));
                }
            }
        }
        if found.is_empty() {
            return Relation::new(bound);
        }
        let mut out = Relation::new(max_element);
        for (row, column) in found {
            out.put(row, column, true);
        }
        out
    }

    /// `self` composed with itself `degree` times. Degree 0 is the identity.
    /// The result keeps the size of `self`.
    #[must_use]
    pub fn pow(&self, degree: usize) -> Relation {
        if degree == 0 {
            return Relation::identity(self.size());
        }
        let mut out = self.clone();
        for _ in 1..degree {
            out = out.composition(self);
        }
        out.resized(self.size())
    }
}
