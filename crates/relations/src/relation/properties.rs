//! Structural predicates.
//!
//! A relation without pairs (including the zero-size relation) has none of
//! these properties, nor their negations: every predicate returns `false`
//! for it.

use super::Relation;

impl Relation {
    fn has_pairs(&self) -> bool {
        !self.is_empty() && self.cell_count() != 0
    }

    fn all_triples<F>(&self, f: F) -> bool
    where
        F: Fn(usize, usize, usize) -> bool,
    {
        let n = self.size();
        (0..n).all(|r| (0..n).all(|c| (0..n).all(|z| f(r, c, z))))
    }

    /// Every element is related to itself.
    pub fn is_reflexive(&self) -> bool {
        self.has_pairs() && (0..self.size()).all(|i| self.matrix[(i, i)])
    }

    /// No element is related to itself.
    pub fn is_antireflexive(&self) -> bool {
        self.has_pairs() && (0..self.size()).all(|i| !self.matrix[(i, i)])
    }

    pub fn is_not_reflexive(&self) -> bool {
        self.has_pairs() && !self.is_reflexive()
    }

    /// `(r, c)` implies `(c, r)`.
    pub fn is_symmetric(&self) -> bool {
        self.has_pairs() && self.iter().all(|(r, c)| self.matrix[(c, r)])
    }

    /// No `(r, c)` has `(c, r)` related as well. Any diagonal pair counts
    /// against it, since `(i, i)` is its own mirror.
    pub fn is_antisymmetric(&self) -> bool {
        self.has_pairs() && self.iter().all(|(r, c)| !self.matrix[(c, r)])
    }

    pub fn is_not_symmetric(&self) -> bool {
        self.has_pairs() && !self.is_symmetric()
    }

    /// `(r, z)` and `(z, c)` imply `(r, c)`.
    pub fn is_transitive(&self) -> bool {
        self.has_pairs()
            && self.all_triples(|r, c, z| {
                !(self.matrix[(r, z)] && self.matrix[(z, c)]) || self.matrix[(r, c)]
            })
    }

    /// No `(r, z)`, `(z, c)` and `(r, c)` are all related.
    pub fn is_antitransitive(&self) -> bool {
        self.has_pairs()
            && self.all_triples(|r, c, z| {
                !(self.matrix[(r, z)] && self.matrix[(z, c)] && self.matrix[(r, c)])
            })
    }

    pub fn is_not_transitive(&self) -> bool {
        self.has_pairs() && !self.is_transitive()
    }

    /// `true` if two distinct elements are related in neither direction.
    pub fn has_unrelated_pair(&self) -> bool {
        let n = self.size();
        self.has_pairs()
            && (0..n).any(|r| {
                (0..n).any(|c| r != c && !self.matrix[(r, c)] && !self.matrix[(c, r)])
            })
    }

    /// Same check as [`Relation::has_unrelated_pair`]: despite the name it
    /// returns `true` when the relation is *not* total.
    #[doc(alias = "has_unrelated_pair")]
    pub fn is_total(&self) -> bool {
        self.has_unrelated_pair()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{rel, rel_sized};
    use super::*;

    #[test]
    fn empty_has_no_properties() {
        for r in [Relation::default(), Relation::new(4)] {
            assert!(!r.is_reflexive());
            assert!(!r.is_antireflexive());
            assert!(!r.is_not_reflexive());
            assert!(!r.is_symmetric());
            assert!(!r.is_antisymmetric());
            assert!(!r.is_not_symmetric());
            assert!(!r.is_transitive());
            assert!(!r.is_antitransitive());
            assert!(!r.is_not_transitive());
            assert!(!r.has_unrelated_pair());
        }
    }

    #[test]
    fn reflexivity() {
        let r = rel(&[(1, 1), (2, 2), (1, 2)]);
        assert!(r.is_reflexive());
        assert!(!r.is_not_reflexive());
        assert!(!r.is_antireflexive());

        let r = rel(&[(1, 2), (2, 1)]);
        assert!(!r.is_reflexive());
        assert!(r.is_not_reflexive());
        assert!(r.is_antireflexive());

        // Neither reflexive nor antireflexive
        let r = rel_sized(2, &[(1, 1)]);
        assert!(!r.is_reflexive() && !r.is_antireflexive());
    }

    #[test]
    fn symmetry() {
        let r = rel(&[(1, 2), (2, 1), (3, 3)]);
        assert!(r.is_symmetric());
        assert!(!r.is_antisymmetric());

        let r = rel(&[(1, 2), (2, 3), (1, 3)]);
        assert!(!r.is_symmetric());
        assert!(r.is_not_symmetric());
        assert!(r.is_antisymmetric());
    }

    #[test]
    fn diagonal_breaks_antisymmetry() {
        assert!(!rel(&[(1, 1)]).is_antisymmetric());
        assert!(!rel(&[(1, 2), (2, 3), (3, 3)]).is_antisymmetric());
        assert!(rel(&[(2, 1)]).is_antisymmetric());
    }

    #[test]
    fn transitivity() {
        let r = rel(&[(1, 2), (2, 3), (1, 3)]);
        assert!(r.is_transitive());
        assert!(!r.is_antitransitive());

        let r = rel(&[(1, 2), (2, 3)]);
        assert!(!r.is_transitive());
        assert!(r.is_not_transitive());
        assert!(r.is_antitransitive());
    }

    #[test]
    fn unrelated_pairs() {
        // 1 and 3 are unrelated
        let r = rel(&[(1, 2), (2, 3)]);
        assert!(r.has_unrelated_pair());
        assert!(r.is_total());

        let r = rel(&[(1, 2), (2, 3), (3, 1)]);
        assert!(!r.has_unrelated_pair());
    }

    #[quickcheck]
    fn closure_is_transitive(r: crate::Relation) -> bool {
        let c = crate::closure::transitive_closure(&r);
        c.is_empty() || c.is_transitive()
    }

    #[quickcheck]
    fn converse_keeps_symmetry(r: Relation) -> bool {
        r.is_symmetric() == r.converse().is_symmetric()
    }
}
