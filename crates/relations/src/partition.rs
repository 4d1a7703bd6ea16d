use std::collections::HashSet;

use crate::Relation;

/// Group the elements of `relation` by the set of elements they relate to.
///
/// Each row is turned into the sorted list of 1-based columns set in it.
/// Identical lists are reported once, in order of first appearance. For an
/// equivalence relation this is its set of equivalence classes.
pub fn factor_set(relation: &Relation) -> Vec<Vec<usize>> {
    let mut seen = HashSet::new();
    let mut classes = Vec::new();
    for row in 0..relation.size() {
        let class: Vec<usize> =
            (0..relation.size()).filter(|&c| relation.contains(row, c)).map(|c| c + 1).collect();
        if seen.insert(class.clone()) {
            classes.push(class);
        }
    }
    classes
}
