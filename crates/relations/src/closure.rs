//! Transitive closure.
//!
//! Three independent algorithms that must always agree:
//! - [`warshall`], the classic triple loop, working in place.
//! - [`merge_degrees`], which unions the square of the accumulated relation
//!   into itself until it stops growing.
//! - [`merge_powers`], which unions `r², r³, …, rⁿ` computed from the
//!   original relation, with no convergence test.

use tracing::{debug, trace};

use crate::Relation;

/// Replace `relation` by its transitive closure and return it.
pub fn warshall(relation: &mut Relation) -> &mut Relation {
    let n = relation.size();
    for z in 0..n {
        for x in 0..n {
            if !relation.contains(x, z) {
                continue;
            }
            for y in 0..n {
                if relation.contains(z, y) {
                    relation.put(x, y, true);
                }
            }
        }
    }
    debug!(size = n, power = relation.power(), "warshall closure done");
    relation
}

/// The transitive closure of `relation` as a new value.
#[must_use]
pub fn transitive_closure(relation: &Relation) -> Relation {
    let mut out = relation.clone();
    warshall(&mut out);
    out
}

/// Closure by repeated squaring: `c ← c ∪ c∘c` until `c∘c ⊆ c`.
///
/// Terminates because `c` only grows and has at most `n²` pairs.
#[must_use]
pub fn merge_degrees(relation: &Relation) -> Relation {
    let mut acc = relation.clone();
    let mut squared = acc.composition(&acc);
    let mut rounds = 0;
    while !squared.is_subset(&acc) {
        acc = acc.union(&squared);
        squared = acc.composition(&acc);
        rounds += 1;
        trace!(round = rounds, power = acc.power(), "merged square");
    }
    debug!(size = acc.size(), power = acc.power(), rounds, "degree merge closure done");
    acc
}

/// Closure as the union of `r, r², …, rⁿ`, where `n` is the size of `r`.
///
/// Each power is built by composing the original relation with the previous
/// power, and exactly `n - 1` powers are added.
#[must_use]
pub fn merge_powers(relation: &Relation) -> Relation {
    let mut acc = relation.clone();
    let mut power = relation.composition(relation);
    for degree in 2..=relation.size() {
        acc = acc.union(&power);
        trace!(degree, power = acc.power(), "merged power");
        power = relation.composition(&power);
    }
    debug!(size = acc.size(), power = acc.power(), "power merge closure done");
    acc
}
