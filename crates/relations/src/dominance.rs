//! Reduction of an order to its covering pairs (its Hasse diagram).

use tracing::debug;

use crate::Relation;

/// Reduce `relation` in place to its covering pairs.
///
/// The diagonal is cleared first. Then every pair `(r, c)` for which some
/// `z` has both `(r, z)` and `(z, c)` is removed. Whether a pair is implied
/// is decided against the relation as it was before any removal, so the
/// result does not depend on the order in which pairs are visited.
///
/// On a strict partial order this leaves exactly the pairs that are not
/// implied by transitivity, which is what [`crate::topological::levels`]
/// expects.
pub fn reduce_to_covering(relation: &mut Relation) {
    let n = relation.size();
    for i in 0..n {
        relation.put(i, i, false);
    }
    let order = relation.clone();
    for (row, column) in order.iter() {
        if (0..n).any(|z| order.contains(row, z) && order.contains(z, column)) {
            relation.put(row, column, false);
        }
    }
    debug!(size = n, before = order.power(), after = relation.power(), "reduced to covering pairs");
}
