//! Level-order topological sort.
//!
//! A relation is read as a precedence order where `(r, c)` means `r` comes
//! before `c`. Elements are peeled off in rounds: every element with no
//! remaining predecessor forms the next level, and its outgoing pairs stop
//! counting against the others.
//!
//! The input is expected to be a strict order reduced to its covering pairs
//! (see [`crate::dominance::reduce_to_covering`]). A cyclic input is rejected
//! with [`RelationError::CyclicOrder`].

use tracing::{debug, trace, warn};

use crate::{
    error::{RelationError, Result},
    graph::strongly_connected_components,
    Relation,
};

/// Levels of 0-based element indices. Within a level, indices are increasing.
pub fn level_indices(relation: &Relation) -> Result<Vec<Vec<usize>>> {
    let n = relation.size();
    // Number of unconsumed predecessors, `None` once the element is placed
    let mut in_degree: Vec<Option<usize>> = (0..n)
        .map(|column| Some((0..n).filter(|&row| relation.contains(row, column)).count()))
        .collect();
    let mut levels: Vec<Vec<usize>> = Vec::new();
    let mut placed = 0;

    while placed < n {
        let level: Vec<usize> = (0..n).filter(|&i| in_degree[i] == Some(0)).collect();
        if level.is_empty() {
            let elements = find_cycle(relation, &in_degree);
            warn!(?elements, "cyclic order, cannot level");
            return Err(RelationError::CyclicOrder { elements });
        }
        for &i in &level {
            in_degree[i] = None;
        }
        for &row in &level {
            for (column, degree) in in_degree.iter_mut().enumerate() {
                if let Some(d) = degree {
                    if relation.contains(row, column) {
                        *d -= 1;
                    }
                }
            }
        }
        placed += level.len();
        trace!(level = levels.len(), ?level, "formed level");
        levels.push(level);
    }
    debug!(size = n, levels = levels.len(), "levelled order");
    Ok(levels)
}

/// Levels of `labels`, where `labels[i]` names element `i` of `relation`.
pub fn levels<T: Clone>(relation: &Relation, labels: &[T]) -> Result<Vec<Vec<T>>> {
    if labels.len() != relation.size() {
        return Err(RelationError::LabelCount { expected: relation.size(), actual: labels.len() });
    }
    let indices = level_indices(relation)?;
    Ok(indices
        .into_iter()
        .map(|level| level.into_iter().map(|i| labels[i].clone()).collect())
        .collect())
}

// Every element left over has a predecessor that is also left over, so the
// leftovers contain a cycle. Any strongly connected component with more than
// one element, or with a self loop, is one.
fn find_cycle(relation: &Relation, in_degree: &[Option<usize>]) -> Vec<usize> {
    let mut cycle = strongly_connected_components(relation)
        .into_iter()
        .find(|c| c.len() > 1 || relation.contains(c[0], c[0]))
        .unwrap_or_else(|| (0..in_degree.len()).filter(|&i| in_degree[i].is_some()).collect());
    cycle.sort_unstable();
    cycle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dominance::reduce_to_covering, relation::tests::rel_sized};

    #[test]
    fn small_order() {
        let r = rel_sized(4, &[(1, 2), (1, 3), (2, 4)]);
        let labels = ['a', 'b', 'c', 'd'];
        assert_eq!(levels(&r, &labels).unwrap(), vec![vec!['a'], vec!['b', 'c'], vec!['d']]);
    }

    #[test]
    fn unrelated_elements_share_first_level() {
        let r = rel_sized(3, &[(3, 1)]);
        assert_eq!(level_indices(&r).unwrap(), vec![vec![1, 2], vec![0]]);
        assert_eq!(level_indices(&Relation::new(3)).unwrap(), vec![vec![0, 1, 2]]);
        assert!(level_indices(&Relation::default()).unwrap().is_empty());
    }

    #[test]
    fn label_count_checked() {
        let r = Relation::new(3);
        assert_eq!(
            levels(&r, &["x", "y"]),
            Err(RelationError::LabelCount { expected: 3, actual: 2 })
        );
    }

    #[test]
    fn cycle_rejected() {
        let r = rel_sized(4, &[(1, 2), (2, 3), (3, 2), (3, 4)]);
        assert_eq!(level_indices(&r), Err(RelationError::CyclicOrder { elements: vec![1, 2] }));
    }

    #[test]
    fn self_loop_rejected() {
        let r = rel_sized(2, &[(1, 2), (2, 2)]);
        assert_eq!(level_indices(&r), Err(RelationError::CyclicOrder { elements: vec![1] }));
    }

    #[test]
    fn product_order_levels_by_diagonal() {
        // 3x3 grid of points under (x1 <= x2 && y1 <= y2)
        let points: Vec<(i32, i32)> =
            (0..3).flat_map(|x| (0..3).map(move |y| (x, y))).collect();
        let mut r = Relation::from_predicate(&points, |a, b| a.0 <= b.0 && a.1 <= b.1);
        reduce_to_covering(&mut r);
        let levels = levels(&r, &points).unwrap();
        assert_eq!(levels.len(), 5);
        for (depth, level) in levels.iter().enumerate() {
            assert!(level.iter().all(|&(x, y)| (x + y) as usize == depth));
        }
        assert_eq!(levels[2], vec![(0, 2), (1, 1), (2, 0)]);
    }

    #[quickcheck]
    fn levels_respect_order(r: Relation) -> bool {
        let mut dag = Relation::new(r.size());
        for (row, column) in r.iter().filter(|(row, column)| row > column) {
            dag.put(row, column, true);
        }
        let Ok(levels) = level_indices(&dag) else {
            return false;
        };
        let mut depth = vec![0; dag.size()];
        for (d, level) in levels.iter().enumerate() {
            for &i in level {
                depth[i] = d;
            }
        }
        levels.iter().map(Vec::len).sum::<usize>() == dag.size()
            && dag.iter().all(|(row, column)| depth[row] < depth[column])
    }
}
