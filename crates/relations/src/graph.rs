//! A relation read as a directed graph: vertex `i` (1-based) has an edge to
//! `j` when `(i, j)` is related.

use crate::{
    error::{RelationError, Result},
    Relation,
};

/// Every walk with exactly `length` edges starting at `start`.
///
/// Walks are listed depth-first, following edges in increasing order of the
/// target vertex. Vertices may repeat.
pub fn walks_of_length(
    relation: &Relation,
    start: usize,
    length: usize,
) -> Result<Vec<Vec<usize>>> {
    if start == 0 || start > relation.size() {
        return Err(RelationError::VertexOutOfRange { vertex: start, size: relation.size() });
    }
    let mut walks = Vec::new();
    let mut current = vec![start];
    extend_walks(relation, length, &mut current, &mut walks);
    Ok(walks)
}

fn extend_walks(
    relation: &Relation,
    length: usize,
    current: &mut Vec<usize>,
    walks: &mut Vec<Vec<usize>>,
) {
    if current.len() == length + 1 {
        walks.push(current.clone());
        return;
    }
    let last = current[current.len() - 1] - 1;
    for next in 0..relation.size() {
        if relation.contains(last, next) {
            current.push(next + 1);
            extend_walks(relation, length, current, walks);
            current.pop();
        }
    }
}

fn has_edge(relation: &Relation, from: usize, to: usize) -> bool {
    from != 0 && to != 0 && relation.contains(from - 1, to - 1)
}

/// Every consecutive pair of `vertices` is an edge. A single vertex counts
/// as a walk if it belongs to the graph.
pub fn is_connected_walk(relation: &Relation, vertices: &[usize]) -> bool {
    match vertices {
        [] => false,
        [v] => *v != 0 && *v <= relation.size(),
        _ => vertices.windows(2).all(|w| has_edge(relation, w[0], w[1])),
    }
}

/// The walk ends where it starts.
pub fn is_closed(vertices: &[usize]) -> bool {
    matches!((vertices.first(), vertices.last()), (Some(a), Some(b)) if a == b)
}

/// A walk that never uses the same edge twice, in either direction.
pub fn is_chain(relation: &Relation, vertices: &[usize]) -> bool {
    if !is_connected_walk(relation, vertices) {
        return false;
    }
    let edges: Vec<(usize, usize)> = vertices.windows(2).map(|w| (w[0], w[1])).collect();
    for (i, &(a, b)) in edges.iter().enumerate() {
        for &other in &edges[i + 1..] {
            if other == (a, b) || other == (b, a) {
                return false;
            }
        }
    }
    true
}

/// A walk whose interior vertices are all distinct. The endpoints may
/// coincide with each other.
pub fn is_simple_chain(relation: &Relation, vertices: &[usize]) -> bool {
    if !is_connected_walk(relation, vertices) {
        return false;
    }
    let interior: &[usize] = if vertices.len() > 2 { &vertices[1..vertices.len() - 1] } else { &[] };
    interior.iter().enumerate().all(|(i, v)| !interior[i + 1..].contains(v))
}

pub fn is_cycle(relation: &Relation, vertices: &[usize]) -> bool {
    is_closed(vertices) && is_chain(relation, vertices)
}

pub fn is_simple_cycle(relation: &Relation, vertices: &[usize]) -> bool {
    is_closed(vertices) && is_simple_chain(relation, vertices)
}

struct Tarjan<'a> {
    relation: &'a Relation,
    index: usize,
    stack: Vec<usize>,
    indices: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    onstack: Vec<bool>,
    components: Vec<Vec<usize>>,
}

/// Strongly connected components (0-based vertices), in the order Tarjan's
/// algorithm completes them: a component comes before every component that
/// can reach it.
pub fn strongly_connected_components(relation: &Relation) -> Vec<Vec<usize>> {
    let n = relation.size();
    let mut state = Tarjan {
        relation,
        index: 0,
        stack: Vec::new(),
        indices: vec![None; n],
        lowlink: vec![0; n],
        onstack: vec![false; n],
        components: Vec::new(),
    };
    for v in 0..n {
        if state.indices[v].is_none() {
            state.strongconnect(v);
        }
    }
    state.components
}

impl Tarjan<'_> {
    fn strongconnect(&mut self, v: usize) {
        self.indices[v] = Some(self.index);
        self.lowlink[v] = self.index;
        self.index += 1;
        self.stack.push(v);
        self.onstack[v] = true;

        for w in 0..self.relation.size() {
            if v == w || !self.relation.contains(v, w) {
                continue;
            }
            let seen = self.indices[w];
            match seen {
                None => {
                    self.strongconnect(w);
                    self.lowlink[v] = self.lowlink[v].min(self.lowlink[w]);
                }
                Some(index) if self.onstack[w] => {
                    self.lowlink[v] = self.lowlink[v].min(index);
                }
                Some(_) => {}
            }
        }

        if Some(self.lowlink[v]) == self.indices[v] {
            let mut component = Vec::new();
            while let Some(w) = self.stack.pop() {
                self.onstack[w] = false;
                component.push(w);
                if v == w {
                    break;
                }
            }
            self.components.push(component);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::tests::rel;

    #[test]
    fn walks_of_given_length() {
        let r = rel(&[(1, 2), (1, 3), (2, 3), (3, 1)]);
        assert_eq!(walks_of_length(&r, 1, 0).unwrap(), vec![vec![1]]);
        assert_eq!(walks_of_length(&r, 1, 1).unwrap(), vec![vec![1, 2], vec![1, 3]]);
        assert_eq!(
            walks_of_length(&r, 1, 2).unwrap(),
            vec![vec![1, 2, 3], vec![1, 3, 1]]
        );
        assert_eq!(
            walks_of_length(&r, 4, 1),
            Err(RelationError::VertexOutOfRange { vertex: 4, size: 3 })
        );
        assert!(walks_of_length(&r, 0, 1).is_err());
    }

    #[test]
    fn dead_end_yields_nothing() {
        let r = rel(&[(1, 2)]);
        assert!(walks_of_length(&r, 2, 1).unwrap().is_empty());
    }

    #[test]
    fn walk_predicates() {
        let r = rel(&[(1, 2), (2, 1), (2, 3), (3, 1), (3, 4)]);
        assert!(is_connected_walk(&r, &[1, 2, 3, 4]));
        assert!(!is_connected_walk(&r, &[1, 3]));
        assert!(!is_connected_walk(&r, &[]));
        assert!(!is_connected_walk(&r, &[5]));

        assert!(is_chain(&r, &[1, 2, 3, 1]));
        // Uses 1-2 and then 2-1
        assert!(!is_chain(&r, &[1, 2, 1]));
        assert!(is_simple_chain(&r, &[1, 2, 1]));
        assert!(!is_simple_chain(&r, &[1, 2, 1, 2, 3]));

        assert!(is_cycle(&r, &[1, 2, 3, 1]));
        assert!(!is_cycle(&r, &[1, 2, 3, 4]));
        assert!(is_simple_cycle(&r, &[2, 3, 1, 2]));
        assert!(!is_simple_cycle(&r, &[1, 2, 1, 2, 3, 1]));
    }

    #[test]
    fn scc_empty() {
        assert_eq!(strongly_connected_components(&Relation::default()), Vec::<Vec<usize>>::new());
    }

    #[test]
    fn scc_singletons() {
        assert_eq!(strongly_connected_components(&Relation::new(2)), vec![vec![0], vec![1]]);
    }

    #[test]
    fn scc_finds_cycle() {
        let r = rel(&[(1, 2), (2, 3), (3, 2), (3, 4)]);
        let mut components = strongly_connected_components(&r);
        for c in &mut components {
            c.sort_unstable();
        }
        assert_eq!(components, vec![vec![3], vec![1, 2], vec![0]]);
    }
}
