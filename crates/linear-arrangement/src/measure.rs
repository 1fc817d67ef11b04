//! Numeric properties of an arrangement: edge lengths and crossings.
//!
//! The minimisers promise `cost == sum_edge_lengths` and, for the constrained
//! variants, zero crossings / an uncovered root; these functions are how those
//! promises are checked.

use crate::arrangement::LinearArrangement;
use crate::graphs::{Edge, FreeTree, GraphCore, RootedTree, UndirectedGraph};

/// Sum over all edges `{u, v}` of `|position(u) - position(v)|`.
pub fn sum_edge_lengths(t: &FreeTree, arr: &LinearArrangement) -> u64 {
    debug_assert_eq!(t.num_nodes(), arr.len());
    t.edges()
        .map(|(u, v)| arr.position(u).abs_diff(arr.position(v)) as u64)
        .sum()
}

/// Number of unordered pairs of edges whose position intervals strictly
/// interlace.
///
/// Quadratic in the number of edges; meant for verification, not for bulk
/// measurement.
pub fn num_crossings(t: &FreeTree, arr: &LinearArrangement) -> u64 {
    let edges: Vec<Edge> = t.edges().collect();
    let spans: Vec<(usize, usize)> = edges
        .iter()
        .map(|&(u, v)| {
            let (pu, pv) = (arr.position(u), arr.position(v));
            (pu.min(pv), pu.max(pv))
        })
        .collect();

    let mut crossings = 0;
    for i in 0..spans.len() {
        for j in i + 1..spans.len() {
            let (a1, a2) = spans[i];
            let (b1, b2) = spans[j];
            if (a1 < b1 && b1 < a2 && a2 < b2) || (b1 < a1 && a1 < b2 && b2 < a2) {
                crossings += 1;
            }
        }
    }
    crossings
}

/// Whether some edge `{u, v}` spans the root's position:
/// `position(u) < position(root) < position(v)`.
pub fn is_root_covered(t: &RootedTree, arr: &LinearArrangement) -> bool {
    let r = arr.position(t.root());
    t.as_directed().edges().any(|(u, v)| {
        let (pu, pv) = (arr.position(u), arr.position(v));
        (pu < r && r < pv) || (pv < r && r < pu)
    })
}

/// [sum_edge_lengths] for a plain undirected graph.
pub fn sum_edge_lengths_undirected(g: &UndirectedGraph, arr: &LinearArrangement) -> u64 {
    debug_assert_eq!(g.num_nodes(), arr.len());
    g.edges()
        .map(|(u, v)| arr.position(u).abs_diff(arr.position(v)) as u64)
        .sum()
}

#[cfg(test)]
mod test {
    use super::{is_root_covered, num_crossings, sum_edge_lengths};
    use crate::arrangement::LinearArrangement;
    use crate::graphs::FreeTree;
    use crate::index::Node;

    fn tree(n: usize, edges: &[(usize, usize)]) -> FreeTree {
        let mut t = FreeTree::new(n);
        let edges: Vec<_> = edges.iter().map(|&(u, v)| (Node::new(u), Node::new(v))).collect();
        t.add_edges(&edges, true, false);
        t
    }

    #[test]
    fn lengths_on_the_identity() {
        let t = tree(4, &[(0, 1), (1, 2), (2, 3)]);
        let arr = LinearArrangement::identity(4);
        assert_eq!(sum_edge_lengths(&t, &arr), 3);
    }

    #[test]
    fn lengths_follow_the_arrangement() {
        let t = tree(3, &[(0, 1), (1, 2)]);
        let mut arr = LinearArrangement::identity(3);
        // 1 0 2: lengths 1 and 2
        arr.assign(Node::new(1), 0);
        arr.assign(Node::new(0), 1);
        assert_eq!(sum_edge_lengths(&t, &arr), 3);
    }

    #[test]
    fn crossing_detection() {
        // star arranged hub-last has no crossings; interleaving two edges does
        let t = tree(4, &[(0, 1), (0, 2), (0, 3)]);
        assert_eq!(num_crossings(&t, &LinearArrangement::identity(4)), 0);

        // edges {0,2} and {1,3} interlace under the identity
        let t = tree(4, &[(0, 2), (1, 3), (0, 1)]);
        assert_eq!(num_crossings(&t, &LinearArrangement::identity(4)), 1);
    }

    #[test]
    fn root_cover() {
        let t = tree(3, &[(0, 1), (1, 2)]);
        let rooted = t.to_rooted(Node::new(1));
        // 0 1 2: the root sits between its children but no edge spans it
        assert!(!is_root_covered(&rooted, &LinearArrangement::identity(3)));

        let rooted_at_leaf = t.to_rooted(Node::new(0));
        let mut arr = LinearArrangement::identity(3);
        // 1 0 2: edge {1, 2} spans the root 0
        arr.assign(Node::new(1), 0);
        arr.assign(Node::new(0), 1);
        assert!(is_root_covered(&rooted_at_leaf, &arr));
    }
}
