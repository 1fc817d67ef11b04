//! Optimal planar arrangement of a free tree.
//!
//! Rooting a free tree at a centroid vertex and laying it out projectively
//! yields the minimum over all crossing-free arrangements. When the tree has
//! two centroids the one with the lighter heaviest branch (the branch towards
//! the other centroid not counted) roots the tree; ties go to the lower
//! vertex index.

use crate::arrangement::LinearArrangement;
use crate::graphs::{FreeTree, GraphCore, Neighbours};
use crate::index::Node;
use crate::minimise::projective::embed_rooted;
use crate::properties::{centroid_of_component, rooted_subtree_sizes, subtree_sizes_from};

pub(crate) fn min_planar(t: &FreeTree) -> (u64, LinearArrangement) {
    let n = t.num_nodes();
    if n == 1 {
        return (0, LinearArrangement::identity(1));
    }

    let root = match centroid_of_component(t, Node::new(0)) {
        (c, None) => c,
        (c1, Some(c2)) => {
            let (h1, h2) = (heaviest_branch_excluding(t, c1, c2), heaviest_branch_excluding(t, c2, c1));
            match h1.cmp(&h2) {
                std::cmp::Ordering::Less => c1,
                std::cmp::Ordering::Greater => c2,
                std::cmp::Ordering::Equal => c1.min(c2),
            }
        }
    };

    let rooted = t.to_rooted(root);
    let sizes = rooted_subtree_sizes(&rooted);
    embed_rooted(&rooted, &sizes)
}

/// Size of the heaviest subtree hanging off `c`, the branch containing
/// `excluded` not considered.
fn heaviest_branch_excluding(t: &FreeTree, c: Node, excluded: Node) -> usize {
    let sizes = subtree_sizes_from(t, c);
    t.neighbours(c).iter().filter(|&&w| w != excluded).map(|&w| sizes[w]).max().unwrap_or(0)
}

#[cfg(test)]
mod test {
    use super::min_planar;
    use crate::graphs::FreeTree;
    use crate::index::Node;
    use crate::measure::{num_crossings, sum_edge_lengths};

    fn tree(n: usize, edges: &[(usize, usize)]) -> FreeTree {
        let mut t = FreeTree::new(n);
        let edges: Vec<_> = edges.iter().map(|&(u, v)| (Node::new(u), Node::new(v))).collect();
        t.add_edges(&edges, true, false);
        t
    }

    #[test]
    fn trivial_cases() {
        assert_eq!(min_planar(&FreeTree::new(1)).0, 0);
        assert_eq!(min_planar(&tree(2, &[(0, 1)])).0, 1);
    }

    #[test]
    fn path_costs_its_length() {
        let t = tree(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
        let (cost, arr) = min_planar(&t);
        assert_eq!(cost, 5);
        assert_eq!(sum_edge_lengths(&t, &arr), 5);
        assert_eq!(num_crossings(&t, &arr), 0);
    }

    #[test]
    fn star_costs_like_projective() {
        let t = tree(5, &[(2, 0), (2, 1), (2, 3), (2, 4)]);
        let (cost, arr) = min_planar(&t);
        assert_eq!(cost, 6);
        assert_eq!(num_crossings(&t, &arr), 0);
    }

    #[test]
    fn planar_beats_rooting_at_a_leaf() {
        // a bistar; rooting anywhere but a hub would be worse
        let t = tree(6, &[(0, 1), (0, 2), (0, 3), (1, 4), (1, 5)]);
        let (cost, arr) = min_planar(&t);
        assert_eq!(sum_edge_lengths(&t, &arr), cost);
        assert_eq!(num_crossings(&t, &arr), 0);
        assert_eq!(cost, 7);
    }

    #[test]
    fn deterministic() {
        let t = tree(7, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)]);
        let (c1, a1) = min_planar(&t);
        let (c2, a2) = min_planar(&t);
        assert_eq!(c1, c2);
        assert_eq!(a1, a2);
    }
}
