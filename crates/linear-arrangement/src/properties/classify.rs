use std::fmt::{Debug, Formatter};

use crate::graphs::{FreeTree, GraphCore, Neighbours};
use crate::index::Node;
use crate::properties::pivot_view;
use crate::seq::Seq;

/// Shape classes of free trees.
///
/// The classes overlap (every path is also a caterpillar); classification
/// reports the first match in the order the variants are declared, so a tree
/// always gets its most specific class.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum TreeType {
    /// A path: every vertex has degree at most 2.
    Linear,
    /// One hub adjacent to all other vertices.
    Star,
    /// A star with one of its edges subdivided once.
    QuasiStar,
    /// Two adjacent hubs, every other vertex a leaf of one of them.
    Bistar,
    /// A perfect binary tree: one degree-2 root, inner vertices with two
    /// children each, all leaves at the same depth.
    BalancedBinary,
    /// Removing all leaves yields a path.
    Caterpillar,
    /// Exactly one vertex of degree 3 or more; disjoint paths hang off it.
    Spider,
    /// None of the above.
    Unknown,
}

impl Debug for TreeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TreeType::Linear => "Linear",
            TreeType::Star => "Star",
            TreeType::QuasiStar => "QuasiStar",
            TreeType::Bistar => "Bistar",
            TreeType::BalancedBinary => "BalancedBinary",
            TreeType::Caterpillar => "Caterpillar",
            TreeType::Spider => "Spider",
            TreeType::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Classify the shape of a free tree. `O(n)`.
///
/// The input must be a tree.
pub fn classify_tree(t: &FreeTree) -> TreeType {
    debug_assert!(t.is_tree());
    let n = t.num_nodes();
    if n <= 2 {
        return TreeType::Linear;
    }

    let degrees: Vec<usize> = (0..n).map(|u| t.degree(Node::new(u))).collect();
    let leaves = degrees.iter().filter(|&&d| d == 1).count();
    let max_degree = degrees.iter().copied().max().unwrap_or(0);

    if max_degree <= 2 {
        return TreeType::Linear;
    }
    if max_degree == n - 1 {
        return TreeType::Star;
    }
    if is_quasi_star(n, &degrees, leaves) {
        return TreeType::QuasiStar;
    }
    if is_bistar(t, &degrees) {
        return TreeType::Bistar;
    }
    if is_balanced_binary(t, n, &degrees, leaves) {
        return TreeType::BalancedBinary;
    }
    if is_caterpillar(t, &degrees) {
        return TreeType::Caterpillar;
    }
    let high_degree = degrees.iter().filter(|&&d| d >= 3).count();
    if high_degree == 1 {
        return TreeType::Spider;
    }
    TreeType::Unknown
}

// Degree multiset {n-2, 2, 1^(n-2)}. In a tree this forces the degree-2
// vertex to hang between the hub and a leaf.
fn is_quasi_star(n: usize, degrees: &[usize], leaves: usize) -> bool {
    let hubs = degrees.iter().filter(|&&d| d == n - 2).count();
    let middles = degrees.iter().filter(|&&d| d == 2).count();
    hubs == 1 && middles == 1 && leaves == n - 2
}

fn is_bistar(t: &FreeTree, degrees: &[usize]) -> bool {
    let internal: Vec<Node> =
        (0..degrees.len()).filter(|&u| degrees[u] >= 2).map(Node::new).collect();
    internal.len() == 2 && t.has_edge(internal[0], internal[1])
}

fn is_caterpillar(t: &FreeTree, degrees: &[usize]) -> bool {
    // The non-leaf vertices of a tree induce a subtree; that subtree is a
    // path exactly when no internal vertex has three internal neighbours.
    for u in 0..degrees.len() {
        if degrees[u] < 2 {
            continue;
        }
        let internal_neighbours =
            t.neighbours(Node::new(u)).iter().filter(|&&w| degrees[w.index()] >= 2).count();
        if internal_neighbours > 2 {
            return false;
        }
    }
    true
}

fn is_balanced_binary(t: &FreeTree, n: usize, degrees: &[usize], leaves: usize) -> bool {
    if !(n + 1).is_power_of_two() || n < 7 {
        return false;
    }
    let roots: Vec<usize> = (0..n).filter(|&u| degrees[u] == 2).collect();
    let inner = degrees.iter().filter(|&&d| d == 3).count();
    if roots.len() != 1 || leaves != (n + 1) / 2 || 1 + inner + leaves != n {
        return false;
    }

    // With that degree profile the tree is perfect exactly when all leaves
    // sit at the same depth below the degree-2 vertex.
    let root = Node::new(roots[0]);
    let view = pivot_view(t, root, false);
    let mut depth: Seq<usize> = Seq::new(n);
    for &u in &view.order {
        if u != root {
            let d = depth[view.parent[u]] + 1;
            depth[u] = d;
        }
    }
    let leaf_depths: Vec<usize> =
        (0..n).filter(|&u| degrees[u] == 1).map(|u| depth[Node::new(u)]).collect();
    leaf_depths.windows(2).all(|w| w[0] == w[1])
}
