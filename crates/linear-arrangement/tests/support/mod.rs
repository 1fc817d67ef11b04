//! Shared helpers for the integration tests: head-vector construction,
//! random trees, and the factorial brute-force reference.
#![allow(dead_code)]

use linear_arrangement::measure::sum_edge_lengths;
use linear_arrangement::{Edge, FreeTree, LinearArrangement, Node, RootedTree};
use rand::Rng;
use rand_pcg::Pcg64;

/// The test-suite RNG: fixed seed, so failures reproduce.
pub fn rng() -> Pcg64 {
    Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96)
}

/// Build the rooted tree of a head vector (1-based heads, `0` = root).
pub fn rooted_from_heads(heads: &[usize]) -> RootedTree {
    let n = heads.len();
    let mut root = None;
    let mut edges: Vec<Edge> = Vec::new();
    for (i, &head) in heads.iter().enumerate() {
        if head == 0 {
            assert!(root.replace(Node::new(i)).is_none(), "two roots in head vector");
        } else {
            edges.push((Node::new(head - 1), Node::new(i)));
        }
    }
    let mut graph = linear_arrangement::DirectedGraph::new(n);
    graph.add_edges(&edges, true, false);
    let tree = RootedTree::new(graph, root.expect("no root in head vector"));
    assert!(tree.is_rooted_tree());
    tree
}

/// Build the free tree of a head vector.
pub fn free_from_heads(heads: &[usize]) -> FreeTree {
    rooted_from_heads(heads).to_free()
}

/// Random labelled tree on `n` vertices: each vertex attaches to a random
/// earlier one.
pub fn random_tree(n: usize, rng: &mut Pcg64) -> FreeTree {
    let mut t = FreeTree::new(n);
    let edges: Vec<Edge> =
        (1..n).map(|v| (Node::new(rng.gen_range(0..v)), Node::new(v))).collect();
    t.add_edges(&edges, true, false);
    assert!(t.is_tree());
    t
}

/// Minimum of `sum_edge_lengths` over every arrangement satisfying `accept`,
/// by enumerating all `n!` of them.
pub fn brute_force_min<F>(t: &FreeTree, mut accept: F) -> u64
where
    F: FnMut(&LinearArrangement) -> bool,
{
    use linear_arrangement::GraphCore;

    let n = t.num_nodes();
    let mut positions: Vec<usize> = (0..n).collect();
    let mut best = u64::MAX;
    heaps(&mut positions, n, &mut |positions| {
        let mut arr = LinearArrangement::identity(n);
        for (v, &p) in positions.iter().enumerate() {
            arr.assign(Node::new(v), p);
        }
        if accept(&arr) {
            best = best.min(sum_edge_lengths(t, &arr));
        }
    });
    best
}

fn heaps<F: FnMut(&[usize])>(items: &mut [usize], k: usize, visit: &mut F) {
    if k <= 1 {
        visit(items);
        return;
    }
    for i in 0..k {
        heaps(items, k - 1, visit);
        if k % 2 == 0 {
            items.swap(i, k - 1);
        } else {
            items.swap(0, k - 1);
        }
    }
}
