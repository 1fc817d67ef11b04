use linear_arrangement::{
    min_sum_edge_lengths, min_sum_edge_lengths_planar, min_sum_edge_lengths_projective,
    DirectedGraph, GraphCore, Node, PlanarAlgorithm, ProjectiveAlgorithm, RootedTree,
    UnconstrainedAlgorithm,
};

// "the quick brown fox jumps over the lazy dog", heads per word:
// jumps is the root, the other words attach below it.
const HEADS: [usize; 9] = [4, 4, 4, 5, 0, 5, 9, 9, 6];

fn main() {
    let n = HEADS.len();
    let mut graph = DirectedGraph::new(n);
    let mut root = Node::new(0);
    for (i, &head) in HEADS.iter().enumerate() {
        if head == 0 {
            root = Node::new(i);
        } else {
            graph.add_edge(Node::new(head - 1), Node::new(i), true, false);
        }
    }
    let tree = RootedTree::new(graph, root);
    assert!(tree.is_rooted_tree());
    let free = tree.to_free();

    let (d, arr) = min_sum_edge_lengths(&free, UnconstrainedAlgorithm::Shiloach).unwrap();
    println!("unconstrained D = {d}, arrangement {arr:?}");

    let (d, arr) = min_sum_edge_lengths_planar(&free, PlanarAlgorithm::AlemanyEstebanFerrer).unwrap();
    println!("planar        D = {d}, arrangement {arr:?}");

    let (d, arr) =
        min_sum_edge_lengths_projective(&tree, ProjectiveAlgorithm::AlemanyEstebanFerrer).unwrap();
    println!("projective    D = {d}, arrangement {arr:?}");

    // the sentence read in its original order has cost n - 1 at best
    assert!(d >= (free.num_nodes() - 1) as u64);
}
