//! Cross-cutting guarantees of the solvers and the tree types on random
//! inputs.

mod support;

use linear_arrangement::measure::{is_root_covered, num_crossings, sum_edge_lengths};
use linear_arrangement::properties::rooted_subtree_sizes;
use linear_arrangement::{
    min_sum_edge_lengths, min_sum_edge_lengths_planar, min_sum_edge_lengths_projective, GraphCore,
    Node, PlanarAlgorithm, ProjectiveAlgorithm, UnconstrainedAlgorithm,
};
use rand::Rng;
use support::{random_tree, rng};

#[test]
fn costs_match_the_arrangements_they_come_with() {
    let mut rng = rng();
    for n in (1..=12).chain([16, 20, 28, 40]) {
        for _ in 0..3 {
            let t = random_tree(n, &mut rng);
            let root = Node::new(rng.gen_range(0..n));
            let rooted = t.to_rooted(root);

            let (cost, arr) = min_sum_edge_lengths(&t, UnconstrainedAlgorithm::Shiloach).unwrap();
            assert!(arr.is_permutation());
            assert_eq!(sum_edge_lengths(&t, &arr), cost);

            let (cost, arr) =
                min_sum_edge_lengths_planar(&t, PlanarAlgorithm::AlemanyEstebanFerrer).unwrap();
            assert!(arr.is_permutation());
            assert_eq!(sum_edge_lengths(&t, &arr), cost);
            assert_eq!(num_crossings(&t, &arr), 0);

            let (cost, arr) =
                min_sum_edge_lengths_projective(&rooted, ProjectiveAlgorithm::AlemanyEstebanFerrer)
                    .unwrap();
            assert!(arr.is_permutation());
            assert_eq!(sum_edge_lengths(&t, &arr), cost);
            assert_eq!(num_crossings(&t, &arr), 0);
            assert!(!is_root_covered(&rooted, &arr));
        }
    }
}

#[test]
fn constrained_minima_dominate() {
    let mut rng = rng();
    for n in (1..=14).chain([19, 26, 37]) {
        for _ in 0..3 {
            let t = random_tree(n, &mut rng);
            let root = Node::new(rng.gen_range(0..n));
            let rooted = t.to_rooted(root);

            let (unconstrained, _) = min_sum_edge_lengths(&t, UnconstrainedAlgorithm::Chung).unwrap();
            let (planar, _) =
                min_sum_edge_lengths_planar(&t, PlanarAlgorithm::AlemanyEstebanFerrer).unwrap();
            let (projective, _) =
                min_sum_edge_lengths_projective(&rooted, ProjectiveAlgorithm::AlemanyEstebanFerrer)
                    .unwrap();

            assert!(unconstrained <= planar, "n={n}");
            assert!(planar <= projective, "n={n} root={root}");
        }
    }
}

#[test]
fn outputs_are_deterministic() {
    let mut rng = rng();
    for n in [5, 9, 13] {
        let t = random_tree(n, &mut rng);
        let rooted = t.to_rooted(Node::new(n / 2));

        let a = min_sum_edge_lengths(&t, UnconstrainedAlgorithm::Shiloach).unwrap();
        let b = min_sum_edge_lengths(&t, UnconstrainedAlgorithm::Shiloach).unwrap();
        assert_eq!(a, b);

        let a = min_sum_edge_lengths_planar(&t, PlanarAlgorithm::AlemanyEstebanFerrer).unwrap();
        let b = min_sum_edge_lengths_planar(&t, PlanarAlgorithm::AlemanyEstebanFerrer).unwrap();
        assert_eq!(a, b);

        let a = min_sum_edge_lengths_projective(&rooted, ProjectiveAlgorithm::AlemanyEstebanFerrer)
            .unwrap();
        let b = min_sum_edge_lengths_projective(&rooted, ProjectiveAlgorithm::AlemanyEstebanFerrer)
            .unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn solvers_leave_the_input_unchanged() {
    let mut rng = rng();
    let t = random_tree(11, &mut rng);
    let before: Vec<_> = t.edges().collect();
    let _ = min_sum_edge_lengths(&t, UnconstrainedAlgorithm::Shiloach).unwrap();
    let _ = min_sum_edge_lengths_planar(&t, PlanarAlgorithm::AlemanyEstebanFerrer).unwrap();
    let after: Vec<_> = t.edges().collect();
    assert_eq!(before, after);
}

#[test]
fn rooting_round_trips_the_edge_set() {
    let mut rng = rng();
    for n in 1..=10 {
        let t = random_tree(n, &mut rng);
        let root = Node::new(rng.gen_range(0..n));
        let back = t.to_rooted(root).to_free();
        let mut original: Vec<_> = t.edges().collect();
        let mut returned: Vec<_> = back.edges().collect();
        original.sort_unstable();
        returned.sort_unstable();
        assert_eq!(original, returned);
    }
}

#[test]
fn subtree_sizes_recompute_identically() {
    let mut rng = rng();
    let t = random_tree(9, &mut rng);
    let mut rooted = t.to_rooted(Node::new(3));
    rooted.compute_subtree_sizes();
    let first = rooted.subtree_sizes().unwrap().to_vec();
    assert_eq!(first, rooted_subtree_sizes(&rooted).as_slice());
    rooted.compute_subtree_sizes();
    assert_eq!(first, rooted.subtree_sizes().unwrap());
    assert_eq!(first[rooted.root().index()], rooted.num_nodes());
}
