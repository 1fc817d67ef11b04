//! Minimum-`D` solvers and their public entry points.
//!
//! `D` is the sum over the tree's edges of the positional distance between
//! the endpoints. Three variants are solved: over all arrangements
//! ([min_sum_edge_lengths]), over crossing-free arrangements
//! ([min_sum_edge_lengths_planar]), and over crossing-free arrangements that
//! also leave the root uncovered ([min_sum_edge_lengths_projective]).
//!
//! All solvers are deterministic: the same normalised input tree produces
//! the same cost *and* the same arrangement on every run and platform.

mod planar;
mod projective;
mod unconstrained;

use std::borrow::Cow;

use tracing::{info, instrument};

use crate::arrangement::LinearArrangement;
use crate::graphs::{ensure_rooted_tree, FreeTree, GraphCore, InvalidTreeError, RootedTree};
use crate::properties::rooted_subtree_sizes;

/// Algorithms for the unconstrained minimum.
///
/// The two published formulations solve the identical recurrence; both names
/// are accepted and dispatch to the same solver.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnconstrainedAlgorithm {
    /// Shiloach's minimum linear arrangement algorithm, with the published
    /// corrections.
    Shiloach,
    /// Chung's formulation of the same optimisation.
    Chung,
}

/// Algorithms for the planar minimum.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PlanarAlgorithm {
    /// Hochberg-Stallmann style interval embedding from a centroidal root,
    /// in the corrected form of Alemany, Esteban and Ferrer-i-Cancho.
    AlemanyEstebanFerrer,
}

/// Algorithms for the projective minimum.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ProjectiveAlgorithm {
    /// Interval embedding from the sorted adjacency of the given root.
    AlemanyEstebanFerrer,
}

/// Tree inputs accepted by the free-tree solvers.
///
/// Rooted trees are accepted too: they drop their orientation on the way in.
pub trait AsFreeTree {
    /// The free tree the solver runs on.
    fn as_free_tree(&self) -> Cow<'_, FreeTree>;
}

impl AsFreeTree for FreeTree {
    fn as_free_tree(&self) -> Cow<'_, FreeTree> {
        Cow::Borrowed(self)
    }
}

impl AsFreeTree for RootedTree {
    fn as_free_tree(&self) -> Cow<'_, FreeTree> {
        Cow::Owned(self.to_free())
    }
}

/// Minimum sum of edge lengths over all arrangements of a tree.
///
/// Returns the optimal cost and an arrangement attaining it. `O(n log n)`.
///
/// # Errors
///
/// [InvalidTreeError] if the input is not a tree.
#[instrument(skip_all)]
pub fn min_sum_edge_lengths<T: AsFreeTree>(
    t: &T,
    algorithm: UnconstrainedAlgorithm,
) -> Result<(u64, LinearArrangement), InvalidTreeError> {
    let t = t.as_free_tree();
    if !t.is_tree() {
        return Err(InvalidTreeError);
    }
    let (cost, arr) = match algorithm {
        UnconstrainedAlgorithm::Shiloach | UnconstrainedAlgorithm::Chung => {
            unconstrained::min_unconstrained(&t)
        }
    };
    debug_assert!(arr.is_permutation());
    info!(n = t.num_nodes(), cost, "minimum arrangement");
    Ok((cost, arr))
}

/// Minimum sum of edge lengths over the crossing-free arrangements of a
/// tree.
///
/// # Errors
///
/// [InvalidTreeError] if the input is not a tree.
#[instrument(skip_all)]
pub fn min_sum_edge_lengths_planar<T: AsFreeTree>(
    t: &T,
    algorithm: PlanarAlgorithm,
) -> Result<(u64, LinearArrangement), InvalidTreeError> {
    let t = t.as_free_tree();
    if !t.is_tree() {
        return Err(InvalidTreeError);
    }
    let PlanarAlgorithm::AlemanyEstebanFerrer = algorithm;
    let (cost, arr) = planar::min_planar(&t);
    debug_assert!(arr.is_permutation());
    info!(n = t.num_nodes(), cost, "minimum planar arrangement");
    Ok((cost, arr))
}

/// Minimum sum of edge lengths over the projective arrangements of a rooted
/// tree: crossing-free, and no edge covers the root.
///
/// # Errors
///
/// [InvalidTreeError] if the input's skeleton is not a tree or its edges are
/// not uniformly oriented.
#[instrument(skip_all)]
pub fn min_sum_edge_lengths_projective(
    t: &RootedTree,
    algorithm: ProjectiveAlgorithm,
) -> Result<(u64, LinearArrangement), InvalidTreeError> {
    ensure_rooted_tree(t)?;
    let ProjectiveAlgorithm::AlemanyEstebanFerrer = algorithm;
    let sizes = rooted_subtree_sizes(t);
    let (cost, arr) = projective::embed_rooted(t, &sizes);
    debug_assert!(arr.is_permutation());
    info!(n = t.num_nodes(), cost, "minimum projective arrangement");
    Ok((cost, arr))
}

#[cfg(test)]
mod test {
    use super::{
        min_sum_edge_lengths, min_sum_edge_lengths_planar, min_sum_edge_lengths_projective,
        PlanarAlgorithm, ProjectiveAlgorithm, UnconstrainedAlgorithm,
    };
    use crate::graphs::FreeTree;
    use crate::index::Node;

    fn tree(n: usize, edges: &[(usize, usize)]) -> FreeTree {
        let mut t = FreeTree::new(n);
        let edges: Vec<_> = edges.iter().map(|&(u, v)| (Node::new(u), Node::new(v))).collect();
        t.add_edges(&edges, true, false);
        t
    }

    #[test]
    fn non_trees_are_rejected() {
        let forest = tree(4, &[(0, 1), (2, 3)]);
        assert!(min_sum_edge_lengths(&forest, UnconstrainedAlgorithm::Shiloach).is_err());
        assert!(min_sum_edge_lengths_planar(&forest, PlanarAlgorithm::AlemanyEstebanFerrer).is_err());
    }

    #[test]
    fn algorithm_names_agree() {
        let t = tree(5, &[(0, 1), (1, 2), (1, 3), (3, 4)]);
        let a = min_sum_edge_lengths(&t, UnconstrainedAlgorithm::Shiloach).unwrap();
        let b = min_sum_edge_lengths(&t, UnconstrainedAlgorithm::Chung).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rooted_trees_convert_implicitly() {
        let t = tree(5, &[(0, 1), (1, 2), (1, 3), (3, 4)]);
        let rooted = t.to_rooted(Node::new(3));
        let a = min_sum_edge_lengths(&t, UnconstrainedAlgorithm::Chung).unwrap();
        let b = min_sum_edge_lengths(&rooted, UnconstrainedAlgorithm::Chung).unwrap();
        assert_eq!(a.0, b.0);
    }

    #[test]
    fn dominance_chain() {
        let t = tree(7, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)]);
        let rooted = t.to_rooted(Node::new(0));
        let (unconstrained, _) = min_sum_edge_lengths(&t, UnconstrainedAlgorithm::Shiloach).unwrap();
        let (planar, _) = min_sum_edge_lengths_planar(&t, PlanarAlgorithm::AlemanyEstebanFerrer).unwrap();
        let (projective, _) =
            min_sum_edge_lengths_projective(&rooted, ProjectiveAlgorithm::AlemanyEstebanFerrer).unwrap();
        assert!(unconstrained <= planar);
        assert!(planar <= projective);
    }

    #[test]
    fn invalid_orientation_is_rejected() {
        use crate::graphs::{DirectedGraph, RootedTree};

        let mut g = DirectedGraph::new(3);
        g.add_edge(Node::new(1), Node::new(0), true, false);
        g.add_edge(Node::new(2), Node::new(1), true, false);
        let t = RootedTree::new(g, Node::new(1));
        assert!(min_sum_edge_lengths_projective(&t, ProjectiveAlgorithm::AlemanyEstebanFerrer).is_err());
    }
}
