//! This is a library for computing minimum-length [linear arrangements](https://en.wikipedia.org/wiki/Minimum_linear_arrangement)
//! of trees.
//!
//! A *linear arrangement* places the `n` vertices of a tree on the positions
//! `0..n`, one vertex per position. Its cost `D` is the sum over all edges of
//! the distance between the endpoints' positions. The library computes
//! arrangements minimising `D` under three regimes: unconstrained, *planar*
//! (drawing the edges as arcs above the vertex line crosses nothing) and
//! *projective* (planar, and no arc passes over the root).
//!
//! # Examples
//!
//! The minimum of a star is attained with the hub in the middle.
//! ```rust
//! # use std::error::Error;
//! #
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use linear_arrangement::{min_sum_edge_lengths, FreeTree, UnconstrainedAlgorithm};
//! use petgraph::graph::UnGraph;
//!
//! // a star with 4 leaves
//! let graph = UnGraph::<(), ()>::from_edges([(0, 1), (0, 2), (0, 3), (0, 4)]);
//! let star = FreeTree::from_graph(&graph)?;
//!
//! let (cost, arr) = min_sum_edge_lengths(&star, UnconstrainedAlgorithm::Shiloach)?;
//! assert_eq!(cost, 6);
//! assert!(arr.is_permutation());
//! # Ok(())
//! # }
//! ```
//!
//! Constrained variants never beat the unconstrained minimum.
//! ```rust
//! # use std::error::Error;
//! #
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use linear_arrangement::{
//!     min_sum_edge_lengths, min_sum_edge_lengths_planar, min_sum_edge_lengths_projective,
//!     FreeTree, Node, PlanarAlgorithm, ProjectiveAlgorithm, UnconstrainedAlgorithm,
//! };
//! use petgraph::graph::UnGraph;
//!
//! let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (1, 3), (3, 4), (3, 5)]);
//! let tree = FreeTree::from_graph(&graph)?;
//! let rooted = tree.to_rooted(Node::new(0));
//!
//! let (d, _) = min_sum_edge_lengths(&tree, UnconstrainedAlgorithm::Chung)?;
//! let (d_planar, _) = min_sum_edge_lengths_planar(&tree, PlanarAlgorithm::AlemanyEstebanFerrer)?;
//! let (d_projective, _) =
//!     min_sum_edge_lengths_projective(&rooted, ProjectiveAlgorithm::AlemanyEstebanFerrer)?;
//! assert!(d <= d_planar && d_planar <= d_projective);
//! # Ok(())
//! # }
//! ```
//!
//! # References
//! + \[Chu84\]: Fan R. K. Chung. "On optimal linear arrangements of trees". <https://doi.org/10.1016/0898-1221(84)90085-3>
//! + \[HS03\]: Robert A. Hochberg and Matthias F. Stallmann. "Optimal one-page tree embeddings in linear time". <https://doi.org/10.1016/S0020-0190(03)00261-8>
//! + \[AEF22\]: Lluís Alemany-Puig, Juan Luis Esteban, and Ramon Ferrer-i-Cancho. "Minimum projective linearizations of trees in linear time". <https://doi.org/10.1016/j.ipl.2021.106204>

#![forbid(unsafe_code)]
#![doc(test(attr(deny(warnings, rust_2018_idioms), allow(dead_code))))]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

mod arrangement;
mod index;
mod seq;

pub mod graphs;
pub mod measure;
pub mod properties;
pub mod sorting;
pub mod traversal;

mod minimise;

pub use arrangement::LinearArrangement;
pub use graphs::{
    DirectedGraph, Edge, FreeTree, GraphCore, InvalidTreeError, Neighbours, Orientation, RootedTree,
    UndirectedGraph,
};
pub use index::Node;
pub use minimise::{
    min_sum_edge_lengths, min_sum_edge_lengths_planar, min_sum_edge_lengths_projective, AsFreeTree,
    PlanarAlgorithm, ProjectiveAlgorithm, UnconstrainedAlgorithm,
};
pub use seq::Seq;
