use std::num::ParseIntError;
use std::path::Path;

use linear_arrangement::{DirectedGraph, Edge, FreeTree, GraphCore, Node, RootedTree};
use thiserror::Error;

/// A head vector: entry `i` holds the 1-based parent of vertex `i + 1`, and
/// `0` marks the root. The in-memory tree types are 0-based.
pub type HeadVector = Vec<u32>;

/// Failures turning text or a head vector into a tree.
#[derive(Error, Debug)]
pub enum HeadVectorError {
    /// A token was not an unsigned integer.
    #[error("parse int error")]
    ParseInt(#[from] ParseIntError),
    /// No entry was `0`.
    #[error("head vector has no root entry")]
    NoRoot,
    /// More than one entry was `0`.
    #[error("head vector has more than one root entry")]
    MultipleRoots,
    /// An entry exceeds the number of vertices, or points at its own vertex.
    #[error("head {head} is invalid for a vector of {n} entries")]
    InvalidHead {
        /// The offending 1-based head value.
        head: u32,
        /// Number of entries in the vector.
        n: usize,
    },
    /// The heads form a cycle somewhere, so the edges do not span a tree.
    #[error("head vector does not describe a tree")]
    NotATree,
    /// Reading the file failed.
    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Parse a whitespace-separated head vector.
pub fn parse_head_vector(text: &str) -> Result<HeadVector, HeadVectorError> {
    text.split_ascii_whitespace().map(|token| Ok(token.parse()?)).collect()
}

/// Read a head vector from a file.
pub fn read_head_vector<P: AsRef<Path>>(path: P) -> Result<HeadVector, HeadVectorError> {
    parse_head_vector(&std::fs::read_to_string(path)?)
}

/// The rooted tree a head vector describes, edges oriented away from the
/// root.
pub fn rooted_tree_from_head_vector(heads: &[u32]) -> Result<RootedTree, HeadVectorError> {
    let (root, edges) = edges_of(heads)?;
    let mut graph = DirectedGraph::new(heads.len());
    graph.add_edges(&edges, true, false);
    let tree = RootedTree::new(graph, root);
    if !tree.is_rooted_tree() {
        return Err(HeadVectorError::NotATree);
    }
    Ok(tree)
}

/// The free tree a head vector describes.
pub fn free_tree_from_head_vector(heads: &[u32]) -> Result<FreeTree, HeadVectorError> {
    Ok(rooted_tree_from_head_vector(heads)?.to_free())
}

/// The head vector of a rooted tree.
///
/// The tree must be a valid rooted tree.
pub fn head_vector_from_rooted_tree(tree: &RootedTree) -> HeadVector {
    debug_assert!(tree.is_rooted_tree());
    (0..tree.num_nodes())
        .map(|v| match tree.parent(Node::new(v)) {
            Some(parent) => parent.index() as u32 + 1,
            None => 0,
        })
        .collect()
}

fn edges_of(heads: &[u32]) -> Result<(Node, Vec<Edge>), HeadVectorError> {
    let n = heads.len();
    let mut root = None;
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    for (i, &head) in heads.iter().enumerate() {
        if head == 0 {
            if root.replace(Node::new(i)).is_some() {
                return Err(HeadVectorError::MultipleRoots);
            }
        } else {
            if head as usize > n || head as usize == i + 1 {
                return Err(HeadVectorError::InvalidHead { head, n });
            }
            edges.push((Node::new(head as usize - 1), Node::new(i)));
        }
    }
    let root = root.ok_or(HeadVectorError::NoRoot)?;
    Ok((root, edges))
}
