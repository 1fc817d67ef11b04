//! Shared tree I/O for the linear-arrangement tools: head vectors and edge
//! lists.

mod edge_list;
mod head_vector;

use clap::ValueEnum;
pub use edge_list::read_edge_list;
pub use edge_list::ReadEdgeListError;
pub use head_vector::free_tree_from_head_vector;
pub use head_vector::head_vector_from_rooted_tree;
pub use head_vector::parse_head_vector;
pub use head_vector::read_head_vector;
pub use head_vector::rooted_tree_from_head_vector;
pub use head_vector::HeadVector;
pub use head_vector::HeadVectorError;

/// On-disk formats a tree can be read from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum TreeFileType {
    /// One whitespace-separated head vector: entry `i` is the 1-based parent
    /// of vertex `i + 1`, `0` marks the root.
    HeadVector,
    /// One `u v` edge per line, vertices 0-based.
    EdgeList,
}
