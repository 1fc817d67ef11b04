//! Structural tree analyses: subtree sizes, centroids, shape classification.

mod centroid;
mod classify;
mod sizes;

pub use centroid::centroid_of_component;
pub use classify::{classify_tree, TreeType};
pub(crate) use sizes::pivot_view;
pub use sizes::{rooted_subtree_sizes, subtree_sizes_from};
