use crate::graphs::{DirectedGraph, DirectedNeighbours, FreeTree, GraphCore, InvalidTreeError, Traversable};
use crate::index::Node;
use crate::seq::Seq;
use crate::traversal::{Bfs, TraversalCallbacks, TraversalState};

/// Which way the edges of a rooted tree point.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Every edge points away from the root.
    Arborescence,
    /// Every edge points towards the root.
    AntiArborescence,
}

/// A directed tree with a distinguished root.
///
/// The orientation is computed at construction: either all edges point away
/// from the root, or all point towards it; anything else leaves the tree
/// without a valid orientation (see
/// [valid_orientation](RootedTree::valid_orientation)) and the minimisers
/// reject it. Subtree sizes are an optional cache filled by
/// [compute_subtree_sizes](RootedTree::compute_subtree_sizes).
#[derive(Clone, Debug)]
pub struct RootedTree {
    graph: DirectedGraph,
    root: Node,
    orientation: Option<Orientation>,
    subtree_sizes: Option<Seq<usize>>,
}

impl RootedTree {
    /// Wrap a digraph with a chosen root, classifying its orientation.
    pub fn new(graph: DirectedGraph, root: Node) -> Self {
        assert!(graph.has_node(root));
        let orientation = find_orientation(&graph, root);
        Self { graph, root, orientation, subtree_sizes: None }
    }

    /// Wrap a digraph known to be an arborescence rooted at `root`.
    pub(crate) fn new_arborescence(graph: DirectedGraph, root: Node) -> Self {
        debug_assert_eq!(find_orientation(&graph, root), Some(Orientation::Arborescence));
        Self { graph, root, orientation: Some(Orientation::Arborescence), subtree_sizes: None }
    }

    /// The root vertex.
    pub fn root(&self) -> Node {
        self.root
    }

    /// Move the root, reclassifying the orientation and dropping the size
    /// cache.
    pub fn set_root(&mut self, root: Node) {
        assert!(self.graph.has_node(root));
        self.root = root;
        self.orientation = find_orientation(&self.graph, root);
        self.subtree_sizes = None;
    }

    /// The underlying digraph.
    pub fn as_directed(&self) -> &DirectedGraph {
        &self.graph
    }

    /// The edge orientation, or `None` when the edges point neither uniformly
    /// away from nor uniformly towards the root.
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Whether the edges are uniformly oriented with respect to the root.
    pub fn valid_orientation(&self) -> bool {
        self.orientation.is_some()
    }

    /// Whether this is a valid rooted tree: the undirected skeleton is a
    /// tree and the orientation is uniform. `O(n)`.
    pub fn is_rooted_tree(&self) -> bool {
        if !self.valid_orientation() {
            return false;
        }
        let n = self.num_nodes();
        if n == 0 || self.num_edges() != n - 1 {
            return false;
        }
        let mut bfs = Bfs::new(&self.graph);
        bfs.set_use_reverse_edges(true);
        bfs.start_at(self.root, &mut crate::traversal::NoCallbacks);
        bfs.all_visited()
    }

    /// The children of `u`: vertices one edge further from the root.
    ///
    /// Requires a valid orientation.
    pub fn children(&self, u: Node) -> &[Node] {
        match self.orientation.expect("rooted tree has no valid orientation") {
            Orientation::Arborescence => self.graph.out_neighbours(u),
            Orientation::AntiArborescence => self.graph.in_neighbours(u),
        }
    }

    /// The parent of `u`, or `None` for the root.
    ///
    /// Requires a valid orientation.
    pub fn parent(&self, u: Node) -> Option<Node> {
        let parents = match self.orientation.expect("rooted tree has no valid orientation") {
            Orientation::Arborescence => self.graph.in_neighbours(u),
            Orientation::AntiArborescence => self.graph.out_neighbours(u),
        };
        parents.first().copied()
    }

    /// Drop edge directions, producing the free tree underneath.
    pub fn to_free(&self) -> FreeTree {
        FreeTree::from_undirected_unchecked(self.graph.to_undirected())
    }

    /// Compute and cache the number of vertices in the subtree hanging at
    /// each vertex.
    pub fn compute_subtree_sizes(&mut self) {
        self.subtree_sizes = Some(crate::properties::rooted_subtree_sizes(self));
    }

    /// The cached subtree sizes, if computed.
    pub fn subtree_sizes(&self) -> Option<&[usize]> {
        self.subtree_sizes.as_ref().map(Seq::as_slice)
    }

    /// Number of vertices in the subtree hanging at `v`, the vertex itself
    /// included.
    ///
    /// Panics unless [compute_subtree_sizes](RootedTree::compute_subtree_sizes)
    /// ran since construction (or the last [set_root](RootedTree::set_root)).
    pub fn num_subtree_nodes(&self, v: Node) -> usize {
        let sizes = self.subtree_sizes.as_ref().expect("subtree sizes have not been computed");
        sizes[v]
    }
}

impl PartialEq for RootedTree {
    /// Structural equality: same digraph and root; caches do not participate.
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.graph == other.graph
    }
}

impl Eq for RootedTree {}

impl GraphCore for RootedTree {
    fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    fn degree(&self, u: Node) -> usize {
        self.graph.degree(u)
    }
}

impl DirectedNeighbours for RootedTree {
    fn out_neighbours(&self, u: Node) -> &[Node] {
        self.graph.out_neighbours(u)
    }

    fn in_neighbours(&self, u: Node) -> &[Node] {
        self.graph.in_neighbours(u)
    }
}

impl Traversable for RootedTree {
    fn forward_neighbours(&self, u: Node) -> &[Node] {
        self.graph.out_neighbours(u)
    }

    fn backward_neighbours(&self, u: Node) -> &[Node] {
        self.graph.in_neighbours(u)
    }
}

/// Walk the skeleton from `root` and classify the edge directions. Mixed
/// directions, or edges out of reach of the root, yield `None`.
fn find_orientation(graph: &DirectedGraph, root: Node) -> Option<Orientation> {
    #[derive(Default)]
    struct Directions {
        natural: usize,
        reversed: usize,
    }

    impl TraversalCallbacks for Directions {
        fn process_neighbour(&mut self, _state: &TraversalState, _s: Node, _t: Node, natural: bool) {
            if natural {
                self.natural += 1;
            } else {
                self.reversed += 1;
            }
        }
    }

    let mut directions = Directions::default();
    let mut bfs = Bfs::new(graph);
    bfs.set_use_reverse_edges(true);
    bfs.start_at(root, &mut directions);
    if !bfs.all_visited() {
        return None;
    }

    match (directions.natural, directions.reversed) {
        (_, 0) => Some(Orientation::Arborescence),
        (0, _) => Some(Orientation::AntiArborescence),
        _ => None,
    }
}

/// Validate that `t` is a rooted tree, as the projective minimiser requires.
pub(crate) fn ensure_rooted_tree(t: &RootedTree) -> Result<(), InvalidTreeError> {
    if t.is_rooted_tree() {
        Ok(())
    } else {
        Err(InvalidTreeError)
    }
}
