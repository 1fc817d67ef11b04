use std::fmt::{Display, Formatter};

use petgraph::visit::{GraphProp, IntoNeighbors, NodeCompactIndexable};
use petgraph::Undirected;

use crate::graphs::{DirectedGraph, Edge, GraphCore, Neighbours, RootedTree, Traversable, UndirectedGraph};
use crate::index::Node;
use crate::properties::{classify_tree, TreeType};
use crate::seq::Seq;
use crate::traversal::{Bfs, NoCallbacks, TraversalCallbacks, TraversalState};

/// The input was expected to be a tree but is not (wrong edge count or
/// disconnected), or a rooted tree's orientation is invalid.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct InvalidTreeError;

impl Display for InvalidTreeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("input graph is not a valid tree")
    }
}

impl std::error::Error for InvalidTreeError {}

/// An undirected tree without a distinguished root.
///
/// A thin wrapper over [UndirectedGraph] carrying two optional caches: the
/// subtree sizes as seen from a chosen pivot, and the shape class. Any edit
/// drops both caches. Whether the graph currently *is* a tree is checked by
/// [is_tree](FreeTree::is_tree); incremental construction passes through
/// forest states, and the minimisers briefly do the same on their working
/// copies.
#[derive(Clone, Debug)]
pub struct FreeTree {
    graph: UndirectedGraph,
    sizes_from: Option<(Node, Seq<usize>)>,
    tree_type: Option<TreeType>,
}

impl FreeTree {
    /// An edgeless forest on `n` vertices; add `n - 1` edges to make it a
    /// tree.
    pub fn new(n: usize) -> Self {
        Self { graph: UndirectedGraph::new(n), sizes_from: None, tree_type: None }
    }

    /// Wrap an undirected graph, requiring it to be a tree.
    pub fn from_undirected(graph: UndirectedGraph) -> Result<Self, InvalidTreeError> {
        let t = Self { graph, sizes_from: None, tree_type: None };
        if t.is_tree() {
            Ok(t)
        } else {
            Err(InvalidTreeError)
        }
    }

    pub(crate) fn from_undirected_unchecked(graph: UndirectedGraph) -> Self {
        debug_assert!(graph.num_edges() + 1 == graph.num_nodes());
        Self { graph, sizes_from: None, tree_type: None }
    }

    /// Build from any petgraph-compatible undirected graph, requiring it to
    /// be a tree.
    pub fn from_graph<G>(graph: G) -> Result<Self, InvalidTreeError>
    where
        G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
    {
        Self::from_undirected(UndirectedGraph::from_graph(graph))
    }

    /// The underlying undirected graph.
    pub fn as_undirected(&self) -> &UndirectedGraph {
        &self.graph
    }

    /// Whether the current edge set forms a tree: `n - 1` edges and
    /// connected. `O(n)`.
    pub fn is_tree(&self) -> bool {
        let n = self.num_nodes();
        if n == 0 || self.num_edges() != n - 1 {
            return false;
        }
        let mut bfs = Bfs::new(&self.graph);
        bfs.start_at(Node::new(0), &mut NoCallbacks);
        bfs.all_visited()
    }

    /// Orient every edge away from `root` by breadth-first search, producing
    /// an arborescence.
    ///
    /// The tree must currently be a tree.
    pub fn to_rooted(&self, root: Node) -> RootedTree {
        debug_assert!(self.is_tree());

        #[derive(Default)]
        struct CollectEdges(Vec<Edge>);

        impl TraversalCallbacks for CollectEdges {
            fn process_neighbour(&mut self, _state: &TraversalState, s: Node, t: Node, _natural: bool) {
                self.0.push((s, t));
            }
        }

        let mut edges = CollectEdges::default();
        let mut bfs = Bfs::new(&self.graph);
        bfs.start_at(root, &mut edges);

        let mut graph = DirectedGraph::new(self.num_nodes());
        graph.add_edges(&edges.0, false, true);
        RootedTree::new_arborescence(graph, root)
    }

    /// Whether every adjacency list is known to be sorted ascending.
    pub fn is_normalised(&self) -> bool {
        self.graph.is_normalised()
    }

    /// Sort every adjacency list ascending. Caches survive: the edge set is
    /// unchanged.
    pub fn normalise(&mut self) {
        self.graph.normalise();
    }

    /// Recompute the normalisation flag and return it.
    pub fn check_normalised(&mut self) -> bool {
        self.graph.check_normalised()
    }

    /// Whether the edge `{u, v}` is present.
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.graph.has_edge(u, v)
    }

    /// Iterate over the edges with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.graph.edges()
    }

    /// See [UndirectedGraph::add_edge].
    pub fn add_edge(&mut self, u: Node, v: Node, maintain_normalised: bool, check_normalised: bool) {
        self.invalidate();
        self.graph.add_edge(u, v, maintain_normalised, check_normalised);
    }

    /// See [UndirectedGraph::add_edges].
    pub fn add_edges(&mut self, edges: &[Edge], maintain_normalised: bool, check_normalised: bool) {
        self.invalidate();
        self.graph.add_edges(edges, maintain_normalised, check_normalised);
    }

    /// See [UndirectedGraph::set_edges].
    pub fn set_edges(&mut self, edges: &[Edge], maintain_normalised: bool, check_normalised: bool) {
        self.invalidate();
        self.graph.set_edges(edges, maintain_normalised, check_normalised);
    }

    /// See [UndirectedGraph::remove_edge].
    pub fn remove_edge(&mut self, u: Node, v: Node, maintain_normalised: bool, check_normalised: bool) {
        self.invalidate();
        self.graph.remove_edge(u, v, maintain_normalised, check_normalised);
    }

    /// See [UndirectedGraph::remove_edges].
    pub fn remove_edges(&mut self, edges: &[Edge], maintain_normalised: bool, check_normalised: bool) {
        self.invalidate();
        self.graph.remove_edges(edges, maintain_normalised, check_normalised);
    }

    /// See [UndirectedGraph::remove_edges_incident_to].
    pub fn remove_edges_incident_to(&mut self, u: Node, maintain_normalised: bool, check_normalised: bool) {
        self.invalidate();
        self.graph.remove_edges_incident_to(u, maintain_normalised, check_normalised);
    }

    /// Compute and cache the subtree sizes as seen from `pivot`.
    pub fn compute_subtree_sizes(&mut self, pivot: Node) {
        let sizes = crate::properties::subtree_sizes_from(&self.graph, pivot);
        self.sizes_from = Some((pivot, sizes));
    }

    /// The cached subtree sizes and their pivot, if computed since the last
    /// edit.
    pub fn subtree_sizes(&self) -> Option<(Node, &[usize])> {
        self.sizes_from.as_ref().map(|(pivot, sizes)| (*pivot, sizes.as_slice()))
    }

    /// The shape class of this tree, classified on first call and cached
    /// until the next edit.
    pub fn tree_type(&mut self) -> TreeType {
        if let Some(tt) = self.tree_type {
            return tt;
        }
        let tt = classify_tree(self);
        self.tree_type = Some(tt);
        tt
    }

    fn invalidate(&mut self) {
        self.sizes_from = None;
        self.tree_type = None;
    }
}

impl PartialEq for FreeTree {
    /// Structural equality: caches do not participate.
    fn eq(&self, other: &Self) -> bool {
        self.graph == other.graph
    }
}

impl Eq for FreeTree {}

impl GraphCore for FreeTree {
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

impl Neighbours for FreeTree {
    fn neighbours(&self, u: Node) -> &[Node] {
        self.graph.neighbours(u)
    }
}

impl Traversable for FreeTree {
    fn forward_neighbours(&self, u: Node) -> &[Node] {
        self.graph.neighbours(u)
    }
}

#[cfg(test)]
mod test {
    use super::FreeTree;
    use crate::graphs::{GraphCore, UndirectedGraph};
    use crate::index::Node;

    fn path(n: usize) -> FreeTree {
        let mut t = FreeTree::new(n);
        for i in 1..n {
            t.add_edge(Node::new(i - 1), Node::new(i), true, false);
        }
        t
    }

    #[test]
    fn tree_detection() {
        let t = path(4);
        assert!(t.is_tree());

        let mut not_enough = path(4);
        not_enough.remove_edge(Node::new(1), Node::new(2), false, false);
        assert!(!not_enough.is_tree());

        // right edge count, but disconnected (cycle + isolated vertex)
        let mut g = UndirectedGraph::new(4);
        g.add_edges(&[(Node::new(0), Node::new(1)), (Node::new(1), Node::new(2)), (Node::new(2), Node::new(0))], true, false);
        assert!(super::FreeTree::from_undirected(g).is_err());
    }

    #[test]
    fn to_rooted_orients_away_from_the_root() {
        use crate::graphs::DirectedNeighbours;

        let t = path(4);
        let r = t.to_rooted(Node::new(2));
        assert_eq!(r.root(), Node::new(2));
        assert_eq!(r.num_edges(), 3);
        assert_eq!(r.out_neighbours(Node::new(2)), &[Node::new(1), Node::new(3)]);
        assert_eq!(r.out_neighbours(Node::new(1)), &[Node::new(0)]);
        assert_eq!(r.in_neighbours(Node::new(2)), &[]);
    }

    #[test]
    fn caches_are_dropped_on_edit() {
        let mut t = path(5);
        t.compute_subtree_sizes(Node::new(0));
        assert_eq!(t.subtree_sizes().unwrap().1, &[5, 4, 3, 2, 1]);

        t.remove_edge(Node::new(3), Node::new(4), false, false);
        assert!(t.subtree_sizes().is_none());
        t.add_edge(Node::new(3), Node::new(4), false, false);
        t.compute_subtree_sizes(Node::new(4));
        assert_eq!(t.subtree_sizes().unwrap().0, Node::new(4));
    }

    #[test]
    fn structural_equality_ignores_caches() {
        let mut a = path(3);
        let b = path(3);
        a.compute_subtree_sizes(Node::new(1));
        assert_eq!(a, b);
        assert_eq!(a.num_nodes(), 3);
    }
}
