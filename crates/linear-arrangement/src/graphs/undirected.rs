use std::iter::FusedIterator;

use petgraph::graph::UnGraph;
use petgraph::visit::{GraphProp, IntoNeighbors, NodeCompactIndexable};
use petgraph::Undirected;

use crate::graphs::{insert_last_sorted, is_sorted_strict, remove_from_list};
use crate::graphs::{Edge, GraphCore, Neighbours, Traversable};
use crate::index::Node;

/// A simple undirected graph over vertices `0..n`.
///
/// Stores one adjacency list per vertex plus a `normalised` flag; the graph
/// is *normalised* when every adjacency list is sorted strictly ascending.
/// Mutators take two flags: `maintain_normalised` repairs the sort invariant
/// (cheaply where possible, with a full [normalise](UndirectedGraph::normalise)
/// otherwise) and `check_normalised` re-derives the flag when it is not being
/// maintained. With both flags false a mutation simply drops the flag to
/// `false`.
///
/// Edges must connect distinct vertices. Detecting duplicate edges is the
/// caller's responsibility: `add_edge(u, v, ..)` for an existing edge `{u, v}`
/// corrupts the edge count.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UndirectedGraph {
    adj: Vec<Vec<Node>>,
    num_edges: usize,
    normalised: bool,
}

impl UndirectedGraph {
    /// An edgeless graph on `n` vertices. Edgeless lists are trivially
    /// sorted, so the graph starts normalised.
    pub fn new(n: usize) -> Self {
        Self { adj: vec![Vec::new(); n], num_edges: 0, normalised: true }
    }

    /// Whether every adjacency list is known to be sorted ascending.
    pub fn is_normalised(&self) -> bool {
        self.normalised
    }

    /// Sort every adjacency list ascending and set the `normalised` flag.
    pub fn normalise(&mut self) {
        for list in &mut self.adj {
            list.sort_unstable();
        }
        self.normalised = true;
    }

    /// Recompute the `normalised` flag from the adjacency lists and return it.
    pub fn check_normalised(&mut self) -> bool {
        self.normalised = self.adj.iter().all(|list| is_sorted_strict(list));
        self.normalised
    }

    /// Add the edge `{u, v}`.
    ///
    /// The edge must not already be present and `u != v`.
    pub fn add_edge(&mut self, u: Node, v: Node, maintain_normalised: bool, check_normalised: bool) {
        assert_ne!(u, v, "self-loops are not allowed");
        assert!(self.has_node(u) && self.has_node(v));

        self.adj[u.index()].push(v);
        self.adj[v.index()].push(u);
        self.num_edges += 1;

        if self.normalised {
            if maintain_normalised {
                insert_last_sorted(&mut self.adj[u.index()]);
                insert_last_sorted(&mut self.adj[v.index()]);
            } else if check_normalised {
                self.normalised = tail_sorted(&self.adj[u.index()]) && tail_sorted(&self.adj[v.index()]);
            } else {
                self.normalised = false;
            }
        } else if maintain_normalised {
            self.normalise();
        }
    }

    /// Add every edge in `edges`. Same preconditions as
    /// [add_edge](UndirectedGraph::add_edge), applied per edge.
    pub fn add_edges(&mut self, edges: &[Edge], maintain_normalised: bool, check_normalised: bool) {
        for &(u, v) in edges {
            assert_ne!(u, v, "self-loops are not allowed");
            assert!(self.has_node(u) && self.has_node(v));
            self.adj[u.index()].push(v);
            self.adj[v.index()].push(u);
            self.num_edges += 1;
        }
        self.settle_after_bulk_edit(maintain_normalised, check_normalised);
    }

    /// Replace the whole edge set with `edges`.
    pub fn set_edges(&mut self, edges: &[Edge], maintain_normalised: bool, check_normalised: bool) {
        for list in &mut self.adj {
            list.clear();
        }
        self.num_edges = 0;
        self.normalised = true;
        self.add_edges(edges, maintain_normalised, check_normalised);
    }

    /// Remove the edge `{u, v}`. The edge must exist.
    pub fn remove_edge(&mut self, u: Node, v: Node, maintain_normalised: bool, check_normalised: bool) {
        assert!(self.has_node(u) && self.has_node(v));
        remove_from_list(&mut self.adj[u.index()], v);
        remove_from_list(&mut self.adj[v.index()], u);
        self.num_edges -= 1;
        self.settle_after_removal(maintain_normalised, check_normalised);
    }

    /// Remove every edge in `edges`. Each must exist.
    pub fn remove_edges(&mut self, edges: &[Edge], maintain_normalised: bool, check_normalised: bool) {
        for &(u, v) in edges {
            remove_from_list(&mut self.adj[u.index()], v);
            remove_from_list(&mut self.adj[v.index()], u);
            self.num_edges -= 1;
        }
        self.settle_after_removal(maintain_normalised, check_normalised);
    }

    /// Remove every edge incident to `u`.
    pub fn remove_edges_incident_to(&mut self, u: Node, maintain_normalised: bool, check_normalised: bool) {
        assert!(self.has_node(u));
        let neighbours = std::mem::take(&mut self.adj[u.index()]);
        self.num_edges -= neighbours.len();
        for w in neighbours {
            remove_from_list(&mut self.adj[w.index()], u);
        }
        self.settle_after_removal(maintain_normalised, check_normalised);
    }

    /// Whether the edge `{u, v}` is present.
    ///
    /// Binary search on normalised lists once they are long enough for it to
    /// pay off, linear scan of the shorter list otherwise.
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(self.has_node(u) && self.has_node(v));
        let (nu, nv) = (&self.adj[u.index()], &self.adj[v.index()]);
        let (shorter, target) = if nu.len() <= nv.len() { (nu, v) } else { (nv, u) };
        if self.normalised && shorter.len() >= 64 {
            shorter.binary_search(&target).is_ok()
        } else {
            shorter.contains(&target)
        }
    }

    /// Iterate over the edges as `(u, v)` pairs with `u < v`.
    pub fn edges(&self) -> EdgeIter<'_> {
        EdgeIter { graph: self, u: 0, v_idx: 0 }
    }

    /// Build from any petgraph-compatible undirected graph.
    ///
    /// The input must be simple: no self-loops, no parallel edges.
    pub fn from_graph<G>(graph: G) -> Self
    where
        G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
    {
        let n = graph.node_bound();
        let mut edges = Vec::new();
        for u in 0..n {
            for v in graph.neighbors(graph.from_index(u)) {
                let v = graph.to_index(v);
                if u < v {
                    edges.push((Node::new(u), Node::new(v)));
                }
            }
        }
        let mut g = Self::new(n);
        g.add_edges(&edges, false, true);
        g
    }

    fn settle_after_bulk_edit(&mut self, maintain_normalised: bool, check_normalised: bool) {
        if maintain_normalised {
            self.normalise();
        } else if check_normalised {
            self.check_normalised();
        } else {
            self.normalised = false;
        }
    }

    // Removal from a sorted list keeps it sorted, so a normalised graph stays
    // normalised no matter the flags.
    fn settle_after_removal(&mut self, maintain_normalised: bool, check_normalised: bool) {
        if self.normalised {
            return;
        }
        if maintain_normalised {
            self.normalise();
        } else if check_normalised {
            self.check_normalised();
        }
    }
}

/// Is the last element of `list` larger than its predecessor?
fn tail_sorted(list: &[Node]) -> bool {
    match list {
        [.., a, b] => a < b,
        _ => true,
    }
}

impl GraphCore for UndirectedGraph {
    fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn degree(&self, u: Node) -> usize {
        self.adj[u.index()].len()
    }
}

impl Neighbours for UndirectedGraph {
    fn neighbours(&self, u: Node) -> &[Node] {
        &self.adj[u.index()]
    }
}

impl Traversable for UndirectedGraph {
    fn forward_neighbours(&self, u: Node) -> &[Node] {
        &self.adj[u.index()]
    }
}

impl From<&UndirectedGraph> for UnGraph<(), ()> {
    fn from(g: &UndirectedGraph) -> Self {
        let mut out = UnGraph::with_capacity(g.num_nodes(), g.num_edges());
        for _ in 0..g.num_nodes() {
            out.add_node(());
        }
        for (u, v) in g.edges() {
            out.add_edge(petgraph::graph::NodeIndex::new(u.index()), petgraph::graph::NodeIndex::new(v.index()), ());
        }
        out
    }
}

/// Iterator over undirected edges, each reported once with `u < v`.
#[derive(Clone, Debug)]
pub struct EdgeIter<'a> {
    graph: &'a UndirectedGraph,
    u: usize,
    v_idx: usize,
}

impl Iterator for EdgeIter<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        while self.u < self.graph.num_nodes() {
            let u = Node::new(self.u);
            let neighbours = self.graph.neighbours(u);
            for (i, &v) in neighbours.iter().enumerate().skip(self.v_idx) {
                if u < v {
                    self.v_idx = i + 1;
                    return Some((u, v));
                }
            }
            self.u += 1;
            self.v_idx = 0;
        }
        None
    }
}

impl FusedIterator for EdgeIter<'_> {}
