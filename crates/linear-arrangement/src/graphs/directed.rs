use crate::graphs::{insert_last_sorted, is_sorted_strict, remove_from_list};
use crate::graphs::{DirectedNeighbours, Edge, GraphCore, Traversable, UndirectedGraph};
use crate::index::Node;

/// A simple directed graph over vertices `0..n`.
///
/// Keeps an out-list and an in-list per vertex, maintained in lock-step by
/// every edit. The normalisation contract is the same as
/// [UndirectedGraph](crate::graphs::UndirectedGraph)'s, applied to both list
/// families.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectedGraph {
    out: Vec<Vec<Node>>,
    inc: Vec<Vec<Node>>,
    num_edges: usize,
    normalised: bool,
}

impl DirectedGraph {
    /// An edgeless digraph on `n` vertices.
    pub fn new(n: usize) -> Self {
        Self { out: vec![Vec::new(); n], inc: vec![Vec::new(); n], num_edges: 0, normalised: true }
    }

    /// Whether every adjacency list is known to be sorted ascending.
    pub fn is_normalised(&self) -> bool {
        self.normalised
    }

    /// Sort every out- and in-list ascending and set the `normalised` flag.
    pub fn normalise(&mut self) {
        for list in self.out.iter_mut().chain(self.inc.iter_mut()) {
            list.sort_unstable();
        }
        self.normalised = true;
    }

    /// Recompute the `normalised` flag from the adjacency lists and return it.
    pub fn check_normalised(&mut self) -> bool {
        self.normalised = self.out.iter().chain(self.inc.iter()).all(|list| is_sorted_strict(list));
        self.normalised
    }

    /// Add the edge `(u, v)`. The edge must not already be present and
    /// `u != v`.
    pub fn add_edge(&mut self, u: Node, v: Node, maintain_normalised: bool, check_normalised: bool) {
        assert_ne!(u, v, "self-loops are not allowed");
        assert!(self.has_node(u) && self.has_node(v));

        self.out[u.index()].push(v);
        self.inc[v.index()].push(u);
        self.num_edges += 1;

        if self.normalised {
            if maintain_normalised {
                insert_last_sorted(&mut self.out[u.index()]);
                insert_last_sorted(&mut self.inc[v.index()]);
            } else if check_normalised {
                self.normalised = tail_sorted(&self.out[u.index()]) && tail_sorted(&self.inc[v.index()]);
            } else {
                self.normalised = false;
            }
        } else if maintain_normalised {
            self.normalise();
        }
    }

    /// Add every edge in `edges`.
    pub fn add_edges(&mut self, edges: &[Edge], maintain_normalised: bool, check_normalised: bool) {
        for &(u, v) in edges {
            assert_ne!(u, v, "self-loops are not allowed");
            assert!(self.has_node(u) && self.has_node(v));
            self.out[u.index()].push(v);
            self.inc[v.index()].push(u);
            self.num_edges += 1;
        }
        self.settle_after_bulk_edit(maintain_normalised, check_normalised);
    }

    /// Replace the whole edge set with `edges`.
    pub fn set_edges(&mut self, edges: &[Edge], maintain_normalised: bool, check_normalised: bool) {
        for list in self.out.iter_mut().chain(self.inc.iter_mut()) {
            list.clear();
        }
        self.num_edges = 0;
        self.normalised = true;
        self.add_edges(edges, maintain_normalised, check_normalised);
    }

    /// Remove the edge `(u, v)`. The edge must exist.
    pub fn remove_edge(&mut self, u: Node, v: Node, maintain_normalised: bool, check_normalised: bool) {
        assert!(self.has_node(u) && self.has_node(v));
        remove_from_list(&mut self.out[u.index()], v);
        remove_from_list(&mut self.inc[v.index()], u);
        self.num_edges -= 1;
        self.settle_after_removal(maintain_normalised, check_normalised);
    }

    /// Remove every edge in `edges`. Each must exist.
    pub fn remove_edges(&mut self, edges: &[Edge], maintain_normalised: bool, check_normalised: bool) {
        for &(u, v) in edges {
            remove_from_list(&mut self.out[u.index()], v);
            remove_from_list(&mut self.inc[v.index()], u);
            self.num_edges -= 1;
        }
        self.settle_after_removal(maintain_normalised, check_normalised);
    }

    /// Remove every edge incident to `u`, in either direction.
    pub fn remove_edges_incident_to(&mut self, u: Node, maintain_normalised: bool, check_normalised: bool) {
        assert!(self.has_node(u));
        let out = std::mem::take(&mut self.out[u.index()]);
        self.num_edges -= out.len();
        for w in out {
            remove_from_list(&mut self.inc[w.index()], u);
        }
        let inc = std::mem::take(&mut self.inc[u.index()]);
        self.num_edges -= inc.len();
        for w in inc {
            remove_from_list(&mut self.out[w.index()], u);
        }
        self.settle_after_removal(maintain_normalised, check_normalised);
    }

    /// Whether the directed edge `(u, v)` is present.
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(self.has_node(u) && self.has_node(v));
        let (shorter, target) =
            if self.out[u.index()].len() <= self.inc[v.index()].len() { (&self.out[u.index()], v) } else { (&self.inc[v.index()], u) };
        if self.normalised && shorter.len() >= 64 {
            shorter.binary_search(&target).is_ok()
        } else {
            shorter.contains(&target)
        }
    }

    /// Iterate over the directed edges `(u, v)`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.out
            .iter()
            .enumerate()
            .flat_map(|(u, vs)| vs.iter().map(move |&v| (Node::new(u), v)))
    }

    /// The undirected graph whose edge set is `{{u, v} : (u, v) or (v, u)}`.
    ///
    /// The digraph must not contain both `(u, v)` and `(v, u)`; the skeleton
    /// of a tree never does.
    pub fn to_undirected(&self) -> UndirectedGraph {
        let mut g = UndirectedGraph::new(self.num_nodes());
        let edges: Vec<Edge> = self.edges().collect();
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

fn tail_sorted(list: &[Node]) -> bool {
    match list {
        [.., a, b] => a < b,
        _ => true,
    }
}

impl GraphCore for DirectedGraph {
    fn num_nodes(&self) -> usize {
        self.out.len()
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn degree(&self, u: Node) -> usize {
        self.out[u.index()].len() + self.inc[u.index()].len()
    }
}

impl DirectedNeighbours for DirectedGraph {
    fn out_neighbours(&self, u: Node) -> &[Node] {
        &self.out[u.index()]
    }

    fn in_neighbours(&self, u: Node) -> &[Node] {
        &self.inc[u.index()]
    }
}

impl Traversable for DirectedGraph {
    fn forward_neighbours(&self, u: Node) -> &[Node] {
        &self.out[u.index()]
    }

    fn backward_neighbours(&self, u: Node) -> &[Node] {
        &self.inc[u.index()]
    }
}
