//! Breadth- and depth-first traversal with pluggable callbacks.
//!
//! One generic driver serves both orders; the frontier discipline (FIFO for
//! BFS, LIFO for DFS) is a type parameter, so the choice costs nothing at run
//! time. Algorithms hook into the traversal through [TraversalCallbacks],
//! a trait whose methods default to no-ops; small handler structs keep the
//! inner loop monomorphised, and [FnCallbacks] offers boxed closures where a
//! one-off traversal is clearer.
//!
//! On directed graphs the traversal follows out-edges; in-edges are also
//! explored when [use_reverse_edges](Traversal::set_use_reverse_edges) is
//! set. The neighbour callback is told whether the edge was walked in its
//! natural orientation.

use std::collections::VecDeque;

use crate::graphs::Traversable;
use crate::index::Node;
use crate::seq::Seq;

/// The traversal state visible to callbacks.
#[derive(Debug)]
pub struct TraversalState {
    visited: Seq<bool>,
}

impl TraversalState {
    /// Whether `u` has been visited (marked at enqueue time).
    pub fn visited(&self, u: Node) -> bool {
        self.visited[u]
    }

    /// Whether every vertex of the graph has been visited.
    pub fn all_visited(&self) -> bool {
        self.visited.iter().all(|&v| v)
    }
}

/// Hooks invoked by [Traversal]. Every method defaults to a no-op.
#[allow(unused_variables)]
pub trait TraversalCallbacks {
    /// Called once for every vertex popped off the frontier.
    fn process_current(&mut self, state: &TraversalState, u: Node) {}

    /// Called after [process_current](TraversalCallbacks::process_current);
    /// returning `true` stops the traversal.
    fn terminate(&mut self, state: &TraversalState, u: Node) -> bool {
        false
    }

    /// Called for each neighbour `t` of the popped vertex `s`.
    ///
    /// `natural_direction` is `true` when the underlying edge is `(s, t)`
    /// rather than being walked backwards. Fires only for unvisited `t`
    /// unless the traversal was told to
    /// [process_already_visited](Traversal::set_process_already_visited).
    fn process_neighbour(&mut self, state: &TraversalState, s: Node, t: Node, natural_direction: bool) {}

    /// Gate for enqueuing the unvisited neighbour `t` of `s`.
    fn may_enqueue(&mut self, state: &TraversalState, s: Node, t: Node) -> bool {
        true
    }
}

/// The no-op callback set.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoCallbacks;

impl TraversalCallbacks for NoCallbacks {}

/// Callback set built from optional boxed closures.
///
/// The closure-free slots fall back to the trait defaults. Intended for API
/// boundaries and tests; hot paths implement [TraversalCallbacks] directly.
#[derive(Default)]
pub struct FnCallbacks<'a> {
    process_current: Option<Box<dyn FnMut(&TraversalState, Node) + 'a>>,
    terminate: Option<Box<dyn FnMut(&TraversalState, Node) -> bool + 'a>>,
    process_neighbour: Option<Box<dyn FnMut(&TraversalState, Node, Node, bool) + 'a>>,
    may_enqueue: Option<Box<dyn FnMut(&TraversalState, Node, Node) -> bool + 'a>>,
}

impl<'a> FnCallbacks<'a> {
    /// Set the per-vertex processing closure.
    pub fn set_process_current(mut self, f: impl FnMut(&TraversalState, Node) + 'a) -> Self {
        self.process_current = Some(Box::new(f));
        self
    }

    /// Set the early-termination closure.
    pub fn set_terminate(mut self, f: impl FnMut(&TraversalState, Node) -> bool + 'a) -> Self {
        self.terminate = Some(Box::new(f));
        self
    }

    /// Set the per-neighbour processing closure.
    pub fn set_process_neighbour(mut self, f: impl FnMut(&TraversalState, Node, Node, bool) + 'a) -> Self {
        self.process_neighbour = Some(Box::new(f));
        self
    }

    /// Set the enqueue gate.
    pub fn set_may_enqueue(mut self, f: impl FnMut(&TraversalState, Node, Node) -> bool + 'a) -> Self {
        self.may_enqueue = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for FnCallbacks<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCallbacks")
            .field("process_current", &self.process_current.is_some())
            .field("terminate", &self.terminate.is_some())
            .field("process_neighbour", &self.process_neighbour.is_some())
            .field("may_enqueue", &self.may_enqueue.is_some())
            .finish()
    }
}

impl TraversalCallbacks for FnCallbacks<'_> {
    fn process_current(&mut self, state: &TraversalState, u: Node) {
        if let Some(f) = &mut self.process_current {
            f(state, u);
        }
    }

    fn terminate(&mut self, state: &TraversalState, u: Node) -> bool {
        self.terminate.as_mut().map_or(false, |f| f(state, u))
    }

    fn process_neighbour(&mut self, state: &TraversalState, s: Node, t: Node, natural_direction: bool) {
        if let Some(f) = &mut self.process_neighbour {
            f(state, s, t, natural_direction);
        }
    }

    fn may_enqueue(&mut self, state: &TraversalState, s: Node, t: Node) -> bool {
        self.may_enqueue.as_mut().map_or(true, |f| f(state, s, t))
    }
}

/// Frontier discipline of a [Traversal].
pub trait Frontier: Default {
    /// Add a vertex.
    fn push(&mut self, u: Node);
    /// Take the next vertex, or `None` when exhausted.
    fn pop(&mut self) -> Option<Node>;
    /// Drop all queued vertices.
    fn clear(&mut self);
}

/// First-in-first-out frontier: breadth-first order.
#[derive(Debug, Default)]
pub struct FifoFrontier(VecDeque<Node>);

impl Frontier for FifoFrontier {
    fn push(&mut self, u: Node) {
        self.0.push_back(u);
    }

    fn pop(&mut self) -> Option<Node> {
        self.0.pop_front()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Last-in-first-out frontier: depth-first order.
#[derive(Debug, Default)]
pub struct LifoFrontier(Vec<Node>);

impl Frontier for LifoFrontier {
    fn push(&mut self, u: Node) {
        self.0.push(u);
    }

    fn pop(&mut self) -> Option<Node> {
        self.0.pop()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Graph traversal over a borrowed graph.
#[derive(Debug)]
pub struct Traversal<'g, G: Traversable + ?Sized, F: Frontier> {
    graph: &'g G,
    frontier: F,
    state: TraversalState,
    use_reverse_edges: bool,
    process_already_visited: bool,
}

/// Breadth-first traversal.
pub type Bfs<'g, G> = Traversal<'g, G, FifoFrontier>;
/// Depth-first traversal.
pub type Dfs<'g, G> = Traversal<'g, G, LifoFrontier>;

impl<'g, G: Traversable + ?Sized, F: Frontier> Traversal<'g, G, F> {
    /// A traversal of `graph` with nothing visited.
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            frontier: F::default(),
            state: TraversalState { visited: Seq::new(graph.num_nodes()) },
            use_reverse_edges: false,
            process_already_visited: false,
        }
    }

    /// Explore in-edges of directed graphs as well.
    pub fn set_use_reverse_edges(&mut self, use_reverse_edges: bool) {
        self.use_reverse_edges = use_reverse_edges;
    }

    /// Fire the neighbour callback for already-visited neighbours too.
    pub fn set_process_already_visited(&mut self, process_already_visited: bool) {
        self.process_already_visited = process_already_visited;
    }

    /// Wipe the visited set and the frontier. The flags are kept.
    pub fn reset(&mut self) {
        self.state.visited.fill(false);
        self.frontier.clear();
    }

    /// Whether `u` has been visited.
    pub fn visited(&self, u: Node) -> bool {
        self.state.visited(u)
    }

    /// Whether every vertex has been visited.
    pub fn all_visited(&self) -> bool {
        self.state.all_visited()
    }

    /// The traversed graph.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Run the traversal from `source`.
    pub fn start_at<C: TraversalCallbacks>(&mut self, source: Node, callbacks: &mut C) {
        self.state.visited[source] = true;
        self.frontier.push(source);
        self.run(callbacks);
    }

    /// Run the traversal from every vertex in `sources` at once.
    pub fn start_at_all<C: TraversalCallbacks>(&mut self, sources: &[Node], callbacks: &mut C) {
        for &source in sources {
            self.state.visited[source] = true;
            self.frontier.push(source);
        }
        self.run(callbacks);
    }

    fn run<C: TraversalCallbacks>(&mut self, callbacks: &mut C) {
        while let Some(s) = self.frontier.pop() {
            callbacks.process_current(&self.state, s);
            if callbacks.terminate(&self.state, s) {
                break;
            }
            let graph = self.graph;
            for &t in graph.forward_neighbours(s) {
                self.deal_with_neighbour(callbacks, s, t, true);
            }
            if self.use_reverse_edges {
                for &t in graph.backward_neighbours(s) {
                    self.deal_with_neighbour(callbacks, s, t, false);
                }
            }
        }
    }

    fn deal_with_neighbour<C: TraversalCallbacks>(&mut self, callbacks: &mut C, s: Node, t: Node, natural: bool) {
        if !self.state.visited(t) || self.process_already_visited {
            callbacks.process_neighbour(&self.state, s, t, natural);
        }
        if !self.state.visited(t) && callbacks.may_enqueue(&self.state, s, t) {
            self.state.visited[t] = true;
            self.frontier.push(t);
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Bfs, Dfs, FnCallbacks, NoCallbacks, TraversalCallbacks, TraversalState};
    use crate::graphs::{DirectedGraph, UndirectedGraph};
    use crate::index::Node;

    fn path_graph(n: usize) -> UndirectedGraph {
        let mut g = UndirectedGraph::new(n);
        for i in 1..n {
            g.add_edge(Node::new(i - 1), Node::new(i), true, false);
        }
        g
    }

    #[derive(Default)]
    struct RecordOrder(Vec<Node>);

    impl TraversalCallbacks for RecordOrder {
        fn process_current(&mut self, _state: &TraversalState, u: Node) {
            self.0.push(u);
        }
    }

    #[test]
    fn bfs_visits_in_level_order() {
        let mut g = UndirectedGraph::new(6);
        g.add_edges(
            &[
                (Node::new(0), Node::new(1)),
                (Node::new(0), Node::new(2)),
                (Node::new(1), Node::new(3)),
                (Node::new(2), Node::new(4)),
                (Node::new(4), Node::new(5)),
            ],
            true,
            false,
        );
        let mut order = RecordOrder::default();
        let mut bfs = Bfs::new(&g);
        bfs.start_at(Node::new(0), &mut order);
        assert!(bfs.all_visited());
        assert_eq!(order.0, [0, 1, 2, 3, 4, 5].map(Node::new));
    }

    #[test]
    fn dfs_visits_depth_first() {
        let g = path_graph(4);
        let mut order = RecordOrder::default();
        let mut dfs = Dfs::new(&g);
        dfs.start_at(Node::new(0), &mut order);
        assert_eq!(order.0, [0, 1, 2, 3].map(Node::new));
    }

    #[test]
    fn terminate_stops_early() {
        let g = path_graph(5);
        let mut count = 0;
        let mut cb = FnCallbacks::default()
            .set_process_current(|_, _| count += 1)
            .set_terminate(|_, u| u == Node::new(2));
        let mut bfs = Bfs::new(&g);
        bfs.start_at(Node::new(0), &mut cb);
        drop(cb);
        assert_eq!(count, 3);
        assert!(!bfs.visited(Node::new(4)));
    }

    #[test]
    fn may_enqueue_prunes_subtrees() {
        let g = path_graph(5);
        let mut cb = FnCallbacks::default().set_may_enqueue(|_, _, t| t != Node::new(3));
        let mut bfs = Bfs::new(&g);
        bfs.start_at(Node::new(0), &mut cb);
        assert!(bfs.visited(Node::new(2)));
        assert!(!bfs.visited(Node::new(3)));
        assert!(!bfs.visited(Node::new(4)));
    }

    #[test]
    fn reverse_edges_reach_the_whole_digraph() {
        let mut g = DirectedGraph::new(3);
        g.add_edge(Node::new(1), Node::new(0), true, false);
        g.add_edge(Node::new(1), Node::new(2), true, false);

        let mut bfs = Bfs::new(&g);
        bfs.start_at(Node::new(0), &mut NoCallbacks);
        assert!(!bfs.all_visited());

        let mut directions = Vec::new();
        let mut cb =
            FnCallbacks::default().set_process_neighbour(|_, s, t, natural| directions.push((s, t, natural)));
        let mut bfs = Bfs::new(&g);
        bfs.set_use_reverse_edges(true);
        bfs.start_at(Node::new(0), &mut cb);
        drop(cb);
        assert!(bfs.all_visited());
        assert_eq!(
            directions,
            vec![(Node::new(0), Node::new(1), false), (Node::new(1), Node::new(2), true)]
        );
    }

    #[test]
    fn process_already_visited_reports_back_edges() {
        let mut g = UndirectedGraph::new(3);
        g.add_edges(&[(Node::new(0), Node::new(1)), (Node::new(1), Node::new(2))], true, false);

        let mut seen = Vec::new();
        let mut cb = FnCallbacks::default().set_process_neighbour(|_, s, t, _| seen.push((s, t)));
        let mut bfs = Bfs::new(&g);
        bfs.set_process_already_visited(true);
        bfs.start_at(Node::new(0), &mut cb);
        drop(cb);
        // every edge is reported from both endpoints
        assert_eq!(seen, vec![(Node::new(0), Node::new(1)), (Node::new(1), Node::new(0)), (Node::new(1), Node::new(2)), (Node::new(2), Node::new(1))]);
    }

    #[test]
    fn reset_allows_reuse() {
        let g = path_graph(3);
        let mut bfs = Bfs::new(&g);
        bfs.start_at(Node::new(0), &mut NoCallbacks);
        assert!(bfs.all_visited());
        bfs.reset();
        assert!(!bfs.visited(Node::new(0)));
        bfs.start_at(Node::new(2), &mut NoCallbacks);
        assert!(bfs.all_visited());
    }
}
