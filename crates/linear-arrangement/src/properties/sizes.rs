use crate::graphs::{RootedTree, Traversable};
use crate::index::Node;
use crate::seq::Seq;
use crate::traversal::{Bfs, TraversalCallbacks, TraversalState};

/// The breadth-first view of the component of a pivot vertex: visit order,
/// parent links, and the size of the subtree hanging below each vertex when
/// the pivot plays the role of the root.
///
/// Vertices outside the pivot's component keep size `0` and parent
/// [Node::end].
pub(crate) struct PivotView {
    pub(crate) order: Vec<Node>,
    pub(crate) parent: Seq<Node>,
    pub(crate) sizes: Seq<usize>,
}

#[derive(Default)]
struct RecordTree {
    order: Vec<Node>,
    parent: Vec<(Node, Node)>,
}

impl TraversalCallbacks for RecordTree {
    fn process_current(&mut self, _state: &TraversalState, u: Node) {
        self.order.push(u);
    }

    fn process_neighbour(&mut self, _state: &TraversalState, s: Node, t: Node, _natural_direction: bool) {
        self.parent.push((t, s));
    }
}

pub(crate) fn pivot_view<G: Traversable + ?Sized>(t: &G, pivot: Node, follow_reverse_edges: bool) -> PivotView {
    let mut record = RecordTree::default();
    let mut bfs = Bfs::new(t);
    bfs.set_use_reverse_edges(follow_reverse_edges);
    bfs.start_at(pivot, &mut record);

    let mut parent = Seq::new_with(t.num_nodes(), Node::end());
    for (child, par) in record.parent {
        parent[child] = par;
    }

    // Children appear after their parent in breadth-first order, so one
    // reverse sweep accumulates every subtree size.
    let mut sizes = Seq::new(t.num_nodes());
    for &u in record.order.iter().rev() {
        sizes[u] += 1;
        if u != pivot {
            let (p, s) = (parent[u], sizes[u]);
            sizes[p] += s;
        }
    }

    PivotView { order: record.order, parent, sizes }
}

/// Subtree sizes of the component of `pivot`, with `pivot` as the root.
///
/// `sizes[pivot]` is the component size; vertices outside the component get
/// size `0`. Runs in time linear in the component.
pub fn subtree_sizes_from<G: Traversable + ?Sized>(t: &G, pivot: Node) -> Seq<usize> {
    pivot_view(t, pivot, false).sizes
}

/// Subtree sizes of a rooted tree: `sizes[v]` counts the vertices of the
/// subtree hanging at `v`, including `v`.
///
/// Works for arborescences and anti-arborescences alike; the traversal
/// follows edges in whichever direction leads away from the root.
pub fn rooted_subtree_sizes(t: &RootedTree) -> Seq<usize> {
    pivot_view(t, t.root(), true).sizes
}

#[cfg(test)]
mod test {
    use super::{rooted_subtree_sizes, subtree_sizes_from};
    use crate::graphs::{FreeTree, GraphCore};
    use crate::index::Node;

    // 0 - 1 - 2, 1 - 3, 3 - 4
    fn sample_tree() -> FreeTree {
        let mut t = FreeTree::new(5);
        t.add_edges(
            &[
                (Node::new(0), Node::new(1)),
                (Node::new(1), Node::new(2)),
                (Node::new(1), Node::new(3)),
                (Node::new(3), Node::new(4)),
            ],
            true,
            false,
        );
        t
    }

    #[test]
    fn sizes_from_pivot() {
        let t = sample_tree();
        let sizes = subtree_sizes_from(&t, Node::new(0));
        assert_eq!(sizes.as_slice(), &[5, 4, 1, 2, 1]);

        let sizes = subtree_sizes_from(&t, Node::new(1));
        assert_eq!(sizes.as_slice(), &[1, 5, 1, 2, 1]);
    }

    #[test]
    fn sizes_cover_only_the_component() {
        let mut t = sample_tree();
        t.remove_edge(Node::new(1), Node::new(3), false, false);
        let sizes = subtree_sizes_from(&t, Node::new(3));
        assert_eq!(sizes.as_slice(), &[0, 0, 0, 2, 1]);
        assert_eq!(sizes[Node::new(3)], 2);
    }

    #[test]
    fn rooted_sizes_match_for_both_orientations() {
        let t = sample_tree();
        let away = t.to_rooted(Node::new(1));
        assert_eq!(away.num_edges(), 4);
        assert_eq!(rooted_subtree_sizes(&away).as_slice(), &[1, 5, 1, 2, 1]);

        let sizes_recomputed = rooted_subtree_sizes(&away);
        assert_eq!(sizes_recomputed.as_slice(), &[1, 5, 1, 2, 1]);
    }
}
