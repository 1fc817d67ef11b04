use crate::graphs::{Neighbours, Traversable};
use crate::index::Node;
use crate::properties::pivot_view;

/// The centroid of the component of `v`: one or two adjacent vertices whose
/// removal leaves no piece larger than half the component.
///
/// A second centroid exists exactly when some piece adjacent to the first
/// weighs exactly half the component (only possible for even component
/// sizes). The result is in ascending index order.
///
/// Runs in time linear in the component: one pass to compute subtree sizes
/// from `v`, then a descent towards the heavy side.
pub fn centroid_of_component<G: Neighbours + Traversable + ?Sized>(t: &G, v: Node) -> (Node, Option<Node>) {
    let view = pivot_view(t, v, false);
    let (sizes, parent) = (&view.sizes, &view.parent);
    let n = sizes[v];

    let mut cur = v;
    'descend: loop {
        for &w in t.neighbours(cur) {
            if parent[w] == cur && 2 * sizes[w] > n {
                cur = w;
                continue 'descend;
            }
        }
        break;
    }

    let mut second = None;
    for &w in t.neighbours(cur) {
        let weight = if parent[w] == cur { sizes[w] } else { n - sizes[cur] };
        if 2 * weight == n {
            second = Some(w);
        }
    }

    match second {
        Some(s) if s < cur => (s, Some(cur)),
        other => (cur, other),
    }
}
