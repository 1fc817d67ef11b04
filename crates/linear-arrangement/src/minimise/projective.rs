//! Optimal projective arrangement of a rooted tree.
//!
//! Every vertex `r` receives a contiguous interval of the arrangement, sized
//! to its subtree. Children split alternately between the two sides of `r`,
//! smallest nearest, which leaves the heaviest child on the side away from
//! `r`'s parent; the total edge length is minimal while every subtree stays
//! contiguous (no crossings, root uncovered).

use crate::arrangement::LinearArrangement;
use crate::graphs::{GraphCore, RootedTree};
use crate::index::Node;
use crate::seq::Seq;
use crate::sorting::{counting_sort_by_key, SortOrder};

/// Per-vertex child lists annotated with subtree sizes, each list sorted by
/// size ascending.
pub(crate) type ChildLists = Vec<Vec<(Node, usize)>>;

/// Where a vertex sits relative to its parent's position.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Place {
    /// In the interval left of the parent.
    Left,
    /// In the interval right of the parent.
    Right,
    /// The root of the whole tree.
    Root,
}

#[derive(Copy, Clone, Eq, PartialEq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The side the first (smallest) child lands on.
///
/// `slots` counts the positions of the parent's own interval: one per child
/// plus one for the parent. Together with the alternation, the choice parks
/// the heaviest child on the side away from the parent's parent, and fixes
/// the parent's slot to the place rule (`slots/2` under `Left`,
/// `slots/2 - 1`-or-`slots/2` under `Right`, the middle under `Root`).
fn starting_side(slots: usize, place: Place) -> Side {
    match place {
        Place::Left => {
            if slots % 2 == 1 {
                Side::Right
            } else {
                Side::Left
            }
        }
        Place::Right => {
            if slots % 2 == 1 {
                Side::Left
            } else {
                Side::Right
            }
        }
        Place::Root => Side::Left,
    }
}

/// Build the size-annotated child lists of `t`, each sorted ascending by
/// subtree size.
///
/// One counting sort over all edges keeps the whole construction linear; the
/// per-parent lists inherit the global order.
pub(crate) fn sorted_child_lists(t: &RootedTree, sizes: &Seq<usize>) -> ChildLists {
    let n = t.num_nodes();
    let mut entries: Vec<(Node, Node, usize)> = Vec::with_capacity(n.saturating_sub(1));
    for u in (0..n).map(Node::new) {
        for &c in t.children(u) {
            entries.push((u, c, sizes[c]));
        }
    }
    counting_sort_by_key(&mut entries, n, SortOrder::Ascending, |e| e.2);

    let mut lists: ChildLists = vec![Vec::new(); n];
    for (u, c, s) in entries {
        lists[u.index()].push((c, s));
    }
    lists
}

/// Lay out the subtree of `root` into `arr`, its interval starting at
/// position `start`, and return the sum of edge lengths it contributes.
///
/// Children are taken smallest-first from the ascending lists and placed
/// alternately to the two sides of their parent, nearest first. The length
/// of an edge `r - c` splits into two parts: the blocks between `r` and
/// `c`'s interval plus the step onto it (counted here, `acc + 1`), and the
/// distance from `c` to the near boundary of its own interval (counted when
/// `c` is expanded, as the accumulated side opposite to `c`'s place).
pub(crate) fn embed(lists: &ChildLists, root: Node, start: usize, arr: &mut LinearArrangement) -> u64 {
    let mut cost = 0_u64;
    let mut stack: Vec<(Node, Place, usize)> = vec![(root, Place::Root, start)];

    while let Some((v, place, start)) = stack.pop() {
        let children = &lists[v.index()];
        let slots = children.len() + 1;

        // nearest-first per side, smallest child first overall
        let mut side = starting_side(slots, place);
        let mut left: Vec<(Node, usize)> = Vec::new();
        let mut right: Vec<(Node, usize)> = Vec::new();
        let (mut acc_left, mut acc_right) = (0_usize, 0_usize);
        for &(c, s) in children.iter() {
            match side {
                Side::Left => {
                    cost += (acc_left + 1) as u64;
                    left.push((c, s));
                    acc_left += s;
                }
                Side::Right => {
                    cost += (acc_right + 1) as u64;
                    right.push((c, s));
                    acc_right += s;
                }
            }
            side = side.flip();
        }

        let pos = start + acc_left;
        arr.assign(v, pos);
        cost += match place {
            Place::Left => acc_right as u64,
            Place::Right => acc_left as u64,
            Place::Root => 0,
        };

        let mut cur = pos;
        for &(c, s) in &left {
            stack.push((c, Place::Left, cur - s));
            cur -= s;
        }
        let mut cur = pos;
        for &(c, s) in &right {
            stack.push((c, Place::Right, cur + 1));
            cur += s;
        }
    }

    cost
}

/// Minimum projective arrangement of a rooted tree with `sizes` its subtree
/// sizes.
pub(crate) fn embed_rooted(t: &RootedTree, sizes: &Seq<usize>) -> (u64, LinearArrangement) {
    let n = t.num_nodes();
    let mut arr = LinearArrangement::identity(n);
    if n == 1 {
        return (0, arr);
    }
    let lists = sorted_child_lists(t, sizes);
    let cost = embed(&lists, t.root(), 0, &mut arr);
    (cost, arr)
}
