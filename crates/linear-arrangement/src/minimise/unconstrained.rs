//! Minimum sum of edge lengths over all arrangements of a free tree.
//!
//! The dynamic program of Chung (equivalently Shiloach), with the published
//! corrections: a component is split at a centroid vertex; either the
//! heaviest subtree separates cleanly, or some `2q + 1` heaviest subtrees
//! are spread around a central block, every choice of which subtree stays
//! central is tried, and a closed form prices the edges that cross between
//! blocks.
//!
//! Subproblems come in two kinds. *Unanchored*: arrange the component of a
//! vertex into an interval. *Anchored*: the same, but the component connects
//! to the rest of the arrangement just beyond the left (`Anchor::Left`) or
//! right (`Anchor::Right`) end of its interval, and the returned cost
//! includes the in-interval part of that connecting edge (the distance from
//! the anchor vertex to the facing boundary). That convention makes every
//! cost position-independent, so the trial formulas need only subtree sizes.
//!
//! The solver works on a scratch copy of the tree: trial splits remove edges
//! and re-insert them on every path out, so the copy ends structurally
//! intact.

use crate::arrangement::LinearArrangement;
use crate::graphs::{Edge, FreeTree, GraphCore, Neighbours};
use crate::index::Node;
use crate::properties::{centroid_of_component, subtree_sizes_from};
use crate::seq::Seq;
use crate::sorting::{counting_sort_by_key, SortOrder};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Anchor {
    No,
    Left,
    Right,
}

/// Subtree sizes and roots of the subtrees hanging off a vertex,
/// non-increasing by size, ties by ascending vertex index.
type Ordering = Vec<(usize, Node)>;

pub(crate) fn min_unconstrained(t: &FreeTree) -> (u64, LinearArrangement) {
    let n = t.num_nodes();
    let mut arr = LinearArrangement::identity(n);
    if n == 1 {
        return (0, arr);
    }
    let mut working = t.clone();
    let cost = calculate_mla(&mut working, Anchor::No, Node::new(0), 0, n - 1, &mut arr);
    (cost, arr)
}

/// The children of `u` in its current component, heaviest first.
///
/// Ties must break towards the lower vertex index no matter what order the
/// adjacency list is in mid-trial, so the list is first put in descending
/// vertex order (unique keys), which the descending size sort then reverses
/// within each size class.
fn ordering_of(t: &FreeTree, u: Node, sizes: &Seq<usize>) -> Ordering {
    let mut ord: Ordering = t.neighbours(u).iter().map(|&w| (sizes[w], w)).collect();
    let max_vertex = t.num_nodes() - 1;
    counting_sort_by_key(&mut ord, max_vertex, SortOrder::Descending, |&(_, w)| w.index());
    counting_sort_by_key(&mut ord, t.num_nodes(), SortOrder::Descending, |&(s, _)| s);
    ord
}

/// Largest `q` with `t_{2q}` above the split threshold, or `None` when the
/// heaviest subtree separates cleanly.
fn calculate_q(n: usize, ord: &Ordering) -> Option<usize> {
    debug_assert!(!ord.is_empty());
    let k = ord.len() - 1;
    let t_0 = ord[0].0;

    let mut q = k / 2;
    let sum: usize = ord[..=2 * q].iter().map(|e| e.0).sum();

    let mut z = n - sum;
    let mut threshold = (t_0 + 2) / 2 + (z + 2) / 2;
    let mut t_2q = ord[2 * q].0;

    while t_2q <= threshold {
        z += ord[2 * q].0;
        if q > 0 {
            z += ord[2 * q - 1].0;
        }
        threshold = (t_0 + 2) / 2 + (z + 2) / 2;

        if q == 0 {
            return None;
        }
        q -= 1;
        t_2q = ord[2 * q].0;
    }
    Some(q)
}

/// The anchored counterpart of [calculate_q].
fn calculate_p(n: usize, ord: &Ordering) -> Option<usize> {
    if ord.len() < 2 {
        return None;
    }
    let k = ord.len() - 1;
    let t_0 = ord[0].0;

    let mut p = (k - 1) / 2;
    let sum: usize = ord[..=2 * p + 1].iter().map(|e| e.0).sum();

    let mut y = n - sum;
    let mut threshold = (t_0 + 2) / 2 + (y + 2) / 2;
    let mut t_odd = ord[2 * p + 1].0;

    while t_odd <= threshold {
        y += ord[2 * p + 1].0 + ord[2 * p].0;
        threshold = (t_0 + 2) / 2 + (y + 2) / 2;

        if p == 0 {
            return None;
        }
        p -= 1;
        t_odd = ord[2 * p + 1].0;
    }
    Some(p)
}

/// Zig-zag permutation of `0..count` skipping `skip`: values are written
/// from the outer right end, alternating between the two ends moving
/// inward. Slot 0 is never written and never read; the trial loops index
/// from 1.
fn zigzag(count: usize, skip: usize) -> Vec<usize> {
    let mut v = vec![0_usize; count];
    let mut pos = count - 1;
    let mut right_pos = pos;
    let mut left_pos = 1;
    for j in (0..count).filter(|&j| j != skip) {
        v[pos] = j;
        if pos > left_pos {
            right_pos -= 1;
            pos = left_pos;
        } else {
            left_pos += 1;
            pos = right_pos;
        }
    }
    v
}

fn calculate_mla(
    t: &mut FreeTree,
    anchor: Anchor,
    node: Node,
    start: usize,
    end: usize,
    arr: &mut LinearArrangement,
) -> u64 {
    let sizes = subtree_sizes_from(t, node);
    let n = sizes[node];

    if n == 1 {
        arr.assign(node, start);
        return 0;
    }

    match anchor {
        Anchor::No => {
            let (u, _) = centroid_of_component(t, node);
            let sizes_u = if u == node { sizes } else { subtree_sizes_from(t, u) };
            let ord = ordering_of(t, u, &sizes_u);

            match calculate_q(n, &ord) {
                None => {
                    let (n_0, t_0) = ord[0];
                    t.remove_edge(u, t_0, false, false);
                    let c1 = calculate_mla(t, Anchor::Right, t_0, start, start + n_0 - 1, arr);
                    let c2 = calculate_mla(t, Anchor::Left, u, start + n_0, end, arr);
                    t.add_edge(u, t_0, false, false);
                    c1 + c2 + 1
                }
                Some(q) => {
                    let edges: Vec<Edge> = ord[..=2 * q].iter().map(|&(_, c)| (u, c)).collect();
                    t.remove_edges(&edges, false, false);
                    let size_rest: usize = ord[2 * q + 1..].iter().map(|e| e.0).sum();

                    let mut best = u64::MAX;
                    for i in 0..=2 * q {
                        let q_i = zigzag(2 * q + 1, i);
                        t.add_edge(u, ord[i].1, false, false);

                        let mut arr_i = arr.clone();
                        let mut cost_i = 0_u64;
                        let mut start_aux = start;

                        for j in 1..=q {
                            let (n_j, v_j) = ord[q_i[j]];
                            cost_i += calculate_mla(t, Anchor::Right, v_j, start_aux, start_aux + n_j - 1, &mut arr_i);
                            start_aux += n_j;
                        }

                        let centre_end = start_aux + ord[i].0 + size_rest;
                        cost_i += calculate_mla(t, Anchor::No, u, start_aux, centre_end, &mut arr_i);
                        start_aux = centre_end + 1;

                        for j in q + 1..=2 * q {
                            let (n_j, v_j) = ord[q_i[j]];
                            cost_i += calculate_mla(t, Anchor::Left, v_j, start_aux, start_aux + n_j - 1, &mut arr_i);
                            start_aux += n_j;
                        }

                        cost_i += (n * q) as u64;
                        let mut spread = 0_u64;
                        for j in 1..=q {
                            spread += ((q - j + 1) * (ord[q_i[j]].0 + ord[q_i[2 * q - j + 1]].0)) as u64;
                        }
                        cost_i -= spread;
                        cost_i += q as u64;

                        if cost_i < best {
                            best = cost_i;
                            *arr = arr_i;
                        }
                        t.remove_edge(u, ord[i].1, false, false);
                    }

                    t.add_edges(&edges, false, false);
                    best
                }
            }
        }
        Anchor::Left | Anchor::Right => {
            let ord = ordering_of(t, node, &sizes);

            match calculate_p(n, &ord) {
                None => {
                    let (n_0, t_0) = ord[0];
                    t.remove_edge(node, t_0, false, false);
                    let cost = match anchor {
                        Anchor::Left => {
                            let c1 = calculate_mla(t, Anchor::No, node, start, end - n_0, arr);
                            let c2 = calculate_mla(t, Anchor::Left, t_0, end - n_0 + 1, end, arr);
                            c1 + c2
                        }
                        _ => {
                            let c1 = calculate_mla(t, Anchor::Right, t_0, start, start + n_0 - 1, arr);
                            let c2 = calculate_mla(t, Anchor::No, node, start + n_0, end, arr);
                            c1 + c2
                        }
                    };
                    t.add_edge(node, t_0, false, false);
                    cost + (n - n_0) as u64
                }
                Some(p) => {
                    let edges: Vec<Edge> = ord[..=2 * p + 1].iter().map(|&(_, c)| (node, c)).collect();
                    t.remove_edges(&edges, false, false);
                    let size_rest: usize = ord[2 * p + 2..].iter().map(|e| e.0).sum();

                    let mut best = u64::MAX;
                    for i in 0..=2 * p + 1 {
                        let p_i = zigzag(2 * p + 2, i);
                        t.add_edge(node, ord[i].1, false, false);

                        let mut arr_i = arr.clone();
                        let mut cost_i = 0_u64;

                        match anchor {
                            Anchor::Left => {
                                let mut start_aux = start;
                                for j in 1..=p {
                                    let (n_j, v_j) = ord[p_i[j]];
                                    cost_i +=
                                        calculate_mla(t, Anchor::Right, v_j, start_aux, start_aux + n_j - 1, &mut arr_i);
                                    start_aux += n_j;
                                }

                                let centre_end = start_aux + ord[i].0 + size_rest;
                                cost_i += calculate_mla(t, Anchor::No, node, start_aux, centre_end, &mut arr_i);
                                start_aux = centre_end + 1;

                                for j in p + 1..=2 * p + 1 {
                                    let (n_j, v_j) = ord[p_i[j]];
                                    cost_i +=
                                        calculate_mla(t, Anchor::Left, v_j, start_aux, start_aux + n_j - 1, &mut arr_i);
                                    start_aux += n_j;
                                }
                            }
                            _ => {
                                // mirror image of the left-anchored layout;
                                // `stop` is exclusive so the cursor cannot
                                // run below the interval start
                                let mut stop = end + 1;
                                for j in 1..=p {
                                    let (n_j, v_j) = ord[p_i[j]];
                                    cost_i += calculate_mla(t, Anchor::Left, v_j, stop - n_j, stop - 1, &mut arr_i);
                                    stop -= n_j;
                                }

                                let centre_len = ord[i].0 + size_rest + 1;
                                cost_i += calculate_mla(t, Anchor::No, node, stop - centre_len, stop - 1, &mut arr_i);
                                stop -= centre_len;

                                for j in p + 1..=2 * p + 1 {
                                    let (n_j, v_j) = ord[p_i[j]];
                                    cost_i += calculate_mla(t, Anchor::Right, v_j, stop - n_j, stop - 1, &mut arr_i);
                                    stop -= n_j;
                                }
                            }
                        }

                        cost_i += (n * (p + 1)) as u64;
                        cost_i -= ((p + 1) * ord[p_i[2 * p + 1]].0) as u64;
                        let mut spread = 0_u64;
                        for j in 1..=p {
                            spread += ((p - j + 1) * (ord[p_i[j]].0 + ord[p_i[2 * p - j + 1]].0)) as u64;
                        }
                        cost_i -= spread;
                        cost_i += p as u64;

                        if cost_i < best {
                            best = cost_i;
                            *arr = arr_i;
                        }
                        t.remove_edge(node, ord[i].1, false, false);
                    }

                    t.add_edges(&edges, false, false);
                    best
                }
            }
        }
    }
}
