//! Independent references for MST property verification.
//!
//! `sorted_kruskal` sorts the edge list and uses a rank-balanced,
//! path-compressing union-find, sharing no code with the heap-driven
//! implementation. `exhaustive_minimum` enumerates every edge subset and is
//! only usable on tiny graphs.

use crate::Edge;

use super::helpers::{count_components, find_root};

/// Outcome of an oracle run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    pub total_weight: u64,
    pub edge_count: usize,
    pub component_count: usize,
}

/// Edge-count ceiling for [`exhaustive_minimum`].
pub(super) const EXHAUSTIVE_EDGE_LIMIT: usize = 12;

/// Minimum spanning forest weight via sort-then-union.
pub(super) fn sorted_kruskal(vertex_count: usize, edges: &[Edge]) -> OracleForest {
    let mut sorted: Vec<&Edge> = edges.iter().collect();
    sorted.sort_by_key(|edge| edge.weight());

    let mut parent: Vec<usize> = (0..=vertex_count).collect();
    let mut rank = vec![0_u8; vertex_count + 1];
    let mut total_weight = 0_u64;
    let mut edge_count = 0;

    for edge in sorted {
        let left = find_root(&mut parent, edge.left());
        let right = find_root(&mut parent, edge.right());
        if left == right {
            continue;
        }
        let (root, child) = if rank[left] >= rank[right] {
            (left, right)
        } else {
            (right, left)
        };
        parent[child] = root;
        if rank[root] == rank[child] {
            rank[root] += 1;
        }
        total_weight += edge.weight().unsigned_abs();
        edge_count += 1;
    }

    OracleForest {
        total_weight,
        edge_count,
        component_count: vertex_count - edge_count,
    }
}

/// Smallest total weight over all edge subsets that connect exactly the
/// components the full edge set connects.
///
/// # Panics
/// Panics when `edges` exceeds [`EXHAUSTIVE_EDGE_LIMIT`].
pub(super) fn exhaustive_minimum(vertex_count: usize, edges: &[Edge]) -> u64 {
    assert!(edges.len() <= EXHAUSTIVE_EDGE_LIMIT, "too many edges to enumerate");
    let full_mask = (1_u32 << edges.len()) - 1;
    let target = count_components(vertex_count, subset_pairs(edges, full_mask));

    (0..=full_mask)
        .filter(|&mask| count_components(vertex_count, subset_pairs(edges, mask)) == target)
        .map(|mask| {
            subset(edges, mask)
                .map(|edge| edge.weight().unsigned_abs())
                .sum::<u64>()
        })
        .min()
        .unwrap_or(0)
}

fn subset(edges: &[Edge], mask: u32) -> impl Iterator<Item = &Edge> {
    edges
        .iter()
        .enumerate()
        .filter(move |&(index, _)| mask & (1 << index) != 0)
        .map(|(_, edge)| edge)
}

fn subset_pairs(edges: &[Edge], mask: u32) -> impl Iterator<Item = (usize, usize)> + '_ {
    subset(edges, mask).map(|edge| (edge.left(), edge.right()))
}
