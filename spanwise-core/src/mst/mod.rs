//! Minimum spanning tree (MST) construction.
//!
//! Two algorithms are provided and are expected to agree on total weight for
//! every connected graph:
//!
//! - [`prim`] grows a tree from a start vertex over the graph's adjacency,
//!   driven by an [`IndexedMinHeap`](crate::heap::IndexedMinHeap).
//! - [`kruskal`] scans the edge list in ascending weight order via an
//!   [`EdgeMinHeap`](crate::heap::EdgeMinHeap) and rejects cycle-forming
//!   edges with a [`DisjointSetForest`].
//!
//! A disconnected graph is not an error: Prim reports the vertices it could
//! not reach and Kruskal reports an incomplete forest.

mod kruskal;
mod prim;
mod union_find;

use std::cmp::Ordering;

use crate::graph::canonical_pair;

pub use self::{
    kruskal::{KruskalForest, kruskal},
    prim::{PrimTree, prim},
    union_find::DisjointSetForest,
};

/// A single MST edge in canonical undirected form (`source < target`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MstEdge {
    source: usize,
    target: usize,
    weight: u64,
}

impl MstEdge {
    pub(crate) const fn new(left: usize, right: usize, weight: u64) -> Self {
        let (source, target) = canonical_pair(left, right);
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u64 { self.weight }
}

impl Ord for MstEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for MstEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod property;
