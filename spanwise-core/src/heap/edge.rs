//! Edge min-heap used by Kruskal's algorithm.
//!
//! The heap stores indices into a borrowed edge slice and is built bottom-up
//! in linear time. Edges of equal weight come out in input order, which
//! keeps Kruskal's output reproducible.

use std::cmp::Ordering;

use crate::graph::GraphEdge;

/// Yields edges in ascending `(weight, input index)` order.
///
/// # Examples
/// ```
/// use spanwise_core::{Edge, Graph, Representation, heap::EdgeMinHeap};
///
/// let graph = Graph::from_edges(
///     3,
///     [Edge::new(1, 2, 5), Edge::new(2, 3, 1), Edge::new(1, 3, 5)],
///     Representation::AdjacencyList,
/// )?;
/// let order: Vec<usize> = EdgeMinHeap::new(graph.edges()).map(|(index, _)| index).collect();
/// assert_eq!(order, [1, 0, 2]);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct EdgeMinHeap<'a> {
    edges: &'a [GraphEdge],
    slots: Vec<usize>,
    len: usize,
}

impl<'a> EdgeMinHeap<'a> {
    /// Heapifies every edge of `edges`.
    #[must_use]
    pub fn new(edges: &'a [GraphEdge]) -> Self {
        let len = edges.len();
        // Slot 0 is never read; positions 1..=len hold edge indices.
        let mut slots = Vec::with_capacity(len.saturating_add(1));
        slots.push(usize::MAX);
        slots.extend(0..len);

        let mut heap = Self { edges, slots, len };
        for position in (1..=len / 2).rev() {
            heap.sift_down(position);
        }
        heap
    }

    /// Returns the number of edges not yet removed.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.len }

    /// Returns `true` once every edge has been removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes the lightest remaining edge, returning its input index.
    pub fn pop(&mut self) -> Option<(usize, &'a GraphEdge)> {
        if self.is_empty() {
            return None;
        }
        let index = self.slots[1];
        self.slots.swap(1, self.len);
        self.slots.truncate(self.len);
        self.len -= 1;
        if !self.is_empty() {
            self.sift_down(1);
        }
        self.edges.get(index).map(|edge| (index, edge))
    }

    fn compare(&self, left: usize, right: usize) -> Ordering {
        let weight = |index: usize| self.edges.get(index).map(GraphEdge::weight);
        weight(left)
            .cmp(&weight(right))
            .then_with(|| left.cmp(&right))
    }

    fn sift_down(&mut self, mut position: usize) {
        let item = self.slots[position];
        loop {
            let mut child = position * 2;
            if child > self.len {
                break;
            }
            if child < self.len && self.compare(self.slots[child + 1], self.slots[child]).is_lt() {
                child += 1;
            }
            if self.compare(item, self.slots[child]).is_le() {
                break;
            }
            self.slots[position] = self.slots[child];
            position = child;
        }
        self.slots[position] = item;
    }
}

impl<'a> Iterator for EdgeMinHeap<'a> {
    type Item = (usize, &'a GraphEdge);

    fn next(&mut self) -> Option<Self::Item> {
        self.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for EdgeMinHeap<'_> {}
