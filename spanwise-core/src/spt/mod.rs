//! Single-source shortest paths (Dijkstra).

use tracing::{info, instrument};

use crate::{
    error::Result,
    graph::{Graph, NO_VERTEX, Neighbour},
    heap::{INFINITE_PRIORITY, IndexedMinHeap},
};

/// Distance recorded for vertices the source cannot reach.
pub const UNREACHED: u64 = INFINITE_PRIORITY;

/// The shortest-path tree rooted at a source vertex.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPathTree {
    source: usize,
    parents: Vec<usize>,
    distances: Vec<u64>,
    settle_order: Vec<usize>,
}

impl ShortestPathTree {
    /// Returns the source vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the parent array indexed by vertex id; the source and
    /// unreached vertices map to [`NO_VERTEX`].
    #[must_use]
    #[rustfmt::skip]
    pub fn parents(&self) -> &[usize] { &self.parents }

    /// Returns the raw distance array indexed by vertex id, with
    /// [`UNREACHED`] for unreachable vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn distances(&self) -> &[u64] { &self.distances }

    /// Returns the predecessor of `vertex` on its shortest path.
    #[must_use]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents
            .get(vertex)
            .copied()
            .filter(|&parent| parent != NO_VERTEX)
    }

    /// Returns the shortest distance from the source, or `None` when
    /// `vertex` is unreachable or unknown.
    #[must_use]
    pub fn distance(&self, vertex: usize) -> Option<u64> {
        if vertex == NO_VERTEX {
            return None;
        }
        self.distances
            .get(vertex)
            .copied()
            .filter(|&distance| distance != UNREACHED)
    }

    /// Returns the vertices in the order they were settled. Distances along
    /// this order never decrease.
    #[must_use]
    #[rustfmt::skip]
    pub fn settle_order(&self) -> &[usize] { &self.settle_order }

    /// Reconstructs the path from the source to `vertex`, both included.
    #[must_use]
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        self.distance(vertex)?;
        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Computes shortest distances from `start` to every vertex.
///
/// Relaxation uses a saturating add, so paths whose length would overflow
/// `u64` are treated as unreachable rather than wrapping.
///
/// # Errors
/// Returns [`GraphError::StartOutOfRange`](crate::GraphError::StartOutOfRange)
/// when `start` is not a vertex of `graph`.
///
/// # Examples
/// ```
/// use spanwise_core::{GraphBuilder, dijkstra};
///
/// let graph = GraphBuilder::new(4)
///     .with_edge(1, 2, 2)
///     .with_edge(2, 3, 1)
///     .with_edge(3, 4, 3)
///     .with_edge(4, 1, 4)
///     .build()?;
/// let tree = dijkstra(&graph, 1)?;
/// assert_eq!(tree.distance(4), Some(4));
/// assert_eq!(tree.path_to(3), Some(vec![1, 2, 3]));
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[instrument(
    name = "core.dijkstra",
    skip(graph),
    fields(
        vertices = graph.vertex_count(),
        representation = graph.representation().as_str(),
    ),
)]
pub fn dijkstra(graph: &Graph, start: usize) -> Result<ShortestPathTree> {
    graph.check_start(start)?;

    let slots = graph.vertex_count().saturating_add(1);
    let mut heap = IndexedMinHeap::new(graph.vertex_count());
    let mut parents = vec![NO_VERTEX; slots];
    let mut settled = vec![false; slots];
    let mut settle_order = Vec::with_capacity(graph.vertex_count());

    heap.insert(start, 0)?;

    while !heap.is_empty() {
        let (vertex, distance) = heap.extract_min()?;
        settled[vertex] = true;
        settle_order.push(vertex);

        for Neighbour {
            vertex: next,
            weight,
        } in graph.neighbours(vertex)
        {
            if settled[next] {
                continue;
            }
            let candidate = distance.saturating_add(weight);
            let current = heap.priority(next).unwrap_or(UNREACHED);
            if candidate < current {
                parents[next] = vertex;
                if heap.contains(next) {
                    heap.decrease_key(next, candidate)?;
                } else {
                    heap.insert(next, candidate)?;
                }
            }
        }
    }

    let tree = ShortestPathTree {
        source: start,
        parents,
        distances: heap.into_priorities(),
        settle_order,
    };
    info!(reached = tree.settle_order.len(), "dijkstra completed");
    Ok(tree)
}
