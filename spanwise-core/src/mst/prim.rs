//! Prim's algorithm over the graph's adjacency.

use tracing::{info, instrument};

use crate::{
    error::Result,
    graph::{Graph, NO_VERTEX, Neighbour},
    heap::{INFINITE_PRIORITY, IndexedMinHeap},
};

use super::MstEdge;

/// A minimum spanning tree grown from a single root.
///
/// Vertices the root cannot reach keep parent [`NO_VERTEX`] and contribute
/// nothing to [`PrimTree::total_weight`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimTree {
    root: usize,
    parents: Vec<usize>,
    priorities: Vec<u64>,
    reached: Vec<bool>,
    total_weight: u64,
}

impl PrimTree {
    /// Returns the start vertex; it is its own parent.
    #[must_use]
    #[rustfmt::skip]
    pub fn root(&self) -> usize { self.root }

    /// Returns the parent array indexed by vertex id. Slot `0` is unused,
    /// the root maps to itself and unreached vertices map to [`NO_VERTEX`].
    #[must_use]
    #[rustfmt::skip]
    pub fn parents(&self) -> &[usize] { &self.parents }

    /// Returns the tree parent of `vertex`, or `None` when it was not reached.
    #[must_use]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents
            .get(vertex)
            .copied()
            .filter(|&parent| parent != NO_VERTEX)
    }

    /// Returns the weight of the edge that attached `vertex` to the tree.
    ///
    /// The root is attached by a zero-weight pseudo edge.
    #[must_use]
    pub fn attachment_weight(&self, vertex: usize) -> Option<u64> {
        self.is_reached(vertex)
            .then(|| self.priorities.get(vertex).copied())
            .flatten()
    }

    /// Returns `true` when `vertex` was reached from the root.
    #[must_use]
    pub fn is_reached(&self, vertex: usize) -> bool {
        self.reached.get(vertex).copied().unwrap_or(false)
    }

    /// Returns the number of reached vertices, the root included.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.reached.iter().filter(|&&reached| reached).count()
    }

    /// Lists the vertices the root could not reach, in ascending order.
    #[must_use]
    pub fn unreached(&self) -> Vec<usize> {
        (1..self.reached.len())
            .filter(|&vertex| !self.reached[vertex])
            .collect()
    }

    /// Returns `true` when the tree spans every vertex of the graph.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.reached.iter().skip(1).all(|&reached| reached)
    }

    /// Returns the summed weight of all tree edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> u64 { self.total_weight }

    /// Returns the tree edges in canonical form, sorted by `(weight, source,
    /// target)`.
    #[must_use]
    pub fn edges(&self) -> Vec<MstEdge> {
        let mut edges: Vec<MstEdge> = (1..self.parents.len())
            .filter(|&vertex| vertex != self.root)
            .filter_map(|vertex| {
                let parent = self.parent(vertex)?;
                let weight = self.attachment_weight(vertex)?;
                Some(MstEdge::new(parent, vertex, weight))
            })
            .collect();
        edges.sort_unstable();
        edges
    }
}

/// Computes a minimum spanning tree of the component containing `start`.
///
/// Each vertex enters the heap at most once; cheaper connecting edges found
/// later lower its key in place.
///
/// # Errors
/// Returns [`GraphError::StartOutOfRange`](crate::GraphError::StartOutOfRange)
/// when `start` is not a vertex of `graph`.
///
/// # Examples
/// ```
/// use spanwise_core::{GraphBuilder, prim};
///
/// let graph = GraphBuilder::new(4)
///     .with_edge(1, 2, 2)
///     .with_edge(2, 3, 1)
///     .with_edge(3, 4, 3)
///     .with_edge(4, 1, 4)
///     .build()?;
/// let tree = prim(&graph, 1)?;
/// assert_eq!(tree.total_weight(), 6);
/// assert_eq!(tree.parents(), [0, 1, 1, 2, 3]);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[instrument(
    name = "core.prim",
    skip(graph),
    fields(
        vertices = graph.vertex_count(),
        representation = graph.representation().as_str(),
    ),
)]
pub fn prim(graph: &Graph, start: usize) -> Result<PrimTree> {
    graph.check_start(start)?;

    let slots = graph.vertex_count().saturating_add(1);
    let mut heap = IndexedMinHeap::new(graph.vertex_count());
    let mut parents = vec![NO_VERTEX; slots];
    let mut reached = vec![false; slots];

    parents[start] = start;
    heap.insert(start, 0)?;

    while !heap.is_empty() {
        let (vertex, _) = heap.extract_min()?;
        reached[vertex] = true;

        for Neighbour {
            vertex: next,
            weight,
        } in graph.neighbours(vertex)
        {
            if reached[next] {
                continue;
            }
            let current = heap.priority(next).unwrap_or(INFINITE_PRIORITY);
            if weight < current {
                parents[next] = vertex;
                if heap.contains(next) {
                    heap.decrease_key(next, weight)?;
                } else {
                    heap.insert(next, weight)?;
                }
            }
        }
    }

    let priorities = heap.into_priorities();
    let total_weight = (1..slots)
        .filter(|&vertex| vertex != start && reached[vertex])
        .fold(0_u64, |sum, vertex| sum.saturating_add(priorities[vertex]));

    let tree = PrimTree {
        root: start,
        parents,
        priorities,
        reached,
        total_weight,
    };
    info!(
        total_weight,
        reached = tree.reached_count(),
        spanning = tree.is_spanning(),
        "prim completed"
    );
    Ok(tree)
}
