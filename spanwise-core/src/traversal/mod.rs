//! Depth-first and breadth-first traversal.
//!
//! Both walks follow the neighbour order of the graph's representation:
//! reverse insertion order for adjacency lists and ascending vertex id for
//! adjacency matrices. The same graph can therefore produce different,
//! equally valid visit orders under the two representations.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::{
    error::Result,
    graph::{Graph, NO_VERTEX, Neighbour, Neighbours},
};

const NOT_VISITED: usize = 0;

/// The outcome of a traversal from a single start vertex.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VisitOrder {
    start: usize,
    order: Vec<usize>,
    predecessors: Vec<usize>,
    sequence: Vec<usize>,
}

impl VisitOrder {
    fn new(vertex_count: usize, start: usize) -> Self {
        let slots = vertex_count.saturating_add(1);
        let mut visits = Self {
            start,
            order: vec![NOT_VISITED; slots],
            predecessors: vec![NO_VERTEX; slots],
            sequence: Vec::with_capacity(vertex_count),
        };
        visits.visit(start, NO_VERTEX);
        visits
    }

    fn visit(&mut self, vertex: usize, from: usize) {
        self.sequence.push(vertex);
        self.order[vertex] = self.sequence.len();
        self.predecessors[vertex] = from;
    }

    fn is_unvisited(&self, vertex: usize) -> bool {
        self.order[vertex] == NOT_VISITED
    }

    /// Returns the start vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn start(&self) -> usize { self.start }

    /// Returns the visit-index array: `order()[v]` is the 1-based position
    /// at which `v` was visited, or `0` when it never was.
    #[must_use]
    #[rustfmt::skip]
    pub fn order(&self) -> &[usize] { &self.order }

    /// Returns the 1-based visit index of `vertex`.
    #[must_use]
    pub fn visit_index(&self, vertex: usize) -> Option<usize> {
        if vertex == NO_VERTEX {
            return None;
        }
        self.order
            .get(vertex)
            .copied()
            .filter(|&index| index != NOT_VISITED)
    }

    /// Returns `true` when `vertex` was visited.
    #[must_use]
    pub fn is_visited(&self, vertex: usize) -> bool {
        self.visit_index(vertex).is_some()
    }

    /// Returns the visited vertices in visit order.
    #[must_use]
    #[rustfmt::skip]
    pub fn sequence(&self) -> &[usize] { &self.sequence }

    /// Returns the vertex from which `vertex` was discovered; `None` for the
    /// start and for unvisited vertices.
    #[must_use]
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors
            .get(vertex)
            .copied()
            .filter(|&from| from != NO_VERTEX)
    }

    /// Returns the predecessor array indexed by vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub fn predecessors(&self) -> &[usize] { &self.predecessors }
}

/// Walks the graph depth first from `start`, in recursive pre-order.
///
/// An explicit stack of neighbour cursors replaces recursion: the top frame
/// resumes scanning its neighbours where it left off, so the visit order is
/// identical to the recursive walk regardless of graph depth.
///
/// # Errors
/// Returns [`GraphError::StartOutOfRange`](crate::GraphError::StartOutOfRange)
/// when `start` is not a vertex of `graph`.
///
/// # Examples
/// ```
/// use spanwise_core::{GraphBuilder, Representation, depth_first};
///
/// let graph = GraphBuilder::new(4)
///     .with_representation(Representation::AdjacencyMatrix)
///     .with_edge(1, 2, 2)
///     .with_edge(2, 3, 1)
///     .with_edge(3, 4, 3)
///     .with_edge(4, 1, 4)
///     .build()?;
/// let visits = depth_first(&graph, 1)?;
/// assert_eq!(visits.sequence(), [1, 2, 3, 4]);
/// assert_eq!(visits.predecessor(4), Some(3));
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[instrument(
    name = "core.depth_first",
    skip(graph),
    fields(representation = graph.representation().as_str()),
)]
pub fn depth_first(graph: &Graph, start: usize) -> Result<VisitOrder> {
    graph.check_start(start)?;

    let mut visits = VisitOrder::new(graph.vertex_count(), start);
    let mut stack: Vec<(usize, Neighbours<'_>)> = vec![(start, graph.neighbours(start))];

    while let Some((vertex, cursor)) = stack.last_mut() {
        let from = *vertex;
        match cursor.find(|neighbour| visits.is_unvisited(neighbour.vertex)) {
            Some(Neighbour { vertex: next, .. }) => {
                visits.visit(next, from);
                stack.push((next, graph.neighbours(next)));
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!(visited = visits.sequence.len(), "depth-first walk completed");
    Ok(visits)
}

/// Walks the graph breadth first from `start`.
///
/// Vertices are marked when they are enqueued, so each enters the queue at
/// most once.
///
/// # Errors
/// Returns [`GraphError::StartOutOfRange`](crate::GraphError::StartOutOfRange)
/// when `start` is not a vertex of `graph`.
#[instrument(
    name = "core.breadth_first",
    skip(graph),
    fields(representation = graph.representation().as_str()),
)]
pub fn breadth_first(graph: &Graph, start: usize) -> Result<VisitOrder> {
    graph.check_start(start)?;

    let mut visits = VisitOrder::new(graph.vertex_count(), start);
    let mut queue = VecDeque::from([start]);

    while let Some(vertex) = queue.pop_front() {
        for Neighbour { vertex: next, .. } in graph.neighbours(vertex) {
            if visits.is_unvisited(next) {
                visits.visit(next, vertex);
                queue.push_back(next);
            }
        }
    }

    debug!(visited = visits.sequence.len(), "breadth-first walk completed");
    Ok(visits)
}
