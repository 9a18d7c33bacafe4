//! Immutable graph store.
//!
//! A [`Graph`] owns the vertex and edge counts, the validated edge list in
//! input order, and one adjacency representation chosen at construction. It
//! is never mutated afterwards, so a single graph may be shared by reference
//! across any number of algorithm runs.

mod builder;

use std::{collections::HashSet, iter::Rev, ops::RangeInclusive, slice};

use tracing::{debug, instrument};

use crate::error::{GraphError, Result};

pub use self::builder::GraphBuilder;

/// Vertex id used as the "none" marker in parent and predecessor arrays.
///
/// Real vertices are numbered `1..=vertex_count`, so slot `0` of every
/// per-vertex array is unused.
pub const NO_VERTEX: usize = 0;

/// Storage layout used for neighbour lookups.
///
/// The layout also fixes neighbour order, which traversals observe:
/// adjacency lists yield the most recently added edge first (the reverse of
/// input order), adjacency matrices yield neighbours in ascending vertex id.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Representation {
    /// One list of `(neighbour, weight)` pairs per vertex.
    #[default]
    AdjacencyList,
    /// A dense `(V + 1) x (V + 1)` table of optional weights.
    AdjacencyMatrix,
}

impl Representation {
    /// Returns the short name used in logs and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AdjacencyList => "list",
            Self::AdjacencyMatrix => "matrix",
        }
    }
}

/// An undirected edge as supplied by a loader, before validation.
///
/// The weight is signed so negative inputs can be detected and rejected
/// rather than silently wrapped.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    left: usize,
    right: usize,
    weight: i64,
}

impl Edge {
    /// Creates an unvalidated edge.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::Edge;
    ///
    /// let edge = Edge::new(1, 2, 7);
    /// assert_eq!((edge.left(), edge.right(), edge.weight()), (1, 2, 7));
    /// ```
    #[must_use]
    pub const fn new(left: usize, right: usize, weight: i64) -> Self {
        Self {
            left,
            right,
            weight,
        }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn left(&self) -> usize { self.left }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn right(&self) -> usize { self.right }

    /// Returns the raw weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }
}

/// A validated edge stored by a [`Graph`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GraphEdge {
    left: usize,
    right: usize,
    weight: u64,
}

impl GraphEdge {
    /// Returns the first endpoint, in input order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn left(&self) -> usize { self.left }

    /// Returns the second endpoint, in input order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn right(&self) -> usize { self.right }

    /// Returns the non-negative weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u64 { self.weight }
}

/// A neighbour reached over a single edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Neighbour {
    /// The vertex at the far end of the edge.
    pub vertex: usize,
    /// Weight of the connecting edge.
    pub weight: u64,
}

#[derive(Clone, Debug)]
enum Adjacency {
    List(Vec<Vec<Neighbour>>),
    Matrix {
        stride: usize,
        weights: Vec<Option<u64>>,
    },
}

/// An undirected, non-negatively weighted simple graph.
///
/// # Examples
/// ```
/// use spanwise_core::{Edge, Graph, Representation};
///
/// let graph = Graph::from_edges(
///     3,
///     [Edge::new(1, 2, 4), Edge::new(2, 3, 1)],
///     Representation::AdjacencyMatrix,
/// )?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.weight(3, 2), Some(1));
/// let around_two: Vec<usize> = graph.neighbours(2).map(|n| n.vertex).collect();
/// assert_eq!(around_two, [1, 3]);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<GraphEdge>,
    adjacency: Adjacency,
}

impl Graph {
    /// Validates `edges` and builds a graph in the requested representation.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count == 0`,
    /// [`GraphError::VertexOutOfRange`] when an endpoint lies outside
    /// `1..=vertex_count`, [`GraphError::SelfLoop`] for `u == v`,
    /// [`GraphError::NegativeWeight`] for weights below zero,
    /// [`GraphError::ParallelEdge`] when a vertex pair repeats, and
    /// [`GraphError::TooLarge`] when the adjacency storage cannot be
    /// allocated. No partial graph is returned.
    #[instrument(
        name = "core.build_graph",
        skip(edges, representation),
        fields(representation = representation.as_str(), edges = tracing::field::Empty),
    )]
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = Edge>,
        representation: Representation,
    ) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let mut seen = HashSet::new();
        let mut validated = Vec::new();
        for edge in edges {
            let stored = validate_edge(edge, vertex_count)?;
            if !seen.insert(canonical_pair(stored.left, stored.right)) {
                let (left, right) = canonical_pair(stored.left, stored.right);
                return Err(GraphError::ParallelEdge { left, right });
            }
            validated.push(stored);
        }
        tracing::Span::current().record("edges", validated.len());

        let adjacency = match representation {
            Representation::AdjacencyList => build_lists(vertex_count, &validated),
            Representation::AdjacencyMatrix => build_matrix(vertex_count, &validated),
        }
        .ok_or(GraphError::TooLarge {
            vertex_count,
            representation: representation.as_str(),
        })?;
        debug!(vertex_count, "graph constructed");

        Ok(Self {
            vertex_count,
            edges: validated,
            adjacency,
        })
    }

    /// Returns the number of vertices `V`.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges `E`.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the validated edges in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[GraphEdge] { &self.edges }

    /// Returns the representation chosen at construction.
    #[must_use]
    pub fn representation(&self) -> Representation {
        match self.adjacency {
            Adjacency::List(_) => Representation::AdjacencyList,
            Adjacency::Matrix { .. } => Representation::AdjacencyMatrix,
        }
    }

    /// Returns the valid vertex ids, `1..=V`.
    #[must_use]
    pub fn vertices(&self) -> RangeInclusive<usize> {
        1..=self.vertex_count
    }

    /// Returns `true` when `vertex` names a vertex of this graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        (1..=self.vertex_count).contains(&vertex)
    }

    /// Iterates the neighbours of `vertex` in the representation's natural
    /// order. Unknown vertices have no neighbours.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> Neighbours<'_> {
        let inner = match &self.adjacency {
            Adjacency::List(lists) => NeighboursInner::List(
                lists
                    .get(vertex)
                    .map_or(&[][..], Vec::as_slice)
                    .iter()
                    .rev(),
            ),
            Adjacency::Matrix { stride, weights } => {
                let row = vertex
                    .checked_mul(*stride)
                    .and_then(|start| weights.get(start..start.saturating_add(*stride)))
                    .filter(|_| vertex != NO_VERTEX)
                    .unwrap_or(&[]);
                NeighboursInner::Matrix { row, next: 1 }
            }
        };
        Neighbours { inner }
    }

    /// Returns the number of edges incident to `vertex`.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> usize {
        self.neighbours(vertex).count()
    }

    /// Returns the weight of the edge joining `left` and `right`, if any.
    #[must_use]
    pub fn weight(&self, left: usize, right: usize) -> Option<u64> {
        match &self.adjacency {
            Adjacency::List(_) => self
                .neighbours(left)
                .find(|neighbour| neighbour.vertex == right)
                .map(|neighbour| neighbour.weight),
            Adjacency::Matrix { stride, weights } => {
                if !self.contains_vertex(left) || !self.contains_vertex(right) {
                    return None;
                }
                weights
                    .get(left.saturating_mul(*stride).saturating_add(right))
                    .copied()
                    .flatten()
            }
        }
    }

    pub(crate) fn check_start(&self, start: usize) -> Result<()> {
        if self.contains_vertex(start) {
            Ok(())
        } else {
            Err(GraphError::StartOutOfRange {
                start,
                vertex_count: self.vertex_count,
            })
        }
    }
}

/// Iterator over the neighbours of one vertex, returned by
/// [`Graph::neighbours`].
#[derive(Clone, Debug)]
pub struct Neighbours<'a> {
    inner: NeighboursInner<'a>,
}

#[derive(Clone, Debug)]
enum NeighboursInner<'a> {
    List(Rev<slice::Iter<'a, Neighbour>>),
    Matrix {
        row: &'a [Option<u64>],
        next: usize,
    },
}

impl Iterator for Neighbours<'_> {
    type Item = Neighbour;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            NeighboursInner::List(iter) => iter.next().copied(),
            NeighboursInner::Matrix { row, next } => {
                while let Some(cell) = row.get(*next) {
                    let vertex = *next;
                    *next = next.saturating_add(1);
                    if let Some(weight) = cell {
                        return Some(Neighbour {
                            vertex,
                            weight: *weight,
                        });
                    }
                }
                None
            }
        }
    }
}

fn validate_edge(edge: Edge, vertex_count: usize) -> Result<GraphEdge> {
    for vertex in [edge.left, edge.right] {
        if vertex == NO_VERTEX || vertex > vertex_count {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        }
    }
    if edge.left == edge.right {
        return Err(GraphError::SelfLoop { vertex: edge.left });
    }
    let weight = u64::try_from(edge.weight).map_err(|_| GraphError::NegativeWeight {
        left: edge.left,
        right: edge.right,
        weight: edge.weight,
    })?;
    Ok(GraphEdge {
        left: edge.left,
        right: edge.right,
        weight,
    })
}

pub(crate) const fn canonical_pair(left: usize, right: usize) -> (usize, usize) {
    if left <= right {
        (left, right)
    } else {
        (right, left)
    }
}

/// Allocates `len` default slots, or `None` when the allocator refuses.
fn try_filled<T: Clone>(len: usize, value: T) -> Option<Vec<T>> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(len).ok()?;
    slots.resize(len, value);
    Some(slots)
}

fn build_lists(vertex_count: usize, edges: &[GraphEdge]) -> Option<Adjacency> {
    let mut lists = try_filled(vertex_count.checked_add(1)?, Vec::new())?;
    for edge in edges {
        lists[edge.left].push(Neighbour {
            vertex: edge.right,
            weight: edge.weight,
        });
        lists[edge.right].push(Neighbour {
            vertex: edge.left,
            weight: edge.weight,
        });
    }
    Some(Adjacency::List(lists))
}

fn build_matrix(vertex_count: usize, edges: &[GraphEdge]) -> Option<Adjacency> {
    let stride = vertex_count.checked_add(1)?;
    let mut weights = try_filled(stride.checked_mul(stride)?, None)?;
    for edge in edges {
        weights[edge.left * stride + edge.right] = Some(edge.weight);
        weights[edge.right * stride + edge.left] = Some(edge.weight);
    }
    Some(Adjacency::Matrix { stride, weights })
}
