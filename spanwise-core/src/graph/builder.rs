//! Builder utilities for assembling a [`Graph`].
//!
//! Collects edges and the representation choice, then validates everything
//! in one step when [`GraphBuilder::build`] is called.

use crate::error::Result;

use super::{Edge, Graph, Representation};

/// Configures and constructs [`Graph`] instances.
///
/// # Examples
/// ```
/// use spanwise_core::{GraphBuilder, Representation};
///
/// let graph = GraphBuilder::new(4)
///     .with_representation(Representation::AdjacencyMatrix)
///     .with_edge(1, 2, 2)
///     .with_edge(2, 3, 1)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.representation(), Representation::AdjacencyMatrix);
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    vertex_count: usize,
    representation: Representation,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Creates a builder for a graph with `vertex_count` vertices, no edges,
    /// and the default adjacency-list representation.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::{GraphBuilder, Representation};
    ///
    /// let builder = GraphBuilder::new(3);
    /// assert_eq!(builder.vertex_count(), 3);
    /// assert_eq!(builder.representation(), Representation::AdjacencyList);
    /// ```
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            representation: Representation::default(),
            edges: Vec::new(),
        }
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Selects the storage layout.
    #[must_use]
    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Returns the configured storage layout.
    #[must_use]
    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Appends a single edge.
    #[must_use]
    pub fn with_edge(mut self, left: usize, right: usize, weight: i64) -> Self {
        self.edges.push(Edge::new(left, right, weight));
        self
    }

    /// Appends every edge yielded by `edges`, preserving order.
    #[must_use]
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = Edge>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Returns the edges collected so far.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Validates the configuration and constructs a [`Graph`].
    ///
    /// # Errors
    /// Propagates every validation failure of [`Graph::from_edges`].
    pub fn build(self) -> Result<Graph> {
        Graph::from_edges(self.vertex_count, self.edges, self.representation)
    }
}
