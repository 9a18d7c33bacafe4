//! Graph source abstraction shared by loaders and the CLI.

use crate::{
    error::Result,
    graph::{Edge, Graph, Representation},
};

/// Anything that can describe an undirected weighted graph as a vertex count
/// plus an edge list.
///
/// Loaders implement the three required accessors; [`GraphSource::build_graph`]
/// validates the edges and materialises a [`Graph`] in the requested
/// representation.
///
/// # Examples
/// ```
/// use spanwise_core::{Edge, GraphSource, Representation};
///
/// struct Triangle(Vec<Edge>);
///
/// impl GraphSource for Triangle {
///     fn name(&self) -> &str { "triangle" }
///     fn vertex_count(&self) -> usize { 3 }
///     fn edges(&self) -> &[Edge] { &self.0 }
/// }
///
/// let source = Triangle(vec![Edge::new(1, 2, 1), Edge::new(2, 3, 1), Edge::new(3, 1, 5)]);
/// assert_eq!(source.edge_count(), 3);
/// let graph = source.build_graph(Representation::AdjacencyMatrix)?;
/// assert_eq!(graph.weight(1, 3), Some(5));
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
pub trait GraphSource {
    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the number of vertices; ids run from `1` to this value.
    fn vertex_count(&self) -> usize;

    /// Returns the edges in input order.
    fn edges(&self) -> &[Edge];

    /// Returns the number of edges.
    #[must_use]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Builds a [`Graph`] from this source.
    ///
    /// # Errors
    /// Returns any [`GraphError`](crate::GraphError) raised while validating
    /// the edges.
    fn build_graph(&self, representation: Representation) -> Result<Graph> {
        Graph::from_edges(
            self.vertex_count(),
            self.edges().iter().copied(),
            representation,
        )
    }
}
