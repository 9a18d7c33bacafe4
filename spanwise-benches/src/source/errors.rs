//! Error types for synthetic benchmark graph generation.

/// Errors that may occur while preparing benchmark graphs.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// Fewer edges were requested than a connected graph needs.
    #[error("{edge_count} edges cannot connect {vertex_count} vertices")]
    TooFewEdges {
        /// Requested number of edges.
        edge_count: usize,
        /// Requested number of vertices.
        vertex_count: usize,
    },
    /// More edges were requested than a simple graph can hold.
    #[error("{edge_count} edges exceed the {maximum} possible on {vertex_count} vertices")]
    TooManyEdges {
        /// Requested number of edges.
        edge_count: usize,
        /// Requested number of vertices.
        vertex_count: usize,
        /// Largest possible edge count.
        maximum: usize,
    },
    /// The weight range was empty.
    #[error("maximum weight must be greater than zero")]
    ZeroMaxWeight,
}
