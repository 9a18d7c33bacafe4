//! Benchmark parameter types.
//!
//! Used as Criterion benchmark ids so reports group runs by graph shape.

use std::fmt;

use spanwise_core::Representation;

/// Shape of one benchmarked graph.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Storage layout the algorithm runs against.
    pub representation: Representation,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "V={},E={},{}",
            self.vertex_count,
            self.edge_count,
            self.representation.as_str()
        )
    }
}
