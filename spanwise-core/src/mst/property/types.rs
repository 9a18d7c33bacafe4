//! Fixture types for the MST property suite.

use test_strategy::Arbitrary;

use crate::{Edge, Graph, Representation};

/// Shape of the generated graph and its weights.
#[derive(Arbitrary, Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range; ties are rare.
    #[weight(2)]
    Wide,
    /// Weights drawn from a pool of one to three values.
    #[weight(3)]
    ManyIdentical,
    /// A random spanning path plus roughly `n / 2` extra edges.
    #[weight(2)]
    Sparse,
    /// Close to a complete graph.
    #[weight(2)]
    Dense,
    /// Two to five components with no edges between them.
    #[weight(2)]
    Disconnected,
}

/// A generated graph, kept as raw edges so it can be built under either
/// representation.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds the fixture; generators never emit invalid edges.
    pub(super) fn graph(&self, representation: Representation) -> Graph {
        match Graph::from_edges(self.vertex_count, self.edges.iter().copied(), representation) {
            Ok(graph) => graph,
            Err(err) => panic!(
                "generated {:?} fixture must be valid: {err}",
                self.distribution
            ),
        }
    }

    /// Describes the fixture for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len()
        )
    }
}
