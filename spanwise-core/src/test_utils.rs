//! Shared test utilities for `spanwise-core`.

use proptest::test_runner::Config as ProptestConfig;
use spanwise_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{Edge, Graph, Representation};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `SPANWISE_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// The four-cycle `1-2 (2), 2-3 (1), 3-4 (3), 4-1 (4)`.
///
/// Its MST weighs 6 and Dijkstra from vertex 1 gives `[_, 0, 2, 3, 4]`.
pub(crate) fn square_graph(representation: Representation) -> Graph {
    graph_from(
        4,
        &[(1, 2, 2), (2, 3, 1), (3, 4, 3), (4, 1, 4)],
        representation,
    )
}

/// Three vertices with a single edge `1-2 (5)`; vertex 3 is isolated.
pub(crate) fn split_graph(representation: Representation) -> Graph {
    graph_from(3, &[(1, 2, 5)], representation)
}

/// Builds a graph from `(u, v, w)` triples, panicking on invalid fixtures.
pub(crate) fn graph_from(
    vertex_count: usize,
    edges: &[(usize, usize, i64)],
    representation: Representation,
) -> Graph {
    let edges = edges
        .iter()
        .map(|&(left, right, weight)| Edge::new(left, right, weight));
    match Graph::from_edges(vertex_count, edges, representation) {
        Ok(graph) => graph,
        Err(err) => panic!("test fixture must be a valid graph: {err}"),
    }
}
