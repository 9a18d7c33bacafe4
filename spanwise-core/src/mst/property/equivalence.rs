//! Agreement between Prim, Kruskal and the sort-based oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, Representation, kruskal, prim};

use super::helpers::component_roots;
use super::oracle::sorted_kruskal;
use super::types::MstFixture;

/// Checks that Kruskal matches the oracle on the whole graph and that Prim
/// matches the oracle on the component containing vertex 1.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let oracle = sorted_kruskal(fixture.vertex_count, &fixture.edges);

    for representation in [Representation::AdjacencyList, Representation::AdjacencyMatrix] {
        let graph = fixture.graph(representation);
        let forest = kruskal(&graph);
        if forest.total_weight() != oracle.total_weight
            || forest.edges().len() != oracle.edge_count
            || forest.component_count() != oracle.component_count
        {
            return Err(TestCaseError::fail(format!(
                "kruskal ({}) disagrees with oracle: weight {} vs {}, edges {} vs {}, \
                 components {} vs {} ({})",
                representation.as_str(),
                forest.total_weight(),
                oracle.total_weight,
                forest.edges().len(),
                oracle.edge_count,
                forest.component_count(),
                oracle.component_count,
                fixture.describe(),
            )));
        }

        let tree = prim(&graph, 1)
            .map_err(|err| TestCaseError::fail(format!("prim failed: {err} ({})", fixture.describe())))?;
        let expected = component_oracle_weight(fixture, 1);
        if tree.total_weight() != expected {
            return Err(TestCaseError::fail(format!(
                "prim ({}) weight {} but component of vertex 1 weighs {expected} ({})",
                representation.as_str(),
                tree.total_weight(),
                fixture.describe(),
            )));
        }
    }

    Ok(())
}

/// Oracle weight of the spanning tree over the component holding `start`.
fn component_oracle_weight(fixture: &MstFixture, start: usize) -> u64 {
    let roots = component_roots(
        fixture.vertex_count,
        fixture.edges.iter().map(|edge| (edge.left(), edge.right())),
    );
    let inside: Vec<Edge> = fixture
        .edges
        .iter()
        .filter(|edge| roots[edge.left()] == roots[start])
        .copied()
        .collect();
    sorted_kruskal(fixture.vertex_count, &inside).total_weight
}
