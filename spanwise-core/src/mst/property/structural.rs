//! Structural checks on Prim trees and Kruskal forests.
//!
//! - every output edge is canonical and present in the graph with the same
//!   weight
//! - the forest is acyclic and has `V - C` edges for `C` components
//! - Prim reaches exactly the component of its root and its parent links
//!   point at reached vertices

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Graph, MstEdge, Representation, kruskal, prim};

use super::helpers::{component_roots, count_components, find_root};
use super::types::MstFixture;

pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph(Representation::AdjacencyList);
    let components = count_components(
        fixture.vertex_count,
        fixture.edges.iter().map(|edge| (edge.left(), edge.right())),
    );

    let forest = kruskal(&graph);
    validate_edges_exist(&graph, forest.edges())?;
    validate_acyclicity(fixture.vertex_count, forest.edges())?;
    let expected = fixture.vertex_count - components;
    if forest.edges().len() != expected {
        return Err(TestCaseError::fail(format!(
            "kruskal kept {} edges, expected {expected} ({})",
            forest.edges().len(),
            fixture.describe(),
        )));
    }
    if forest.is_complete() != (components == 1) {
        return Err(TestCaseError::fail(format!(
            "completeness flag wrong for {components} components ({})",
            fixture.describe(),
        )));
    }

    validate_prim_tree(fixture, &graph)
}

fn validate_prim_tree(fixture: &MstFixture, graph: &Graph) -> TestCaseResult {
    let roots = component_roots(
        fixture.vertex_count,
        fixture.edges.iter().map(|edge| (edge.left(), edge.right())),
    );
    let tree = prim(graph, 1).map_err(|err| TestCaseError::fail(err.to_string()))?;
    let tree_edges = tree.edges();
    validate_edges_exist(graph, &tree_edges)?;
    validate_acyclicity(fixture.vertex_count, &tree_edges)?;

    for vertex in graph.vertices() {
        let expected = roots[vertex] == roots[1];
        if tree.is_reached(vertex) != expected {
            return Err(TestCaseError::fail(format!(
                "vertex {vertex}: reached={} but same component as root={expected}",
                tree.is_reached(vertex),
            )));
        }
        if let Some(parent) = tree.parent(vertex)
            && !tree.is_reached(parent)
        {
            return Err(TestCaseError::fail(format!(
                "vertex {vertex} hangs from unreached parent {parent}",
            )));
        }
    }
    if tree_edges.len() + 1 != tree.reached_count() {
        return Err(TestCaseError::fail(format!(
            "prim tree has {} edges for {} reached vertices",
            tree_edges.len(),
            tree.reached_count(),
        )));
    }
    Ok(())
}

fn validate_edges_exist(graph: &Graph, edges: &[MstEdge]) -> TestCaseResult {
    for (i, edge) in edges.iter().enumerate() {
        if edge.source() >= edge.target() {
            return Err(TestCaseError::fail(format!(
                "edge {i}: not canonical ({} >= {})",
                edge.source(),
                edge.target(),
            )));
        }
        if graph.weight(edge.source(), edge.target()) != Some(edge.weight()) {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}, {}) is not a graph edge",
                edge.source(),
                edge.target(),
                edge.weight(),
            )));
        }
    }
    Ok(())
}

fn validate_acyclicity(vertex_count: usize, edges: &[MstEdge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..=vertex_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) closes a cycle",
                edge.source(),
                edge.target(),
            )));
        }
        parent[right] = left;
    }
    Ok(())
}
