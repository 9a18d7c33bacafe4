//! Kruskal's algorithm over the graph's edge list.

use tracing::{debug, info, instrument};

use crate::{graph::Graph, heap::EdgeMinHeap};

use super::{DisjointSetForest, MstEdge};

/// The minimum spanning forest chosen by [`kruskal`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KruskalForest {
    vertex_count: usize,
    edges: Vec<MstEdge>,
    total_weight: u64,
    sets: DisjointSetForest,
}

impl KruskalForest {
    /// Returns the accepted edges in acceptance order, which is ascending
    /// weight with ties broken by input position.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[MstEdge] { &self.edges }

    /// Returns the summed weight of the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> u64 { self.total_weight }

    /// Returns `true` when the forest is a single spanning tree, i.e. it holds
    /// `vertex_count - 1` edges.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1)
    }

    /// Returns the number of trees in the forest.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.sets.set_count()
    }

    /// Lists the vertex sets of each tree, ordered by smallest member.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<usize>> {
        self.sets.sets()
    }

    /// Exposes the disjoint-set forest left behind by the run.
    #[must_use]
    #[rustfmt::skip]
    pub fn disjoint_sets(&self) -> &DisjointSetForest { &self.sets }
}

/// Computes a minimum spanning forest by accepting edges in ascending weight
/// order whenever they join two different trees.
///
/// Scanning stops as soon as `vertex_count - 1` edges are accepted. A
/// disconnected graph yields a forest with one tree per component.
///
/// # Examples
/// ```
/// use spanwise_core::{GraphBuilder, kruskal};
///
/// let graph = GraphBuilder::new(4)
///     .with_edge(1, 2, 2)
///     .with_edge(2, 3, 1)
///     .with_edge(3, 4, 3)
///     .with_edge(4, 1, 4)
///     .build()?;
/// let forest = kruskal(&graph);
/// assert!(forest.is_complete());
/// assert_eq!(forest.total_weight(), 6);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "core.kruskal",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn kruskal(graph: &Graph) -> KruskalForest {
    let vertex_count = graph.vertex_count();
    let target = vertex_count.saturating_sub(1);
    let mut sets = DisjointSetForest::new(vertex_count);
    let mut edges = Vec::with_capacity(target);
    let mut total_weight = 0_u64;
    let mut scanned = 0_usize;

    for (_, edge) in EdgeMinHeap::new(graph.edges()) {
        if edges.len() == target {
            break;
        }
        scanned += 1;
        if sets.union(edge.left(), edge.right()) {
            edges.push(MstEdge::new(edge.left(), edge.right(), edge.weight()));
            total_weight = total_weight.saturating_add(edge.weight());
        }
    }

    debug!(scanned, accepted = edges.len(), "kruskal scan finished");
    let forest = KruskalForest {
        vertex_count,
        edges,
        total_weight,
        sets,
    };
    info!(
        total_weight,
        components = forest.component_count(),
        complete = forest.is_complete(),
        "kruskal completed"
    );
    forest
}
