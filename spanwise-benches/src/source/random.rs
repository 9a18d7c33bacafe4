//! Seeded random connected graphs.

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanwise_core::{Edge, GraphSource};

use super::SyntheticError;

/// Shape and seed of a random connected graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges; at least `vertex_count - 1`.
    pub edge_count: usize,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: i64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A random connected simple graph exposed as a [`GraphSource`].
///
/// A random spanning backbone (each vertex joined to a random lower id)
/// guarantees connectivity; the remaining edges join distinct random pairs.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    name: String,
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl SyntheticGraph {
    /// Generates a graph for `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the vertex count or weight range is
    /// empty, or when the edge count cannot produce a connected simple graph.
    ///
    /// # Examples
    /// ```
    /// use spanwise_benches::source::{SyntheticGraph, SyntheticGraphConfig};
    /// use spanwise_core::GraphSource;
    ///
    /// let graph = SyntheticGraph::generate(&SyntheticGraphConfig {
    ///     vertex_count: 10,
    ///     edge_count: 20,
    ///     max_weight: 100,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(graph.edge_count(), 20);
    /// # Ok::<(), spanwise_benches::source::SyntheticError>(())
    /// ```
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        validate(config)?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut pairs = HashSet::with_capacity(config.edge_count);
        let mut edges = Vec::with_capacity(config.edge_count);

        for vertex in 2..=config.vertex_count {
            let parent = rng.gen_range(1..vertex);
            pairs.insert((parent, vertex));
            edges.push(Edge::new(parent, vertex, rng.gen_range(1..=config.max_weight)));
        }

        while edges.len() < config.edge_count {
            let left = rng.gen_range(1..=config.vertex_count);
            let right = rng.gen_range(1..=config.vertex_count);
            if left == right || !pairs.insert((left.min(right), left.max(right))) {
                continue;
            }
            edges.push(Edge::new(left, right, rng.gen_range(1..=config.max_weight)));
        }

        Ok(Self {
            name: format!(
                "random-v{}-e{}-s{}",
                config.vertex_count, config.edge_count, config.seed
            ),
            vertex_count: config.vertex_count,
            edges,
        })
    }
}

impl GraphSource for SyntheticGraph {
    fn name(&self) -> &str {
        &self.name
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

fn validate(config: &SyntheticGraphConfig) -> Result<(), SyntheticError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    if config.max_weight <= 0 {
        return Err(SyntheticError::ZeroMaxWeight);
    }
    let minimum = config.vertex_count - 1;
    if config.edge_count < minimum {
        return Err(SyntheticError::TooFewEdges {
            edge_count: config.edge_count,
            vertex_count: config.vertex_count,
        });
    }
    let maximum = (1..config.vertex_count).fold(0_usize, usize::saturating_add);
    if config.edge_count > maximum {
        return Err(SyntheticError::TooManyEdges {
            edge_count: config.edge_count,
            vertex_count: config.vertex_count,
            maximum,
        });
    }
    Ok(())
}
