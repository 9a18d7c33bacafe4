use spanwise_core::{Edge, GraphSource};

/// An in-memory source built from `(u, v, w)` triples.
#[derive(Clone)]
pub struct Triples {
    name: &'static str,
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Triples {
    #[must_use]
    pub fn new(name: &'static str, vertex_count: usize, triples: &[(usize, usize, i64)]) -> Self {
        let edges = triples
            .iter()
            .map(|&(left, right, weight)| Edge::new(left, right, weight))
            .collect();
        Self {
            name,
            vertex_count,
            edges,
        }
    }

    /// The square `1-2 (2), 2-3 (1), 3-4 (3), 4-1 (4)`.
    #[must_use]
    pub fn square() -> Self {
        Self::new("square", 4, &[(1, 2, 2), (2, 3, 1), (3, 4, 3), (4, 1, 4)])
    }

    /// Three vertices joined only by `1-2 (5)`.
    #[must_use]
    pub fn split() -> Self {
        Self::new("split", 3, &[(1, 2, 5)])
    }
}

impl GraphSource for Triples {
    fn name(&self) -> &str {
        self.name
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
