//! Graph generators for the MST property suite.
//!
//! Every generator emits simple graphs only: endpoints in `1..=n`, no
//! self-loops, no repeated vertex pairs and non-negative weights.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Edge, graph::canonical_pair};

use super::types::{MstFixture, WeightDistribution};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 48;
/// Dense graphs grow quadratically, so they stay smaller.
const DENSE_MAX_VERTICES: usize = 24;
const MAX_WEIGHT: i64 = 1_000;

/// Samples a distribution and a seed, then generates the fixture.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for an explicitly chosen distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Wide => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            random_pairs(rng, vertex_count, (0.2, 0.6), distribution, |r| {
                r.gen_range(0..=MAX_WEIGHT)
            })
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<i64> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(0..=10))
                .collect();
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            random_pairs(rng, vertex_count, (0.3, 0.7), distribution, move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            random_pairs(rng, vertex_count, (0.7, 0.95), distribution, |r| {
                r.gen_range(0..=MAX_WEIGHT)
            })
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

/// Adds each unordered pair independently with a probability sampled from
/// `probability`.
fn random_pairs(
    rng: &mut SmallRng,
    vertex_count: usize,
    probability: (f64, f64),
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> i64,
) -> MstFixture {
    let edge_probability = rng.gen_range(probability.0..=probability.1);
    let mut edges = Vec::new();
    for left in 1..=vertex_count {
        for right in (left + 1)..=vertex_count {
            if rng.gen_bool(edge_probability) {
                edges.push(Edge::new(left, right, weight(rng)));
            }
        }
    }
    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (1..=vertex_count).collect();
    shuffle(&mut order, rng);

    let mut builder = EdgeSet::default();
    for pair in order.windows(2) {
        builder.push(pair[0], pair[1], rng.gen_range(0..=MAX_WEIGHT));
    }
    for _ in 0..vertex_count / 2 {
        let left = rng.gen_range(1..=vertex_count);
        let right = rng.gen_range(1..=vertex_count);
        builder.push(left, right, rng.gen_range(0..=MAX_WEIGHT));
    }

    MstFixture {
        vertex_count,
        edges: builder.edges,
        distribution: WeightDistribution::Sparse,
    }
}

fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let mut builder = EdgeSet::default();
    let mut offset = 0;
    for &size in &sizes {
        let probability = rng.gen_range(0.3..=0.8);
        for left in 1..=size {
            for right in (left + 1)..=size {
                if rng.gen_bool(probability) {
                    builder.push(offset + left, offset + right, rng.gen_range(0..=MAX_WEIGHT));
                }
            }
        }
        offset += size;
    }

    MstFixture {
        vertex_count: offset,
        edges: builder.edges,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Collects edges while discarding self-loops and repeated pairs.
#[derive(Default)]
struct EdgeSet {
    edges: Vec<Edge>,
    seen: HashSet<(usize, usize)>,
}

impl EdgeSet {
    fn push(&mut self, left: usize, right: usize, weight: i64) {
        if left != right && self.seen.insert(canonical_pair(left, right)) {
            self.edges.push(Edge::new(left, right, weight));
        }
    }
}

/// Fisher-Yates shuffle.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
