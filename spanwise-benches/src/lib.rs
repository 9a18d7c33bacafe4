//! Benchmark support crate for spanwise.
//!
//! Provides seeded random graph sources and parameter types used by the
//! Criterion benchmarks for the spanning-tree, shortest-path and traversal
//! algorithms.

pub mod error;
pub mod params;
pub mod source;
