//! Property-based tests for Prim and Kruskal.
//!
//! Checks both algorithms against independent oracles, validates the
//! structure of their output, and confirms runs are repeatable across
//! graph shapes with varied weight distributions.

mod determinism;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
