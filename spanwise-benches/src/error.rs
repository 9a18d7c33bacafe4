//! Benchmark setup error type.
//!
//! Lets setup functions propagate generation and graph-building failures
//! with `?` instead of using `.expect()`.

use crate::source::SyntheticError;
use spanwise_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The generated edges did not form a valid graph, or a start vertex
    /// was rejected.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
}
