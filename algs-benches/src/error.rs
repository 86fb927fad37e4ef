//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs so
//! setup functions can propagate failures with `?` instead of `.expect()`.

use algs_core::{DisjointSetError, GraphError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Building a graph failed.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A disjoint-set operation failed.
    #[error("union-find operation failed: {0}")]
    DisjointSet(#[from] DisjointSetError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
