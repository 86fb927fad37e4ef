//! Seeded generators for benchmark graphs and union-find pair streams.
//!
//! All generators are deterministic for a given seed so repeated benchmark
//! runs measure the same inputs.

use algs_core::Graph;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Configuration for a uniformly random graph.
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edge insertions attempted; duplicates collapse.
    pub edge_count: usize,
    /// Seed for the random number generator.
    pub seed: u64,
}

/// Builds the path `0 - 1 - ... - (vertex_count - 1)`.
///
/// A path is the deepest graph for its size and exercises the traversal
/// stack the hardest.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] if an edge cannot be inserted.
///
/// # Examples
/// ```
/// use algs_benches::workload::path_graph;
///
/// let graph = path_graph(4)?;
/// assert_eq!(graph.edge_count(), 3);
/// # Ok::<(), algs_benches::error::BenchSetupError>(())
/// ```
pub fn path_graph(vertex_count: usize) -> Result<Graph, BenchSetupError> {
    let edges = (1..vertex_count).map(|w| (w - 1, w));
    Ok(Graph::from_edges(vertex_count, edges)?)
}

/// Builds a graph with `edge_count` uniformly chosen endpoint pairs.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when edges are requested for a
/// graph without vertices.
pub fn random_graph(config: &RandomGraphConfig) -> Result<Graph, BenchSetupError> {
    let pairs = random_pairs(config.vertex_count, config.edge_count, config.seed)?;
    Ok(Graph::from_edges(config.vertex_count, pairs)?)
}

/// Generates `pair_count` uniformly chosen pairs over `element_count`
/// elements.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when pairs are requested over an
/// empty element range.
pub fn random_pairs(
    element_count: usize,
    pair_count: usize,
    seed: u64,
) -> Result<Vec<(usize, usize)>, BenchSetupError> {
    if element_count == 0 && pair_count > 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "element_count",
        });
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..pair_count)
        .map(|_| {
            (
                rng.gen_range(0..element_count),
                rng.gen_range(0..element_count),
            )
        })
        .collect())
}
