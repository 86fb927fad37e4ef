//! Benchmark parameter types.
//!
//! Each type renders as a compact Criterion benchmark identifier.

use std::fmt;

/// Parameters for a depth-first search benchmark run.
#[derive(Clone, Debug)]
pub struct SearchBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Traversal strategy label.
    pub strategy: &'static str,
}

impl fmt::Display for SearchBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V={},{}", self.vertex_count, self.strategy)
    }
}

/// Parameters for a union-find benchmark run.
#[derive(Clone, Debug)]
pub struct UnionFindBenchParams {
    /// Number of elements in the disjoint set.
    pub element_count: usize,
    /// Number of pairs streamed through it.
    pub pair_count: usize,
}

impl fmt::Display for UnionFindBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},pairs={}", self.element_count, self.pair_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn search_params_render_as_identifier() {
        let params = SearchBenchParams {
            vertex_count: 1_000,
            strategy: "iterative",
        };
        assert_eq!(params.to_string(), "V=1000,iterative");
    }

    #[rstest]
    fn union_find_params_render_as_identifier() {
        let params = UnionFindBenchParams {
            element_count: 10,
            pair_count: 20,
        };
        assert_eq!(params.to_string(), "n=10,pairs=20");
    }
}
