//! Depth-first connectivity search over a [`Graph`].
//!
//! A search is computed once from a single source vertex and answers which
//! vertices share its connected component. Results are a snapshot: later
//! mutations of the graph are not observed.
//!
//! The traversal can run on the call stack or on an explicit stack. Both forms
//! mark the same vertices and reach the same count; they differ only in the
//! order neighbours are explored. [`TraversalStrategy::Auto`] switches to the
//! explicit stack for graphs large enough to exhaust the call stack on a
//! path-shaped input.

use std::collections::BTreeSet;

use tracing::{Span, field, instrument};

use crate::{error::GraphError, graph::Graph};


/// Largest vertex count for which [`TraversalStrategy::Auto`] recurses, and
/// the deepest the recursive traversal goes before switching to an explicit
/// stack.
pub const RECURSION_LIMIT: usize = 4096;

/// Selects how [`DepthFirstSearch`] walks the graph.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum TraversalStrategy {
    /// Recurse for graphs up to [`RECURSION_LIMIT`] vertices, otherwise use an
    /// explicit stack.
    #[default]
    Auto,
    /// Recurse on the call stack, continuing on an explicit stack once the
    /// depth reaches [`RECURSION_LIMIT`].
    Recursive,
    /// Always use an explicit heap-allocated stack.
    Iterative,
}

impl TraversalStrategy {
    /// Resolves [`Self::Auto`] into a concrete strategy for `vertex_count`.
    #[must_use]
    pub const fn resolve(self, vertex_count: usize) -> Self {
        match self {
            Self::Auto if vertex_count <= RECURSION_LIMIT => Self::Recursive,
            Self::Auto => Self::Iterative,
            concrete => concrete,
        }
    }

    /// Returns the lowercase label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Recursive => "recursive",
            Self::Iterative => "iterative",
        }
    }
}

/// Vertices reachable from a source vertex, found by depth-first search.
///
/// # Examples
/// ```
/// use algs_core::{DepthFirstSearch, Graph};
///
/// let graph = Graph::from_edges(4, [(0, 1), (1, 2)])?;
/// let search = DepthFirstSearch::new(&graph, 0)?;
/// assert_eq!(search.count(), 3);
/// assert!(!search.is_fully_connected());
/// assert!(!search.is_marked(3)?);
/// # Ok::<(), algs_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepthFirstSearch {
    marked: Vec<bool>,
    count: usize,
    source: usize,
}

impl DepthFirstSearch {
    /// Searches `graph` from `source` using [`TraversalStrategy::Auto`].
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `source` is not a vertex of
    /// `graph`.
    pub fn new(graph: &Graph, source: usize) -> Result<Self, GraphError> {
        Self::with_strategy(graph, source, TraversalStrategy::Auto)
    }

    /// Searches `graph` from `source` using the given traversal strategy.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `source` is not a vertex of
    /// `graph`.
    #[instrument(
        name = "dfs.search",
        level = "debug",
        err,
        skip(graph, strategy),
        fields(
            vertex_count = graph.vertex_count(),
            strategy = field::Empty,
            reached = field::Empty,
        ),
    )]
    pub fn with_strategy(
        graph: &Graph,
        source: usize,
        strategy: TraversalStrategy,
    ) -> Result<Self, GraphError> {
        graph.adjacent(source)?;
        let resolved = strategy.resolve(graph.vertex_count());
        let span = Span::current();
        span.record("strategy", field::display(resolved.as_str()));

        let mut search = Self {
            marked: vec![false; graph.vertex_count()],
            count: 0,
            source,
        };
        match resolved {
            TraversalStrategy::Recursive => search.visit_recursive(graph, source, 0)?,
            _ => search.visit_iterative(graph, source)?,
        }

        span.record("reached", search.count);
        Ok(search)
    }

    /// Returns the vertex the search started from.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns how many vertices were reached, including the source.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` when the source reaches every vertex of the graph.
    #[must_use]
    pub fn is_fully_connected(&self) -> bool {
        self.count == self.marked.len()
    }

    /// Returns `true` if `v` is reachable from the source.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `v` was not a vertex of the
    /// searched graph.
    pub fn is_marked(&self, v: usize) -> Result<bool, GraphError> {
        self.marked
            .get(v)
            .copied()
            .ok_or(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.marked.len(),
            })
    }

    /// Iterates over the reachable vertices in ascending order.
    pub fn reachable(&self) -> impl Iterator<Item = usize> + '_ {
        self.marked
            .iter()
            .enumerate()
            .filter_map(|(v, &marked)| marked.then_some(v))
    }

    /// Returns the set of reachable vertices.
    #[must_use]
    pub fn reachable_set(&self) -> BTreeSet<usize> {
        self.reachable().collect()
    }

    /// Marks `v`, returning `false` if it was already marked.
    fn mark(&mut self, v: usize) -> Result<bool, GraphError> {
        let vertex_count = self.marked.len();
        let flag = self
            .marked
            .get_mut(v)
            .ok_or(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count,
            })?;
        if *flag {
            return Ok(false);
        }
        *flag = true;
        self.count += 1;
        Ok(true)
    }

    /// Recurses until `depth` reaches [`RECURSION_LIMIT`], then finishes the
    /// subtree on an explicit stack.
    fn visit_recursive(&mut self, graph: &Graph, v: usize, depth: usize) -> Result<(), GraphError> {
        if depth >= RECURSION_LIMIT {
            return self.visit_iterative(graph, v);
        }
        self.mark(v)?;
        for &w in graph.adjacent(v)? {
            if !self.is_marked(w)? {
                self.visit_recursive(graph, w, depth + 1)?;
            }
        }
        Ok(())
    }

    fn visit_iterative(&mut self, graph: &Graph, source: usize) -> Result<(), GraphError> {
        let mut stack = vec![source];
        while let Some(v) = stack.pop() {
            if !self.mark(v)? {
                continue;
            }
            for &w in graph.adjacent(v)? {
                if !self.is_marked(w)? {
                    stack.push(w);
                }
            }
        }
        Ok(())
    }
}
