//! Undirected, unweighted graph stored as one adjacency set per vertex.
//!
//! Vertices are named `0..vertex_count` and the vertex count is fixed at
//! construction. The adjacency relation is kept symmetric: whenever `w` is in
//! the set of `v`, `v` is in the set of `w`. Sets deduplicate, so the graph
//! holds no parallel edges and at most one self-loop per vertex.

use std::collections::HashSet;
use std::fmt;

use crate::error::GraphError;

#[cfg(test)]
mod tests;

/// An undirected graph over a fixed number of vertices.
///
/// # Examples
/// ```
/// use algs_core::Graph;
///
/// let mut graph = Graph::new(3);
/// assert!(graph.add_edge(0, 1)?);
/// assert!(graph.has_edge(1, 0)?);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), algs_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<HashSet<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![HashSet::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a graph with `vertex_count` vertices, reporting allocation
    /// failure instead of aborting.
    ///
    /// # Errors
    /// Returns [`GraphError::AllocationFailed`] when storage for
    /// `vertex_count` adjacency sets cannot be reserved.
    ///
    /// # Examples
    /// ```
    /// use algs_core::{Graph, GraphError};
    ///
    /// assert_eq!(Graph::try_new(3)?.vertex_count(), 3);
    /// assert!(matches!(
    ///     Graph::try_new(usize::MAX),
    ///     Err(GraphError::AllocationFailed { .. })
    /// ));
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn try_new(vertex_count: usize) -> Result<Self, GraphError> {
        let mut adjacency: Vec<HashSet<usize>> = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|source| GraphError::AllocationFailed {
                vertex_count,
                source,
            })?;
        adjacency.resize_with(vertex_count, HashSet::new);
        Ok(Self {
            adjacency,
            edge_count: 0,
        })
    }

    /// Builds a graph from an edge list, adding each pair in order.
    ///
    /// Duplicate pairs collapse into a single edge.
    ///
    /// # Errors
    /// Returns [`GraphError::AllocationFailed`] if the vertices cannot be
    /// allocated, or [`GraphError::VertexOutOfRange`] for the first pair with
    /// an endpoint outside `0..vertex_count`.
    ///
    /// # Examples
    /// ```
    /// use algs_core::Graph;
    ///
    /// let graph = Graph::from_edges(4, [(0, 1), (1, 2), (1, 0)])?;
    /// assert_eq!(graph.edge_count(), 2);
    /// # Ok::<(), algs_core::GraphError>(())
    /// ```
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::try_new(vertex_count)?;
        for (v, w) in edges {
            graph.add_edge(v, w)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of distinct undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Adds the undirected edge `v-w`.
    ///
    /// Returns `true` when the edge was not already present. Re-adding an
    /// existing edge leaves the graph and its edge count untouched.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is invalid.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<bool, GraphError> {
        self.validate_vertex(v)?;
        self.validate_vertex(w)?;
        let inserted = self.neighbours_mut(v)?.insert(w);
        self.neighbours_mut(w)?.insert(v);
        if inserted {
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    /// Removes the undirected edge `v-w` if it is present in both directions.
    ///
    /// Returns `false` without touching the graph when the edge is absent.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is invalid.
    pub fn delete_edge(&mut self, v: usize, w: usize) -> Result<bool, GraphError> {
        if !self.has_edge(v, w)? {
            return Ok(false);
        }
        self.neighbours_mut(v)?.remove(&w);
        self.neighbours_mut(w)?.remove(&v);
        self.edge_count -= 1;
        Ok(true)
    }

    /// Returns `true` if `v` and `w` are adjacent.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is invalid.
    pub fn has_edge(&self, v: usize, w: usize) -> Result<bool, GraphError> {
        let from_v = self.adjacent(v)?;
        let from_w = self.adjacent(w)?;
        Ok(from_v.contains(&w) && from_w.contains(&v))
    }

    /// Returns the vertices adjacent to `v`.
    ///
    /// Iteration order of the returned set is unspecified.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `v` is invalid.
    pub fn adjacent(&self, v: usize) -> Result<&HashSet<usize>, GraphError> {
        self.adjacency.get(v).ok_or(GraphError::VertexOutOfRange {
            vertex: v,
            vertex_count: self.vertex_count(),
        })
    }

    /// Returns the degree of `v`. A self-loop contributes one.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `v` is invalid.
    pub fn degree(&self, v: usize) -> Result<usize, GraphError> {
        Ok(self.adjacent(v)?.len())
    }

    /// Returns the largest degree in the graph, or zero for an empty graph.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(HashSet::len).max().unwrap_or(0)
    }

    /// Returns the number of vertices carrying a self-loop.
    #[must_use]
    pub fn self_loop_count(&self) -> usize {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(v, neighbours)| neighbours.contains(v))
            .count()
    }

    /// Iterates over each undirected edge once as `(v, w)` with `v <= w`.
    ///
    /// Edges are yielded in ascending lexicographic order.
    ///
    /// # Examples
    /// ```
    /// use algs_core::Graph;
    ///
    /// let graph = Graph::from_edges(3, [(2, 0), (1, 1)])?;
    /// let edges: Vec<_> = graph.edges().collect();
    /// assert_eq!(edges, vec![(0, 2), (1, 1)]);
    /// # Ok::<(), algs_core::GraphError>(())
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(v, neighbours)| {
            let mut upper: Vec<usize> = neighbours.iter().copied().filter(|&w| w >= v).collect();
            upper.sort_unstable();
            upper.into_iter().map(move |w| (v, w))
        })
    }

    fn validate_vertex(&self, v: usize) -> Result<(), GraphError> {
        self.adjacent(v).map(|_| ())
    }

    fn neighbours_mut(&mut self, v: usize) -> Result<&mut HashSet<usize>, GraphError> {
        let vertex_count = self.vertex_count();
        self.adjacency
            .get_mut(v)
            .ok_or(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count,
            })
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Undirected graph with {} vertices and {} edges as below:",
            self.vertex_count(),
            self.edge_count
        )?;
        for (v, neighbours) in self.adjacency.iter().enumerate() {
            let mut sorted: Vec<usize> = neighbours.iter().copied().collect();
            sorted.sort_unstable();
            write!(f, "{v} : ")?;
            for w in sorted {
                write!(f, "{w} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
