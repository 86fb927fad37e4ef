//! Algs core library.
//!
//! Undirected graphs over adjacency sets, depth-first connectivity search, and
//! weighted quick-union disjoint sets. Every index taken by these structures is
//! validated and reported through [`GraphError`] or [`DisjointSetError`].

mod error;
mod graph;
mod search;
mod union_find;

pub use crate::{
    error::{DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode},
    graph::Graph,
    search::{DepthFirstSearch, RECURSION_LIMIT, TraversalStrategy},
    union_find::DisjointSet,
};
