//! Benchmark support crate for the algs workspace.
//!
//! Provides seeded graph and pair generators plus parameter types used by the
//! Criterion benchmarks for depth-first search and union-find.

pub mod error;
pub mod params;
pub mod workload;
