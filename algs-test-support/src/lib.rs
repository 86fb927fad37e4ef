//! Shared test utilities used across algs crates.
//!
//! Provides the canonical sample inputs (`tinyG` and `tinyUF`) in both parsed
//! and textual form, plus a recording `tracing` layer for asserting on
//! instrumentation.

pub mod fixtures;
pub mod tracing;
