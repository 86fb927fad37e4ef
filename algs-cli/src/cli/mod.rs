//! Command-line interface orchestration for the algs tools.
//!
//! Each command loads a line-oriented text input and runs one of the core
//! structures over it: printing a graph, searching it from a source vertex, or
//! streaming pairs through a disjoint set.

mod commands;

pub use commands::{
    Cli, CliError, Command, DfsArgs, ExecutionSummary, GraphArgs, StrategyArg, UnionFindArgs,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
