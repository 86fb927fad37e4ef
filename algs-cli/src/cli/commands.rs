//! Command implementations and argument parsing for the algs CLI.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use algs_core::{DepthFirstSearch, DisjointSetError, Graph, GraphError, TraversalStrategy};
use algs_providers_text::{GraphDescription, PairStream, TextProviderError};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, debug, field, info, instrument, warn};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "algs", about = "Explore graph connectivity from text inputs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load a graph and print its adjacency lists.
    Graph(GraphArgs),
    /// Report the vertices reachable from a source vertex.
    Dfs(DfsArgs),
    /// Stream pairs through a disjoint set, printing each pair that merges
    /// two components.
    UnionFind(UnionFindArgs),
}

/// Arguments for the `graph` command.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Path to a graph file: vertex count, edge count, then `v w` lines.
    pub path: PathBuf,

    /// Override name for the input (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments for the `dfs` command.
#[derive(Debug, Args, Clone)]
pub struct DfsArgs {
    /// Path to a graph file: vertex count, edge count, then `v w` lines.
    pub path: PathBuf,

    /// Vertex to start the search from.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub source: usize,

    /// Traversal strategy.
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,

    /// Override name for the input (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments for the `union-find` command.
#[derive(Debug, Args, Clone)]
pub struct UnionFindArgs {
    /// Path to a pair file: element count, then `p q` lines.
    pub path: PathBuf,

    /// Override name for the input (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Traversal strategies selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Recurse on small graphs, use an explicit stack on large ones.
    #[default]
    Auto,
    /// Always recurse.
    Recursive,
    /// Always use an explicit stack.
    Iterative,
}

impl From<StrategyArg> for TraversalStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Recursive => Self::Recursive,
            StrategyArg::Iterative => Self::Iterative,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening an input.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input could not be parsed.
    #[error(transparent)]
    Text(#[from] TextProviderError),
    /// A graph operation rejected its arguments.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// A disjoint-set operation rejected its arguments.
    #[error(transparent)]
    DisjointSet(#[from] DisjointSetError),
}

impl CliError {
    /// Returns the stable core error code behind this failure, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Graph(err) | Self::Text(TextProviderError::Graph { source: err, .. }) => {
                Some(err.code().as_str())
            }
            Self::DisjointSet(err)
            | Self::Text(TextProviderError::DisjointSet { source: err, .. }) => {
                Some(err.code().as_str())
            }
            _ => None,
        }
    }
}

/// Outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// A loaded graph.
    Graph {
        /// Name of the input.
        data_source: String,
        /// The parsed graph.
        graph: Graph,
    },
    /// A depth-first search from one vertex.
    Search {
        /// Name of the input.
        data_source: String,
        /// The completed search.
        search: DepthFirstSearch,
    },
    /// A pair stream processed through a disjoint set.
    UnionFind {
        /// Name of the input.
        data_source: String,
        /// Pairs that merged two components, in input order.
        merged: Vec<(usize, usize)>,
        /// Components remaining after the stream.
        components: usize,
    },
}

impl ExecutionSummary {
    /// Returns the name of the input the command ran against.
    #[must_use]
    pub fn data_source(&self) -> &str {
        match self {
            Self::Graph { data_source, .. }
            | Self::Search { data_source, .. }
            | Self::UnionFind { data_source, .. } => data_source,
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the input or running the command fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use algs_cli::cli::{Cli, Command, ExecutionSummary, UnionFindArgs, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n0 1\n1 0\n")?;
/// let cli = Cli {
///     command: Command::UnionFind(UnionFindArgs {
///         path: file.path().to_path_buf(),
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert!(matches!(summary, ExecutionSummary::UnionFind { components: 2, .. }));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Graph(args) => {
            span.record("command", field::display("graph"));
            run_graph(args)
        }
        Command::Dfs(args) => {
            span.record("command", field::display("dfs"));
            run_dfs(args)
        }
        Command::UnionFind(args) => {
            span.record("command", field::display("union-find"));
            run_union_find(args)
        }
    }
}

#[instrument(
    name = "cli.graph",
    err,
    skip(args),
    fields(path = %args.path.display()),
)]
pub(super) fn run_graph(args: GraphArgs) -> Result<ExecutionSummary, CliError> {
    let GraphArgs { path, name } = args;
    let description = load_graph(&path, name.as_deref())?;
    info!(
        data_source = description.name(),
        vertices = description.graph().vertex_count(),
        edges = description.graph().edge_count(),
        "graph loaded"
    );
    Ok(ExecutionSummary::Graph {
        data_source: description.name().to_owned(),
        graph: description.into_graph(),
    })
}

#[instrument(
    name = "cli.dfs",
    err,
    skip(args),
    fields(path = %args.path.display(), source = args.source, strategy = field::Empty),
)]
pub(super) fn run_dfs(args: DfsArgs) -> Result<ExecutionSummary, CliError> {
    let DfsArgs {
        path,
        source,
        strategy,
        name,
    } = args;
    let strategy = TraversalStrategy::from(strategy);
    Span::current().record("strategy", field::display(strategy.as_str()));

    let description = load_graph(&path, name.as_deref())?;
    let search = DepthFirstSearch::with_strategy(description.graph(), source, strategy)?;
    info!(
        data_source = description.name(),
        reached = search.count(),
        connected = search.is_fully_connected(),
        "search completed"
    );
    Ok(ExecutionSummary::Search {
        data_source: description.name().to_owned(),
        search,
    })
}

#[instrument(
    name = "cli.union_find",
    err,
    skip(args),
    fields(path = %args.path.display()),
)]
pub(super) fn run_union_find(args: UnionFindArgs) -> Result<ExecutionSummary, CliError> {
    let UnionFindArgs { path, name } = args;
    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let stream = PairStream::try_from_reader(chosen_name, open_reader(&path)?)?;

    let data_source = stream.name().to_owned();
    let (mut sets, pairs) = stream.into_parts();
    let mut merged = Vec::new();
    for &(p, q) in &pairs {
        if sets.connected(p, q)? {
            continue;
        }
        sets.union(p, q)?;
        merged.push((p, q));
    }

    info!(
        data_source = data_source.as_str(),
        pairs = pairs.len(),
        merged = merged.len(),
        components = sets.count(),
        "union-find completed"
    );
    Ok(ExecutionSummary::UnionFind {
        data_source,
        merged,
        components: sets.count(),
    })
}

fn load_graph(path: &Path, name: Option<&str>) -> Result<GraphDescription, CliError> {
    let chosen_name = derive_data_source_name(path, name);
    let description = GraphDescription::try_from_reader(chosen_name, open_reader(path)?)?;
    if !description.declared_edges_match() {
        warn!(
            data_source = description.name(),
            declared = description.declared_edges(),
            loaded = description.graph().edge_count(),
            "declared edge count differs from distinct edges loaded"
        );
    }
    Ok(description)
}

#[instrument(name = "cli.open_reader", err, skip(path), fields(path = %path.display()))]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("input opened");
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "input".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use algs_cli::cli::{ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::UnionFind {
///     data_source: "demo".into(),
///     merged: vec![(0, 1), (2, 3)],
///     components: 2,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "0 1\n2 3\n2 components\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Graph { graph, .. } => write!(writer, "{graph}"),
        ExecutionSummary::Search { search, .. } => {
            let reachable: BTreeSet<usize> = search.reachable_set();
            writeln!(writer, "reachable: {reachable:?}")?;
            writeln!(writer, "connected: {}", search.is_fully_connected())
        }
        ExecutionSummary::UnionFind {
            merged, components, ..
        } => {
            for (p, q) in merged {
                writeln!(writer, "{p} {q}")?;
            }
            writeln!(writer, "{components} components")
        }
    }
}
