//! Text loaders for line-oriented graph and union-find inputs.
//!
//! Both formats are whitespace separated, one record per line, with blank
//! lines ignored:
//!
//! - graph: vertex count, declared edge count, then `v w` per edge;
//! - pairs: element count, then `p q` per pair.
//!
//! The declared edge count is informational and is not checked against the
//! number of edge lines.

use std::io::{self, BufRead};

use algs_core::{DisjointSet, DisjointSetError, Graph, GraphError};
use thiserror::Error;

/// Errors raised while loading a text input.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TextProviderError {
    /// The input contained no records.
    #[error("input contains no data")]
    EmptyInput,
    /// A required header line was missing.
    #[error("input ends before the {field} header")]
    MissingHeader {
        /// Name of the missing header.
        field: &'static str,
    },
    /// A token was not a non-negative integer.
    #[error("line {line}: `{token}` is not a non-negative integer")]
    InvalidNumber {
        /// One-based line number.
        line: usize,
        /// Offending token.
        token: String,
    },
    /// A line had the wrong number of tokens.
    #[error("line {line}: expected {expected} values but found {found}")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// Number of tokens required.
        expected: usize,
        /// Number of tokens present.
        found: usize,
    },
    /// The vertex count could not be allocated, or an edge referenced a
    /// vertex outside the declared range.
    #[error("line {line}: {source}")]
    Graph {
        /// One-based line number.
        line: usize,
        /// Error reported by the graph.
        #[source]
        source: GraphError,
    },
    /// The declared element count could not be allocated.
    #[error("line {line}: {source}")]
    DisjointSet {
        /// One-based line number of the element count header.
        line: usize,
        /// Error reported by the disjoint set.
        #[source]
        source: DisjointSetError,
    },
    /// A pair referenced an element outside the declared range.
    #[error("line {line}: element {element} is not between 0 and {element_count}")]
    ElementOutOfRange {
        /// One-based line number.
        line: usize,
        /// Offending element.
        element: usize,
        /// Declared element count.
        element_count: usize,
    },
    /// Reading from the underlying source failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// A graph loaded from text together with its declared edge count.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use algs_providers_text::GraphDescription;
///
/// let input = Cursor::new("3\n2\n0 1\n1 2\n");
/// let description = GraphDescription::try_from_reader("demo", input)?;
/// assert_eq!(description.graph().edge_count(), 2);
/// assert!(description.declared_edges_match());
/// # Ok::<(), algs_providers_text::TextProviderError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GraphDescription {
    name: String,
    graph: Graph,
    declared_edges: usize,
}

impl GraphDescription {
    /// Parses a graph from `reader`.
    ///
    /// Duplicate edge lines collapse into a single edge.
    ///
    /// # Errors
    /// Returns [`TextProviderError`] when the input is empty, a header is
    /// missing, a line is malformed, the vertex count cannot be allocated, an
    /// endpoint is out of range, or reading fails.
    pub fn try_from_reader<R>(name: impl Into<String>, reader: R) -> Result<Self, TextProviderError>
    where
        R: BufRead,
    {
        let mut records = Records::new(reader);
        let (header_line, vertex_count) = records.header("vertex count")?;
        let (_, declared_edges) = records.header("edge count")?;

        let mut graph = Graph::try_new(vertex_count).map_err(|source| TextProviderError::Graph {
            line: header_line,
            source,
        })?;
        while let Some((line, v, w)) = records.pair()? {
            graph
                .add_edge(v, w)
                .map_err(|source| TextProviderError::Graph { line, source })?;
        }

        Ok(Self {
            name: name.into(),
            graph,
            declared_edges,
        })
    }

    /// Returns the name of the input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parsed graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the description, returning the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Returns the edge count stated in the header.
    #[must_use]
    pub fn declared_edges(&self) -> usize {
        self.declared_edges
    }

    /// Returns `true` when the header agrees with the distinct edges loaded.
    #[must_use]
    pub fn declared_edges_match(&self) -> bool {
        self.declared_edges == self.graph.edge_count()
    }
}

/// A stream of `(p, q)` pairs over a declared number of elements.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use algs_providers_text::PairStream;
///
/// let stream = PairStream::try_from_reader("demo", Cursor::new("4\n0 1\n2 3\n"))?;
/// assert_eq!(stream.element_count(), 4);
/// assert_eq!(stream.pairs(), &[(0, 1), (2, 3)]);
/// # Ok::<(), algs_providers_text::TextProviderError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairStream {
    name: String,
    sets: DisjointSet,
    pairs: Vec<(usize, usize)>,
}

impl PairStream {
    /// Parses a pair stream from `reader`.
    ///
    /// # Errors
    /// Returns [`TextProviderError`] when the input is empty, a line is
    /// malformed, the element count cannot be allocated, an element is out of
    /// range, or reading fails.
    pub fn try_from_reader<R>(name: impl Into<String>, reader: R) -> Result<Self, TextProviderError>
    where
        R: BufRead,
    {
        let mut records = Records::new(reader);
        let (header_line, element_count) = records.header("element count")?;
        let sets = DisjointSet::try_new(element_count).map_err(|source| {
            TextProviderError::DisjointSet {
                line: header_line,
                source,
            }
        })?;

        let mut pairs = Vec::new();
        while let Some((line, p, q)) = records.pair()? {
            if let Some(element) = [p, q].into_iter().find(|&e| e >= element_count) {
                return Err(TextProviderError::ElementOutOfRange {
                    line,
                    element,
                    element_count,
                });
            }
            pairs.push((p, q));
        }

        Ok(Self {
            name: name.into(),
            sets,
            pairs,
        })
    }

    /// Returns the name of the input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared number of elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.sets.len()
    }

    /// Returns the pairs in input order.
    #[must_use]
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Consumes the stream, returning singleton sets over the declared
    /// elements together with the pairs in input order.
    #[must_use]
    pub fn into_parts(self) -> (DisjointSet, Vec<(usize, usize)>) {
        (self.sets, self.pairs)
    }
}

/// Non-blank lines of an input, tokenised and tagged with line numbers.
struct Records<R> {
    lines: io::Lines<R>,
    line: usize,
    seen_any: bool,
}

impl<R: BufRead> Records<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            seen_any: false,
        }
    }

    fn next_record(&mut self) -> Result<Option<(usize, Vec<String>)>, TextProviderError> {
        for raw in self.lines.by_ref() {
            let raw = raw?;
            self.line += 1;
            let tokens: Vec<String> = raw.split_whitespace().map(str::to_owned).collect();
            if !tokens.is_empty() {
                self.seen_any = true;
                return Ok(Some((self.line, tokens)));
            }
        }
        Ok(None)
    }

    fn header(&mut self, field: &'static str) -> Result<(usize, usize), TextProviderError> {
        let Some((line, tokens)) = self.next_record()? else {
            return Err(if self.seen_any {
                TextProviderError::MissingHeader { field }
            } else {
                TextProviderError::EmptyInput
            });
        };
        match tokens.as_slice() {
            [value] => Ok((line, parse_number(line, value)?)),
            _ => Err(TextProviderError::MalformedLine {
                line,
                expected: 1,
                found: tokens.len(),
            }),
        }
    }

    fn pair(&mut self) -> Result<Option<(usize, usize, usize)>, TextProviderError> {
        let Some((line, tokens)) = self.next_record()? else {
            return Ok(None);
        };
        match tokens.as_slice() {
            [left, right] => Ok(Some((
                line,
                parse_number(line, left)?,
                parse_number(line, right)?,
            ))),
            _ => Err(TextProviderError::MalformedLine {
                line,
                expected: 2,
                found: tokens.len(),
            }),
        }
    }
}

fn parse_number(line: usize, token: &str) -> Result<usize, TextProviderError> {
    token
        .parse()
        .map_err(|_| TextProviderError::InvalidNumber {
            line,
            token: token.to_owned(),
        })
}
