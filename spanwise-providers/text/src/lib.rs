//! Text provider reading graphs from the whitespace-delimited edge-list
//! format.
//!
//! The first non-blank line holds `V E`; each of the next `E` non-blank lines
//! holds one edge `u v w`. Anything after the declared edges is ignored.
//!
//! ```text
//! 4 4
//! 1 2 2
//! 2 3 1
//! 3 4 3
//! 4 1 4
//! ```
use std::io::BufRead;
use std::str::{FromStr, SplitWhitespace};

use spanwise_core::{Edge, GraphSource};
use thiserror::Error;

/// Errors raised while reading the edge-list format.
///
/// Line numbers are 1-based and count blank lines.
#[derive(Debug, Error)]
pub enum TextGraphError {
    /// The input has no non-blank line to read a header from.
    #[error("input contains no header line")]
    MissingHeader,
    /// The header is not two unsigned integers.
    #[error("line {line}: expected header `<vertices> <edges>`, found `{content}`")]
    InvalidHeader {
        /// Line holding the header.
        line: usize,
        /// The header line as read, trimmed.
        content: String,
    },
    /// The header declares a vertex count of zero.
    #[error("line {line}: graph must declare at least one vertex")]
    ZeroVertices {
        /// Line holding the header.
        line: usize,
    },
    /// An edge line is not two vertices followed by an integer weight.
    #[error("line {line}: expected edge `<u> <v> <weight>`, found `{content}`")]
    InvalidEdgeLine {
        /// Line holding the edge.
        line: usize,
        /// The edge line as read, trimmed.
        content: String,
    },
    /// An edge endpoint lies outside `1..=vertex_count`.
    #[error("line {line}: vertex {vertex} is outside 1..={vertex_count}")]
    VertexOutOfRange {
        /// Line holding the edge.
        line: usize,
        /// The offending endpoint.
        vertex: usize,
        /// Vertex count declared by the header.
        vertex_count: usize,
    },
    /// The input ends before the declared number of edges was read.
    #[error("header declares {declared} edges but input ends after {found}")]
    MissingEdges {
        /// Edge count declared by the header.
        declared: usize,
        /// Edge lines actually read.
        found: usize,
    },
    /// Reading the underlying input failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl TextGraphError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingHeader => "TEXT_MISSING_HEADER",
            Self::InvalidHeader { .. } => "TEXT_INVALID_HEADER",
            Self::ZeroVertices { .. } => "TEXT_ZERO_VERTICES",
            Self::InvalidEdgeLine { .. } => "TEXT_INVALID_EDGE_LINE",
            Self::VertexOutOfRange { .. } => "TEXT_VERTEX_OUT_OF_RANGE",
            Self::MissingEdges { .. } => "TEXT_MISSING_EDGES",
            Self::Io(_) => "TEXT_IO",
        }
    }
}

/// A graph read from the edge-list text format.
#[derive(Clone, Debug)]
pub struct TextGraphSource {
    name: String,
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl TextGraphSource {
    /// Creates a source from already parsed parts.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::{Edge, GraphSource};
    /// use spanwise_providers_text::TextGraphSource;
    ///
    /// let source = TextGraphSource::new("demo", 2, vec![Edge::new(1, 2, 3)]);
    /// assert_eq!(source.vertex_count(), 2);
    /// assert_eq!(source.edge_count(), 1);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, vertex_count: usize, edges: Vec<Edge>) -> Self {
        Self {
            name: name.into(),
            vertex_count,
            edges,
        }
    }

    /// Reads a graph from `reader`.
    ///
    /// Weights are read as signed integers so that negative values reach
    /// graph construction and are rejected there with a precise error.
    ///
    /// # Errors
    /// Returns [`TextGraphError`] when the header or an edge line is
    /// malformed, an endpoint lies outside `1..=V`, the input ends before
    /// `E` edges were read, or reading fails.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    ///
    /// use spanwise_core::GraphSource;
    /// use spanwise_providers_text::TextGraphSource;
    ///
    /// let source = TextGraphSource::try_from_reader("demo", Cursor::new("3 2\n1 2 5\n2 3 1\n"))?;
    /// assert_eq!(source.vertex_count(), 3);
    /// assert_eq!(source.edges()[1].weight(), 1);
    /// # Ok::<(), spanwise_providers_text::TextGraphError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, TextGraphError> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(index, line)| line.map(|content| (index + 1, content)))
            .filter(|line| !matches!(line, Ok((_, content)) if content.trim().is_empty()));

        let (line, header) = lines.next().ok_or(TextGraphError::MissingHeader)??;
        let (vertex_count, declared) = parse_header(line, &header)?;

        let mut edges = Vec::new();
        while edges.len() < declared {
            let Some(next) = lines.next() else {
                return Err(TextGraphError::MissingEdges {
                    declared,
                    found: edges.len(),
                });
            };
            let (line, content) = next?;
            edges.push(parse_edge(line, &content, vertex_count)?);
        }

        Ok(Self::new(name, vertex_count, edges))
    }
}

impl GraphSource for TextGraphSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

fn parse_header(line: usize, content: &str) -> Result<(usize, usize), TextGraphError> {
    let invalid = || TextGraphError::InvalidHeader {
        line,
        content: content.trim().to_owned(),
    };
    let mut tokens = content.split_whitespace();
    let vertex_count = next_number(&mut tokens).ok_or_else(invalid)?;
    let edge_count = next_number(&mut tokens).ok_or_else(invalid)?;
    if tokens.next().is_some() {
        return Err(invalid());
    }
    if vertex_count == 0 {
        return Err(TextGraphError::ZeroVertices { line });
    }
    Ok((vertex_count, edge_count))
}

fn parse_edge(line: usize, content: &str, vertex_count: usize) -> Result<Edge, TextGraphError> {
    let invalid = || TextGraphError::InvalidEdgeLine {
        line,
        content: content.trim().to_owned(),
    };
    let mut tokens = content.split_whitespace();
    let left: usize = next_number(&mut tokens).ok_or_else(invalid)?;
    let right: usize = next_number(&mut tokens).ok_or_else(invalid)?;
    let weight: i64 = next_number(&mut tokens).ok_or_else(invalid)?;
    if tokens.next().is_some() {
        return Err(invalid());
    }
    for vertex in [left, right] {
        if vertex == 0 || vertex > vertex_count {
            return Err(TextGraphError::VertexOutOfRange {
                line,
                vertex,
                vertex_count,
            });
        }
    }
    Ok(Edge::new(left, right, weight))
}

fn next_number<T: FromStr>(tokens: &mut SplitWhitespace<'_>) -> Option<T> {
    tokens.next()?.parse().ok()
}
