//! Command definitions and execution for the spanwise CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use spanwise_core::{
    Graph, GraphError, GraphSource, KruskalForest, PrimTree, Representation, ShortestPathTree,
    VisitOrder, breadth_first, depth_first, dijkstra, kruskal, prim,
};
use spanwise_providers_text::{TextGraphError, TextGraphSource};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_START: usize = 1;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwise",
    about = "Run spanning-tree, shortest-path and traversal algorithms on a weighted graph."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the graph in its storage representation.
    Show(GraphArgs),
    /// Grow a minimum spanning tree from a start vertex.
    Prim(RootedArgs),
    /// Build a minimum spanning forest from the sorted edge list.
    Kruskal(GraphArgs),
    /// Compute shortest paths from a source vertex.
    Dijkstra(RootedArgs),
    /// Depth-first walk from a start vertex.
    Dfs(RootedArgs),
    /// Breadth-first walk from a start vertex.
    Bfs(RootedArgs),
    /// Show the graph, then run the depth-first walk, Prim and the
    /// breadth-first walk from the same start vertex.
    All(RootedArgs),
}

impl Command {
    const fn label(&self) -> &'static str {
        match self {
            Self::Show(_) => "show",
            Self::Prim(_) => "prim",
            Self::Kruskal(_) => "kruskal",
            Self::Dijkstra(_) => "dijkstra",
            Self::Dfs(_) => "dfs",
            Self::Bfs(_) => "bfs",
            Self::All(_) => "all",
        }
    }
}

/// Options shared by every command.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Path to the graph file: a `V E` header followed by `E` lines of
    /// `u v w`.
    pub path: PathBuf,

    /// Storage layout used for the run.
    #[arg(long, value_enum, default_value_t = RepresentationArg::List)]
    pub representation: RepresentationArg,

    /// How vertices are printed.
    #[arg(long, value_enum, default_value_t = LabelStyle::Numbers)]
    pub labels: LabelStyle,

    /// Override name for the graph (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Options for commands that start from a vertex.
#[derive(Debug, Args, Clone)]
pub struct RootedArgs {
    /// Graph input options.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Vertex the algorithm starts from.
    #[arg(long, default_value_t = DEFAULT_START)]
    pub start: usize,
}

/// Storage layout names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RepresentationArg {
    /// Adjacency lists.
    List,
    /// Adjacency matrix.
    Matrix,
}

impl From<RepresentationArg> for Representation {
    fn from(value: RepresentationArg) -> Self {
        match value {
            RepresentationArg::List => Self::AdjacencyList,
            RepresentationArg::Matrix => Self::AdjacencyMatrix,
        }
    }
}

/// Vertex label style used when rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LabelStyle {
    /// Vertex ids as numbers.
    #[default]
    Numbers,
    /// Vertex `1` as `A`, `2` as `B` and so on; ids past `26` stay numeric.
    Letters,
}

impl LabelStyle {
    /// Renders `vertex` in this style.
    ///
    /// # Examples
    /// ```
    /// use spanwise_cli::cli::LabelStyle;
    ///
    /// assert_eq!(LabelStyle::Letters.label(3), "C");
    /// assert_eq!(LabelStyle::Letters.label(27), "27");
    /// assert_eq!(LabelStyle::Numbers.label(3), "3");
    /// ```
    #[must_use]
    pub fn label(self, vertex: usize) -> String {
        match self {
            Self::Numbers => vertex.to_string(),
            Self::Letters => letter(vertex).map_or_else(|| vertex.to_string(), String::from),
        }
    }
}

fn letter(vertex: usize) -> Option<char> {
    let offset = u8::try_from(vertex.checked_sub(1)?)
        .ok()
        .filter(|offset| *offset < 26)?;
    Some(char::from(b'A' + offset))
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph file is malformed.
    #[error(transparent)]
    Text(#[from] TextGraphError),
    /// The graph is invalid or the start vertex is unknown.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::Text(err) => err.code(),
            Self::Graph(err) => err.code().as_str(),
        }
    }
}

/// Algorithm output carried by an [`ExecutionSummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// The graph itself.
    Show,
    /// Prim's spanning tree.
    Prim(PrimTree),
    /// Kruskal's spanning forest.
    Kruskal(KruskalForest),
    /// Dijkstra's shortest-path tree.
    Dijkstra(ShortestPathTree),
    /// Depth-first visit order.
    DepthFirst(VisitOrder),
    /// Breadth-first visit order.
    BreadthFirst(VisitOrder),
    /// The `all` sequence.
    All {
        /// Depth-first visit order.
        depth_first: VisitOrder,
        /// Prim's spanning tree.
        prim: PrimTree,
        /// Breadth-first visit order.
        breadth_first: VisitOrder,
    },
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the loaded graph.
    pub data_source: String,
    /// Label style requested for rendering.
    pub labels: LabelStyle,
    /// The graph the command ran on.
    pub graph: Graph,
    /// What the command produced.
    pub report: Report,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the file cannot be read or parsed, the graph is
/// invalid, or the start vertex is out of range.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwise_cli::cli::{
/// #     Cli, Command, GraphArgs, LabelStyle, Report, RepresentationArg, RootedArgs, run_cli,
/// # };
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 2\n1 2 4\n2 3 1\n")?;
/// let cli = Cli {
///     command: Command::Prim(RootedArgs {
///         graph: GraphArgs {
///             path: file.path().to_path_buf(),
///             representation: RepresentationArg::List,
///             labels: LabelStyle::Numbers,
///             name: None,
///         },
///         start: 1,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let Report::Prim(tree) = summary.report else { unreachable!() };
/// assert_eq!(tree.total_weight(), 5);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    Span::current().record("command", field::display(cli.command.label()));
    run_command(cli.command)
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(representation = field::Empty, start = field::Empty),
)]
pub(super) fn run_command(command: Command) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    let (args, start) = match &command {
        Command::Show(args) | Command::Kruskal(args) => (args, None),
        Command::Prim(rooted)
        | Command::Dijkstra(rooted)
        | Command::Dfs(rooted)
        | Command::Bfs(rooted)
        | Command::All(rooted) => (&rooted.graph, Some(rooted.start)),
    };
    let representation = Representation::from(args.representation);
    span.record("representation", field::display(representation.as_str()));
    if let Some(start) = start {
        span.record("start", start);
    }

    let (data_source, graph) = load_graph(args)?;
    let labels = args.labels;
    let report = match command {
        Command::Show(_) => Report::Show,
        Command::Kruskal(_) => Report::Kruskal(kruskal(&graph)),
        Command::Prim(rooted) => Report::Prim(prim(&graph, rooted.start)?),
        Command::Dijkstra(rooted) => Report::Dijkstra(dijkstra(&graph, rooted.start)?),
        Command::Dfs(rooted) => Report::DepthFirst(depth_first(&graph, rooted.start)?),
        Command::Bfs(rooted) => Report::BreadthFirst(breadth_first(&graph, rooted.start)?),
        Command::All(rooted) => Report::All {
            depth_first: depth_first(&graph, rooted.start)?,
            prim: prim(&graph, rooted.start)?,
            breadth_first: breadth_first(&graph, rooted.start)?,
        },
    };

    info!(
        data_source = data_source.as_str(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source,
        labels,
        graph,
        report,
    })
}

#[instrument(
    name = "cli.load_graph",
    err,
    skip(args),
    fields(path = field::Empty, override_name = field::Empty),
)]
pub(super) fn load_graph(args: &GraphArgs) -> Result<(String, Graph), CliError> {
    let span = Span::current();
    span.record("path", field::display(args.path.display()));
    span.record(
        "override_name",
        field::display(args.name.as_deref().unwrap_or("<derived>")),
    );
    let name = derive_data_source_name(&args.path, args.name.as_deref());
    let source = TextGraphSource::try_from_reader(name, open_reader(&args.path)?)?;
    let graph = source.build_graph(args.representation.into())?;
    Ok((source.name().to_owned(), graph))
}

#[instrument(name = "cli.open_reader", err, fields(path = field::Empty))]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}
