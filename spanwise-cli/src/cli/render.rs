//! Text rendering for [`ExecutionSummary`] values.

use std::io::{self, Write};

use spanwise_core::{Graph, KruskalForest, PrimTree, Representation, ShortestPathTree, VisitOrder};

use super::commands::{ExecutionSummary, LabelStyle, Report};

const ROOT_MARK: &str = "@";
const NO_ENTRY: &str = "-";

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwise_cli::cli::{ExecutionSummary, LabelStyle, Report, render_summary};
/// # use spanwise_core::{Edge, Graph, Representation};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = Graph::from_edges(2, [Edge::new(1, 2, 3)], Representation::AdjacencyList)?;
/// let summary = ExecutionSummary {
///     data_source: "pair".into(),
///     labels: LabelStyle::Letters,
///     graph,
///     report: Report::Show,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.contains("A: B(3)"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let labels = summary.labels;
    writeln!(
        writer,
        "graph: {} ({} vertices, {} edges)",
        summary.data_source,
        summary.graph.vertex_count(),
        summary.graph.edge_count()
    )?;
    match &summary.report {
        Report::Show => render_graph(&summary.graph, labels, &mut writer),
        Report::Prim(tree) => render_prim(tree, labels, &mut writer),
        Report::Kruskal(forest) => render_kruskal(forest, labels, &mut writer),
        Report::Dijkstra(tree) => render_dijkstra(tree, labels, &mut writer),
        Report::DepthFirst(visits) => render_walk("depth-first", visits, labels, &mut writer),
        Report::BreadthFirst(visits) => render_walk("breadth-first", visits, labels, &mut writer),
        Report::All {
            depth_first,
            prim,
            breadth_first,
        } => {
            render_graph(&summary.graph, labels, &mut writer)?;
            writeln!(writer)?;
            render_walk("depth-first", depth_first, labels, &mut writer)?;
            writeln!(writer)?;
            render_prim(prim, labels, &mut writer)?;
            writeln!(writer)?;
            render_walk("breadth-first", breadth_first, labels, &mut writer)
        }
    }
}

fn render_graph(graph: &Graph, labels: LabelStyle, writer: &mut impl Write) -> io::Result<()> {
    match graph.representation() {
        Representation::AdjacencyList => {
            writeln!(writer, "adjacency list:")?;
            for vertex in graph.vertices() {
                write!(writer, "{}:", labels.label(vertex))?;
                for neighbour in graph.neighbours(vertex) {
                    write!(
                        writer,
                        " {}({})",
                        labels.label(neighbour.vertex),
                        neighbour.weight
                    )?;
                }
                writeln!(writer)?;
            }
        }
        Representation::AdjacencyMatrix => {
            writeln!(writer, "adjacency matrix:")?;
            write!(writer, "{:>4}", "")?;
            for column in graph.vertices() {
                write!(writer, "{:>4}", labels.label(column))?;
            }
            writeln!(writer)?;
            for row in graph.vertices() {
                write!(writer, "{:>4}", labels.label(row))?;
                for column in graph.vertices() {
                    let cell = graph
                        .weight(row, column)
                        .map_or_else(|| NO_ENTRY.to_owned(), |weight| weight.to_string());
                    write!(writer, "{cell:>4}")?;
                }
                writeln!(writer)?;
            }
        }
    }
    Ok(())
}

fn render_prim(tree: &PrimTree, labels: LabelStyle, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "prim from {}:", labels.label(tree.root()))?;
    let vertices = 1..tree.parents().len();
    let parents: Vec<String> = vertices
        .clone()
        .map(|vertex| {
            if vertex == tree.root() {
                ROOT_MARK.to_owned()
            } else {
                tree.parent(vertex)
                    .map_or_else(|| NO_ENTRY.to_owned(), |parent| labels.label(parent))
            }
        })
        .collect();
    writeln!(writer, "parents: {}", parents.join(" "))?;
    for vertex in vertices.filter(|&vertex| vertex != tree.root()) {
        match (tree.parent(vertex), tree.attachment_weight(vertex)) {
            (Some(parent), Some(weight)) => writeln!(
                writer,
                "{} - {} ({weight})",
                labels.label(parent),
                labels.label(vertex)
            )?,
            _ => writeln!(writer, "{} unreached", labels.label(vertex))?,
        }
    }
    writeln!(writer, "total weight: {}", tree.total_weight())?;
    writeln!(writer, "spanning: {}", yes_no(tree.is_spanning()))
}

fn render_kruskal(
    forest: &KruskalForest,
    labels: LabelStyle,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer, "kruskal:")?;
    for edge in forest.edges() {
        writeln!(
            writer,
            "{} - {} ({})",
            labels.label(edge.source()),
            labels.label(edge.target()),
            edge.weight()
        )?;
    }
    writeln!(writer, "total weight: {}", forest.total_weight())?;
    writeln!(writer, "complete: {}", yes_no(forest.is_complete()))?;
    let sets: Vec<String> = forest
        .components()
        .iter()
        .map(|component| {
            let members: Vec<String> = component.iter().map(|&v| labels.label(v)).collect();
            format!("{{{}}}", members.join(", "))
        })
        .collect();
    writeln!(writer, "sets: {}", sets.join(" "))
}

fn render_dijkstra(
    tree: &ShortestPathTree,
    labels: LabelStyle,
    writer: &mut impl Write,
) -> io::Result<()> {
    let source = labels.label(tree.source());
    writeln!(writer, "dijkstra from {source}:")?;
    for vertex in 1..tree.distances().len() {
        let target = labels.label(vertex);
        match (tree.distance(vertex), tree.path_to(vertex)) {
            (Some(distance), Some(path)) => {
                let hops: Vec<String> = path.iter().map(|&v| labels.label(v)).collect();
                writeln!(
                    writer,
                    "shortest path from {source} to {target} is {distance} via {}",
                    hops.join(" -> ")
                )?;
            }
            _ => writeln!(writer, "no path from {source} to {target}")?,
        }
    }
    Ok(())
}

fn render_walk(
    title: &str,
    visits: &VisitOrder,
    labels: LabelStyle,
    writer: &mut impl Write,
) -> io::Result<()> {
    let sequence: Vec<String> = visits.sequence().iter().map(|&v| labels.label(v)).collect();
    writeln!(
        writer,
        "{title} from {}: {}",
        labels.label(visits.start()),
        sequence.join(" ")
    )?;
    for &vertex in visits.sequence() {
        match visits.predecessor(vertex) {
            Some(from) => writeln!(
                writer,
                "visiting {} from {}",
                labels.label(vertex),
                labels.label(from)
            )?,
            None => writeln!(writer, "visiting {}", labels.label(vertex))?,
        }
    }
    Ok(())
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
