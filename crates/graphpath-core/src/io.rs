//! Plain-text graph format.
//!
//! ```text
//! <vertices> <edges> <weighted 0|1> <directed 0|1>
//! <src> <dest> [weight]        (one line per logical edge)
//! @ <vertex> <x> <y>           (optional, one line per vertex)
//! ```
//!
//! Weights are written only for weighted graphs; a missing weight reads as
//! `1.0`. Coordinate lines follow the edge block, so readers that stop after
//! the declared number of edges can still load the file.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::GraphError;
use crate::graph::{Graph, VertexId};

/// Marker opening a coordinate line.
const COORD_MARKER: &str = "@";

/// Parse a graph from `reader`.
pub fn read_graph<R: BufRead>(reader: R) -> Result<Graph, GraphError> {
    // (1-based line number, trimmed content), skipping blank lines.
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|l| (i + 1, l)))
        .filter(|res| !matches!(res, Ok((_, l)) if l.trim().is_empty()));

    let Some(header) = lines.next() else {
        return Err(GraphError::parse(1, "empty input"));
    };
    let (line_no, header) = header?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(GraphError::parse(
            line_no,
            "header must be `<vertices> <edges> <weighted> <directed>`",
        ));
    }
    let num_vertices: usize = parse_field(line_no, fields[0], "vertex count")?;
    let num_edges: usize = parse_field(line_no, fields[1], "edge count")?;
    let weighted = parse_flag(line_no, fields[2], "weighted flag")?;
    let directed = parse_flag(line_no, fields[3], "directed flag")?;

    let mut graph = Graph::new(num_vertices, weighted, directed)?;

    for read in 0..num_edges {
        let Some(line) = lines.next() else {
            return Err(GraphError::parse(
                line_no + read + 1,
                format!("unexpected end of input: expected {num_edges} edges, found {read}"),
            ));
        };
        let (line_no, line) = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 {
            return Err(GraphError::parse(line_no, "edge must be `<src> <dest> [weight]`"));
        }
        let src: VertexId = parse_field(line_no, fields[0], "source vertex")?;
        let dest: VertexId = parse_field(line_no, fields[1], "destination vertex")?;
        let weight = match fields.get(2) {
            Some(w) => parse_field(line_no, w, "weight")?,
            None => 1.0,
        };
        graph
            .add_edge(src, dest, weight)
            .map_err(|e| GraphError::parse(line_no, e.to_string()))?;
    }

    for line in lines {
        let (line_no, line) = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.first() != Some(&COORD_MARKER) || fields.len() != 4 {
            return Err(GraphError::parse(
                line_no,
                "expected a coordinate line `@ <vertex> <x> <y>`",
            ));
        }
        let v: VertexId = parse_field(line_no, fields[1], "vertex")?;
        let x: f64 = parse_field(line_no, fields[2], "x coordinate")?;
        let y: f64 = parse_field(line_no, fields[3], "y coordinate")?;
        graph
            .set_coordinates(v, x, y)
            .map_err(|e| GraphError::parse(line_no, e.to_string()))?;
    }

    log::debug!(
        "read graph: {} vertices, {} edges",
        graph.num_vertices(),
        graph.num_edges()
    );
    Ok(graph)
}

/// Write `graph` to `writer` in the text format.
///
/// Edges are written in insertion order per source vertex, so reading the
/// output back yields the same per-vertex edge order on directed graphs.
pub fn write_graph<W: Write>(graph: &Graph, mut writer: W) -> Result<(), GraphError> {
    writeln!(
        writer,
        "{} {} {} {}",
        graph.num_vertices(),
        graph.num_edges(),
        u8::from(graph.is_weighted()),
        u8::from(graph.is_directed()),
    )?;
    for (src, edge) in graph.logical_edges() {
        if graph.is_weighted() {
            writeln!(writer, "{src} {} {}", edge.dest, edge.weight)?;
        } else {
            writeln!(writer, "{src} {}", edge.dest)?;
        }
    }
    if graph.has_coordinates() {
        for v in 0..graph.num_vertices() {
            if let Some(c) = graph.coordinates(v) {
                writeln!(writer, "{COORD_MARKER} {v} {} {}", c.x, c.y)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Load a graph from the file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Graph, GraphError> {
    let file = File::open(path.as_ref())?;
    read_graph(BufReader::new(file))
}

/// Save `graph` to the file at `path`, replacing any existing content.
pub fn save(graph: &Graph, path: impl AsRef<Path>) -> Result<(), GraphError> {
    let file = File::create(path.as_ref())?;
    write_graph(graph, BufWriter::new(file))
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_graph(s.as_bytes())
    }
}

fn parse_field<T: FromStr>(line: usize, field: &str, what: &str) -> Result<T, GraphError> {
    field
        .parse()
        .map_err(|_| GraphError::parse(line, format!("invalid {what} `{field}`")))
}

fn parse_flag(line: usize, field: &str, what: &str) -> Result<bool, GraphError> {
    let value: i64 = parse_field(line, field, what)?;
    Ok(value == 1)
}
