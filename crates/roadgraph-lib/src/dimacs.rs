//! Loader for the DIMACS two-file road-network format.
//!
//! A network is distributed as a coordinate file (`.co`) and an arc file
//! (`.gr`). Both are plain text and line oriented: `c` lines are comments,
//! `p` lines are problem headers, and `v`/`a` lines carry the actual
//! records. Vertex identifiers are 1-indexed on disk and shifted to
//! 0-indexed here. Parsing is deliberately tolerant: lines that do not
//! match a recognized record shape are skipped and reported in aggregate,
//! and an unopenable file yields an empty collection rather than an error,
//! so callers must check [`LoadedData::nodes`] for emptiness after loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

/// Numeric identifier for a graph vertex, 0-indexed after loading.
pub type VertexId = usize;

/// Non-negative integer arc weight.
pub type Weight = u64;

/// A vertex with its raw coordinates as read from the `.co` file.
///
/// Coordinates stay in the original file units; any projection or
/// normalization for display is a consumer concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: VertexId,
    pub x: f64,
    pub y: f64,
}

/// A directed weighted arc from the `.gr` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub src: VertexId,
    pub dest: VertexId,
    pub weight: Weight,
}

/// Axis-aligned bounding box over raw node coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Compute the bounding box over a node list in a single pass.
    /// An empty list yields the default (all-zero) box.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let Some(first) = nodes.first() else {
            return Self::default();
        };

        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for node in &nodes[1..] {
            bounds.min_x = bounds.min_x.min(node.x);
            bounds.max_x = bounds.max_x.max(node.x);
            bounds.min_y = bounds.min_y.min(node.y);
            bounds.max_y = bounds.max_y.max(node.y);
        }
        bounds
    }
}

/// Everything produced by loading a `.co`/`.gr` pair.
#[derive(Debug, Clone, Default)]
pub struct LoadedData {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    /// Node count declared by the `p sp` header of the arc file.
    pub declared_node_count: usize,
    /// Edge count declared by the `p sp` header of the arc file.
    pub declared_edge_count: usize,
    pub bounds: BoundingBox,
}

impl LoadedData {
    /// Number of vertices the graph should be built with. The declared
    /// header count wins when it exceeds the parsed node list, so arcs
    /// referencing coordinate-less vertices stay addressable.
    pub fn vertex_count(&self) -> usize {
        self.declared_node_count.max(self.nodes.len())
    }

    /// Nodes ordered by vertex id, usable as a positional coordinate
    /// lookup for the A* heuristic.
    pub fn coordinate_table(&self) -> Vec<Node> {
        let mut nodes = self.nodes.clone();
        nodes.sort_by_key(|node| node.id);
        nodes
    }
}

/// Load node coordinates from a `.co` file.
///
/// Returns an empty list when the file cannot be opened; the failure is
/// reported through the diagnostic log, not the return value.
pub fn load_coordinates(path: impl AsRef<Path>) -> Vec<Node> {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => parse_coordinates(BufReader::new(file)),
        Err(err) => {
            warn!("failed to open coordinate file {}: {err}", path.display());
            Vec::new()
        }
    }
}

/// Load directed arcs from a `.gr` file together with the node and edge
/// counts declared by its `p sp` header.
///
/// Returns empty data when the file cannot be opened, mirroring
/// [`load_coordinates`].
pub fn load_edges(path: impl AsRef<Path>) -> (Vec<Edge>, usize, usize) {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => parse_edges(BufReader::new(file)),
        Err(err) => {
            warn!("failed to open arc file {}: {err}", path.display());
            (Vec::new(), 0, 0)
        }
    }
}

/// Load a complete `.co`/`.gr` pair into a [`LoadedData`] aggregate.
pub fn load(co_path: impl AsRef<Path>, gr_path: impl AsRef<Path>) -> LoadedData {
    let nodes = load_coordinates(co_path);
    let (edges, declared_node_count, declared_edge_count) = load_edges(gr_path);
    let bounds = BoundingBox::from_nodes(&nodes);

    debug!(
        "loaded {} nodes and {} edges (declared {}/{})",
        nodes.len(),
        edges.len(),
        declared_node_count,
        declared_edge_count
    );

    LoadedData {
        nodes,
        edges,
        declared_node_count,
        declared_edge_count,
        bounds,
    }
}

/// Parse coordinate records from any buffered reader.
pub fn parse_coordinates<R: BufRead>(reader: R) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("stopped reading coordinate data: {err}");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') || line.starts_with('p') {
            continue;
        }

        match parse_coordinate_record(line) {
            Some(node) => nodes.push(node),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("skipped {skipped} unrecognized coordinate lines");
    }
    nodes
}

/// Parse arc records from any buffered reader, returning the edges and
/// the declared node/edge counts from the `p sp` header (zero when no
/// header is present).
pub fn parse_edges<R: BufRead>(reader: R) -> (Vec<Edge>, usize, usize) {
    let mut edges = Vec::new();
    let mut declared_nodes = 0usize;
    let mut declared_edges = 0usize;
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("stopped reading arc data: {err}");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }

        if line.starts_with('p') {
            if let Some((nodes, arcs)) = parse_problem_header(line) {
                declared_nodes = nodes;
                declared_edges = arcs;
            } else {
                skipped += 1;
            }
            continue;
        }

        match parse_arc_record(line) {
            Some(edge) => edges.push(edge),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("skipped {skipped} unrecognized arc lines");
    }
    (edges, declared_nodes, declared_edges)
}

/// `v <id> <x> <y>` with a 1-indexed id.
fn parse_coordinate_record(line: &str) -> Option<Node> {
    let mut fields = line.split_whitespace();
    if fields.next() != Some("v") {
        return None;
    }

    let id: usize = fields.next()?.parse().ok()?;
    let x: f64 = fields.next()?.parse().ok()?;
    let y: f64 = fields.next()?.parse().ok()?;
    Some(Node {
        id: id.checked_sub(1)?,
        x,
        y,
    })
}

/// `p sp <nodeCount> <edgeCount>`.
fn parse_problem_header(line: &str) -> Option<(usize, usize)> {
    let mut fields = line.split_whitespace();
    if fields.next() != Some("p") || fields.next() != Some("sp") {
        return None;
    }

    let nodes: usize = fields.next()?.parse().ok()?;
    let edges: usize = fields.next()?.parse().ok()?;
    Some((nodes, edges))
}

/// `a <src> <dest> <weight>` with 1-indexed endpoints.
fn parse_arc_record(line: &str) -> Option<Edge> {
    let mut fields = line.split_whitespace();
    if fields.next() != Some("a") {
        return None;
    }

    let src: usize = fields.next()?.parse().ok()?;
    let dest: usize = fields.next()?.parse().ok()?;
    let weight: Weight = fields.next()?.parse().ok()?;
    Some(Edge {
        src: src.checked_sub(1)?,
        dest: dest.checked_sub(1)?,
        weight,
    })
}
