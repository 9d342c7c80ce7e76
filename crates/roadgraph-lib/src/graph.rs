//! Directed adjacency representation consumed by the search algorithms.

use tracing::warn;

use crate::dimacs::{Edge, VertexId, Weight};

/// Graph structure used by the pathfinding algorithms.
///
/// Built once from an edge list and immutable afterwards, so independent
/// queries may run concurrently against the same graph. A reverse
/// adjacency is maintained alongside the forward one so the backward
/// frontier of the bidirectional search traverses true incoming arcs;
/// this matters for genuinely directed networks such as one-way roads.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertex_count: usize,
    outgoing: Vec<Vec<(VertexId, Weight)>>,
    incoming: Vec<Vec<(VertexId, Weight)>>,
}

impl Graph {
    /// Number of vertices the graph was built with.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Outgoing `(neighbour, weight)` pairs for a vertex. Out-of-range
    /// identifiers behave as isolated vertices and yield an empty slice.
    pub fn neighbours(&self, vertex: VertexId) -> &[(VertexId, Weight)] {
        self.outgoing
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Incoming `(predecessor, weight)` pairs for a vertex, from the
    /// reverse adjacency.
    pub fn in_neighbours(&self, vertex: VertexId) -> &[(VertexId, Weight)] {
        self.incoming
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Build the routing graph from a directed edge list.
///
/// Each edge appends `(dest, weight)` to the forward entry of `src` and
/// `(src, weight)` to the reverse entry of `dest`. Parallel edges between
/// the same ordered pair are kept as-is; the search naturally prefers the
/// cheaper one. Edges referencing vertices outside `[0, vertex_count)`
/// are dropped with a diagnostic instead of corrupting the adjacency.
pub fn build_graph(edges: &[Edge], vertex_count: usize) -> Graph {
    let mut outgoing = vec![Vec::new(); vertex_count];
    let mut incoming = vec![Vec::new(); vertex_count];
    let mut dropped = 0usize;

    for edge in edges {
        if edge.src >= vertex_count || edge.dest >= vertex_count {
            dropped += 1;
            continue;
        }
        outgoing[edge.src].push((edge.dest, edge.weight));
        incoming[edge.dest].push((edge.src, edge.weight));
    }

    if dropped > 0 {
        warn!("dropped {dropped} edges with endpoints outside [0, {vertex_count})");
    }

    Graph {
        vertex_count,
        outgoing,
        incoming,
    }
}
