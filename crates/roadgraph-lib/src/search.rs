//! Shortest-path search over a [`Graph`].
//!
//! Three interchangeable strategies share the same contract: a
//! label-setting Dijkstra, a bidirectional meet-in-the-middle variant,
//! and a coordinate-guided A*. All of them return a [`PathResult`] and
//! never mutate the graph, so queries can run concurrently against a
//! shared graph as long as each call owns its own working state.
//!
//! Weights must be non-negative; that is a precondition of the whole
//! algorithm family, not something the searches re-validate.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::dimacs::{Node, VertexId, Weight};
use crate::graph::Graph;

/// Distance reported when no path exists.
pub const UNREACHABLE: i64 = -1;

/// Tentative-distance label meaning "not reached yet". Kept distinct from
/// any achievable path sum; no arithmetic is ever performed on it.
const INFINITE: u64 = u64::MAX;

/// Result of a shortest-path query.
///
/// `vertices` runs from source to destination inclusive and is empty when
/// the destination is unreachable, in which case `distance` holds the
/// [`UNREACHABLE`] sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub vertices: Vec<VertexId>,
    pub distance: i64,
}

impl PathResult {
    /// The "no path" result.
    pub fn unreachable() -> Self {
        Self {
            vertices: Vec::new(),
            distance: UNREACHABLE,
        }
    }

    /// Whether the query reached its destination.
    pub fn is_reachable(&self) -> bool {
        self.distance >= 0
    }

    fn reached(vertices: Vec<VertexId>, distance: u64) -> Self {
        Self {
            vertices,
            distance: distance as i64,
        }
    }
}

/// Single-source Dijkstra from `src` to `dest`.
///
/// The frontier is run to exhaustion rather than stopping on the first
/// settle of `dest`; the distance table is complete for every reachable
/// vertex when the loop ends, which keeps the implementation uniform with
/// an all-destinations query.
pub fn shortest_path(graph: &Graph, src: VertexId, dest: VertexId) -> PathResult {
    if src >= graph.vertex_count() || dest >= graph.vertex_count() {
        return PathResult::unreachable();
    }
    if src == dest {
        return PathResult::reached(vec![src], 0);
    }
    if graph.neighbours(src).is_empty() || graph.in_neighbours(dest).is_empty() {
        return PathResult::unreachable();
    }

    let mut dist = vec![INFINITE; graph.vertex_count()];
    let mut parent: Vec<Option<VertexId>> = vec![None; graph.vertex_count()];
    let mut frontier = BinaryHeap::new();

    dist[src] = 0;
    frontier.push(QueueEntry::new(src, 0));

    while let Some(entry) = frontier.pop() {
        if entry.cost > dist[entry.vertex] {
            continue; // superseded by a cheaper label
        }
        for &(next, weight) in graph.neighbours(entry.vertex) {
            let candidate = entry.cost + weight;
            if candidate < dist[next] {
                dist[next] = candidate;
                parent[next] = Some(entry.vertex);
                frontier.push(QueueEntry::new(next, candidate));
            }
        }
    }

    if dist[dest] == INFINITE {
        return PathResult::unreachable();
    }
    PathResult::reached(reconstruct_path(&parent, dest), dist[dest])
}

/// Bidirectional Dijkstra from `src` to `dest`.
///
/// Runs a forward search over outgoing arcs and a backward search over
/// the reverse adjacency, alternating one pop-and-relax step per side.
/// Whenever a relaxation touches a vertex already labelled by the other
/// side, the combined cost becomes a meeting candidate; the search stops
/// once the sum of both frontier tops can no longer beat the best
/// candidate, the standard optimality bound.
pub fn bidirectional_shortest_path(graph: &Graph, src: VertexId, dest: VertexId) -> PathResult {
    if src >= graph.vertex_count() || dest >= graph.vertex_count() {
        return PathResult::unreachable();
    }
    if src == dest {
        return PathResult::reached(vec![src], 0);
    }
    if graph.neighbours(src).is_empty() || graph.in_neighbours(dest).is_empty() {
        return PathResult::unreachable();
    }

    let vertex_count = graph.vertex_count();
    let mut forward = SearchState::new(vertex_count, src);
    let mut backward = SearchState::new(vertex_count, dest);

    let mut best = INFINITE;
    let mut meeting: Option<VertexId> = None;

    while !(forward.frontier.is_empty() && backward.frontier.is_empty()) {
        if best != INFINITE {
            let top_forward = forward.frontier_top();
            let top_backward = backward.frontier_top();
            if top_forward.saturating_add(top_backward) >= best {
                break;
            }
        }

        expand_frontier(
            |vertex| graph.neighbours(vertex),
            &mut forward,
            &backward,
            &mut best,
            &mut meeting,
        );
        expand_frontier(
            |vertex| graph.in_neighbours(vertex),
            &mut backward,
            &forward,
            &mut best,
            &mut meeting,
        );
    }

    let Some(meeting) = meeting else {
        return PathResult::unreachable();
    };

    // src -> meeting from the forward tree, then meeting -> dest from the
    // backward tree (whose parent pointers already chain towards dest).
    let mut vertices = reconstruct_path(&forward.parent, meeting);
    let mut current = backward.parent[meeting];
    while let Some(vertex) = current {
        vertices.push(vertex);
        current = backward.parent[vertex];
    }

    PathResult::reached(vertices, best)
}

/// A* from `src` to `dest`, guided by the straight-line distance between
/// raw node coordinates.
///
/// `coords` is the positional lookup produced by
/// [`LoadedData::coordinate_table`](crate::dimacs::LoadedData::coordinate_table).
/// Missing coordinates degrade the estimate to zero for the affected
/// vertices, which keeps the heuristic admissible and the result optimal.
/// Termination, tie-breaking, and reconstruction mirror [`shortest_path`],
/// with the priority key augmented by the heuristic.
pub fn a_star_path(graph: &Graph, src: VertexId, dest: VertexId, coords: &[Node]) -> PathResult {
    if src >= graph.vertex_count() || dest >= graph.vertex_count() {
        return PathResult::unreachable();
    }
    if src == dest {
        return PathResult::reached(vec![src], 0);
    }
    if graph.neighbours(src).is_empty() || graph.in_neighbours(dest).is_empty() {
        return PathResult::unreachable();
    }

    let goal = coords.get(dest).filter(|node| node.id == dest).copied();

    let mut dist = vec![INFINITE; graph.vertex_count()];
    let mut parent: Vec<Option<VertexId>> = vec![None; graph.vertex_count()];
    let mut frontier = BinaryHeap::new();

    dist[src] = 0;
    frontier.push(AStarEntry::new(src, 0, heuristic(coords, src, goal)));

    while let Some(entry) = frontier.pop() {
        if entry.cost > dist[entry.vertex] {
            continue;
        }
        for &(next, weight) in graph.neighbours(entry.vertex) {
            let candidate = entry.cost + weight;
            if candidate < dist[next] {
                dist[next] = candidate;
                parent[next] = Some(entry.vertex);
                frontier.push(AStarEntry::new(next, candidate, heuristic(coords, next, goal)));
            }
        }
    }

    if dist[dest] == INFINITE {
        return PathResult::unreachable();
    }
    PathResult::reached(reconstruct_path(&parent, dest), dist[dest])
}

/// Euclidean distance from a vertex to the goal in raw coordinate units,
/// or zero when either coordinate is unknown.
fn heuristic(coords: &[Node], from: VertexId, goal: Option<Node>) -> f64 {
    let Some(goal) = goal else {
        return 0.0;
    };
    let Some(node) = coords.get(from).filter(|node| node.id == from) else {
        return 0.0;
    };

    let dx = node.x - goal.x;
    let dy = node.y - goal.y;
    (dx * dx + dy * dy).sqrt()
}

/// Per-direction working state of the bidirectional search.
struct SearchState {
    dist: Vec<u64>,
    parent: Vec<Option<VertexId>>,
    settled: Vec<bool>,
    frontier: BinaryHeap<QueueEntry>,
}

impl SearchState {
    fn new(vertex_count: usize, root: VertexId) -> Self {
        let mut state = Self {
            dist: vec![INFINITE; vertex_count],
            parent: vec![None; vertex_count],
            settled: vec![false; vertex_count],
            frontier: BinaryHeap::new(),
        };
        state.dist[root] = 0;
        state.frontier.push(QueueEntry::new(root, 0));
        state
    }

    fn frontier_top(&self) -> u64 {
        self.frontier.peek().map(|entry| entry.cost).unwrap_or(INFINITE)
    }
}

/// One pop-and-relax step for a single direction of the bidirectional
/// search, updating the best meeting candidate along the way.
fn expand_frontier<'a, F>(
    neighbours: F,
    side: &mut SearchState,
    other: &SearchState,
    best: &mut u64,
    meeting: &mut Option<VertexId>,
) where
    F: Fn(VertexId) -> &'a [(VertexId, Weight)],
{
    let Some(entry) = side.frontier.pop() else {
        return;
    };
    if side.settled[entry.vertex] {
        return; // stale entry, the step is spent
    }
    side.settled[entry.vertex] = true;

    if other.dist[entry.vertex] != INFINITE {
        let total = entry.cost + other.dist[entry.vertex];
        if total < *best {
            *best = total;
            *meeting = Some(entry.vertex);
        }
    }

    for &(next, weight) in neighbours(entry.vertex) {
        let candidate = entry.cost + weight;
        if candidate < side.dist[next] {
            side.dist[next] = candidate;
            side.parent[next] = Some(entry.vertex);
            side.frontier.push(QueueEntry::new(next, candidate));
        }
        if other.dist[next] != INFINITE {
            let total = candidate.min(side.dist[next]) + other.dist[next];
            if total < *best {
                *best = total;
                *meeting = Some(next);
            }
        }
    }
}

/// Follow parent pointers from `dest` back to the search root and reverse
/// into root-to-dest order.
fn reconstruct_path(parent: &[Option<VertexId>], dest: VertexId) -> Vec<VertexId> {
    let mut path = Vec::new();
    let mut current = Some(dest);
    while let Some(vertex) = current {
        path.push(vertex);
        current = parent[vertex];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    vertex: VertexId,
    cost: u64,
}

impl QueueEntry {
    fn new(vertex: VertexId, cost: u64) -> Self {
        Self { vertex, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, with
        // the smaller vertex id popping first on ties for determinism.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    vertex: VertexId,
    cost: u64,
    estimate: FloatOrd,
}

impl AStarEntry {
    fn new(vertex: VertexId, cost: u64, heuristic: f64) -> Self {
        Self {
            vertex,
            cost,
            estimate: FloatOrd(cost as f64 + heuristic),
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
