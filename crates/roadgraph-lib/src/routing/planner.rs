//! Route planning strategies implementing the Strategy pattern.
//!
//! Each planner wraps one search function from [`crate::search`] so the
//! orchestrator in [`super::plan_route`] can stay algorithm-agnostic.

use crate::dimacs::{Node, VertexId};
use crate::graph::Graph;
use crate::search::{a_star_path, bidirectional_shortest_path, shortest_path, PathResult};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search on the given graph.
    fn find_path(&self, graph: &Graph, coords: &[Node], src: VertexId, dest: VertexId)
        -> PathResult;

    /// Whether this planner consults node coordinates.
    fn requires_coordinates(&self) -> bool {
        false
    }
}

/// Single-source Dijkstra planner.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        graph: &Graph,
        _coords: &[Node],
        src: VertexId,
        dest: VertexId,
    ) -> PathResult {
        shortest_path(graph, src, dest)
    }
}

/// Bidirectional Dijkstra planner.
///
/// Halves the effective search radius on large road networks at the cost
/// of a second frontier and the meeting-point bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct BidirectionalPlanner;

impl RoutePlanner for BidirectionalPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Bidirectional
    }

    fn find_path(
        &self,
        graph: &Graph,
        _coords: &[Node],
        src: VertexId,
        dest: VertexId,
    ) -> PathResult {
        bidirectional_shortest_path(graph, src, dest)
    }
}

/// A* planner guided by raw node coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(
        &self,
        graph: &Graph,
        coords: &[Node],
        src: VertexId,
        dest: VertexId,
    ) -> PathResult {
        a_star_path(graph, src, dest, coords)
    }

    fn requires_coordinates(&self) -> bool {
        true
    }
}

/// Select the planner for a given algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::Bidirectional => Box::new(BidirectionalPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
    }
}
