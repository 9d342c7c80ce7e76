//! Route planning over a loaded road network.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search strategies (Dijkstra, bidirectional, A*)
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! Algorithms are encapsulated behind the [`RoutePlanner`] trait so new
//! strategies can be added without touching the orchestration in
//! [`plan_route`].

mod planner;

pub use planner::{
    select_planner, AStarPlanner, BidirectionalPlanner, DijkstraPlanner, RoutePlanner,
};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::dimacs::{Node, VertexId};
use crate::error::{Error, Result};
use crate::graph::Graph;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Single-source Dijkstra (weighted, run to exhaustion).
    #[default]
    Dijkstra,
    /// Bidirectional Dijkstra (meet in the middle).
    Bidirectional,
    /// A* search (coordinate-guided).
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::Bidirectional => "bidirectional",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "dijkstra" => Ok(RouteAlgorithm::Dijkstra),
            "bidirectional" => Ok(RouteAlgorithm::Bidirectional),
            "a-star" | "astar" => Ok(RouteAlgorithm::AStar),
            other => Err(format!(
                "unknown algorithm '{other}' (expected dijkstra, bidirectional, or a-star)"
            )),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub src: VertexId,
    pub dest: VertexId,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Request with the default algorithm.
    pub fn new(src: VertexId, dest: VertexId) -> Self {
        Self {
            src,
            dest,
            algorithm: RouteAlgorithm::default(),
        }
    }

    /// Select a specific algorithm for this request.
    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub src: VertexId,
    pub dest: VertexId,
    pub vertices: Vec<VertexId>,
    pub distance: i64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Compute a route using the requested algorithm.
///
/// Out-of-range vertex identifiers behave as isolated vertices (the
/// engine contract), so they surface as [`Error::RouteNotFound`] rather
/// than a panic. `coords` is only consulted by the A* planner and may be
/// empty for the other strategies.
pub fn plan_route(graph: &Graph, coords: &[Node], request: &RouteRequest) -> Result<RoutePlan> {
    if graph.vertex_count() == 0 {
        return Err(Error::EmptyGraph);
    }

    let planner = select_planner(request.algorithm);
    let result = planner.find_path(graph, coords, request.src, request.dest);

    if !result.is_reachable() {
        return Err(Error::RouteNotFound {
            src: request.src,
            dest: request.dest,
        });
    }

    Ok(RoutePlan {
        algorithm: request.algorithm,
        src: request.src,
        dest: request.dest,
        vertices: result.vertices,
        distance: result.distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_display_round_trips_through_from_str() {
        for algorithm in [
            RouteAlgorithm::Dijkstra,
            RouteAlgorithm::Bidirectional,
            RouteAlgorithm::AStar,
        ] {
            let parsed: RouteAlgorithm = algorithm.to_string().parse().expect("parse");
            assert_eq!(parsed, algorithm);
        }
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let error = "bellman-ford".parse::<RouteAlgorithm>().expect_err("reject");
        assert!(error.contains("unknown algorithm"));
    }

    #[test]
    fn route_plan_hop_count() {
        let plan = RoutePlan {
            algorithm: RouteAlgorithm::Dijkstra,
            src: 0,
            dest: 2,
            vertices: vec![0, 1, 2],
            distance: 5,
        };
        assert_eq!(plan.hop_count(), 2);
    }

    #[test]
    fn single_vertex_plan_has_zero_hops() {
        let plan = RoutePlan {
            algorithm: RouteAlgorithm::Dijkstra,
            src: 1,
            dest: 1,
            vertices: vec![1],
            distance: 0,
        };
        assert_eq!(plan.hop_count(), 0);
    }
}
