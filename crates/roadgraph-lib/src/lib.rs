//! Road-network shortest-path library entry points.
//!
//! This crate exposes helpers to load a DIMACS `.co`/`.gr` file pair,
//! build the directed routing graph, and run shortest-path queries
//! (Dijkstra, bidirectional Dijkstra, A*). Higher-level consumers (CLI,
//! visualization layers) should only depend on the functions exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dimacs;
pub mod error;
pub mod graph;
pub mod routing;
pub mod search;

pub use dimacs::{
    load, load_coordinates, load_edges, parse_coordinates, parse_edges, BoundingBox, Edge,
    LoadedData, Node, VertexId, Weight,
};
pub use error::{Error, Result};
pub use graph::{build_graph, Graph};
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RoutePlanner, RouteRequest};
pub use search::{
    a_star_path, bidirectional_shortest_path, shortest_path, PathResult, UNREACHABLE,
};
