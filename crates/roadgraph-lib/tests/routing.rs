use roadgraph_lib::{
    build_graph, plan_route, Edge, Graph, Node, RouteAlgorithm, RouteRequest,
};

fn edge(src: usize, dest: usize, weight: u64) -> Edge {
    Edge { src, dest, weight }
}

fn sample_graph() -> Graph {
    build_graph(&[edge(0, 1, 4), edge(1, 2, 1), edge(0, 2, 10)], 3)
}

fn sample_coords() -> Vec<Node> {
    vec![
        Node { id: 0, x: 0.0, y: 0.0 },
        Node { id: 1, x: 3.0, y: 0.0 },
        Node { id: 2, x: 4.0, y: 0.0 },
    ]
}

#[test]
fn dijkstra_route_plan_succeeds() {
    let graph = sample_graph();
    let request = RouteRequest::new(0, 2);

    let plan = plan_route(&graph, &[], &request).expect("route exists");
    assert_eq!(plan.algorithm, RouteAlgorithm::Dijkstra);
    assert_eq!(plan.src, 0);
    assert_eq!(plan.dest, 2);
    assert_eq!(plan.vertices, vec![0, 1, 2]);
    assert_eq!(plan.distance, 5);
    assert_eq!(plan.hop_count(), 2);
}

#[test]
fn every_algorithm_reports_the_same_distance() {
    let graph = sample_graph();
    let coords = sample_coords();

    for algorithm in [
        RouteAlgorithm::Dijkstra,
        RouteAlgorithm::Bidirectional,
        RouteAlgorithm::AStar,
    ] {
        let request = RouteRequest::new(0, 2).with_algorithm(algorithm);
        let plan = plan_route(&graph, &coords, &request).expect("route exists");
        assert_eq!(plan.algorithm, algorithm);
        assert_eq!(plan.distance, 5, "{algorithm} distance");
    }
}

#[test]
fn unreachable_destination_surfaces_as_route_not_found() {
    let graph = sample_graph();
    let request = RouteRequest::new(2, 0);

    let error = plan_route(&graph, &[], &request).expect_err("no reverse route");
    assert!(format!("{error}").contains("no route found between 2 and 0"));
}

#[test]
fn out_of_range_vertex_surfaces_as_route_not_found() {
    let graph = sample_graph();
    let request = RouteRequest::new(0, 42);

    let error = plan_route(&graph, &[], &request).expect_err("out of range");
    assert!(format!("{error}").contains("no route found"));
}

#[test]
fn empty_graph_is_rejected_before_searching() {
    let graph = build_graph(&[], 0);
    let request = RouteRequest::new(0, 0);

    let error = plan_route(&graph, &[], &request).expect_err("empty graph");
    assert!(format!("{error}").contains("no vertices"));
}

#[test]
fn route_plan_serializes_with_algorithm_name() {
    let graph = sample_graph();
    let request = RouteRequest::new(0, 2).with_algorithm(RouteAlgorithm::AStar);
    let plan = plan_route(&graph, &sample_coords(), &request).expect("route exists");

    let json = serde_json::to_value(&plan).expect("serialize");
    assert_eq!(json["algorithm"], "a-star");
    assert_eq!(json["distance"], 5);
    assert_eq!(json["vertices"], serde_json::json!([0, 1, 2]));
}
