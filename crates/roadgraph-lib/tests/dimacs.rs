use std::fs;

use roadgraph_lib::{load, parse_coordinates, parse_edges, BoundingBox, Edge, Node};
use tempfile::TempDir;

const SAMPLE_GR: &str = "\
p sp 3 3
a 1 2 4
a 2 3 1
a 1 3 10
";

const SAMPLE_CO: &str = "\
c generated sample
p aux sp co 3
v 1 100 200
v 2 -50 75
v 3 300 0
";

#[test]
fn arc_file_round_trip_matches_declared_counts() {
    let (edges, nodes, arcs) = parse_edges(SAMPLE_GR.as_bytes());

    assert_eq!(nodes, 3);
    assert_eq!(arcs, 3);
    assert_eq!(
        edges,
        vec![
            Edge {
                src: 0,
                dest: 1,
                weight: 4
            },
            Edge {
                src: 1,
                dest: 2,
                weight: 1
            },
            Edge {
                src: 0,
                dest: 2,
                weight: 10
            },
        ]
    );
}

#[test]
fn coordinate_records_shift_to_zero_indexed_ids() {
    let nodes = parse_coordinates(SAMPLE_CO.as_bytes());

    assert_eq!(
        nodes,
        vec![
            Node {
                id: 0,
                x: 100.0,
                y: 200.0
            },
            Node {
                id: 1,
                x: -50.0,
                y: 75.0
            },
            Node {
                id: 2,
                x: 300.0,
                y: 0.0
            },
        ]
    );
}

#[test]
fn comments_blanks_and_malformed_lines_are_skipped() {
    let text = "\
c leading comment

a 1 2 4
garbage that matches nothing
a not numbers here
v 9 9 9
a 2 1 4
";
    let (edges, nodes, arcs) = parse_edges(text.as_bytes());

    assert_eq!(nodes, 0, "no header means no declared counts");
    assert_eq!(arcs, 0);
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].src, 0);
    assert_eq!(edges[1].src, 1);
}

#[test]
fn zero_indexed_record_in_file_is_rejected_not_wrapped() {
    // "a 0 1 5" would underflow the 1-to-0 shift; it must be skipped.
    let (edges, _, _) = parse_edges("a 0 1 5\na 1 2 5\n".as_bytes());
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0], Edge { src: 0, dest: 1, weight: 5 });
}

#[test]
fn bounding_box_spans_all_raw_coordinates() {
    let nodes = parse_coordinates(SAMPLE_CO.as_bytes());
    let bounds = BoundingBox::from_nodes(&nodes);

    assert_eq!(bounds.min_x, -50.0);
    assert_eq!(bounds.max_x, 300.0);
    assert_eq!(bounds.min_y, 0.0);
    assert_eq!(bounds.max_y, 200.0);
}

#[test]
fn bounding_box_of_no_nodes_is_zeroed() {
    assert_eq!(BoundingBox::from_nodes(&[]), BoundingBox::default());
}

#[test]
fn load_reads_both_files_from_disk() {
    let dir = TempDir::new().expect("create temp dir");
    let co_path = dir.path().join("sample.co");
    let gr_path = dir.path().join("sample.gr");
    fs::write(&co_path, SAMPLE_CO).expect("write co");
    fs::write(&gr_path, SAMPLE_GR).expect("write gr");

    let data = load(&co_path, &gr_path);

    assert_eq!(data.nodes.len(), 3);
    assert_eq!(data.edges.len(), 3);
    assert_eq!(data.declared_node_count, 3);
    assert_eq!(data.declared_edge_count, 3);
    assert_eq!(data.vertex_count(), 3);
    assert_eq!(data.bounds.max_x, 300.0);
}

#[test]
fn missing_files_yield_empty_data_not_errors() {
    let dir = TempDir::new().expect("create temp dir");
    let data = load(dir.path().join("no.co"), dir.path().join("no.gr"));

    assert!(data.nodes.is_empty(), "empty nodes signal a failed load");
    assert!(data.edges.is_empty());
    assert_eq!(data.declared_node_count, 0);
    assert_eq!(data.declared_edge_count, 0);
}

#[test]
fn coordinate_table_orders_nodes_by_id() {
    let text = "\
v 3 30 30
v 1 10 10
v 2 20 20
";
    let nodes = parse_coordinates(text.as_bytes());
    let data = roadgraph_lib::LoadedData {
        nodes,
        ..Default::default()
    };

    let table = data.coordinate_table();
    let ids: Vec<_> = table.iter().map(|node| node.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(table[0].x, 10.0);
}
