use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadgraph_lib::{
    build_graph, load, plan_route, LoadedData, RouteAlgorithm, RouteRequest, VertexId,
};

#[derive(Parser, Debug)]
#[command(version, about = "DIMACS road-network shortest-path queries")]
struct Cli {
    /// Coordinate (.co) file path.
    #[arg(long)]
    co: PathBuf,

    /// Arc (.gr) file path.
    #[arg(long)]
    gr: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the network and report node/edge counts and the bounding box.
    Info,
    /// Compute a route between two 0-indexed vertex ids.
    Route {
        /// Source vertex id.
        #[arg(long = "from")]
        from: VertexId,
        /// Destination vertex id.
        #[arg(long = "to")]
        to: VertexId,
        /// Search strategy: dijkstra, bidirectional, or a-star.
        #[arg(long, default_value_t = RouteAlgorithm::Dijkstra)]
        algorithm: RouteAlgorithm,
        /// Emit the route plan as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let data = load_network(&cli)?;
    match cli.command {
        Command::Info => handle_info(&data),
        Command::Route {
            from,
            to,
            algorithm,
            json,
        } => handle_route(&data, from, to, algorithm, json),
    }
}

fn load_network(cli: &Cli) -> Result<LoadedData> {
    let data = load(&cli.co, &cli.gr);
    if data.nodes.is_empty() {
        bail!(
            "failed to load graph data from {} and {}",
            cli.co.display(),
            cli.gr.display()
        );
    }
    Ok(data)
}

fn handle_info(data: &LoadedData) -> Result<()> {
    println!(
        "Nodes: {} parsed, {} declared",
        data.nodes.len(),
        data.declared_node_count
    );
    println!(
        "Edges: {} parsed, {} declared",
        data.edges.len(),
        data.declared_edge_count
    );
    println!(
        "Bounding box: x [{} .. {}], y [{} .. {}]",
        data.bounds.min_x, data.bounds.max_x, data.bounds.min_y, data.bounds.max_y
    );
    Ok(())
}

fn handle_route(
    data: &LoadedData,
    from: VertexId,
    to: VertexId,
    algorithm: RouteAlgorithm,
    json: bool,
) -> Result<()> {
    let graph = build_graph(&data.edges, data.vertex_count());
    let coords = data.coordinate_table();
    let request = RouteRequest::new(from, to).with_algorithm(algorithm);

    let started = Instant::now();
    let plan = plan_route(&graph, &coords, &request)?;
    let elapsed = started.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("Algorithm: {}", plan.algorithm);
    println!(
        "Route: {} hops, total distance {}",
        plan.hop_count(),
        plan.distance
    );
    println!("Time: {} ms", elapsed.as_millis());
    for vertex in &plan.vertices {
        println!("- {vertex}");
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
