//! Builds a small string graph on the chosen backend, prints it and walks it.
//!
//! Usage: `cargo run --example traverse -- [list|matrix|<config json>]`
//! Set `RUST_LOG=duograph=debug` to see the library's tracing events.

use anyhow::{Context, Result};
use duograph::callbacks::{add, print};
use duograph::{Algorithm, Backend, Graph, GraphConfig, VertexFormat, VisitPolicy};
use tracing_subscriber::EnvFilter;

fn config_from_args() -> Result<GraphConfig> {
    let Some(arg) = std::env::args().nth(1) else {
        return Ok(GraphConfig::default());
    };
    if arg.trim_start().starts_with('{') {
        return GraphConfig::from_json(&arg).context("parsing graph config");
    }
    let backend = arg.parse().context("parsing backend name")?;
    Ok(GraphConfig::new(backend))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("duograph {}", duograph::VERSION);
    let config = config_from_args()?;
    println!("backend: {}", config.backend);

    let mut graph: Graph<String> = Graph::with_config(config);
    let ids: Vec<_> = ["251", "50", "100", "25", "1152", "1", "2"]
        .into_iter()
        .map(|label| graph.add_vertex(label.to_owned()))
        .collect();
    graph.add_edge(ids[0], ids[1], 1.0)?;
    graph.add_edge(ids[0], ids[2], 2.5)?;
    graph.add_edge(ids[1], ids[3], 0.0)?;
    graph.add_edge(ids[2], ids[4], 4.0)?;
    graph.add_edge(ids[3], ids[4], 1.0)?;

    println!("\n{}", graph.display(VertexFormat::Long));

    println!("BFS (related) from {}:", ids[0]);
    graph.traverse_with(Some(ids[0]), Algorithm::Bfs, VisitPolicy::Related, print(VertexFormat::Short))?;

    let touched = graph.traverse(None, Algorithm::Dfs, VisitPolicy::All, add("5"))?;
    println!("\nDFS (all) appended \"5\" to {touched} vertices:");
    print!("{graph}");

    let paths = graph.shortest_paths(ids[0])?;
    let target = ids[4];
    let hops = paths.path_to(target).context("target should be reachable")?;
    println!(
        "\nlightest path {} -> {}: weight {}, {} hops",
        graph.get_vertex(ids[0])?,
        graph.get_vertex(target)?,
        paths.distance_to(target).unwrap_or(f64::INFINITY),
        hops.len() - 1
    );

    let components = graph.connected_components();
    println!("components: {}", components.len());

    Ok(())
}
