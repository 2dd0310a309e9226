//! Read a dungeon map, find the shortest way from start to goal and print
//! the map with the way drawn on it.
//!
//! Run: cargo run --bin dungeon -- path/to/map.txt

mod cli;
mod load;
mod render;

use clap::Parser;
use dungeon_paths::{Astar, Graph};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(cli.default_filter())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.default_filter()))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let markers = cli.markers()?;
    let text = load::load_map(&cli.map)?;
    let graph = Graph::with_markers(&text, markers)?;
    info!(
        rows = graph.rows(),
        cols = graph.cols(),
        walkable = graph.len(),
        "loaded {}",
        cli.map.display()
    );

    let mut astar = Astar::from_graph(&graph);
    let path = astar.search();
    match astar.cost() {
        Some(cost) => info!(
            steps = path.len() - 1,
            cost,
            expanded = astar.expanded(),
            "path found"
        ),
        None => warn!(
            "no path from {} to {}",
            graph.start().pos(),
            graph.stop().pos()
        ),
    }

    println!("{}", render::render(&graph, &path, !cli.no_color)?);
    Ok(())
}
