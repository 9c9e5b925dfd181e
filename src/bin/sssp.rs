//! # sssp CLI
//!
//! Loads an edge-list data file, runs Dijkstra from one vertex and prints
//! the lowest cost to every other vertex.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use lazy_sssp::{
    Dijkstra, EdgeListReader, Report, Result, ShortestPathAlgorithm, VertexLabels,
};
use lazy_sssp::graph::{DirectedGraph, Graph};
use log::{error, info, LevelFilter};

/// Command-line interface for lazy_sssp
#[derive(Parser)]
#[command(name = "sssp")]
#[command(about = "Single-source shortest paths over an integer-weighted edge list")]
#[command(long_about = "Reads a data file of the form

  n_nodes n_edges
  src dst weight
  ...

and prints the lowest cost path from the source to every vertex:
  sssp airports.dat                          # start from vertex 0
  sssp airports.dat --labels codes.txt -s SEA
  sssp airports.dat --path-to 7 --format json")]
#[command(version)]
struct Cli {
    /// Edge-list data file
    input: PathBuf,

    /// Source vertex, either an index or a label from --labels
    #[arg(short, long, default_value = "0")]
    source: String,

    /// File with one `NAME INDEX` pair per line
    #[arg(short, long)]
    labels: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Also print the vertex sequence of the shortest path to this vertex
    #[arg(long)]
    path_to: Option<String>,

    /// Accept files with fewer or more edges than declared
    #[arg(long)]
    lenient: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging to stderr
    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let labels = match &cli.labels {
        Some(path) => VertexLabels::read_path(path)?,
        None => VertexLabels::new(),
    };

    let edge_list = EdgeListReader::new()
        .with_strict_edge_count(!cli.lenient)
        .read_path::<i64, _>(&cli.input)?;
    let graph: DirectedGraph<i64> = edge_list.into_graph()?;
    info!(
        "Loaded {} vertices and {} edges from {}",
        graph.vertex_count(),
        graph.edge_count(),
        cli.input.display()
    );

    let source = labels.resolve(&cli.source)?;
    let dijkstra = Dijkstra::new().with_queue_capacity(graph.vertex_count());
    let (result, stats) = dijkstra.compute_with_stats::<i64, _>(&graph, source)?;
    info!(
        "Reached {} of {} vertices ({} stale frontier entries skipped)",
        result.reachable_count(),
        result.len(),
        stats.stale_pops
    );

    let report = Report::new(&result).with_labels(&labels);
    match cli.format {
        OutputFormat::Table => print!("{}", report.render_table()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if let Some(target) = &cli.path_to {
        let target = labels.resolve(target)?;
        let path = <Dijkstra as ShortestPathAlgorithm<i64, DirectedGraph<i64>>>::get_path(&dijkstra, &result, target);
        match path {
            Some(path) => {
                let hops: Vec<String> = path
                    .iter()
                    .map(|&v| labels.name_of(v).map_or_else(|| v.to_string(), str::to_string))
                    .collect();
                println!("Path to {}: {}", cli_target_name(&labels, target), hops.join(" -> "));
            }
            None => println!("No path to {}", cli_target_name(&labels, target)),
        }
    }

    Ok(())
}

fn cli_target_name(labels: &VertexLabels, vertex: usize) -> String {
    match labels.name_of(vertex) {
        Some(name) => format!("{} ({})", vertex, name),
        None => vertex.to_string(),
    }
}
