use colored::*;
use lazy_sssp::graph::{DirectedGraph, Graph};
use lazy_sssp::{Dijkstra, EdgeListReader, Report, ShortestPathAlgorithm, VertexLabels};

const ROUTES: &str = include_str!("data/airports.dat");
const CODES: &str = include_str!("data/airports.labels");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let origin = std::env::args().nth(1).unwrap_or_else(|| "PDX".to_string());

    let labels = VertexLabels::parse(CODES)?;
    let graph: DirectedGraph<i64> = EdgeListReader::new().read_str(ROUTES)?.into_graph()?;
    let source = labels.resolve(&origin)?;

    println!("{}", "✈️  Cheapest routes".bold().cyan());
    println!(
        "{} airports, {} flight legs, departing {}\n",
        graph.vertex_count(),
        graph.edge_count(),
        origin.bold().yellow()
    );

    let dijkstra = Dijkstra::new();
    let (result, stats) = dijkstra.compute_with_stats::<i64, _>(&graph, source)?;

    for vertex in 0..graph.vertex_count() {
        let code = labels.name_of(vertex).unwrap_or("???");
        match result.distance(vertex) {
            Some(cost) => {
                let route = <Dijkstra as ShortestPathAlgorithm<i64, DirectedGraph<i64>>>::get_path(&dijkstra, &result, vertex)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|v| labels.name_of(v).unwrap_or("???"))
                    .collect::<Vec<_>>()
                    .join(" → ");
                println!("  {} {:>6}  {}", code.bold(), cost.to_string().green(), route.dimmed());
            }
            None => println!("  {} {:>6}", code.bold(), "none".red()),
        }
    }

    println!(
        "\n{} {} queue entries, {} discarded as stale",
        "📊".bold(),
        stats.pushes,
        stats.stale_pops.to_string().yellow()
    );

    if std::env::var("SSSP_TABLE").is_ok() {
        println!("\n{}", Report::new(&result).with_labels(&labels).render_table());
    }

    Ok(())
}
