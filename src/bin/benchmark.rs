use std::time::{Duration, Instant};
use lazy_sssp::algorithm::{dijkstra::Dijkstra, ShortestPathResult};
use lazy_sssp::graph::{generators, DirectedGraph, Graph};

// Run Dijkstra once and report how much lazy deletion cost
fn benchmark_dijkstra(name: &str, dijkstra: &Dijkstra, graph: &DirectedGraph<i64>, source: usize) -> Duration {
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let (result, stats): (ShortestPathResult<i64>, _) = match dijkstra.compute_with_stats(graph, source) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("  - {} failed: {}", name, e);
            return Duration::ZERO;
        }
    };
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", result.reachable_count(), duration);
    println!(
        "  - {} pushes, {} stale pops ({:.1}% of pops)",
        stats.pushes,
        stats.stale_pops,
        100.0 * stats.stale_pops as f64 / stats.pops.max(1) as f64
    );

    duration
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: lazy-deletion Dijkstra");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = match generators::generate_random(size, edge_factor, 100, size as u64) {
            Ok(graph) => graph,
            Err(e) => {
                eprintln!("Failed to generate graph: {}", e);
                continue;
            }
        };
        println!(
            "Graph has {} vertices, {} edges, max out-degree {}",
            graph.vertex_count(),
            graph.edge_count(),
            graph.max_out_degree()
        );

        let presized = Dijkstra::new().with_queue_capacity(graph.edge_count());
        let default_time = benchmark_dijkstra("Dijkstra", &dijkstra, &graph, 0);
        let presized_time = benchmark_dijkstra("Dijkstra (presized queue)", &presized, &graph, 0);

        results.push((size, default_time, presized_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15}", "Vertices", "Default (ms)", "Presized (ms)");
    println!("-----------------------------------------------------");

    for (size, default_time, presized_time) in &results {
        println!(
            "{:<10} | {:<15.2} | {:<15.2}",
            size,
            default_time.as_secs_f64() * 1000.0,
            presized_time.as_secs_f64() * 1000.0
        );
    }
}
