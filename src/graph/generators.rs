use crate::graph::{DirectedGraph, MutableGraph};
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with about `edge_factor * n` edges.
///
/// Weights are drawn uniformly from `1..=max_weight`; self loops are skipped.
/// The same `seed` always yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, max_weight: i64, seed: u64) -> Result<DirectedGraph<i64>> {
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = DirectedGraph::with_vertices(n);
    if n < 2 {
        return Ok(graph);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1..=max_weight))?;
        }
    }

    Ok(graph)
}

/// Generates a `width x height` grid where every cell is linked to its
/// 4-neighbours in both directions with the same `weight`.
///
/// Cell `(x, y)` is vertex `y * width + x`.
pub fn generate_grid(width: usize, height: usize, weight: i64) -> Result<DirectedGraph<i64>> {
    let mut graph = DirectedGraph::with_vertices(width * height);

    let index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x + 1 < width {
                graph.add_edge(current, index(x + 1, y), weight)?;
                graph.add_edge(index(x + 1, y), current, weight)?;
            }
            if y + 1 < height {
                graph.add_edge(current, index(x, y + 1), weight)?;
                graph.add_edge(index(x, y + 1), current, weight)?;
            }
        }
    }

    Ok(graph)
}
