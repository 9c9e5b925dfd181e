use std::fmt::Debug;
use log::{debug, trace};
use num_traits::PrimInt;

use crate::graph::Graph;
use crate::algorithm::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::PriorityQueue;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over a binary min-heap frontier.
///
/// The heap cannot lower the priority of an entry in place. Every improved
/// distance is pushed as a fresh `(vertex, distance)` entry instead, and an
/// entry whose distance is larger than the best one recorded for its vertex
/// is discarded when it is popped. This costs O(E) extra entries in the worst
/// case and gives O((V + E) log E) time.
///
/// Edge weights must be non-negative.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    /// Initial number of frontier slots reserved before the run
    queue_capacity: usize,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { queue_capacity: 0 }
    }

    /// Reserve `capacity` frontier entries up front
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Runs the search and also reports queue and relaxation counters
    pub fn compute_with_stats<W, G>(&self, graph: &G, source: usize) -> Result<(ShortestPathResult<W>, SearchStats)>
    where
        W: PrimInt + Debug,
        G: Graph<W>,
    {
        self.run(graph, source, |_, _| {})
    }

    /// Runs the search, calling `observer(vertex, distance)` for the source
    /// and then for every distance improvement, in the order they happen
    pub fn compute_with_observer<W, G, F>(&self, graph: &G, source: usize, observer: F) -> Result<ShortestPathResult<W>>
    where
        W: PrimInt + Debug,
        G: Graph<W>,
        F: FnMut(usize, W),
    {
        self.run(graph, source, observer).map(|(result, _)| result)
    }

    fn run<W, G, F>(&self, graph: &G, source: usize, mut observer: F) -> Result<(ShortestPathResult<W>, SearchStats)>
    where
        W: PrimInt + Debug,
        G: Graph<W>,
        F: FnMut(usize, W),
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        let mut stats = SearchStats::default();

        // Initialize distances and predecessors
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut overflowed = vec![false; n];

        // Distance to source is 0
        distances[source] = Some(W::zero());
        observer(source, W::zero());

        // Payload is the vertex and its distance at insertion time
        let mut queue: PriorityQueue<(usize, W), W> = PriorityQueue::with_capacity(self.queue_capacity);
        queue.insert((source, W::zero()), W::zero())?;
        stats.pushes += 1;

        while !queue.is_empty() {
            let (u, dist_u) = queue.remove_min()?;
            stats.pops += 1;

            // A shorter path to u was recorded after this entry was queued
            if distances[u].map_or(false, |best| dist_u > best) {
                stats.stale_pops += 1;
                trace!("Skipping stale entry for vertex {} at distance {:?}", u, dist_u);
                continue;
            }

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(u) {
                if weight < W::zero() {
                    return Err(Error::NegativeWeight { from: u, to: v });
                }

                // An unrepresentable candidate can never improve v; only an
                // error if v ends up unreached
                let Some(new_dist) = dist_u.checked_add(&weight) else {
                    overflowed[v] = true;
                    trace!("Candidate distance for {} via {} overflows", v, u);
                    continue;
                };

                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.insert((v, new_dist), new_dist)?;
                    stats.relaxations += 1;
                    stats.pushes += 1;
                    observer(v, new_dist);
                    trace!("Relaxed {} -> {} to distance {:?}", u, v, new_dist);
                }
            }
        }

        if let Some(v) = (0..n).find(|&v| overflowed[v] && distances[v].is_none()) {
            return Err(Error::DistanceOverflow(v));
        }

        debug!(
            "Dijkstra from {}: {} pushes, {} pops, {} stale, {} relaxations",
            source, stats.pushes, stats.pops, stats.stale_pops, stats.relaxations
        );

        Ok((
            ShortestPathResult {
                distances,
                predecessors,
                source,
            },
            stats,
        ))
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.run(graph, source, |_, _| {}).map(|(result, _)| result)
    }
}
