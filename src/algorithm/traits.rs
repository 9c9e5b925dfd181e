use std::fmt::Debug;
use num_traits::PrimInt;
use serde::Serialize;
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: PrimInt + Debug,
{
    /// Distances from source to each vertex; `None` marks an unreached vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: PrimInt + Debug,
{
    /// Distance from the source to `vertex`, `None` if unreached or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Vertex preceding `vertex` on its shortest path
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reached from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Number of vertices covered by the result
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Counters describing a single shortest path run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Frontier entries inserted into the priority queue
    pub pushes: usize,
    /// Frontier entries removed from the priority queue
    pub pops: usize,
    /// Removed entries discarded because a shorter distance was already known
    pub stale_pops: usize,
    /// Successful edge relaxations
    pub relaxations: usize,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if !result.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;

        // Build path in reverse order
        while current != result.source {
            // A valid tree never needs more hops than there are vertices
            if path.len() > result.predecessors.len() {
                log::warn!("Predecessor chain from {} does not reach source {}", target, result.source);
                return None;
            }

            match result.predecessor(current) {
                Some(pred) => {
                    path.push(pred);
                    current = pred;
                }
                None => {
                    log::warn!("Vertex {} has a distance but no predecessor", current);
                    return None;
                }
            }
        }

        path.reverse();
        Some(path)
    }
}
