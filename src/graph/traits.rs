use std::fmt::Debug;
use num_traits::PrimInt;

use crate::Result;

/// Trait representing a weighted directed graph over dense vertex indices
pub trait Graph<W>: Debug
where
    W: PrimInt + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex as
    /// `(destination, weight)` pairs
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of the cheapest edge between two vertices if one exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for graphs that accept new edges
pub trait MutableGraph<W>: Graph<W>
where
    W: PrimInt + Debug,
{
    /// Adds a directed edge between vertices with the given weight.
    ///
    /// Fails without modifying the graph if either endpoint is not a vertex
    /// or the weight is negative.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
