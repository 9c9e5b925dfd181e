use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::PrimInt;
use std::fmt::Debug;

/// An outgoing edge stored in the adjacency arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    /// Target vertex index
    pub destination: usize,
    /// Non-negative cost of traversing the edge
    pub weight: W,
}

/// A directed graph implementation using an indexed adjacency arena
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: PrimInt + Debug,
{
    /// Outgoing edges for each vertex: adjacency[vertex_id] -> [edge]
    adjacency: Vec<Vec<Edge<W>>>,

    /// Total number of stored edges
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: PrimInt + Debug,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        Self::with_vertices(0)
    }

    /// Creates a new directed graph with `vertices` vertices and no edges
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Like [`DirectedGraph::with_vertices`], but returns
    /// `Error::OutOfMemory` instead of aborting when the vertex table cannot
    /// be allocated. Use this for vertex counts read from untrusted input.
    pub fn try_with_vertices(vertices: usize) -> Result<Self> {
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertices)
            .map_err(|_| Error::OutOfMemory)?;
        adjacency.resize_with(vertices, Vec::new);

        Ok(DirectedGraph {
            adjacency,
            edge_count: 0,
        })
    }

    /// Builds a graph from `(from, to, weight)` triples, stopping at the
    /// first invalid edge
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::try_with_vertices(vertices)?;
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Returns the outgoing edges of `vertex` as a slice, empty for unknown
    /// vertices
    pub fn edges_from(&self, vertex: usize) -> &[Edge<W>] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the largest out-degree in the graph
    pub fn max_out_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: PrimInt + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: PrimInt + Debug,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(
            self.edges_from(vertex)
                .iter()
                .map(|edge| (edge.destination, edge.weight)),
        )
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.adjacency.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edges_from(from).iter().any(|edge| edge.destination == to)
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.edges_from(from)
            .iter()
            .filter(|edge| edge.destination == to)
            .map(|edge| edge.weight)
            .min()
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: PrimInt + Debug,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) {
            return Err(Error::InvalidVertex(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight { from, to });
        }

        // Parallel edges are kept; the relaxation loop picks the cheapest
        self.adjacency[from].push(Edge {
            destination: to,
            weight,
        });
        self.edge_count += 1;
        Ok(())
    }
}
