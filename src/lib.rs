//! Lazy SSSP - binary-heap driven Dijkstra for integer-weighted directed graphs
//!
//! The crate pairs an array-backed binary min-heap with a label-correcting
//! Dijkstra loop. The heap has no decrease-key operation, so improved
//! distances are re-inserted and outdated frontier entries are discarded
//! when they reach the root (lazy deletion).
//!
//! Edge weights are any primitive integer type and must be non-negative.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
pub mod io;

pub use algorithm::{dijkstra::Dijkstra, SearchStats, ShortestPathAlgorithm, ShortestPathResult};
pub use data_structures::PriorityQueue;
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use io::{EdgeList, EdgeListReader, Report, VertexLabels};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Out of memory while growing the priority queue")]
    OutOfMemory,

    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative edge weight on edge from {from} to {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Distance to vertex {0} overflows the weight type")]
    DistanceOverflow(usize),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Input declares {expected} edges but only {found} were read")]
    TruncatedInput { expected: usize, found: usize },

    #[error("Unknown vertex label: {0}")]
    UnknownLabel(String),

    #[error("Duplicate vertex label: {0}")]
    DuplicateLabel(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
