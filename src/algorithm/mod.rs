pub mod traits;
pub mod dijkstra;

pub use traits::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
