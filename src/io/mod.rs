//! Collaborators around the search: loading edge lists, naming vertices
//! and presenting results.

pub mod edge_list;
pub mod labels;
pub mod report;

pub use edge_list::{EdgeList, EdgeListReader};
pub use labels::VertexLabels;
pub use report::{Report, ReportDocument, ReportRow};
