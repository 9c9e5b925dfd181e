use std::fmt::{Debug, Display};

use num_traits::PrimInt;
use serde::Serialize;

use crate::algorithm::ShortestPathResult;
use crate::io::VertexLabels;
use crate::Result;

/// One vertex of a shortest path report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow<W> {
    pub vertex: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Absent when the vertex cannot be reached from the source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<W>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessor: Option<usize>,
}

/// Serialized form of a whole report
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument<W> {
    pub source: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_label: Option<String>,
    pub reachable: usize,
    pub vertices: Vec<ReportRow<W>>,
}

/// Presents a [`ShortestPathResult`] as a text table or JSON document
#[derive(Debug, Clone, Copy)]
pub struct Report<'a, W>
where
    W: PrimInt + Debug,
{
    result: &'a ShortestPathResult<W>,
    labels: Option<&'a VertexLabels>,
}

impl<'a, W> Report<'a, W>
where
    W: PrimInt + Debug + Display,
{
    pub fn new(result: &'a ShortestPathResult<W>) -> Self {
        Report { result, labels: None }
    }

    /// Show vertex names next to indices where known
    pub fn with_labels(mut self, labels: &'a VertexLabels) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn rows(&self) -> Vec<ReportRow<W>> {
        (0..self.result.len())
            .map(|vertex| ReportRow {
                vertex,
                label: self.label(vertex),
                distance: self.result.distance(vertex),
                predecessor: self.result.predecessor(vertex),
            })
            .collect()
    }

    /// Renders one line per vertex:
    ///
    /// ```text
    /// End point       || Lowest cost     || Via
    /// 1 (SEA)         || 3               || 0 (PDX)
    /// ```
    pub fn render_table(&self) -> String {
        let mut lines = vec![
            format!("Shortest paths from {}:", self.display_vertex(self.result.source)),
            format!("{:<16}|| {:<16}|| {}", "End point", "Lowest cost", "Via"),
        ];

        for row in self.rows() {
            let distance = row
                .distance
                .map_or_else(|| "unreachable".to_string(), |d| d.to_string());
            let via = row
                .predecessor
                .map_or_else(|| "-".to_string(), |p| self.display_vertex(p));
            lines.push(format!("{:<16}|| {:<16}|| {}", self.display_vertex(row.vertex), distance, via));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn label(&self, vertex: usize) -> Option<String> {
        self.labels
            .and_then(|labels| labels.name_of(vertex))
            .map(str::to_string)
    }

    fn display_vertex(&self, vertex: usize) -> String {
        match self.label(vertex) {
            Some(name) => format!("{} ({})", vertex, name),
            None => vertex.to_string(),
        }
    }
}

impl<'a, W> Report<'a, W>
where
    W: PrimInt + Debug + Display + Serialize,
{
    pub fn document(&self) -> ReportDocument<W> {
        ReportDocument {
            source: self.result.source,
            source_label: self.label(self.result.source),
            reachable: self.result.reachable_count(),
            vertices: self.rows(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document())?)
    }
}
