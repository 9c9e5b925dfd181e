use std::fmt::Debug;
use std::fs;
use std::io::BufRead;
use std::path::Path;

use log::{debug, warn};
use num_traits::PrimInt;

use crate::graph::DirectedGraph;
use crate::{Error, Result};

/// Vertex count plus the raw `(from, to, weight)` triples of a data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList<W> {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize, W)>,
}

impl<W> EdgeList<W>
where
    W: PrimInt + Debug,
{
    /// Builds the directed graph, rejecting out-of-range endpoints and
    /// negative weights
    pub fn into_graph(self) -> Result<DirectedGraph<W>> {
        DirectedGraph::from_edges(self.vertex_count, self.edges)
    }
}

/// Reader for the whitespace separated edge-list format:
///
/// ```text
/// n_nodes n_edges
/// src dst weight
/// ...            (n_edges triples)
/// ```
///
/// Tokens may be split across lines arbitrarily; line numbers are only used
/// for error messages.
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Fail on missing or extra triples instead of tolerating them
    strict_edge_count: bool,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeListReader {
    pub fn new() -> Self {
        EdgeListReader {
            strict_edge_count: true,
        }
    }

    /// When disabled, a short edge section ends the list early and tokens
    /// after the declared edges are ignored
    pub fn with_strict_edge_count(mut self, strict: bool) -> Self {
        self.strict_edge_count = strict;
        self
    }

    pub fn read_path<W, P>(&self, path: P) -> Result<EdgeList<W>>
    where
        W: PrimInt + Debug,
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path.as_ref())?;
        debug!("Read {} bytes from {}", text.len(), path.as_ref().display());
        self.read_str(&text)
    }

    pub fn read_from<W, R>(&self, mut reader: R) -> Result<EdgeList<W>>
    where
        W: PrimInt + Debug,
        R: BufRead,
    {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.read_str(&text)
    }

    pub fn read_str<W>(&self, input: &str) -> Result<EdgeList<W>>
    where
        W: PrimInt + Debug,
    {
        let last_line = input.lines().count().max(1);
        let mut tokens = input
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |token| (i + 1, token)));

        let vertex_count = match tokens.next() {
            Some((line, token)) => parse_index(line, token, "vertex count")?,
            None => return Err(eof(last_line, "vertex count")),
        };
        let expected = match tokens.next() {
            Some((line, token)) => parse_index(line, token, "edge count")?,
            None => return Err(eof(last_line, "edge count")),
        };

        // The header is untrusted, so cap the up-front allocation
        let mut edges = Vec::with_capacity(expected.min(1 << 16));
        while edges.len() < expected {
            let Some((from, to, weight)) = next_triple::<W, _>(&mut tokens)? else {
                if self.strict_edge_count {
                    return Err(Error::TruncatedInput {
                        expected,
                        found: edges.len(),
                    });
                }
                warn!("Edge list declares {} edges but only {} are present", expected, edges.len());
                break;
            };
            edges.push((from, to, weight));
        }

        if let Some((line, token)) = tokens.next() {
            if self.strict_edge_count {
                return Err(Error::Parse {
                    line,
                    message: format!("unexpected token `{}` after {} declared edges", token, expected),
                });
            }
            warn!("Ignoring trailing input starting on line {}", line);
        }

        debug!("Parsed edge list with {} vertices and {} edges", vertex_count, edges.len());

        Ok(EdgeList {
            vertex_count,
            edges,
        })
    }
}

/// Reads one `src dst weight` triple; `None` if the input ends first
fn next_triple<'a, W, I>(tokens: &mut I) -> Result<Option<(usize, usize, W)>>
where
    W: PrimInt + Debug,
    I: Iterator<Item = (usize, &'a str)>,
{
    let Some((line, token)) = tokens.next() else {
        return Ok(None);
    };
    let from = parse_index(line, token, "source vertex")?;

    let Some((line, token)) = tokens.next() else {
        return Ok(None);
    };
    let to = parse_index(line, token, "destination vertex")?;

    let Some((line, token)) = tokens.next() else {
        return Ok(None);
    };
    let weight = W::from_str_radix(token, 10).map_err(|_| Error::Parse {
        line,
        message: format!("invalid edge weight `{}`", token),
    })?;

    Ok(Some((from, to, weight)))
}

fn parse_index(line: usize, token: &str, what: &str) -> Result<usize> {
    token.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {} `{}`", what, token),
    })
}

fn eof(line: usize, what: &str) -> Error {
    Error::Parse {
        line,
        message: format!("missing {}", what),
    }
}
