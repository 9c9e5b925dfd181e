use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Two-way mapping between human readable vertex names and vertex indices.
///
/// Supplied by whoever loads the graph; the search itself only ever sees
/// indices.
#[derive(Debug, Clone, Default)]
pub struct VertexLabels {
    by_name: HashMap<String, usize>,
    by_index: BTreeMap<usize, String>,
}

impl VertexLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(name, index)` pairs
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let mut labels = Self::new();
        for (name, index) in pairs {
            labels.insert(name, index)?;
        }
        Ok(labels)
    }

    /// Parses one `NAME INDEX` pair per line. Blank lines and lines starting
    /// with `#` are skipped.
    pub fn parse(input: &str) -> Result<Self> {
        let mut labels = Self::new();

        for (i, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let (Some(name), Some(index), None) = (fields.next(), fields.next(), fields.next()) else {
                return Err(Error::Parse {
                    line: i + 1,
                    message: format!("expected `NAME INDEX`, got `{}`", line),
                });
            };
            let index = index.parse().map_err(|_| Error::Parse {
                line: i + 1,
                message: format!("invalid vertex index `{}`", index),
            })?;

            labels.insert(name, index)?;
        }

        Ok(labels)
    }

    pub fn read_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Registers `name` for `index`. A name or an index can only be
    /// labelled once.
    pub fn insert<S: Into<String>>(&mut self, name: S, index: usize) -> Result<()> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(Error::DuplicateLabel(name));
        }
        if let Some(existing) = self.by_index.get(&index) {
            return Err(Error::DuplicateLabel(existing.clone()));
        }

        self.by_index.insert(index, name.clone());
        self.by_name.insert(name, index);
        Ok(())
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.by_index.get(&index).map(String::as_str)
    }

    /// Resolves a label, falling back to a plain numeric index
    pub fn resolve(&self, token: &str) -> Result<usize> {
        if let Some(index) = self.index_of(token) {
            return Ok(index);
        }
        token
            .parse()
            .map_err(|_| Error::UnknownLabel(token.to_string()))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
