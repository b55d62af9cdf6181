use crate::record::Record;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::{debug, info};
use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Tag -> count for a single node, in first-seen tag order.
pub type TagCounts = IndexMap<String, u64>;

/// Node -> tag counts for a single group, in first-seen node order.
pub type NodeTally = IndexMap<String, TagCounts>;

/// The `(g, l)` pair records are bucketed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub g: String,
    pub l: String,
}

impl GroupKey {
    pub fn new(g: impl Into<String>, l: impl Into<String>) -> Self {
        Self { g: g.into(), l: l.into() }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.g, self.l)
    }
}

/// Nested frequency count: group key -> node -> tag -> count.
///
/// Every level keeps first-seen insertion order, which is also the order everything is rendered in.
/// Counts are only created by incrementing, so every stored count is at least 1.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    groups: IndexMap<GroupKey, NodeTally>,
    records: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one record.
    pub fn add(&mut self, record: Record) {
        let Record { node, tag, g, l } = record;
        debug!("node {} tag {} in group {} {}", node, tag, g, l);
        let nodes = self.groups.entry(GroupKey { g, l }).or_default();
        let tags = nodes.entry(node).or_default();
        *tags.entry(tag).or_insert(0) += 1;
        self.records += 1;
    }

    /// Tally every line of `reader`. The first malformed line aborts the whole pass and the partial
    /// tally is dropped.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut tally = Self::new();
        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.with_context(|| format!("failed to read line {}", line_number))?;
            tally.add(Record::parse(&line, line_number)?);
        }
        Ok(tally)
    }

    /// Open the file at `path` and tally it. The file is closed before this returns.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("reading {}", path.display());
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let tally =
            Self::from_reader(BufReader::new(file)).with_context(|| format!("failed to tally {}", path.display()))?;
        info!("{}: {} records in {} groups", path.display(), tally.records, tally.len());
        Ok(tally)
    }

    /// Number of distinct group keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of lines that went into this tally.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Groups in first-seen order.
    pub fn groups(&self) -> impl Iterator<Item = (&GroupKey, &NodeTally)> {
        self.groups.iter()
    }

    pub fn nodes(&self, key: &GroupKey) -> Option<&NodeTally> {
        self.groups.get(key)
    }

    /// How many lines carried exactly this `(g, l, node, tag)` combination. Zero if none did.
    pub fn count(&self, g: &str, l: &str, node: &str, tag: &str) -> u64 {
        self.groups
            .get(&GroupKey::new(g, l))
            .and_then(|nodes| nodes.get(node))
            .and_then(|tags| tags.get(tag))
            .copied()
            .unwrap_or(0)
    }
}
