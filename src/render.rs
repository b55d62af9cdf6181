use crate::tally::{TagCounts, Tally};
use anyhow::Result;
use json::JsonValue;
use std::{io::Write, str::FromStr};
use thiserror::Error;

/// How a finished tally gets written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown output format {0:?} (expected text, csv or json)")]
pub struct UnknownFormat(String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownFormat(s.to_owned())),
        }
    }
}

pub fn write(tally: &Tally, format: OutputFormat, writer: impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(tally, writer),
        OutputFormat::Csv => write_csv(tally, writer),
        OutputFormat::Json => write_json(tally, writer),
    }
}

/// The group count, then each group as `<g> <l> :` followed by one tab-indented line per node.
pub fn write_text(tally: &Tally, mut writer: impl Write) -> Result<()> {
    writeln!(writer, "{}", tally.len())?;
    for (key, nodes) in tally.groups() {
        writeln!(writer, "{} :", key)?;
        for (node, tags) in nodes {
            writeln!(writer, "\tnode {} : {}", node, format_tags(tags))?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Render a tag mapping as `{tag1: 3, tag2: 1}`.
pub fn format_tags(tags: &TagCounts) -> String {
    let entries: Vec<String> = tags.iter().map(|(tag, count)| format!("{}: {}", tag, count)).collect();
    format!("{{{}}}", entries.join(", "))
}

/// One row per leaf count, under a `g,l,node,tag,count` header.
pub fn write_csv(tally: &Tally, writer: impl Write) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["g", "l", "node", "tag", "count"])?;
    for (key, nodes) in tally.groups() {
        for (node, tags) in nodes {
            for (tag, count) in tags {
                let count = count.to_string();
                csv.write_record([key.g.as_str(), key.l.as_str(), node.as_str(), tag.as_str(), count.as_str()])?;
            }
        }
    }
    csv.flush()?;
    Ok(())
}

pub fn to_json(tally: &Tally) -> Result<JsonValue> {
    let mut groups = JsonValue::new_array();
    for (key, nodes) in tally.groups() {
        let mut nodes_json = JsonValue::new_object();
        for (node, tags) in nodes {
            let mut tags_json = JsonValue::new_object();
            for (tag, count) in tags {
                tags_json.insert(tag, *count)?;
            }
            nodes_json.insert(node, tags_json)?;
        }
        let mut group = JsonValue::new_object();
        group.insert("g", key.g.as_str())?;
        group.insert("l", key.l.as_str())?;
        group.insert("nodes", nodes_json)?;
        groups.push(group)?;
    }
    Ok(groups)
}

pub fn write_json(tally: &Tally, mut writer: impl Write) -> Result<()> {
    to_json(tally)?.write_pretty(&mut writer, 4)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
