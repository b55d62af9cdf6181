use anyhow::Result;
use std::{io::Write, path::Path};

pub mod record;
pub mod render;
pub mod tally;

pub use record::{ParseError, Record};
pub use render::OutputFormat;
pub use tally::{GroupKey, Tally};

/// Default input file, relative to the working directory.
pub const DEFAULT_STATS_FILE: &str = "stats.txt";

/// Tally the whole file at `path`, then render it to `writer`.
/// Nothing is written unless every line of the file parsed.
pub fn run(path: impl AsRef<Path>, format: OutputFormat, writer: impl Write) -> Result<()> {
    let tally = Tally::from_path(path)?;
    render::write(&tally, format, writer)
}
