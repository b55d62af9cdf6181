use anyhow::Result;
use std::{io::stdout, path::PathBuf};
use structopt::StructOpt;
use tally::OutputFormat;

/// Count tags per node for every (g, l) group in a stats file.
#[derive(StructOpt)]
struct Options {
    /// Stats file, seven whitespace-separated tokens per line
    #[structopt(parse(from_os_str), env = "STATS_FILE", default_value = "stats.txt")]
    input: PathBuf,
    /// Output format: text, csv or json
    #[structopt(short, long, default_value = "text")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    // Load from .env file if it is present
    dotenv::dotenv().ok();
    // Initialize logging
    env_logger::init();
    // Get command line arguments
    let options = Options::from_args();
    // Read the whole file before printing anything
    tally::run(&options.input, options.format, stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = Options::from_iter_safe(["stats-tally"]).unwrap();
        assert_eq!(options.format, OutputFormat::Text);
        if std::env::var_os("STATS_FILE").is_none() {
            assert_eq!(options.input, PathBuf::from(tally::DEFAULT_STATS_FILE));
        }
    }

    #[test]
    fn test_explicit_options() {
        let options = Options::from_iter_safe(["stats-tally", "--format", "csv", "other.txt"]).unwrap();
        assert_eq!(options.format, OutputFormat::Csv);
        assert_eq!(options.input, PathBuf::from("other.txt"));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Options::from_iter_safe(["stats-tally", "-f", "xml"]).is_err());
    }
}
