use thiserror::Error;

/// Number of whitespace-separated tokens on every line of a stats file.
pub const TOKENS_PER_LINE: usize = 7;

/// One line of a stats file: `<node> _ <tag> _ <g> _ <l>`.
///
/// The tokens at positions 1, 3 and 5 are placeholders and are not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub node: String,
    pub tag: String,
    pub g: String,
    pub l: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line_number}: expected {} tokens, found {found}: {line:?}", TOKENS_PER_LINE)]
pub struct ParseError {
    pub line_number: usize,
    pub found: usize,
    pub line: String,
}

impl Record {
    /// Split a line on runs of whitespace. Anything other than exactly seven tokens is an error,
    /// including a blank line.
    pub fn parse(line: &str, line_number: usize) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens[..] {
            [node, _, tag, _, g, _, l] => Ok(Self {
                node: node.to_owned(),
                tag: tag.to_owned(),
                g: g.to_owned(),
                l: l.to_owned(),
            }),
            _ => Err(ParseError {
                line_number,
                found: tokens.len(),
                line: line.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_picks_positional_fields() {
        let record = Record::parse("n1 x tagA y g1 z l1", 1).unwrap();
        assert_eq!(
            record,
            Record {
                node: String::from("n1"),
                tag: String::from("tagA"),
                g: String::from("g1"),
                l: String::from("l1"),
            }
        );
    }

    #[test]
    fn test_parse_collapses_whitespace_runs() {
        let record = Record::parse("  n1\t\tx tagA   y g1 z l1  \r", 3).unwrap();
        assert_eq!(record.node, "n1");
        assert_eq!(record.tag, "tagA");
        assert_eq!(record.l, "l1");
    }

    #[test]
    fn test_parse_rejects_short_line() {
        let error = Record::parse("n1 x tagA y g1 z", 4).unwrap_err();
        assert_eq!(error.line_number, 4);
        assert_eq!(error.found, 6);
        assert_eq!(error.to_string(), r#"line 4: expected 7 tokens, found 6: "n1 x tagA y g1 z""#);
    }

    #[test]
    fn test_parse_rejects_long_and_blank_lines() {
        assert_eq!(Record::parse("n1 x tagA y g1 z l1 extra", 1).unwrap_err().found, 8);
        assert_eq!(Record::parse("", 2).unwrap_err().found, 0);
        assert_eq!(Record::parse("   \t", 3).unwrap_err().found, 0);
    }
}
