//! Parser for BLAST tabular (`-outfmt 6`) output.
//!
//! The aligner is asked for twelve columns in this order:
//!
//! | Index | Column | Used |
//! |-------|--------|------|
//! | 0  | qseqid   | Yes |
//! | 1  | sseqid   | No  |
//! | 2  | qstart   | No  |
//! | 3  | qend     | No  |
//! | 4  | sstart   | No  |
//! | 5  | send     | No  |
//! | 6  | evalue   | No  |
//! | 7  | bitscore | No  |
//! | 8  | length   | Yes |
//! | 9  | pident   | Yes |
//! | 10 | qlen     | Yes |
//! | 11 | qseq     | Yes (length only) |

use thiserror::Error;

use crate::core::hit::Hit;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Malformed hit on line {line}: expected 12 tab-separated fields, found {fields}")]
    MalformedRecord { line: usize, fields: usize },

    #[error("Invalid {field} on line {line}: '{value}'")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
}

/// Output format string passed to `-outfmt`
pub const BLAST_OUTFMT: &str = "6 qseqid sseqid qstart qend sstart send evalue bitscore length pident qlen qseq";

/// Number of columns requested in [`BLAST_OUTFMT`]
pub const BLAST_FIELD_COUNT: usize = 12;

const COL_QSEQID: usize = 0;
const COL_LENGTH: usize = 8;
const COL_PIDENT: usize = 9;
const COL_QLEN: usize = 10;
const COL_QSEQ: usize = 11;

/// Iterator over newline-terminated lines.
///
/// A trailing fragment with no terminating `\n` is never yielded: BLAST always
/// ends its output with a newline when there are hits, so anything after the
/// last newline is not a complete record.
#[derive(Debug, Clone)]
pub struct TerminatedLines<'a> {
    remaining: &'a str,
}

impl<'a> TerminatedLines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { remaining: text }
    }
}

impl<'a> Iterator for TerminatedLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.remaining.find('\n')?;
        let line = &self.remaining[..end];
        self.remaining = &self.remaining[end + 1..];
        Some(line)
    }
}

/// Parse one tabular hit line. `line_num` is 1-based and only used in errors.
///
/// # Errors
///
/// Returns `ParseError::MalformedRecord` if the line has fewer than
/// [`BLAST_FIELD_COUNT`] fields, or `ParseError::InvalidField` if a numeric
/// column cannot be parsed or the query length is zero.
pub fn parse_hit_line(line: &str, line_num: usize) -> Result<Hit, ParseError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < BLAST_FIELD_COUNT {
        return Err(ParseError::MalformedRecord {
            line: line_num,
            fields: fields.len(),
        });
    }

    let invalid = |field: &'static str, value: &str| ParseError::InvalidField {
        line: line_num,
        field,
        value: value.to_string(),
    };

    let alignment_length: u64 = fields[COL_LENGTH]
        .parse()
        .map_err(|_| invalid("alignment length", fields[COL_LENGTH]))?;
    let percent_identity: f64 = fields[COL_PIDENT]
        .parse()
        .map_err(|_| invalid("percent identity", fields[COL_PIDENT]))?;
    let query_len: u64 = fields[COL_QLEN]
        .parse()
        .ok()
        .filter(|&len| len > 0)
        .ok_or_else(|| invalid("query length", fields[COL_QLEN]))?;

    Ok(Hit::from_alignment(
        fields[COL_QSEQID],
        alignment_length,
        percent_identity,
        query_len,
        fields[COL_QSEQ].len() as u64,
    ))
}

/// Lazily parse raw BLAST tabular output into hits, in output order.
pub fn parse_hits(text: &str) -> impl Iterator<Item = Result<Hit, ParseError>> + '_ {
    TerminatedLines::new(text)
        .enumerate()
        .map(|(i, line)| parse_hit_line(line, i + 1))
}
