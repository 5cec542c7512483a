//! Inspection of input FASTA files using noodles.
//!
//! Input files are handed to BLAST as-is. The record and base counts are only
//! logged, so a file noodles cannot parse is still aligned.

use std::io::{BufRead, BufReader};
use std::path::Path;

use noodles::fasta;

use crate::parsing::blast::ParseError;

/// Record count and total bases of a FASTA file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequenceSummary {
    pub records: usize,
    pub bases: u64,
}

/// Count the records and bases of a FASTA file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if it is not valid FASTA or holds no records.
pub fn summarize_fasta_file(path: &Path) -> Result<SequenceSummary, ParseError> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);
    let mut fasta_reader = fasta::io::Reader::new(reader);

    summarize_fasta_reader(&mut fasta_reader)
}

/// Summarize records from a noodles FASTA reader
fn summarize_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<SequenceSummary, ParseError> {
    let mut summary = SequenceSummary::default();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::InvalidFormat(format!("Failed to parse FASTA record: {e}")))?;

        summary.records += 1;
        summary.bases += record.sequence().len() as u64;
    }

    if summary.records == 0 {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(summary)
}
