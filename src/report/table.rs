use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::types::{BestMatch, MatchType};

/// Column names of the output table
pub const TABLE_HEADER: [&str; 4] = ["Sequence", "Best_match", "Problems", "Extra informations"];

/// Placeholder species when no hit was selected
pub const NO_MATCH_SPECIES: &str = "NA";

/// Build the table row for one input file.
///
/// - no match: `[input, NA, Unavailable]`
/// - unique: `[input, species]`
/// - multiple: `[input, first, Multiple results, other species...]`
pub fn row_fields(input: &str, best: &BestMatch) -> Vec<String> {
    match best.match_type() {
        MatchType::NoMatch => vec![
            input.to_string(),
            NO_MATCH_SPECIES.to_string(),
            MatchType::NoMatch.to_string(),
        ],
        MatchType::Unique => vec![input.to_string(), best.species[0].clone()],
        MatchType::Multiple => {
            let mut row = Vec::with_capacity(best.species.len() + 2);
            row.push(input.to_string());
            row.push(best.species[0].clone());
            row.push(MatchType::Multiple.to_string());
            row.extend(best.species[1..].iter().cloned());
            row
        }
    }
}

/// Append-only tab-separated results table.
///
/// The header is written only when the file is created. Each row is appended
/// by reopening the file, so no handle is held between input files.
#[derive(Debug, Clone)]
pub struct ReportTable {
    path: PathBuf,
}

impl ReportTable {
    /// Open the table at `path`, creating it with a header if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be created.
    pub fn open_or_create(path: &Path) -> io::Result<Self> {
        if !path.is_file() {
            let mut file = File::create(path)?;
            writeln!(file, "{}", TABLE_HEADER.join("\t"))?;
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be opened or written.
    pub fn append(&self, fields: &[String]) -> io::Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "{}", fields.join("\t"))
    }
}
