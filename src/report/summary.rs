use serde::Serialize;

use crate::core::types::{BestMatch, MatchType};

/// Printed instead of a species name when several species were selected
pub const MULTIPLE_RESULTS_MESSAGE: &str = "Multiple results, please check the output file";

/// One-line human summary for an input file
pub fn summary_line(input: &str, best: &BestMatch) -> String {
    match best.match_type() {
        MatchType::NoMatch => format!("{input}: {}", MatchType::NoMatch),
        MatchType::Unique => format!("{input}: {}", best.species[0]),
        MatchType::Multiple => format!("{input}: {MULTIPLE_RESULTS_MESSAGE}"),
    }
}

/// JSON view of one input file's result
#[derive(Debug, Serialize)]
pub struct FileReport<'a> {
    pub sequence: &'a str,
    pub best_match: Option<&'a str>,
    pub match_type: MatchType,
    pub species: &'a [String],
    pub best_identity: f64,
    pub best_coverage: f64,
}

impl<'a> FileReport<'a> {
    pub fn new(input: &'a str, best: &'a BestMatch) -> Self {
        Self {
            sequence: input,
            best_match: best.primary(),
            match_type: best.match_type(),
            species: &best.species,
            best_identity: best.best_identity,
            best_coverage: best.best_coverage,
        }
    }
}
