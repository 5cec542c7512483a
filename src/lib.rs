//! # bac-species
//!
//! A library for identifying bacterial species from 16S rRNA sequences.
//!
//! Each input FASTA file is aligned with BLAST+ against a curated database of
//! 16S reference sequences. The resulting hits are scanned in order and the
//! species whose hits match or improve on the best identity and coverage seen
//! so far are kept. One species is a confident call, several species are
//! reported as an ambiguous call, and none means the species is unavailable.
//!
//! ## Features
//!
//! - **Reference indexing**: Maps reference identifiers to binomial species names from FASTA headers
//! - **Strict hit parsing**: Malformed BLAST records abort the affected file instead of being skipped
//! - **Ambiguity reporting**: Ties between species are surfaced, never broken silently
//! - **Append-only results**: One row per input in a tab-separated table kept across runs
//!
//! ## Example
//!
//! ```rust
//! use bac_species::{BestMatch, Hit, MatchingEngine, ReferenceIndex};
//! use bac_species::report::{row_fields, summary_line};
//!
//! let reference = ">A1 Escherichia coli strain K-12\nACGT\n>B1 Shigella flexneri 2a\nACGT\n";
//! let index = ReferenceIndex::from_reader(reference.as_bytes()).unwrap();
//!
//! let hits = vec![
//!     Hit::new("A1", 1450, 99.8, 100.0),
//!     Hit::new("B1", 1450, 99.8, 100.0),
//! ];
//! let best: BestMatch = MatchingEngine::new(&index).find_best_matches(&hits).unwrap();
//!
//! assert_eq!(
//!     summary_line("isolate.fa", &best),
//!     "isolate.fa: Multiple results, please check the output file"
//! );
//! assert_eq!(
//!     row_fields("isolate.fa", &best),
//!     vec!["isolate.fa", "Escherichia coli", "Multiple results", "Shigella flexneri"]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`alignment`]: BLAST+ dependency checks and `blastn` invocation
//! - [`catalog`]: Reference database indexing
//! - [`core`]: Core data types for hits and results
//! - [`matching`]: Best-match selection
//! - [`parsing`]: Parsers for BLAST tabular output and FASTA inputs
//! - [`report`]: Summary lines and the results table
//! - [`cli`]: Command-line interface implementation

pub mod alignment;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod report;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::ReferenceIndex;
pub use core::hit::Hit;
pub use core::types::*;
pub use matching::engine::{MatchingConfig, MatchingEngine};
