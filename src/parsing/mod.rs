//! Parsers for the files and tool output the pipeline consumes.
//!
//! - **BLAST tabular output**: Split `-outfmt 6` text into [`Hit`](crate::core::Hit) records
//! - **FASTA inputs**: Count the records and bases of an input file for logging
//!
//! ## Example
//!
//! ```rust
//! use bac_species::parsing::blast::parse_hits;
//!
//! let qseq = "A".repeat(1500);
//! let output = format!(
//!     "NR_024570.1\tcontig_1\t1\t1500\t10\t1509\t0.0\t2700\t1500\t99.9\t1500\t{qseq}\n"
//! );
//! let hits: Vec<_> = parse_hits(&output).collect::<Result<_, _>>().unwrap();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].alignment_length, 1500);
//! ```

pub mod blast;
pub mod fasta;
