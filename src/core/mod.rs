//! Core data types for species identification.
//!
//! - [`Hit`]: One tabular BLAST hit between a reference 16S sequence and an input file
//! - [`BestMatch`]: The ordered, de-duplicated species selected for one input file
//! - [`MatchType`]: Whether a call is unique, ambiguous, or unavailable

pub mod hit;
pub mod types;

pub use hit::Hit;
pub use types::{BestMatch, MatchType};
