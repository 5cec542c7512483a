//! Best-match selection over BLAST hits.
//!
//! [`MatchingEngine`] scans the hits of one input file in the order BLAST
//! reported them and returns the species they support.
//!
//! ## Selection Algorithm
//!
//! 1. **Length filter**: hits shorter than 1000 aligned bases are ignored
//! 2. **Frontier test**: a hit is accepted only if its percent identity *and*
//!    query coverage are both at least the best values accepted so far
//! 3. **Accumulation**: each accepted hit raises the frontier and adds its
//!    species name, unless that name is already present
//!
//! Several species surviving the scan means the call is ambiguous; the names
//! are kept in the order they were first accepted.
//!
//! ## Example
//!
//! ```rust
//! use bac_species::catalog::ReferenceIndex;
//! use bac_species::core::Hit;
//! use bac_species::matching::MatchingEngine;
//!
//! let reference = ">NR_024570.1 Escherichia coli strain U 5/41\nACGT\n";
//! let index = ReferenceIndex::from_reader(reference.as_bytes()).unwrap();
//!
//! let engine = MatchingEngine::new(&index);
//! let best = engine
//!     .find_best_matches(&[Hit::new("NR_024570.1", 1450, 99.9, 100.0)])
//!     .unwrap();
//! assert_eq!(best.species, vec!["Escherichia coli"]);
//! ```

pub mod engine;

pub use engine::{MatchError, MatchingConfig, MatchingEngine};
