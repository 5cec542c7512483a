//! Reference database indexing.
//!
//! The reference database is a FASTA file of 16S rRNA sequences whose headers
//! carry an identifier followed by a binomial species name:
//!
//! ```text
//! >NR_024570.1 Escherichia coli strain U 5/41 16S ribosomal RNA, partial sequence
//! AGTTTGATCATGGCTCAGATTGAACGCTGGCGGCAGGCCTAACACATGCAAGTCGAACGG...
//! ```
//!
//! Only header lines are read. [`ReferenceIndex`] maps each identifier to its
//! two-word species name (`Escherichia coli` above) and is what BLAST hits are
//! resolved against.

pub mod store;

pub use store::{CatalogError, ReferenceEntry, ReferenceIndex};
