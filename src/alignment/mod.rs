//! External aligner invocation.
//!
//! Alignment itself is delegated to NCBI BLAST+. For every input file,
//! `blastn` is run once with the reference database as the query and the
//! input as the subject:
//!
//! ```text
//! blastn -query /abs/reference_database -subject /abs/isolate.fa -num_threads 4 \
//!     -evalue 0.00001 -perc_identity 99.5 \
//!     -outfmt "6 qseqid sseqid qstart qend sstart send evalue bitscore length pident qlen qseq"
//! ```
//!
//! The call blocks until BLAST exits; there is no timeout and no retry. Only
//! standard output is parsed, standard error is kept for diagnostics.

pub mod blast;

pub use blast::{
    check_dependencies, default_threads, AlignError, Aligner, BlastConfig, Blastn, ToolPaths,
};
