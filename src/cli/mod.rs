//! Command-line interface for bac-species.
//!
//! ## Usage
//!
//! ```text
//! # Identify the species of two assemblies against the default database
//! bac-species -i isolate_1.fasta isolate_2.fasta
//!
//! # Custom database, output table and thread count
//! bac-species -i isolate.fasta -r 16S_ribosomal_RNA.fasta -o results.tsv -t 8
//!
//! # One JSON object per input on stdout
//! bac-species -i isolate.fasta --format json
//! ```

use clap::Parser;

pub mod identify;

#[derive(Parser)]
#[command(name = "bac-species")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Identify bacterial species from 16S rRNA sequences")]
#[command(
    long_about = "bac-species identifies the most likely bacterial species of each input FASTA file.\n\nThe 16S rRNA reference database is aligned against every input with BLAST+ (blastn). Hits of at least 1000 bp are scanned in order and every species that matches or beats the best identity and coverage seen so far is reported:\n- One species: a confident call\n- Several species: an ambiguous call, all candidates are written to the output table\n- None: Unavailable"
)]
pub struct Cli {
    #[command(flatten)]
    pub identify: identify::IdentifyArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Format of the per-file summary printed to stdout
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["bac-species", "-i", "a.fa", "b.fa"]).unwrap();
        assert_eq!(cli.identify.input.len(), 2);
        assert_eq!(cli.identify.output.to_string_lossy(), "BS_results.txt");
        assert_eq!(cli.identify.refs.to_string_lossy(), "reference_database");
        assert!(cli.identify.threads >= 1 && cli.identify.threads <= 4);
        assert!(!cli.verbose);
        assert!(matches!(cli.format, OutputFormat::Text));
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["bac-species"]).is_err());
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(Cli::try_parse_from(["bac-species", "-i", "a.fa", "-t", "0"]).is_err());
        let cli = Cli::try_parse_from(["bac-species", "-i", "a.fa", "-t", "16"]).unwrap();
        assert_eq!(cli.identify.threads, 16);
    }
}
