use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use tracing::{debug, error, info, warn};

use crate::alignment::{self, default_threads, Aligner, BlastConfig, Blastn};
use crate::catalog::ReferenceIndex;
use crate::cli::OutputFormat;
use crate::core::{BestMatch, Hit};
use crate::matching::MatchingEngine;
use crate::parsing::blast::parse_hits;
use crate::parsing::fasta::summarize_fasta_file;
use crate::report::{row_fields, summary_line, FileReport, ReportTable};
use crate::utils::time::format_elapsed;

#[derive(Args)]
pub struct IdentifyArgs {
    /// Input FASTA file(s)
    #[arg(short, long, required = true, num_args = 1..)]
    pub input: Vec<PathBuf>,

    /// Output table; rows are appended if it already exists
    #[arg(short, long, default_value = "BS_results.txt")]
    pub output: PathBuf,

    /// FASTA file containing the 16S rRNA reference sequences
    #[arg(short, long, default_value = "reference_database")]
    pub refs: PathBuf,

    /// Threads to use for BLAST searches
    #[arg(short, long, default_value_t = default_threads(), value_parser = parse_thread_count)]
    pub threads: usize,
}

fn parse_thread_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("thread count must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid thread count '{s}': {e}")),
    }
}

/// Execute the identification pipeline over every input file
///
/// # Errors
///
/// Returns an error if a BLAST+ tool is missing, the reference database or
/// output table cannot be opened, or any input file failed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: IdentifyArgs, format: OutputFormat) -> anyhow::Result<()> {
    let start = Instant::now();

    let tools = alignment::check_dependencies()?;

    let index = ReferenceIndex::load_from_file(&args.refs).with_context(|| {
        format!("Cannot load reference database '{}'", args.refs.display())
    })?;
    debug!(
        "Loaded {} reference sequences from {}",
        index.len(),
        args.refs.display()
    );
    if index.is_empty() {
        warn!(
            "Reference database '{}' contains no sequences",
            args.refs.display()
        );
    }

    let table = ReportTable::open_or_create(&args.output)
        .with_context(|| format!("Cannot create output table '{}'", args.output.display()))?;

    let config = BlastConfig {
        threads: args.threads,
        ..BlastConfig::default()
    };
    let aligner = Blastn::new(tools.blastn, &args.refs, config)?;
    let engine = MatchingEngine::new(&index);

    let mut failed = 0usize;
    for input in &args.input {
        let name = input.display().to_string();
        match identify_file(&aligner, &engine, input) {
            Ok(best) => write_report(&table, &name, &best, format)?,
            Err(e) => {
                error!("{name}: {e:#}");
                failed += 1;
            }
        }
    }

    let elapsed = format_elapsed(start.elapsed());
    match format {
        OutputFormat::Text => println!("Total time consumed : {elapsed}"),
        OutputFormat::Json | OutputFormat::Tsv => eprintln!("Total time consumed : {elapsed}"),
    }
    info!(
        "Processed {} input file(s), results in {}",
        args.input.len() - failed,
        table.path().display()
    );

    if failed > 0 {
        anyhow::bail!(
            "{failed} of {} input file(s) could not be processed",
            args.input.len()
        );
    }

    Ok(())
}

/// Align one input file, parse the hits and select its best-supported species.
///
/// An input with no hits is not an error: it yields an empty [`BestMatch`].
///
/// # Errors
///
/// Returns an error if the aligner fails, a hit line is malformed, or a
/// selected hit is missing from the reference index.
pub fn identify_file<A: Aligner>(
    aligner: &A,
    engine: &MatchingEngine<'_>,
    input: &Path,
) -> anyhow::Result<BestMatch> {
    // Informational only: blastn still runs on inputs noodles cannot parse
    match summarize_fasta_file(input) {
        Ok(summary) => debug!(
            "{}: {} sequence(s), {} bp",
            input.display(),
            summary.records,
            summary.bases
        ),
        Err(e) => warn!("Cannot summarize input '{}': {e}", input.display()),
    }

    let output = aligner.align(input)?;
    let hits: Vec<Hit> = parse_hits(&output)
        .collect::<Result<_, _>>()
        .context("Unexpected BLAST output")?;

    if hits.is_empty() {
        warn!(
            "The sequence file {} has no blast hit, please check the fasta file",
            input.display()
        );
    } else {
        debug!("{}: {} BLAST hit(s)", input.display(), hits.len());
    }

    Ok(engine.find_best_matches(&hits)?)
}

fn write_report(
    table: &ReportTable,
    input: &str,
    best: &BestMatch,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let row = row_fields(input, best);

    match format {
        OutputFormat::Text => println!("{}", summary_line(input, best)),
        OutputFormat::Tsv => println!("{}", row.join("\t")),
        OutputFormat::Json => println!("{}", serde_json::to_string(&FileReport::new(input, best))?),
    }

    table
        .append(&row)
        .with_context(|| format!("Cannot write to output table '{}'", table.path().display()))
}
