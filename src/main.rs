use bac_species::cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("bac_species=debug,info")
    } else {
        EnvFilter::new("bac_species=warn")
    };

    // Logs go to stderr; stdout carries the per-file results
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::identify::run(cli.identify, cli.format)
}
