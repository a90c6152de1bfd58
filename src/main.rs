//! Eipload CLI - Regenerate the site data tables from catalog exports
//!
//! # Commands
//!
//! ```bash
//! eipload print-items          # EiP.csv -> items_print.csv
//! eipload print-metadata       # EiP.csv -> metadata_elements_print.csv
//! eipload secondary-metadata   # EiP-secondary.csv -> metadata_elements_print.csv
//! eipload transcriptions       # EiP.csv -> paratext_transcriptions.csv
//! eipload manuscript-items     # EiP-manuscripts.csv -> items_manuscript.csv
//! eipload list                 # Show every job with its paths
//! ```
//!
//! Each job takes no arguments: paths are fixed, outputs are appended to.
//! On success the job prints its one-line summary to stdout; on failure it
//! prints the error to stdout and exits non-zero.

use clap::{Parser, Subcommand};
use eipload::{jobs, runner, JobError, JobResult, JobSpec};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eipload")]
#[command(about = "Regenerate Euclid in Print data tables from catalog exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// EiP.csv -> items_print.csv
    PrintItems,

    /// EiP.csv -> metadata_elements_print.csv
    PrintMetadata,

    /// EiP-secondary.csv -> metadata_elements_print.csv (no header)
    SecondaryMetadata,

    /// EiP.csv -> paratext_transcriptions.csv
    Transcriptions,

    /// EiP-manuscripts.csv -> items_manuscript.csv
    ManuscriptItems,

    /// Show every job with its input and output paths
    List,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::PrintItems => cmd_run(jobs::print_items()),
        Commands::PrintMetadata => cmd_run(jobs::print_metadata()),
        Commands::SecondaryMetadata => cmd_run(jobs::secondary_metadata()),
        Commands::Transcriptions => cmd_run(jobs::transcriptions()),
        Commands::ManuscriptItems => cmd_run(jobs::manuscript_items()),
        Commands::List => cmd_list(),
    };

    if let Err(e) = result {
        // Diagnostics go to stdout, same as the summary line.
        match e {
            JobError::InputMissing { .. } => println!("Error: {}", e),
            other => println!("Error processing file: {}", other),
        }
        std::process::exit(1);
    }
}

fn cmd_run(job: JobSpec) -> JobResult<()> {
    let report = runner::run(&job)?;
    println!("{}", report.summary());
    Ok(())
}

fn cmd_list() -> JobResult<()> {
    for job in jobs::all() {
        println!(
            "{}: {} -> {}{}",
            job.name,
            job.input.display(),
            job.output.display(),
            if job.write_header { "" } else { " (no header)" }
        );
        println!(
            "    {} columns from {} source fields",
            job.table.destinations().len(),
            job.table.source_columns().len()
        );
    }
    Ok(())
}
