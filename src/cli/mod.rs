//! Command-line interface for plasidome.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **run**: Select short contigs, search each with blastn, and classify them
//! - **select**: Only select and stage short contigs as per-contig FASTA files
//! - **classify**: Classify contigs from an existing alignment table
//!
//! ## Usage
//!
//! ```text
//! # Classify every contig of 200 kb or less against NCBI nr
//! plasidome run -i assembly.fasta
//!
//! # Use a local database and a lower length threshold
//! plasidome run -i assembly.fasta -l 50000 --local --db /data/plsdb
//!
//! # Re-classify a previous run's alignment table, JSON to stdout
//! plasidome --format json classify contig_assignments/alignment_results.tsv
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::core::record::SequenceRecord;
use crate::output::layout::DEFAULT_OUT_DIRECTORY;
use crate::parsing;
use crate::selection::DEFAULT_MAX_LENGTH;
use crate::utils::validation::check_fasta_input;

pub mod classify;
pub mod run;
pub mod select;

#[derive(Parser)]
#[command(name = "plasidome")]
#[command(author = "Strong Lab")]
#[command(version)]
#[command(about = "Classify short contigs as chromosome, plasmid, or contamination")]
#[command(
    long_about = "plasidome extracts contigs below a length threshold, aligns each with blastn, and reports whether the hits point to chromosomes or plasmids.\n\nEach contig is labelled chromosome, plasmid, undetermined, contamination (dominated by human hits), or no_significant_hits."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for the summary printed to stdout
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select, align, and classify short contigs
    Run(run::RunArgs),

    /// Select short contigs and stage one FASTA per contig
    Select(select::SelectArgs),

    /// Classify contigs from an existing alignment table
    Classify(classify::ClassifyArgs),
}

/// Input and output options shared by `run` and `select`
#[derive(clap::Args)]
pub struct SelectionArgs {
    /// Assembly FASTA (.fasta, .fa, .fna, .faa, optionally gzipped)
    #[arg(short = 'i', long = "fasta-input", required = true)]
    pub fasta_input: PathBuf,

    /// Contigs of this length or shorter are tested
    #[arg(short, long, default_value_t = DEFAULT_MAX_LENGTH, value_parser = clap::value_parser!(u64).range(1..))]
    pub length: u64,

    /// Name of the output directory
    #[arg(short, long, default_value = DEFAULT_OUT_DIRECTORY)]
    pub out_directory: String,

    /// Directory in which the output directory is created
    #[arg(short, long, default_value = ".")]
    pub path_to_output: PathBuf,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Validate and parse the input assembly
fn read_records(path: &Path) -> anyhow::Result<Vec<SequenceRecord>> {
    check_fasta_input(path)?;

    let records = parsing::fasta::parse_fasta_file(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    info!("Read {} sequences from {}", records.len(), path.display());
    Ok(records)
}
