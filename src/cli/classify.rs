//! Classify command - classify contigs from an existing alignment table.
//!
//! Useful for re-running the decision step on the `alignment_results.tsv` of a
//! previous run without repeating the searches.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::classify::HitClassifier;
use crate::cli::OutputFormat;
use crate::core::types::{Classification, ClassificationResult};
use crate::output::report::write_report;
use crate::parsing::alignment::parse_alignment_table;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Alignment table written by `plasidome run`
    #[arg(required = true)]
    pub alignments: PathBuf,

    /// Also write the summary report to this file
    #[arg(short, long)]
    pub report: Option<PathBuf>,
}

/// Execute the classify subcommand
///
/// # Errors
///
/// Returns an error if the table cannot be read, is inconsistent, or the
/// report cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let hit_sets = parse_alignment_table(&args.alignments)
        .with_context(|| format!("Failed to read {}", args.alignments.display()))?;

    info!(
        "Evaluating alignment results for {} contigs",
        hit_sets.len()
    );
    let results = HitClassifier::new().classify_all(&hit_sets);

    if let Some(path) = &args.report {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_report(BufWriter::new(file), &results)?;
        info!("Wrote report to {}", path.display());
    }

    print_results(&results, format, verbose)
}

/// Print classification results to stdout
///
/// # Errors
///
/// Returns an error if JSON serialization or writing to stdout fails.
pub fn print_results(
    results: &[ClassificationResult],
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_results(results, verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(results)?),
        OutputFormat::Tsv => write_report(std::io::stdout().lock(), results)?,
    }
    Ok(())
}

fn print_text_results(results: &[ClassificationResult], verbose: bool) {
    let width = results
        .iter()
        .map(|r| r.contig.len())
        .max()
        .unwrap_or(0)
        .max("contig".len());

    for result in results {
        let flag = if result.is_contaminated && result.classification != Classification::Contamination
        {
            " (contaminated)"
        } else {
            ""
        };
        println!(
            "{:<width$}  {}{flag}",
            result.contig, result.classification
        );

        if verbose {
            let c = &result.counts;
            println!(
                "{:<width$}  chromosome={} plasmid={} undetermined={} human={} not_found={}",
                "",
                c.chromosome_hits,
                c.plasmid_hits,
                c.undetermined_hits,
                c.contamination_hits,
                c.notfound_hits,
            );
        }
    }

    let count = |label: Classification| {
        results
            .iter()
            .filter(|r| r.classification == label)
            .count()
    };
    println!(
        "\n{} contigs: {} chromosome, {} plasmid, {} undetermined, {} contamination, {} no significant hits",
        results.len(),
        count(Classification::Chromosome),
        count(Classification::Plasmid),
        count(Classification::Undetermined),
        count(Classification::Contamination),
        count(Classification::NoSignificantHits),
    );
}
