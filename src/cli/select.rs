//! Select command - stage short contigs without running any search.

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::{read_records, OutputFormat, SelectionArgs};
use crate::output::{stage_selection, OutputLayout};
use crate::selection::select_contigs;

#[derive(Args)]
pub struct SelectArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Execute the select subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or the staged files cannot be
/// written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SelectArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let opts = &args.selection;
    let records = read_records(&opts.fasta_input)?;

    let selection = select_contigs(&records, opts.length);
    if selection.is_empty() {
        info!("No contigs met the length requirement. Done.");
        return Ok(());
    }

    let layout = OutputLayout::new(&opts.path_to_output, &opts.out_directory);
    let staged = stage_selection(&selection, &layout)
        .with_context(|| format!("Failed to stage contigs in {}", layout.base().display()))?;

    info!(
        "Staged {} contigs ({} longer than {} bp skipped)",
        staged.len(),
        selection.skipped,
        opts.length
    );

    match format {
        OutputFormat::Text => {
            for contig in &staged {
                println!("{}\t{}", contig.id, contig.path.display());
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = selection
                .iter()
                .zip(&staged)
                .map(|(record, contig)| {
                    serde_json::json!({
                        "contig": record.id,
                        "length": record.length,
                        "path": contig.path.display().to_string(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("contig\tlength\tpath");
            for (record, contig) in selection.iter().zip(&staged) {
                println!("{}\t{}\t{}", record.id, record.length, contig.path.display());
            }
        }
    }

    Ok(())
}
