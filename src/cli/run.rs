//! Run command - the full select, align, classify, report pipeline.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::blast::{Aligner, BlastnAligner, BlastnConfig};
use crate::classify::HitClassifier;
use crate::cli::classify::print_results;
use crate::cli::{read_records, OutputFormat, SelectionArgs};
use crate::core::hit::HitSet;
use crate::core::types::ClassificationResult;
use crate::output::layout::DEFAULT_REPORT_NAME;
use crate::output::{stage_selection, write_report, AlignmentTableWriter, OutputLayout, StagedContig};
use crate::selection::select_contigs;

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Name of the summary report, without extension
    #[arg(short, long, default_value = DEFAULT_REPORT_NAME)]
    pub report_file: String,

    /// Path to blastn
    #[arg(short = 'b', long, default_value = "blastn")]
    pub blastn_path: PathBuf,

    /// Database to search (name at NCBI, or path with --local)
    #[arg(long, default_value = "nr")]
    pub db: String,

    /// Search a local database instead of NCBI's remote service
    #[arg(long)]
    pub local: bool,

    /// Minimum percent identity of reported hits
    #[arg(long, default_value = "95")]
    pub perc_identity: f64,

    /// Minimum query coverage per HSP, in percent
    #[arg(long, default_value = "95")]
    pub qcov_hsp_perc: f64,

    /// Maximum number of aligned sequences kept per contig
    #[arg(long, default_value = "5")]
    pub max_target_seqs: u32,

    /// Worker threads for classification (0 = all cores)
    #[arg(short = 't', long, default_value = "0")]
    pub threads: usize,
}

impl RunArgs {
    fn blastn_config(&self) -> BlastnConfig {
        BlastnConfig {
            program: self.blastn_path.clone(),
            database: self.db.clone(),
            remote: !self.local,
            perc_identity: self.perc_identity,
            qcov_hsp_perc: self.qcov_hsp_perc,
            max_target_seqs: self.max_target_seqs,
        }
    }
}

/// Execute the run subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read, a search fails, or an output
/// file cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RunArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    let opts = &args.selection;
    let records = read_records(&opts.fasta_input)?;

    let selection = select_contigs(&records, opts.length);
    if selection.is_empty() {
        info!("No contigs met the length requirement. Done.");
        return Ok(());
    }

    let layout = OutputLayout::new(&opts.path_to_output, &opts.out_directory)
        .with_report_name(&args.report_file);
    let staged = stage_selection(&selection, &layout)
        .with_context(|| format!("Failed to stage contigs in {}", layout.base().display()))?;

    let aligner = BlastnAligner::new(args.blastn_config());
    let results = align_and_classify(&aligner, &staged, &layout)?;

    info!("Reporting summary of results");
    let report_path = layout.report();
    let file = File::create(&report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;
    write_report(BufWriter::new(file), &results)?;

    print_results(&results, format, verbose)?;

    info!("Done. Report written to {}", report_path.display());
    Ok(())
}

/// Search every staged contig, record the raw hits, and classify.
///
/// Contigs are searched one at a time in staging order; classification runs
/// in parallel afterwards. Results keep staging order.
///
/// # Errors
///
/// Returns an error if a search fails, the aligner returns inconsistent hits,
/// or the alignment table cannot be written.
pub fn align_and_classify<A: Aligner>(
    aligner: &A,
    staged: &[StagedContig],
    layout: &OutputLayout,
) -> anyhow::Result<Vec<ClassificationResult>> {
    let table_path = layout.alignment_table();
    let file = File::create(&table_path)
        .with_context(|| format!("Failed to create {}", table_path.display()))?;
    let mut table = AlignmentTableWriter::new(BufWriter::new(file))?;

    info!("There are {} contigs to align", staged.len());

    let mut hit_sets: Vec<HitSet> = Vec::with_capacity(staged.len());
    for (i, contig) in staged.iter().enumerate() {
        info!("File #{}: {}", i + 1, contig.id);

        let outcome = aligner
            .align(&contig.id, &contig.path)
            .with_context(|| format!("Alignment failed for contig '{}'", contig.id))?;
        let hit_set = outcome.into_hit_set(&contig.id)?;

        table.write_hit_set(&hit_set)?;
        hit_sets.push(hit_set);
    }

    let rows = table.rows();
    table.finish()?;
    info!("Wrote {rows} alignment rows to {}", table_path.display());

    info!("Evaluating BLAST results");
    Ok(HitClassifier::new().classify_all(&hit_sets))
}
