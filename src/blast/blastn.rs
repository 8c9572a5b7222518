//! NCBI `blastn` as an [`Aligner`].

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::blast::{AlignError, Aligner, AlignmentOutcome};
use crate::parsing::alignment::parse_hits_text;

/// Tabular columns requested from blastn; must match the alignment table layout
pub const OUTFMT: &str = "6 qseqid staxids stitle pident qcovs qcovhsp length evalue";

/// blastn search settings
#[derive(Debug, Clone, PartialEq)]
pub struct BlastnConfig {
    /// blastn executable
    pub program: PathBuf,

    /// Database name (remote) or path (local)
    pub database: String,

    /// Search at NCBI with `-remote` instead of a local database
    pub remote: bool,

    /// Minimum percent identity (`-perc_identity`)
    pub perc_identity: f64,

    /// Minimum query coverage per HSP (`-qcov_hsp_perc`)
    pub qcov_hsp_perc: f64,

    /// Maximum aligned sequences to keep (`-max_target_seqs`)
    pub max_target_seqs: u32,
}

impl Default for BlastnConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("blastn"),
            database: "nr".to_string(),
            remote: true,
            perc_identity: 95.0,
            qcov_hsp_perc: 95.0,
            max_target_seqs: 5,
        }
    }
}

impl BlastnConfig {
    /// Command-line arguments for one query file
    #[must_use]
    pub fn args(&self, query: &Path) -> Vec<String> {
        let mut args = Vec::new();
        if self.remote {
            args.push("-remote".to_string());
        }
        args.extend([
            "-db".to_string(),
            self.database.clone(),
            "-query".to_string(),
            query.display().to_string(),
            "-outfmt".to_string(),
            OUTFMT.to_string(),
            "-perc_identity".to_string(),
            self.perc_identity.to_string(),
            "-qcov_hsp_perc".to_string(),
            self.qcov_hsp_perc.to_string(),
            "-max_target_seqs".to_string(),
            self.max_target_seqs.to_string(),
        ]);
        args
    }
}

/// Runs blastn once per query file and parses its tabular output
#[derive(Debug, Clone, Default)]
pub struct BlastnAligner {
    config: BlastnConfig,
}

impl BlastnAligner {
    #[must_use]
    pub fn new(config: BlastnConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &BlastnConfig {
        &self.config
    }

    fn program_name(&self) -> String {
        self.config.program.display().to_string()
    }
}

impl Aligner for BlastnAligner {
    fn align(&self, contig: &str, query: &Path) -> Result<AlignmentOutcome, AlignError> {
        let args = self.config.args(query);
        debug!("{} {}", self.program_name(), args.join(" "));

        let output = Command::new(&self.config.program)
            .args(&args)
            .output()
            .map_err(|source| AlignError::Spawn {
                program: self.program_name(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(AlignError::Failed {
                program: self.program_name(),
                contig: contig.to_string(),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        if !stderr.trim().is_empty() {
            warn!("{} reported for {contig}: {}", self.program_name(), stderr.trim());
        }

        parse_outfmt6(contig, &String::from_utf8_lossy(&output.stdout))
    }
}

/// Read blastn outfmt 6 stdout for one query contig.
///
/// Every row is attributed to `contig`: the query file holds only this contig
/// and blastn may decorate `qseqid`.
///
/// # Errors
///
/// Returns `AlignError::Output` if a row cannot be parsed.
pub fn parse_outfmt6(contig: &str, stdout: &str) -> Result<AlignmentOutcome, AlignError> {
    let mut hits = parse_hits_text(stdout).map_err(|source| AlignError::Output {
        contig: contig.to_string(),
        source,
    })?;

    for hit in &mut hits {
        hit.contig = contig.to_string();
    }

    Ok(AlignmentOutcome::from_hits(hits))
}
