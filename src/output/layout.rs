use std::path::{Path, PathBuf};

/// Default name of the output directory
pub const DEFAULT_OUT_DIRECTORY: &str = "contig_assignments";

/// Default report file name, without extension
pub const DEFAULT_REPORT_NAME: &str = "report";

const STAGING_DIR: &str = "single_contigs";
const ALIGNMENT_TABLE: &str = "alignment_results.tsv";

/// Paths of everything a run writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    base: PathBuf,
    report_name: String,
}

impl OutputLayout {
    /// Layout rooted at `<parent>/<out_directory>`
    pub fn new(parent: &Path, out_directory: &str) -> Self {
        Self {
            base: parent.join(out_directory),
            report_name: DEFAULT_REPORT_NAME.to_string(),
        }
    }

    /// Use `<report_name>.tsv` for the summary report
    #[must_use]
    pub fn with_report_name(mut self, report_name: impl Into<String>) -> Self {
        self.report_name = report_name.into();
        self
    }

    /// Create the output and staging directories if missing.
    ///
    /// # Errors
    ///
    /// Returns an IO error if a directory cannot be created.
    pub fn create(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.staging_dir())
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Directory holding one FASTA per selected contig
    pub fn staging_dir(&self) -> PathBuf {
        self.base.join(STAGING_DIR)
    }

    /// Staged query file for a contig
    pub fn staged_contig(&self, contig: &str) -> PathBuf {
        self.staging_dir().join(format!("contig_{contig}.fasta"))
    }

    pub fn alignment_table(&self) -> PathBuf {
        self.base.join(ALIGNMENT_TABLE)
    }

    pub fn report(&self) -> PathBuf {
        self.base.join(format!("{}.tsv", self.report_name))
    }
}
