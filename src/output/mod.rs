//! Files written by a pipeline run.
//!
//! ```text
//! <path_to_output>/<out_directory>/
//! ├── single_contigs/
//! │   └── contig_<id>.fasta     one per selected contig
//! ├── alignment_results.tsv     raw hits, one row per hit
//! └── <report>.tsv              one classification row per contig
//! ```

pub mod alignments;
pub mod layout;
pub mod report;
pub mod staging;

pub use alignments::AlignmentTableWriter;
pub use layout::OutputLayout;
pub use report::write_report;
pub use staging::{stage_selection, StagedContig};
