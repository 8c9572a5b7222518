//! # plasidome
//!
//! A library for triaging short assembly contigs by similarity-search evidence.
//!
//! Contigs too short to place confidently through the assembly graph are each
//! searched against a reference database with `blastn`. The subject titles and
//! taxonomy ids of the hits decide whether a contig most likely comes from a
//! chromosome, a plasmid, or human contamination.
//!
//! ## Features
//!
//! - **Length selection**: Only contigs at or below a threshold are searched
//! - **Rule-table classification**: Ordered, extensible rules turn hits into counts and labels
//! - **Contamination flag**: Any human hit is reported, even when it does not decide the label
//! - **Reproducible reports**: Results follow input order, regardless of parallelism
//!
//! ## Example
//!
//! ```rust
//! use plasidome::{AlignmentHit, Classification, HitClassifier, SequenceRecord, TaxonomyId};
//! use plasidome::selection::select_contigs;
//!
//! let records = vec![
//!     SequenceRecord::new("NODE_1", vec![b'A'; 500]),
//!     SequenceRecord::new("NODE_2", vec![b'A'; 5_000]),
//! ];
//! let selection = select_contigs(&records, 1_000);
//! assert_eq!(selection.len(), 1);
//!
//! let hits = vec![
//!     AlignmentHit::new("NODE_1", TaxonomyId::parse("562"), "Escherichia coli chromosome"),
//!     AlignmentHit::new("NODE_1", TaxonomyId::parse("562"), "Escherichia coli chromosome"),
//!     AlignmentHit::new("NODE_1", TaxonomyId::parse("562"), "Escherichia coli plasmid pO157"),
//! ];
//! let result = HitClassifier::new().classify_hits("NODE_1", &hits);
//! assert_eq!(result.classification, Classification::Chromosome);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Data types for records, hits, and results
//! - [`selection`]: Length-based contig selection
//! - [`classify`]: Hit aggregation and classification rules
//! - [`blast`]: The aligner seam and the `blastn` implementation
//! - [`parsing`]: FASTA and alignment table parsers
//! - [`output`]: Staged query files, alignment table, and summary report
//! - [`cli`]: Command-line interface implementation

pub mod blast;
pub mod classify;
pub mod cli;
pub mod core;
pub mod output;
pub mod parsing;
pub mod selection;
pub mod utils;

// Re-export commonly used types for convenience
pub use blast::{Aligner, AlignmentOutcome, BlastnAligner, BlastnConfig};
pub use classify::HitClassifier;
pub use crate::core::hit::{AlignmentHit, HitSet, TaxonomyId};
pub use crate::core::record::SequenceRecord;
pub use crate::core::types::*;
pub use selection::{select_contigs, Selection};
