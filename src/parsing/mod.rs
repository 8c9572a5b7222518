//! Parsers for pipeline inputs.
//!
//! - **FASTA files**: Assembly contigs, plain or gzip/bgzip compressed
//! - **Alignment tables**: The raw `alignment_results.tsv` written by the `run` command
//!
//! ## Example
//!
//! ```rust,no_run
//! use plasidome::parsing::fasta::parse_fasta_file;
//! use std::path::Path;
//!
//! let records = parse_fasta_file(Path::new("assembly.fasta")).unwrap();
//! for record in &records {
//!     println!("{}\t{}", record.id, record.length);
//! }
//! ```

use thiserror::Error;

use crate::core::hit::HitSetError;

pub mod alignment;
pub mod fasta;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Too many records: {0} exceeds maximum allowed (1000000)")]
    TooManyRecords(usize),

    #[error(transparent)]
    InconsistentHits(#[from] HitSetError),
}
