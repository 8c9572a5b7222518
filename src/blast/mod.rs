//! Similarity search against a reference database.
//!
//! The pipeline only depends on the [`Aligner`] trait: one call per selected
//! contig, returning either the hits that passed the search filters or an
//! explicit [`AlignmentOutcome::NoHits`]. [`BlastnAligner`] is the shipped
//! implementation and runs NCBI `blastn`.

use std::path::Path;

use thiserror::Error;

use crate::core::hit::{AlignmentHit, HitSet, HitSetError};
use crate::parsing::ParseError;

pub mod blastn;

pub use blastn::{parse_outfmt6, BlastnAligner, BlastnConfig};

#[derive(Error, Debug)]
pub enum AlignError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with status {status} for contig '{contig}': {stderr}")]
    Failed {
        program: String,
        contig: String,
        status: String,
        stderr: String,
    },

    #[error("Unreadable aligner output for contig '{contig}': {source}")]
    Output {
        contig: String,
        #[source]
        source: ParseError,
    },
}

/// Result of searching one contig
#[derive(Debug, Clone, PartialEq)]
pub enum AlignmentOutcome {
    /// Hits in the order the aligner reported them; never empty
    Hits(Vec<AlignmentHit>),
    /// No alignment passed the search filters
    NoHits,
}

impl AlignmentOutcome {
    /// Wrap a hit list, mapping an empty list to `NoHits`
    #[must_use]
    pub fn from_hits(hits: Vec<AlignmentHit>) -> Self {
        if hits.is_empty() {
            Self::NoHits
        } else {
            Self::Hits(hits)
        }
    }

    /// Convert into the contig's hit set; `NoHits` becomes a single no-hit marker.
    ///
    /// # Errors
    ///
    /// Returns `HitSetError` if the hits name another contig or contain a
    /// no-hit marker among real hits.
    pub fn into_hit_set(self, contig: &str) -> Result<HitSet, HitSetError> {
        match self {
            Self::Hits(hits) => HitSet::new(contig, hits),
            Self::NoHits => Ok(HitSet::not_found(contig)),
        }
    }
}

/// A similarity search tool invoked once per contig
pub trait Aligner {
    /// Search one staged contig.
    ///
    /// `query` is a FASTA file holding only this contig.
    ///
    /// # Errors
    ///
    /// Returns `AlignError` if the search could not be run or its output could
    /// not be read.
    fn align(&self, contig: &str, query: &Path) -> Result<AlignmentOutcome, AlignError>;
}
