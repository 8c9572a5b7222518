use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text used in the alignment table in place of a taxonomy id when no
/// alignment passed the search filters
pub const NOT_FOUND: &str = "no alignments met required parameters";

/// NCBI taxonomy id for *Homo sapiens*
pub const HUMAN_TAXONOMY_ID: &str = "9606";

/// Taxonomy of a hit, or the sentinel for "no hit passed the filters"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxonomyId {
    NotFound,
    Id(String),
}

impl TaxonomyId {
    /// Parse the `staxids` column of an alignment table
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s == NOT_FOUND {
            Self::NotFound
        } else {
            Self::Id(s.to_string())
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Exact match against the human taxonomy id.
    ///
    /// A multi-valued `staxids` field such as `9606;9598` is not human.
    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self, Self::Id(id) if id == HUMAN_TAXONOMY_ID)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotFound => NOT_FOUND,
            Self::Id(id) => id,
        }
    }
}

impl std::fmt::Display for TaxonomyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One similarity-search hit for a contig
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentHit {
    /// Query contig identifier
    pub contig: String,

    pub taxonomy_id: TaxonomyId,

    /// Subject title, searched for "plasmid" / "chromosome"
    pub description: String,

    // === Carried through to reporting only ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_identity: Option<f64>,

    /// Query coverage per subject (`qcovs`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_coverage: Option<f64>,

    /// Query coverage per HSP (`qcovhsp`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_coverage_hsp: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment_length: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e_value: Option<f64>,
}

impl AlignmentHit {
    pub fn new(
        contig: impl Into<String>,
        taxonomy_id: TaxonomyId,
        description: impl Into<String>,
    ) -> Self {
        Self {
            contig: contig.into(),
            taxonomy_id,
            description: description.into(),
            percent_identity: None,
            query_coverage: None,
            query_coverage_hsp: None,
            alignment_length: None,
            e_value: None,
        }
    }

    /// Synthetic hit recorded when the aligner reports nothing for a contig
    pub fn not_found(contig: impl Into<String>) -> Self {
        Self::new(contig, TaxonomyId::NotFound, "")
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.taxonomy_id.is_not_found()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HitSetError {
    #[error("Contig '{contig}' has a no-hit marker alongside {real_hits} real hit(s)")]
    MixedSentinel { contig: String, real_hits: usize },

    #[error("Hit for contig '{found}' grouped under contig '{expected}'")]
    ForeignHit { expected: String, found: String },
}

/// All hits recorded for one contig, checked for consistency
#[derive(Debug, Clone, PartialEq)]
pub struct HitSet {
    contig: String,
    hits: Vec<AlignmentHit>,
}

impl HitSet {
    /// Build a hit set, rejecting data the aligner contract forbids.
    ///
    /// # Errors
    ///
    /// Returns `HitSetError::ForeignHit` if a hit names another contig, or
    /// `HitSetError::MixedSentinel` if a no-hit marker coexists with real hits.
    pub fn new(contig: impl Into<String>, hits: Vec<AlignmentHit>) -> Result<Self, HitSetError> {
        let contig = contig.into();

        if let Some(foreign) = hits.iter().find(|h| h.contig != contig) {
            return Err(HitSetError::ForeignHit {
                expected: contig,
                found: foreign.contig.clone(),
            });
        }

        let not_found = hits.iter().filter(|h| h.is_not_found()).count();
        if not_found > 0 && hits.len() > 1 {
            return Err(HitSetError::MixedSentinel {
                real_hits: hits.len() - not_found,
                contig,
            });
        }

        Ok(Self { contig, hits })
    }

    /// Hit set for a contig the aligner found nothing for
    pub fn not_found(contig: impl Into<String>) -> Self {
        let contig = contig.into();
        Self {
            hits: vec![AlignmentHit::not_found(contig.clone())],
            contig,
        }
    }

    pub fn contig(&self) -> &str {
        &self.contig
    }

    pub fn hits(&self) -> &[AlignmentHit] {
        &self.hits
    }
}
