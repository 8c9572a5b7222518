use serde::{Deserialize, Serialize};

/// Final label assigned to a contig
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Chromosome,
    Plasmid,
    Undetermined,
    /// Evidence is dominated by hits to a non-target (human) organism
    Contamination,
    /// No alignment passed the search filters
    NoSignificantHits,
}

impl Classification {
    /// Label as written to reports
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chromosome => "chromosome",
            Self::Plasmid => "plasmid",
            Self::Undetermined => "undetermined",
            Self::Contamination => "contamination",
            Self::NoSignificantHits => "no_significant_hits",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-contig evidence counters, derived entirely from the contig's hits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationCounts {
    pub plasmid_hits: u32,
    pub chromosome_hits: u32,
    pub undetermined_hits: u32,
    pub contamination_hits: u32,
    pub notfound_hits: u32,
}

impl ClassificationCounts {
    /// Sum of the replicon counters (chromosome + plasmid + undetermined).
    ///
    /// Both the no-hit rule and the contamination override compare against this.
    #[must_use]
    pub fn replicon_hits(&self) -> u32 {
        self.chromosome_hits + self.plasmid_hits + self.undetermined_hits
    }
}

/// Terminal classification of one contig
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Contig identifier
    pub contig: String,

    pub classification: Classification,

    /// True whenever at least one hit was to the contaminant taxon,
    /// even if the contamination override did not fire
    pub is_contaminated: bool,

    #[serde(flatten)]
    pub counts: ClassificationCounts,
}
