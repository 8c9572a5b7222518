//! Ordered rule tables for hit aggregation and the per-contig decision.
//!
//! Adding a new taxonomy or title rule means adding a row, not a branch.

use crate::core::hit::AlignmentHit;
use crate::core::types::{Classification, ClassificationCounts};

/// Counter a hit rule increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Plasmid,
    Chromosome,
    Undetermined,
    Contamination,
    NotFound,
}

impl Counter {
    pub fn increment(self, counts: &mut ClassificationCounts) {
        match self {
            Self::Plasmid => counts.plasmid_hits += 1,
            Self::Chromosome => counts.chromosome_hits += 1,
            Self::Undetermined => counts.undetermined_hits += 1,
            Self::Contamination => counts.contamination_hits += 1,
            Self::NotFound => counts.notfound_hits += 1,
        }
    }
}

/// One row of the per-hit aggregation table
#[derive(Clone, Copy)]
pub struct HitRule {
    pub name: &'static str,
    pub applies: fn(&AlignmentHit) -> bool,
    pub counter: Counter,
    /// Skip the remaining rows for this hit once this row matched
    pub stop: bool,
}

/// One row of the per-contig decision table
#[derive(Clone, Copy)]
pub struct DecisionRule {
    pub label: Classification,
    pub applies: fn(&ClassificationCounts) -> bool,
}

const PLASMID: &str = "plasmid";
const CHROMOSOME: &str = "chromosome";

fn is_not_found(hit: &AlignmentHit) -> bool {
    hit.is_not_found()
}

fn is_human(hit: &AlignmentHit) -> bool {
    hit.taxonomy_id.is_human()
}

fn mentions_plasmid(hit: &AlignmentHit) -> bool {
    hit.description.contains(PLASMID)
}

fn mentions_chromosome(hit: &AlignmentHit) -> bool {
    hit.description.contains(CHROMOSOME)
}

fn mentions_neither(hit: &AlignmentHit) -> bool {
    !mentions_plasmid(hit) && !mentions_chromosome(hit)
}

/// Aggregation rules, applied to every hit in this order.
///
/// Title matching is case-sensitive. A title mentioning both "plasmid" and
/// "chromosome" counts toward both.
pub const HIT_RULES: &[HitRule] = &[
    HitRule {
        name: "no hit passed filters",
        applies: is_not_found,
        counter: Counter::NotFound,
        stop: true,
    },
    HitRule {
        name: "human taxon",
        applies: is_human,
        counter: Counter::Contamination,
        stop: true,
    },
    HitRule {
        name: "plasmid in title",
        applies: mentions_plasmid,
        counter: Counter::Plasmid,
        stop: false,
    },
    HitRule {
        name: "chromosome in title",
        applies: mentions_chromosome,
        counter: Counter::Chromosome,
        stop: false,
    },
    HitRule {
        name: "no replicon in title",
        applies: mentions_neither,
        counter: Counter::Undetermined,
        stop: false,
    },
];

fn no_significant_hits(c: &ClassificationCounts) -> bool {
    c.notfound_hits > c.replicon_hits()
}

fn chromosome_majority(c: &ClassificationCounts) -> bool {
    c.chromosome_hits > c.plasmid_hits + c.undetermined_hits
}

fn plasmid_majority(c: &ClassificationCounts) -> bool {
    c.plasmid_hits > c.chromosome_hits + c.undetermined_hits
}

/// Decision rules; the first that applies wins, otherwise [`FALLBACK`].
pub const DECISION_RULES: &[DecisionRule] = &[
    DecisionRule {
        label: Classification::NoSignificantHits,
        applies: no_significant_hits,
    },
    DecisionRule {
        label: Classification::Chromosome,
        applies: chromosome_majority,
    },
    DecisionRule {
        label: Classification::Plasmid,
        applies: plasmid_majority,
    },
];

/// Label when no decision rule applies, including ties
pub const FALLBACK: Classification = Classification::Undetermined;

fn contamination_dominates(c: &ClassificationCounts) -> bool {
    c.contamination_hits > c.replicon_hits()
}

/// Applied after the decision table and overrides its label
pub const OVERRIDE: DecisionRule = DecisionRule {
    label: Classification::Contamination,
    applies: contamination_dominates,
};
