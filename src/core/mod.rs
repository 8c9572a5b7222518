//! Core data types for contig classification.
//!
//! - [`SequenceRecord`]: An input contig with identifier and length
//! - [`AlignmentHit`]: One similarity-search hit, with taxonomy id and subject title
//! - [`HitSet`]: All hits of one contig, checked at the aligner boundary
//! - [`ClassificationCounts`], [`ClassificationResult`], [`Classification`]: Classifier output
//!
//! ## Sentinels
//!
//! | Constant | Meaning |
//! |----------|---------|
//! | [`NOT_FOUND`] | No alignment passed the search filters for this contig |
//! | [`HUMAN_TAXONOMY_ID`] | Hits to this taxon count as contamination |
//!
//! [`SequenceRecord`]: record::SequenceRecord
//! [`AlignmentHit`]: hit::AlignmentHit
//! [`HitSet`]: hit::HitSet
//! [`ClassificationCounts`]: types::ClassificationCounts
//! [`ClassificationResult`]: types::ClassificationResult
//! [`Classification`]: types::Classification
//! [`NOT_FOUND`]: hit::NOT_FOUND
//! [`HUMAN_TAXONOMY_ID`]: hit::HUMAN_TAXONOMY_ID

pub mod hit;
pub mod record;
pub mod types;
