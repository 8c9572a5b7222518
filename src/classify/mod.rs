//! Evidence aggregation and contig classification.
//!
//! Each contig's hits are reduced to five counters by an ordered rule table,
//! then a decision table picks the label:
//!
//! 1. **no significant hits**: not-found markers outweigh all replicon hits
//! 2. **chromosome**: chromosome hits outweigh plasmid + undetermined
//! 3. **plasmid**: plasmid hits outweigh chromosome + undetermined
//! 4. **undetermined**: everything else, including ties
//!
//! Human hits outweighing all replicon hits override the label with
//! **contamination**. Any human hit sets the contaminated flag.
//!
//! ## Example
//!
//! ```rust
//! use plasidome::classify::HitClassifier;
//! use plasidome::core::hit::{AlignmentHit, TaxonomyId};
//! use plasidome::core::types::Classification;
//!
//! let hits = vec![
//!     AlignmentHit::new("contig_7", TaxonomyId::parse("562"), "Escherichia coli plasmid pO157"),
//!     AlignmentHit::new("contig_7", TaxonomyId::parse("562"), "Escherichia coli plasmid F"),
//! ];
//!
//! let result = HitClassifier::new().classify_hits("contig_7", &hits);
//! assert_eq!(result.classification, Classification::Plasmid);
//! ```

pub mod engine;
pub mod rules;

pub use engine::{group_hits, HitClassifier};
