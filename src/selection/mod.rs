//! Length-based contig selection.
//!
//! Only contigs at or below the length threshold are worth a similarity search;
//! longer contigs are usually placed by the assembly graph and are skipped
//! entirely. They never reach the classifier and never appear in the report.
//!
//! An empty [`Selection`] is a normal outcome, not an error.

use tracing::debug;

use crate::core::record::SequenceRecord;

/// Default length threshold in bases
pub const DEFAULT_MAX_LENGTH: u64 = 200_000;

/// Records that passed the length threshold, in input order
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    /// Threshold used for this selection
    pub max_length: u64,

    /// Selected records, one unit of work each
    pub selected: Vec<&'a SequenceRecord>,

    /// Number of records above the threshold
    pub skipped: usize,
}

impl Selection<'_> {
    /// True when no contig met the length requirement
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SequenceRecord> + '_ {
        self.selected.iter().copied()
    }
}

/// Select records whose length is at most `max_length`, preserving order.
#[must_use]
pub fn select_contigs(records: &[SequenceRecord], max_length: u64) -> Selection<'_> {
    let mut selected = Vec::new();
    let mut skipped = 0;

    for record in records {
        if record.length <= max_length {
            selected.push(record);
        } else {
            debug!(
                "Skipping {} ({} bp > {max_length} bp)",
                record.id, record.length
            );
            skipped += 1;
        }
    }

    Selection {
        max_length,
        selected,
        skipped,
    }
}
