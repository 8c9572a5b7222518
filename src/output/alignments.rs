use std::io::{self, Write};

use crate::core::hit::{AlignmentHit, HitSet};
use crate::parsing::alignment::TABLE_COLUMNS;

/// Streams hits into the raw alignment table, one row per hit
pub struct AlignmentTableWriter<W: Write> {
    inner: W,
    rows: usize,
}

impl<W: Write> AlignmentTableWriter<W> {
    /// Start a table by writing its header.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the header cannot be written.
    pub fn new(mut inner: W) -> io::Result<Self> {
        writeln!(inner, "{}", TABLE_COLUMNS.join("\t"))?;
        Ok(Self { inner, rows: 0 })
    }

    /// Append all rows of one contig.
    ///
    /// # Errors
    ///
    /// Returns an IO error if a row cannot be written.
    pub fn write_hit_set(&mut self, hit_set: &HitSet) -> io::Result<()> {
        if hit_set.hits().is_empty() {
            return self.write_hit(&AlignmentHit::not_found(hit_set.contig()));
        }
        for hit in hit_set.hits() {
            self.write_hit(hit)?;
        }
        Ok(())
    }

    fn write_hit(&mut self, hit: &AlignmentHit) -> io::Result<()> {
        self.rows += 1;

        if hit.is_not_found() {
            return writeln!(self.inner, "{}\t{}", hit.contig, hit.taxonomy_id);
        }

        writeln!(
            self.inner,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            hit.contig,
            hit.taxonomy_id,
            hit.description,
            optional(hit.percent_identity),
            optional(hit.query_coverage),
            optional(hit.query_coverage_hsp),
            optional(hit.alignment_length),
            hit.e_value.map(|e| format!("{e:e}")).unwrap_or_default(),
        )
    }

    /// Number of rows written so far, excluding the header
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and return the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an IO error if flushing fails.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
