use std::io::{self, Write};

use crate::core::types::ClassificationResult;

/// Header of the summary report
pub const REPORT_COLUMNS: [&str; 7] = [
    "contig",
    "classification",
    "contaminated",
    "chromosome",
    "plasmid",
    "undetermined",
    "human",
];

/// One report row, without trailing newline
#[must_use]
pub fn report_row(result: &ClassificationResult) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        result.contig,
        result.classification,
        result.is_contaminated,
        result.counts.chromosome_hits,
        result.counts.plasmid_hits,
        result.counts.undetermined_hits,
        result.counts.contamination_hits,
    )
}

/// Write the summary report, one row per contig in the given order.
///
/// # Errors
///
/// Returns an IO error if writing fails.
pub fn write_report<W: Write>(mut writer: W, results: &[ClassificationResult]) -> io::Result<()> {
    writeln!(writer, "{}", REPORT_COLUMNS.join("\t"))?;
    for result in results {
        writeln!(writer, "{}", report_row(result))?;
    }
    writer.flush()
}
