use std::fs::File;
use std::path::PathBuf;

use noodles::fasta;
use tracing::debug;

use crate::core::record::SequenceRecord;
use crate::output::layout::OutputLayout;
use crate::selection::Selection;

/// A selected contig written to its own query file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedContig {
    pub id: String,
    pub path: PathBuf,
}

/// Write one record as a single-sequence FASTA.
///
/// # Errors
///
/// Returns an IO error if the file cannot be written.
pub fn write_contig(record: &SequenceRecord, path: PathBuf) -> std::io::Result<StagedContig> {
    let mut writer = fasta::io::Writer::new(File::create(&path)?);

    let definition = fasta::record::Definition::new(record.id.as_str(), None);
    let sequence = fasta::record::Sequence::from(record.sequence.clone());
    writer.write_record(&fasta::Record::new(definition, sequence))?;

    debug!("Staged {} at {}", record.id, path.display());

    Ok(StagedContig {
        id: record.id.clone(),
        path,
    })
}

/// Stage every selected contig under the layout's staging directory, in
/// selection order.
///
/// # Errors
///
/// Returns an IO error if a directory or file cannot be written.
pub fn stage_selection(
    selection: &Selection<'_>,
    layout: &OutputLayout,
) -> std::io::Result<Vec<StagedContig>> {
    layout.create()?;

    selection
        .iter()
        .map(|record| write_contig(record, layout.staged_contig(&record.id)))
        .collect()
}
