//! Parser for FASTA files using noodles.
//!
//! Reads every record with its residues so selected contigs can be staged
//! for the aligner. Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fasta`, `.fa`, `.fna`, `.faa` (uncompressed)
//! - any of the above followed by `.gz` or `.bgz`

use std::collections::HashSet;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;

use crate::core::record::SequenceRecord;
use crate::parsing::ParseError;
use crate::utils::validation::{check_record_limit, validate_sequence_id};

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse a FASTA file into sequence records, in file order.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::InvalidRecord` for empty, malformed, or duplicate
/// identifiers, `ParseError::InvalidFormat` if no records are found, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<SequenceRecord>, ParseError> {
    let file = std::fs::File::open(path)?;

    if is_gzipped(path) {
        // bgzip is a series of gzip members
        let reader = BufReader::new(MultiGzDecoder::new(file));
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))
    } else {
        let reader = BufReader::new(file);
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))
    }
}

/// Parse FASTA records from any buffered reader
///
/// # Errors
///
/// See [`parse_fasta_file`].
pub fn parse_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<SequenceRecord>, ParseError> {
    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(records.len()));
        }

        let id = String::from_utf8_lossy(record.name()).to_string();
        validate_sequence_id(&id).map_err(|e| {
            ParseError::InvalidRecord(format!("Record #{}: {e}", records.len() + 1))
        })?;

        if !seen.insert(id.clone()) {
            return Err(ParseError::InvalidRecord(format!(
                "Duplicate sequence identifier '{id}'"
            )));
        }

        let sequence = record.sequence().as_ref().to_vec();
        records.push(SequenceRecord::new(id, sequence));
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(records)
}
