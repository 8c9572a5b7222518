//! Parser for BLAST tabular hits and the raw alignment table.
//!
//! Both use the column layout requested from `blastn` with
//! `-outfmt "6 qseqid staxids stitle pident qcovs qcovhsp length evalue"`:
//!
//! | Col | Field | Table header |
//! |-----|-------|--------------|
//! | 1 | qseqid | contig |
//! | 2 | staxids | staxids |
//! | 3 | stitle | title |
//! | 4 | pident | percent_ident |
//! | 5 | qcovs | query_coverage |
//! | 6 | qcovhsp | qcovhsp |
//! | 7 | length | length |
//! | 8 | evalue | e_value |
//!
//! A contig without hits appears as a two-column row whose second column is
//! [`NOT_FOUND`](crate::core::hit::NOT_FOUND).

use std::path::Path;
use std::str::FromStr;

use crate::classify::group_hits;
use crate::core::hit::{AlignmentHit, HitSet, TaxonomyId};
use crate::parsing::ParseError;
use crate::utils::validation::check_record_limit;

/// Header of the raw alignment table
pub const TABLE_COLUMNS: [&str; 8] = [
    "contig",
    "staxids",
    "title",
    "percent_ident",
    "query_coverage",
    "qcovhsp",
    "length",
    "e_value",
];

/// Parse one tab-separated hit line.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the line has fewer than 2 fields or a
/// metric column is not numeric.
pub fn parse_hit_line(line: &str, line_num: usize) -> Result<AlignmentHit, ParseError> {
    let fields: Vec<&str> = line.split('\t').collect();

    if fields.len() < 2 {
        return Err(ParseError::InvalidFormat(format!(
            "Line {line_num} has fewer than 2 fields"
        )));
    }

    let contig = fields[0].trim();
    if contig.is_empty() {
        return Err(ParseError::InvalidFormat(format!(
            "Line {line_num} has an empty contig identifier"
        )));
    }

    let taxonomy_id = TaxonomyId::parse(fields[1]);
    if taxonomy_id.is_not_found() {
        return Ok(AlignmentHit::not_found(contig));
    }

    let description = fields.get(2).map_or("", |s| s.trim());
    let mut hit = AlignmentHit::new(contig, taxonomy_id, description);
    hit.percent_identity = parse_metric(&fields, 3, line_num)?;
    hit.query_coverage = parse_metric(&fields, 4, line_num)?;
    hit.query_coverage_hsp = parse_metric(&fields, 5, line_num)?;
    hit.alignment_length = parse_metric(&fields, 6, line_num)?;
    hit.e_value = parse_metric(&fields, 7, line_num)?;

    Ok(hit)
}

fn parse_metric<T: FromStr>(
    fields: &[&str],
    index: usize,
    line_num: usize,
) -> Result<Option<T>, ParseError> {
    match fields.get(index).map(|s| s.trim()) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid {} on line {line_num}: '{value}'",
                TABLE_COLUMNS[index]
            ))
        }),
    }
}

/// Parse headerless tabular hits (blastn outfmt 6) into a flat hit list, in
/// line order. Blank lines are skipped.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for malformed lines, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_hits_text(text: &str) -> Result<Vec<AlignmentHit>, ParseError> {
    parse_rows(text, false)
}

/// Parse the text of a raw alignment table.
///
/// Like [`parse_hits_text`], but the first non-blank line is skipped when it
/// is exactly the table header.
///
/// # Errors
///
/// Same as [`parse_hits_text`].
pub fn parse_table_text(text: &str) -> Result<Vec<AlignmentHit>, ParseError> {
    parse_rows(text, true)
}

fn parse_rows(text: &str, allow_header: bool) -> Result<Vec<AlignmentHit>, ParseError> {
    let header = TABLE_COLUMNS.join("\t");
    let mut hits = Vec::new();
    let mut first_row = true;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        if std::mem::take(&mut first_row) && allow_header && line.trim_end() == header {
            continue;
        }

        if check_record_limit(hits.len()).is_some() {
            return Err(ParseError::TooManyRecords(hits.len()));
        }

        // Line numbers in errors are 1-based for user friendliness
        hits.push(parse_hit_line(line, i + 1)?);
    }

    Ok(hits)
}

/// Read a raw alignment table and group its hits by contig.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::InvalidFormat`
/// for malformed lines or a table without hits, or `ParseError::InconsistentHits`
/// if a contig mixes the no-hit marker with real hits.
pub fn parse_alignment_table(path: &Path) -> Result<Vec<HitSet>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    let hits = parse_table_text(&content)?;

    if hits.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No hits found in alignment table".to_string(),
        ));
    }

    Ok(group_hits(hits)?)
}
