//! Centralized input validation helpers.

use std::ffi::OsStr;
use std::path::Path;

/// Maximum number of records (FASTA sequences or table hits) read from one file
pub const MAX_RECORDS: usize = 1_000_000;

/// Maximum identifier length; identifiers become part of staged file names
pub const MAX_ID_LENGTH: usize = 200;

/// Extensions accepted for FASTA input, optionally followed by `.gz` / `.bgz`
pub const FASTA_EXTENSIONS: [&str; 4] = ["fasta", "fa", "fna", "faa"];

/// Input validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Could not find file: {0}")]
    FileNotFound(String),
    #[error("Input file was not in FASTA format (expected one of .fasta, .fa, .fna, .faa): {0}")]
    NotFasta(String),
    #[error("Empty sequence identifier")]
    EmptyId,
    #[error("Sequence identifier too long: exceeds {MAX_ID_LENGTH} characters")]
    IdTooLong,
    #[error("Invalid sequence identifier '{0}': contains path separators or control characters")]
    InvalidId(String),
}

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}

/// Check if the path has a FASTA extension
///
/// # Examples
///
/// ```
/// use plasidome::utils::validation::is_fasta_file;
/// use std::path::Path;
///
/// assert!(is_fasta_file(Path::new("assembly.fna")));
/// assert!(is_fasta_file(Path::new("assembly.fasta.gz")));
/// assert!(!is_fasta_file(Path::new("assembly.gfa")));
/// ```
#[must_use]
pub fn is_fasta_file(path: &Path) -> bool {
    let lower = path.to_string_lossy().to_lowercase();
    let stem = lower
        .strip_suffix(".gz")
        .or_else(|| lower.strip_suffix(".bgz"))
        .unwrap_or(&lower);

    Path::new(stem)
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| FASTA_EXTENSIONS.contains(&ext))
}

/// Check that an input FASTA exists and carries a FASTA extension.
///
/// # Errors
///
/// Returns `ValidationError::FileNotFound` if the path is not a file, or
/// `ValidationError::NotFasta` if the extension is not recognized.
pub fn check_fasta_input(path: &Path) -> Result<(), ValidationError> {
    if !path.is_file() {
        return Err(ValidationError::FileNotFound(path.display().to_string()));
    }
    if !is_fasta_file(path) {
        return Err(ValidationError::NotFasta(path.display().to_string()));
    }
    Ok(())
}

/// Validate a sequence identifier before it is used in a staged file name.
///
/// # Errors
///
/// Returns `ValidationError::EmptyId`, `ValidationError::IdTooLong`, or
/// `ValidationError::InvalidId` for path separators, `..`, or control characters.
pub fn validate_sequence_id(id: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::EmptyId);
    }

    if id.len() > MAX_ID_LENGTH {
        return Err(ValidationError::IdTooLong);
    }

    if id.contains("..") || id.contains('/') || id.contains('\\') || id.chars().any(char::is_control)
    {
        return Err(ValidationError::InvalidId(id.to_string()));
    }

    Ok(())
}
