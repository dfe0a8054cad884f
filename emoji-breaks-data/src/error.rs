//! Error types for data file parsing
//!
//! Two layers: [`VectorError`] describes why a single data line could not be
//! turned into a test vector (the line is dropped), and [`DataError`]
//! describes a problem with a whole file (the load is aborted).

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a single data line is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// A codepoint token is not a valid hexadecimal scalar value
    #[error("invalid codepoint token '{token}'")]
    InvalidCodepoint {
        /// The offending token as it appeared in the file
        token: String,
    },

    /// The codepoint field contains no tokens at all
    #[error("empty codepoint field")]
    EmptyCodepoints,

    /// A required semicolon-separated field is absent
    #[error("missing field '{field}'")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
    },

    /// The line contains a reserved poison word
    #[error("line contains poison word '{word}'")]
    Poisoned {
        /// The poison word that matched
        word: String,
    },
}

/// Fatal errors for a whole data file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// The first line does not name the expected file
    #[error("File Name Mismatch: expected '# {expected}.txt' on line 1 of {file}, found '{found}'")]
    FileNameMismatch {
        /// Identifier the file was loaded under
        file: String,
        /// Expected base name
        expected: String,
        /// What line 1 actually contained
        found: String,
    },

    /// No line in the file carries the expected version banner
    #[error("File Version Mismatch: no '# Version: {expected}' line in {file}")]
    FileVersionMismatch {
        /// Identifier the file was loaded under
        file: String,
        /// Expected version string
        expected: String,
    },

    /// Reading the file failed
    #[error("I/O error for path '{}': {message}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Rendered I/O error
        message: String,
    },
}

/// Result type for file-level operations
pub type DataResult<T> = std::result::Result<T, DataError>;
