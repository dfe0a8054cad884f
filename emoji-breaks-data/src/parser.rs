//! Line-oriented parser for the emoji data files
//!
//! Every file must open with its own name (`# emoji-test.txt`) and carry a
//! `# Version: N` banner somewhere. Blank lines and `#` comment lines are
//! skipped; every other line is split on its first `#` and handed to
//! [`TestVector::new`]. Lines that fail construction are dropped and
//! counted.

use crate::error::{DataError, DataResult, VectorError};
use crate::file::DataFile;
use crate::vector::{TestVector, DEFAULT_POISON_WORDS};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A data line split into its data and comment portions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// Source file
    pub file: DataFile,
    /// 1-based line number
    pub line_number: usize,
    /// Text before the first `#`
    pub data: &'a str,
    /// Text after the first `#`, empty when there is none
    pub comment: &'a str,
}

impl<'a> RawLine<'a> {
    /// Split a line on its first `#`
    pub fn split(file: DataFile, line_number: usize, line: &'a str) -> Self {
        let (data, comment) = line.split_once('#').unwrap_or((line, ""));
        Self {
            file,
            line_number,
            data,
            comment,
        }
    }

    /// Construct the test vector this line describes
    pub fn to_vector<S: AsRef<str>>(&self, poison_words: &[S]) -> Result<TestVector, VectorError> {
        TestVector::new(
            self.file,
            self.line_number,
            self.data,
            self.comment,
            poison_words,
        )
    }
}

/// Result of parsing one data file
#[derive(Debug, Clone)]
pub struct ParsedFile {
    /// The file that was parsed
    pub file: DataFile,
    /// Successfully constructed vectors, in line order
    pub vectors: Vec<TestVector>,
    /// Number of data lines that were dropped
    pub dropped: usize,
}

/// Parser for a single emoji data file at a pinned version
#[derive(Debug, Clone)]
pub struct DataFileParser {
    file: DataFile,
    version: String,
    poison_words: Vec<String>,
}

impl DataFileParser {
    /// Create a parser expecting `file` at `version`
    pub fn new(file: DataFile, version: impl Into<String>) -> Self {
        Self {
            file,
            version: version.into(),
            poison_words: DEFAULT_POISON_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Replace the poison word list
    pub fn with_poison_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.poison_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// The file this parser expects
    pub fn file(&self) -> DataFile {
        self.file
    }

    /// The version banner this parser requires
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Open and parse a file from disk
    pub fn parse_path(&self, path: &Path) -> DataResult<ParsedFile> {
        let file = File::open(path).map_err(|e| DataError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.parse_lines(BufReader::new(file), path)
    }

    /// Parse file contents held in memory
    pub fn parse_str(&self, text: &str) -> DataResult<ParsedFile> {
        self.parse_lines(text.as_bytes(), &PathBuf::from(self.file.file_name()))
    }

    fn parse_lines<R: BufRead>(&self, reader: R, path: &Path) -> DataResult<ParsedFile> {
        let header = self.file.header_line();
        let banner = format!("# Version: {}", self.version);
        let mut version_seen = false;
        let mut line_count = 0;
        let mut vectors = Vec::new();
        let mut dropped = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| DataError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            let line_number = index + 1;
            line_count = line_number;

            if line_number == 1 && line != header {
                return Err(self.name_mismatch(line));
            }
            if line == banner {
                version_seen = true;
            }
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            match RawLine::split(self.file, line_number, line).to_vector(&self.poison_words) {
                Ok(vector) => vectors.push(vector),
                Err(reason) => {
                    log::debug!("{}:{}: dropped line: {reason}", self.file, line_number);
                    dropped += 1;
                }
            }
        }

        if line_count == 0 {
            return Err(self.name_mismatch(""));
        }
        if !version_seen {
            return Err(DataError::FileVersionMismatch {
                file: self.file.name().to_string(),
                expected: self.version.clone(),
            });
        }

        log::info!(
            "Parsed {} ({} vectors, {} dropped)",
            self.file.file_name(),
            vectors.len(),
            dropped
        );

        Ok(ParsedFile {
            file: self.file,
            vectors,
            dropped,
        })
    }

    fn name_mismatch(&self, found: &str) -> DataError {
        DataError::FileNameMismatch {
            file: self.file.name().to_string(),
            expected: self.file.name().to_string(),
            found: found.to_string(),
        }
    }
}
