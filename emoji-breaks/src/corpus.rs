//! The corpus of test vectors across all required data files

use crate::config::HarnessConfig;
use crate::error::HarnessResult;
use crate::paths;
use emoji_breaks_data::{DataFile, DataFileParser, ParsedFile, TestVector};
use serde::Serialize;
use std::ops::Index;
use std::path::PathBuf;

/// Per-file parse statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    /// The data file
    pub file: DataFile,
    /// Vectors contributed to the corpus
    pub records: usize,
    /// Data lines dropped as malformed or poisoned
    pub dropped: usize,
}

/// Ordered test vectors from every data file
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    vectors: Vec<TestVector>,
    files: Vec<FileSummary>,
}

/// Result of a successful corpus setup
#[derive(Debug, Clone)]
pub enum CorpusState {
    /// All files parsed and validated
    Built(Corpus),
    /// Some required files are missing; checks are skipped
    Unavailable {
        /// The missing paths, in corpus order
        missing: Vec<PathBuf>,
    },
}

impl Corpus {
    /// Empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Corpus over the given vectors, without per-file statistics
    pub fn from_vectors(vectors: Vec<TestVector>) -> Self {
        Self {
            vectors,
            files: Vec::new(),
        }
    }

    /// Load every required file for the configured version
    ///
    /// All files are checked for existence before any is parsed; if one is
    /// missing the result is [`CorpusState::Unavailable`]. A header or
    /// version mismatch in any file is an error.
    pub fn load(config: &HarnessConfig) -> HarnessResult<CorpusState> {
        config.validate()?;

        let missing = paths::missing_files(&config.data_dir, &config.emoji_version);
        if !missing.is_empty() {
            log::warn!(
                "Emoji data files not available in {}: {} missing",
                config.version_dir().display(),
                missing.len()
            );
            return Ok(CorpusState::Unavailable { missing });
        }

        let mut corpus = Corpus::new();
        for file in DataFile::ALL {
            let parser = DataFileParser::new(file, config.emoji_version.as_str())
                .with_poison_words(config.poison_words.iter().cloned());
            let parsed = parser.parse_path(&config.data_file_path(file))?;
            corpus.push_file(parsed);
        }

        log::info!(
            "Loaded emoji {} corpus: {} vectors from {} files",
            config.emoji_version,
            corpus.len(),
            corpus.files.len()
        );
        Ok(CorpusState::Built(corpus))
    }

    /// Append one parsed file's vectors
    pub fn push_file(&mut self, parsed: ParsedFile) {
        self.files.push(FileSummary {
            file: parsed.file,
            records: parsed.vectors.len(),
            dropped: parsed.dropped,
        });
        self.vectors.extend(parsed.vectors);
    }

    /// All vectors in corpus order
    pub fn vectors(&self) -> &[TestVector] {
        &self.vectors
    }

    /// Per-file statistics in corpus order
    pub fn files(&self) -> &[FileSummary] {
        &self.files
    }

    /// Number of vectors
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the corpus has no vectors
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Vector at `index`
    pub fn get(&self, index: usize) -> Option<&TestVector> {
        self.vectors.get(index)
    }

    /// Total dropped lines across all files
    pub fn dropped(&self) -> usize {
        self.files.iter().map(|f| f.dropped).sum()
    }
}

impl Index<usize> for Corpus {
    type Output = TestVector;

    fn index(&self, index: usize) -> &Self::Output {
        &self.vectors[index]
    }
}

impl CorpusState {
    /// The corpus, if it was built
    pub fn corpus(&self) -> Option<&Corpus> {
        match self {
            CorpusState::Built(corpus) => Some(corpus),
            CorpusState::Unavailable { .. } => None,
        }
    }

    /// Whether the data files were available
    pub fn is_available(&self) -> bool {
        matches!(self, CorpusState::Built(_))
    }
}
