//! The fixed set of emoji data files

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field layout of a data line, before the comment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLayout {
    /// `codepoints ; type`
    CodepointsType,
    /// `codepoints ; type ; shortname`
    CodepointsTypeShortname,
}

/// One of the emoji data files a conformance run requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataFile {
    /// `emoji-sequences.txt`
    #[serde(rename = "emoji-sequences")]
    Sequences,
    /// `emoji-test.txt`
    #[serde(rename = "emoji-test")]
    Test,
    /// `emoji-variation-sequences.txt`
    #[serde(rename = "emoji-variation-sequences")]
    VariationSequences,
    /// `emoji-zwj-sequences.txt`
    #[serde(rename = "emoji-zwj-sequences")]
    ZwjSequences,
}

impl DataFile {
    /// All required files, in corpus order
    pub const ALL: [DataFile; 4] = [
        DataFile::Sequences,
        DataFile::Test,
        DataFile::VariationSequences,
        DataFile::ZwjSequences,
    ];

    /// Base name without extension
    pub fn name(&self) -> &'static str {
        match self {
            DataFile::Sequences => "emoji-sequences",
            DataFile::Test => "emoji-test",
            DataFile::VariationSequences => "emoji-variation-sequences",
            DataFile::ZwjSequences => "emoji-zwj-sequences",
        }
    }

    /// File name on disk
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.name())
    }

    /// The exact text line 1 of the file must contain
    pub fn header_line(&self) -> String {
        format!("# {}", self.file_name())
    }

    /// Field layout of this file's data lines
    pub fn layout(&self) -> FieldLayout {
        match self {
            DataFile::Test => FieldLayout::CodepointsType,
            _ => FieldLayout::CodepointsTypeShortname,
        }
    }
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataFile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let base = s.strip_suffix(".txt").unwrap_or(s);
        DataFile::ALL
            .into_iter()
            .find(|file| file.name() == base)
            .ok_or_else(|| format!("Unknown emoji data file: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_order() {
        let names: Vec<_> = DataFile::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "emoji-sequences",
                "emoji-test",
                "emoji-variation-sequences",
                "emoji-zwj-sequences"
            ]
        );
    }

    #[test]
    fn test_only_emoji_test_has_two_fields() {
        for file in DataFile::ALL {
            let expected = if file == DataFile::Test {
                FieldLayout::CodepointsType
            } else {
                FieldLayout::CodepointsTypeShortname
            };
            assert_eq!(file.layout(), expected, "{file}");
        }
    }

    #[test]
    fn test_header_line() {
        assert_eq!(DataFile::Test.header_line(), "# emoji-test.txt");
        assert_eq!(
            DataFile::ZwjSequences.header_line(),
            "# emoji-zwj-sequences.txt"
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("emoji-test".parse::<DataFile>(), Ok(DataFile::Test));
        assert_eq!(
            "emoji-sequences.txt".parse::<DataFile>(),
            Ok(DataFile::Sequences)
        );
        assert!("emoji-data".parse::<DataFile>().is_err());
    }
}
