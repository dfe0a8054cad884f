//! Test vector construction from a single data line

use crate::error::VectorError;
use crate::file::{DataFile, FieldLayout};
use serde::Serialize;

/// Words that make a line fail construction on purpose
///
/// Any line whose data or comment contains one of these is dropped. The
/// parser's tolerance of bad records is exercised through them.
pub const DEFAULT_POISON_WORDS: &[&str] = &["genie", "zombie", "wrestling"];

/// One conformance test case: a string that must form one grapheme cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestVector {
    /// Source data file
    pub file: DataFile,
    /// 1-based line number within the source file
    pub line_number: usize,
    /// The raw codepoint field, e.g. `1F468 200D 1F469`
    pub codepoints: String,
    /// Classification label (emoji property or qualification status)
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable name, empty when the file has none
    pub shortname: String,
    /// Trailing annotation after `#`, empty when absent
    pub comment: String,
    /// The decoded text
    pub string: String,
}

impl TestVector {
    /// Build a test vector from the data and comment portions of a line
    ///
    /// `data` is everything before the first `#`. Fails when a field is
    /// missing, a codepoint token does not decode, or either portion
    /// contains one of `poison_words`.
    pub fn new<S: AsRef<str>>(
        file: DataFile,
        line_number: usize,
        data: &str,
        comment: &str,
        poison_words: &[S],
    ) -> Result<Self, VectorError> {
        for word in poison_words {
            let word: &str = word.as_ref();
            if !word.is_empty() && (data.contains(word) || comment.contains(word)) {
                return Err(VectorError::Poisoned {
                    word: word.to_string(),
                });
            }
        }

        let mut fields = data.split(';').map(str::trim);
        let codepoints = fields.next().unwrap_or_default();
        let kind = fields
            .next()
            .filter(|kind| !kind.is_empty())
            .ok_or(VectorError::MissingField { field: "type" })?;
        let shortname = match file.layout() {
            FieldLayout::CodepointsType => "",
            FieldLayout::CodepointsTypeShortname => fields.next().unwrap_or_default(),
        };

        let string = decode_codepoints(codepoints)?;

        Ok(Self {
            file,
            line_number,
            codepoints: codepoints.to_string(),
            kind: kind.to_string(),
            shortname: shortname.to_string(),
            comment: comment.trim().to_string(),
            string,
        })
    }

    /// Number of code points in the decoded string
    pub fn codepoint_count(&self) -> usize {
        self.string.chars().count()
    }

    /// `file:line` location for diagnostics
    pub fn location(&self) -> String {
        format!("{}:{}", self.file, self.line_number)
    }
}

/// Decode a whitespace-separated list of hexadecimal code points
///
/// Each token becomes exactly one `char`. Surrogates, values above
/// U+10FFFF, signs and range notation such as `231A..231B` are rejected.
pub fn decode_codepoints(field: &str) -> Result<String, VectorError> {
    let mut decoded = String::new();

    for token in field.split_whitespace() {
        let invalid = || VectorError::InvalidCodepoint {
            token: token.to_string(),
        };

        if !token.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(token, 16).map_err(|_| invalid())?;
        decoded.push(char::from_u32(value).ok_or_else(invalid)?);
    }

    if decoded.is_empty() {
        return Err(VectorError::EmptyCodepoints);
    }
    Ok(decoded)
}
