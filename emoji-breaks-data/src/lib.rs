//! Unicode emoji data files as grapheme break test vectors
//!
//! This crate reads the line-oriented emoji data distribution
//! (`emoji-sequences.txt`, `emoji-test.txt`, `emoji-variation-sequences.txt`
//! and `emoji-zwj-sequences.txt`), validates each file's header and version
//! banner, and turns every data line into a [`TestVector`]: the decoded
//! string that a conforming grapheme segmenter must treat as a single
//! user-perceived character.
//!
//! Malformed lines never abort a parse. They are dropped and counted, so a
//! damaged record only shrinks the corpus.

#![warn(missing_docs)]

pub mod error;
pub mod file;
pub mod parser;
pub mod vector;

pub use error::{DataError, DataResult, VectorError};
pub use file::{DataFile, FieldLayout};
pub use parser::{DataFileParser, ParsedFile, RawLine};
pub use vector::{decode_codepoints, TestVector, DEFAULT_POISON_WORDS};
