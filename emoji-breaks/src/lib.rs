//! Grapheme cluster conformance harness for Unicode emoji data
//!
//! Loads the four emoji data files of one pinned Unicode emoji version into
//! a [`Corpus`] of test vectors and runs three checks against a
//! [`Segmenter`]:
//!
//! - **isolated**: every vector's string segments to exactly itself
//! - **embedded**: `"A" + string + "Z"` segments to `["A", string, "Z"]`
//! - **pairwise**: for deterministically sampled pairs, `first + second`
//!   segments to `[first, second]`
//!
//! ```no_run
//! use emoji_breaks::{ConformanceRunner, HarnessConfig, UnicodeGraphemes};
//!
//! let runner = ConformanceRunner::new(UnicodeGraphemes, HarnessConfig::from_env());
//! let report = runner.run_all().expect("emoji data failed validation");
//! assert!(report.passed(), "{report}");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod paths;
pub mod report;
pub mod runner;
pub mod sampler;
pub mod segmenter;

pub use config::{HarnessConfig, DEFAULT_PAIR_STEP, DEFAULT_SEED, EMOJI_VERSION};
pub use corpus::{Corpus, CorpusState, FileSummary};
pub use error::{HarnessError, HarnessResult};
pub use report::{CheckKind, CheckOutcome, CheckReport, Failure, SuiteReport};
pub use runner::ConformanceRunner;
pub use sampler::{DeterministicRng, PairSampler};
#[cfg(feature = "unicode-segmentation")]
pub use segmenter::UnicodeGraphemes;
pub use segmenter::Segmenter;

// Re-export the data model for convenience
pub use emoji_breaks_data::{DataError, DataFile, TestVector};
