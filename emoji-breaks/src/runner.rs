//! Conformance runner
//!
//! The corpus is built on first use and cached for the runner's lifetime.
//! Concurrent first accesses block on a single build. Each check then scans
//! the whole corpus and records every mismatch instead of stopping at the
//! first one.

use crate::config::HarnessConfig;
use crate::corpus::{Corpus, CorpusState};
use crate::error::HarnessResult;
use crate::report::{CheckKind, CheckOutcome, CheckReport, SuiteReport};
use crate::sampler::PairSampler;
use crate::segmenter::Segmenter;
use std::sync::OnceLock;

/// Text placed before a vector in the embedded check
pub const EMBED_PREFIX: &str = "A";

/// Text placed after a vector in the embedded check
pub const EMBED_SUFFIX: &str = "Z";

/// Runs the isolated, embedded and pairwise checks against a segmenter
pub struct ConformanceRunner<S> {
    segmenter: S,
    config: HarnessConfig,
    corpus: OnceLock<HarnessResult<CorpusState>>,
}

impl<S: Segmenter> ConformanceRunner<S> {
    /// Runner that loads its corpus from the configured data files
    pub fn new(segmenter: S, config: HarnessConfig) -> Self {
        Self {
            segmenter,
            config,
            corpus: OnceLock::new(),
        }
    }

    /// Runner over an already built corpus
    pub fn with_corpus(segmenter: S, config: HarnessConfig, corpus: Corpus) -> Self {
        Self {
            segmenter,
            config,
            corpus: OnceLock::from(Ok(CorpusState::Built(corpus))),
        }
    }

    /// The runner's configuration
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// The segmenter under test
    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    /// Build the corpus on first call and return the cached state
    pub fn corpus_state(&self) -> HarnessResult<&CorpusState> {
        self.corpus
            .get_or_init(|| Corpus::load(&self.config))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Whether all data files were found
    pub fn data_available(&self) -> HarnessResult<bool> {
        Ok(self.corpus_state()?.is_available())
    }

    /// Every vector alone must segment to exactly itself
    pub fn check_isolated(&self) -> HarnessResult<CheckOutcome> {
        self.run_check(CheckKind::Isolated, |corpus| {
            let mut report = CheckReport::new(CheckKind::Isolated);
            for vector in corpus.vectors() {
                let actual = self.segmenter.segment(&vector.string);
                report.compare(vector, None, &[vector.string.as_str()], &actual);
            }
            report
        })
    }

    /// `"A" + vector + "Z"` must segment to `["A", vector, "Z"]`
    pub fn check_embedded(&self) -> HarnessResult<CheckOutcome> {
        self.run_check(CheckKind::Embedded, |corpus| {
            let mut report = CheckReport::new(CheckKind::Embedded);
            for vector in corpus.vectors() {
                let text = format!("{EMBED_PREFIX}{}{EMBED_SUFFIX}", vector.string);
                let actual = self.segmenter.segment(&text);
                report.compare(
                    vector,
                    None,
                    &[EMBED_PREFIX, vector.string.as_str(), EMBED_SUFFIX],
                    &actual,
                );
            }
            report
        })
    }

    /// For each sampled pair, `first + second` must segment to
    /// `[first, second]`
    pub fn check_pairwise(&self) -> HarnessResult<CheckOutcome> {
        self.run_check(CheckKind::Pairwise, |corpus| {
            let mut report = CheckReport::new(CheckKind::Pairwise);
            let pairs = PairSampler::new(corpus.len(), self.config.pair_step, self.config.seed);
            for (i, j) in pairs {
                let (first, second) = (&corpus[i], &corpus[j]);
                log::trace!("pair {} + {}", first.location(), second.location());

                let text = format!("{}{}", first.string, second.string);
                let actual = self.segmenter.segment(&text);
                report.compare(
                    first,
                    Some(second),
                    &[first.string.as_str(), second.string.as_str()],
                    &actual,
                );
            }
            report
        })
    }

    /// Run all three checks in order
    ///
    /// A setup failure aborts the whole run; otherwise every check runs
    /// regardless of the others' results.
    pub fn run_all(&self) -> HarnessResult<SuiteReport> {
        let outcomes = vec![
            self.check_isolated()?,
            self.check_embedded()?,
            self.check_pairwise()?,
        ];
        Ok(SuiteReport { outcomes })
    }

    fn run_check<F>(&self, check: CheckKind, run: F) -> HarnessResult<CheckOutcome>
    where
        F: FnOnce(&Corpus) -> CheckReport,
    {
        match self.corpus_state()? {
            CorpusState::Built(corpus) => {
                let report = run(corpus);
                log::info!(
                    "{check} check: {} checked, {} failed",
                    report.checked,
                    report.failures.len()
                );
                Ok(CheckOutcome::Completed(report))
            }
            CorpusState::Unavailable { missing } => {
                let reason = format!(
                    "Emoji data files not available in {} ({} missing)",
                    self.config.version_dir().display(),
                    missing.len()
                );
                log::warn!("{check} check skipped: {reason}");
                Ok(CheckOutcome::Skipped { check, reason })
            }
        }
    }
}
