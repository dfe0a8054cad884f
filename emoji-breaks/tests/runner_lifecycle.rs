//! Corpus setup states and caching behaviour of the conformance runner

#![cfg(feature = "unicode-segmentation")]

mod common;

use common::*;
use emoji_breaks::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// Counts segment calls and splits on code points
#[derive(Default)]
struct CountingSegmenter {
    calls: AtomicUsize,
}

impl Segmenter for CountingSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        text.char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect()
    }
}

#[test]
fn test_missing_file_skips_every_check() {
    init_logging();
    let dir = copy_fixtures();
    std::fs::remove_file(dir.path().join("5.0/emoji-variation-sequences.txt")).unwrap();

    let segmenter = CountingSegmenter::default();
    let runner = ConformanceRunner::new(&segmenter, HarnessConfig::new(dir.path()));

    assert!(!runner.data_available().unwrap());
    match runner.corpus_state().unwrap() {
        CorpusState::Unavailable { missing } => {
            assert_eq!(missing, &vec![dir.path().join("5.0/emoji-variation-sequences.txt")]);
        }
        CorpusState::Built(_) => panic!("Expected unavailable data"),
    }

    let report = runner.run_all().unwrap();
    assert!(report.is_skipped());
    assert!(report.passed());
    assert_eq!(report.outcomes.len(), 3);
    for (outcome, check) in report.outcomes.iter().zip(CheckKind::ALL) {
        assert_eq!(outcome.check(), check);
        assert!(outcome.to_string().contains("Emoji data files not available"));
    }
    assert_eq!(segmenter.calls.load(Ordering::Relaxed), 0);
}

#[test]
fn test_missing_file_skips_even_if_others_are_broken() {
    // Availability is decided before any file is parsed
    let dir = copy_fixtures();
    rewrite(&dir, DataFile::Sequences, |text| {
        text.replace("# emoji-sequences.txt", "# wrong-name.txt")
    });
    std::fs::remove_file(dir.path().join("5.0/emoji-zwj-sequences.txt")).unwrap();

    let runner = ConformanceRunner::new(UnicodeGraphemes, HarnessConfig::new(dir.path()));
    assert!(runner.check_isolated().unwrap().is_skipped());
}

#[test]
fn test_name_mismatch_fails_every_check() {
    let dir = copy_fixtures();
    rewrite(&dir, DataFile::Test, |text| {
        text.replacen("# emoji-test.txt", "# wrong-name.txt", 1)
    });

    let segmenter = CountingSegmenter::default();
    let runner = ConformanceRunner::new(&segmenter, HarnessConfig::new(dir.path()));

    for result in [
        runner.check_isolated(),
        runner.check_embedded(),
        runner.check_pairwise(),
    ] {
        match result {
            Err(HarnessError::Data(DataError::FileNameMismatch { file, found, .. })) => {
                assert_eq!(file, "emoji-test");
                assert_eq!(found, "# wrong-name.txt");
            }
            other => panic!("Expected name mismatch, got {other:?}"),
        }
    }
    assert!(runner.run_all().is_err());
    assert_eq!(segmenter.calls.load(Ordering::Relaxed), 0);
}

#[test]
fn test_version_mismatch_is_fatal() {
    let dir = copy_fixtures();
    rewrite(&dir, DataFile::ZwjSequences, |text| {
        text.replace("# Version: 5.0", "# Version: 4.0")
    });

    let runner = ConformanceRunner::new(UnicodeGraphemes, HarnessConfig::new(dir.path()));
    let err = runner.run_all().unwrap_err();
    assert_eq!(
        err,
        HarnessError::Data(DataError::FileVersionMismatch {
            file: "emoji-zwj-sequences".to_string(),
            expected: "5.0".to_string(),
        })
    );
    assert!(err.to_string().starts_with("File Version Mismatch"));
}

#[test]
fn test_configured_version_selects_directory() {
    let runner = ConformanceRunner::new(
        UnicodeGraphemes,
        fixture_config().with_emoji_version("11.0"),
    );
    // No 11.0 directory exists among the fixtures
    assert!(runner.check_embedded().unwrap().is_skipped());
}

#[test]
fn test_corpus_is_built_once() {
    let dir = copy_fixtures();
    let runner = ConformanceRunner::new(UnicodeGraphemes, HarnessConfig::new(dir.path()));

    let first = runner.corpus_state().unwrap() as *const CorpusState;

    // Later changes on disk are not observed
    rewrite(&dir, DataFile::Test, |_| String::new());
    let second = runner.corpus_state().unwrap() as *const CorpusState;

    assert_eq!(first, second);
    assert!(runner.run_all().unwrap().passed());
}

#[test]
fn test_concurrent_first_access() {
    let runner = ConformanceRunner::new(UnicodeGraphemes, fixture_config());

    let states: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| runner.corpus_state().unwrap() as *const CorpusState as usize))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(states.windows(2).all(|w| w[0] == w[1]));

    let outcomes: Vec<CheckOutcome> = thread::scope(|scope| {
        let isolated = scope.spawn(|| runner.check_isolated().unwrap());
        let embedded = scope.spawn(|| runner.check_embedded().unwrap());
        let pairwise = scope.spawn(|| runner.check_pairwise().unwrap());
        vec![
            isolated.join().unwrap(),
            embedded.join().unwrap(),
            pairwise.join().unwrap(),
        ]
    });
    assert!(outcomes.iter().all(CheckOutcome::passed));
}

#[test]
fn test_pairwise_sampling_is_reproducible() {
    let segmenter = CountingSegmenter::default();
    let config = fixture_config().with_pair_step(5).with_seed(11);

    let first = ConformanceRunner::new(&segmenter, config.clone())
        .check_pairwise()
        .unwrap();
    let second = ConformanceRunner::new(&segmenter, config)
        .check_pairwise()
        .unwrap();

    // Code point splitting fails multi-code-point vectors, so the failure
    // lists identify the sampled pairs
    assert_eq!(first, second);
    assert!(!first.failures().is_empty());

    let expected_pairs = PairSampler::new(FIXTURE_VECTORS, 5, 11).count();
    assert_eq!(first.report().unwrap().checked, expected_pairs);
}

#[test]
fn test_custom_poison_words_change_corpus() {
    let runner = ConformanceRunner::new(
        UnicodeGraphemes,
        fixture_config().with_poison_words(["Japan", "HEART"]),
    );
    let state = runner.corpus_state().unwrap();
    let corpus = state.corpus().unwrap();

    // genie, zombie and wrestling lines return; Japan and both hearts leave
    assert_eq!(corpus.len(), FIXTURE_VECTORS + 3 - 3);
    assert!(corpus.vectors().iter().any(|v| v.shortname == "zombie"));
    assert!(corpus.vectors().iter().all(|v| v.shortname != "Japan"));
    assert!(runner.check_isolated().unwrap().passed());
}
