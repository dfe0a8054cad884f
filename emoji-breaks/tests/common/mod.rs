//! Shared helpers for the harness integration tests

#![allow(dead_code)]

use emoji_breaks::{DataFile, HarnessConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Number of vectors the fixture set contributes
pub const FIXTURE_VECTORS: usize = 17;

/// Number of fixture lines dropped as malformed or poisoned
pub const FIXTURE_DROPPED: usize = 5;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Root of the bundled emoji 5.0 fixture files
pub fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/emoji")
}

pub fn fixture_config() -> HarnessConfig {
    HarnessConfig::new(fixture_root())
}

/// Copy the fixture set into a temporary data root
pub fn copy_fixtures() -> TempDir {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("5.0");
    fs::create_dir_all(&target).unwrap();
    for file in DataFile::ALL {
        fs::copy(
            fixture_root().join("5.0").join(file.file_name()),
            target.join(file.file_name()),
        )
        .unwrap();
    }
    dir
}

/// Rewrite one copied fixture file
pub fn rewrite(dir: &TempDir, file: DataFile, edit: impl FnOnce(String) -> String) {
    let path = dir.path().join("5.0").join(file.file_name());
    let text = fs::read_to_string(&path).unwrap();
    fs::write(&path, edit(text)).unwrap();
}
