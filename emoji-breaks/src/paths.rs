//! Path resolution for the emoji data files
//!
//! Files live at `<root>/<version>/<name>.txt`.

use crate::config::DATA_DIR_ENV;
use emoji_breaks_data::DataFile;
use std::env;
use std::path::{Path, PathBuf};

/// Data root relative to a workspace root
const DATA_SUBDIR: &str = "data/emoji";

/// Locate the emoji data root
///
/// Uses the environment override when set, otherwise the nearest
/// `data/emoji` directory above the current directory or the crate
/// manifest, falling back to the relative path `data/emoji`.
pub fn default_data_root() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    if let Some(found) = env::current_dir().ok().and_then(|d| find_data_root(&d)) {
        return found;
    }

    if let Some(found) = env::var("CARGO_MANIFEST_DIR")
        .ok()
        .and_then(|d| find_data_root(Path::new(&d)))
    {
        return found;
    }

    PathBuf::from(DATA_SUBDIR)
}

/// Nearest `data/emoji` directory at or above `start`
pub fn find_data_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DATA_SUBDIR))
        .find(|candidate| candidate.is_dir())
}

/// Directory for one emoji version
pub fn version_dir(root: &Path, version: &str) -> PathBuf {
    root.join(version)
}

/// Path of one data file
pub fn data_file_path(root: &Path, version: &str, file: DataFile) -> PathBuf {
    version_dir(root, version).join(file.file_name())
}

/// Paths of the required files that do not exist, in corpus order
pub fn missing_files(root: &Path, version: &str) -> Vec<PathBuf> {
    DataFile::ALL
        .iter()
        .map(|&file| data_file_path(root, version, file))
        .filter(|path| !path.is_file())
        .collect()
}

/// Whether every required file exists
pub fn data_files_available(root: &Path, version: &str) -> bool {
    missing_files(root, version).is_empty()
}
