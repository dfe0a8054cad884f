//! Harness configuration
//!
//! The emoji version is pinned here rather than derived from the segmenter
//! under test. Values can be loaded from a TOML file, and the data root and
//! sampler seed can be overridden from the environment.

use crate::error::{HarnessError, HarnessResult};
use crate::paths;
use emoji_breaks_data::{DataFile, DEFAULT_POISON_WORDS};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// TODO: derive from the segmenter's reported Unicode version once it exposes one
/// Unicode emoji data version the harness validates against
pub const EMOJI_VERSION: &str = "5.0";

/// Seed of the pair sampler
pub const DEFAULT_SEED: u64 = 0;

/// Stride between sampled partners in the pairwise check (a prime)
pub const DEFAULT_PAIR_STEP: usize = 503;

/// Environment variable overriding the data root
pub const DATA_DIR_ENV: &str = "EMOJI_BREAKS_DATA_DIR";

/// Environment variable overriding the sampler seed
pub const SEED_ENV: &str = "EMOJI_BREAKS_SEED";

/// Configuration for a conformance run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Root holding one directory per emoji version
    pub data_dir: PathBuf,
    /// Required `# Version:` banner value
    pub emoji_version: String,
    /// Pair sampler seed
    pub seed: u64,
    /// Pair sampler stride
    pub pair_step: usize,
    /// Words that make a data line fail construction
    pub poison_words: Vec<String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            data_dir: paths::default_data_root(),
            emoji_version: EMOJI_VERSION.to_string(),
            seed: DEFAULT_SEED,
            pair_step: DEFAULT_PAIR_STEP,
            poison_words: DEFAULT_POISON_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl HarnessConfig {
    /// Default configuration rooted at `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Default configuration with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(seed) = env::var(SEED_ENV).ok().and_then(|v| v.trim().parse().ok()) {
            config.seed = seed;
        }
        config
    }

    /// Parse a TOML configuration; absent keys keep their defaults
    pub fn from_toml_str(text: &str) -> HarnessResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file
    ///
    /// A relative `data_dir` is resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> HarnessResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            HarnessError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if config.data_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.data_dir = parent.join(&config.data_dir);
            }
        }
        Ok(config)
    }

    /// Set the sampler seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the sampler stride
    pub fn with_pair_step(mut self, step: usize) -> Self {
        self.pair_step = step;
        self
    }

    /// Set the required emoji version
    pub fn with_emoji_version(mut self, version: impl Into<String>) -> Self {
        self.emoji_version = version.into();
        self
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

    /// Check the configuration for values no run can use
    pub fn validate(&self) -> HarnessResult<()> {
        if self.emoji_version.trim().is_empty() {
            return Err(HarnessError::Config(
                "emoji_version must not be empty".to_string(),
            ));
        }
        if self.pair_step == 0 {
            return Err(HarnessError::Config(
                "pair_step must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Directory holding the data files for the configured version
    pub fn version_dir(&self) -> PathBuf {
        paths::version_dir(&self.data_dir, &self.emoji_version)
    }

    /// Path of one data file for the configured version
    pub fn data_file_path(&self, file: DataFile) -> PathBuf {
        paths::data_file_path(&self.data_dir, &self.emoji_version, file)
    }
}
