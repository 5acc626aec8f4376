//! Merge configuration

use ::config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the primary per-sample feature files
pub const BASE_DIR: &str = "2kyr_new";

/// Directory holding `<stem>_haralick.csv` files
pub const HARALICK_DIR: &str = "haralick_files";

/// Directory holding `<stem>_haar.csv` files
pub const HAAR_DIR: &str = "haar_files";

/// Optional overlay read from the working directory
pub const CONFIG_FILE: &str = "feature-merger.toml";

/// Merge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Working directory the fixed directories are resolved against,
    /// and where the output is written
    #[serde(skip)]
    pub root: PathBuf,

    /// Include Haralick texture files
    pub merge_haralick: bool,

    /// Include Haar-like feature files
    pub merge_haar: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            merge_haralick: true,
            merge_haar: false,
        }
    }
}

impl MergeConfig {
    /// Load from the current directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Defaults, overridden by `feature-merger.toml` under `root` if present.
    /// Only the two switches can be overridden.
    pub fn load_from(root: &Path) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut config: Self = Config::builder()
            .set_default("merge_haralick", defaults.merge_haralick)?
            .set_default("merge_haar", defaults.merge_haar)?
            .add_source(File::from(root.join(CONFIG_FILE)).required(false))
            .build()?
            .try_deserialize()?;

        config.root = root.to_path_buf();
        Ok(config)
    }

    /// Base directory path
    pub fn base_dir(&self) -> PathBuf {
        self.root.join(BASE_DIR)
    }

    /// Haralick directory path
    pub fn haralick_dir(&self) -> PathBuf {
        self.root.join(HARALICK_DIR)
    }

    /// Haar-like directory path
    pub fn haar_dir(&self) -> PathBuf {
        self.root.join(HAAR_DIR)
    }

    /// Output file: `<base dir><suffix>.csv` in the working directory
    pub fn output_path(&self) -> PathBuf {
        let suffix = output_suffix(self.merge_haralick, self.merge_haar);
        self.root.join(format!("{BASE_DIR}{suffix}.csv"))
    }
}

/// Output filename suffix for the included feature groups
pub fn output_suffix(merge_haralick: bool, merge_haar: bool) -> &'static str {
    match (merge_haralick, merge_haar) {
        (true, true) => "_AllColumns_imgfeatures",
        (true, false) => "_AllColumns_onlyHaralick",
        (false, true) => "_AllColumns_onlyHaar",
        (false, false) => "_AllColumns",
    }
}
