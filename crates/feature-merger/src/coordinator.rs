//! Merge Coordinator
//!
//! Loads the base feature files, then the optional Haralick and Haar-like
//! groups, concatenates everything by row position and writes the result.

use crate::config::MergeConfig;
use crate::error::MergeError;
use feature_table::{
    concat_columns, discover_csv_files, load_table, write_table, FeatureTable, LoadOutcome,
    SourceGroup,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// File the merged table was written to
    pub output: PathBuf,
    /// Files that contributed a table
    pub files_loaded: usize,
    /// Files skipped as empty or unreadable
    pub files_skipped: usize,
    /// Rows in the merged table
    pub rows: usize,
    /// Columns in the merged table
    pub columns: usize,
}

/// Runs one merge over the configured directories
pub struct MergeCoordinator {
    config: MergeConfig,
    /// Tables in load order
    tables: Vec<FeatureTable>,
    files_loaded: usize,
    files_skipped: usize,
}

impl MergeCoordinator {
    /// Create a coordinator for the given configuration
    pub fn new(config: MergeConfig) -> Self {
        Self {
            config,
            tables: Vec::new(),
            files_loaded: 0,
            files_skipped: 0,
        }
    }

    /// Run the merge and write the output file
    pub fn run(mut self) -> Result<MergeReport, MergeError> {
        let base_dir = self.config.base_dir();
        let base_files = discover_csv_files(&base_dir).map_err(MergeError::BaseDirectory)?;
        if base_files.is_empty() {
            warn!("No CSV files found in {}", base_dir.display());
        }
        self.load_files(&base_files, SourceGroup::Base);

        if self.config.merge_haralick {
            let dir = self.config.haralick_dir();
            self.load_optional_group(&dir, SourceGroup::Haralick);
        }

        if self.config.merge_haar {
            let dir = self.config.haar_dir();
            self.load_optional_group(&dir, SourceGroup::Haar);
        }

        if self.tables.is_empty() {
            return Err(MergeError::NoTables);
        }

        info!("Saving final dataset...");
        let merged = concat_columns(&self.tables);
        let output = self.config.output_path();
        write_table(&merged, &output).map_err(MergeError::Output)?;

        let report = MergeReport {
            output,
            files_loaded: self.files_loaded,
            files_skipped: self.files_skipped,
            rows: merged.height(),
            columns: merged.width(),
        };
        info!(
            "CSV files merged successfully: {} files merged, {} skipped, {} rows x {} columns -> {}",
            report.files_loaded,
            report.files_skipped,
            report.rows,
            report.columns,
            report.output.display()
        );
        Ok(report)
    }

    /// Load an optional group; a missing directory skips the group
    fn load_optional_group(&mut self, dir: &Path, group: SourceGroup) {
        if !dir.is_dir() {
            info!("No directory found for {} features", group.label());
            return;
        }

        match discover_csv_files(dir) {
            Ok(files) => {
                info!("Merging {} files...", group.label());
                self.load_files(&files, group);
            }
            Err(e) => warn!("Skipping {} features: {}", group.label(), e),
        }
    }

    fn load_files(&mut self, files: &[PathBuf], group: SourceGroup) {
        for path in files {
            match group {
                SourceGroup::Base => info!("Merging: {}", path.display()),
                _ => info!("\tAdding: {}", path.display()),
            }

            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            match load_table(path, group) {
                Ok(LoadOutcome::Loaded(table)) => {
                    self.tables.push(table);
                    self.files_loaded += 1;
                }
                Ok(LoadOutcome::Empty) => {
                    info!("The file {} is empty. Skipping.", name);
                    self.files_skipped += 1;
                }
                Err(e) => {
                    warn!("Error reading file {}: {}", name, e);
                    self.files_skipped += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BASE_DIR, HAAR_DIR, HARALICK_DIR};
    use feature_table::read_table;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn workspace(files: &[(&str, &str, &str)]) -> TempDir {
        let root = tempdir().unwrap();
        for (dir, name, content) in files {
            let dir = root.path().join(dir);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(name), content).unwrap();
        }
        root
    }

    fn config(root: &Path, merge_haralick: bool, merge_haar: bool) -> MergeConfig {
        MergeConfig {
            root: root.to_path_buf(),
            merge_haralick,
            merge_haar,
        }
    }

    #[test]
    fn test_base_only_merge() {
        let root = workspace(&[
            (BASE_DIR, "img2.csv", "a,c\n5,6\n7,8\n"),
            (BASE_DIR, "img1.csv", "a,b\n1,2\n3,4\n"),
        ]);

        let report = MergeCoordinator::new(config(root.path(), false, false))
            .run()
            .unwrap();

        assert_eq!(report.output, root.path().join("2kyr_new_AllColumns.csv"));
        assert_eq!(report.files_loaded, 2);
        assert_eq!((report.rows, report.columns), (2, 4));

        let merged = read_table(&report.output).unwrap();
        assert_eq!(merged.headers(), ["img1_a", "img1_b", "img2_a", "img2_c"]);
        assert_eq!(merged.rows(), [vec!["1", "2", "5", "6"], vec!["3", "4", "7", "8"]]);
    }

    #[test]
    fn test_haralick_columns_use_stripped_stem() {
        let root = workspace(&[
            (BASE_DIR, "sample1.csv", "a\n1\n"),
            (HARALICK_DIR, "sample1_haralick.csv", "contrast\n0.5\n"),
        ]);

        let report = MergeCoordinator::new(config(root.path(), true, false))
            .run()
            .unwrap();

        assert!(report
            .output
            .ends_with("2kyr_new_AllColumns_onlyHaralick.csv"));
        let merged = read_table(&report.output).unwrap();
        assert_eq!(merged.headers(), ["sample1_a", "sample1_contrast"]);
    }

    #[test]
    fn test_group_order_base_haralick_haar() {
        let root = workspace(&[
            (HAAR_DIR, "s_haar.csv", "h\n3\n"),
            (HARALICK_DIR, "s_haralick.csv", "t\n2\n"),
            (BASE_DIR, "s.csv", "b\n1\n"),
        ]);

        let report = MergeCoordinator::new(config(root.path(), true, true))
            .run()
            .unwrap();

        assert!(report.output.ends_with("2kyr_new_AllColumns_imgfeatures.csv"));
        let merged = read_table(&report.output).unwrap();
        assert_eq!(merged.headers(), ["s_b", "s_t", "s_h"]);
        assert_eq!(merged.rows()[0], ["1", "2", "3"]);
    }

    #[test]
    fn test_disabled_group_is_ignored() {
        let root = workspace(&[
            (BASE_DIR, "s.csv", "b\n1\n"),
            (HAAR_DIR, "s_haar.csv", "h\n3\n"),
        ]);

        let report = MergeCoordinator::new(config(root.path(), false, false))
            .run()
            .unwrap();
        assert_eq!(report.columns, 1);
    }

    #[test]
    fn test_missing_optional_directories_are_skipped() {
        let root = workspace(&[(BASE_DIR, "s.csv", "b\n1\n")]);

        let report = MergeCoordinator::new(config(root.path(), true, true))
            .run()
            .unwrap();
        assert_eq!(report.files_loaded, 1);
        assert_eq!(report.columns, 1);
    }

    #[test]
    fn test_missing_base_directory_is_fatal() {
        let root = tempdir().unwrap();
        let result = MergeCoordinator::new(config(root.path(), false, false)).run();
        assert!(matches!(result, Err(MergeError::BaseDirectory(_))));
    }

    #[test]
    fn test_no_csv_files_writes_nothing() {
        let root = workspace(&[(BASE_DIR, "readme.txt", "not a table")]);
        let cfg = config(root.path(), false, false);
        let output = cfg.output_path();

        let result = MergeCoordinator::new(cfg).run();
        assert!(matches!(result, Err(MergeError::NoTables)));
        assert!(!output.exists());
    }

    #[test]
    fn test_empty_and_malformed_files_are_skipped() {
        let root = workspace(&[
            (BASE_DIR, "a_empty.csv", "x,y\n"),
            (BASE_DIR, "b_bad.csv", "x\n1,2\n"),
            (BASE_DIR, "c_good.csv", "x\n1\n"),
            (HARALICK_DIR, "c_haralick.csv", "t\n"),
        ]);

        let report = MergeCoordinator::new(config(root.path(), true, false))
            .run()
            .unwrap();
        assert_eq!(report.files_loaded, 1);
        assert_eq!(report.files_skipped, 3);

        let merged = read_table(&report.output).unwrap();
        assert_eq!(merged.headers(), ["c_good_x"]);
    }

    #[test]
    fn test_mismatched_row_counts_are_padded() {
        let root = workspace(&[
            (BASE_DIR, "a.csv", "x\n1\n2\n3\n"),
            (BASE_DIR, "b.csv", "y\n9\n"),
        ]);

        let report = MergeCoordinator::new(config(root.path(), false, false))
            .run()
            .unwrap();
        assert_eq!(report.rows, 3);

        let merged = read_table(&report.output).unwrap();
        assert_eq!(merged.rows(), [vec!["1", "9"], vec!["2", ""], vec!["3", ""]]);
    }
}
