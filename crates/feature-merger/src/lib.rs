//! Image Feature Merger
//!
//! Merges the per-sample feature CSVs of `2kyr_new/` with the optional
//! Haralick and Haar-like feature files into one wide table.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub mod config;
mod coordinator;
mod error;

pub use crate::config::{output_suffix, MergeConfig};
pub use coordinator::{MergeCoordinator, MergeReport};
pub use error::MergeError;

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Tracing subscriber already installed");
    }
}

/// Load configuration and run one merge
pub fn run() -> Result<MergeReport, MergeError> {
    let config = MergeConfig::load()?;
    tracing::info!(
        "Merging features (haralick: {}, haar: {})",
        config.merge_haralick,
        config.merge_haar
    );
    MergeCoordinator::new(config).run()
}
