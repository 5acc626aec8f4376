//! Image Feature Merger - Main Entry Point

use anyhow::Context;
use feature_merger::{init_logging, run};
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Image Feature Merger v{} ===", env!("CARGO_PKG_VERSION"));

    let report = run()
        .inspect_err(|e| error!("{}", e))
        .context("Feature merge failed")?;
    info!("Output written to {}", report.output.display());

    Ok(())
}
