//! Entry point: render the reference comparison figure
//!
//! Takes no arguments and reads no environment; runs the pipeline with its
//! documented defaults (L = 1, N = 101, `wr_compare.png`) and exits non-zero
//! with a diagnostic if the figure cannot be written.

use std::error::Error;

use tracing::info;
use wrm_rs::pipeline::{run_comparison, ComparisonConfig};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = ComparisonConfig::default();
    let report = run_comparison(&config)?;

    info!(
        curves = report.curves.len(),
        points = report.domain.len(),
        path = %report.output_path,
        "comparison complete"
    );

    Ok(())
}
