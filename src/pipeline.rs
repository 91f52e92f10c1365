//! The comparison pipeline
//!
//! A single acyclic pipeline with no branching states:
//!
//! ```text
//! generate domain  →  evaluate five curves  →  render  →  save
//! ```
//!
//! Everything configurable lives in [`ComparisonConfig`] (grid extent, grid
//! size, output path) with documented defaults, so there is no process-wide
//! mutable state. The pipeline runs fully single-threaded and synchronously;
//! at this problem size there is nothing to schedule.
//!
//! # Example
//!
//! ```rust,ignore
//! use wrm_rs::pipeline::{run_comparison, ComparisonConfig};
//!
//! let report = run_comparison(&ComparisonConfig::default())?;
//! assert_eq!(report.curves.len(), 5);
//! ```

use std::error::Error;

use tracing::info;

use crate::domain::{Domain, DEFAULT_LENGTH, DEFAULT_SAMPLES};
use crate::methods::{standard_curves, SolutionCurve};
use crate::output::visualization::{plot_comparison, standard_styles};

// =================================================================================================
// Configuration
// =================================================================================================

/// Parameters of one comparison run
///
/// # Fields
///
/// - `length`: Extent L of the domain [0, L] (default: 1.0)
/// - `samples`: Number of grid points N (default: 101)
/// - `output_path`: Where the figure is written (default: "wr_compare.png");
///   an existing file is overwritten
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    /// Domain extent L
    pub length: f64,

    /// Number of grid points N
    pub samples: usize,

    /// Output image path; format follows the extension (PNG or SVG)
    pub output_path: String,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            samples: DEFAULT_SAMPLES,
            output_path: "wr_compare.png".to_string(),
        }
    }
}

// =================================================================================================
// Report
// =================================================================================================

/// Numeric outcome of a comparison run
///
/// Carries the domain and the evaluated curves so callers can inspect the
/// numbers behind the figure after the artifact is written. The curves are
/// deterministic: two runs with identical parameters produce bit-identical
/// values.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    /// The grid every curve was evaluated on
    pub domain: Domain,

    /// The five curves, analytical first
    pub curves: Vec<SolutionCurve>,

    /// Path of the written figure
    pub output_path: String,
}

// =================================================================================================
// Pipeline
// =================================================================================================

/// Run the full pipeline: generate, evaluate, render, save
///
/// # Errors
///
/// Only the rendering stage can fail (unwritable path, backend error); any
/// such error propagates immediately with no retry and no cleanup of a
/// partially written file.
pub fn run_comparison(config: &ComparisonConfig) -> Result<ComparisonReport, Box<dyn Error>> {
    let domain = Domain::uniform(config.length, config.samples);
    info!(
        samples = domain.len(),
        length = domain.length(),
        "domain generated"
    );

    let curves: Vec<SolutionCurve> = standard_curves()
        .iter()
        .map(|method| method.evaluate_on(&domain))
        .collect();
    info!(curves = curves.len(), "curves evaluated");

    let styles = standard_styles(curves.len());
    plot_comparison(&domain, &curves, &styles, &config.output_path, None)?;
    info!(path = %config.output_path, "figure written");

    Ok(ComparisonReport {
        domain,
        curves,
        output_path: config.output_path.clone(),
    })
}

// =================================================================================================
// Tests
// =================================================================================================
