//! Output module for comparison results
//!
//! This module renders the five-curve comparison figure using `plotters`.
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── visualization/      ← Plots and graphics
//!     ├── mod.rs
//!     ├── config.rs       ← PlotConfig + per-curve CurveStyle descriptors
//!     └── comparison.rs   ← Multi-curve comparison plot
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use wrm_rs::output::visualization::{plot_comparison, standard_styles};
//!
//! plot_comparison(&domain, &curves, &standard_styles(5), "wr_compare.png", None)?;
//! ```
//!
//! Styling is declarative: each curve carries a `CurveStyle` descriptor
//! (color, width, line style, alpha) consumed uniformly by the renderer, so
//! evaluation logic never touches presentation concerns.

pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{plot_comparison, standard_styles, CurveStyle, LineStyle, PlotConfig};
