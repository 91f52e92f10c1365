//! Visualization module for the method comparison figure
//!
//! This module provides tools to render solution curves using the `plotters`
//! library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`) and per-curve
//!   style descriptors (`CurveStyle`, `LineStyle`, gradient palette)
//! - **comparison**: The multi-curve comparison plot itself
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use wrm_rs::output::visualization::{plot_comparison, PlotConfig};
//!
//! // Default styling (reference figure)
//! plot_comparison(&domain, &curves, &standard_styles(curves.len()),
//!                 "wr_compare.png", None)?;
//!
//! // Or with a custom config
//! let mut config = PlotConfig::comparison("u'' + u = 1");
//! config.width = 1920;
//! plot_comparison(&domain, &curves, &styles, "custom.png", Some(&config))?;
//! ```
//!
//! The output format follows the file extension: `.svg` renders with the
//! SVG backend, anything else with the bitmap (PNG) backend.

pub mod comparison;
pub mod config;

pub use comparison::plot_comparison;
pub use config::{gradient_color, standard_styles, CurveStyle, LineStyle, PlotConfig};
