//! Multi-curve comparison plotting
//!
//! This module draws every solution curve against the shared domain on one
//! set of axes, attaches a legend, and writes the figure to disk.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wrm_rs::output::visualization::{plot_comparison, standard_styles};
//!
//! let curves: Vec<_> = standard_curves()
//!     .iter()
//!     .map(|m| m.evaluate_on(&domain))
//!     .collect();
//!
//! plot_comparison(&domain, &curves, &standard_styles(curves.len()),
//!                 "wr_compare.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{CurveStyle, LineStyle, PlotConfig};
use crate::domain::Domain;
use crate::methods::SolutionCurve;

// =================================================================================================
// Core Plotting Function
// =================================================================================================

/// Plot all curves over the shared domain and save the figure
///
/// Draws one line series per curve, styled by the matching `CurveStyle`
/// descriptor, with a legend mapping label to stroke. An existing file at
/// `output_path` is overwritten without confirmation.
///
/// # Arguments
///
/// * `domain` - Shared x-axis grid
/// * `curves` - Solution curves, each aligned with `domain`
/// * `styles` - One style descriptor per curve, in curve order
/// * `output_path` - Path to save the plot (PNG or SVG, by extension)
/// * `config` - Optional figure-level configuration
///
/// # Errors
///
/// Returns an error when no curves are given, when curve/style/domain
/// lengths disagree, or when the backend fails to draw or write the file.
/// Errors propagate immediately; there is no retry and no partial-output
/// cleanup.
pub fn plot_comparison(
    domain: &Domain,
    curves: &[SolutionCurve],
    styles: &[CurveStyle],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if curves.is_empty() {
        return Err("No curves provided".into());
    }
    if styles.len() != curves.len() {
        return Err(format!(
            "Style count mismatch: {} curves but {} styles",
            curves.len(),
            styles.len()
        )
        .into());
    }
    for curve in curves {
        if curve.len() != domain.len() {
            return Err(format!(
                "Curve '{}' has {} values for a domain of {} points",
                curve.label,
                curve.len(),
                domain.len()
            )
            .into());
        }
    }

    // Create default config if needed (avoid temporary value)
    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    // Determine plot range from the data, with headroom
    let y_min = curves.iter().map(SolutionCurve::min).fold(f64::INFINITY, f64::min);
    let y_max = curves
        .iter()
        .map(SolutionCurve::max)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = (y_max - y_min).max(1e-10);
    let y_range = (y_min - 0.05 * span)..(y_max + 0.05 * span);

    // Determine backend and plot
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, domain, curves, styles, config, y_range)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, domain, curves, styles, config, y_range)
        }
    }
}

/// Implementation for comparison plotting with concrete backend
fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    domain: &Domain,
    curves: &[SolutionCurve],
    styles: &[CurveStyle],
    config: &PlotConfig,
    y_range: std::ops::Range<f64>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..domain.length(), y_range)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.2}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    for (curve, style) in curves.iter().zip(styles.iter()) {
        let stroke = ShapeStyle::from(&style.color.mix(style.alpha)).stroke_width(style.width);
        let points: Vec<(f64, f64)> = domain
            .iter()
            .zip(curve.values.iter())
            .map(|(x, &y)| (x, y))
            .collect();

        let series = match style.line_style {
            LineStyle::Solid => chart.draw_series(LineSeries::new(points, stroke))?,
            LineStyle::Dashed => {
                chart.draw_series(DashedLineSeries::new(points, 10, 6, stroke))?
            }
            // No native dash-dot stroke; a tight dash pattern reads the same
            LineStyle::DashDot => {
                chart.draw_series(DashedLineSeries::new(points, 4, 6, stroke))?
            }
        };

        series.label(&curve.label).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], stroke)
        });
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
