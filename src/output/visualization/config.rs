//! Plot configuration and per-curve style descriptors
//!
//! This module defines the configuration consumed by the comparison plot:
//! figure-level settings (`PlotConfig`) and per-curve display metadata
//! (`CurveStyle`), plus the jet-style gradient palette that colors the
//! curves of the reference figure.

use plotters::prelude::*;

// =================================================================================================
// Figure-Level Configuration
// =================================================================================================

/// Configuration for customizing the comparison figure
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `background`: Background color
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// let mut config = PlotConfig::comparison("Weighted residuals vs analytical");
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Weighted Residual Methods")
    pub title: String,

    /// X-axis label (default: "x")
    pub xlabel: String,

    /// Y-axis label (default: "u(x)")
    pub ylabel: String,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Weighted Residual Methods".to_string(),
            xlabel: "x".to_string(),
            ylabel: "u(x)".to_string(),
            background: WHITE,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Create a config for a comparison figure with a custom title
    pub fn comparison(title: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.title = title.into();
        config
    }
}

// =================================================================================================
// Per-Curve Style Descriptors
// =================================================================================================

/// Stroke pattern of a plotted curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Continuous stroke
    Solid,

    /// Long dashes
    Dashed,

    /// Alternating dash and dot (rendered as a short dash pattern)
    DashDot,
}

/// Display metadata for one curve
///
/// A declarative descriptor consumed uniformly by the renderer: the
/// evaluation side never touches colors or stroke widths.
#[derive(Debug, Clone)]
pub struct CurveStyle {
    /// Stroke color
    pub color: RGBColor,

    /// Stroke width in pixels
    pub width: u32,

    /// Stroke pattern
    pub line_style: LineStyle,

    /// Opacity in [0, 1]; 1.0 is fully opaque
    pub alpha: f64,
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self {
            color: BLUE,
            width: 2,
            line_style: LineStyle::Solid,
            alpha: 1.0,
        }
    }
}

impl CurveStyle {
    /// Solid stroke of the given color and width
    pub fn solid(color: RGBColor, width: u32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    /// Set the stroke pattern
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    /// Set the opacity
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

// =================================================================================================
// Gradient Palette
// =================================================================================================

/// Color at position `index` of a jet-style gradient spanning `total` curves
///
/// Piecewise-linear approximation of the classic jet colormap: blue through
/// cyan, green and yellow to red. `index` 0 maps to the blue end, `total - 1`
/// to the red end.
pub fn gradient_color(index: usize, total: usize) -> RGBColor {
    let t = if total <= 1 {
        0.0
    } else {
        index as f64 / (total - 1) as f64
    };

    let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    let r = channel(1.5 - (4.0 * t - 3.0).abs());
    let g = channel(1.5 - (4.0 * t - 2.0).abs());
    let b = channel(1.5 - (4.0 * t - 1.0).abs());

    RGBColor(r, g, b)
}

/// Default styles of the reference figure, one per curve in plotting order
///
/// Matches the reference styling: analytical thin solid, collocation wide
/// and translucent, subdomain wide dashed translucent, least squares thin
/// solid, Petrov-Galerkin dash-dot. Colors walk the jet gradient. For
/// `count` other than five the positional styling does not apply and every
/// curve gets a thin solid stroke with a gradient color.
pub fn standard_styles(count: usize) -> Vec<CurveStyle> {
    (0..count)
        .map(|i| {
            let base = CurveStyle::solid(gradient_color(i, count), 2);
            if count != 5 {
                return base;
            }
            match i {
                1 => CurveStyle {
                    width: 5,
                    ..base.with_alpha(0.5)
                },
                2 => CurveStyle {
                    width: 4,
                    ..base.with_line_style(LineStyle::Dashed).with_alpha(0.5)
                },
                4 => base.with_line_style(LineStyle::DashDot),
                _ => base,
            }
        })
        .collect()
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert_eq!(config.xlabel, "x");
        assert!(config.show_grid);
    }

    #[test]
    fn test_comparison_config_title() {
        let config = PlotConfig::comparison("u'' + u = 1");
        assert_eq!(config.title, "u'' + u = 1");
    }

    #[test]
    fn test_gradient_endpoints() {
        // Jet runs from blue to red
        let first = gradient_color(0, 5);
        let last = gradient_color(4, 5);
        assert!(first.2 > first.0, "gradient start should be blue-dominant");
        assert!(last.0 > last.2, "gradient end should be red-dominant");
    }

    #[test]
    fn test_gradient_single_curve() {
        // Degenerate case must not divide by zero
        let color = gradient_color(0, 1);
        assert_eq!(color, gradient_color(0, 1));
    }

    #[test]
    fn test_standard_styles_shape() {
        let styles = standard_styles(5);
        assert_eq!(styles.len(), 5);

        assert_eq!(styles[0].line_style, LineStyle::Solid);
        assert_eq!(styles[1].width, 5);
        assert!((styles[1].alpha - 0.5).abs() < 1e-12);
        assert_eq!(styles[2].line_style, LineStyle::Dashed);
        assert_eq!(styles[2].width, 4);
        assert_eq!(styles[3].line_style, LineStyle::Solid);
        assert_eq!(styles[4].line_style, LineStyle::DashDot);
    }

    #[test]
    fn test_standard_styles_distinct_colors() {
        let styles = standard_styles(5);
        for i in 0..styles.len() {
            for j in (i + 1)..styles.len() {
                assert_ne!(styles[i].color, styles[j].color);
            }
        }
    }
}
