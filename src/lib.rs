//! wrm-rs: Weighted-Residual Method Comparison
//!
//! A small framework for comparing classical weighted-residual approximations
//! of the model boundary-value problem
//!
//! ```text
//! u'' + u = 1,    u(0) = 1,   u(1) = 0
//! ```
//!
//! against its analytical solution. Four methods are compared: collocation,
//! subdomain, least squares and Petrov-Galerkin. Each method was reduced by
//! hand to a one-parameter quadratic trial function
//!
//! ```text
//! u(x) = 1 - x + a2 * (x^2 - x)
//! ```
//!
//! so the crate carries no solver machinery: only the resulting closed-form
//! coefficients remain, and the whole computation is the element-wise
//! evaluation of five scalar formulas over a shared uniform grid, followed by
//! a single comparison plot written to disk.
//!
//! # Architecture
//!
//! wrm-rs separates three concerns:
//!
//! 1. **Domain** (`domain`) - WHERE to evaluate
//!    - Uniform grid over [0, L], immutable after construction
//!
//! 2. **Trial solutions** (`methods`) - WHAT to evaluate
//!    - `TrialSolution` trait: one closed-form scalar formula per method
//!    - Evaluation is a pure, order-preserving element-wise map
//!
//! 3. **Rendering** (`output`) - HOW to present
//!    - Declarative per-curve style descriptors consumed uniformly
//!    - PNG/SVG backends via `plotters`
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use wrm_rs::pipeline::{run_comparison, ComparisonConfig};
//!
//! let report = run_comparison(&ComparisonConfig::default())?;
//! println!("wrote {} curves to {}", report.curves.len(), report.output_path);
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Uniform evaluation grid
//! - [`methods`]: Analytical and weighted-residual trial solutions
//! - [`output`]: Comparison plot rendering
//! - [`pipeline`]: The generate -> evaluate -> render -> save pipeline

pub mod domain;
pub mod methods;
pub mod output;
pub mod pipeline;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use wrm_rs::prelude::*;
    //! ```
    pub use crate::domain::Domain;
    pub use crate::methods::{standard_curves, SolutionCurve, TrialSolution};
    pub use crate::output::visualization::{plot_comparison, CurveStyle, LineStyle, PlotConfig};
    pub use crate::pipeline::{run_comparison, ComparisonConfig, ComparisonReport};
}
