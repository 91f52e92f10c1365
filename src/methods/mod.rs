//! Trial solutions for the model problem u'' + u = 1
//!
//! This module defines the core API for closed-form solution curves:
//! - `TrialSolution`: trait for all solutions (analytical or approximate)
//! - `SolutionCurve`: a named sequence of values, one per domain point
//! - `standard_curves`: the five curves of the reference comparison
//!
//! # The Architecture (WHAT vs WHERE)
//!
//! A `TrialSolution` provides the formula (WHAT to evaluate); the `Domain`
//! provides the grid (WHERE to evaluate). `evaluate_on` joins the two with a
//! pure element-wise map. The formulas have no element-to-element dependency,
//! so evaluation order is irrelevant to the result.
//!
//! # Module Organization
//!
//! - **`analytical`**: The closed-form analytical solution
//! - **`weighted`**: The four weighted-residual approximations, each a
//!   quadratic trial `u(x) = 1 - x + a2 * (x^2 - x)` with a precomputed
//!   coefficient `a2`

use nalgebra::DVector;

use crate::domain::Domain;

pub mod analytical;
pub mod weighted;

pub use analytical::AnalyticalSolution;
pub use weighted::{QuadraticTrial, COLLOCATION_A2, LEAST_SQUARES_A2, PETROV_GALERKIN_A2, SUBDOMAIN_A2};

// =================================================================================================
// Trial Solution Trait
// =================================================================================================

/// Trait for closed-form solutions of the model problem
///
/// # Responsibility
///
/// Evaluates one fixed scalar formula at a single point. Does NOT derive the
/// formula (the weighted-residual derivations were done by hand ahead of
/// time) and does NOT hold any state across evaluations.
///
/// # Purity
///
/// `evaluate_at` must be a pure function of `x`: same input, same output,
/// no side effects. This is what makes element-wise evaluation over a domain
/// order-independent.
pub trait TrialSolution: Send + Sync {
    /// Evaluate the formula at a single domain value
    fn evaluate_at(&self, x: f64) -> f64;

    /// Name of the solution (used for plot legends and logging)
    fn name(&self) -> &str;

    /// Description of the solution (optional)
    fn description(&self) -> Option<&str> {
        None
    }

    /// Evaluate the formula over every point of a domain
    ///
    /// Order-preserving element-wise map; the output curve has exactly one
    /// value per domain point.
    fn evaluate_on(&self, domain: &Domain) -> SolutionCurve {
        let values = DVector::from_iterator(
            domain.len(),
            domain.iter().map(|x| self.evaluate_at(x)),
        );
        SolutionCurve {
            label: self.name().to_string(),
            values,
        }
    }
}

// =================================================================================================
// Solution Curve
// =================================================================================================

/// A named sequence of solution values, one per domain point
///
/// Produced by [`TrialSolution::evaluate_on`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionCurve {
    /// Legend label of the curve
    pub label: String,

    /// Solution values, aligned with the domain that produced them
    pub values: DVector<f64>,
}

impl SolutionCurve {
    /// Number of values in the curve
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the curve holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value in the curve
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest value in the curve
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

// =================================================================================================
// Standard Comparison Set
// =================================================================================================

/// The five curves of the reference comparison, in fixed plotting order
///
/// Analytical solution first, then collocation, subdomain, least squares and
/// Petrov-Galerkin. The order is part of the figure's identity: legend
/// entries and gradient colors are assigned by position.
pub fn standard_curves() -> Vec<Box<dyn TrialSolution>> {
    vec![
        Box::new(AnalyticalSolution::new()),
        Box::new(QuadraticTrial::collocation()),
        Box::new(QuadraticTrial::subdomain()),
        Box::new(QuadraticTrial::least_squares()),
        Box::new(QuadraticTrial::petrov_galerkin()),
    ]
}

// =================================================================================================
// Tests
// =================================================================================================
